use futures::future::try_join_all;

use crate::catalog::Catalog;
use crate::error::{Result, SquanchError};
use crate::types::Character;

/// Extract the character id from its canonical resource URL, e.g.
/// `https://rickandmortyapi.com/api/character/183` gives 183.
pub fn character_id(url: &str) -> Result<u64> {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| SquanchError::CharacterRef(url.to_string()))
}

/// Fetch every referenced character concurrently, preserving input order.
///
/// All URLs are parsed up front, so a malformed reference aborts before
/// any request is made. A single fetch failure fails the whole batch;
/// partial casts are never returned.
pub async fn characters(catalog: &dyn Catalog, urls: &[String]) -> Result<Vec<Character>> {
    let ids = urls
        .iter()
        .map(|url| character_id(url))
        .collect::<Result<Vec<_>>>()?;

    try_join_all(ids.into_iter().map(|id| catalog.character(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::types::EpisodePage;

    #[derive(Debug, Default)]
    struct FakeCatalog {
        slow_id: Option<u64>,
        fail_id: Option<u64>,
        calls: Mutex<Vec<u64>>,
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn episode_page(&self, _page: u32) -> Result<EpisodePage> {
            unimplemented!("episode pages are not fetched through the resolver")
        }

        async fn character(&self, id: u64) -> Result<Character> {
            self.calls.lock().unwrap().push(id);
            if self.slow_id == Some(id) {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            if self.fail_id == Some(id) {
                return Err(SquanchError::Http(reqwest::StatusCode::NOT_FOUND));
            }
            Ok(Character {
                id,
                name: format!("Character {id}"),
                image: format!("https://example.test/avatar/{id}.jpeg"),
            })
        }
    }

    fn urls(ids: &[u64]) -> Vec<String> {
        ids.iter()
            .map(|id| format!("https://example.test/api/character/{id}"))
            .collect()
    }

    #[test]
    fn id_comes_from_the_last_path_segment() {
        let id = character_id("https://example.test/api/character/183").unwrap();
        assert_eq!(id, 183);
    }

    #[test]
    fn trailing_slash_is_rejected() {
        let err = character_id("https://example.test/api/character/").unwrap_err();
        assert!(matches!(err, SquanchError::CharacterRef(_)));
    }

    #[test]
    fn non_numeric_segment_is_rejected() {
        assert!(character_id("https://example.test/api/character/rick").is_err());
    }

    #[tokio::test]
    async fn results_keep_input_order_despite_uneven_latency() {
        let catalog = FakeCatalog {
            slow_id: Some(3),
            ..Default::default()
        };

        let cast = characters(&catalog, &urls(&[3, 1, 2])).await.unwrap();

        let ids: Vec<u64> = cast.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_batch() {
        let catalog = FakeCatalog {
            fail_id: Some(2),
            ..Default::default()
        };

        assert!(characters(&catalog, &urls(&[1, 2, 3])).await.is_err());
    }

    #[tokio::test]
    async fn malformed_reference_aborts_before_any_fetch() {
        let catalog = FakeCatalog::default();
        let refs = vec![
            "https://example.test/api/character/1".to_string(),
            "https://example.test/api/character/".to_string(),
        ];

        let err = characters(&catalog, &refs).await.unwrap_err();

        assert!(matches!(err, SquanchError::CharacterRef(_)));
        assert!(catalog.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_cast_resolves_without_fetching() {
        let catalog = FakeCatalog::default();
        let cast = characters(&catalog, &[]).await.unwrap();
        assert!(cast.is_empty());
        assert!(catalog.calls.lock().unwrap().is_empty());
    }
}
