use serde::Deserialize;

/// A catalog episode. Immutable once fetched; `characters` holds the
/// reference URLs the detail pane resolves on selection.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    /// Episode code, e.g. "S01E01".
    pub episode: String,
    pub air_date: String,
    pub characters: Vec<String>,
}

/// Pagination metadata attached to every episode page. The wire envelope
/// also carries `pages` and `prev`; only what the feed consumes is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub next: Option<String>,
}

/// One page of the episode listing, consumed once by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodePage {
    pub info: PageInfo,
    pub results: Vec<Episode>,
}

/// A catalog character. The API carries more fields (status, species,
/// location, ...); serde drops everything the app does not render.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_page_decodes_with_extra_fields() {
        let body = r#"{
            "info": { "count": 51, "pages": 3, "next": "https://example.test/api/episode?page=2", "prev": null },
            "results": [
                {
                    "id": 1,
                    "name": "Pilot",
                    "air_date": "December 2, 2013",
                    "episode": "S01E01",
                    "characters": [
                        "https://example.test/api/character/1",
                        "https://example.test/api/character/2"
                    ],
                    "url": "https://example.test/api/episode/1",
                    "created": "2017-11-10T12:56:33.798Z"
                }
            ]
        }"#;

        let page: EpisodePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.info.count, 51);
        assert!(page.info.next.is_some());
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 1);
        assert_eq!(page.results[0].episode, "S01E01");
        assert_eq!(page.results[0].characters.len(), 2);
    }

    #[test]
    fn last_page_has_null_next() {
        let body = r#"{
            "info": { "count": 51, "pages": 3, "next": null, "prev": "https://example.test/api/episode?page=2" },
            "results": []
        }"#;

        let page: EpisodePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.info.count, 51);
        assert!(page.info.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn character_decodes_dropping_unused_fields() {
        let body = r#"{
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "image": "https://example.test/api/character/avatar/2.jpeg",
            "episode": ["https://example.test/api/episode/1"],
            "url": "https://example.test/api/character/2"
        }"#;

        let character: Character = serde_json::from_str(body).unwrap();
        assert_eq!(character.id, 2);
        assert_eq!(character.name, "Morty Smith");
        assert!(character.image.ends_with("2.jpeg"));
    }
}
