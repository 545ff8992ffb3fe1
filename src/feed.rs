use std::sync::Arc;

use crate::notify::{NoticeKind, Notifier};
use crate::types::{Episode, EpisodePage};

pub const END_OF_LIST: &str = "You have reached the end of the episode list";
pub const LOAD_FAILED: &str = "Failed to load episodes";
pub const LOAD_MORE_FAILED: &str = "Failed to load more episodes";

/// Lifecycle of the episode feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Loaded,
    Exhausted,
    Errored,
}

/// A page fetch the feed expects. `seq` ties the eventual completion back
/// to this request so results from an abandoned root fetch are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub seq: u64,
}

/// The accumulated episode list plus the pagination state machine around it.
///
/// At most one page fetch is in flight; `load_next` refuses to start a
/// second. `has_more` follows the server's `next` cursor and only returns
/// to `true` through a new root fetch (`start`).
pub struct EpisodeFeed {
    episodes: Vec<Episode>,
    current_page: u32,
    has_more: bool,
    phase: FeedPhase,
    error: Option<String>,
    total: Option<u32>,
    seq: u64,
    in_flight: Option<PageRequest>,
    notifier: Arc<dyn Notifier>,
}

impl EpisodeFeed {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            episodes: Vec::new(),
            current_page: 0,
            has_more: true,
            phase: FeedPhase::Idle,
            error: None,
            total: None,
            seq: 0,
            in_flight: None,
            notifier,
        }
    }

    /// Root fetch: request page 1, replacing the accumulated list once the
    /// page lands. Any fetch still in flight is abandoned by the sequence
    /// bump. Also serves refresh.
    pub fn start(&mut self) -> PageRequest {
        self.seq += 1;
        self.has_more = true;
        self.phase = FeedPhase::Loading;
        let request = PageRequest {
            page: 1,
            seq: self.seq,
        };
        self.in_flight = Some(request);
        request
    }

    /// Request the page after the last applied one. Returns `None` unless
    /// the feed is `Loaded` with more pages available, which makes
    /// duplicate near-simultaneous triggers harmless.
    pub fn load_next(&mut self) -> Option<PageRequest> {
        if self.phase != FeedPhase::Loaded || !self.has_more {
            return None;
        }
        self.phase = FeedPhase::Loading;
        let request = PageRequest {
            page: self.current_page + 1,
            seq: self.seq,
        };
        self.in_flight = Some(request);
        Some(request)
    }

    /// Fold a fetched page into the feed. Page 1 replaces the accumulated
    /// list; later pages append in server order, no de-duplication. Returns
    /// `false` when the result belonged to an abandoned fetch.
    pub fn apply_page(&mut self, seq: u64, page: EpisodePage) -> bool {
        let Some(request) = self.take_in_flight(seq) else {
            return false;
        };

        if request.page == 1 {
            self.episodes = page.results;
        } else {
            self.episodes.extend(page.results);
        }
        self.current_page = request.page;
        self.total = Some(page.info.count);
        self.has_more = page.info.next.is_some();
        self.error = None;
        self.phase = if self.has_more {
            FeedPhase::Loaded
        } else {
            self.notifier.notify(NoticeKind::Info, END_OF_LIST);
            FeedPhase::Exhausted
        };
        true
    }

    /// Fold a failed fetch into the feed. The accumulated list and
    /// `has_more` stay untouched; the lost page is not re-attempted.
    pub fn apply_error(&mut self, seq: u64, message: &str) -> bool {
        let Some(request) = self.take_in_flight(seq) else {
            return false;
        };

        self.error = Some(message.to_string());
        self.phase = FeedPhase::Errored;
        let notice = if request.page == 1 {
            LOAD_FAILED
        } else {
            LOAD_MORE_FAILED
        };
        self.notifier.notify(NoticeKind::Error, notice);
        true
    }

    fn take_in_flight(&mut self, seq: u64) -> Option<PageRequest> {
        match self.in_flight {
            Some(request) if request.seq == seq => {
                self.in_flight = None;
                Some(request)
            }
            _ => None,
        }
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total(&self) -> Option<u32> {
        self.total
    }
}
