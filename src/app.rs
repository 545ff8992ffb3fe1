use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::catalog::Catalog;
use crate::event::Event;
use crate::feed::{EpisodeFeed, PageRequest};
use crate::notify::{ChannelNotifier, Notice};
use crate::resolve;
use crate::trigger::ScrollTrigger;
use crate::types::{Character, Episode};

/// How long a notice stays on the status line.
pub const FLASH_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Episodes,
    Detail,
}

/// Characters appearing in the selected episode.
#[derive(Debug, Default)]
pub struct CastPane {
    pub characters: Vec<Character>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct App {
    pub feed: EpisodeFeed,
    pub selected: Option<Episode>,
    pub cast: CastPane,
    pub pane: Pane,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub detail_scroll: usize,
    pub list_rows: u16,
    pub should_quit: bool,
    flash: Option<(Notice, Instant)>,
    trigger: ScrollTrigger,
    selection_seq: u64,
    catalog: Arc<dyn Catalog>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        margin_rows: u16,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let notifier = Arc::new(ChannelNotifier::new(action_tx.clone()));
        Self {
            feed: EpisodeFeed::new(notifier),
            selected: None,
            cast: CastPane::default(),
            pane: Pane::Episodes,
            cursor: 0,
            scroll_offset: 0,
            detail_scroll: 0,
            list_rows: 0,
            should_quit: false,
            flash: None,
            trigger: ScrollTrigger::new(margin_rows),
            selection_seq: 0,
            catalog,
            action_tx,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::LoadEpisodes,
            Event::Key(key) => self.handle_key(key),
            Event::Resize(height) => Action::ViewportResized(height),
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => Action::PageDown,
                KeyCode::Char('u') => Action::PageUp,
                _ => Action::None,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.selected.is_some() {
                    Action::Back
                } else {
                    Action::Quit
                }
            }
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('g') => Action::GoToTop,
            KeyCode::Char('G') => Action::GoToBottom,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Select,
            KeyCode::Tab => Action::SwitchPane,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                if self.selected.is_some() {
                    self.clear_selection();
                } else {
                    self.should_quit = true;
                }
            }
            Action::ScrollDown => match self.pane {
                Pane::Episodes => self.move_cursor(1),
                Pane::Detail => self.detail_scroll = self.detail_scroll.saturating_add(1),
            },
            Action::ScrollUp => match self.pane {
                Pane::Episodes => self.move_cursor(-1),
                Pane::Detail => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            },
            Action::PageDown => match self.pane {
                Pane::Episodes => self.move_cursor(self.half_page()),
                Pane::Detail => {
                    let step = self.half_page() as usize;
                    self.detail_scroll = self.detail_scroll.saturating_add(step);
                }
            },
            Action::PageUp => match self.pane {
                Pane::Episodes => self.move_cursor(-self.half_page()),
                Pane::Detail => {
                    let step = self.half_page() as usize;
                    self.detail_scroll = self.detail_scroll.saturating_sub(step);
                }
            },
            Action::GoToTop => match self.pane {
                Pane::Episodes => {
                    self.cursor = 0;
                    self.clamp_scroll();
                    self.maybe_load_more();
                }
                Pane::Detail => self.detail_scroll = 0,
            },
            Action::GoToBottom => match self.pane {
                Pane::Episodes => {
                    if !self.feed.is_empty() {
                        self.cursor = self.feed.len() - 1;
                        self.clamp_scroll();
                        self.maybe_load_more();
                    }
                }
                Pane::Detail => self.detail_scroll = self.cast.characters.len(),
            },
            Action::Select => {
                if self.pane == Pane::Episodes {
                    self.toggle_selection();
                }
            }
            Action::SwitchPane => {
                self.pane = match self.pane {
                    Pane::Episodes if self.selected.is_some() => Pane::Detail,
                    Pane::Episodes => Pane::Episodes,
                    Pane::Detail => Pane::Episodes,
                };
            }

            Action::LoadEpisodes => {
                self.start_feed();
            }
            Action::Refresh => {
                self.cursor = 0;
                self.scroll_offset = 0;
                self.start_feed();
            }
            Action::PageLoaded(page, seq) => {
                if self.feed.apply_page(seq, *page) {
                    let len = self.feed.len();
                    if len > 0 && self.cursor >= len {
                        self.cursor = len - 1;
                    }
                    self.clamp_scroll();
                    self.maybe_load_more();
                } else {
                    tracing::debug!(seq, "dropped stale page result");
                }
            }
            Action::PageFailed(message, seq) => {
                self.feed.apply_error(seq, &message);
            }

            Action::CastLoaded(characters, seq) => {
                if seq == self.selection_seq {
                    self.cast.loading = false;
                    self.cast.characters = characters;
                    self.cast.error = None;
                } else {
                    tracing::debug!(seq, "dropped stale cast result");
                }
            }
            Action::CastFailed(message, seq) => {
                if seq == self.selection_seq {
                    self.cast.loading = false;
                    self.cast.error = Some(message);
                }
            }

            Action::ViewportResized(height) => {
                self.list_rows = height.saturating_sub(4);
                self.clamp_scroll();
                self.maybe_load_more();
            }
            Action::Notice(notice) => {
                self.flash = Some((notice, Instant::now()));
            }
            Action::None => {}
        }
    }

    /// The notice currently worth showing, if it has not expired.
    pub fn flash(&self) -> Option<&Notice> {
        match &self.flash {
            Some((notice, since)) if since.elapsed() < FLASH_TTL => Some(notice),
            _ => None,
        }
    }

    fn half_page(&self) -> isize {
        (self.list_rows as isize / 2).max(1)
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.feed.len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor as isize + delta;
        self.cursor = cursor.clamp(0, len as isize - 1) as usize;
        self.clamp_scroll();
        self.maybe_load_more();
    }

    fn clamp_scroll(&mut self) {
        let rows = self.list_rows as usize;
        if rows == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + rows {
            self.scroll_offset = self.cursor + 1 - rows;
        }
    }

    /// Ask the trigger whether the viewport just reached the list tail and
    /// start the next page fetch if the feed agrees. Runs after every
    /// viewport movement, including upward ones, so the trigger can track
    /// the tail leaving visibility.
    fn maybe_load_more(&mut self) {
        if self.list_rows == 0 {
            return;
        }
        let fire = self.trigger.observe(
            self.scroll_offset,
            self.list_rows,
            self.feed.len(),
            self.feed.has_more(),
            self.feed.is_loading(),
        );
        if fire {
            if let Some(request) = self.feed.load_next() {
                self.spawn_load_page(request);
            }
        }
    }

    fn start_feed(&mut self) {
        self.trigger.reset();
        let request = self.feed.start();
        self.spawn_load_page(request);
    }

    fn toggle_selection(&mut self) {
        let Some(episode) = self.feed.episodes().get(self.cursor).cloned() else {
            return;
        };
        if self
            .selected
            .as_ref()
            .is_some_and(|current| current.id == episode.id)
        {
            self.clear_selection();
            return;
        }

        self.selection_seq += 1;
        self.detail_scroll = 0;
        self.cast = CastPane {
            loading: !episode.characters.is_empty(),
            ..CastPane::default()
        };
        let urls = episode.characters.clone();
        self.selected = Some(episode);
        if !urls.is_empty() {
            self.spawn_load_cast(urls, self.selection_seq);
        }
    }

    fn clear_selection(&mut self) {
        // Orphans any in-flight cast fetch for the old selection.
        self.selection_seq += 1;
        self.selected = None;
        self.cast = CastPane::default();
        self.detail_scroll = 0;
        self.pane = Pane::Episodes;
    }

    fn spawn_load_page(&self, request: PageRequest) {
        let tx = self.action_tx.clone();
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            match catalog.episode_page(request.page).await {
                Ok(page) => {
                    tx.send(Action::PageLoaded(Box::new(page), request.seq)).ok();
                }
                Err(e) => {
                    tracing::warn!(page = request.page, error = %e, "episode page fetch failed");
                    tx.send(Action::PageFailed(e.to_string(), request.seq)).ok();
                }
            }
        });
    }

    fn spawn_load_cast(&self, urls: Vec<String>, seq: u64) {
        let tx = self.action_tx.clone();
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            match resolve::characters(catalog.as_ref(), &urls).await {
                Ok(characters) => {
                    tx.send(Action::CastLoaded(characters, seq)).ok();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "cast resolution failed");
                    tx.send(Action::CastFailed(e.to_string(), seq)).ok();
                }
            }
        });
    }
}
