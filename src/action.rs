use crate::notify::Notice;
use crate::types::{Character, EpisodePage};

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    Select,
    SwitchPane,
    Refresh,

    // Episode feed
    LoadEpisodes,
    PageLoaded(Box<EpisodePage>, u64),
    PageFailed(String, u64),

    // Character pane
    CastLoaded(Vec<Character>, u64),
    CastFailed(String, u64),

    ViewportResized(u16),
    Notice(Notice),
    None,
}
