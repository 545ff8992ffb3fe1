/// Detects when the viewport reaches the tail of the episode list.
///
/// Works like a sentinel-row intersection check: the trigger fires on the
/// transition from "tail hidden" to "tail visible", not on every frame the
/// tail stays visible. Appends move the tail, which re-arms the trigger
/// for the new last row.
#[derive(Debug)]
pub struct ScrollTrigger {
    margin: u16,
    observed_len: usize,
    was_visible: bool,
}

impl ScrollTrigger {
    pub fn new(margin: u16) -> Self {
        Self {
            margin,
            observed_len: 0,
            was_visible: false,
        }
    }

    /// Report the current viewport over the list. Returns `true` when the
    /// tail just came within `margin` rows of the viewport bottom and a
    /// fetch is actually wanted. A blocked edge is consumed, not latched.
    pub fn observe(
        &mut self,
        offset: usize,
        rows: u16,
        len: usize,
        has_more: bool,
        loading: bool,
    ) -> bool {
        if len != self.observed_len {
            self.observed_len = len;
            self.was_visible = false;
        }

        let visible = len > 0 && offset + rows as usize + self.margin as usize >= len;
        let edge = visible && !self.was_visible;
        self.was_visible = visible;

        edge && has_more && !loading
    }

    /// Forget everything observed; the next tail sighting fires again.
    pub fn reset(&mut self) {
        self.observed_len = 0;
        self.was_visible = false;
    }
}
