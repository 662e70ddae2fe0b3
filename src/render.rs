//! Redraw tracking for the steady-state display.
//!
//! The time digits change every second and always repaint. Everything else
//! on the clock face changes rarely (dates roll at midnight, the zone label
//! and data field rotate on multi-second intervals, the status strip only
//! moves when staleness or the link changes), so each of those regions keeps
//! the last text it drew and repaints only when the text differs. Repainting
//! a region clears its background first, which is what makes skipping
//! unchanged regions safe.

use heapless::String;

/// Last-drawn text for one display region.
///
/// `update` reports whether the region must repaint and records the new
/// text. Text longer than the buffer is truncated for comparison, which is
/// harmless: the drawn text is truncated the same way.
pub struct TrackedText<const N: usize> {
    prev: Option<String<N>>,
}

impl<const N: usize> TrackedText<N> {
    pub const fn new() -> Self {
        Self { prev: None }
    }

    /// True when `text` differs from what was last drawn.
    pub fn update(&mut self, text: &str) -> bool {
        let mut incoming: String<N> = String::new();
        for c in text.chars() {
            if incoming.push(c).is_err() {
                break;
            }
        }
        if self.prev.as_ref() == Some(&incoming) {
            return false;
        }
        self.prev = Some(incoming);
        true
    }
}

impl<const N: usize> Default for TrackedText<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-region redraw state for the clock face.
pub struct RedrawState {
    first_frame: bool,
    pub utc_date: TrackedText<16>,
    pub local_date: TrackedText<16>,
    pub zone_label: TrackedText<8>,
    pub data_field: TrackedText<64>,
    pub status: TrackedText<48>,
}

impl RedrawState {
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            utc_date: TrackedText::new(),
            local_date: TrackedText::new(),
            zone_label: TrackedText::new(),
            data_field: TrackedText::new(),
            status: TrackedText::new(),
        }
    }

    /// True on the first pass after (re)entering the steady state, when the
    /// fixed chrome (header, dividers, row labels) must be painted.
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Call at the end of each per-second pass.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
    }
}

impl Default for RedrawState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_is_dirty() {
        let mut region: TrackedText<16> = TrackedText::new();
        assert!(region.update("Feb 07"), "a region with nothing drawn yet must repaint");
    }

    #[test]
    fn test_same_text_is_clean() {
        let mut region: TrackedText<16> = TrackedText::new();
        region.update("Feb 07");
        assert!(!region.update("Feb 07"), "unchanged text must not repaint");
    }

    #[test]
    fn test_changed_text_is_dirty_again() {
        let mut region: TrackedText<16> = TrackedText::new();
        region.update("Feb 07");
        assert!(region.update("Feb 08"));
        assert!(!region.update("Feb 08"));
    }

    #[test]
    fn test_overlong_text_compares_truncated() {
        let mut region: TrackedText<4> = TrackedText::new();
        assert!(region.update("abcdef"));
        assert!(!region.update("abcdef"), "identical overlong text must still compare clean");
        assert!(region.update("abcxyz"), "a change within the stored prefix is seen");
    }

    #[test]
    fn test_redraw_state_first_frame_lifecycle() {
        let mut state = RedrawState::new();
        assert!(state.is_first_frame());
        state.end_frame();
        assert!(!state.is_first_frame());
        state.end_frame();
        assert!(!state.is_first_frame(), "end_frame is idempotent");
    }
}
