//! src/controller/sentinel.rs
//! ============================================================================
//! # SentinelTrigger: edge-detecting "load more" signal
//!
//! The cocktail table ends with a sentinel row. Each recomputation of the
//! visible list produces a new sentinel identity. The trigger reports one
//! event per hidden → visible transition of the current sentinel; a sentinel
//! that stays visible reports nothing further. Observing a new identity
//! re-arms the trigger, so a new sentinel that is already on screen fires
//! immediately.

/// Identity of one rendered sentinel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelId(pub u64);

#[derive(Debug, Clone, Default)]
pub struct SentinelTrigger {
    observed: Option<SentinelId>,
    was_visible: bool,
}

impl SentinelTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current visibility of `sentinel`. Returns `true` on a
    /// hidden → visible edge.
    pub fn observe(&mut self, sentinel: SentinelId, visible: bool) -> bool {
        if self.observed != Some(sentinel) {
            self.observed = Some(sentinel);
            self.was_visible = false;
        }

        let fired = visible && !self.was_visible;
        self.was_visible = visible;
        fired
    }
}
