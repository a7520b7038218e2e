//! Fetch-on-open lifecycle for modal content.

/// Where a modal's content fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Modal closed, nothing in flight
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Tracks the load state plus a generation that invalidates in-flight results.
///
/// Every [`LoadTracker::begin`] and [`LoadTracker::reset`] bumps the
/// generation. A result is only accepted when it carries the current one.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    state: LoadState,
    generation: u64,
}

impl LoadTracker {
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter `Loading` and return the tag the result must carry
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;
        self.generation
    }

    /// Back to `Idle`; anything still in flight becomes stale
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Idle;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.state.is_loading()
    }

    /// Returns false (and changes nothing) for a stale generation
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.state = LoadState::Ready;
        true
    }

    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.state = LoadState::Failed(message.into());
        true
    }
}
