use crate::data::generation::Generation;
use std::collections::VecDeque;

/// Number of past generations kept for end-of-game detection. Detectable
/// oscillator periods are bounded by the same number.
pub const HISTORY_WINDOW: usize = 5;

/// The most recently seen generations in chronological order: oldest at the
/// front, newest at the back, never more than `HISTORY_WINDOW` entries.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct History(VecDeque<Generation>);

impl History {
    pub fn new() -> History {
        History(VecDeque::with_capacity(HISTORY_WINDOW + 1))
    }

    /// Returns a new history with `generation` appended at the back,
    /// evicting from the front once the window is full. The receiver is left
    /// untouched; callers thread the returned value forward.
    pub fn record(&self, generation: Generation) -> History {
        let mut entries = self.0.clone();
        entries.push_back(generation);
        while entries.len() > HISTORY_WINDOW {
            entries.pop_front();
        }
        History(entries)
    }

    /// The most recently recorded generation, if any.
    pub fn newest(&self) -> Option<&Generation> {
        self.0.back()
    }

    pub fn contains(&self, generation: &Generation) -> bool {
        self.0.contains(generation)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generation> {
        self.0.iter()
    }
}
