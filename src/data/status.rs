use crate::data::generation::Generation;
use crate::data::history::History;
use std::fmt;

/// Classification of a generation against the recent history window.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum GameStatus {
    Continue,
    GenerationIsEmpty,
    StillLife,
    OscillatorDetected,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Continue
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            GameStatus::Continue => "Continue",
            GameStatus::GenerationIsEmpty => "GenerationIsEmpty",
            GameStatus::StillLife => "StillLife",
            GameStatus::OscillatorDetected => "OscillatorDetected",
        };
        write!(f, "{}", name)
    }
}

/// Decides whether the game has ended, checking rules in priority order:
/// an empty generation first, then a match against the newest history entry
/// (the last step changed nothing), then a match anywhere in the window
/// (the pattern revisited a state, period at most the window length).
///
/// `history` must be the window captured before `current` was recorded into
/// it, so that every entry is strictly older than `current`.
pub fn classify(current: &Generation, history: &History) -> GameStatus {
    if current.is_empty() {
        GameStatus::GenerationIsEmpty
    } else if history.newest() == Some(current) {
        GameStatus::StillLife
    } else if history.contains(current) {
        GameStatus::OscillatorDetected
    } else {
        GameStatus::Continue
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn block() -> Generation {
        #[rustfmt::skip]
        let decoded = Generation::decode(4, 4, &[
            0, 0, 0, 0,
            0, 1, 1, 0,
            0, 1, 1, 0,
            0, 0, 0, 0,
        ]);
        decoded
    }

    fn beehive() -> Generation {
        #[rustfmt::skip]
        let decoded = Generation::decode(6, 5, &[
            0, 0, 0, 0, 0, 0,
            0, 0, 1, 1, 0, 0,
            0, 1, 0, 0, 1, 0,
            0, 0, 1, 1, 0, 0,
            0, 0, 0, 0, 0, 0,
        ]);
        decoded
    }

    fn horizontal_blinker() -> Generation {
        Generation::decode(3, 3, &[0, 0, 0, 1, 1, 1, 0, 0, 0])
    }

    fn vertical_blinker() -> Generation {
        Generation::decode(3, 3, &[0, 1, 0, 0, 1, 0, 0, 1, 0])
    }

    #[test]
    fn test_empty_generation_ends_the_game() {
        let almost_dead = Generation::decode(3, 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
        let history = History::new().record(almost_dead);
        let empty = Generation::decode(3, 3, &[0; 9]);
        assert_eq!(classify(&empty, &history), GameStatus::GenerationIsEmpty);
    }

    #[test]
    fn test_empty_generation_wins_over_matching_history() {
        let history = History::new().record(Generation::default());
        assert_eq!(
            classify(&Generation::default(), &history),
            GameStatus::GenerationIsEmpty
        );
    }

    #[test]
    fn test_block_is_still_life() {
        let history = History::new().record(block());
        assert_eq!(classify(&block(), &history), GameStatus::StillLife);
    }

    #[test]
    fn test_beehive_is_still_life() {
        let history = History::new().record(beehive());
        assert_eq!(classify(&beehive(), &history), GameStatus::StillLife);
    }

    #[test]
    fn test_oscillator_phase_continues() {
        let history = History::new().record(horizontal_blinker());
        assert_eq!(
            classify(&vertical_blinker(), &history),
            GameStatus::Continue
        );
    }

    #[test]
    fn test_oscillator_detected_across_the_window() {
        let history = History::new()
            .record(vertical_blinker())
            .record(horizontal_blinker());
        assert_eq!(
            classify(&vertical_blinker(), &history),
            GameStatus::OscillatorDetected
        );
    }

    #[test]
    fn test_no_history_continues() {
        assert_eq!(
            classify(&vertical_blinker(), &History::new()),
            GameStatus::Continue
        );
    }

    #[test]
    fn test_still_life_wins_over_oscillator() {
        // The newest entry matching takes priority even when an older entry
        // matches too.
        let history = History::new().record(block()).record(block());
        assert_eq!(classify(&block(), &history), GameStatus::StillLife);
    }

    #[test]
    fn test_display_renders_variant_names() {
        assert_eq!(GameStatus::Continue.to_string(), "Continue");
        assert_eq!(GameStatus::GenerationIsEmpty.to_string(), "GenerationIsEmpty");
        assert_eq!(GameStatus::StillLife.to_string(), "StillLife");
        assert_eq!(
            GameStatus::OscillatorDetected.to_string(),
            "OscillatorDetected"
        );
    }
}
