pub mod cell;
pub mod generation;
pub mod history;
pub mod status;

pub use self::cell::Cell;
pub use self::generation::{DenseGrid, Generation, PAR_THRESHOLD_CELLS};
pub use self::history::{History, HISTORY_WINDOW};
pub use self::status::{classify, GameStatus};
