use crate::data::{classify, GameStatus, Generation, History};
use log::{debug, info};
use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Drives a generation forward on the terminal: one printed frame per
/// update, history recorded between steps, stopping on the first terminal
/// classification or on the generation cap.
pub struct App {
    generation: Generation,
    history: History,
    updates_per_second: u16,
    max_generations: u64,
}

impl App {
    pub fn new(generation: Generation, updates_per_second: u16, max_generations: u64) -> App {
        App {
            generation,
            history: History::new(),
            updates_per_second,
            max_generations,
        }
    }

    pub fn run(mut self) -> Result<GameStatus, Box<dyn Error>> {
        let wait_duration = Duration::from_millis(1000 / u64::from(self.updates_per_second));
        let stdout = io::stdout();
        let mut out = stdout.lock();
        info!(
            "starting with {} live cells, showing up to {} generations",
            self.generation.len(),
            self.max_generations
        );
        for tick in 0..=self.max_generations {
            // The history holds only generations strictly older than the
            // current one at this point, which is what classify expects.
            let status = classify(&self.generation, &self.history);
            render_frame(&mut out, tick, &self.generation)?;
            debug!(
                "generation {}: {} live cells, {}",
                tick,
                self.generation.len(),
                status
            );
            if status.is_terminal() {
                info!("ended after {} generations: {}", tick, status);
                return Ok(status);
            }
            self.history = self.history.record(self.generation.clone());
            self.generation = self.generation.step();
            thread::sleep(wait_duration);
        }
        info!(
            "generation limit of {} reached, still going",
            self.max_generations
        );
        Ok(GameStatus::Continue)
    }
}

fn render_frame<W: Write>(out: &mut W, tick: u64, generation: &Generation) -> io::Result<()> {
    writeln!(out, "--- generation {} ({} live cells)", tick, generation.len())?;
    match generation.encode_to_rows() {
        Some(rows) => {
            for row in rows {
                writeln!(out, "{}", row)?;
            }
        }
        None => writeln!(out, "(no live cells)")?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::data::Cell;

    #[test]
    fn test_render_frame_writes_rows_within_margin() {
        let blinker: Generation = [(0, 1), (1, 1), (2, 1)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .collect();
        let mut out = Vec::new();
        render_frame(&mut out, 7, &blinker).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(
            written,
            "--- generation 7 (3 live cells)\n     \n *** \n     \n"
        );
    }

    #[test]
    fn test_render_frame_handles_empty_generation() {
        let mut out = Vec::new();
        render_frame(&mut out, 0, &Generation::default()).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("(no live cells)"));
    }
}
