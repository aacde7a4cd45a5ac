use crate::data::cell::Cell;
use rand;
use rand::Rng;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

pub const PAR_THRESHOLD_CELLS: usize = 25000;

const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The set of live cells at one point in time.
///
/// Only live coordinates are stored; the plane around them is implicitly
/// dead, so patterns can wander arbitrarily far in any direction. Every
/// transformation returns a new `Generation` and leaves the receiver alone.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Generation(BTreeSet<Cell>);

/// Row-major dense rendering of a generation, used only at the boundary
/// for input and display.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DenseGrid {
    pub cells: Vec<i32>,
    pub width: usize,
    pub height: usize,
}

// What one transition step observes about a coordinate: whether the
// coordinate itself is live, and how many live neighbours touch it.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
struct Occupancy {
    alive: bool,
    density: u32,
}

impl Generation {
    /// Reads a row-major `width` x `height` dense grid into the set of live
    /// cells. Index `i` maps to `(i % width, i / width)`; any value greater
    /// than zero is live; indices past the end of `cells` are dead.
    pub fn decode(width: usize, height: usize, cells: &[i32]) -> Generation {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        (0..width * height)
            .filter(|i| cells.get(*i).cloned().unwrap_or(0) > 0)
            .map(|i| Cell::new((i % width) as i64, (i / width) as i64))
            .collect()
    }

    /// Seeds a `width` x `height` area where each coordinate is live with
    /// probability `fill`.
    pub fn random(width: usize, height: usize, fill: f64) -> Generation {
        let mut rng = rand::thread_rng();
        let cells: Vec<i32> = (0..width * height)
            .map(|_| if rng.gen::<f64>() < fill { 1 } else { 0 })
            .collect();
        Generation::decode(width, height, &cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the generation as a dense grid sized to the live cells'
    /// bounding box plus a one-cell dead margin on every side, so the border
    /// of the output is always dead. `None` when there are no live cells to
    /// put a box around.
    pub fn encode(&self) -> Option<DenseGrid> {
        let min_x = self.0.iter().map(|cell| cell.x).min()?;
        let max_x = self.0.iter().map(|cell| cell.x).max()?;
        let min_y = self.0.iter().map(|cell| cell.y).min()?;
        let max_y = self.0.iter().map(|cell| cell.y).max()?;
        let width = (max_x - min_x + 3) as usize;
        let height = (max_y - min_y + 3) as usize;
        let mut cells = vec![0; width * height];
        for cell in &self.0 {
            let offset = (cell.x - min_x + 1) as usize + (cell.y - min_y + 1) as usize * width;
            cells[offset] = 1;
        }
        Some(DenseGrid {
            cells,
            width,
            height,
        })
    }

    /// `encode`, rendered as one printable string per row with `' '` for
    /// dead and `'*'` for live.
    pub fn encode_to_rows(&self) -> Option<Vec<String>> {
        self.encode().map(|grid| grid.rows())
    }

    /// Computes the next generation under Conway's rules.
    ///
    /// Every live cell emits nine occupancy observations: itself as live,
    /// and a density of one onto each of its eight neighbours. Grouped by
    /// coordinate, the observations give each touched coordinate its
    /// liveness and live-neighbour count; nothing further away can change,
    /// so the work is proportional to the live-cell count rather than to
    /// any grid area. A coordinate is live in the next generation at
    /// density 3, or at density 2 if it is live now.
    pub fn step(&self) -> Generation {
        let tallies = if self.0.len() >= PAR_THRESHOLD_CELLS {
            self.tally_parallel()
        } else {
            self.tally()
        };
        tallies
            .into_iter()
            .filter(|&(_, occupancy)| {
                occupancy.density == 3 || (occupancy.alive && occupancy.density == 2)
            })
            .map(|(cell, _)| cell)
            .collect()
    }

    fn tally(&self) -> HashMap<Cell, Occupancy> {
        let mut tallies = HashMap::with_capacity(self.0.len() * 4);
        for cell in &self.0 {
            observe(&mut tallies, cell);
        }
        tallies
    }

    // Parallel version of tally: workers fold local tallies over chunks of
    // the live set, merged by an order-independent reduction, so the result
    // is identical to the sequential one regardless of scheduling.
    fn tally_parallel(&self) -> HashMap<Cell, Occupancy> {
        let cells: Vec<&Cell> = self.0.iter().collect();
        cells
            .into_par_iter()
            .fold(HashMap::new, |mut tallies, cell| {
                observe(&mut tallies, cell);
                tallies
            })
            .reduce(HashMap::new, merge_tallies)
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Generation {
        Generation(iter.into_iter().collect())
    }
}

impl DenseGrid {
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|value| if *value > 0 { '*' } else { ' ' })
                    .collect()
            })
            .collect()
    }
}

fn observe(tallies: &mut HashMap<Cell, Occupancy>, cell: &Cell) {
    tallies.entry(*cell).or_insert_with(Occupancy::default).alive = true;
    for &(dx, dy) in &NEIGHBOUR_OFFSETS {
        tallies
            .entry(Cell::new(cell.x + dx, cell.y + dy))
            .or_insert_with(Occupancy::default)
            .density += 1;
    }
}

fn merge_tallies(
    mut into: HashMap<Cell, Occupancy>,
    from: HashMap<Cell, Occupancy>,
) -> HashMap<Cell, Occupancy> {
    for (cell, occupancy) in from {
        let merged = into.entry(cell).or_insert_with(Occupancy::default);
        merged.alive |= occupancy.alive;
        merged.density += occupancy.density;
    }
    into
}
