//! The lattice of all generations.

use crate::{background::Background, cells::State, error::Error};
use std::{
    fmt::{self, Display, Formatter},
    iter,
};

/// All generations of a row, from top to bottom.
///
/// The lattice produced by an [`Engine`](crate::Engine) may have rows of
/// different widths. After [`normalize`](Self::normalize), all rows have the
/// same width, and the rows are aligned at their centers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    /// The background the lattice was evolved in.
    background: Background,

    /// The rows, one per generation.
    rows: Vec<Vec<State>>,

    /// The rows are padded to at least this width when normalizing.
    min_width: usize,
}

impl Lattice {
    pub(crate) fn new(background: Background, rows: Vec<Vec<State>>, min_width: usize) -> Self {
        Lattice {
            background,
            rows,
            min_width,
        }
    }

    /// The background the lattice was evolved in.
    pub fn background(&self) -> Background {
        self.background
    }

    /// The background state in generation `t`.
    pub fn background_at(&self, t: usize) -> State {
        self.background.at(t)
    }

    /// Number of generations.
    pub fn generations(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether all rows have the same width.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// All the rows.
    pub fn rows(&self) -> &[Vec<State>] {
        &self.rows
    }

    /// The row of generation `t`.
    pub fn row(&self, t: usize) -> Option<&[State]> {
        self.rows.get(t).map(Vec::as_slice)
    }

    /// The state of the cell at position `x` in generation `t`.
    pub fn get(&self, x: usize, t: usize) -> Option<State> {
        self.rows.get(t)?.get(x).copied()
    }

    /// Takes the rows out of the lattice.
    pub fn into_rows(self) -> Vec<Vec<State>> {
        self.rows
    }

    /// Pads all rows to the same width.
    ///
    /// Each row is padded on both sides by the same number of cells,
    /// using its own background state.
    /// The new width is the width of the widest row, or the width of
    /// the wrapped row if the lattice comes from a [`Wrapped`](crate::Wrapped) engine.
    pub fn normalize(mut self) -> Self {
        let width = self.width().max(self.min_width);
        let background = self.background;
        for (t, row) in self.rows.iter_mut().enumerate() {
            pad(row, width, background.at(t));
        }
        self
    }

    /// Crops or extends all rows to the given width.
    ///
    /// An even width is rounded up to the next odd number.
    /// Rows are cropped by the same number of cells on both sides,
    /// and extended with their own background states.
    pub fn fix_width(&mut self, width: usize) -> Result<(), Error> {
        if width < 2 {
            return Err(Error::InvalidWidth(width as isize));
        }
        let width = width | 1;
        let background = self.background;
        for (t, row) in self.rows.iter_mut().enumerate() {
            if row.len() > width {
                let excess = row.len() - width;
                row.drain(..excess / 2);
                row.truncate(width);
            } else {
                pad(row, width, background.at(t));
            }
        }
        self.min_width = width;
        Ok(())
    }
}

fn pad(row: &mut Vec<State>, width: usize, background: State) {
    if row.len() >= width {
        return;
    }
    let left = (width - row.len()) / 2;
    row.splice(0..0, iter::repeat(background).take(left));
    row.resize(width, background);
}

/// Displays the lattice as plain text.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
///
/// Each generation is on its own line.
impl Display for Lattice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|s| if s.is_alive() { 'o' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
