//! The wrapped engine.

use super::{check_input, extend_margins, step_bounded, step_periodic, Engine, Row};
use crate::{background::Background, cells::State, error::Error, lattice::Lattice, rule::Rule};
use log::{debug, trace};

/// Evolves a row of fixed width whose two ends are neighbors.
///
/// While the pattern is narrower than the width, it grows in an infinite
/// background just like in [`Unbounded`](super::Unbounded). Once the row
/// reaches the width, the leftmost and rightmost cells become neighbors,
/// and the width never changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrapped {
    width: usize,
}

impl Wrapped {
    /// Sets up a wrapped engine with the given width.
    ///
    /// The width must be odd and at least 3.
    pub fn new(width: usize) -> Result<Self, Error> {
        if width < 3 || width % 2 == 0 {
            return Err(Error::InvalidWidth(width as isize));
        }
        Ok(Wrapped { width })
    }

    /// The width of the row.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Engine for Wrapped {
    fn run(&self, rule: &Rule, initial: &[State], generations: usize) -> Lattice {
        check_input(initial, generations);
        let background = Background::of(rule);
        debug!(
            "Evolving {} cells for {} generations under {} ({:?} background), wrapping at {}",
            initial.len(),
            generations,
            rule,
            background,
            self.width
        );

        let mut rows = Vec::with_capacity(generations);
        let mut row: Row = initial.iter().copied().collect();
        let mut wrapping = false;
        for t in 0..generations {
            let bg = background.at(t);
            if row.len() < self.width && extend_margins(&mut row, bg) {
                trace!("Generation {}: window grows to {} cells", t, row.len());
            }
            while row.len() > self.width {
                row.pop_front();
                row.pop_back();
            }
            if !wrapping && row.len() == self.width {
                trace!("Generation {}: row wraps at {} cells", t, self.width);
                wrapping = true;
            }

            rows.push(row.iter().copied().collect());
            if t + 1 < generations {
                row = if wrapping {
                    step_periodic(rule, &row)
                } else {
                    step_bounded(rule, &row, bg)
                };
            }
        }

        Lattice::new(background, rows, self.width)
    }
}
