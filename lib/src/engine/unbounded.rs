//! The unbounded engine.

use super::{check_input, extend_margins, step_bounded, Engine, Row};
use crate::{background::Background, cells::State, lattice::Lattice, rule::Rule};
use log::{debug, trace};

/// Evolves an infinite row.
///
/// Only a finite window of the row is stored. Everything outside the window
/// is the background, which is known in closed form from the rule. The
/// window grows whenever the pattern gets close to one of its ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Engine for Unbounded {
    fn run(&self, rule: &Rule, initial: &[State], generations: usize) -> Lattice {
        check_input(initial, generations);
        let background = Background::of(rule);
        debug!(
            "Evolving {} cells for {} generations under {} ({:?} background)",
            initial.len(),
            generations,
            rule,
            background
        );

        let mut rows = Vec::with_capacity(generations);
        let mut row: Row = initial.iter().copied().collect();
        for t in 0..generations {
            let bg = background.at(t);
            if extend_margins(&mut row, bg) {
                trace!("Generation {}: window grows to {} cells", t, row.len());
            }
            rows.push(row.iter().copied().collect());
            if t + 1 < generations {
                row = step_bounded(rule, &row, bg);
            }
        }

        Lattice::new(background, rows, 0)
    }
}
