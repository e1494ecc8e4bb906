//! Engines that evolve a row generation by generation.

use crate::{cells::State, lattice::Lattice, rule::Rule};
use std::{collections::VecDeque, fmt::Debug};

mod unbounded;
mod wrapped;

pub use unbounded::Unbounded;
pub use wrapped::Wrapped;

/// An engine that evolves an initial configuration into a lattice.
///
/// So that we can switch between the unbounded and the wrapped engine
/// using trait objects.
pub trait Engine: Debug {
    /// Evolves `initial` for `generations` generations.
    ///
    /// The rows of the returned lattice may have different widths.
    /// Call [`Lattice::normalize`] to make it rectangular.
    ///
    /// # Panics
    ///
    /// Panics if `initial` does not have an odd length of at least 3,
    /// or if `generations` is zero. [`Config`](crate::Config) checks these
    /// before calling an engine.
    fn run(&self, rule: &Rule, initial: &[State], generations: usize) -> Lattice;
}

/// The working row.
pub(crate) type Row = VecDeque<State>;

fn check_input(initial: &[State], generations: usize) {
    assert!(
        initial.len() >= 3 && initial.len() % 2 == 1,
        "the initial configuration must have an odd length of at least 3, got {}",
        initial.len()
    );
    assert!(generations > 0, "the number of generations must be positive");
}

/// Makes sure that the two cells at each end of the row are background.
///
/// Whenever one end is not, two background cells are added to **both**
/// ends, so that the row stays centered.
///
/// Returns whether the row has grown.
pub(crate) fn extend_margins(row: &mut Row, background: State) -> bool {
    let mut grown = false;
    if row.iter().take(2).any(|&s| s != background) {
        extend(row, background);
        grown = true;
    }
    if row.iter().rev().take(2).any(|&s| s != background) {
        extend(row, background);
        grown = true;
    }
    grown
}

fn extend(row: &mut Row, background: State) {
    for _ in 0..2 {
        row.push_front(background);
        row.push_back(background);
    }
}

/// The next generation of a row surrounded by the background.
pub(crate) fn step_bounded(rule: &Rule, row: &Row, background: State) -> Row {
    (0..row.len())
        .map(|i| {
            let left = if i == 0 { background } else { row[i - 1] };
            let right = row.get(i + 1).copied().unwrap_or(background);
            rule.next(left, row[i], right)
        })
        .collect()
}

/// The next generation of a row whose two ends are neighbors.
pub(crate) fn step_periodic(rule: &Rule, row: &Row) -> Row {
    let n = row.len();
    (0..n)
        .map(|i| rule.next(row[(i + n - 1) % n], row[i], row[(i + 1) % n]))
        .collect()
}
