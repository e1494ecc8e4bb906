//! The background of the infinite row.

use crate::{
    cells::{State, ALIVE, DEAD},
    rule::Rule,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the background evolves.
///
/// The initial configuration is always surrounded by infinitely many dead
/// cells, so the background starts [`DEAD`]. Since every cell of the
/// background sees the same neighborhood, it evolves as a single cell whose
/// neighbors are copies of itself, which leaves only three possibilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Background {
    /// Rules without `B0`: the background is always [`DEAD`].
    Dead,
    /// Rules with `B0` that keep `111` alive: the background is [`DEAD`] in
    /// generation 0, and [`ALIVE`] forever after.
    Stable,
    /// Rules with `B0` that kill `111`: the background is [`DEAD`] on even
    /// generations, [`ALIVE`] on odd generations.
    Alternating,
}

impl Background {
    /// The background of the given rule.
    pub fn of(rule: &Rule) -> Self {
        match (rule.has_b0(), rule.keeps_alive()) {
            (false, _) => Background::Dead,
            (true, true) => Background::Stable,
            (true, false) => Background::Alternating,
        }
    }

    /// The background state in generation `t`.
    #[inline]
    pub fn at(self, t: usize) -> State {
        match self {
            Background::Dead => DEAD,
            Background::Stable if t == 0 => DEAD,
            Background::Stable => ALIVE,
            Background::Alternating => State((t % 2) as u8),
        }
    }
}
