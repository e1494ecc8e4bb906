//! Cells in the cellular automaton.

use crate::error::{ConfigurationIssue, Error};
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub(crate) u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// The state as a bit, `0` or `1`.
    #[inline]
    pub fn bit(self) -> u8 {
        self.0
    }

    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

impl TryFrom<u8> for State {
    type Error = u8;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        match bit {
            0 => Ok(DEAD),
            1 => Ok(ALIVE),
            _ => Err(bit),
        }
    }
}

/// Parses a row of cells written with `0` and `1`.
///
/// Only the symbols are checked here. Length requirements are up to the
/// [`Config`](crate::Config).
pub fn parse_cells(s: &str) -> Result<Vec<State>, Error> {
    s.chars()
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(DEAD),
            '1' => Ok(ALIVE),
            _ => Err(Error::InvalidConfiguration(
                ConfigurationIssue::InvalidSymbol(c, i),
            )),
        })
        .collect()
}
