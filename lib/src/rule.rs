//! Elementary cellular automaton rules.
//!
//! For the numbering of the rules, please see
//! [this article on MathWorld](https://mathworld.wolfram.com/ElementaryCellularAutomaton.html).

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// An elementary cellular automaton rule.
///
/// The rule number is read as an 8-bit binary number. Bit `k`
/// (counting from the least significant bit) is the next state of a cell
/// whose neighborhood encodes to `k`, where a neighborhood `(left, center, right)`
/// encodes to `right + 2 * center + 4 * left`.
///
/// For example, rule 30 is `0b_0001_1110`, so `111`, `110`, `101` and `000`
/// die, and the other four neighborhoods give birth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    /// The rule number.
    number: u8,
    /// The next state for each of the 8 neighborhoods.
    table: [State; 8],
}

impl Rule {
    /// Constructs the rule with the given number.
    pub fn new(number: u8) -> Self {
        let mut table = [DEAD; 8];
        for (k, state) in table.iter_mut().enumerate() {
            *state = State((number >> k) & 1);
        }
        Rule { number, table }
    }

    /// The rule number.
    #[inline]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The lookup table, indexed by the encoded neighborhood.
    #[inline]
    pub fn table(&self) -> &[State; 8] {
        &self.table
    }

    /// The next state of a cell, given its own state and the states of its
    /// two neighbors.
    #[inline]
    pub fn next(&self, left: State, center: State, right: State) -> State {
        self.table[(right.0 + 2 * center.0 + 4 * left.0) as usize]
    }

    /// Whether a dead cell surrounded by dead cells would become [`ALIVE`].
    ///
    /// This is exactly the case of odd rule numbers.
    #[inline]
    pub fn has_b0(&self) -> bool {
        self.next(DEAD, DEAD, DEAD) == ALIVE
    }

    /// Whether a living cell surrounded by living cells would stay [`ALIVE`].
    #[inline]
    pub fn keeps_alive(&self) -> bool {
        self.next(ALIVE, ALIVE, ALIVE) == ALIVE
    }
}

impl TryFrom<isize> for Rule {
    type Error = Error;

    fn try_from(number: isize) -> Result<Self, Self::Error> {
        u8::try_from(number)
            .map(Rule::new)
            .map_err(|_| Error::InvalidRule(number))
    }
}

/// Accepts either a bare number such as `30`, or a Wolfram code such as `W30`.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('W')
            .or_else(|| s.strip_prefix('w'))
            .unwrap_or(s);
        let number: isize = digits.parse()?;
        Rule::try_from(number)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "W{}", self.number)
    }
}
