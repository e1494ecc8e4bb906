//! Run configuration.

use crate::{
    cells::{parse_cells, State, DEAD},
    engine::{Engine, Unbounded, Wrapped},
    error::{ConfigurationIssue, Error},
    lattice::Lattice,
    rule::Rule,
};
use educe::Educe;
use log::debug;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run configuration.
///
/// The lattice will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Rule number, from 0 to 255.
    #[educe(Default = 30)]
    pub rule: isize,

    /// The initial configuration (generation 0), written with `0` and `1`.
    #[educe(Default(expression = "String::from(\"010\")"))]
    pub initial: String,

    /// Number of generations, including generation 0.
    #[educe(Default = 100)]
    pub generations: isize,

    /// Width of the wrapped row.
    ///
    /// `None` means that the row is infinite.
    ///
    /// An even width is rounded up to the next odd number.
    pub wrap: Option<isize>,

    /// Crops or extends the lattice to this width.
    ///
    /// Ignored when [`wrap`](#structfield.wrap) is set.
    ///
    /// An even width is rounded up to the next odd number.
    pub fixed_width: Option<isize>,

    /// Whether to pad an initial configuration of even length
    /// with a dead cell at the end.
    ///
    /// A single cell is also padded with a dead cell on each side.
    #[educe(Default = true)]
    pub pad: bool,
}

impl Config {
    /// Sets up a new configuration with given rule, initial configuration
    /// and number of generations.
    pub fn new<S: ToString>(rule: isize, initial: S, generations: isize) -> Self {
        Config {
            rule,
            initial: initial.to_string(),
            generations,
            ..Config::default()
        }
    }

    /// A random rule and a random initial configuration of at most 6 cells.
    ///
    /// The initial configuration is the binary representation of a random
    /// number from 0 to 32.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Config {
            rule: rng.gen_range(0..=255),
            initial: format!("{:b}", rng.gen_range(0..=32u32)),
            ..Config::default()
        }
    }

    /// Sets the rule number.
    pub fn set_rule(mut self, rule: isize) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the initial configuration.
    pub fn set_initial<S: ToString>(mut self, initial: S) -> Self {
        self.initial = initial.to_string();
        self
    }

    /// Sets the number of generations.
    pub fn set_generations(mut self, generations: isize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the width of the wrapped row.
    pub fn set_wrap<T: Into<Option<isize>>>(mut self, wrap: T) -> Self {
        self.wrap = wrap.into();
        self
    }

    /// Sets the fixed width.
    pub fn set_fixed_width<T: Into<Option<isize>>>(mut self, fixed_width: T) -> Self {
        self.fixed_width = fixed_width.into();
        self
    }

    /// Sets whether to pad the initial configuration.
    pub fn set_pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    /// The rule.
    pub fn rule(&self) -> Result<Rule, Error> {
        Rule::try_from(self.rule)
    }

    /// The initial configuration, padded if necessary.
    ///
    /// The result always has an odd length of at least 3.
    pub fn initial_cells(&self) -> Result<Vec<State>, Error> {
        let initial = self.initial.trim();
        if initial.is_empty() {
            return Err(Error::InvalidConfiguration(ConfigurationIssue::Empty));
        }
        let mut cells = parse_cells(initial)?;
        if cells.len() % 2 == 0 {
            if !self.pad {
                return Err(Error::InvalidConfiguration(
                    ConfigurationIssue::EvenLength(cells.len()),
                ));
            }
            cells.push(DEAD);
        }
        if cells.len() < 3 {
            if !self.pad {
                return Err(Error::InvalidConfiguration(
                    ConfigurationIssue::TooShort(cells.len()),
                ));
            }
            cells.insert(0, DEAD);
            cells.push(DEAD);
        }
        Ok(cells)
    }

    /// Number of generations.
    pub fn generations(&self) -> Result<usize, Error> {
        usize::try_from(self.generations)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidGenerationCount(self.generations))
    }

    /// The engine: [`Wrapped`] if [`wrap`](#structfield.wrap) is set,
    /// [`Unbounded`] otherwise.
    pub fn engine(&self) -> Result<Box<dyn Engine>, Error> {
        match self.wrap {
            Some(width) => Ok(Box::new(Wrapped::new(odd_width(width)?)?)),
            None => Ok(Box::new(Unbounded)),
        }
    }

    /// Evolves the initial configuration and returns the normalized lattice.
    ///
    /// Returns an error if any part of the configuration is invalid.
    /// Nothing is evolved in that case.
    pub fn lattice(&self) -> Result<Lattice, Error> {
        let rule = self.rule()?;
        let initial = self.initial_cells()?;
        let generations = self.generations()?;
        let engine = self.engine()?;
        let fixed_width = match (self.wrap, self.fixed_width) {
            (None, Some(width)) => Some(odd_width(width)?),
            _ => None,
        };

        debug!("Running {:?} with rule {}", engine, rule);
        let mut lattice = engine.run(&rule, &initial, generations).normalize();
        if let Some(width) = fixed_width {
            lattice.fix_width(width)?;
        }
        Ok(lattice)
    }
}

/// Rounds an even width up to the next odd number,
/// and checks that it is at least 3.
fn odd_width(width: isize) -> Result<usize, Error> {
    let rounded = if width % 2 == 0 { width + 1 } else { width };
    if rounded < 3 {
        return Err(Error::InvalidWidth(width));
    }
    Ok(rounded as usize)
}
