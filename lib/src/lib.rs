//! __ecagen__ evolves elementary cellular automata.
//!
//! An initial configuration is evolved either in an infinite row, whose
//! background is tracked in closed form, or in a wrapped row of fixed width.
//! The result is a rectangular [`Lattice`], one row per generation.
//!
//! # Example
//!
//! ```rust
//! use ecagen_lib::Config;
//!
//! // Rule 90 from a single living cell draws a Sierpiński triangle.
//! let config = Config::new(90, "1", 4);
//! let lattice = config.lattice().unwrap();
//! assert_eq!(
//!     lattice.to_string(),
//!     ".....o.....\n\
//!      ....o.o....\n\
//!      ...o...o...\n\
//!      ..o.o.o.o..\n"
//! );
//! ```

mod background;
mod cells;
mod config;
mod engine;
mod error;
mod lattice;
mod rule;

pub use background::Background;
pub use cells::{parse_cells, State, ALIVE, DEAD};
pub use config::Config;
pub use engine::{Engine, Unbounded, Wrapped};
pub use error::{ConfigurationIssue, Error};
pub use lattice::Lattice;
pub use rule::Rule;
