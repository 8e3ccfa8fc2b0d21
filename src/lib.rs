//! fizzbuzz - the classic counting exercise as a small CLI
//!
//! For each integer 1 through 100 print "Fizz" for multiples of 3, "Buzz"
//! for multiples of 5, "FizzBuzz" for multiples of both, otherwise the number.
//!
//! # Layout
//!
//! - `classifier`: pure classification of one integer
//! - `printer`: the bounded loop writing one line per integer
//! - `cli`, `telemetry`: flags, config and stderr diagnostics

pub mod errors;
pub mod classifier;
pub mod printer;

// Re-export commonly used types
pub use errors::{FizzBuzzError, Result};
pub use classifier::{classify, Classification};

pub mod cli;
pub mod telemetry;
