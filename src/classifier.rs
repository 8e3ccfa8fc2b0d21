//! Fizz/Buzz classification of a single integer

use std::fmt;

/// What a given integer prints as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Multiple of 3 only
    Fizz,
    /// Multiple of 5 only
    Buzz,
    /// Multiple of both 3 and 5
    FizzBuzz,
    /// Neither; printed as the number itself
    Number(u32),
}

/// Classify `n`. Total over `u32`.
pub fn classify(n: u32) -> Classification {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Classification::FizzBuzz,
        (true, false) => Classification::Fizz,
        (false, true) => Classification::Buzz,
        (false, false) => Classification::Number(n),
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}
