use thiserror::Error;

/// Configuration shared by the epsilon searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be greater than zero")]
    ZeroIters,
}

impl Default for Config {
    /// Allows 200 iterations.
    ///
    /// The additive `f64` search needs 105 and the `Decimal` multiplicative
    /// search fewer than 100.
    fn default() -> Self {
        Self { max_iters: 200 }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }

        Ok(Self { max_iters })
    }

    /// Returns the maximum number of bisection steps before giving up.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
