use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the operating system random source
    /// could not fill the random pool.
    #[error("couldn't generate random numbers: {0}")]
    RandomSourceUnavailable(#[from] rand::Error),

    /// Error generated when the requested length is too short for
    /// the requested character classes or longer than the maximum.
    #[error("password length {length} is out of range, expected {minimum} to {maximum}")]
    InvalidLength {
        /// Requested length.
        length: usize,
        /// Smallest length that satisfies the configuration.
        minimum: usize,
        /// Largest supported length.
        maximum: usize,
    },

    /// Error generated when an internal bound is exceeded while
    /// assembling a password.
    #[error("password generation failed: {0}")]
    GenerationFailure(String),
}
