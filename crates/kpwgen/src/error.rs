use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("argument must be an integer number of characters, got '{0}'")]
    LengthNotInteger(String),

    #[error("password length must not be negative, got {0}")]
    NegativeLength(i128),

    #[error(transparent)]
    Password(#[from] kpwgen_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
