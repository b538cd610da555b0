use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarmosetError {
    /// Contract violation in a caller-supplied argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
