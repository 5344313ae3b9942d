use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    #[error("Invalid celestial body code: {0}")]
    InvalidCode(i32),

    #[error("Unknown celestial body name: {0}")]
    UnknownBodyName(String),
}
