use thiserror::Error;

/// Failure to read a unit from its textual form (`"12"`, `"12pt"`, `"50%"`, ...).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseUnitError {
    #[error("empty unit value")]
    Empty,
    #[error("invalid number in unit value {0:?}")]
    InvalidNumber(String),
    #[error("unit value {0:?} is not finite")]
    NotFinite(String),
}
