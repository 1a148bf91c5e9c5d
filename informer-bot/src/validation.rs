//! Input validation for ids typed by users.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    #[error("ID must contain only digits")]
    NotNumber,
    #[error("ID must be greater than zero")]
    NotPositive,
}

/// Parses an account or match id. Surrounding whitespace is ignored.
pub fn parse_positive_id(text: &str) -> Result<i64, IdError> {
    let id: i64 = text.trim().parse().map_err(|_| IdError::NotNumber)?;
    if id <= 0 {
        return Err(IdError::NotPositive);
    }
    Ok(id)
}
