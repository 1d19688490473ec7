//! Error types for the theme.
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error(
        "Invalid publish date `{value}`, expected `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM:SS`"
    )]
    InvalidDate { value: String },
}
