//! Select error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Duplicate item key: {0}")]
    DuplicateKey(String),

    #[error("Invalid item key: {0}")]
    InvalidKey(String),

    #[error("Overlay error: {0}")]
    Overlay(#[from] vantage_overlay::OverlayError),
}
