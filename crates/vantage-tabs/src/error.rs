//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab set must contain at least one tab")]
    EmptyTabSet,

    #[error("Duplicate tab id: {0}")]
    DuplicateId(String),

    #[error("Invalid tab id: {0}")]
    InvalidId(String),

    #[error("Overlay error: {0}")]
    Overlay(#[from] vantage_overlay::OverlayError),
}
