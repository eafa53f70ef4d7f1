//! Overlay error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("No panel mounted for owner: {0}")]
    NotMounted(String),

    #[error("Animation group {group} is held by {owner}")]
    GroupOccupied { group: String, owner: String },
}
