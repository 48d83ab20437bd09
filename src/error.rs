//! Error types shared by the game core and the platform glue

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// A view switch named a view that was never registered
    #[error("A view with the name {0} does not exist")]
    UnknownView(String),
    /// An image key is not (or not yet) present in the resource repository
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    /// Browser glue failure (missing canvas, 2d context, ...)
    #[error("Canvas error: {0}")]
    Canvas(String),
}
