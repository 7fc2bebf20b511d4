use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    /// SDL, window or window surface could not be acquired. Fatal.
    #[error("{stage} failed! SDL_Error: {reason}")]
    Init { stage: &'static str, reason: String },
    /// A single bitmap could not be loaded.
    #[error("Unable to load image {path:?}! SDL Error: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("drawing to the window failed: {0}")]
    Draw(String),
}

impl SystemError {
    pub fn init(stage: &'static str) -> impl FnOnce(String) -> SystemError {
        move |reason| SystemError::Init { stage, reason }
    }
}
