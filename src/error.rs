//! Error types
//!
//! Startup failures are fatal and end the process with status 1. Text
//! rendering failures are reported per label and never stop the menu.

use sdl2::render::TextureValueError;
use sdl2::ttf::FontError;
use thiserror::Error;

/// Fatal errors raised while acquiring the platform resources
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("SDL could not initialize! SDL_Error: {0}")]
    Sdl(String),

    #[error("TTF could not initialize! TTF_Error: {0}")]
    Ttf(String),

    #[error("Window could not be created! SDL_Error: {0}")]
    Window(String),

    #[error("Renderer could not be created! SDL_Error: {0}")]
    Renderer(String),

    #[error("Event pump could not be created! SDL_Error: {0}")]
    EventPump(String),

    #[error("Menu layout could not be parsed: {0}")]
    Layout(#[from] serde_json::Error),
}

/// Errors from rasterizing and blitting a single text label
#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to rasterize text: {0}")]
    Rasterize(#[from] FontError),

    #[error("failed to upload text texture: {0}")]
    Texture(#[from] TextureValueError),

    #[error("failed to copy text texture: {0}")]
    Copy(String),
}

/// Anything that ends [`crate::run`] early
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("Rendering failed! SDL_Error: {0}")]
    Render(String),

    #[error("Could not write to console: {0}")]
    Output(#[from] std::io::Error),
}
