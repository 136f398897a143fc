/// Artwork image loading
/// Reads image files from the asset directory and decodes them for display
use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cards are laid out as 600x600 squares; larger sources are scaled down
const ARTWORK_SIZE: u32 = 600;

/// Why an image could not be shown.
/// Cloneable so it can ride inside iced messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("remote image references are not fetched: {0}")]
    Remote(String),

    #[error("failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("task join error: {0}")]
    Join(String),
}

/// Resolve an image reference against the asset directory.
/// URL references are rejected; the gallery has no network layer.
pub fn resolve(asset_dir: &Path, reference: &str) -> Result<PathBuf, LoadError> {
    if reference.contains("://") {
        return Err(LoadError::Remote(reference.to_string()));
    }

    Ok(asset_dir.join(reference.trim_start_matches('/')))
}

/// Load and decode an image reference
pub async fn load_artwork(asset_dir: PathBuf, reference: String) -> Result<Handle, LoadError> {
    let path = resolve(&asset_dir, &reference)?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Io {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    // Spawn blocking task for CPU-bound decode
    tokio::task::spawn_blocking(move || decode_artwork(&bytes))
        .await
        .map_err(|e| LoadError::Join(e.to_string()))?
}

/// Decode image bytes into an RGBA handle, scaled to fit the card
pub fn decode_artwork(bytes: &[u8]) -> Result<Handle, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    // Only shrink; small artwork keeps its pixels
    let img = if img.width() > ARTWORK_SIZE || img.height() > ARTWORK_SIZE {
        img.resize(ARTWORK_SIZE, ARTWORK_SIZE, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
