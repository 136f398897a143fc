/// Image asset module
///
/// This module handles:
/// - Resolving image references against the asset directory
/// - Reading and decoding artwork off the UI thread

pub mod loader;

pub use loader::{load_artwork, LoadError};
