/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - Artwork sources, seed and JSON (catalog.rs)
/// - Per-card overlay and image state (card.rs)

pub mod card;
pub mod catalog;
pub mod data;
