use std::path::PathBuf;
use std::time::Duration;

/// How long a touched overlay stays up after the finger lifts
pub const TOUCH_LINGER: Duration = Duration::from_millis(2000);

/// Resolution of the reset poll while any overlay is lingering
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Fallback shown when an artwork image cannot be loaded
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x600/F9A8D4/6D28D9?text=CUTE+ART";

/// Gallery settings. There is no config file; everything comes from `Default`.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Directory image references are resolved against
    pub asset_dir: PathBuf,
    pub touch_linger: Duration,
    pub tick_interval: Duration,
    pub placeholder: String,
    /// Banner image in the header
    pub title_image: String,
    pub studio_name: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("public"),
            touch_linger: TOUCH_LINGER,
            tick_interval: TICK_INTERVAL,
            placeholder: PLACEHOLDER_IMAGE.to_string(),
            title_image: "web.png".to_string(),
            studio_name: "Gwen's Art Space".to_string(),
        }
    }
}
