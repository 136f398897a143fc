/// Per-card interaction state
///
/// Each card owns a private "forced visible" flag that keeps its overlay
/// on screen during touch interaction, plus the state of its artwork image.
/// Hover visibility is handled declaratively by the view and never
/// touches this state.

use iced::widget::image::Handle;
use std::time::{Duration, Instant};

use super::data::ArtworkRecord;

/// What the card currently shows in its image layer
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Decode still in flight
    Loading,
    /// Artwork decoded and ready to draw
    Ready(Handle),
    /// Artwork failed; the pastel placeholder is drawn instead
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct CardState {
    artwork: ArtworkRecord,
    /// How long the overlay lingers after a touch ends
    linger: Duration,
    forced_visible: bool,
    /// Single pending reset; a newer touch-end replaces it
    reset_at: Option<Instant>,
    image_ref: String,
    image: ImageSlot,
    /// One-shot failure handler, disarmed after the first substitution
    fallback_armed: bool,
}

impl CardState {
    pub fn new(artwork: ArtworkRecord, linger: Duration) -> Self {
        let image_ref = artwork.image_url.clone();
        Self {
            artwork,
            linger,
            forced_visible: false,
            reset_at: None,
            image_ref,
            image: ImageSlot::Loading,
            fallback_armed: true,
        }
    }

    pub fn artwork(&self) -> &ArtworkRecord {
        &self.artwork
    }

    /// True while a touch keeps the overlay up, regardless of hover
    pub fn is_forced_visible(&self) -> bool {
        self.forced_visible
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Finger down: show the overlay right away.
    /// A reset scheduled by an earlier touch-end stays in place.
    pub fn touch_start(&mut self) {
        self.forced_visible = true;
    }

    /// Finger up: hide the overlay once `linger` has passed.
    pub fn touch_end(&mut self, now: Instant) {
        self.reset_at = Some(now + self.linger);
    }

    /// Fire the pending reset if it is due. Returns true if the flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.reset_at = None;
                let changed = self.forced_visible;
                self.forced_visible = false;
                changed
            }
            _ => false,
        }
    }

    /// Reference currently shown (the artwork, or the placeholder after a failure)
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn image(&self) -> &ImageSlot {
        &self.image
    }

    pub fn image_loaded(&mut self, handle: Handle) {
        self.image = ImageSlot::Ready(handle);
    }

    /// Swap in the placeholder the first time the image fails.
    /// Later failures are ignored. Returns true if the substitution happened.
    pub fn image_failed(&mut self, placeholder: &str) -> bool {
        if !self.fallback_armed {
            return false;
        }

        self.fallback_armed = false;
        self.image_ref = placeholder.to_string();
        self.image = ImageSlot::Placeholder;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Status;

    const LINGER: Duration = Duration::from_millis(2000);
    const PLACEHOLDER: &str = "https://placehold.co/600x600/F9A8D4/6D28D9?text=CUTE+ART";

    fn card() -> CardState {
        let art = ArtworkRecord::new(1, "Koal Chibi (Custom)", "10-10-2025", Status::Sold, "1.jpg");
        CardState::new(art, LINGER)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_hidden() {
        let card = card();
        assert!(!card.is_forced_visible());
        assert!(!card.has_pending_reset());
        assert_eq!(card.image_ref(), "1.jpg");
        assert!(matches!(card.image(), ImageSlot::Loading));
    }

    #[test]
    fn test_touch_start_shows_immediately() {
        let mut card = card();
        card.touch_start();
        assert!(card.is_forced_visible());
    }

    #[test]
    fn test_touch_end_hides_after_linger() {
        let t0 = Instant::now();
        let mut card = card();
        card.touch_start();
        card.touch_end(t0);

        assert!(!card.tick(t0 + ms(1999)));
        assert!(card.is_forced_visible());

        assert!(card.tick(t0 + ms(2000)));
        assert!(!card.is_forced_visible());
        assert!(!card.has_pending_reset());
    }

    #[test]
    fn test_retouch_inside_window_still_converges_hidden() {
        let t0 = Instant::now();
        let mut card = card();
        card.touch_start();
        card.touch_end(t0);

        card.tick(t0 + ms(1000));
        card.touch_start();
        assert!(card.is_forced_visible());

        card.tick(t0 + ms(3000));
        assert!(!card.is_forced_visible());
    }

    #[test]
    fn test_second_touch_end_replaces_pending_reset() {
        let t0 = Instant::now();
        let mut card = card();
        card.touch_start();
        card.touch_end(t0);

        card.touch_start();
        card.touch_end(t0 + ms(1000));

        // The first deadline no longer fires
        card.tick(t0 + ms(2500));
        assert!(card.is_forced_visible());

        card.tick(t0 + ms(3000));
        assert!(!card.is_forced_visible());
    }

    #[test]
    fn test_tick_without_pending_reset_is_noop() {
        let mut card = card();
        card.touch_start();
        assert!(!card.tick(Instant::now() + ms(10_000)));
        assert!(card.is_forced_visible());
    }

    #[test]
    fn test_image_failure_substitutes_placeholder_once() {
        let mut card = card();

        assert!(card.image_failed(PLACEHOLDER));
        assert_eq!(card.image_ref(), PLACEHOLDER);
        assert!(matches!(card.image(), ImageSlot::Placeholder));

        assert!(!card.image_failed("another.png"));
        assert_eq!(card.image_ref(), PLACEHOLDER);
    }
}
