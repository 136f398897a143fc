use iced::widget::image::Handle;
use iced::widget::responsive;
use iced::{Element, Subscription, Task, Theme};
use std::time::Instant;
use tracing_subscriber::filter::EnvFilter;

mod assets;
mod config;
mod state;
mod ui;

use assets::LoadError;
use config::GalleryConfig;
use state::card::CardState;
use state::catalog::{ArtworkSource, SeedCatalog};
use state::data::ArtworkId;

/// Main application state
struct Gallery {
    config: GalleryConfig,
    /// One card per artwork, in catalog order
    cards: Vec<CardState>,
    /// Header banner, once decoded
    title_image: Option<Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Finger went down on a card
    TouchStarted(ArtworkId),
    /// Finger lifted; the overlay lingers before hiding
    TouchEnded(ArtworkId),
    /// Periodic poll while any overlay reset is pending
    Tick(Instant),
    /// Background decode of a card image finished
    ArtworkLoaded(ArtworkId, Result<Handle, LoadError>),
    /// Background decode of the header banner finished
    TitleLoaded(Result<Handle, LoadError>),
}

impl Gallery {
    /// Create a new instance of the application from the embedded portfolio
    fn new() -> (Self, Task<Message>) {
        Self::with_source(GalleryConfig::default(), &SeedCatalog::new())
    }

    /// Build cards from any artwork source and start loading their images
    fn with_source(config: GalleryConfig, source: &impl ArtworkSource) -> (Self, Task<Message>) {
        let cards: Vec<CardState> = source
            .artworks()
            .iter()
            .cloned()
            .map(|art| CardState::new(art, config.touch_linger))
            .collect();

        tracing::info!("🎨 Gallery initialized with {} artworks", cards.len());

        let mut tasks: Vec<Task<Message>> = cards
            .iter()
            .map(|card| {
                let id = card.artwork().id;
                Task::perform(
                    assets::load_artwork(config.asset_dir.clone(), card.image_ref().to_string()),
                    move |result| Message::ArtworkLoaded(id, result),
                )
            })
            .collect();

        tasks.push(Task::perform(
            assets::load_artwork(config.asset_dir.clone(), config.title_image.clone()),
            Message::TitleLoaded,
        ));

        (
            Gallery {
                config,
                cards,
                title_image: None,
            },
            Task::batch(tasks),
        )
    }

    fn card_mut(&mut self, id: ArtworkId) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|card| card.artwork().id == id)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TouchStarted(id) => {
                if let Some(card) = self.card_mut(id) {
                    card.touch_start();
                }
            }
            Message::TouchEnded(id) => {
                if let Some(card) = self.card_mut(id) {
                    card.touch_end(Instant::now());
                }
            }
            Message::Tick(now) => {
                for card in &mut self.cards {
                    if card.tick(now) {
                        tracing::debug!(id = card.artwork().id, "overlay reset");
                    }
                }
            }
            Message::ArtworkLoaded(id, Ok(handle)) => {
                if let Some(card) = self.card_mut(id) {
                    card.image_loaded(handle);
                }
            }
            Message::ArtworkLoaded(id, Err(err)) => {
                let placeholder = self.config.placeholder.clone();
                if let Some(card) = self.card_mut(id) {
                    if card.image_failed(&placeholder) {
                        tracing::warn!(id, error = %err, "⚠️  artwork unavailable, showing placeholder");
                    }
                }
            }
            Message::TitleLoaded(Ok(handle)) => {
                self.title_image = Some(handle);
            }
            Message::TitleLoaded(Err(err)) => {
                tracing::warn!(error = %err, "title image unavailable, using text title");
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        responsive(move |size| {
            ui::page::view(&self.config, self.title_image.as_ref(), &self.cards, size.width)
        })
        .into()
    }

    /// Poll lingering overlays only while one is waiting to hide
    fn subscription(&self) -> Subscription<Message> {
        if self.cards.iter().any(CardState::has_pending_reset) {
            iced::time::every(self.config.tick_interval).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Initialize logging to stderr, honoring RUST_LOG
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Gwen's Art Space", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}
