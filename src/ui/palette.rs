/// Pastel colors for the gallery page
use iced::gradient::{self, Gradient};
use iced::{Background, Color, Degrees};

use crate::state::data::Tone;

/// Text and badge colors for one status tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPalette {
    pub text: Color,
    pub badge: Color,
}

/// Red for sold, green for available
pub fn status_palette(tone: Tone) -> StatusPalette {
    match tone {
        Tone::Red => StatusPalette {
            text: Color::from_rgb8(0xDC, 0x26, 0x26),
            badge: Color::from_rgba8(0xFE, 0xCA, 0xCA, 0.8),
        },
        Tone::Green => StatusPalette {
            text: Color::from_rgb8(0x16, 0xA3, 0x4A),
            badge: Color::from_rgba8(0xBB, 0xF7, 0xD0, 0.8),
        },
    }
}

/// Yellow fading into pink toward the bottom right
pub fn page_background() -> Background {
    let linear = gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, Color::from_rgb8(0xFE, 0xF9, 0xC3))
        .add_stop(1.0, Color::from_rgb8(0xFB, 0xCF, 0xE8));

    Background::Gradient(Gradient::Linear(linear))
}

pub fn ink() -> Color {
    Color::from_rgb8(0x1F, 0x29, 0x37)
}

pub fn muted_ink() -> Color {
    Color::from_rgb8(0x4B, 0x55, 0x63)
}

pub fn heading() -> Color {
    Color::from_rgb8(0x7E, 0x22, 0xCE)
}

pub fn accent_yellow() -> Color {
    Color::from_rgb8(0xFA, 0xCC, 0x15)
}

pub fn date_icon() -> Color {
    Color::from_rgb8(0xFD, 0xE0, 0x47)
}

pub fn overlay() -> Color {
    Color::from_rgba8(0xF9, 0xA8, 0xD4, 0.9)
}

pub fn card_shadow() -> Color {
    Color::from_rgba8(0xF9, 0xA8, 0xD4, 0.6)
}

pub fn heart() -> Color {
    Color::from_rgb8(0xFF, 0x63, 0x84)
}

pub fn footer_heart() -> Color {
    Color::from_rgb8(0xEF, 0x44, 0x44)
}

/// Washes the artwork out to half strength under a hovered overlay
pub fn hover_dim() -> Color {
    Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.5)
}

pub fn footer_rule() -> Color {
    Color::from_rgb8(0xF9, 0xA8, 0xD4)
}

/// Placeholder tile: pink background, purple caption
pub fn placeholder_background() -> Color {
    Color::from_rgb8(0xF9, 0xA8, 0xD4)
}

pub fn placeholder_caption() -> Color {
    Color::from_rgb8(0x6D, 0x28, 0xD9)
}

pub fn image_well() -> Color {
    Color::from_rgb8(0xF3, 0xF4, 0xF6)
}
