/// Artwork card: image layer plus an info overlay
///
/// The overlay appears while the pointer hovers the card (the `hover`
/// widget) or while the card's forced-visible flag is set by touch.
use iced::widget::{column, container, hover, image, row, stack, text, Space};
use iced::{alignment, font, Alignment, Background, Border, ContentFit, Element, Font, Length, Shadow, Vector};

use super::palette;
use super::touch::touch_area;
use crate::state::card::{CardState, ImageSlot};
use crate::Message;

const CARD_RADIUS: f32 = 24.0;

/// Build one card as a square of `side` pixels
pub fn view(card: &CardState, side: f32) -> Element<'_, Message> {
    let base = image_layer(card);
    let overlay = overlay_layer(card);

    // Touch keeps the overlay up; otherwise hover decides, dimming the art
    let layers: Element<'_, Message> = if card.is_forced_visible() {
        stack![base, overlay].into()
    } else {
        let dim = filled(palette::hover_dim(), Space::new(Length::Fill, Length::Fill));
        hover(base, stack![dim, overlay])
    };

    let id = card.artwork().id;
    let framed = container(layers)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .clip(true)
        .style(|_theme| container::Style {
            background: Some(Background::Color(iced::Color::WHITE)),
            border: Border {
                color: iced::Color::WHITE,
                width: 4.0,
                radius: CARD_RADIUS.into(),
            },
            shadow: Shadow {
                color: palette::card_shadow(),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
            ..container::Style::default()
        });

    touch_area(framed, Message::TouchStarted(id), Message::TouchEnded(id)).into()
}

fn image_layer(card: &CardState) -> Element<'_, Message> {
    match card.image() {
        ImageSlot::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSlot::Loading => filled(palette::image_well(), Space::new(Length::Fill, Length::Fill)),
        ImageSlot::Placeholder => filled(
            palette::placeholder_background(),
            text("CUTE ART")
                .size(40)
                .color(palette::placeholder_caption())
                .font(bold(font::Weight::Bold)),
        ),
    }
}

fn overlay_layer(card: &CardState) -> Element<'_, Message> {
    let art = card.artwork();
    let status = palette::status_palette(art.status.tone());

    let title = text(&art.title)
        .size(24)
        .color(iced::Color::WHITE)
        .font(bold(font::Weight::Black))
        .align_x(alignment::Horizontal::Center);

    let date = row![
        text("📅").size(18).color(palette::date_icon()),
        text(format!("Created: {}", art.created_date))
            .size(16)
            .color(iced::Color::WHITE)
            .font(bold(font::Weight::Semibold)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let badge = container(
        text(art.status.label())
            .size(14)
            .color(status.text)
            .font(bold(font::Weight::ExtraBold)),
    )
    .padding([4, 12])
    .style(move |_theme| container::Style {
        background: Some(Background::Color(status.badge)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    let status_row = row![
        text("🏷").size(18).color(status.text),
        text("Status:")
            .size(16)
            .color(iced::Color::WHITE)
            .font(bold(font::Weight::Semibold)),
        badge,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let heart = text("♥").size(32).color(palette::heart());

    let content = column![
        title,
        Space::with_height(16),
        column![date, status_row].spacing(16),
        Space::with_height(24),
        heart,
    ]
    .align_x(Alignment::Center);

    filled(palette::overlay(), content)
}

/// Center `content` on a full-size solid background
fn filled<'a>(color: iced::Color, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        })
        .into()
}

fn bold(weight: font::Weight) -> Font {
    Font {
        weight,
        ..Font::DEFAULT
    }
}
