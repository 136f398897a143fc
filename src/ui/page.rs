/// Page composition: header banner, responsive artwork grid, footer
use chrono::Datelike;
use iced::widget::image::Handle;
use iced::widget::{column, container, image, row, scrollable, text, Space};
use iced::{font, Alignment, Background, Element, Font, Length};

use super::{card, palette};
use crate::config::GalleryConfig;
use crate::state::card::CardState;
use crate::Message;

/// Content never grows wider than this
const MAX_CONTENT_WIDTH: f32 = 1280.0;

/// Number of grid columns for a given window width
pub fn columns_for_width(width: f32) -> usize {
    match width {
        w if w < 640.0 => 1,
        w if w < 1024.0 => 2,
        w if w < 1280.0 => 3,
        _ => 4,
    }
}

/// Gap between cards, roomier from tablet width up
pub fn gap_for_width(width: f32) -> f32 {
    if width < 768.0 {
        32.0
    } else {
        40.0
    }
}

fn page_padding(width: f32) -> f32 {
    if width < 640.0 {
        16.0
    } else {
        32.0
    }
}

/// Side length of a square card when `columns` share `content_width`
pub fn card_side(content_width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((content_width - gap * (columns - 1.0)) / columns).max(0.0)
}

/// Year shown in the footer, read from the local clock at render time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn footer_line(studio_name: &str, year: i32) -> String {
    format!("© {} {}. Everything is cute!", year, studio_name)
}

/// Build the whole page for a window `width` pixels wide
pub fn view<'a>(
    config: &'a GalleryConfig,
    title_image: Option<&'a Handle>,
    cards: &'a [CardState],
    width: f32,
) -> Element<'a, Message> {
    let padding = page_padding(width);
    let content_width = (width - 2.0 * padding).clamp(0.0, MAX_CONTENT_WIDTH);

    let page = column![
        header(config, title_image),
        gallery(cards, content_width, width),
        footer(config),
    ]
    .width(Length::Fixed(content_width))
    .align_x(Alignment::Center);

    let page = container(page).padding(padding).center_x(Length::Fill);

    container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(palette::page_background()),
            text_color: Some(palette::ink()),
            ..container::Style::default()
        })
        .into()
}

fn header<'a>(config: &'a GalleryConfig, title_image: Option<&'a Handle>) -> Element<'a, Message> {
    let sparkle = text("✨").size(64).color(palette::heading());

    // Text title until the banner image arrives (or if it never does)
    let title: Element<'a, Message> = match title_image {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => text(&config.studio_name)
            .size(56)
            .color(palette::heading())
            .font(Font {
                weight: font::Weight::Black,
                ..Font::DEFAULT
            })
            .into(),
    };

    let title = container(title).max_width(672.0).center_x(Length::Fill);

    column![sparkle, Space::with_height(24), title, Space::with_height(24)]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn gallery<'a>(cards: &'a [CardState], content_width: f32, window_width: f32) -> Element<'a, Message> {
    let heading = text("My Gallery 😸")
        .size(36)
        .color(palette::heading())
        .font(Font {
            weight: font::Weight::ExtraBold,
            ..Font::DEFAULT
        });

    let rule = container(Space::new(Length::Fill, Length::Fixed(4.0))).style(|_theme| container::Style {
        background: Some(Background::Color(palette::accent_yellow())),
        ..container::Style::default()
    });

    let columns = columns_for_width(window_width);
    let gap = gap_for_width(window_width);
    let side = card_side(content_width, columns, gap);

    let mut grid = column![].spacing(gap);
    for chunk in cards.chunks(columns) {
        let mut line = row![].spacing(gap);
        for card_state in chunk {
            line = line.push(card::view(card_state, side));
        }
        grid = grid.push(line);
    }

    column![heading, Space::with_height(16), rule, Space::with_height(40), grid]
        .width(Length::Fill)
        .into()
}

fn footer(config: &GalleryConfig) -> Element<'_, Message> {
    let line = row![
        text(footer_line(&config.studio_name, current_year()))
            .size(14)
            .color(palette::muted_ink()),
        text("♥").size(14).color(palette::footer_heart()),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let rule = container(Space::new(Length::Fill, Length::Fixed(1.0))).style(|_theme| container::Style {
        background: Some(Background::Color(palette::footer_rule())),
        ..container::Style::default()
    });

    column![Space::with_height(128), rule, container(line).padding(40).center_x(Length::Fill)]
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_columns() {
        assert_eq!(columns_for_width(375.0), 1);
        assert_eq!(columns_for_width(639.9), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1279.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
        assert_eq!(columns_for_width(2560.0), 4);
    }

    #[test]
    fn test_gap_widens_at_tablet() {
        assert_eq!(gap_for_width(700.0), 32.0);
        assert_eq!(gap_for_width(768.0), 40.0);
    }

    #[test]
    fn test_card_side_fills_row() {
        let side = card_side(1280.0, 4, 40.0);
        assert_eq!(side, 290.0);
        assert_eq!(side * 4.0 + 40.0 * 3.0, 1280.0);
        assert_eq!(card_side(10.0, 4, 40.0), 0.0);
    }

    #[test]
    fn test_footer_year_matches_clock() {
        assert_eq!(current_year(), chrono::Local::now().year());
        assert_eq!(
            footer_line("Gwen's Art Space", 2025),
            "© 2025 Gwen's Art Space. Everything is cute!"
        );
    }
}
