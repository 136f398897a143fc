/// Gallery views
///
/// - `page.rs` composes header, grid and footer
/// - `card.rs` draws a single artwork card
/// - `palette.rs` holds the pastel colors and status tones
/// - `touch.rs` reports finger down/up on a card without stealing scrolls

pub mod card;
pub mod page;
pub mod palette;
pub mod touch;
