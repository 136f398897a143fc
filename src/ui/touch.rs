/// Touch tracking wrapper for cards
///
/// Publishes a message when a finger goes down inside the wrapped content,
/// and another when that same finger lifts or is lost, wherever it ends up.
/// Events are never captured, so an enclosing scrollable still receives
/// the finger and can start a touch scroll.
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::{self, Event};
use iced::{mouse, touch, Element, Length, Rectangle, Size};

/// Which edge of a touch a tracker reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Ended,
}

/// Follows the one finger that pressed inside a widget
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TouchTracker {
    finger: Option<touch::Finger>,
}

impl TouchTracker {
    /// Feed one touch event. Presses count only inside `bounds`;
    /// lifts and losses of the tracked finger count anywhere.
    pub fn update(&mut self, event: &touch::Event, bounds: Rectangle) -> Option<TouchPhase> {
        match *event {
            touch::Event::FingerPressed { id, position }
                if self.finger.is_none() && bounds.contains(position) =>
            {
                self.finger = Some(id);
                Some(TouchPhase::Started)
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }
                if self.finger == Some(id) =>
            {
                self.finger = None;
                Some(TouchPhase::Ended)
            }
            _ => None,
        }
    }
}

pub struct TouchArea<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_start: Message,
    on_end: Message,
}

impl<'a, Message, Theme, Renderer> TouchArea<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_start: Message,
        on_end: Message,
    ) -> Self {
        Self {
            content: content.into(),
            on_start,
            on_end,
        }
    }
}

/// Wrap `content` so touches on it publish `on_start` / `on_end`
pub fn touch_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_start: Message,
    on_end: Message,
) -> TouchArea<'a, Message, Theme, Renderer> {
    TouchArea::new(content, on_start, on_end)
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TouchArea<'a, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<TouchTracker>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(TouchTracker::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if let Event::Touch(touch_event) = &event {
            let tracker = tree.state.downcast_mut::<TouchTracker>();
            match tracker.update(touch_event, layout.bounds()) {
                Some(TouchPhase::Started) => shell.publish(self.on_start.clone()),
                Some(TouchPhase::Ended) => shell.publish(self.on_end.clone()),
                None => {}
            }
        }

        // Observe only; the finger stays available to scrollables
        status
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<TouchArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: TouchArea<'a, Message, Theme, Renderer>) -> Self {
        Element::new(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn card_bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(300.0, 300.0))
    }

    fn pressed(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerPressed {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn moved(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerMoved {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn lifted(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerLifted {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_and_lift_inside() {
        let mut tracker = TouchTracker::default();
        assert_eq!(tracker.update(&pressed(1, 50.0, 50.0), card_bounds()), Some(TouchPhase::Started));
        assert!(tracker.finger.is_some());
        assert_eq!(tracker.update(&lifted(1, 60.0, 60.0), card_bounds()), Some(TouchPhase::Ended));
        assert!(tracker.finger.is_none());
    }

    #[test]
    fn test_lift_after_sliding_off_card_still_ends() {
        let mut tracker = TouchTracker::default();
        tracker.update(&pressed(1, 50.0, 50.0), card_bounds());
        assert_eq!(tracker.update(&moved(1, 500.0, 50.0), card_bounds()), None);
        assert_eq!(tracker.update(&lifted(1, 500.0, 50.0), card_bounds()), Some(TouchPhase::Ended));
    }

    #[test]
    fn test_lost_finger_ends() {
        let mut tracker = TouchTracker::default();
        tracker.update(&pressed(4, 10.0, 10.0), card_bounds());

        let lost = touch::Event::FingerLost {
            id: touch::Finger(4),
            position: Point::new(900.0, 900.0),
        };
        assert_eq!(tracker.update(&lost, card_bounds()), Some(TouchPhase::Ended));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut tracker = TouchTracker::default();
        assert_eq!(tracker.update(&pressed(1, 400.0, 50.0), card_bounds()), None);
        assert_eq!(tracker.update(&lifted(1, 50.0, 50.0), card_bounds()), None);
    }

    #[test]
    fn test_other_finger_lift_is_ignored() {
        let mut tracker = TouchTracker::default();
        tracker.update(&pressed(1, 50.0, 50.0), card_bounds());
        assert_eq!(tracker.update(&pressed(2, 60.0, 60.0), card_bounds()), None);
        assert_eq!(tracker.update(&lifted(2, 60.0, 60.0), card_bounds()), None);
        assert!(tracker.finger.is_some());
        assert_eq!(tracker.update(&lifted(1, 60.0, 60.0), card_bounds()), Some(TouchPhase::Ended));
    }

    fn feed(
        element: &mut Element<'_, &'static str, iced::Theme, ()>,
        tree: &mut Tree,
        event: touch::Event,
        messages: &mut Vec<&'static str>,
    ) -> event::Status {
        let node = layout::Node::new(Size::new(300.0, 300.0));
        let viewport = Rectangle::new(Point::ORIGIN, Size::new(1000.0, 1000.0));
        let mut clipboard = iced::advanced::clipboard::Null;
        let mut shell = Shell::new(messages);

        element.as_widget_mut().on_event(
            tree,
            Event::Touch(event),
            Layout::new(&node),
            mouse::Cursor::Unavailable,
            &(),
            &mut clipboard,
            &mut shell,
            &viewport,
        )
    }

    #[test]
    fn test_widget_ends_touch_lifted_off_card_without_capturing() {
        let area: TouchArea<'_, &'static str, iced::Theme, ()> =
            touch_area(iced::widget::Space::new(300.0, 300.0), "start", "end");
        let mut element: Element<'_, &'static str, iced::Theme, ()> = area.into();
        let mut tree = Tree::new(&element);
        let mut messages = Vec::new();

        let status = feed(&mut element, &mut tree, pressed(1, 50.0, 50.0), &mut messages);
        assert_eq!(status, event::Status::Ignored);

        feed(&mut element, &mut tree, moved(1, 500.0, 50.0), &mut messages);
        feed(&mut element, &mut tree, lifted(1, 500.0, 50.0), &mut messages);

        assert_eq!(messages, vec!["start", "end"]);
    }
}
