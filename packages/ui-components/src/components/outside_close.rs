//! Dismiss-on-outside-interaction watcher for the settings panel
//!
//! Inspects runtime events while the panel is open and reports when an
//! interaction should close it: a pointer press landing outside the panel
//! bounds, or Escape. The host is expected to feed it events only while the
//! panel is open (via a conditional subscription), so no handler exists at
//! all while the panel is closed.

use iced::event::Status;
use iced::keyboard::key::Named;
use iced::{keyboard, mouse, Event, Point, Rectangle};

/// Why the panel should close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// A pointer press landed outside the panel bounds
    OutsidePress,
    /// Escape was pressed
    Escape,
}

/// Watches pointer and keyboard activity against a protected region
#[derive(Debug, Clone, PartialEq)]
pub struct OutsideClose {
    bounds: Rectangle,
    cursor: Point,
}

impl OutsideClose {
    /// Watch the given region. The cursor starts inside it, so a press
    /// before any cursor movement never counts as outside.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            cursor: bounds.position(),
        }
    }

    /// The protected region
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Replace the protected region, e.g. after a layout change
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Inspect one runtime event. Presses already captured by a widget
    /// (the panel's own controls, its trigger button) are never treated
    /// as outside interaction, so a toggle press is not double-processed.
    pub fn handle_event(&mut self, event: &Event, status: Status) -> Option<Dismiss> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = *position;
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(_)) => match status {
                Status::Ignored if !self.bounds.contains(self.cursor) => {
                    Some(Dismiss::OutsidePress)
                }
                _ => None,
            },
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(Named::Escape),
                ..
            }) => Some(Dismiss::Escape),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn panel_bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(320.0, 800.0))
    }

    fn cursor_moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn left_press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn escape_press() -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::Escape),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        })
    }

    #[test]
    fn test_press_outside_bounds_dismisses() {
        let mut watcher = OutsideClose::new(panel_bounds());

        assert_eq!(watcher.handle_event(&cursor_moved(600.0, 400.0), Status::Ignored), None);
        assert_eq!(
            watcher.handle_event(&left_press(), Status::Ignored),
            Some(Dismiss::OutsidePress)
        );
    }

    #[test]
    fn test_press_inside_bounds_is_kept() {
        let mut watcher = OutsideClose::new(panel_bounds());

        watcher.handle_event(&cursor_moved(150.0, 300.0), Status::Ignored);
        assert_eq!(watcher.handle_event(&left_press(), Status::Ignored), None);
    }

    #[test]
    fn test_captured_press_never_dismisses() {
        let mut watcher = OutsideClose::new(panel_bounds());

        // A press consumed by a widget (e.g. the trigger button) must not
        // be re-processed as an outside click, wherever the cursor is.
        watcher.handle_event(&cursor_moved(600.0, 400.0), Status::Ignored);
        assert_eq!(watcher.handle_event(&left_press(), Status::Captured), None);
    }

    #[test]
    fn test_press_before_any_movement_is_kept() {
        let mut watcher = OutsideClose::new(panel_bounds());
        assert_eq!(watcher.handle_event(&left_press(), Status::Ignored), None);
    }

    #[test]
    fn test_escape_dismisses_unconditionally() {
        let mut watcher = OutsideClose::new(panel_bounds());

        watcher.handle_event(&cursor_moved(10.0, 10.0), Status::Ignored);
        assert_eq!(
            watcher.handle_event(&escape_press(), Status::Ignored),
            Some(Dismiss::Escape)
        );
        assert_eq!(
            watcher.handle_event(&escape_press(), Status::Captured),
            Some(Dismiss::Escape)
        );
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut watcher = OutsideClose::new(panel_bounds());
        watcher.handle_event(&cursor_moved(600.0, 400.0), Status::Ignored);

        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(watcher.handle_event(&release, Status::Ignored), None);

        let other_key = Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::Enter),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        });
        assert_eq!(watcher.handle_event(&other_key, Status::Ignored), None);
    }

    #[test]
    fn test_set_bounds_updates_hit_testing() {
        let mut watcher = OutsideClose::new(panel_bounds());
        watcher.handle_event(&cursor_moved(500.0, 100.0), Status::Ignored);
        assert_eq!(
            watcher.handle_event(&left_press(), Status::Ignored),
            Some(Dismiss::OutsidePress)
        );

        watcher.set_bounds(Rectangle::new(Point::ORIGIN, Size::new(640.0, 800.0)));
        assert_eq!(watcher.handle_event(&left_press(), Status::Ignored), None);
    }
}
