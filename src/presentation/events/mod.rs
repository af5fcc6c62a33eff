//! Event handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal event classification.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key presses the next button.
    #[must_use]
    pub fn is_next_event(key: &KeyEvent) -> bool {
        key.modifiers == KeyModifiers::NONE
            && matches!(key.code, KeyCode::Enter | KeyCode::Char('n' | ' '))
    }

    /// Checks if key event is a press (not a release or repeat).
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Checks if mouse event is a left button press.
    #[must_use]
    pub fn is_primary_click(mouse: &MouseEvent) -> bool {
        matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
    }
}
