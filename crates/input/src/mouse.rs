//! Pointer handling for the on-screen "New Game" button.

use crate::types::{GameAction, Rect};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// What a mouse event means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerOutcome {
    /// New hover state of the button, if the event carried a position update
    pub hover: Option<bool>,
    pub action: Option<GameAction>,
}

/// Map a mouse event against the button's current on-screen area.
pub fn handle_mouse_event(event: MouseEvent, new_game_button: Rect) -> PointerOutcome {
    let inside = new_game_button.contains(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerOutcome {
            hover: Some(inside),
            action: inside.then_some(GameAction::NewGame),
        },
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerOutcome {
            hover: Some(inside),
            action: None,
        },
        _ => PointerOutcome::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const BUTTON: Rect = Rect::new(10, 1, 8, 3);

    #[test]
    fn click_inside_button_starts_new_game() {
        let out = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 2), BUTTON);
        assert_eq!(out.action, Some(GameAction::NewGame));
        assert_eq!(out.hover, Some(true));
    }

    #[test]
    fn click_outside_button_does_nothing() {
        let out = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2), BUTTON);
        assert_eq!(out.action, None);
        assert_eq!(out.hover, Some(false));
    }

    #[test]
    fn right_click_is_ignored() {
        let click = mouse(MouseEventKind::Down(MouseButton::Right), 12, 2);
        let out = handle_mouse_event(click, BUTTON);
        assert_eq!(out, PointerOutcome::default());
    }

    #[test]
    fn motion_updates_hover() {
        let over = handle_mouse_event(mouse(MouseEventKind::Moved, 17, 3), BUTTON);
        assert_eq!(over.hover, Some(true));
        let off = handle_mouse_event(mouse(MouseEventKind::Moved, 18, 3), BUTTON);
        assert_eq!(off.hover, Some(false));
        assert_eq!(off.action, None);
    }
}
