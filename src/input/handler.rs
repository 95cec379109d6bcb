use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::{CameraMode, Command};

/// Maps terminal key and mouse events to simulation commands
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Command::MoveForward),
            KeyCode::Down => Some(Command::MoveBack),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveForward),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveBack),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),

            KeyCode::Char(' ') => Some(Command::Jump),

            // Views 1-5
            KeyCode::Char(c @ '1'..='5') => c
                .to_digit(10)
                .and_then(|digit| CameraMode::try_from(digit as u8).ok())
                .map(Command::SelectView),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

            _ => None,
        }
    }

    /// A left click becomes a one-unit look nudge away from the clicked side
    /// of the screen. `area` is the terminal size in cells.
    pub fn handle_mouse_event(&self, mouse: MouseEvent, area: (u16, u16)) -> Option<Command> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let (width, height) = area;
        let pointer_x = i32::from(mouse.column) - i32::from(width / 2);
        let pointer_y = i32::from(height / 2) - i32::from(mouse.row);

        let dx = if pointer_x > 0 { -1 } else { 1 };
        let dy = if pointer_y > 0 { -1 } else { 1 };
        Some(Command::DragLook { dx, dy })
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(key(KeyCode::Up)), Some(Command::MoveForward));
        assert_eq!(handler.handle_key_event(key(KeyCode::Down)), Some(Command::MoveBack));
        assert_eq!(handler.handle_key_event(key(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(handler.handle_key_event(key(KeyCode::Right)), Some(Command::MoveRight));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w'))),
            Some(Command::MoveForward)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('a'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s'))),
            Some(Command::MoveBack)
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(d_upper), Some(Command::MoveRight));
    }

    #[test]
    fn test_view_keys() {
        let handler = InputHandler::new();

        let expected = [
            ('1', CameraMode::Adventure),
            ('2', CameraMode::FollowCam),
            ('3', CameraMode::Tower),
            ('4', CameraMode::Top),
            ('5', CameraMode::Helicopter),
        ];
        for (c, mode) in expected {
            assert_eq!(
                handler.handle_key_event(key(KeyCode::Char(c))),
                Some(Command::SelectView(mode))
            );
        }
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_jump_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char(' '))), Some(Command::Jump));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(handler.handle_key_event(key(KeyCode::Esc)), Some(Command::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handler.handle_key_event(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_click_quadrants() {
        let handler = InputHandler::new();
        let area = (80, 24);

        // upper right of centre
        assert_eq!(
            handler.handle_mouse_event(click(70, 2), area),
            Some(Command::DragLook { dx: -1, dy: -1 })
        );
        // lower left of centre
        assert_eq!(
            handler.handle_mouse_event(click(5, 20), area),
            Some(Command::DragLook { dx: 1, dy: 1 })
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handler.handle_mouse_event(release, (80, 24)), None);

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handler.handle_mouse_event(right, (80, 24)), None);
    }
}
