//! Input Module - crossterm event conversion
//!
//! Bridges crossterm's event stream to logical button presses. A mouse
//! click resolves through the keypad hit test; keys map onto the same
//! labels the keypad produces, so the engine never knows which device
//! was used.
//!
//! # API
//!
//! - `read_event` - Blocking event read
//! - `convert_event` - Convert a crossterm event to a [`UiEvent`]

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind, read,
};

use super::keypad;

// =============================================================================
// UI EVENT ENUM
// =============================================================================

/// Unified event for the calculator loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A logical button was pressed.
    Press(&'static str),
    /// The whole surface must be repainted.
    Redraw,
    /// Leave the application.
    Quit,
    /// Nothing the calculator cares about.
    None,
}

/// Digit labels, indexed by digit value.
const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<UiEvent> {
    Ok(convert_event(read()?))
}

/// Convert a crossterm event to a calculator event.
pub fn convert_event(event: CrosstermEvent) -> UiEvent {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(_, _) => UiEvent::Redraw,
        _ => UiEvent::None,
    }
}

/// Convert a key press to a button label.
///
/// Digits, operators and the decimal point map to themselves; Enter
/// commits, Backspace clears the operand, and the word keys get one
/// mnemonic each. Only press events dispatch.
fn convert_key_event(event: KeyEvent) -> UiEvent {
    if event.kind != KeyEventKind::Press {
        return UiEvent::None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return UiEvent::Quit;
    }
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') => UiEvent::Quit,
        KeyCode::Enter => UiEvent::Press("ENTER"),
        KeyCode::Backspace => UiEvent::Press("C"),
        KeyCode::Char(ch) => match ch {
            '0'..='9' => UiEvent::Press(DIGITS[ch as usize - '0' as usize]),
            '+' => UiEvent::Press("+"),
            '-' => UiEvent::Press("-"),
            '*' => UiEvent::Press("*"),
            '/' => UiEvent::Press("/"),
            '^' => UiEvent::Press("^"),
            '%' => UiEvent::Press("%"),
            '.' => UiEvent::Press("."),
            'i' => UiEvent::Press("1/x"),
            'n' => UiEvent::Press("+/-"),
            'p' => UiEvent::Press("POP"),
            's' => UiEvent::Press("SWAP"),
            'c' => UiEvent::Press("C"),
            'a' => UiEvent::Press("AC"),
            _ => UiEvent::None,
        },
        _ => UiEvent::None,
    }
}

/// Convert a mouse event; only left-button presses land on buttons.
fn convert_mouse_event(event: MouseEvent) -> UiEvent {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match keypad::hit_test(event.column, event.row) {
                Some(label) => UiEvent::Press(label),
                None => UiEvent::None,
            }
        }
        _ => UiEvent::None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_digit_keys_map_to_labels() {
        for (value, label) in DIGITS.iter().enumerate() {
            let ch = char::from_digit(value as u32, 10).unwrap();
            assert_eq!(convert_event(key(KeyCode::Char(ch))), UiEvent::Press(label));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(convert_event(key(KeyCode::Char('+'))), UiEvent::Press("+"));
        assert_eq!(convert_event(key(KeyCode::Char('*'))), UiEvent::Press("*"));
        assert_eq!(convert_event(key(KeyCode::Char('^'))), UiEvent::Press("^"));
        assert_eq!(convert_event(key(KeyCode::Char('.'))), UiEvent::Press("."));
    }

    #[test]
    fn test_word_key_mnemonics() {
        assert_eq!(convert_event(key(KeyCode::Char('p'))), UiEvent::Press("POP"));
        assert_eq!(convert_event(key(KeyCode::Char('s'))), UiEvent::Press("SWAP"));
        assert_eq!(convert_event(key(KeyCode::Char('i'))), UiEvent::Press("1/x"));
        assert_eq!(convert_event(key(KeyCode::Char('n'))), UiEvent::Press("+/-"));
        assert_eq!(convert_event(key(KeyCode::Char('a'))), UiEvent::Press("AC"));
        assert_eq!(convert_event(key(KeyCode::Enter)), UiEvent::Press("ENTER"));
        assert_eq!(convert_event(key(KeyCode::Backspace)), UiEvent::Press("C"));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(convert_event(key(KeyCode::Esc)), UiEvent::Quit);
        assert_eq!(convert_event(key(KeyCode::Char('q'))), UiEvent::Quit);

        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(convert_event(ctrl_c), UiEvent::Quit);
    }

    #[test]
    fn test_plain_c_clears_instead_of_quitting() {
        assert_eq!(convert_event(key(KeyCode::Char('c'))), UiEvent::Press("C"));
    }

    #[test]
    fn test_only_press_events_dispatch() {
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(release), UiEvent::None);
    }

    #[test]
    fn test_left_click_resolves_through_hit_test() {
        let click = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: keypad::KEYPAD_TOP,
            modifiers: KeyModifiers::empty(),
        });
        assert_eq!(convert_event(click), UiEvent::Press("C"));
    }

    #[test]
    fn test_click_off_the_keypad_is_ignored() {
        let click = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        assert_eq!(convert_event(click), UiEvent::None);
    }

    #[test]
    fn test_other_mouse_activity_is_ignored() {
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            let event = CrosstermEvent::Mouse(MouseEvent {
                kind,
                column: 0,
                row: keypad::KEYPAD_TOP,
                modifiers: KeyModifiers::empty(),
            });
            assert_eq!(convert_event(event), UiEvent::None);
        }
    }

    #[test]
    fn test_resize_requests_full_repaint() {
        assert_eq!(convert_event(CrosstermEvent::Resize(80, 24)), UiEvent::Redraw);
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        assert_eq!(convert_event(key(KeyCode::Char('z'))), UiEvent::None);
        assert_eq!(convert_event(key(KeyCode::Tab)), UiEvent::None);
        assert_eq!(convert_event(key(KeyCode::F(1))), UiEvent::None);
    }
}
