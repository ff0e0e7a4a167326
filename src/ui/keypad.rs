//! Keypad - button grid layout and hit testing
//!
//! The fixed 6x4 button grid and the cell geometry of the calculator
//! surface. Everything is in terminal cells; buttons are uniform
//! bordered boxes, so mapping a click back to a label is pure index
//! arithmetic.

/// Button labels by `[row][column]`.
pub const KEYPAD: [[&str; KEYPAD_COLUMNS]; KEYPAD_ROWS] = [
    ["C", "AC", "POP", "SWAP"],
    ["%", "^", "1/x", "+/-"],
    ["7", "8", "9", "+"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "*"],
    [".", "0", "ENTER", "/"],
];

pub const KEYPAD_ROWS: usize = 6;
pub const KEYPAD_COLUMNS: usize = 4;

/// Button size in cells, border included.
pub const BUTTON_WIDTH: u16 = 9;
pub const BUTTON_HEIGHT: u16 = 3;

/// Rows of stack history shown at the top of the surface.
pub const STACK_VIEW_DEPTH: usize = 3;

/// Row of the operand line, right under the stack view.
pub const DISPLAY_ROW: u16 = STACK_VIEW_DEPTH as u16;

/// First row of the keypad; one blank row separates it from the display.
pub const KEYPAD_TOP: u16 = DISPLAY_ROW + 2;

/// Total size of the drawn surface.
pub const SURFACE_WIDTH: u16 = BUTTON_WIDTH * KEYPAD_COLUMNS as u16;
pub const SURFACE_HEIGHT: u16 = KEYPAD_TOP + BUTTON_HEIGHT * KEYPAD_ROWS as u16;

/// Map a terminal cell to the button under it.
///
/// Cells above the keypad, or past the right or bottom edge of the
/// grid, land on no button.
pub fn hit_test(column: u16, row: u16) -> Option<&'static str> {
    if row < KEYPAD_TOP {
        return None;
    }
    let grid_row = ((row - KEYPAD_TOP) / BUTTON_HEIGHT) as usize;
    let grid_column = (column / BUTTON_WIDTH) as usize;
    if grid_row < KEYPAD_ROWS && grid_column < KEYPAD_COLUMNS {
        Some(KEYPAD[grid_row][grid_column])
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
