//! Screen Module - drawing the calculator surface
//!
//! Three regions: the stack view (three most recent entries), the
//! operand line, and the keypad grid. Dirty regions are tracked as
//! flags so a state change repaints the two text lines without
//! repainting the keypad, which only changes shape on resize. All
//! drawing is queued and flushed once per repaint.

use std::io::{self, Stdout, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::keypad::{
    BUTTON_HEIGHT, BUTTON_WIDTH, DISPLAY_ROW, KEYPAD, KEYPAD_COLUMNS, KEYPAD_ROWS, KEYPAD_TOP,
    STACK_VIEW_DEPTH, SURFACE_WIDTH,
};
use crate::engine::Engine;

// =============================================================================
// REGION FLAGS
// =============================================================================

bitflags::bitflags! {
    /// Screen regions needing repaint.
    ///
    /// Combine with bitwise OR: `Region::STACK | Region::DISPLAY`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Region: u8 {
        const STACK = 1 << 0;
        const DISPLAY = 1 << 1;
        const KEYPAD = 1 << 2;
    }
}

// =============================================================================
// SCREEN
// =============================================================================

/// Terminal-backed calculator surface.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Enter raw mode on the alternate screen and grab the mouse.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            Clear(ClearType::All),
            cursor::Hide,
            EnableMouseCapture,
        )
    }

    /// Undo everything `enter` did.
    pub fn leave(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen,
        )?;
        terminal::disable_raw_mode()
    }

    /// Repaint the requested regions and flush once.
    pub fn draw(&mut self, engine: &Engine, regions: Region) -> io::Result<()> {
        if regions.contains(Region::STACK) {
            self.draw_stack(engine)?;
        }
        if regions.contains(Region::DISPLAY) {
            self.draw_display(engine)?;
        }
        if regions.contains(Region::KEYPAD) {
            self.draw_keypad()?;
        }
        self.out.flush()
    }

    /// The three most recent stack entries, deepest at the top, dimmed
    /// so the operand line below stands out.
    fn draw_stack(&mut self, engine: &Engine) -> io::Result<()> {
        let entries = engine.stack_snapshot(STACK_VIEW_DEPTH);
        for (row, entry) in entries.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16),
                Clear(ClearType::CurrentLine),
                SetAttribute(Attribute::Dim),
                Print(format!("  {entry}")),
                SetAttribute(Attribute::Reset),
            )?;
        }
        Ok(())
    }

    fn draw_display(&mut self, engine: &Engine) -> io::Result<()> {
        let text = clip_tail(engine.current_display(), (SURFACE_WIDTH - 2) as usize);
        queue!(
            self.out,
            cursor::MoveTo(0, DISPLAY_ROW),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Bold),
            Print(format!("  {text}")),
            SetAttribute(Attribute::Reset),
        )
    }

    fn draw_keypad(&mut self) -> io::Result<()> {
        for row in 0..KEYPAD_ROWS {
            for column in 0..KEYPAD_COLUMNS {
                self.draw_button(row, column)?;
            }
        }
        Ok(())
    }

    /// One bordered button with its label centered.
    fn draw_button(&mut self, row: usize, column: usize) -> io::Result<()> {
        let label = KEYPAD[row][column];
        let x = column as u16 * BUTTON_WIDTH;
        let y = KEYPAD_TOP + row as u16 * BUTTON_HEIGHT;
        let inner = (BUTTON_WIDTH - 2) as usize;

        let pad = inner - label.width();
        let left = pad / 2;
        let right = pad - left;

        queue!(
            self.out,
            cursor::MoveTo(x, y),
            Print(format!("┌{}┐", "─".repeat(inner))),
            cursor::MoveTo(x, y + 1),
            Print(format!("│{}{label}{}│", " ".repeat(left), " ".repeat(right))),
            cursor::MoveTo(x, y + 2),
            Print(format!("└{}┘", "─".repeat(inner))),
        )
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the rightmost run of `text` that fits in `columns` cells, so a
/// long operand shows its most recent characters.
fn clip_tail(text: &str, columns: usize) -> &str {
    let mut start = text.len();
    let mut used = 0;
    for (index, ch) in text.char_indices().rev() {
        let width = ch.width().unwrap_or(0);
        if used + width > columns {
            break;
        }
        used += width;
        start = index;
    }
    &text[start..]
}

// =============================================================================
// TESTS
// =============================================================================
