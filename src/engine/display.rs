//! Display Buffer - the operand being typed
//!
//! A single line of editable text holding the number under entry. The
//! buffer holds a plausible partial numeric literal, or the `"0"`
//! sentinel it resets to. Edits enforce the capacity bound and the
//! one-decimal-point rule; nothing else is validated, because reading
//! the buffer as a number is lenient by contract.

use super::format::{format_general, parse_lenient};

/// Maximum number of characters the buffer holds. Edits past this point
/// are dropped silently.
pub const DISPLAY_CAPACITY: usize = 256;

/// Value the buffer rests at and resets to.
const SENTINEL: &str = "0";

/// The editable operand line.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayBuffer {
    text: String,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self {
            text: String::from(SENTINEL),
        }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append typed text.
    ///
    /// Typing over the sentinel replaces it; anything else concatenates.
    /// Characters past the capacity are dropped without notice.
    pub fn append(&mut self, text: &str) {
        if self.text == SENTINEL {
            self.text.clear();
        }
        let mut length = self.len();
        for ch in text.chars() {
            if length == DISPLAY_CAPACITY {
                break;
            }
            self.text.push(ch);
            length += 1;
        }
    }

    /// Append the decimal point.
    ///
    /// No-op when a point is already present, so repeated presses leave
    /// the buffer alone. Also a no-op with no room left.
    pub fn insert_decimal_point(&mut self) {
        if !self.text.contains('.') && self.len() < DISPLAY_CAPACITY {
            self.text.push('.');
        }
    }

    /// Flip the sign prefix.
    ///
    /// The sentinel keeps its sign. Removing a minus always succeeds;
    /// adding one needs room for the extra character and is otherwise
    /// skipped — the asymmetry falls out of the capacity bound on
    /// [`DisplayBuffer::insert_at`].
    pub fn toggle_sign(&mut self) {
        if self.text == SENTINEL {
            return;
        }
        if self.text.starts_with('-') {
            self.remove_at(0);
        } else {
            self.insert_at(0, '-');
        }
    }

    /// Insert `ch` before the character at `index`. Ignored at capacity.
    pub fn insert_at(&mut self, index: usize, ch: char) {
        if self.len() == DISPLAY_CAPACITY {
            return;
        }
        let offset = self.byte_offset(index);
        self.text.insert(offset, ch);
    }

    /// Remove the character at `index`. Ignored past the end.
    pub fn remove_at(&mut self, index: usize) {
        let offset = self.byte_offset(index);
        if offset < self.text.len() {
            self.text.remove(offset);
        }
    }

    /// Reset to the sentinel.
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(SENTINEL);
    }

    /// Read the buffer as a number. Unparsable text reads as 0.0.
    pub fn value(&self) -> f64 {
        parse_lenient(&self.text)
    }

    /// Replace the buffer with a formatted value.
    pub fn set_value(&mut self, value: f64) {
        self.text = format_general(value);
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
