//! Engine Module - calculator state and operations
//!
//! The engine owns the two pieces of calculator state: the bounded
//! [`NumberStack`] and the [`DisplayBuffer`] holding the operand under
//! entry. Input arrives through [`Engine::process`] as logical button
//! labels; every call mutates state and hands back a [`RenderRequest`]
//! telling the caller to re-read and redraw. The engine never raises:
//! malformed operands read as zero, division by zero follows IEEE
//! semantics, a full stack swallows the push, and unknown labels are
//! typed into the display.
//!
//! Single-threaded by design — operations run to completion before the
//! next label is dispatched, and the engine has no interior locking. A
//! caller with its own input thread must serialize calls itself.
//!
//! # Example
//!
//! ```
//! use stackpad::engine::Engine;
//!
//! let mut engine = Engine::new();
//! for label in ["5", "ENTER", "3", "+"] {
//!     engine.process(label);
//! }
//! assert_eq!(engine.current_display(), "8");
//! ```

pub mod dispatch;
pub mod display;
pub mod format;
pub mod stack;

pub use dispatch::{Action, BinaryOp, action_for};
pub use display::{DISPLAY_CAPACITY, DisplayBuffer};
pub use format::{format_general, parse_lenient};
pub use stack::{NumberStack, STACK_CAPACITY};

/// Notification that engine state changed and the screen is stale.
///
/// Carries no payload on purpose: the caller re-reads the stack and
/// display through the accessors when it redraws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest;

/// Calculator state aggregate: the value stack plus the operand line.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    stack: NumberStack,
    display: DisplayBuffer,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            stack: NumberStack::new(),
            display: DisplayBuffer::new(),
        }
    }

    /// Dispatch one button label.
    pub fn process(&mut self, label: &str) -> RenderRequest {
        match action_for(label) {
            Action::ClearDisplay => self.display.reset(),
            Action::AllClear => self.all_clear(),
            Action::Pop => self.pop(),
            Action::Swap => self.swap(),
            Action::Percentage => self.percentage(),
            Action::Inverse => self.inverse(),
            Action::ToggleSign => self.display.toggle_sign(),
            Action::DecimalPoint => self.display.insert_decimal_point(),
            Action::Push => self.push(),
            Action::Compute(op) => self.compute(op),
            Action::Append => self.display.append(label),
        }
        RenderRequest
    }

    /// Commit the operand to the stack and reset the display.
    ///
    /// Saturates at capacity: when the head cannot advance the whole
    /// push is ignored and the operand stays put.
    pub fn push(&mut self) {
        let value = self.display.value();
        if self.stack.advance(value) {
            self.display.reset();
        }
    }

    /// Discard the top of the stack into the display.
    ///
    /// Popping with the head already at the resting slot clears every
    /// slot instead, and the display shows the zeroed slot.
    pub fn pop(&mut self) {
        match self.stack.retreat() {
            Some(discarded) => self.display.set_value(discarded),
            None => {
                self.stack.clear_slots();
                self.display.set_value(self.stack.top());
            }
        }
    }

    /// Exchange the operand with the top of the stack.
    pub fn swap(&mut self) {
        let previous = self.stack.top();
        let value = self.display.value();
        self.stack.set_top(value);
        self.display.set_value(previous);
    }

    /// Combine the top of the stack with the operand.
    ///
    /// The result lands in the display, not on the stack; the head
    /// retreats one slot, or the stack clears when the head is already
    /// resting — the same asymmetry as [`Engine::pop`].
    pub fn compute(&mut self, op: BinaryOp) {
        let result = op.apply(self.stack.top(), self.display.value());
        if self.stack.retreat().is_none() {
            self.stack.clear_slots();
        }
        self.display.set_value(result);
    }

    /// Replace the operand with `top * (operand / 100)`.
    ///
    /// The stack is read but never moved.
    pub fn percentage(&mut self) {
        let result = self.stack.top() * (self.display.value() / 100.0);
        self.display.set_value(result);
    }

    /// Replace the operand with its reciprocal. Zero gives infinity.
    pub fn inverse(&mut self) {
        self.display.set_value(1.0 / self.display.value());
    }

    /// Zero every stack slot without moving the head.
    pub fn clear_stack(&mut self) {
        self.stack.clear_slots();
    }

    /// Reset the display and zero every slot. The head stays put.
    pub fn all_clear(&mut self) {
        self.display.reset();
        self.stack.clear_slots();
    }

    /// Text currently shown in the display line.
    pub fn current_display(&self) -> &str {
        self.display.as_str()
    }

    /// The most recent stack entries, formatted, deepest first.
    ///
    /// Always returns exactly `depth` strings; entries below the resting
    /// slot render as `"0"` so the stack view keeps its height.
    pub fn stack_snapshot(&self, depth: usize) -> Vec<String> {
        (0..depth)
            .rev()
            .map(|back| match self.stack.value_below(back) {
                Some(value) => format_general(value),
                None => String::from("0"),
            })
            .collect()
    }

    /// Shared view of the stack, for rendering and inspection.
    pub fn stack(&self) -> &NumberStack {
        &self.stack
    }
}

// =============================================================================
// TESTS
// =============================================================================
