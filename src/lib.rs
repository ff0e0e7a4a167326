//! # stackpad
//!
//! RPN calculator for the terminal.
//!
//! The calculator is a bounded stack of floats plus a single editable
//! operand line, driven entirely by logical button labels ("5", ".",
//! "ENTER", "+", "SWAP", ...). Labels arrive from mouse clicks on the
//! keypad, from key presses, or from a pre-tokenized batch sequence —
//! the engine does not care which.
//!
//! ## Architecture
//!
//! ```text
//! input event → button label → Engine::process → render request → repaint
//! ```
//!
//! The engine is a plain aggregate with no interior threading or I/O;
//! the frontend re-reads its state through accessors whenever a render
//! request comes back.
//!
//! ## Modules
//!
//! - [`engine`] - Calculator state: number stack, display buffer, dispatch
//! - [`batch`] - Non-interactive token replay, auto-ENTER quirk included
//! - [`ui`] - crossterm frontend: keypad grid, stack view, event loop
//! - [`cli`] - Command-line arguments and batch file loading

pub mod batch;
pub mod cli;
pub mod engine;
pub mod ui;

// Re-export commonly used items
pub use engine::{
    Action, BinaryOp, DISPLAY_CAPACITY, DisplayBuffer, Engine, NumberStack, RenderRequest,
    STACK_CAPACITY,
};
