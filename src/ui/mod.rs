//! UI Module - the interactive terminal frontend
//!
//! Owns the event loop: blocking event read → conversion to a logical
//! button label → engine dispatch → repaint of the regions that can
//! have changed. The engine never sees a terminal; the frontend never
//! computes — all state lives behind [`Engine`](crate::engine::Engine)
//! accessors.
//!
//! - [`keypad`] - Button grid layout and hit testing
//! - [`input`] - crossterm event conversion
//! - [`screen`] - Surface drawing and region repaint

pub mod input;
pub mod keypad;
pub mod screen;

pub use input::UiEvent;
pub use screen::{Region, Screen};

use std::io;

use crate::engine::Engine;

/// Run the interactive calculator until the user quits.
///
/// The terminal is restored even when the loop fails; the first error
/// of loop-then-restore wins.
pub fn run(engine: &mut Engine) -> io::Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;
    let result = event_loop(engine, &mut screen);
    let restored = screen.leave();
    result.and(restored)
}

fn event_loop(engine: &mut Engine, screen: &mut Screen) -> io::Result<()> {
    screen.draw(engine, Region::all())?;
    loop {
        match input::read_event()? {
            UiEvent::Press(label) => {
                engine.process(label);
                screen.draw(engine, Region::STACK | Region::DISPLAY)?;
            }
            UiEvent::Redraw => screen.draw(engine, Region::all())?,
            UiEvent::Quit => return Ok(()),
            UiEvent::None => {}
        }
    }
}
