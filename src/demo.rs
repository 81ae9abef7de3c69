//! Terminal demo host
//!
//! A one-line editor that owns the key routing around an
//! [`AutocompleteSession`](crate::autocomplete::AutocompleteSession): it
//! decides when a list opens, what word to search for, and what accepting
//! an item does to the text.

mod demo_events;
mod demo_render;
mod demo_state;

pub use demo_render::render;
pub use demo_state::DemoApp;

use std::io;

use ratatui::DefaultTerminal;
use crossterm::event::{self, Event, KeyEventKind};

/// Draw and handle key presses until the user quits.
pub fn run(terminal: &mut DefaultTerminal, app: &mut DemoApp) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render(app, frame))?;

        // Only process key press events (avoid duplicates)
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
