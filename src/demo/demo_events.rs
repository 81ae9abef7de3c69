use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::demo_state::DemoApp;

impl DemoApp {
    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C: Exit application
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Ctrl+Space: open the list, also from inside an open one
        if ctrl && key.code == KeyCode::Char(' ') {
            self.start_completion();
            return;
        }

        if self.session.is_active() && self.handle_list_key(key) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.start_completion(),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {}
            KeyCode::Char(_) | KeyCode::Right | KeyCode::End => self.edit(key, false),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Home => {
                self.edit(key, true)
            }
            _ => {}
        }
    }

    /// Keys the open list consumes. Returns true when the key was handled.
    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        let page = self.session.list_box().options().max_visible_rows as isize;
        match key.code {
            KeyCode::Esc => self.session.cancel(),
            KeyCode::Up => self.session.move_selection(-1),
            KeyCode::Down => self.session.move_selection(1),
            KeyCode::PageUp => self.session.move_selection(-page),
            KeyCode::PageDown => self.session.move_selection(page),
            KeyCode::Enter | KeyCode::Tab => self.accept(),
            KeyCode::Char(c) if self.session.is_stop_char(c) => {
                self.session.cancel();
                return false;
            }
            KeyCode::Char(c) if self.session.is_fill_up_char(c) => {
                self.accept();
                return false;
            }
            _ => return false,
        }
        true
    }

    fn edit(&mut self, key: KeyEvent, moved_back: bool) {
        self.textarea.input(key);
        if self.session.is_active() {
            self.update_completion(moved_back);
        }
    }
}

#[cfg(test)]
#[path = "demo_events_tests.rs"]
mod demo_events_tests;
