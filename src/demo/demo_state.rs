use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::autocomplete::{AutocompleteSession, SessionConfig};
use crate::list_box::{ListBox, ListOptions, ListView, Point, ViewParams};

/// Rows taken by the bordered input line.
pub const INPUT_HEIGHT: u16 = 3;
const INPUT_BORDER: u16 = 1;

pub struct DemoApp {
    pub textarea: TextArea<'static>,
    pub session: AutocompleteSession<ListView>,
    candidates: String,
    list_options: ListOptions,
    pub status: String,
    pub should_quit: bool,
}

impl DemoApp {
    pub fn new(candidates: String, config: SessionConfig, list_options: ListOptions) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            session: AutocompleteSession::with_config(ListView::new(), config),
            candidates,
            list_options,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Caret column, in characters.
    pub fn caret(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Column where the word being completed begins.
    pub fn word_start(&self) -> usize {
        self.session
            .pos_start()
            .saturating_sub(self.session.start_len())
    }

    /// Text between the start of the word and the caret.
    pub fn typed_word(&self) -> String {
        let start = self.word_start();
        let caret = self.caret();
        self.text()
            .chars()
            .skip(start)
            .take(caret.saturating_sub(start))
            .collect()
    }

    /// Open the list for the word that ends at the caret.
    pub fn start_completion(&mut self) {
        let caret = self.caret();
        let chars: Vec<char> = self.text().chars().collect();
        let start = chars[..caret.min(chars.len())]
            .iter()
            .rposition(|&c| !is_word_char(c))
            .map_or(0, |i| i + 1);

        let params = ViewParams {
            location: Point::new(
                i32::from(INPUT_BORDER) + start as i32,
                i32::from(INPUT_HEIGHT),
            ),
            line_height: 1,
            options: self.list_options,
            ..ViewParams::default()
        };
        self.session.start(caret, caret - start, &params);
        self.session.set_list(&self.candidates);

        if self.session.config().choose_single && self.session.list_box().len() == 1 {
            self.session.list_box_mut().select(Some(0));
            self.accept();
            return;
        }

        self.session.show(true);
        if caret > start {
            let word = self.typed_word();
            self.session.select(&word);
        }
    }

    /// Replace the typed word with the highlighted item and close the list.
    pub fn accept(&mut self) {
        let selected = self
            .session
            .list_box()
            .selected_item()
            .map(|item| item.word().to_string());

        if let Some(word) = selected {
            let typed = self.caret().saturating_sub(self.word_start());
            for _ in 0..typed {
                self.textarea.delete_char();
            }
            self.textarea.insert_str(&word);
            self.status = format!("Inserted \"{}\"", word);
        }
        self.session.cancel();
    }

    /// Follow the caret after an edit while the list is open.
    pub fn update_completion(&mut self, moved_back: bool) {
        let caret = self.caret();
        let pos_start = self.session.pos_start();
        if caret < self.word_start()
            || (moved_back && self.session.config().cancel_at_start && caret <= pos_start)
        {
            self.session.cancel();
            return;
        }

        let word = self.typed_word();
        if self.session.select(&word).is_none() && !self.session.is_active() {
            self.status = format!("No completion for \"{}\"", word);
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "demo_state_tests.rs"]
mod demo_state_tests;
