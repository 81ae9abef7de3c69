//! List view rendering
//!
//! Draws a visible [`ListView`] as a bordered popup at the location the
//! host supplied when the list was created.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as ListRow, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::{ListBox, ListOptions, ListView};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const TYPE_LABEL_SPACING: usize = 2;
// "[" and "]"
const TYPE_LABEL_BRACKETS: usize = 2;

/// Render `view` inside `bounds`. Hidden or destroyed views draw nothing.
pub fn render_list_view(view: &ListView, frame: &mut Frame, bounds: Rect) {
    if !view.is_visible() {
        return;
    }
    let Some(params) = view.params() else {
        return;
    };
    let options = view.options();

    let rows = (view.len().min(u16::MAX as usize) as u16).min(options.max_visible_rows.max(1));
    let height = rows + POPUP_BORDER_HEIGHT;
    let width = content_width(view, options) + POPUP_BORDER_WIDTH;
    let area = popup::popup_at_location(
        bounds,
        to_cell(params.location.x),
        to_cell(params.location.y),
        width,
        height,
        params.line_height,
    );

    let word_width = widest_word(view);
    let rows: Vec<ListRow> = view
        .items()
        .iter()
        .map(|item| {
            let word = item.word();
            let mut spans = vec![Span::raw(word.to_string())];
            if let Some(annotation) = item.annotation() {
                let padding = word_width - word.width() + TYPE_LABEL_SPACING;
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(
                    format!("[{}]", annotation),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListRow::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().fg(options.fore).bg(options.back)),
        )
        .highlight_style(
            Style::default()
                .fg(options.selected_fore)
                .bg(options.selected_back)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(view.selection());
    popup::clear_area(frame, area);
    frame.render_stateful_widget(list, area, &mut state);
}

fn widest_word(view: &ListView) -> usize {
    view.items()
        .iter()
        .map(|item| item.word().width())
        .max()
        .unwrap_or(0)
}

/// Inner width needed for the widest row, capped by `max_width` when set.
fn content_width(view: &ListView, options: &ListOptions) -> u16 {
    let word_width = widest_word(view);
    let label_width = view
        .items()
        .iter()
        .filter_map(|item| item.annotation())
        .map(|annotation| annotation.width() + TYPE_LABEL_BRACKETS + TYPE_LABEL_SPACING)
        .max()
        .unwrap_or(0);

    let width = (word_width + label_width).max(1).min(u16::MAX as usize) as u16;
    if options.max_width > 0 {
        width.min(options.max_width)
    } else {
        width
    }
}

fn to_cell(coord: i32) -> u16 {
    coord.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
#[path = "list_view_render_tests.rs"]
mod list_view_render_tests;
