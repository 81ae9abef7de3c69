use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::demo_state::{DemoApp, INPUT_HEIGHT};
use crate::list_box::render_list_view;

const HELP_TEXT: &str =
    " Ctrl+Space/Tab complete | Up/Down move | Enter accept | Esc cancel | Ctrl+C quit";

pub fn render(app: &DemoApp, frame: &mut Frame) {
    let [input_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(&app.textarea, input_area);
    frame.render_widget(
        Paragraph::new(Line::from(format!(" {}", app.status))),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    render_list_view(app.session.list_box(), frame, frame.area());
}

#[cfg(test)]
#[path = "demo_render_tests.rs"]
mod demo_render_tests;
