//! Tests for demo rendering

use super::*;
use crate::autocomplete::ListOrder;
use crate::list_box::ListOptions;
use crate::test_utils::test_helpers::test_config;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(app: &DemoApp, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(app, f)).unwrap();
    terminal.backend().to_string()
}

fn app_with(candidates: &str, text: &str) -> DemoApp {
    let mut app = DemoApp::new(
        candidates.to_string(),
        test_config(ListOrder::Alphabetical),
        ListOptions::default(),
    );
    app.textarea.insert_str(text);
    app
}

#[test]
fn test_idle_screen_shows_input_and_help() {
    let app = app_with("alpha,beta", "hello");
    let output = render_to_string(&app, 90, 12);
    assert!(output.contains("Text"));
    assert!(output.contains("hello"));
    assert!(output.contains("Ctrl+C quit"));
    assert!(!output.contains("alpha"));
}

#[test]
fn test_open_list_is_drawn() {
    let mut app = app_with("alpha,beta?kw", "");
    app.start_completion();
    let output = render_to_string(&app, 90, 12);
    assert!(output.contains("alpha"));
    assert!(output.contains("beta"));
    assert!(output.contains("[kw]"));
}

#[test]
fn test_status_line_shown() {
    let mut app = app_with("alpha", "");
    app.status = "Inserted \"alpha\"".to_string();
    let output = render_to_string(&app, 90, 12);
    assert!(output.contains("Inserted"));
}
