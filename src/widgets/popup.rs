use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup with its top-left corner at (`x`, `y`), kept inside `bounds`.
///
/// `y` is the row just below the caret line. When the popup does not fit
/// below, it flips to end above that line, `line_height` rows higher.
pub fn popup_at_location(
    bounds: Rect,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    line_height: u16,
) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let popup_x = x.clamp(bounds.x, max_x.max(bounds.x));

    let max_y = bounds.bottom().saturating_sub(height);
    let popup_y = if y.saturating_add(height) <= bounds.bottom() {
        y.max(bounds.y)
    } else {
        y.checked_sub(line_height.saturating_add(height))
            .filter(|&above| above >= bounds.y)
            .unwrap_or(max_y.max(bounds.y))
    };

    Rect {
        x: popup_x,
        y: popup_y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
