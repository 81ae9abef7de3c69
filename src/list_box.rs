//! The list box an autocomplete session drives
//!
//! A session never draws anything itself. It talks to a [`ListBox`], which
//! owns the visible list, its native selection and its visibility.
//! [`ListView`] is the in-memory implementation, rendered with ratatui.

mod list_view;
pub mod list_view_render;

pub use list_view::{ListItem, ListView};
pub use list_view_render::render_list_view;

use ratatui::style::Color;

/// Code page identifier for UTF-8 text.
pub const CP_UTF8: u32 = 65001;

/// Opaque handle of the window that hosts the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowId(pub u64);

/// Position of the list's top-left corner, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawing backend requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Technology {
    #[default]
    Default,
    Buffered,
}

/// Visual options for the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub fore: Color,
    pub back: Color,
    pub selected_fore: Color,
    pub selected_back: Color,
    pub max_visible_rows: u16,
    /// Widest the list may grow, 0 to fit the content.
    pub max_width: u16,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            fore: Color::White,
            back: Color::Black,
            selected_fore: Color::Black,
            selected_back: Color::Cyan,
            max_visible_rows: 5,
            max_width: 0,
        }
    }
}

/// Everything the host passes when a session opens its list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewParams {
    pub parent: WindowId,
    pub ctrl_id: i32,
    pub location: Point,
    pub line_height: u16,
    pub code_page: u32,
    pub technology: Technology,
    pub options: ListOptions,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            parent: WindowId::default(),
            ctrl_id: 0,
            location: Point::default(),
            line_height: 1,
            code_page: CP_UTF8,
            technology: Technology::default(),
            options: ListOptions::default(),
        }
    }
}

/// Visible list of candidates
pub trait ListBox {
    fn set_options(&mut self, options: &ListOptions);

    fn create(&mut self, params: &ViewParams);

    fn created(&self) -> bool;

    fn destroy(&mut self);

    fn clear(&mut self);

    /// Replace the content with the items of a delimited list.
    ///
    /// Must split exactly as the session's parser does: an empty list is one
    /// empty item and a trailing separator adds an empty item.
    fn set_list(&mut self, list: &str, separator: u8, typesep: u8);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item text at `index`, including any type annotation.
    fn value(&self, index: usize) -> Option<&str>;

    fn selection(&self) -> Option<usize>;

    /// Highlight `index`, or clear the highlight with `None`.
    fn select(&mut self, index: Option<usize>);

    fn show(&mut self, visible: bool);
}
