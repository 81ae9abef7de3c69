use super::{ListBox, ListOptions, Point, ViewParams};

/// One row of a [`ListView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    text: String,
    /// Byte offset of the type separator, if the item has one.
    typesep_at: Option<usize>,
}

impl ListItem {
    fn parse(text: &str, typesep: char) -> Self {
        Self {
            text: text.to_string(),
            typesep_at: text.find(typesep),
        }
    }

    /// Raw item text, annotation included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text before the type separator.
    pub fn word(&self) -> &str {
        match self.typesep_at {
            Some(at) => &self.text[..at],
            None => &self.text,
        }
    }

    /// Text after the type separator.
    pub fn annotation(&self) -> Option<&str> {
        self.typesep_at.map(|at| &self.text[at + 1..])
    }
}

/// In-memory list box
#[derive(Debug, Clone, Default)]
pub struct ListView {
    params: Option<ViewParams>,
    options: ListOptions,
    items: Vec<ListItem>,
    selection: Option<usize>,
    visible: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Where the host asked for the list, once created.
    pub fn location(&self) -> Option<Point> {
        self.params.map(|params| params.location)
    }

    pub fn params(&self) -> Option<&ViewParams> {
        self.params.as_ref()
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.selection.and_then(|index| self.items.get(index))
    }
}

impl ListBox for ListView {
    fn set_options(&mut self, options: &ListOptions) {
        self.options = *options;
    }

    fn create(&mut self, params: &ViewParams) {
        self.params = Some(*params);
        self.visible = false;
    }

    fn created(&self) -> bool {
        self.params.is_some()
    }

    fn destroy(&mut self) {
        self.params = None;
        self.visible = false;
        self.selection = None;
    }

    fn clear(&mut self) {
        self.items.clear();
        self.selection = None;
    }

    fn set_list(&mut self, list: &str, separator: u8, typesep: u8) {
        let typesep = char::from(typesep);
        self.items = list
            .split(char::from(separator))
            .map(|item| ListItem::parse(item, typesep))
            .collect();
        self.selection = None;
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn value(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(ListItem::text)
    }

    fn selection(&self) -> Option<usize> {
        self.selection
    }

    fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&index| index < self.items.len());
    }

    fn show(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
#[path = "list_view_tests.rs"]
mod list_view_tests;
