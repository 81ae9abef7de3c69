use std::cmp::Ordering;

use super::compare::compare_n;
use super::options::{CaseBehaviour, ListOrder, SessionConfig};
use super::word_list::{WordList, identity_matrix};
use crate::list_box::{ListBox, ViewParams};

/// One autocompletion list, from start to accept or cancel.
///
/// The session owns its list box. It sorts candidate lists according to its
/// [`SessionConfig`] and keeps a sort matrix, `sort_matrix[rank]` being the
/// list box position of the item at alphabetical `rank`, so that prefix
/// search can binary-search ranks whatever order the list box shows.
pub struct AutocompleteSession<L: ListBox> {
    list_box: L,
    config: SessionConfig,
    active: bool,
    /// Host text position the list was opened at.
    pos_start: usize,
    /// Length of the word already typed before `pos_start`.
    start_len: usize,
    sort_matrix: Vec<usize>,
}

impl<L: ListBox> AutocompleteSession<L> {
    pub fn new(list_box: L) -> Self {
        Self::with_config(list_box, SessionConfig::default())
    }

    pub fn with_config(list_box: L, config: SessionConfig) -> Self {
        Self {
            list_box,
            config,
            active: false,
            pos_start: 0,
            start_len: 0,
            sort_matrix: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Settings should not change while a list is being searched.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    pub fn list_box(&self) -> &L {
        &self.list_box
    }

    pub fn list_box_mut(&mut self) -> &mut L {
        &mut self.list_box
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pos_start(&self) -> usize {
        self.pos_start
    }

    pub fn start_len(&self) -> usize {
        self.start_len
    }

    pub fn sort_matrix(&self) -> &[usize] {
        &self.sort_matrix
    }

    pub fn set_stop_chars(&mut self, stop_chars: &str) {
        self.config.stop_chars = stop_chars.to_string();
    }

    pub fn is_stop_char(&self, ch: char) -> bool {
        self.config.is_stop_char(ch)
    }

    pub fn set_fill_up_chars(&mut self, fill_up_chars: &str) {
        self.config.fill_up_chars = fill_up_chars.to_string();
    }

    pub fn is_fill_up_char(&self, ch: char) -> bool {
        self.config.is_fill_up_char(ch)
    }

    /// Open an empty list for a word starting `start_len` before `position`.
    ///
    /// A session that is already active is cancelled first.
    pub fn start(&mut self, position: usize, start_len: usize, params: &ViewParams) {
        if self.active {
            self.cancel();
        }
        self.list_box.set_options(&params.options);
        self.list_box.create(params);
        self.list_box.clear();
        self.active = true;
        self.start_len = start_len;
        self.pos_start = position;
        log::debug!("Autocomplete started at {} with {} typed", position, start_len);
    }

    /// Close the list. Does nothing when no list box exists.
    pub fn cancel(&mut self) {
        if self.list_box.created() {
            self.list_box.clear();
            self.list_box.destroy();
            self.active = false;
            log::debug!("Autocomplete cancelled");
        }
    }

    /// Hand a delimited candidate list to the list box, sorted per the
    /// configured order.
    pub fn set_list(&mut self, list: &str) {
        let separator = self.config.separator();
        let typesep = self.config.typesep();

        if self.config.order == ListOrder::PreSorted {
            self.list_box.set_list(list, separator, typesep);
            self.sort_matrix = identity_matrix(self.list_box.len());
            log::debug!("Autocomplete list set: {} presorted items", self.sort_matrix.len());
            return;
        }

        let words = WordList::parse(list, separator, typesep);
        let sort_matrix = words.sort_matrix(self.config.ignore_case);
        if self.config.order == ListOrder::Custom || sort_matrix.len() < 2 {
            self.list_box.set_list(list, separator, typesep);
            debug_assert_eq!(
                self.list_box.len(),
                sort_matrix.len(),
                "list box and sort matrix disagree on item count"
            );
            self.sort_matrix = sort_matrix;
            log::debug!(
                "Autocomplete list set: {} items in {:?} order",
                self.sort_matrix.len(),
                self.config.order
            );
            return;
        }

        let sorted = words.serialize(&sort_matrix, separator);
        self.list_box.set_list(&sorted, separator, typesep);
        self.sort_matrix = identity_matrix(sort_matrix.len());
        debug_assert_eq!(
            self.list_box.len(),
            self.sort_matrix.len(),
            "list box and sort matrix disagree on item count"
        );
        log::debug!(
            "Autocomplete list set: {} items sorted alphabetically",
            self.sort_matrix.len()
        );
    }

    pub fn selection(&self) -> Option<usize> {
        self.list_box.selection()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.list_box.value(index)
    }

    /// Show or hide the list. Showing always highlights the first item.
    pub fn show(&mut self, visible: bool) {
        self.list_box.show(visible);
        if visible {
            self.list_box.select(Some(0));
        }
    }

    /// Move the highlight by `delta` items, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.list_box.len() as isize;
        let current = self.list_box.selection().map_or(-1, |index| index as isize);
        let target = (current + delta).min(count - 1).max(0);
        self.list_box.select(Some(target as usize));
    }

    /// Highlight the first item starting with `word`.
    ///
    /// When nothing matches, the session is cancelled if `auto_hide` is set
    /// and the highlight is cleared otherwise. Returns the list box
    /// position that ends up selected.
    pub fn select(&mut self, word: &str) -> Option<usize> {
        let word = word.as_bytes();
        let ignore_case = self.config.ignore_case;

        let mut location = None;
        let mut start = 0;
        let mut end = self.list_box.len().min(self.sort_matrix.len());
        while start < end {
            let mut pivot = start + (end - start) / 2;
            match self.compare_rank(word, pivot, ignore_case) {
                Ordering::Equal => {
                    while pivot > start
                        && self.compare_rank(word, pivot - 1, ignore_case).is_eq()
                    {
                        pivot -= 1;
                    }
                    location = Some(pivot);
                    if ignore_case
                        && self.config.case_behaviour == CaseBehaviour::RespectCase
                    {
                        let exact = (pivot..end)
                            .take_while(|&rank| self.compare_rank(word, rank, true).is_eq())
                            .find(|&rank| self.compare_rank(word, rank, false).is_eq());
                        if exact.is_some() {
                            location = exact;
                        }
                    }
                    break;
                }
                Ordering::Less => end = pivot,
                Ordering::Greater => start = pivot + 1,
            }
        }

        let Some(mut location) = location else {
            if self.config.auto_hide {
                log::debug!("No autocomplete match, hiding list");
                self.cancel();
            } else {
                log::debug!("No autocomplete match, clearing selection");
                self.list_box.select(None);
            }
            return None;
        };

        if self.config.order == ListOrder::Custom {
            // Among equal prefixes, prefer the item given earliest
            for rank in location + 1..end {
                if !self.compare_rank(word, rank, true).is_eq() {
                    break;
                }
                if self.sort_matrix[rank] < self.sort_matrix[location]
                    && self.compare_rank(word, rank, false).is_eq()
                {
                    location = rank;
                }
            }
        }

        let index = self.sort_matrix[location];
        self.list_box.select(Some(index));
        Some(index)
    }

    /// Compare `word` with the first `word.len()` bytes of the item at `rank`.
    fn compare_rank(&self, word: &[u8], rank: usize, ignore_case: bool) -> Ordering {
        let item = self
            .sort_matrix
            .get(rank)
            .and_then(|&index| self.list_box.value(index))
            .unwrap_or_default();
        compare_n(word, item.as_bytes(), word.len(), ignore_case)
    }
}

impl<L: ListBox> Drop for AutocompleteSession<L> {
    fn drop(&mut self) {
        if self.list_box.created() {
            self.list_box.destroy();
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
