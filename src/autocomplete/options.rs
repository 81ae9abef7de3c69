//! Session policy: ordering, case handling and the character sets that the
//! host editor consults while a list is shown.

use serde::Deserialize;

use crate::error::AutocompError;

/// Default item separator.
pub const DEFAULT_SEPARATOR: u8 = b' ';
/// Default marker for the start of an item's type annotation.
pub const DEFAULT_TYPESEP: u8 = b'?';

/// How the candidate list is ordered for display and search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Caller guarantees the list is already sorted; it is shown as given.
    #[default]
    PreSorted,
    /// The list is sorted and shown alphabetically.
    Alphabetical,
    /// The list is shown as given but searched through an alphabetical index.
    Custom,
}

/// Which match wins when case is ignored and several items share a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseBehaviour {
    /// Prefer an item whose case matches the typed word exactly.
    #[default]
    RespectCase,
    /// Take the first case-insensitive match.
    IgnoreCase,
}

/// Configuration for an autocomplete session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    separator: u8,
    typesep: u8,
    pub order: ListOrder,
    pub ignore_case: bool,
    pub case_behaviour: CaseBehaviour,
    /// Cancel the session when the typed word matches nothing.
    pub auto_hide: bool,
    /// Accept immediately when the list holds a single item.
    pub choose_single: bool,
    /// Cancel when the caret moves back onto the anchor position.
    pub cancel_at_start: bool,
    pub stop_chars: String,
    pub fill_up_chars: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            typesep: DEFAULT_TYPESEP,
            order: ListOrder::default(),
            ignore_case: false,
            case_behaviour: CaseBehaviour::default(),
            auto_hide: true,
            choose_single: false,
            cancel_at_start: true,
            stop_chars: String::new(),
            fill_up_chars: String::new(),
        }
    }
}

impl SessionConfig {
    pub fn separator(&self) -> u8 {
        self.separator
    }

    pub fn typesep(&self) -> u8 {
        self.typesep
    }

    /// Set the item separator. Lists are scanned byte-wise, so only
    /// non-NUL ASCII characters are accepted.
    pub fn set_separator(&mut self, separator: char) -> Result<(), AutocompError> {
        self.separator = list_byte(separator).ok_or(AutocompError::InvalidSeparator(separator))?;
        Ok(())
    }

    /// Set the type annotation marker, same rules as [`Self::set_separator`].
    pub fn set_typesep(&mut self, typesep: char) -> Result<(), AutocompError> {
        self.typesep = list_byte(typesep).ok_or(AutocompError::InvalidTypesep(typesep))?;
        Ok(())
    }

    pub fn is_stop_char(&self, ch: char) -> bool {
        ch != '\0' && self.stop_chars.contains(ch)
    }

    pub fn is_fill_up_char(&self, ch: char) -> bool {
        ch != '\0' && self.fill_up_chars.contains(ch)
    }

    /// Check that the two list markers can be told apart.
    pub fn validate(&self) -> Result<(), AutocompError> {
        if self.separator == self.typesep {
            return Err(AutocompError::SeparatorConflict(char::from(self.separator)));
        }
        Ok(())
    }
}

fn list_byte(ch: char) -> Option<u8> {
    (ch.is_ascii() && ch != '\0').then_some(ch as u8)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
