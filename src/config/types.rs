// Configuration type definitions

use serde::Deserialize;

use crate::autocomplete::{CaseBehaviour, ListOrder, SessionConfig};
use crate::error::AutocompError;
use crate::list_box::ListOptions;

/// Autocomplete behaviour section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub separator: char,
    pub typesep: char,
    pub order: ListOrder,
    pub ignore_case: bool,
    pub case_behaviour: CaseBehaviour,
    pub auto_hide: bool,
    pub stop_chars: String,
    pub fill_up_chars: String,
    pub choose_single: bool,
    pub cancel_at_start: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        AutocompleteConfig {
            separator: char::from(session.separator()),
            typesep: char::from(session.typesep()),
            order: session.order,
            ignore_case: session.ignore_case,
            case_behaviour: session.case_behaviour,
            auto_hide: session.auto_hide,
            stop_chars: session.stop_chars,
            fill_up_chars: session.fill_up_chars,
            choose_single: session.choose_single,
            cancel_at_start: session.cancel_at_start,
        }
    }
}

impl AutocompleteConfig {
    /// Build validated session settings from this section.
    pub fn session_config(&self) -> Result<SessionConfig, AutocompError> {
        let mut config = SessionConfig::default();
        config.order = self.order;
        config.ignore_case = self.ignore_case;
        config.case_behaviour = self.case_behaviour;
        config.auto_hide = self.auto_hide;
        config.choose_single = self.choose_single;
        config.cancel_at_start = self.cancel_at_start;
        config.stop_chars = self.stop_chars.clone();
        config.fill_up_chars = self.fill_up_chars.clone();
        config.set_separator(self.separator)?;
        config.set_typesep(self.typesep)?;
        config.validate()?;
        Ok(config)
    }
}

/// List appearance section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub max_visible_rows: u16,
    pub max_width: u16,
}

impl Default for ListConfig {
    fn default() -> Self {
        let options = ListOptions::default();
        ListConfig {
            max_visible_rows: options.max_visible_rows,
            max_width: options.max_width,
        }
    }
}

impl ListConfig {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            max_visible_rows: self.max_visible_rows.max(1),
            max_width: self.max_width,
            ..ListOptions::default()
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), AutocompError> {
        self.autocomplete.session_config().map(|_| ())
    }
}
