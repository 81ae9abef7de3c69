//! Command line arguments and the non-interactive modes

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::autocomplete::{AutocompleteSession, CaseBehaviour, ListOrder, SessionConfig};
use crate::config::AutocompleteConfig;
use crate::error::AutocompError;
use crate::list_box::{ListBox, ListView, ViewParams};

/// Words offered when no list is given, in byte order so they can be
/// searched as a presorted list.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "Self", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Presorted,
    Alphabetical,
    Custom,
}

impl From<OrderArg> for ListOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Presorted => ListOrder::PreSorted,
            OrderArg::Alphabetical => ListOrder::Alphabetical,
            OrderArg::Custom => ListOrder::Custom,
        }
    }
}

/// Sort, search and pick from autocompletion lists
#[derive(Debug, Parser)]
#[command(name = "autocomp", version, about)]
pub struct Args {
    /// Candidate list, items split by the separator
    #[arg(short, long)]
    pub list: Option<String>,

    /// Item separator character
    #[arg(long)]
    pub separator: Option<char>,

    /// Character that starts an item's type annotation
    #[arg(long)]
    pub typesep: Option<char>,

    /// How the list is ordered
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Match without regard to case
    #[arg(short, long)]
    pub ignore_case: bool,

    /// With --ignore-case, take the first match even if another matches case exactly
    #[arg(long)]
    pub first_match: bool,

    /// With --ignore-case, prefer an item that matches case exactly
    #[arg(long, conflicts_with = "first_match")]
    pub respect_case: bool,

    /// Keep the list open when nothing matches
    #[arg(long)]
    pub no_auto_hide: bool,

    /// Config file to use instead of ~/.config/autocomp/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the list in display order and exit
    #[arg(long, conflicts_with = "select")]
    pub print_sorted: bool,

    /// Print the item selected for PREFIX and exit
    #[arg(long, value_name = "PREFIX")]
    pub select: Option<String>,
}

impl Args {
    /// Session settings from the config section with command line overrides.
    pub fn session_config(
        &self,
        base: &AutocompleteConfig,
    ) -> Result<SessionConfig, AutocompError> {
        let mut config = base.clone();
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        if let Some(typesep) = self.typesep {
            config.typesep = typesep;
        }
        if let Some(order) = self.order {
            config.order = order.into();
        }
        if self.ignore_case {
            config.ignore_case = true;
        }
        if self.first_match {
            config.case_behaviour = CaseBehaviour::IgnoreCase;
        }
        if self.respect_case {
            config.case_behaviour = CaseBehaviour::RespectCase;
        }
        if self.no_auto_hide {
            config.auto_hide = false;
        }
        config.session_config()
    }

    /// The list to complete from, the built-in word list by default.
    pub fn candidates(&self, config: &SessionConfig) -> String {
        match &self.list {
            Some(list) => list.clone(),
            None => DEFAULT_CANDIDATES.join(&char::from(config.separator()).to_string()),
        }
    }
}

fn loaded_session(list: &str, config: SessionConfig) -> AutocompleteSession<ListView> {
    let mut session = AutocompleteSession::with_config(ListView::new(), config);
    session.start(0, 0, &ViewParams::default());
    session.set_list(list);
    session
}

/// Items as the list box shows them, one per line.
pub fn sorted_items(list: &str, config: SessionConfig) -> Vec<String> {
    let session = loaded_session(list, config);
    (0..session.list_box().len())
        .filter_map(|index| session.value(index))
        .map(str::to_string)
        .collect()
}

/// The item a session highlights for `prefix`.
pub fn select_item(list: &str, config: SessionConfig, prefix: &str) -> Option<String> {
    let mut session = loaded_session(list, config);
    session.show(true);
    let index = session.select(prefix)?;
    session.value(index).map(str::to_string)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
