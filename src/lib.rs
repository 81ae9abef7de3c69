//! Autocompletion list sessions for text editing widgets
//!
//! An [`AutocompleteSession`](autocomplete::AutocompleteSession) takes a
//! delimited candidate list, sorts it according to its ordering and case
//! policies, hands it to a [`ListBox`](list_box::ListBox), and selects the
//! best candidate as the user types.

pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod list_box;
pub mod logging;
pub mod widgets;
