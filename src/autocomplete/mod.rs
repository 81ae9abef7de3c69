mod compare;
mod options;
mod session;
mod word_list;

pub use compare::compare_n;
pub use options::{CaseBehaviour, DEFAULT_SEPARATOR, DEFAULT_TYPESEP, ListOrder, SessionConfig};
pub use session::AutocompleteSession;
pub use word_list::{WordList, WordSpan};
