//! The style node model: selectors, comments and media blocks.
//!
//! - [`Selector`]: a rule head with ordered declarations
//! - [`Comment`]: block comment text and its formatting
//! - [`Media`]: an `@media` query with its own selectors
//! - [`RuleSet`] / [`SelectorContainer`]: selector bookkeeping shared by
//!   [`Media`] and [`Stylesheet`](crate::Stylesheet)

pub mod comment;
pub mod media;
pub mod rule_set;
pub mod selector;

pub use comment::Comment;
pub use media::{Media, MediaCondition, MediaType, UnknownMediaKeyword};
pub use rule_set::{Node, RuleSet, SelectorContainer};
pub use selector::{Selector, SelectorKind, Sides};
