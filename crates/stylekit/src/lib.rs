//! # stylekit
//!
//! Parse, edit and render CSS stylesheets as a plain object graph.
//!
//! A [`Stylesheet`] holds selectors, comments and `@media` blocks. It can be
//! built by hand or parsed from text, a file, or (with the `uri` feature) a
//! URL, then rendered back to CSS either pretty-printed or minified.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylekit::{SelectorContainer, Stylesheet};
//!
//! let css = r#"
//! /* Page reset */
//! html { margin: 10px 5px 15px 20px; padding: 0; }
//! .login-div { color: #f0b43c; }
//! "#;
//!
//! let sheet = Stylesheet::parse_str(css);
//! let html = sheet.selector("html").unwrap();
//! assert_eq!(html.get("margin-left"), Some("20px"));
//! assert_eq!(html.comments()[0].text(), "Page reset");
//!
//! let login = sheet.selector(".login-div").unwrap();
//! assert_eq!(login.color("color").unwrap().unwrap().to_rgb().to_string(), "rgb(240, 180, 60)");
//! ```
//!
//! ## What is modelled
//!
//! - Selectors are kept by name and grouped as element, id or class
//!   selectors; rendering follows that grouping, each group in insertion order.
//! - Declarations keep their source order. There is no cascade, specificity
//!   or value validation.
//! - `@media` is the only at-rule understood. Its type, `not`/`only`
//!   condition and `(feature: value)` list are parsed out of the query.
//! - Comments written directly above a selector or media block are attached
//!   to it.
//!
//! ## Modules
//!
//! - [`parser`]: CSS text to [`Stylesheet`]
//! - [`types`]: selectors, comments, media blocks and the shared container
//! - [`render`]: the [`ToCss`] trait
//! - [`error`]: [`CssError`]

pub mod error;
#[cfg(feature = "uri")]
pub mod net;
pub mod parser;
pub mod render;
pub mod stylesheet;
pub mod types;

pub use error::CssError;
pub use render::ToCss;
pub use stylesheet::Stylesheet;
pub use types::{
    Comment, Media, MediaCondition, MediaType, Node, RuleSet, Selector, SelectorContainer,
    SelectorKind, Sides,
};

pub use chroma::{Color, ColorError};
