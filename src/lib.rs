//! CSS stylesheets as an object graph, with color conversion.
//!
//! This crate bundles the workspace members:
//!
//! - [`stylekit`]: stylesheet model, parser and renderer
//! - [`chroma`]: RGB, HSL and hex color values
//!
//! ```rust
//! use stylekit_rs::{Color, SelectorContainer, Stylesheet};
//!
//! let sheet = Stylesheet::parse_str("a { color: hsl(40, 75%, 94%); }");
//! let color = sheet.selector("a").unwrap().property("color").unwrap();
//! assert_eq!(Color::parse(color).unwrap().to_hex().to_string(), "#f0b43c");
//! ```

pub use chroma;
pub use stylekit;

pub use chroma::{Channels, Color, ColorError, Hex, Hsl, Rgb};
pub use stylekit::{
    Comment, CssError, Media, MediaCondition, MediaType, Node, Selector, SelectorContainer,
    SelectorKind, Stylesheet, ToCss,
};
