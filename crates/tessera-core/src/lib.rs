//! # Document model
//!
//! A Tessera document is a tree of [`ViewProperties`]. Each node carries:
//!
//! - a [`ViewType`]: a plain view, an absolute or flex container, or a
//!   content leaf (text, image, video);
//! - [`StyleProperties`]: how the box is painted;
//! - [`LayoutProperties`]: size, padding, margins, flex factors.
//!
//! Trees are normally produced by a decoder (see the `serde` feature), but the
//! builder methods make them easy to write by hand:
//!
//! ```rust
//! use tessera_core::*;
//!
//! let doc = ViewProperties::flex(FlexProperties::row())
//!     .layout(LayoutProperties::new().width(Dimension::MatchParent).padding(Unit::pt(8.0)))
//!     .child(ViewProperties::view().layout(LayoutProperties::new().flex_grow(1.0)))
//!     .child(ViewProperties::text("Hello", 14.0));
//!
//! assert_eq!(doc.children.len(), 2);
//! assert!(doc.layout_type().is_flex_row());
//! ```
//!
//! The container's [`LayoutType`] decides how its *children* are placed;
//! the layout engine lives in `tessera-layout`.

pub mod color;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod properties;
pub mod style;
pub mod tests;
pub mod unit;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use properties::*;
pub use style::*;
pub use unit::*;
pub use view::*;
