pub use crate::color::Color;
pub use crate::error::ParseUnitError;
pub use crate::geometry::{Edges, OptionalSize, Point, Rect, Size, Transform};
pub use crate::properties::{Gravity, LayoutProperties, SizeProperties, UnitSize};
pub use crate::style::StyleProperties;
pub use crate::unit::{Dimension, FlexBasis, Unit};
pub use crate::view::{
    ContentJustification, FlexDirection, FlexProperties, ItemAlignment, LayoutType,
    ViewProperties, ViewType,
};
