use crate::{Dimension, Edges, FlexBasis, Unit};

/// Horizontal alignment of a view inside a block parent (and on the cross
/// axis of a flex column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gravity {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizeProperties {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// Min/max bounds; unset axes are unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitSize {
    pub width: Option<Unit>,
    pub height: Option<Unit>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitPoint {
    pub x: Unit,
    pub y: Unit,
}

/// Declared transform. `translate` and `origin` resolve against the view's
/// own final size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformProperties {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64, // radians
    pub translate: UnitPoint,
    pub origin: UnitPoint,
}

impl Default for TransformProperties {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            translate: UnitPoint::default(),
            origin: UnitPoint {
                x: Unit::Percent(50.0),
                y: Unit::Percent(50.0),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutProperties {
    /// Offsets from the parent's edges. Only read by absolute layout.
    pub position: Edges<Option<Unit>>,
    pub padding: Edges<Unit>,
    pub margins: Edges<Unit>,
    pub size: SizeProperties,
    pub min_size: UnitSize,
    pub max_size: UnitSize,
    pub gravity: Option<Gravity>,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub flex_basis: FlexBasis,
    pub transform: TransformProperties,
}

impl Default for LayoutProperties {
    fn default() -> Self {
        Self {
            position: Edges::default(),
            padding: Edges::default(),
            margins: Edges::default(),
            size: SizeProperties::default(),
            min_size: UnitSize::default(),
            max_size: UnitSize::default(),
            gravity: None,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexBasis::Auto,
            transform: TransformProperties::default(),
        }
    }
}

impl LayoutProperties {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, w: impl Into<Dimension>) -> Self {
        self.size.width = Some(w.into());
        self
    }
    pub fn height(mut self, h: impl Into<Dimension>) -> Self {
        self.size.height = Some(h.into());
        self
    }
    pub fn size(self, w: impl Into<Dimension>, h: impl Into<Dimension>) -> Self {
        self.width(w).height(h)
    }
    pub fn min_width(mut self, w: Unit) -> Self {
        self.min_size.width = Some(w);
        self
    }
    pub fn min_height(mut self, h: Unit) -> Self {
        self.min_size.height = Some(h);
        self
    }
    pub fn max_width(mut self, w: Unit) -> Self {
        self.max_size.width = Some(w);
        self
    }
    pub fn max_height(mut self, h: Unit) -> Self {
        self.max_size.height = Some(h);
        self
    }
    pub fn padding(mut self, v: Unit) -> Self {
        self.padding = Edges::all(v);
        self
    }
    pub fn padding_edges(mut self, padding: Edges<Unit>) -> Self {
        self.padding = padding;
        self
    }
    pub fn margin(mut self, v: Unit) -> Self {
        self.margins = Edges::all(v);
        self
    }
    pub fn margin_edges(mut self, margins: Edges<Unit>) -> Self {
        self.margins = margins;
        self
    }
    pub fn margin_top(mut self, v: Unit) -> Self {
        self.margins.top = v;
        self
    }
    pub fn margin_bottom(mut self, v: Unit) -> Self {
        self.margins.bottom = v;
        self
    }
    pub fn margin_left(mut self, v: Unit) -> Self {
        self.margins.left = v;
        self
    }
    pub fn margin_right(mut self, v: Unit) -> Self {
        self.margins.right = v;
        self
    }
    pub fn left(mut self, v: Unit) -> Self {
        self.position.left = Some(v);
        self
    }
    pub fn right(mut self, v: Unit) -> Self {
        self.position.right = Some(v);
        self
    }
    pub fn top(mut self, v: Unit) -> Self {
        self.position.top = Some(v);
        self
    }
    pub fn bottom(mut self, v: Unit) -> Self {
        self.position.bottom = Some(v);
        self
    }
    pub fn gravity(mut self, g: Gravity) -> Self {
        self.gravity = Some(g);
        self
    }
    pub fn flex_grow(mut self, v: f64) -> Self {
        self.flex_grow = v;
        self
    }
    pub fn flex_shrink(mut self, v: f64) -> Self {
        self.flex_shrink = v;
        self
    }
    pub fn flex_basis(mut self, b: FlexBasis) -> Self {
        self.flex_basis = b;
        self
    }
    pub fn scale(self, s: f64) -> Self {
        self.scale2(s, s)
    }
    pub fn scale2(mut self, sx: f64, sy: f64) -> Self {
        self.transform.scale_x *= sx;
        self.transform.scale_y *= sy;
        self
    }
    pub fn rotate(mut self, radians: f64) -> Self {
        self.transform.rotation += radians;
        self
    }
    pub fn translate(mut self, x: Unit, y: Unit) -> Self {
        self.transform.translate = UnitPoint { x, y };
        self
    }
    pub fn transform_origin(mut self, x: Unit, y: Unit) -> Self {
        self.transform.origin = UnitPoint { x, y };
        self
    }
}
