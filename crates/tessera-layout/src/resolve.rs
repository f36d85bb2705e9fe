//! Projection of declared [`LayoutProperties`] into absolute pixels.
//!
//! Everything here is relative to a [`ParentContext`]: the parent's outer
//! size (possibly only a rough estimate, and possibly unknown on either axis),
//! its resolved padding and the layout type it applies to its children.
//!
//! Padding and margins resolve against the reference **width** on all four
//! edges, top and bottom included.

use tessera_core::{
    Dimension, Edges, FlexBasis, FlexDirection, LayoutProperties, LayoutType, OptionalSize, Point,
    Size, StyleProperties, Transform, TransformProperties, Unit,
};

use crate::RootSize;

/// What a child needs to know about its parent to resolve itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParentContext {
    /// Outer size of the parent.
    pub size: OptionalSize,
    pub padding: Edges<f64>,
    pub layout_type: LayoutType,
}

impl ParentContext {
    /// The synthetic block wrapper every document root is laid out in.
    pub fn wrapper(root: RootSize) -> Self {
        ParentContext {
            size: OptionalSize::new(Some(root.width), root.height),
            padding: Edges::ZERO,
            layout_type: LayoutType::Block,
        }
    }

    pub fn inner_size(&self) -> OptionalSize {
        self.size.inset(&self.padding)
    }

    /// Block and flex children resolve against the content box; absolute
    /// children against the whole box.
    pub fn reference_size(&self) -> OptionalSize {
        match self.layout_type {
            LayoutType::Absolute => self.size,
            LayoutType::Block | LayoutType::Flex { .. } => self.inner_size(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapsContent {
    pub width: bool,
    pub height: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLayoutProperties {
    pub position: Edges<Option<f64>>,
    pub margins: Edges<f64>,
    /// Declared padding plus the stroke width.
    pub padding: Edges<f64>,
    pub min_size: Size,
    pub max_size: Size,
    /// Size given in points.
    pub concrete_size: OptionalSize,
    /// Size derived from the parent (percentages, `match_parent`). Must be
    /// recomputed if the parent's size turns out different.
    pub relative_size: OptionalSize,
    pub wraps_content: WrapsContent,
    /// Flex basis along the parent's main axis.
    pub flex_basis_size: Option<f64>,
}

impl ResolvedLayoutProperties {
    pub fn clamp_width(&self, w: f64) -> f64 {
        clamp(w, self.min_size.width, self.max_size.width)
    }

    pub fn clamp_height(&self, h: f64) -> f64 {
        clamp(h, self.min_size.height, self.max_size.height)
    }

    pub fn clamp_size(&self, s: Size) -> Size {
        Size::new(self.clamp_width(s.width), self.clamp_height(s.height))
    }

    pub fn clamp_optional(&self, s: OptionalSize) -> OptionalSize {
        OptionalSize::new(
            s.width.map(|w| self.clamp_width(w)),
            s.height.map(|h| self.clamp_height(h)),
        )
    }
}

/// `v` limited to `[min, max]`, never negative. `min` wins over `max`.
pub(crate) fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.min(max).max(min).max(0.0)
}

fn resolve_dimension(
    d: Option<Dimension>,
    reference: Option<f64>,
) -> (Option<f64>, Option<f64>, bool) {
    match d {
        None => (None, None, false),
        Some(Dimension::WrapContent) => (None, None, true),
        Some(Dimension::MatchParent) => (None, reference, false),
        Some(Dimension::Unit(u @ Unit::Points(_))) => (u.resolve(None), None, false),
        Some(Dimension::Unit(u @ Unit::Percent(_))) => (None, u.resolve(reference), false),
    }
}

pub fn resolve(
    layout: &LayoutProperties,
    style: &StyleProperties,
    parent: &ParentContext,
) -> ResolvedLayoutProperties {
    let reference = parent.reference_size();
    let stroke = style.stroke_width();

    let padding = layout
        .padding
        .map(|u| u.resolve_or_zero(reference.width) + stroke);
    let margins = layout.margins.map(|u| u.resolve_or_zero(reference.width));
    let position = Edges {
        top: layout.position.top.and_then(|u| u.resolve(reference.height)),
        left: layout.position.left.and_then(|u| u.resolve(reference.width)),
        bottom: layout.position.bottom.and_then(|u| u.resolve(reference.height)),
        right: layout.position.right.and_then(|u| u.resolve(reference.width)),
    };

    let min_size = Size::new(
        layout
            .min_size
            .width
            .and_then(|u| u.resolve(reference.width))
            .unwrap_or(0.0),
        layout
            .min_size
            .height
            .and_then(|u| u.resolve(reference.height))
            .unwrap_or(0.0),
    );
    let max_size = Size::new(
        layout
            .max_size
            .width
            .and_then(|u| u.resolve(reference.width))
            .unwrap_or(f64::INFINITY),
        layout
            .max_size
            .height
            .and_then(|u| u.resolve(reference.height))
            .unwrap_or(f64::INFINITY),
    );
    if min_size.width > max_size.width || min_size.height > max_size.height {
        log::warn!(
            "min size {:?} exceeds max size {:?}; min wins",
            min_size,
            max_size
        );
    }

    let (concrete_w, relative_w, wraps_w) = resolve_dimension(layout.size.width, reference.width);
    let (concrete_h, relative_h, wraps_h) =
        resolve_dimension(layout.size.height, reference.height);

    let basis_reference = match parent.layout_type {
        LayoutType::Flex {
            direction: FlexDirection::Column,
            ..
        } => reference.height,
        _ => reference.width,
    };
    let flex_basis_size = match layout.flex_basis {
        FlexBasis::Auto => None,
        FlexBasis::Unit(u) => u.resolve(basis_reference),
    };

    ResolvedLayoutProperties {
        position,
        margins,
        padding,
        min_size,
        max_size,
        concrete_size: OptionalSize::new(concrete_w, concrete_h),
        relative_size: OptionalSize::new(relative_w, relative_h),
        wraps_content: WrapsContent {
            width: wraps_w,
            height: wraps_h,
        },
        flex_basis_size,
    }
}

/// Concrete and relative size of a view as its parent's layout sees it.
///
/// Flex parents let a flex basis override the main-axis size. Absolute
/// parents derive a missing size from two opposing position edges.
pub fn explicit_sizes(
    props: &ResolvedLayoutProperties,
    parent: &ParentContext,
) -> (OptionalSize, OptionalSize) {
    let mut concrete = props.concrete_size;
    let mut relative = props.relative_size;

    match parent.layout_type {
        LayoutType::Block => {}
        LayoutType::Flex { direction, .. } => {
            if let Some(basis) = props.flex_basis_size {
                match direction {
                    FlexDirection::Row => {
                        concrete.width = Some(basis);
                        relative.width = None;
                    }
                    FlexDirection::Column => {
                        concrete.height = Some(basis);
                        relative.height = None;
                    }
                }
            }
        }
        LayoutType::Absolute => {
            let reference = parent.reference_size();
            let pos = &props.position;
            if concrete.width.is_none() && relative.width.is_none() {
                concrete.width = match (pos.left, pos.right, reference.width) {
                    (Some(l), Some(r), Some(w)) => Some(w - l - r - props.margins.horizontal()),
                    _ => None,
                };
            }
            if concrete.height.is_none() && relative.height.is_none() {
                concrete.height = match (pos.top, pos.bottom, reference.height) {
                    (Some(t), Some(b), Some(h)) => Some(h - t - b - props.margins.vertical()),
                    _ => None,
                };
            }
        }
    }

    (concrete, relative)
}

/// Resolves a declared transform against the view's own final size.
pub fn resolve_transform(t: &TransformProperties, size: Size) -> Transform {
    let (w, h) = (Some(size.width), Some(size.height));
    Transform {
        translate_x: t.translate.x.resolve_or_zero(w),
        translate_y: t.translate.y.resolve_or_zero(h),
        scale_x: t.scale_x,
        scale_y: t.scale_y,
        rotate: t.rotation,
        origin: Point::new(t.origin.x.resolve_or_zero(w), t.origin.y.resolve_or_zero(h)),
    }
}
