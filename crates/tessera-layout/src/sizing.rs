//! Second pass: final sizes, top-down.
//!
//! Each view's size is settled from its parent's final size. Properties that
//! were resolved against a rough parent size are resolved again; when they
//! differ, only the width of the explicit sizes is corrected and heights keep
//! their dimensioning-pass values.
//!
//! Flex children share their parent's free main-axis space. Grow is split
//! by grow factor, shrink by `base size × shrink factor`, so every sibling's
//! provisional size must be known before any of them is finalized.

use smallvec::SmallVec;
use tessera_core::{FlexDirection, ItemAlignment, LayoutType, OptionalSize, Size, ViewProperties};

use crate::dimensions::{DimensionedView, ViewDimensions};
use crate::resolve::{ParentContext, ResolvedLayoutProperties, explicit_sizes, resolve};

#[derive(Clone, Debug)]
pub struct SizedView<'a> {
    pub view: &'a ViewProperties,
    /// Dimensioning-pass output, with properties corrected for the parent's
    /// final size.
    pub dimensions: ViewDimensions,
    pub size: Size,
    pub children: Vec<SizedView<'a>>,
}

/// The parent's final size plus the aggregate its children were measured
/// into.
#[derive(Clone, Copy, Debug)]
pub struct SizingParent {
    pub context: ParentContext,
    pub contents_size: OptionalSize,
}

/// A child's share of its parent's free main-axis space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexShare {
    pub grow: f64,
    pub shrink: f64,
}

impl FlexShare {
    pub const NONE: FlexShare = FlexShare {
        grow: 0.0,
        shrink: 0.0,
    };
}

struct Provisional {
    props: ResolvedLayoutProperties,
    concrete: OptionalSize,
    relative: OptionalSize,
    padded_contents: OptionalSize,
}

impl Provisional {
    fn new(dim: &DimensionedView<'_>, parent: &ParentContext) -> Self {
        let d = &dim.dimensions;
        let mut props = d.layout_properties.clone();
        let mut concrete = d.concrete_size;
        let mut relative = d.relative_size;

        let fresh = resolve(&dim.view.layout, &dim.view.style, parent);
        if fresh != props {
            log::trace!(
                "re-resolving {:?}: parent size settled at {:?}",
                dim.view.id,
                parent.size
            );
            let (c, r) = explicit_sizes(&fresh, parent);
            concrete.width = c.width;
            relative.width = r.width;
            props = fresh;
        }

        let padded_contents = d.contents_size.outset(&props.padding);
        Provisional {
            props,
            concrete,
            relative,
            padded_contents,
        }
    }

    fn explicit(&self) -> OptionalSize {
        self.concrete.or(self.relative)
    }

    fn base(&self) -> OptionalSize {
        self.explicit().or(self.padded_contents)
    }
}

fn main_axis(direction: FlexDirection, s: OptionalSize) -> Option<f64> {
    match direction {
        FlexDirection::Row => s.width,
        FlexDirection::Column => s.height,
    }
}

/// Sizes every child of one parent. Flex shares are normalized across the
/// whole sibling group before any child recurses.
pub fn size_children<'a>(
    children: &[DimensionedView<'a>],
    parent: &SizingParent,
) -> Vec<SizedView<'a>> {
    let provisional: SmallVec<[Provisional; 8]> = children
        .iter()
        .map(|c| Provisional::new(c, &parent.context))
        .collect();

    let shares: SmallVec<[FlexShare; 8]> = match parent.context.layout_type {
        LayoutType::Flex { direction, .. } => {
            let scaled_shrink = |p: &Provisional, dim: &DimensionedView<'_>| {
                main_axis(direction, p.base()).unwrap_or(0.0) * dim.view.layout.flex_shrink
            };
            let total_grow: f64 = children.iter().map(|c| c.view.layout.flex_grow).sum();
            let total_shrink: f64 = provisional
                .iter()
                .zip(children)
                .map(|(p, c)| scaled_shrink(p, c))
                .sum();
            provisional
                .iter()
                .zip(children)
                .map(|(p, c)| FlexShare {
                    grow: if total_grow == 0.0 {
                        0.0
                    } else {
                        c.view.layout.flex_grow / total_grow
                    },
                    shrink: if total_shrink == 0.0 {
                        0.0
                    } else {
                        scaled_shrink(p, c) / total_shrink
                    },
                })
                .collect()
        }
        LayoutType::Block | LayoutType::Absolute => {
            children.iter().map(|_| FlexShare::NONE).collect()
        }
    };

    children
        .iter()
        .zip(provisional)
        .zip(shares)
        .map(|((dim, p), share)| finish(dim, p, parent, share))
        .collect()
}

/// Sizes a single view whose parent is not a flex container, such as the
/// document root inside its wrapper.
pub fn size_view<'a>(dim: &DimensionedView<'a>, parent: &SizingParent) -> SizedView<'a> {
    let p = Provisional::new(dim, &parent.context);
    finish(dim, p, parent, FlexShare::NONE)
}

fn finish<'a>(
    dim: &DimensionedView<'a>,
    p: Provisional,
    parent: &SizingParent,
    share: FlexShare,
) -> SizedView<'a> {
    let size = p.props.clamp_size(actual_size(&p, parent, share));

    let own = SizingParent {
        context: ParentContext {
            size: size.into(),
            padding: p.props.padding,
            layout_type: dim.view.layout_type(),
        },
        contents_size: dim.dimensions.contents_size,
    };
    let children = size_children(&dim.children, &own);

    SizedView {
        view: dim.view,
        dimensions: ViewDimensions {
            layout_properties: p.props,
            concrete_size: p.concrete,
            relative_size: p.relative,
            ..dim.dimensions.clone()
        },
        size,
        children,
    }
}

fn actual_size(p: &Provisional, parent: &SizingParent, share: FlexShare) -> Size {
    let explicit = p.explicit();
    let margins = &p.props.margins;
    let inner = parent.context.inner_size();

    match parent.context.layout_type {
        LayoutType::Block => {
            let width = explicit.width.unwrap_or_else(|| {
                if p.props.wraps_content.width {
                    p.padded_contents.width.unwrap_or(0.0)
                } else {
                    (inner.width.unwrap_or(0.0) - margins.horizontal()).max(0.0)
                }
            });
            let height = explicit
                .height
                .or(p.padded_contents.height)
                .unwrap_or(0.0);
            Size::new(width, height)
        }
        LayoutType::Absolute => p.base().unwrap_or_zero(),
        LayoutType::Flex {
            direction,
            align_items,
            ..
        } => {
            let (explicit_cross, contents_cross, inner_cross, margins_cross) = match direction {
                FlexDirection::Row => (
                    explicit.height,
                    p.padded_contents.height,
                    inner.height,
                    margins.vertical(),
                ),
                FlexDirection::Column => (
                    explicit.width,
                    p.padded_contents.width,
                    inner.width,
                    margins.horizontal(),
                ),
            };
            let cross = explicit_cross.unwrap_or_else(|| {
                if align_items == ItemAlignment::Stretch {
                    (inner_cross.unwrap_or(0.0) - margins_cross).max(0.0)
                } else {
                    contents_cross.unwrap_or(0.0)
                }
            });

            let base = main_axis(direction, p.base()).unwrap_or(0.0);
            let free = main_axis(direction, inner).unwrap_or(0.0)
                - main_axis(direction, parent.contents_size).unwrap_or(0.0);
            let main = if free > 0.0 {
                base + free * share.grow
            } else {
                base + free * share.shrink
            };
            if main != base {
                log::trace!("flex item main size {base} -> {main} (free space {free})");
            }

            match direction {
                FlexDirection::Row => Size::new(main, cross),
                FlexDirection::Column => Size::new(cross, main),
            }
        }
    }
}
