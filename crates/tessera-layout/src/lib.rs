//! # Layout engine
//!
//! Turns a [`ViewProperties`] tree and a [`RootSize`] into a tree of final
//! sizes, positions and transforms. Three passes run in order, each building
//! a new tree that mirrors the document's shape:
//!
//! 1. **Dimensioning** ([`dimension_pass`]): bottom-up candidate sizes from
//!    rough, parent-supplied constraints. The only pass that calls the host's
//!    [`IntrinsicSizer`].
//! 2. **Sizing** ([`sizing_pass`]): top-down final sizes, including flex
//!    grow/shrink across siblings.
//! 3. **Positioning** ([`positioning_pass`]): top-down offsets, using each
//!    view's siblings on both sides for margin collapsing and justification.
//!
//! The document root is laid out inside a synthetic block wrapper as wide as
//! the root size, so it is treated like any other block child.
//!
//! ```rust
//! use tessera_core::*;
//! use tessera_layout::*;
//!
//! let doc = ViewProperties::flex(FlexProperties::row())
//!     .layout(LayoutProperties::new().height(Unit::pt(40.0)))
//!     .child(ViewProperties::view().layout(LayoutProperties::new().flex_grow(1.0)))
//!     .child(ViewProperties::view().layout(LayoutProperties::new().width(Unit::pt(100.0))));
//!
//! let layout = compute_layout(&doc, RootSize::scrolling(320.0), &NoIntrinsicSize, &LayoutConfig::default())?;
//! assert_eq!(layout.size, Size::new(320.0, 40.0));
//! assert_eq!(layout.children[0].size.width, 220.0);
//! assert_eq!(layout.children[1].position.x, 220.0);
//! # Ok::<(), LayoutError>(())
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod intrinsic;
pub mod positioning;
pub mod resolve;
pub mod sizing;
pub mod tree;

pub use config::*;
pub use dimensions::{DimensionedView, ViewDimensions};
pub use error::*;
pub use intrinsic::*;
pub use sizing::SizedView;
pub use tree::*;

use tessera_core::{Edges, LayoutType, OptionalSize, Size, ViewProperties};

use crate::positioning::{PositioningParent, place, position_of};
use crate::resolve::ParentContext;
use crate::sizing::{SizingParent, size_view};

/// Runs all three passes over `root`.
pub fn compute_layout<'a>(
    root: &'a ViewProperties,
    root_size: RootSize,
    sizer: &dyn IntrinsicSizer,
    config: &LayoutConfig,
) -> Result<ViewLayout<'a>, LayoutError> {
    root_size.validate()?;
    log::debug!(
        "layout: root {}x{:?}, gravity {:?}",
        root_size.width,
        root_size.height,
        config.system_gravity
    );

    let dimensioned = dimension_pass(root, root_size, sizer);
    let sized = sizing_pass(&dimensioned, root_size);
    let layout = positioning_pass(sized, root_size, config);

    log::debug!(
        "layout: {} nodes, root {:?}",
        layout.node_count(),
        layout.size
    );
    Ok(layout)
}

pub fn dimension_pass<'a>(
    root: &'a ViewProperties,
    root_size: RootSize,
    sizer: &dyn IntrinsicSizer,
) -> DimensionedView<'a> {
    dimensions::dimension(root, &ParentContext::wrapper(root_size), sizer)
}

pub fn sizing_pass<'a>(root: &DimensionedView<'a>, root_size: RootSize) -> SizedView<'a> {
    size_view(
        root,
        &SizingParent {
            context: ParentContext::wrapper(root_size),
            contents_size: OptionalSize::UNKNOWN,
        },
    )
}

pub fn positioning_pass<'a>(
    root: SizedView<'a>,
    root_size: RootSize,
    config: &LayoutConfig,
) -> ViewLayout<'a> {
    // An unbounded wrapper is exactly as tall as the root's margin box.
    let margins = root.dimensions.layout_properties.margins;
    let wrapper = PositioningParent {
        size: Size::new(
            root_size.width,
            root_size
                .height
                .unwrap_or(root.size.height + margins.vertical()),
        ),
        padding: Edges::ZERO,
        layout_type: LayoutType::Block,
        intrinsic_height: 0.0,
    };
    let position = position_of(&root, &[], &[], &wrapper, config.system_gravity);
    place(root, position, config.system_gravity)
}
