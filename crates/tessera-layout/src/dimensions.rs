//! First pass: candidate sizes for every view.
//!
//! Works from rough, parent-supplied constraints only. A view resolves its
//! properties, estimates a rough size, asks the host for its intrinsic size,
//! recurses into its children, then derives its contents size from theirs.

use tessera_core::{Edges, FlexDirection, LayoutType, OptionalSize, ViewProperties};

use crate::IntrinsicSizer;
use crate::resolve::{ParentContext, ResolvedLayoutProperties, explicit_sizes, resolve};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewDimensions {
    pub layout_properties: ResolvedLayoutProperties,
    pub concrete_size: OptionalSize,
    pub relative_size: OptionalSize,
    /// Estimate used only to constrain measurement of this view and its
    /// children.
    pub rough_size: OptionalSize,
    pub intrinsic_size: OptionalSize,
    /// Size implied by the view's children and intrinsic content, excluding
    /// padding.
    pub contents_size: OptionalSize,
}

impl ViewDimensions {
    pub fn padded_contents_size(&self) -> OptionalSize {
        self.contents_size.outset(&self.layout_properties.padding)
    }

    /// Best size known before the parent's final size is: explicit, then
    /// relative, then content-derived.
    pub fn provisional_size(&self) -> OptionalSize {
        self.concrete_size
            .or(self.relative_size)
            .or(self.padded_contents_size())
    }
}

#[derive(Clone, Debug)]
pub struct DimensionedView<'a> {
    pub view: &'a ViewProperties,
    pub dimensions: ViewDimensions,
    pub children: Vec<DimensionedView<'a>>,
}

pub fn dimension<'a>(
    view: &'a ViewProperties,
    parent: &ParentContext,
    sizer: &dyn IntrinsicSizer,
) -> DimensionedView<'a> {
    let props = resolve(&view.layout, &view.style, parent);
    let (concrete_size, relative_size) = explicit_sizes(&props, parent);
    let rough_size = rough_size(&props, concrete_size.or(relative_size), parent);
    let rough_inner = rough_size.inset(&props.padding);

    let intrinsic_size = sanitize(sizer.intrinsic_size(view, rough_inner));

    let layout_type = view.layout_type();
    let own = ParentContext {
        size: rough_size,
        padding: props.padding,
        layout_type,
    };
    let children: Vec<_> = view
        .children
        .iter()
        .map(|c| dimension(c, &own, sizer))
        .collect();

    let contents = contents_size(layout_type, intrinsic_size, &children);
    let contents_size = clamp_contents(contents, &props);

    DimensionedView {
        view,
        dimensions: ViewDimensions {
            layout_properties: props,
            concrete_size,
            relative_size,
            rough_size,
            intrinsic_size,
            contents_size,
        },
        children,
    }
}

fn rough_size(
    props: &ResolvedLayoutProperties,
    explicit: OptionalSize,
    parent: &ParentContext,
) -> OptionalSize {
    let inner = parent.inner_size();
    let rough = match parent.layout_type {
        // Block height comes from content, never from the parent.
        LayoutType::Block => OptionalSize::new(
            explicit.width.or(inner
                .width
                .map(|w| (w - props.margins.horizontal()).max(0.0))),
            explicit.height,
        ),
        LayoutType::Absolute | LayoutType::Flex { .. } => explicit.or(inner),
    };
    props.clamp_optional(rough)
}

/// Host sizers are outside our control; non-finite or negative answers
/// count as unknown.
fn sanitize(s: OptionalSize) -> OptionalSize {
    let check = |v: f64| {
        if v.is_finite() && v >= 0.0 {
            Some(v)
        } else {
            log::warn!("ignoring invalid intrinsic size component {v}");
            None
        }
    };
    OptionalSize::new(s.width.and_then(check), s.height.and_then(check))
}

/// Total height of vertically stacked boxes where each pair of adjoining
/// margins collapses to the larger of the two.
pub(crate) fn collapsed_stack_height(items: impl IntoIterator<Item = (f64, Edges<f64>)>) -> f64 {
    let mut total = 0.0;
    let mut prev_bottom: Option<f64> = None;
    for (height, margins) in items {
        total += height + margins.vertical();
        if let Some(b) = prev_bottom {
            total -= b.min(margins.top);
        }
        prev_bottom = Some(margins.bottom);
    }
    total
}

fn max_known(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    values.flatten().fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

fn contents_size(
    layout_type: LayoutType,
    intrinsic: OptionalSize,
    children: &[DimensionedView<'_>],
) -> OptionalSize {
    let outer = |c: &DimensionedView<'_>| {
        (
            c.dimensions.provisional_size(),
            c.dimensions.layout_properties.margins,
        )
    };

    match layout_type {
        // Absolutely placed children never size their parent.
        LayoutType::Absolute => OptionalSize::UNKNOWN,
        LayoutType::Block => {
            let width = intrinsic.width.or_else(|| {
                max_known(children.iter().map(|c| {
                    let (size, margins) = outer(c);
                    size.width.map(|w| w + margins.horizontal())
                }))
            });
            let height = if children.is_empty() {
                intrinsic.height
            } else {
                let stacked = collapsed_stack_height(children.iter().map(|c| {
                    let (size, margins) = outer(c);
                    (size.height.unwrap_or(0.0), margins)
                }));
                Some(intrinsic.height.unwrap_or(0.0) + stacked)
            };
            OptionalSize::new(width, height)
        }
        LayoutType::Flex { direction, .. } => {
            let main_sum = (!children.is_empty()).then(|| {
                children
                    .iter()
                    .map(|c| {
                        let (size, margins) = outer(c);
                        match direction {
                            FlexDirection::Row => size.width.unwrap_or(0.0) + margins.horizontal(),
                            FlexDirection::Column => {
                                size.height.unwrap_or(0.0) + margins.vertical()
                            }
                        }
                    })
                    .sum::<f64>()
            });
            let cross_max = max_known(children.iter().map(|c| {
                let (size, margins) = outer(c);
                match direction {
                    FlexDirection::Row => size.height.map(|h| h + margins.vertical()),
                    FlexDirection::Column => size.width.map(|w| w + margins.horizontal()),
                }
            }));
            match direction {
                FlexDirection::Row => OptionalSize::new(main_sum, cross_max),
                FlexDirection::Column => OptionalSize::new(cross_max, main_sum),
            }
        }
    }
}

/// Contents live inside the padding, so the bounds shrink by it too.
fn clamp_contents(contents: OptionalSize, props: &ResolvedLayoutProperties) -> OptionalSize {
    let pad = &props.padding;
    OptionalSize::new(
        contents.width.map(|w| {
            crate::resolve::clamp(
                w,
                (props.min_size.width - pad.horizontal()).max(0.0),
                props.max_size.width - pad.horizontal(),
            )
        }),
        contents.height.map(|h| {
            crate::resolve::clamp(
                h,
                (props.min_size.height - pad.vertical()).max(0.0),
                props.max_size.height - pad.vertical(),
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoIntrinsicSize, RootSize};
    use tessera_core::{Dimension, FlexProperties, LayoutProperties, Unit, ViewType};

    fn block(h: f64, top: f64, bottom: f64) -> ViewProperties {
        ViewProperties::view().layout(
            LayoutProperties::new()
                .height(Unit::pt(h))
                .margin_top(Unit::pt(top))
                .margin_bottom(Unit::pt(bottom)),
        )
    }

    #[test]
    fn test_collapsed_stack_height() {
        let m = |t, b| Edges {
            top: t,
            bottom: b,
            ..Edges::ZERO
        };
        assert_eq!(collapsed_stack_height(Vec::new()), 0.0);
        assert_eq!(collapsed_stack_height(vec![(10.0, m(5.0, 5.0))]), 20.0);
        assert_eq!(
            collapsed_stack_height(vec![(10.0, m(0.0, 20.0)), (30.0, m(10.0, 0.0))]),
            10.0 + 20.0 + 30.0 + 10.0 - 10.0
        );
    }

    #[test]
    fn test_block_contents_collapse_margins() {
        let doc = ViewProperties::view()
            .child(block(50.0, 0.0, 20.0))
            .child(block(40.0, 10.0, 0.0));
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(200.0)),
            &NoIntrinsicSize,
        );
        // (50 + 20) + (40 + 10) - min(20, 10)
        assert_eq!(d.dimensions.contents_size.height, Some(110.0));
    }

    #[test]
    fn test_empty_block_uses_intrinsic_height() {
        let doc = ViewProperties::view();
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(200.0)),
            &NoIntrinsicSize,
        );
        assert_eq!(d.dimensions.contents_size, OptionalSize::UNKNOWN);

        let sizer = |_: &ViewProperties, _: OptionalSize| OptionalSize::new(None, Some(12.0));
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(200.0)),
            &sizer,
        );
        assert_eq!(d.dimensions.contents_size.height, Some(12.0));
    }

    #[test]
    fn test_block_rough_size_fills_width_minus_margins() {
        let doc = ViewProperties::view()
            .layout(LayoutProperties::new().margin(Unit::pt(10.0)).padding(Unit::pt(5.0)));
        let sizer = |_: &ViewProperties, c: OptionalSize| {
            assert_eq!(c, OptionalSize::new(Some(170.0), None));
            OptionalSize::UNKNOWN
        };
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::fixed(200.0, 400.0)),
            &sizer,
        );
        assert_eq!(d.dimensions.rough_size, OptionalSize::new(Some(180.0), None));
    }

    #[test]
    fn test_absolute_children_do_not_size_parent() {
        let doc = ViewProperties::absolute().child(block(50.0, 0.0, 0.0));
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(200.0)),
            &NoIntrinsicSize,
        );
        assert_eq!(d.dimensions.contents_size, OptionalSize::UNKNOWN);
        // Children still get dimensioned against the parent's rough size.
        assert_eq!(d.children[0].dimensions.rough_size.width, Some(200.0));
    }

    #[test]
    fn test_flex_row_contents() {
        let item = |w: f64, h: Option<f64>| {
            let mut l = LayoutProperties::new().width(Unit::pt(w)).margin_left(Unit::pt(5.0));
            if let Some(h) = h {
                l = l.height(Unit::pt(h));
            }
            ViewProperties::view().layout(l)
        };
        let doc = ViewProperties::flex(FlexProperties::row())
            .child(item(50.0, Some(20.0)))
            .child(item(30.0, None))
            .child(item(20.0, Some(35.0)));
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(300.0)),
            &NoIntrinsicSize,
        );
        assert_eq!(
            d.dimensions.contents_size,
            OptionalSize::new(Some(115.0), Some(35.0))
        );
    }

    #[test]
    fn test_contents_clamped_inside_padding() {
        let doc = ViewProperties::view()
            .layout(
                LayoutProperties::new()
                    .padding(Unit::pt(10.0))
                    .max_height(Unit::pt(50.0)),
            )
            .child(block(100.0, 0.0, 0.0));
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(200.0)),
            &NoIntrinsicSize,
        );
        assert_eq!(d.dimensions.contents_size.height, Some(30.0));
    }

    #[test]
    fn test_text_measured_under_rough_inner_width() {
        let doc = ViewProperties::view()
            .layout(
                LayoutProperties::new()
                    .width(Dimension::MatchParent)
                    .padding(Unit::pt(10.0)),
            )
            .child(ViewProperties::text("hello", 12.0));
        let sizer = |v: &ViewProperties, c: OptionalSize| match v.view_type {
            ViewType::Text { .. } => OptionalSize::new(c.width, Some(40.0)),
            _ => OptionalSize::UNKNOWN,
        };
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(320.0)),
            &sizer,
        );
        let text = &d.children[0].dimensions;
        assert_eq!(text.intrinsic_size, OptionalSize::known(300.0, 40.0));
        assert_eq!(d.dimensions.contents_size, OptionalSize::known(300.0, 40.0));
    }

    #[test]
    fn test_invalid_intrinsic_is_unknown() {
        let sizer = |_: &ViewProperties, _: OptionalSize| OptionalSize::new(Some(f64::NAN), Some(-1.0));
        let doc = ViewProperties::text("x", 10.0);
        let d = dimension(
            &doc,
            &ParentContext::wrapper(RootSize::scrolling(100.0)),
            &sizer,
        );
        assert_eq!(d.dimensions.intrinsic_size, OptionalSize::UNKNOWN);
    }
}
