//! Third pass: offsets within the parent.
//!
//! A view's position depends on its siblings in both directions. Block
//! stacking needs everything before it; flex justification needs the extents
//! before and after it. Positions are offsets of the view's outer edge (inside
//! its margins) from the parent's top-left corner.

use smallvec::SmallVec;
use tessera_core::{
    ContentJustification, Edges, FlexDirection, Gravity, ItemAlignment, LayoutType, Point, Size,
};

use crate::dimensions::collapsed_stack_height;
use crate::resolve::resolve_transform;
use crate::sizing::SizedView;
use crate::tree::ViewLayout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositioningParent {
    pub size: Size,
    pub padding: Edges<f64>,
    pub layout_type: LayoutType,
    /// Height of the parent's own content. Block children stack below it.
    pub intrinsic_height: f64,
}

impl PositioningParent {
    pub fn of(view: &SizedView<'_>) -> Self {
        PositioningParent {
            size: view.size,
            padding: view.dimensions.layout_properties.padding,
            layout_type: view.view.layout_type(),
            intrinsic_height: view.dimensions.intrinsic_size.height.unwrap_or(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Start,
    Center,
    End,
}

impl From<Gravity> for Align {
    fn from(g: Gravity) -> Self {
        match g {
            Gravity::Left => Align::Start,
            Gravity::Center => Align::Center,
            Gravity::Right => Align::End,
        }
    }
}

impl From<ItemAlignment> for Align {
    fn from(a: ItemAlignment) -> Self {
        match a {
            ItemAlignment::Stretch | ItemAlignment::FlexStart | ItemAlignment::Baseline => {
                Align::Start
            }
            ItemAlignment::Center => Align::Center,
            ItemAlignment::FlexEnd => Align::End,
        }
    }
}

/// One axis of a box and its parent, start edge first.
#[derive(Clone, Copy, Debug)]
struct Span {
    parent: f64,
    pad: (f64, f64),
    margin: (f64, f64),
    own: f64,
}

impl Span {
    fn horizontal(parent: &PositioningParent, margins: &Edges<f64>, own: Size) -> Self {
        Span {
            parent: parent.size.width,
            pad: (parent.padding.left, parent.padding.right),
            margin: (margins.left, margins.right),
            own: own.width,
        }
    }

    fn vertical(parent: &PositioningParent, margins: &Edges<f64>, own: Size) -> Self {
        Span {
            parent: parent.size.height,
            pad: (parent.padding.top, parent.padding.bottom),
            margin: (margins.top, margins.bottom),
            own: own.height,
        }
    }

    fn inner(&self) -> f64 {
        self.parent - self.pad.0 - self.pad.1
    }

    fn outer(&self) -> f64 {
        self.own + self.margin.0 + self.margin.1
    }

    fn align(&self, align: Align) -> f64 {
        match align {
            Align::Start => self.pad.0 + self.margin.0,
            Align::Center => self.pad.0 + (self.inner() - self.outer()) / 2.0 + self.margin.0,
            Align::End => self.parent - self.pad.1 - self.margin.1 - self.own,
        }
    }
}

fn outer_main(view: &SizedView<'_>, direction: FlexDirection) -> f64 {
    let m = &view.dimensions.layout_properties.margins;
    match direction {
        FlexDirection::Row => view.size.width + m.horizontal(),
        FlexDirection::Column => view.size.height + m.vertical(),
    }
}

/// Positions every child of one parent, then recurses.
pub fn position_children<'a>(
    children: Vec<SizedView<'a>>,
    parent: &PositioningParent,
    system_gravity: Gravity,
) -> Vec<ViewLayout<'a>> {
    let positions: SmallVec<[Point; 8]> = (0..children.len())
        .map(|i| {
            position_of(
                &children[i],
                &children[..i],
                &children[i + 1..],
                parent,
                system_gravity,
            )
        })
        .collect();

    children
        .into_iter()
        .zip(positions)
        .map(|(child, position)| place(child, position, system_gravity))
        .collect()
}

/// Finalizes a view at `position` and lays out its subtree.
pub fn place<'a>(view: SizedView<'a>, position: Point, system_gravity: Gravity) -> ViewLayout<'a> {
    let own = PositioningParent::of(&view);
    let transform = resolve_transform(&view.view.layout.transform, view.size);
    let children = position_children(view.children, &own, system_gravity);
    ViewLayout {
        view: view.view,
        dimensions: view.dimensions,
        size: view.size,
        position,
        transform,
        children,
    }
}

/// Offset of `view` inside `parent`, given its siblings on either side.
pub fn position_of(
    view: &SizedView<'_>,
    preceding: &[SizedView<'_>],
    following: &[SizedView<'_>],
    parent: &PositioningParent,
    system_gravity: Gravity,
) -> Point {
    let props = &view.dimensions.layout_properties;
    let margins = &props.margins;
    let horizontal = Span::horizontal(parent, margins, view.size);
    let vertical = Span::vertical(parent, margins, view.size);

    match parent.layout_type {
        LayoutType::Block => {
            let gravity = view.view.layout.gravity.unwrap_or(system_gravity);
            let stacked = collapsed_stack_height(
                preceding
                    .iter()
                    .map(|s| (s.size.height, s.dimensions.layout_properties.margins)),
            );
            let collapsed = preceding.last().map_or(0.0, |p| {
                p.dimensions.layout_properties.margins.bottom.min(margins.top)
            });
            Point::new(
                horizontal.align(gravity.into()),
                parent.padding.top + parent.intrinsic_height + stacked + margins.top - collapsed,
            )
        }
        LayoutType::Absolute => {
            let pos = &props.position;
            let x = match (pos.left, pos.right) {
                (Some(l), _) => l + margins.left,
                (None, Some(r)) => parent.size.width - r - margins.right - view.size.width,
                (None, None) => horizontal.align(Align::Start),
            };
            let y = match (pos.top, pos.bottom) {
                (Some(t), _) => t + margins.top,
                (None, Some(b)) => parent.size.height - b - margins.bottom - view.size.height,
                (None, None) => vertical.align(Align::Start),
            };
            Point::new(x, y)
        }
        LayoutType::Flex {
            direction,
            align_items,
            justify_content,
        } => {
            let (main, cross) = match direction {
                FlexDirection::Row => (horizontal, vertical),
                FlexDirection::Column => (vertical, horizontal),
            };
            let before: f64 = preceding.iter().map(|s| outer_main(s, direction)).sum();
            let after: f64 = following.iter().map(|s| outer_main(s, direction)).sum();
            let main_offset = justify(
                justify_content,
                &main,
                before,
                after,
                preceding.len(),
                following.len(),
            );

            let cross_align = match (direction, view.view.layout.gravity) {
                (FlexDirection::Column, Some(g)) => g.into(),
                (FlexDirection::Column, None) if align_items == ItemAlignment::Stretch => {
                    system_gravity.into()
                }
                _ => align_items.into(),
            };
            let cross_offset = cross.align(cross_align);

            match direction {
                FlexDirection::Row => Point::new(main_offset, cross_offset),
                FlexDirection::Column => Point::new(cross_offset, main_offset),
            }
        }
    }
}

/// Main-axis offset of one flex item. `before`/`after` are the summed outer
/// extents of the siblings on either side. The item count includes the item
/// itself, so `space-around` splits the remaining space into `2 × count`
/// half gaps. Negative remaining space is split like positive space.
fn justify(
    justify_content: ContentJustification,
    main: &Span,
    before: f64,
    after: f64,
    preceding: usize,
    following: usize,
) -> f64 {
    let count = (preceding + 1 + following) as f64;
    let total = before + main.outer() + after;
    let start = main.pad.0 + main.margin.0;

    match justify_content {
        ContentJustification::FlexStart => start + before,
        ContentJustification::FlexEnd => {
            main.parent - main.pad.1 - after - main.outer() + main.margin.0
        }
        ContentJustification::Center => start + (main.inner() - total) / 2.0 + before,
        ContentJustification::SpaceBetween => {
            let gap = if count > 1.0 {
                (main.inner() - total) / (count - 1.0)
            } else {
                0.0
            };
            start + before + gap * preceding as f64
        }
        ContentJustification::SpaceAround => {
            let half_gap = (main.inner() - total) / (2.0 * count);
            start + before + half_gap * (2 * preceding + 1) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutConfig, NoIntrinsicSize, RootSize, compute_layout};
    use tessera_core::{FlexProperties, LayoutProperties, OptionalSize, Unit, ViewProperties, ViewType};

    fn boxed(w: f64, h: f64) -> ViewProperties {
        ViewProperties::view().layout(LayoutProperties::new().size(Unit::pt(w), Unit::pt(h)))
    }

    fn layout(doc: &ViewProperties) -> ViewLayout<'_> {
        compute_layout(
            doc,
            RootSize::scrolling(400.0),
            &NoIntrinsicSize,
            &LayoutConfig::default(),
        )
        .unwrap()
    }

    fn xs(l: &ViewLayout<'_>) -> Vec<f64> {
        l.children.iter().map(|c| c.position.x).collect()
    }

    fn child_xs(doc: ViewProperties) -> Vec<f64> {
        xs(&layout(&doc))
    }

    fn first_child_position(doc: ViewProperties) -> Point {
        layout(&doc).children[0].position
    }

    fn row(justify: ContentJustification, items: Vec<ViewProperties>) -> ViewProperties {
        ViewProperties::flex(FlexProperties::row().justify_content(justify))
            .layout(
                LayoutProperties::new()
                    .size(Unit::pt(320.0), Unit::pt(50.0))
                    .padding(Unit::pt(10.0)),
            )
            .with_children(items)
    }

    #[test]
    fn test_block_stacking_collapses_margins() {
        let doc = ViewProperties::view()
            .layout(LayoutProperties::new().padding(Unit::pt(5.0)))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(10.0), Unit::pt(10.0))
                    .margin_bottom(Unit::pt(20.0)),
            ))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(10.0), Unit::pt(10.0))
                    .margin_top(Unit::pt(8.0)),
            ))
            .child(boxed(10.0, 10.0));
        let l = layout(&doc);
        let ys: Vec<f64> = l.children.iter().map(|c| c.position.y).collect();
        // 5 + 10 + 20, then 8 collapses into the previous 20.
        assert_eq!(ys, vec![5.0, 35.0, 45.0]);
        assert_eq!(l.size.height, 5.0 + 50.0 + 5.0);
    }

    #[test]
    fn test_block_gravity() {
        let doc = ViewProperties::view()
            .layout(LayoutProperties::new().padding(Unit::pt(10.0)))
            .child(boxed(100.0, 10.0))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(100.0), Unit::pt(10.0))
                    .gravity(Gravity::Center),
            ))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(100.0), Unit::pt(10.0))
                    .margin_right(Unit::pt(4.0))
                    .gravity(Gravity::Right),
            ));
        let l = layout(&doc);
        assert_eq!(xs(&l), vec![10.0, 150.0, 400.0 - 10.0 - 4.0 - 100.0]);
    }

    #[test]
    fn test_system_gravity_applies_without_own_gravity() {
        let doc = ViewProperties::view().child(boxed(100.0, 10.0));
        let l = compute_layout(
            &doc,
            RootSize::scrolling(400.0),
            &NoIntrinsicSize,
            &LayoutConfig::new().system_gravity(Gravity::Right),
        )
        .unwrap();
        assert_eq!(l.children[0].position.x, 300.0);
    }

    #[test]
    fn test_block_children_stack_below_intrinsic_content() {
        let doc = ViewProperties::text("caption", 12.0).child(boxed(10.0, 10.0));
        let sizer = |v: &ViewProperties, _: OptionalSize| match v.view_type {
            ViewType::Text { .. } => OptionalSize::known(50.0, 16.0),
            _ => OptionalSize::UNKNOWN,
        };
        let l = compute_layout(&doc, RootSize::scrolling(400.0), &sizer, &LayoutConfig::default())
            .unwrap();
        assert_eq!(l.children[0].position.y, 16.0);
        assert_eq!(l.size.height, 26.0);
    }

    #[test]
    fn test_absolute_edges() {
        let doc = ViewProperties::absolute()
            .layout(
                LayoutProperties::new()
                    .size(Unit::pt(200.0), Unit::pt(100.0))
                    .padding(Unit::pt(6.0)),
            )
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(20.0), Unit::pt(20.0))
                    .left(Unit::pt(15.0))
                    .bottom(Unit::pt(5.0))
                    .margin_left(Unit::pt(2.0)),
            ))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(20.0), Unit::pt(20.0))
                    .right(Unit::percent(10.0)),
            ))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(20.0), Unit::pt(20.0))
                    .margin(Unit::pt(3.0)),
            ));
        let l = layout(&doc);
        assert_eq!(l.children[0].position, Point::new(17.0, 75.0));
        assert_eq!(l.children[1].position, Point::new(160.0, 6.0));
        assert_eq!(l.children[2].position, Point::new(9.0, 9.0));
    }

    #[test]
    fn test_flex_justification() {
        let items = || vec![boxed(50.0, 10.0), boxed(50.0, 10.0), boxed(50.0, 10.0)];

        let xs = child_xs(row(ContentJustification::FlexStart, items()));
        assert_eq!(xs, vec![10.0, 60.0, 110.0]);

        let xs = child_xs(row(ContentJustification::FlexEnd, items()));
        assert_eq!(xs, vec![160.0, 210.0, 260.0]);

        let xs = child_xs(row(ContentJustification::Center, items()));
        assert_eq!(xs, vec![85.0, 135.0, 185.0]);

        let xs = child_xs(row(ContentJustification::SpaceBetween, items()));
        assert_eq!(xs, vec![10.0, 135.0, 260.0]);

        // 150 free over 6 half gaps of 25.
        let xs = child_xs(row(ContentJustification::SpaceAround, items()));
        assert_eq!(xs, vec![35.0, 135.0, 235.0]);
    }

    #[test]
    fn test_space_distribution_single_item_and_overflow() {
        let xs = child_xs(row(ContentJustification::SpaceBetween, vec![boxed(50.0, 10.0)]));
        assert_eq!(xs, vec![10.0]);

        let wide = || {
            ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(200.0), Unit::pt(10.0))
                    .flex_shrink(0.0),
            )
        };
        // 400 of items in 300: the single gap is -100.
        let xs = child_xs(row(ContentJustification::SpaceBetween, vec![wide(), wide()]));
        assert_eq!(xs, vec![10.0, 110.0]);

        // Four half gaps of -25.
        let xs = child_xs(row(ContentJustification::SpaceAround, vec![wide(), wide()]));
        assert_eq!(xs, vec![-15.0, 135.0]);
    }

    #[test]
    fn test_flex_cross_alignment() {
        let container = |align: ItemAlignment| {
            ViewProperties::flex(FlexProperties::row().align_items(align))
                .layout(LayoutProperties::new().size(Unit::pt(100.0), Unit::pt(60.0)))
                .child(boxed(10.0, 20.0))
        };
        assert_eq!(
            first_child_position(container(ItemAlignment::Center)),
            Point::new(0.0, 20.0)
        );
        assert_eq!(
            first_child_position(container(ItemAlignment::FlexEnd)),
            Point::new(0.0, 40.0)
        );
        assert_eq!(
            first_child_position(container(ItemAlignment::Baseline)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_stretch_column_uses_system_gravity() {
        let doc = ViewProperties::flex(FlexProperties::column())
            .layout(LayoutProperties::new().size(Unit::pt(100.0), Unit::pt(100.0)))
            .child(boxed(40.0, 10.0))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(40.0), Unit::pt(10.0))
                    .gravity(Gravity::Left),
            ));
        let l = compute_layout(
            &doc,
            RootSize::scrolling(400.0),
            &NoIntrinsicSize,
            &LayoutConfig::new().system_gravity(Gravity::Right),
        )
        .unwrap();
        assert_eq!(l.children[0].position, Point::new(60.0, 0.0));
        assert_eq!(l.children[1].position, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_flex_column_gravity_overrides_alignment() {
        let doc = ViewProperties::flex(FlexProperties::column().align_items(ItemAlignment::FlexEnd))
            .layout(LayoutProperties::new().size(Unit::pt(100.0), Unit::pt(100.0)))
            .child(boxed(10.0, 10.0))
            .child(ViewProperties::view().layout(
                LayoutProperties::new()
                    .size(Unit::pt(10.0), Unit::pt(10.0))
                    .gravity(Gravity::Center),
            ));
        let l = layout(&doc);
        assert_eq!(l.children[0].position, Point::new(90.0, 0.0));
        assert_eq!(l.children[1].position, Point::new(45.0, 10.0));
    }

    #[test]
    fn test_flex_positions_include_leading_margin() {
        let doc = row(
            ContentJustification::FlexStart,
            vec![
                ViewProperties::view().layout(
                    LayoutProperties::new()
                        .size(Unit::pt(50.0), Unit::pt(10.0))
                        .margin_edges(Edges {
                            top: Unit::pt(2.0),
                            left: Unit::pt(4.0),
                            bottom: Unit::pt(0.0),
                            right: Unit::pt(6.0),
                        }),
                ),
                boxed(50.0, 10.0),
            ],
        );
        let l = layout(&doc);
        assert_eq!(l.children[0].position, Point::new(14.0, 12.0));
        assert_eq!(l.children[1].position.x, 10.0 + 60.0);
    }

    #[test]
    fn test_transform_resolved_on_placement() {
        let doc = ViewProperties::view().layout(
            LayoutProperties::new()
                .size(Unit::pt(80.0), Unit::pt(40.0))
                .scale(2.0)
                .translate(Unit::percent(50.0), Unit::pt(0.0)),
        );
        let l = layout(&doc);
        assert_eq!(l.transform.translate_x, 40.0);
        assert_eq!(l.transform.origin, Point::new(40.0, 20.0));
        assert_eq!(l.transform.scale_x, 2.0);
    }
}
