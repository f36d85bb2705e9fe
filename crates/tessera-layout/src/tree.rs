use tessera_core::{Point, Rect, Size, Transform, ViewProperties};

use crate::dimensions::ViewDimensions;

/// Final layout of one view.
#[derive(Clone, Debug)]
pub struct ViewLayout<'a> {
    pub view: &'a ViewProperties,
    pub dimensions: ViewDimensions,
    pub size: Size,
    /// Offset of the view's top-left corner from its parent's top-left corner.
    pub position: Point,
    pub transform: Transform,
    pub children: Vec<ViewLayout<'a>>,
}

impl<'a> ViewLayout<'a> {
    pub fn frame(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Pre-order walk over this view and all its descendants.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn find(&self, id: &str) -> Option<&ViewLayout<'a>> {
        self.iter().find(|l| l.view.id.as_deref() == Some(id))
    }

    /// Every view's frame in this view's coordinate space, in pre-order.
    /// Transforms are not applied.
    pub fn absolute_frames(&self) -> Vec<Rect> {
        fn walk(l: &ViewLayout<'_>, origin: Point, out: &mut Vec<Rect>) {
            let local = l.frame();
            let at = origin.offset(local.origin());
            out.push(Rect { x: at.x, y: at.y, ..local });
            for c in &l.children {
                walk(c, at, out);
            }
        }
        let mut out = Vec::new();
        walk(self, Point::ZERO, &mut out);
        out
    }
}

pub struct Iter<'b, 'a> {
    stack: Vec<&'b ViewLayout<'a>>,
}

impl<'b, 'a> Iterator for Iter<'b, 'a> {
    type Item = &'b ViewLayout<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
