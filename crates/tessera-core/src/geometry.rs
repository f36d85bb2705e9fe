#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Point {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A size where either axis may still be unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OptionalSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl OptionalSize {
    pub const UNKNOWN: OptionalSize = OptionalSize {
        width: None,
        height: None,
    };

    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    pub fn known(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Per-axis fallback, like `Option::or`.
    pub fn or(self, other: OptionalSize) -> Self {
        Self {
            width: self.width.or(other.width),
            height: self.height.or(other.height),
        }
    }

    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            width: self.width.map(&mut f),
            height: self.height.map(&mut f),
        }
    }

    /// Shrinks both known axes by the edges, never below zero.
    pub fn inset(self, edges: &Edges<f64>) -> Self {
        Self {
            width: self.width.map(|w| (w - edges.horizontal()).max(0.0)),
            height: self.height.map(|h| (h - edges.vertical()).max(0.0)),
        }
    }

    /// Grows both known axes by the edges.
    pub fn outset(self, edges: &Edges<f64>) -> Self {
        Self {
            width: self.width.map(|w| w + edges.horizontal()),
            height: self.height.map(|h| h + edges.vertical()),
        }
    }

    pub fn unwrap_or_zero(self) -> Size {
        Size {
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        }
    }
}

impl From<Size> for OptionalSize {
    fn from(s: Size) -> Self {
        OptionalSize::known(s.width, s.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect {
            x: origin.x,
            y: origin.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Four-sided values (padding, margins, position offsets).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        bound(deserialize = "T: serde::Deserialize<'de> + Default")
    )
)]
pub struct Edges<T> {
    pub top: T,
    pub left: T,
    pub bottom: T,
    pub right: T,
}

impl<T: Copy> Edges<T> {
    pub fn all(v: T) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }

    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            top: f(self.top),
            left: f(self.left),
            bottom: f(self.bottom),
            right: f(self.right),
        }
    }
}

impl Edges<f64> {
    pub const ZERO: Edges<f64> = Edges {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Final, absolute transform of a laid out view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate: f64, // radians
    /// Pivot for scale and rotation, relative to the view's top-left corner.
    pub origin: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate: 0.0,
            origin: Point::ZERO,
        }
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::identity()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.rotate == 0.0
    }

    /// Maps a point in the view's local space.
    pub fn apply_to_point(&self, p: Point) -> Point {
        // Apply in order: scale, rotate (both about origin), translate
        let mut x = (p.x - self.origin.x) * self.scale_x;
        let mut y = (p.y - self.origin.y) * self.scale_y;

        if self.rotate != 0.0 {
            let cos = self.rotate.cos();
            let sin = self.rotate.sin();
            let nx = x * cos - y * sin;
            let ny = x * sin + y * cos;
            x = nx;
            y = ny;
        }

        Point {
            x: x + self.origin.x + self.translate_x,
            y: y + self.origin.y + self.translate_y,
        }
    }
}
