use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

/// Visual styling. Layout only looks at the stroke width, which is drawn
/// inside the box and therefore adds to the padding on every edge.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleProperties {
    pub background: Option<Color>,
    pub opacity: Option<f64>,
    pub corner_radius: f64,
    pub clips_to_bounds: bool,
    pub stroke: Option<Stroke>,
}

impl StyleProperties {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn opacity(mut self, a: f64) -> Self {
        self.opacity = Some(a);
        self
    }
    pub fn corner_radius(mut self, r: f64) -> Self {
        self.corner_radius = r;
        self
    }
    pub fn clip(mut self) -> Self {
        self.clips_to_bounds = true;
        self
    }
    pub fn stroke(mut self, width: f64, color: Color) -> Self {
        self.stroke = Some(Stroke { width, color });
        self
    }

    /// Extra inset the stroke takes from the content box.
    pub fn stroke_width(&self) -> f64 {
        self.stroke.map(|s| s.width.max(0.0)).unwrap_or(0.0)
    }
}
