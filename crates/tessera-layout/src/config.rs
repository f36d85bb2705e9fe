use tessera_core::Gravity;

use crate::LayoutError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal alignment for block children (and the cross axis of flex
    /// columns) that do not set their own gravity.
    pub system_gravity: Gravity,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn system_gravity(mut self, g: Gravity) -> Self {
        self.system_gravity = g;
        self
    }
}

/// Size the document is laid out into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootSize {
    pub width: f64,
    /// `None` for documents that scroll vertically.
    pub height: Option<f64>,
}

impl RootSize {
    pub fn fixed(width: f64, height: f64) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }

    pub fn scrolling(width: f64) -> Self {
        Self {
            width,
            height: None,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && self.height.is_none_or(ok) {
            Ok(())
        } else {
            Err(LayoutError::InvalidRootSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}
