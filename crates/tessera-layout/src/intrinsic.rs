//! Measurement of a view's own content.
//!
//! The engine never measures text or decodes media itself. The host passes
//! an [`IntrinsicSizer`] that is asked, once per view during the dimensioning
//! pass, how large the view's own content is when constrained to the given
//! inner size. Hosts must have any fonts or media metadata ready before
//! layout starts; the sizer is expected to be cheap and side-effect free.

use tessera_core::{OptionalSize, Size, ViewProperties, ViewType};

pub trait IntrinsicSizer {
    fn intrinsic_size(&self, view: &ViewProperties, constraint: OptionalSize) -> OptionalSize;
}

impl<F> IntrinsicSizer for F
where
    F: Fn(&ViewProperties, OptionalSize) -> OptionalSize,
{
    fn intrinsic_size(&self, view: &ViewProperties, constraint: OptionalSize) -> OptionalSize {
        self(view, constraint)
    }
}

/// For trees without content leaves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIntrinsicSize;

impl IntrinsicSizer for NoIntrinsicSize {
    fn intrinsic_size(&self, _view: &ViewProperties, _constraint: OptionalSize) -> OptionalSize {
        OptionalSize::UNKNOWN
    }
}

/// Reports the same natural size for every image and video view.
#[derive(Clone, Copy, Debug)]
pub struct FixedIntrinsicSize(pub Size);

impl IntrinsicSizer for FixedIntrinsicSize {
    fn intrinsic_size(&self, view: &ViewProperties, _constraint: OptionalSize) -> OptionalSize {
        match view.view_type {
            ViewType::Image { .. } | ViewType::Video { .. } | ViewType::VideoEmbed { .. } => {
                self.0.into()
            }
            _ => OptionalSize::UNKNOWN,
        }
    }
}

/// Glyph-width estimate for text views, wrapping by characters.
///
/// Good enough for tests and previews; real hosts measure with their text
/// stack.
#[derive(Clone, Copy, Debug)]
pub struct EstimatedTextSizer {
    /// Advance of one character, as a fraction of the font size.
    pub char_width: f64,
    /// Line height, as a fraction of the font size.
    pub line_height: f64,
}

impl Default for EstimatedTextSizer {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            line_height: 1.3,
        }
    }
}

impl IntrinsicSizer for EstimatedTextSizer {
    fn intrinsic_size(&self, view: &ViewProperties, constraint: OptionalSize) -> OptionalSize {
        let ViewType::Text { text, font_size } = &view.view_type else {
            return OptionalSize::UNKNOWN;
        };
        let advance = font_size * self.char_width;
        let line_h = font_size * self.line_height;
        let chars = text.chars().count();
        if chars == 0 || advance <= 0.0 {
            return OptionalSize::known(0.0, line_h.max(0.0));
        }

        let natural_w = chars as f64 * advance;
        let wrap_w = constraint.width.unwrap_or(natural_w).min(natural_w);
        let per_line = ((wrap_w / advance).floor() as usize).max(1);
        let lines = chars.div_ceil(per_line);

        OptionalSize::known((per_line.min(chars)) as f64 * advance, lines as f64 * line_h)
    }
}
