//! # Units
//!
//! Every length in a document is a [`Unit`]: either absolute points or a
//! percentage of some reference length chosen by the layout engine (usually
//! the parent's inner width or height).
//!
//! Units have a compact textual form, which is also what the `serde` feature
//! reads and writes:
//!
//! ```rust
//! use tessera_core::*;
//!
//! assert_eq!("12".parse::<Unit>(), Ok(Unit::Points(12.0)));
//! assert_eq!("12pt".parse::<Unit>(), Ok(Unit::Points(12.0)));
//! assert_eq!("50%".parse::<Unit>(), Ok(Unit::Percent(50.0)));
//! assert_eq!("wrap_content".parse::<Dimension>(), Ok(Dimension::WrapContent));
//! assert_eq!("auto".parse::<FlexBasis>(), Ok(FlexBasis::Auto));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::ParseUnitError;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::UnitRepr", into = "String")
)]
pub enum Unit {
    Points(f64),
    /// Percentage in `0..=100` of a reference length.
    Percent(f64),
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Points(0.0)
    }
}

impl Unit {
    pub fn pt(v: f64) -> Self {
        Unit::Points(v)
    }

    pub fn percent(v: f64) -> Self {
        Unit::Percent(v)
    }

    /// Absolute value of this unit. Percentages need a known reference.
    pub fn resolve(&self, reference: Option<f64>) -> Option<f64> {
        match *self {
            Unit::Points(v) => Some(v),
            Unit::Percent(p) => reference.map(|r| r * p / 100.0),
        }
    }

    /// Like [`Unit::resolve`], with an unknown percentage resolving to zero.
    pub fn resolve_or_zero(&self, reference: Option<f64>) -> f64 {
        self.resolve(reference).unwrap_or(0.0)
    }
}

/// Declared width or height of a view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::UnitRepr", into = "String")
)]
pub enum Dimension {
    Unit(Unit),
    /// Size to the view's own content.
    WrapContent,
    /// Fill the parent's reference size.
    MatchParent,
}

impl From<Unit> for Dimension {
    fn from(u: Unit) -> Self {
        Dimension::Unit(u)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::UnitRepr", into = "String")
)]
pub enum FlexBasis {
    #[default]
    Auto,
    Unit(Unit),
}

fn parse_number(s: &str, original: &str) -> Result<f64, ParseUnitError> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| ParseUnitError::InvalidNumber(original.to_string()))?;
    if !v.is_finite() {
        return Err(ParseUnitError::NotFinite(original.to_string()));
    }
    Ok(v)
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseUnitError::Empty);
        }
        if let Some(p) = t.strip_suffix('%') {
            return parse_number(p, s).map(Unit::Percent);
        }
        let n = t.strip_suffix("pt").unwrap_or(t);
        parse_number(n, s).map(Unit::Points)
    }
}

impl FromStr for Dimension {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wrap_content" => Ok(Dimension::WrapContent),
            "match_parent" => Ok(Dimension::MatchParent),
            other => other.parse().map(Dimension::Unit),
        }
    }
}

impl FromStr for FlexBasis {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(FlexBasis::Auto),
            other => other.parse().map(FlexBasis::Unit),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Points(v) => write!(f, "{v}"),
            Unit::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Unit(u) => u.fmt(f),
            Dimension::WrapContent => f.write_str("wrap_content"),
            Dimension::MatchParent => f.write_str("match_parent"),
        }
    }
}

impl fmt::Display for FlexBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexBasis::Auto => f.write_str("auto"),
            FlexBasis::Unit(u) => u.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::{Dimension, FlexBasis, Unit};
    use crate::ParseUnitError;

    /// Documents may spell plain points as JSON numbers.
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(crate) enum UnitRepr {
        Number(f64),
        Text(String),
    }

    impl UnitRepr {
        fn parse<T: std::str::FromStr<Err = ParseUnitError>>(
            self,
            from_points: impl FnOnce(Unit) -> T,
        ) -> Result<T, ParseUnitError> {
            match self {
                UnitRepr::Number(v) if v.is_finite() => Ok(from_points(Unit::Points(v))),
                UnitRepr::Number(v) => Err(ParseUnitError::NotFinite(v.to_string())),
                UnitRepr::Text(s) => s.parse(),
            }
        }
    }

    impl TryFrom<UnitRepr> for Unit {
        type Error = ParseUnitError;
        fn try_from(r: UnitRepr) -> Result<Self, Self::Error> {
            r.parse(|u| u)
        }
    }

    impl TryFrom<UnitRepr> for Dimension {
        type Error = ParseUnitError;
        fn try_from(r: UnitRepr) -> Result<Self, Self::Error> {
            r.parse(Dimension::Unit)
        }
    }

    impl TryFrom<UnitRepr> for FlexBasis {
        type Error = ParseUnitError;
        fn try_from(r: UnitRepr) -> Result<Self, Self::Error> {
            r.parse(FlexBasis::Unit)
        }
    }

    impl From<Unit> for String {
        fn from(u: Unit) -> Self {
            u.to_string()
        }
    }

    impl From<Dimension> for String {
        fn from(d: Dimension) -> Self {
            d.to_string()
        }
    }

    impl From<FlexBasis> for String {
        fn from(b: FlexBasis) -> Self {
            b.to_string()
        }
    }
}
