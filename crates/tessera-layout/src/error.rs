use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid root size {width}x{height:?}: must be finite and non-negative")]
    InvalidRootSize { width: f64, height: Option<f64> },
}
