//! Measurement constraints for a single axis.

/// A sizing constraint for one axis of the control.
///
/// Mirrors the usual "wrap content vs exact" measurement semantics: the host
/// hands the control one spec per axis, and the control resolves its desired
/// content size against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The control must be exactly this size, regardless of content.
    Exact(f32),
    /// The control sizes to its content, capped at this limit.
    AtMost(f32),
}

impl MeasureSpec {
    /// Resolve a desired content-driven size against this spec.
    #[inline]
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exact(value) => value,
            MeasureSpec::AtMost(limit) => desired.min(limit),
        }
    }

    /// The spec's raw value (exact size or cap).
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            MeasureSpec::Exact(value) | MeasureSpec::AtMost(value) => value,
        }
    }
}
