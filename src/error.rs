use thiserror::Error;

/// Errors raised by the palette pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The input color list is too small for a stage to fill its slots.
    /// Surfaced to the caller immediately; never defaulted.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// A stage broke an internal invariant. Indicates a logic defect, not
    /// bad input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
