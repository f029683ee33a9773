//! Version constants for output-format gating.

/// Line format produced by the inspector.
///
/// Bump this if any rendered line changes shape (indentation, delimiters,
/// colon spacing), even when the API stays the same.
pub const INSPECT_FORMAT_V: u8 = 1;

/// Structure depth rendered when no ceiling is configured.
pub const DEFAULT_DEPTH_CEILING: usize = polyshim_inspect::DEFAULT_DEPTH_CEILING;
