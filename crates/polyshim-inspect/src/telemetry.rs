use serde::{Deserialize, Serialize};

/// Deterministic summary of one top-level inspection.
///
/// Notes:
/// - Contains *no* wall-clock timestamps, so two runs over the same value
///   produce equal reports.
/// - Intended for tracing output and CLI `--report`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectReport {
    /// Lines handed to the sink.
    pub lines: usize,

    /// Deepest structure level whose entries were rendered (0 for scalars).
    pub max_depth: usize,

    /// Subtrees skipped because they sat below the depth ceiling.
    pub truncated: usize,

    /// Ceiling in effect for this run.
    pub depth_ceiling: usize,
}

impl InspectReport {
    pub fn new(depth_ceiling: usize) -> Self {
        Self {
            depth_ceiling,
            ..Self::default()
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated > 0
    }

    pub(crate) fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}
