//! `polyshim-io` is the single supported public entrypoint for the host value
//! model, the structured-value inspector and the console polyfill.
//!
//! This crate intentionally contains **no** editor-host or network shims.
//! Those are external collaborators. `polyshim-io` focuses on:
//! - host values
//! - line sinks
//! - depth-bounded inspection
//! - loading JSON documents as host values

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `polyshim_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the host value model.
#[doc(hidden)]
pub mod value {
    pub use polyshim_value::convert::{function_to_string, number_to_string};
    pub use polyshim_value::{Array, Function, Object, Shape, Value, ValueError};
}

// Re-export the inspector and sinks.
#[doc(hidden)]
pub mod inspect {
    pub use polyshim_inspect::{
        Console,
        InspectOptions,
        InspectReport,
        LineSink,
        TracingSink,
        WriterSink,
        inspect,
        inspect_with_options,
    };
}

/// Loading JSON documents as host values.
pub mod load;

/// Version constants for output-format gating.
pub mod version;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::inspect::{Console, InspectOptions, InspectReport, LineSink, TracingSink, WriterSink};
    pub use crate::inspect::{inspect, inspect_with_options};
    pub use crate::load::{LoadError, load_json_input, load_json_path, load_json_str};
    pub use crate::value::{Array, Function, Object, Shape, Value};
    pub use crate::version;
}
