pub mod console;
pub mod inspector;
pub mod sink;
pub mod telemetry;

pub use console::Console;
pub use inspector::{DEFAULT_DEPTH_CEILING, InspectOptions, inspect, inspect_with_options};
pub use sink::{LineSink, TracingSink, WriterSink};
pub use telemetry::InspectReport;
