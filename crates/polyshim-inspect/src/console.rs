//! Console polyfill over a line sink.
//!
//! Scripts expect `console.log(...)` and `app.print(value)`; both land on the
//! single line sink provided by the host.

use polyshim_value::Value;

use crate::inspector::{InspectOptions, inspect_with_options};
use crate::sink::LineSink;
use crate::telemetry::InspectReport;

#[derive(Debug)]
pub struct Console<S> {
    sink: S,
    options: InspectOptions,
}

impl<S: LineSink> Console<S> {
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, InspectOptions::default())
    }

    pub fn with_options(sink: S, options: InspectOptions) -> Self {
        Self { sink, options }
    }

    /// `console.log`: one line per argument, each in its string form.
    pub fn log(&mut self, args: &[Value]) {
        for arg in args {
            self.sink.accept(&arg.to_string());
        }
    }

    /// `app.print`: structured rendering of a single value.
    pub fn print(&mut self, value: &Value) -> InspectReport {
        inspect_with_options(value, &mut self.sink, &self.options)
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
