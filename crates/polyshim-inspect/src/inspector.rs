use polyshim_value::{Shape, Value};

use crate::sink::LineSink;
use crate::telemetry::InspectReport;

/// Deepest structure level rendered by default.
pub const DEFAULT_DEPTH_CEILING: usize = 8;

/// Inspector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    /// Structures nested below this level are skipped without output.
    ///
    /// This is the only guard against cyclic values: there is no
    /// visited set, so a cycle is re-traversed until the ceiling.
    pub depth_ceiling: usize,

    /// Prefix repeated once per depth level.
    pub indent_unit: String,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            depth_ceiling: DEFAULT_DEPTH_CEILING,
            indent_unit: "  ".to_string(),
        }
    }
}

impl InspectOptions {
    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }
}

/// Render `value` into `sink` with default options.
///
/// Structures are wrapped in `{` / `}` lines with their entries indented one
/// level; anything else is a single line holding its string conversion.
pub fn inspect<S: LineSink + ?Sized>(value: &Value, sink: &mut S) {
    inspect_with_options(value, sink, &InspectOptions::default());
}

/// Render `value` into `sink` and report what was emitted.
///
/// Rendering rules, per entry at depth `d` (indent = unit × `d`):
/// - keyed child: `{indent}{key}: {`, entries at `d + 1`, `{indent}}`
/// - sequence child: `{indent}{key}: [`, string elements as
///   `{indent}{unit}{element}`, other elements rendered as structures at
///   `d + 1`, then `{indent}]`
/// - callable child: `{indent}{key}: function`
/// - anything else: `{indent}{key}:{value}`
///
/// Sequences enumerate their indices as keys. Scalars rendered as a
/// structure have no entries and produce no lines.
pub fn inspect_with_options<S: LineSink + ?Sized>(
    value: &Value,
    sink: &mut S,
    options: &InspectOptions,
) -> InspectReport {
    let mut walk = Walk {
        sink,
        options,
        report: InspectReport::new(options.depth_ceiling),
    };

    if value.shape().is_structure() {
        walk.emit("{");
        walk.render_structure(value, 1);
        walk.emit("}");
    } else {
        walk.emit(&value.to_string());
    }

    let report = walk.report;
    tracing::debug!(
        shape = value.shape().as_str(),
        lines = report.lines,
        max_depth = report.max_depth,
        truncated = report.truncated,
        "inspected value"
    );
    report
}

struct Walk<'a, S: LineSink + ?Sized> {
    sink: &'a mut S,
    options: &'a InspectOptions,
    report: InspectReport,
}

impl<S: LineSink + ?Sized> Walk<'_, S> {
    fn emit(&mut self, line: &str) {
        self.sink.accept(line);
        self.report.lines += 1;
    }

    fn render_structure(&mut self, value: &Value, depth: usize) {
        if depth > self.options.depth_ceiling {
            self.report.truncated += 1;
            tracing::trace!(depth, "depth ceiling reached; subtree skipped");
            return;
        }
        self.report.enter(depth);

        match value.shape() {
            Shape::Keyed(object) => {
                for (key, child) in object.entries().iter() {
                    self.render_entry(key, child, depth);
                }
            }
            Shape::Sequence(array) => {
                for (index, child) in array.items().iter().enumerate() {
                    self.render_entry(&index.to_string(), child, depth);
                }
            }
            Shape::Scalar(_) | Shape::Callable(_) | Shape::Other(_) => {}
        }
    }

    fn render_entry(&mut self, key: &str, child: &Value, depth: usize) {
        let indent = self.options.indent(depth);

        match child.shape() {
            Shape::Keyed(_) => {
                self.emit(&format!("{indent}{key}: {{"));
                self.render_structure(child, depth + 1);
                self.emit(&format!("{indent}}}"));
            }
            Shape::Sequence(array) => {
                self.emit(&format!("{indent}{key}: ["));
                for element in array.items().iter() {
                    match element {
                        Value::String(s) => {
                            let line = format!("{indent}{}{s}", self.options.indent_unit);
                            self.emit(&line);
                        }
                        _ => self.render_structure(element, depth + 1),
                    }
                }
                self.emit(&format!("{indent}]"));
            }
            Shape::Callable(_) => self.emit(&format!("{indent}{key}: function")),
            Shape::Scalar(v) | Shape::Other(v) => self.emit(&format!("{indent}{key}:{v}")),
        }
    }
}
