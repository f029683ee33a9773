//! Closed classification of values for rendering.

use crate::model::{Array, Function, Object, Value};

/// How a value is treated by structure-aware renderers.
///
/// Computed once per visit so renderers can match exhaustively.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// Undefined, null, booleans, numbers and strings.
    Scalar(&'a Value),
    Callable(&'a Function),
    Sequence(&'a Array),
    Keyed(&'a Object),
    /// Anything else; rendered through its default string conversion.
    Other(&'a Value),
}

impl Value {
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => Shape::Scalar(self),
            Value::Function(f) => Shape::Callable(f),
            Value::Array(a) => Shape::Sequence(a),
            Value::Object(o) => Shape::Keyed(o),
            Value::Symbol(_) => Shape::Other(self),
        }
    }
}

impl Shape<'_> {
    /// Sequences and keyed structures.
    pub fn is_structure(&self) -> bool {
        matches!(self, Shape::Sequence(_) | Shape::Keyed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Scalar(_) => "scalar",
            Shape::Callable(_) => "callable",
            Shape::Sequence(_) => "sequence",
            Shape::Keyed(_) => "keyed",
            Shape::Other(_) => "other",
        }
    }
}
