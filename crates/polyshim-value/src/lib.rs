#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the polyshim project.

Do NOT depend on this crate directly.
Use `polyshim-io` instead.
"#]

pub mod model;
pub mod shape;
pub mod convert;
pub mod json;

pub use model::{Array, Function, Object, Value};
pub use shape::Shape;
pub use json::ValueError;
