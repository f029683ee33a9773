//! Default string conversion of host values.
//!
//! This is the text a value turns into when it is interpolated into a
//! string by the scripting host:
//! - numbers use the shortest round-trip decimal, with exponent form outside
//!   `[1e-6, 1e21)`
//! - objects are opaque (`[object Object]`)
//! - arrays join their elements with `,`; nullish elements become empty and
//!   an array that is already being joined (a cycle) contributes nothing

use std::fmt;

use crate::model::{Function, Value};

/// Render a host number.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers negative zero.
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }

    format!("{n}")
}

/// Render a function the way the host prints native functions.
pub fn function_to_string(f: &Function) -> String {
    match f.name() {
        Some(name) => format!("function {name}() {{ [native code] }}"),
        None => "function () { [native code] }".to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut joining = Vec::new();
        write_value(f, self, &mut joining)
    }
}

fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    joining: &mut Vec<*const ()>,
) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&number_to_string(*n)),
        Value::String(s) => f.write_str(s),
        Value::Symbol(desc) => write!(f, "Symbol({})", desc.as_deref().unwrap_or("")),
        Value::Function(func) => f.write_str(&function_to_string(func)),
        Value::Object(_) => f.write_str("[object Object]"),
        Value::Array(array) => {
            let addr = array.addr();
            if joining.contains(&addr) {
                return Ok(());
            }
            joining.push(addr);
            let items = array.items();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                if !item.is_nullish() {
                    write_value(f, item, joining)?;
                }
            }
            joining.pop();
            Ok(())
        }
    }
}
