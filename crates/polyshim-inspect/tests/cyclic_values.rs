use polyshim_inspect::{DEFAULT_DEPTH_CEILING, InspectOptions, inspect, inspect_with_options};
use polyshim_value::{Array, Object, Value};

fn self_referential_object() -> Value {
    let root = Object::new();
    root.insert("name", "root");
    root.insert("self", root.clone());
    Value::Object(root)
}

fn opening_depths(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .filter(|l| l.ends_with(": {"))
        .map(|l| (l.len() - l.trim_start().len()) / 2)
        .collect()
}

#[test]
fn cyclic_object_terminates_at_the_ceiling() {
    let value = self_referential_object();

    let mut out: Vec<String> = Vec::new();
    let report = inspect_with_options(&value, &mut out, &InspectOptions::default());

    let depths = opening_depths(&out);
    assert_eq!(depths, (1..=DEFAULT_DEPTH_CEILING).collect::<Vec<_>>());
    // "{", "}" plus name/header/footer per level.
    assert_eq!(out.len(), 2 + 3 * DEFAULT_DEPTH_CEILING);
    assert_eq!(report.max_depth, DEFAULT_DEPTH_CEILING);
    assert_eq!(report.truncated, 1);
}

#[test]
fn cyclic_object_innermost_level_is_closed() {
    let value = self_referential_object();

    let mut out: Vec<String> = Vec::new();
    inspect(&value, &mut out);

    let deepest = "  ".repeat(DEFAULT_DEPTH_CEILING);
    let header = format!("{deepest}self: {{");
    let at = out
        .iter()
        .position(|l| *l == header)
        .expect("deepest header present");

    // Closing braces unwind from the ceiling back to the top.
    let closings: Vec<String> = (1..=DEFAULT_DEPTH_CEILING)
        .rev()
        .map(|d| format!("{}}}", "  ".repeat(d)))
        .chain(std::iter::once("}".to_string()))
        .collect();
    assert_eq!(out[at + 1..].to_vec(), closings);
}

#[test]
fn cyclic_sequence_terminates() {
    let list = Array::new();
    list.push("x");
    list.push(list.clone());
    let root: Object = vec![("list", Value::Array(list))].into_iter().collect();

    let mut out: Vec<String> = Vec::new();
    let report = inspect_with_options(&Value::Object(root), &mut out, &InspectOptions::default());

    assert_eq!(out.first().map(String::as_str), Some("{"));
    assert_eq!(out.last().map(String::as_str), Some("}"));
    assert_eq!(out[1], "  list: [");
    assert_eq!(out[2], "    x");
    assert_eq!(out[3], "    0:x");
    assert_eq!(out[4], "    1: [");
    assert!(report.is_truncated());
}

#[test]
fn mutual_cycle_is_rendered_redundantly_below_the_ceiling() {
    let a = Object::new();
    let b = Object::new();
    a.insert("b", b.clone());
    b.insert("a", a.clone());

    let opts = InspectOptions {
        depth_ceiling: 3,
        ..InspectOptions::default()
    };
    let mut out: Vec<String> = Vec::new();
    inspect_with_options(&Value::Object(a), &mut out, &opts);

    assert_eq!(
        out,
        vec![
            "{",
            "  b: {",
            "    a: {",
            "      b: {",
            "      }",
            "    }",
            "  }",
            "}",
        ]
    );
}
