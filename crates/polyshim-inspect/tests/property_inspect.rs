use proptest::prelude::*;

use polyshim_inspect::{InspectOptions, inspect_with_options};
use polyshim_value::{Function, Object, Value};

fn host_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        Just(Value::Function(Function::anonymous())),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

fn render(value: &Value, opts: &InspectOptions) -> (Vec<String>, usize) {
    let mut out: Vec<String> = Vec::new();
    let report = inspect_with_options(value, &mut out, opts);
    (out, report.lines)
}

proptest! {
    #[test]
    fn rendering_is_repeatable(value in host_value()) {
        let opts = InspectOptions::default();
        let (a, _) = render(&value, &opts);
        let (b, _) = render(&value, &opts);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn report_counts_every_line(value in host_value(), ceiling in 0usize..6) {
        let opts = InspectOptions { depth_ceiling: ceiling, ..InspectOptions::default() };
        let (out, lines) = render(&value, &opts);
        prop_assert_eq!(out.len(), lines);
    }

    #[test]
    fn indentation_never_exceeds_the_ceiling(value in host_value(), ceiling in 0usize..6) {
        let opts = InspectOptions { depth_ceiling: ceiling, ..InspectOptions::default() };
        let (out, _) = render(&value, &opts);

        if value.shape().is_structure() {
            prop_assert_eq!(out.first().map(String::as_str), Some("{"));
            prop_assert_eq!(out.last().map(String::as_str), Some("}"));
            for line in &out {
                let lead = line.len() - line.trim_start_matches(' ').len();
                prop_assert_eq!(lead % 2, 0);
                // String elements sit one unit past their sequence header.
                prop_assert!(lead / 2 <= ceiling + 1, "line {:?} too deep", line);
            }
        } else {
            prop_assert_eq!(out.len(), 1);
        }
    }
}
