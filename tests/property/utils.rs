use proptest::prelude::*;
use serde_json::{Number, Value};

pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Number(Number::from(i))),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map(any::<String>(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

pub fn call_args() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(json_value(), 0..6)
}

pub fn recognized_function() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("register-property"),
        Just("verify-property"),
        Just("get-property"),
    ]
}
