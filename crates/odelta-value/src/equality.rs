//! Deep structural equality and an equality-consistent hash.
//!
//! Objects compare by key set and per-key value, independent of field order.
//! Arrays compare by position. Numbers compare by mathematical value: two
//! floats compare in `f64`, anything involving an integer compares exactly,
//! so `Eq` stays transitive past 2^53. Hashing goes through the canonical
//! text from [`crate::digest`], so equal values always hash equal.

use std::hash::{Hash, Hasher};

use serde_json::Number;

use crate::value::{Object, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // IndexMap equality ignores insertion order.
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.canonical_string().as_bytes());
    }
}

/// Numeric equality across the integer/float split.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (as_integer(a), as_integer(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(i), None) => float_equals_integer(b.as_f64(), i),
        (None, Some(i)) => float_equals_integer(a.as_f64(), i),
        (None, None) => a.as_f64() == b.as_f64(),
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

// Exact: 2^53 + 1 must not equal the float 2^53.
fn float_equals_integer(f: Option<f64>, i: i128) -> bool {
    match f {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 2f64.powi(127) => {
            f as i128 == i
        }
        _ => false,
    }
}

/// Equality over possibly-absent values. Absent equals only absent; an
/// explicit null is a present value.
pub fn deep_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// [`deep_equal`] for top-level objects.
pub fn objects_equal(a: Option<&Object>, b: Option<&Object>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(v: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    fn reversed(v: &Value) -> Value {
        match v {
            Value::Array(items) => Value::Array(items.iter().map(reversed).collect()),
            Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .rev()
                    .map(|(k, v)| (k.clone(), reversed(v)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            (-1.0e6f64..1.0e6).prop_map(|f| Value::try_from(f).unwrap()),
            "[a-z]{0,6}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-e]", inner), 0..4)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
            ]
        })
    }

    #[test]
    fn object_equality_ignores_field_order() {
        let a = Value::from_json_str(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
        let b = Value::from_json_str(r#"{"b": [1, 2], "a": 1}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn array_equality_is_positional() {
        assert_ne!(Value::from(json!([1, 2])), Value::from(json!([2, 1])));
        assert_ne!(Value::from(json!([1])), Value::from(json!([1, null])));
    }

    #[test]
    fn integer_and_integral_float_are_equal() {
        let a = Value::from(json!(3));
        let b = Value::from(json!(3.0));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(Value::from(json!(3)), Value::from(json!(3.5)));
    }

    #[test]
    fn large_integers_compare_exactly_against_floats() {
        let above = Value::from(json!(9_007_199_254_740_993u64));
        let float = Value::from(json!(9_007_199_254_740_992.0));
        let exact = Value::from(json!(9_007_199_254_740_992u64));
        assert_ne!(above, float);
        assert_eq!(float, exact);
        assert_ne!(above, exact);
        assert_eq!(hash_of(&float), hash_of(&exact));
        assert_eq!(Value::from(json!(-0.0)), Value::from(json!(0)));
    }

    #[test]
    fn large_unsigned_does_not_match_negative() {
        assert_ne!(Value::from(json!(u64::MAX)), Value::from(json!(-1)));
        assert_eq!(Value::from(json!(u64::MAX)), Value::from(json!(u64::MAX)));
    }

    #[test]
    fn null_is_not_absent() {
        let null = Value::Null;
        assert!(!deep_equal(Some(&null), None));
        assert!(deep_equal(None, None));
        assert!(deep_equal(Some(&null), Some(&Value::Null)));
    }

    #[test]
    fn variants_never_cross_compare() {
        assert_ne!(Value::from("1"), Value::from(1i64));
        assert_ne!(Value::Null, Value::from(false));
        assert_ne!(Value::from(json!([])), Value::from(json!({})));
    }

    #[test]
    fn usable_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Value::from(json!({"x": 1, "y": 2})));
        assert!(set.contains(&Value::from(json!({"y": 2, "x": 1}))));
        assert!(!set.contains(&Value::from(json!({"y": 2}))));
    }

    proptest! {
        #[test]
        fn equality_is_reflexive(v in arb_value()) {
            prop_assert_eq!(&v, &v.clone());
        }

        #[test]
        fn reordered_objects_are_equal_and_hash_equal(v in arb_value()) {
            let r = reversed(&v);
            prop_assert_eq!(&v, &r);
            prop_assert_eq!(hash_of(&v), hash_of(&r));
        }
    }
}
