//! Deep structural equality over dynamic values.

use crate::value::Value;

/// Computes deep structural equality between two values.
///
/// Total over all values, never fails. Primitives compare by value;
/// composites compare by own-key set and then pairwise recursion. Arrays
/// are keyed by index, so element order matters and two arrays holding
/// the same multiset of elements in a different order are unequal. A
/// composite and a non-composite are never equal, and two composites of
/// different kinds (object vs array) are never equal.
///
/// `Int` and `Float` are distinct runtime types: `Int(1)` does not equal
/// `Float(1.0)`. Floats follow IEEE semantics, so `Float(f64::NAN)` is
/// not structurally equal to itself. Cyclic values are unrepresentable in
/// an owned [`Value`] tree, so recursion depth is bounded by the tree.
///
/// # Examples
///
/// ```
/// use constguard::{structural_equals, Value};
///
/// let a = Value::from(serde_json::json!({"name": "John", "age": 30}));
/// let b = Value::from(serde_json::json!({"name": "John", "age": 30}));
/// let c = Value::from(serde_json::json!({"name": "Jane", "age": 30}));
///
/// assert!(structural_equals(&a, &b));
/// assert!(!structural_equals(&a, &c));
/// ```
#[must_use]
pub fn structural_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            if left.len() != right.len() {
                return false;
            }
            left.iter().all(|(key, value)| {
                right
                    .get(key)
                    .is_some_and(|other| structural_equals(value, other))
            })
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(x, y)| structural_equals(x, y))
        }
        // A composite never equals a non-composite or a composite of the
        // other kind; primitives compare by value.
        (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => false,
        (left, right) => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_identical_objects_equal() {
        let a = v(serde_json::json!({"name": "John", "age": 30}));
        let b = v(serde_json::json!({"name": "John", "age": 30}));
        assert!(structural_equals(&a, &b));
    }

    #[test]
    fn test_different_values_unequal() {
        let a = v(serde_json::json!({"name": "John", "age": 30}));
        assert!(!structural_equals(
            &a,
            &v(serde_json::json!({"name": "Jane", "age": 30}))
        ));
        assert!(!structural_equals(
            &a,
            &v(serde_json::json!({"name": "John", "age": 31}))
        ));
    }

    #[test]
    fn test_different_key_sets_unequal() {
        let a = v(serde_json::json!({"name": "John", "age": 30}));
        let b = v(serde_json::json!({"name": "John", "city": 30}));
        let c = v(serde_json::json!({"name": "John"}));
        assert!(!structural_equals(&a, &b));
        assert!(!structural_equals(&a, &c));
        assert!(!structural_equals(&c, &a));
    }

    #[test]
    fn test_arrays_are_order_sensitive() {
        let a = v(serde_json::json!([1, 2, 3]));
        assert!(structural_equals(&a, &v(serde_json::json!([1, 2, 3]))));
        assert!(!structural_equals(&a, &v(serde_json::json!([3, 2, 1]))));
        assert!(!structural_equals(&a, &v(serde_json::json!([1, 2]))));
    }

    #[test]
    fn test_nested_structures() {
        let a = v(serde_json::json!({"user": {"name": "John", "tags": ["a", "b"]}}));
        let b = v(serde_json::json!({"user": {"name": "John", "tags": ["a", "b"]}}));
        let c = v(serde_json::json!({"user": {"name": "John", "tags": ["b", "a"]}}));
        assert!(structural_equals(&a, &b));
        assert!(!structural_equals(&a, &c));
    }

    #[test]
    fn test_primitives_compare_by_value() {
        assert!(structural_equals(&Value::Int(1), &Value::Int(1)));
        assert!(structural_equals(&Value::Null, &Value::Null));
        assert!(structural_equals(&Value::from("x"), &Value::from("x")));
        assert!(!structural_equals(&Value::Int(1), &Value::Int(2)));
        assert!(!structural_equals(&Value::Bool(true), &Value::Bool(false)));
    }

    #[test]
    fn test_int_and_float_are_distinct_types() {
        assert!(!structural_equals(&Value::Int(1), &Value::Float(1.0)));
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = Value::Float(f64::NAN);
        assert!(!structural_equals(&nan, &nan));
    }

    #[test]
    fn test_composite_never_equals_primitive() {
        let arr = v(serde_json::json!([1]));
        let obj = v(serde_json::json!({"0": 1}));
        assert!(!structural_equals(&arr, &Value::Int(1)));
        assert!(!structural_equals(&Value::Null, &obj));
        assert!(!structural_equals(&arr, &obj)); // kinds differ
    }

    #[test]
    fn test_empty_composites() {
        assert!(structural_equals(
            &v(serde_json::json!({})),
            &v(serde_json::json!({}))
        ));
        assert!(structural_equals(
            &v(serde_json::json!([])),
            &v(serde_json::json!([]))
        ));
        assert!(!structural_equals(
            &v(serde_json::json!({})),
            &v(serde_json::json!([]))
        ));
    }
}
