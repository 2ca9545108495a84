//! Homogeneous containers: type-checked writes, unrestricted reads.
//!
//! [`HomogeneousObject`] and [`HomogeneousArray`] start empty and carry a
//! [`TypeTag`] fixed at construction. Every write validates the incoming
//! value's runtime type against the tag before touching the container, so
//! a rejected write provably leaves prior contents intact. The guarantee
//! is deliberately narrower than [`crate::ImmutableView`]: reads return
//! stored values verbatim, removal is not intercepted, and nested
//! composites are not checked beyond their own top-level type.

use std::collections::BTreeMap;

use crate::error::{GuardError, GuardResult, ValidationError};
use crate::value::{TypeTag, Value};

/// A mapping whose property values all share one declared runtime type.
///
/// # Examples
///
/// ```
/// use constguard::{HomogeneousObject, TypeTag, Value};
///
/// let mut obj = HomogeneousObject::new(TypeTag::String);
/// assert!(obj.set("name", Value::from("John")).is_ok());
/// assert!(obj.set("age", Value::Int(30)).is_err());
/// assert_eq!(obj.get("name"), Some(&Value::from("John")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneousObject {
    tag: TypeTag,
    entries: BTreeMap<String, Value>,
}

impl HomogeneousObject {
    /// Creates an empty container accepting only values of `tag`.
    #[must_use]
    pub const fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            entries: BTreeMap::new(),
        }
    }

    /// The declared element type, fixed for the container's lifetime.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Writes `value` under `key` after checking its runtime type.
    ///
    /// # Errors
    /// `GuardError::TypeMismatch` when the value's type differs from the
    /// declared tag; the container is left unmodified.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> GuardResult<()> {
        check_tag(self.tag, &value)?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    /// Reads the stored value verbatim; no wrapping, no re-validation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Removes a property. Deletion is not intercepted; this behaves as
    /// the plain mapping would.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns true if `key` has a stored value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no properties are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over stored property names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over stored `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A sequence whose elements all share one declared runtime type.
///
/// Length changes are the documented exemption from the type check:
/// [`HomogeneousArray::resize`] never validates, shrinking truncates and
/// growing pads with `Value::Null`.
///
/// # Examples
///
/// ```
/// use constguard::{HomogeneousArray, TypeTag, Value};
///
/// let mut arr = HomogeneousArray::new(TypeTag::Int);
/// assert!(arr.push(Value::Int(1)).is_ok());
/// assert!(arr.push(Value::from("nope")).is_err());
/// assert_eq!(arr.get(0), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneousArray {
    tag: TypeTag,
    items: Vec<Value>,
}

impl HomogeneousArray {
    /// Creates an empty sequence accepting only elements of `tag`.
    #[must_use]
    pub const fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            items: Vec::new(),
        }
    }

    /// The declared element type, fixed for the container's lifetime.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Appends `value` after checking its runtime type.
    ///
    /// # Errors
    /// `GuardError::TypeMismatch` when the value's type differs from the
    /// declared tag; the sequence is left unmodified.
    pub fn push(&mut self, value: Value) -> GuardResult<()> {
        check_tag(self.tag, &value)?;
        self.items.push(value);
        Ok(())
    }

    /// Writes `value` at `index` after checking its runtime type.
    ///
    /// `index == len` appends. Sparse writes past the end are not
    /// representable here; they fail instead of creating holes.
    ///
    /// # Errors
    /// `GuardError::TypeMismatch` on a type violation,
    /// `ValidationError::IndexOutOfBounds` when `index > len`. Either way
    /// the sequence is left unmodified.
    pub fn set(&mut self, index: usize, value: Value) -> GuardResult<()> {
        check_tag(self.tag, &value)?;
        match index.cmp(&self.items.len()) {
            std::cmp::Ordering::Less => {
                self.items[index] = value;
                Ok(())
            }
            std::cmp::Ordering::Equal => {
                self.items.push(value);
                Ok(())
            }
            std::cmp::Ordering::Greater => Err(ValidationError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }
            .into()),
        }
    }

    /// Resizes the sequence without any type check.
    ///
    /// This is the length exemption: shrinking truncates, growing pads
    /// with `Value::Null` regardless of the declared tag.
    pub fn resize(&mut self, new_len: usize) {
        self.items.resize(new_len, Value::Null);
    }

    /// Removes and returns the last element. Removal is not intercepted.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Reads the stored element verbatim; no wrapping, no re-validation.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no elements are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over stored elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

fn check_tag(expected: TypeTag, value: &Value) -> GuardResult<()> {
    let actual = value.type_tag();
    if actual == expected {
        Ok(())
    } else {
        Err(GuardError::TypeMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_accepts_declared_type() {
        let mut obj = HomogeneousObject::new(TypeTag::String);
        obj.set("name", Value::from("John")).unwrap();
        obj.set("city", Value::from("Oslo")).unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("John")));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.tag(), TypeTag::String);
    }

    #[test]
    fn test_object_rejects_other_types_unchanged() {
        let mut obj = HomogeneousObject::new(TypeTag::String);
        obj.set("name", Value::from("John")).unwrap();

        let err = obj.set("name", Value::Int(123)).unwrap_err();
        assert_eq!(
            err,
            GuardError::TypeMismatch {
                expected: TypeTag::String,
                actual: TypeTag::Int,
            }
        );
        // Prior contents intact, including the slot the write targeted.
        assert_eq!(obj.get("name"), Some(&Value::from("John")));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_object_overwrite_same_type() {
        let mut obj = HomogeneousObject::new(TypeTag::String);
        obj.set("name", Value::from("John")).unwrap();
        obj.set("name", Value::from("Jane")).unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("Jane")));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_object_removal_not_intercepted() {
        let mut obj = HomogeneousObject::new(TypeTag::Int);
        obj.set("a", Value::Int(1)).unwrap();
        assert_eq!(obj.remove("a"), Some(Value::Int(1)));
        assert!(obj.is_empty());
        assert_eq!(obj.remove("a"), None);
    }

    #[test]
    fn test_object_composite_elements_checked_shallowly() {
        let mut obj = HomogeneousObject::new(TypeTag::Object);
        // Heterogeneous contents are fine; only the top-level type counts.
        obj.set("mixed", Value::from(serde_json::json!({"a": 1, "b": "two"})))
            .unwrap();
        assert!(obj.set("nope", Value::Int(1)).is_err());
    }

    #[test]
    fn test_array_accepts_declared_type() {
        let mut arr = HomogeneousArray::new(TypeTag::Int);
        arr.push(Value::Int(1)).unwrap();
        arr.push(Value::Int(2)).unwrap();
        assert_eq!(arr.get(0), Some(&Value::Int(1)));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.iter().count(), 2);
    }

    #[test]
    fn test_array_rejects_other_types_unchanged() {
        let mut arr = HomogeneousArray::new(TypeTag::Int);
        arr.push(Value::Int(1)).unwrap();

        let err = arr.push(Value::from("string")).unwrap_err();
        assert_eq!(
            err,
            GuardError::TypeMismatch {
                expected: TypeTag::Int,
                actual: TypeTag::String,
            }
        );
        assert_eq!(arr.len(), 1);

        let err = arr.set(0, Value::Bool(true)).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(arr.get(0), Some(&Value::Int(1)));
    }

    #[test]
    fn test_array_set_appends_at_len() {
        let mut arr = HomogeneousArray::new(TypeTag::Int);
        arr.set(0, Value::Int(10)).unwrap();
        arr.set(1, Value::Int(20)).unwrap();
        arr.set(0, Value::Int(11)).unwrap();
        assert_eq!(arr.get(0), Some(&Value::Int(11)));
        assert_eq!(arr.get(1), Some(&Value::Int(20)));
    }

    #[test]
    fn test_array_set_past_end_fails_unchanged() {
        let mut arr = HomogeneousArray::new(TypeTag::Int);
        arr.push(Value::Int(1)).unwrap();

        let err = arr.set(5, Value::Int(2)).unwrap_err();
        assert_eq!(
            err,
            GuardError::Validation(ValidationError::IndexOutOfBounds { index: 5, len: 1 })
        );
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn test_array_resize_exempt_from_type_check() {
        let mut arr = HomogeneousArray::new(TypeTag::Int);
        arr.push(Value::Int(1)).unwrap();
        arr.push(Value::Int(2)).unwrap();

        arr.resize(1);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.get(0), Some(&Value::Int(1)));

        // Growing pads with nulls despite the int tag.
        arr.resize(3);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(2), Some(&Value::Null));
    }

    #[test]
    fn test_array_pop_not_intercepted() {
        let mut arr = HomogeneousArray::new(TypeTag::Float);
        arr.push(Value::Float(0.5)).unwrap();
        assert_eq!(arr.pop(), Some(Value::Float(0.5)));
        assert_eq!(arr.pop(), None);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_tag_from_string_descriptor() {
        let tag: TypeTag = "float".parse().unwrap();
        let arr = HomogeneousArray::new(tag);
        assert_eq!(arr.tag(), TypeTag::Float);

        let err = "complex".parse::<TypeTag>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTypeTag {
                tag: "complex".to_string()
            }
        );
    }
}
