//! Immutable views over composite values.
//!
//! An [`ImmutableView`] is the interception layer: every mutation path
//! (write, delete, property redefinition, prototype replacement) is
//! rejected, and reads of nested composites hand back a fresh borrowed
//! view so immutability propagates lazily through the whole reachable
//! graph. One policy covers objects and arrays; array-specific mutations
//! (push, length changes) are writes and are rejected identically.
//!
//! The top-level view takes ownership of its value. That is the Rust
//! rendition of the single-handle rule: once wrapped, no other reference
//! to the underlying composite exists, so rejected mutations cannot be
//! bypassed through a retained alias.

use crate::error::{GuardError, GuardResult, MutationKind, ValidationError};
use crate::value::{TypeTag, Value};

/// Access key for the shared object/array interception policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Named property of an object.
    Name(String),
    /// Positional element of an array.
    Index(usize),
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Self::Name(v)
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Self::Index(v)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// The result of reading through an immutable view.
///
/// Primitive values come back as plain borrows; composite values come back
/// re-wrapped, so the rejection policy follows every read path.
#[derive(Debug)]
pub enum Entry<'a> {
    /// A primitive leaf, returned verbatim.
    Leaf(&'a Value),
    /// A nested composite, wrapped under the same policy.
    View(ImmutableView<'a>),
}

impl<'a> Entry<'a> {
    /// Extracts the primitive leaf, if this entry is one.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&'a Value> {
        match self {
            Self::Leaf(v) => Some(*v),
            Self::View(_) => None,
        }
    }

    /// Borrows the nested view, if this entry is one.
    #[must_use]
    pub const fn as_view(&self) -> Option<&ImmutableView<'a>> {
        match self {
            Self::View(view) => Some(view),
            Self::Leaf(_) => None,
        }
    }

    /// Consumes the entry into the nested view, if it is one.
    #[must_use]
    pub fn into_view(self) -> Option<ImmutableView<'a>> {
        match self {
            Self::View(view) => Some(view),
            Self::Leaf(_) => None,
        }
    }
}

/// What a view wraps: the root owns its value, nested views borrow from
/// the view they were read through.
#[derive(Debug)]
enum Target<'a> {
    Owned(Value),
    Nested(&'a Value),
}

/// An immutable view over an object or array.
///
/// Construction validates the input shape; afterwards every mutation
/// attempt fails with [`GuardError::ImmutableViolation`] and the wrapped
/// value is guaranteed untouched.
///
/// # Examples
///
/// ```
/// use constguard::{ImmutableView, MutationKind, Value};
///
/// let json = serde_json::json!({"name": "John"});
/// let view = ImmutableView::new(Value::from(json)).unwrap();
///
/// let err = view.set("name", Value::from("Jane")).unwrap_err();
/// assert_eq!(err.violation_kind(), Some(MutationKind::Write));
///
/// let name = view.get("name").unwrap();
/// assert_eq!(name.as_leaf(), Some(&Value::from("John")));
/// ```
#[derive(Debug)]
pub struct ImmutableView<'a> {
    target: Target<'a>,
}

impl ImmutableView<'static> {
    /// Wraps a composite value in an immutable view.
    ///
    /// # Errors
    /// `ValidationError::NotComposite` if `value` is not an object or array.
    pub fn new(value: Value) -> GuardResult<Self> {
        if !value.is_composite() {
            return Err(ValidationError::NotComposite {
                actual: value.type_tag(),
            }
            .into());
        }
        Ok(Self {
            target: Target::Owned(value),
        })
    }

    /// Wraps an array in an immutable view.
    ///
    /// Same interception policy as [`ImmutableView::new`]; only the input
    /// validation is narrower.
    ///
    /// # Errors
    /// `ValidationError::NotArray` if `value` is not an array.
    pub fn new_array(value: Value) -> GuardResult<Self> {
        if !value.is_array() {
            return Err(ValidationError::NotArray {
                actual: value.type_tag(),
            }
            .into());
        }
        Ok(Self {
            target: Target::Owned(value),
        })
    }
}

impl ImmutableView<'_> {
    fn value(&self) -> &Value {
        match &self.target {
            Target::Owned(v) => v,
            Target::Nested(v) => v,
        }
    }

    /// Reads the value at `key`.
    ///
    /// Primitives are returned verbatim as [`Entry::Leaf`]. Composites are
    /// returned as [`Entry::View`] — a fresh view per read, never cached,
    /// recursing to any depth. On arrays, a numeric property name resolves
    /// like an index. Returns `None` for absent keys and for keys of the
    /// wrong shape for the wrapped composite.
    #[must_use]
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<Entry<'_>> {
        let value = match (self.value(), key.into()) {
            (Value::Object(map), Key::Name(name)) => map.get(&name)?,
            (Value::Array(items), Key::Index(index)) => items.get(index)?,
            (Value::Array(items), Key::Name(name)) => {
                let index: usize = name.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
        if value.is_composite() {
            Some(Entry::View(ImmutableView {
                target: Target::Nested(value),
            }))
        } else {
            Some(Entry::Leaf(value))
        }
    }

    /// Rejects an assignment to a property or index.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with [`MutationKind::Write`].
    pub fn set<K: Into<Key>>(&self, _key: K, _value: Value) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::Write,
        })
    }

    /// Rejects removal of a property or element.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with [`MutationKind::Delete`].
    pub fn delete<K: Into<Key>>(&self, _key: K) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::Delete,
        })
    }

    /// Rejects redefinition of a property.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with
    /// [`MutationKind::DefineProperty`].
    pub fn define_property<K: Into<Key>>(&self, _key: K, _value: Value) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::DefineProperty,
        })
    }

    /// Rejects replacement of the prototype.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with
    /// [`MutationKind::SetPrototype`].
    pub fn set_prototype(&self, _proto: Value) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::SetPrototype,
        })
    }

    /// Rejects appending to an array. Structural writes share the plain
    /// write rejection.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with [`MutationKind::Write`].
    pub fn push(&self, _value: Value) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::Write,
        })
    }

    /// Rejects resizing an array.
    ///
    /// # Errors
    /// Always `GuardError::ImmutableViolation` with [`MutationKind::Write`].
    pub fn set_len(&self, _len: usize) -> GuardResult<()> {
        Err(GuardError::ImmutableViolation {
            kind: MutationKind::Write,
        })
    }

    /// Number of own properties (object) or elements (array).
    #[must_use]
    pub fn len(&self) -> usize {
        match self.value() {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            // Construction guarantees a composite.
            _ => 0,
        }
    }

    /// Returns true if the wrapped composite has no properties/elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a read of `key` would find a value.
    #[must_use]
    pub fn contains<K: Into<Key>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Runtime type of the wrapped composite: `Object` or `Array`.
    #[must_use]
    pub fn kind(&self) -> TypeTag {
        self.value().type_tag()
    }
}
