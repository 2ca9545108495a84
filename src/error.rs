//! Error types for constguard.
//!
//! All errors are strongly typed using thiserror. Every failure is a
//! programmer-error signal raised synchronously to the immediate caller;
//! the library performs no internal recovery, retry, or logging.

use thiserror::Error;

use crate::value::TypeTag;

/// Validation errors raised by constructor preconditions.
///
/// No wrapper is produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input to an immutable view was not an object or array.
    #[error("expected a non-null object or array, got {actual}")]
    NotComposite {
        /// Runtime type of the rejected input.
        actual: TypeTag,
    },

    /// The input to the array-only constructor was not an array.
    #[error("expected an array, got {actual}")]
    NotArray {
        /// Runtime type of the rejected input.
        actual: TypeTag,
    },

    /// A string type descriptor did not name a supported type.
    #[error("unknown type tag: {tag:?}")]
    UnknownTypeTag {
        /// The unrecognized descriptor text.
        tag: String,
    },

    /// An indexed write addressed a slot past the end of the array.
    #[error("index {index} is out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Array length at the time of the write.
        len: usize,
    },
}

/// The mutation path an immutable view rejected.
///
/// Names follow the interception points: plain writes, deletes, property
/// redefinition, and prototype replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Assignment to a property or index, including structural array
    /// writes such as push and length changes.
    Write,
    /// Removal of a property or element.
    Delete,
    /// Redefinition of an existing property.
    DefineProperty,
    /// Replacement of the prototype.
    SetPrototype,
}

impl MutationKind {
    /// Returns the trap name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Delete => "delete",
            Self::DefineProperty => "defineProperty",
            Self::SetPrototype => "setPrototypeOf",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level error type for constguard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardError {
    /// Constructor precondition violated; no wrapper was produced.
    #[error("invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// A mutation was attempted through an immutable view. The underlying
    /// value is guaranteed unchanged.
    #[error("immutable violation: cannot {kind} through an immutable view")]
    ImmutableViolation {
        /// The rejected mutation path.
        kind: MutationKind,
    },

    /// A write into a homogeneous container carried a value of the wrong
    /// runtime type. The container is guaranteed unchanged.
    #[error("type mismatch: container is declared {expected}, value is {actual}")]
    TypeMismatch {
        /// The container's declared tag.
        expected: TypeTag,
        /// Runtime type of the rejected value.
        actual: TypeTag,
    },
}

impl GuardError {
    /// Returns true if this is a constructor-precondition error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a rejected mutation on an immutable view.
    #[must_use]
    pub const fn is_immutable_violation(&self) -> bool {
        matches!(self, Self::ImmutableViolation { .. })
    }

    /// Returns true if this is a homogeneity violation.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns the rejected mutation path, if this is an immutable violation.
    #[must_use]
    pub const fn violation_kind(&self) -> Option<MutationKind> {
        match self {
            Self::ImmutableViolation { kind } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for constguard operations.
pub type GuardResult<T> = Result<T, GuardError>;
