//! # constguard - Runtime guards for dynamic composite values
//!
//! constguard provides defensive wrappers for callers who need guarantees
//! against accidental mutation or type drift at runtime, without a static
//! type system backing the values they hold.
//!
//! ## Core Concepts
//!
//! - **Value**: A dynamic value, either a primitive leaf or a composite
//!   (object or array)
//! - **ImmutableView**: Rejects every mutation path and re-wraps nested
//!   composites lazily on read, so immutability follows the whole graph
//! - **HomogeneousObject / HomogeneousArray**: Check each written value's
//!   runtime type against a tag declared at construction
//! - **structural_equals**: Deep structural equality over arbitrary values
//!
//! ## Usage
//!
//! ```rust
//! use constguard::{structural_equals, ImmutableView, HomogeneousArray, TypeTag, Value};
//!
//! let view = ImmutableView::new(Value::from(serde_json::json!({"name": "John"})))?;
//! assert!(view.set("name", Value::from("Jane")).is_err());
//!
//! let mut scores = HomogeneousArray::new(TypeTag::Int);
//! scores.push(Value::Int(1))?;
//! assert!(scores.push(Value::from("two")).is_err());
//!
//! let a = Value::from(serde_json::json!([1, 2, 3]));
//! let b = Value::from(serde_json::json!([3, 2, 1]));
//! assert!(!structural_equals(&a, &b));
//! # Ok::<(), constguard::GuardError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod equality;
pub mod error;
pub mod homogeneous;
pub mod immutable;
pub mod value;

// Re-export primary types at crate root for convenience
pub use equality::structural_equals;
pub use error::{GuardError, GuardResult, MutationKind, ValidationError};
pub use homogeneous::{HomogeneousArray, HomogeneousObject};
pub use immutable::{Entry, ImmutableView, Key};
pub use value::{TypeTag, Value};
