//! Templar Type Expressions
//!
//! Type expressions that appear as upper bounds of template parameters,
//! with the traversal and classification the bound checker needs.

#![warn(missing_docs)]

pub mod bound;
pub mod ty;

pub use bound::BoundKind;
pub use ty::{ArrayType, ClassStringType, IntersectionType, ObjectType, ScalarType, Type, UnionType};
