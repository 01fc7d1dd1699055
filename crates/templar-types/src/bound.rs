//! Shape classification of template bounds

use crate::ty::Type;

/// The shape of a template bound, as far as bound validation cares.
///
/// Every [`Type`] maps onto exactly one variant; adding a variant here
/// forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind<'a> {
    /// Unconstrained (`mixed`)
    Mixed,
    /// Any object (`object`)
    ObjectWithoutClass,
    /// Exactly one named class
    Object(&'a str),
    /// Any other shape: scalars, arrays, unions, intersections, ...
    Other,
}

impl BoundKind<'_> {
    /// Whether a template parameter may use a bound of this shape
    pub fn is_supported(&self) -> bool {
        match self {
            BoundKind::Mixed | BoundKind::ObjectWithoutClass | BoundKind::Object(_) => true,
            BoundKind::Other => false,
        }
    }
}

impl Type {
    /// Classify this type as a template bound
    pub fn bound_kind(&self) -> BoundKind<'_> {
        match self {
            Type::Mixed => BoundKind::Mixed,
            Type::ObjectWithoutClass => BoundKind::ObjectWithoutClass,
            Type::Object(o) => BoundKind::Object(&o.class_name),
            Type::Scalar(_)
            | Type::Array(_)
            | Type::ClassString(_)
            | Type::Union(_)
            | Type::Intersection(_) => BoundKind::Other,
        }
    }
}
