//! Named-attribute projection.
//!
//! [`Attributes`] exposes the fields of a value by name as `&dyn Any`, which
//! lets [`LazySequence::attributes`](super::LazySequence::attributes) project
//! each element to one of its fields and check the field's type at runtime.
//! Implement it by hand, or derive it with `#[derive(Attributes)]` (feature
//! `derive`).

use std::any::{Any, type_name};

use crate::error::{SequenceError, SequenceResult};

/// Access to a value's fields by name.
///
/// Tuple-struct fields are named by position: `"0"`, `"1"`, ...
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use funcflow::sequence::Attributes;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Attributes for Point {
///     fn attribute(&self, name: &str) -> Option<&dyn Any> {
///         match name {
///             "x" => Some(&self.x),
///             "y" => Some(&self.y),
///             _ => None,
///         }
///     }
/// }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.attribute("y").and_then(|y| y.downcast_ref::<i32>()), Some(&2));
/// assert!(point.attribute("z").is_none());
/// ```
pub trait Attributes {
    /// Returns the field called `name`, or `None` if there is no such field.
    fn attribute(&self, name: &str) -> Option<&dyn Any>;
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attribute(&self, name: &str) -> Option<&dyn Any> {
        (**self).attribute(name)
    }
}

impl<T: Attributes + ?Sized> Attributes for Box<T> {
    fn attribute(&self, name: &str) -> Option<&dyn Any> {
        (**self).attribute(name)
    }
}

/// Clones the attribute `name` of `element` out as a `V`.
pub(crate) fn project_attribute<T, V>(element: &T, name: &str) -> SequenceResult<V>
where
    T: Attributes + ?Sized,
    V: Clone + 'static,
{
    let value = element
        .attribute(name)
        .ok_or_else(|| SequenceError::AttributeMissing {
            name: name.to_owned(),
        })?;
    value
        .downcast_ref::<V>()
        .cloned()
        .ok_or_else(|| SequenceError::type_mismatch(type_name::<V>(), format!("attribute `{name}`")))
}
