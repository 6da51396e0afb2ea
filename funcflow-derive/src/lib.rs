//! Derive macro for funcflow named-attribute projection.
//!
//! # Available Derive Macros
//!
//! - [`Attributes`]: Exposes a struct's fields by name for
//!   `LazySequence::attributes`
//!
//! # Example
//!
//! ```rust,ignore
//! use funcflow::sequence::{Attributes, lazy};
//!
//! #[derive(Attributes)]
//! struct Complex {
//!     real: f64,
//!     imag: f64,
//! }
//!
//! let numbers = vec![Complex { real: 1.0, imag: 2.0 }];
//! let real = lazy(numbers).attributes::<f64>("real").try_to_list();
//! assert_eq!(real, Ok(vec![1.0]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod attributes;

use proc_macro::TokenStream;

/// Derive macro implementing `funcflow::sequence::Attributes`.
///
/// Every field is exposed under its name; tuple-struct fields under their
/// position (`"0"`, `"1"`, ...). Unknown names return `None`.
///
/// # Requirements
///
/// - The type must be a struct (named, tuple or unit)
/// - Every field type must be `'static`, since fields are returned as
///   `&dyn Any`
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Attributes for Complex {
///     fn attribute(&self, name: &str) -> Option<&dyn Any> {
///         match name {
///             "real" => Some(&self.real),
///             "imag" => Some(&self.imag),
///             _ => None,
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Attributes)]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    attributes::derive_attributes_impl(input)
}
