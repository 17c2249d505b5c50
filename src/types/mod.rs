//! Type reference model.
//!
//! [`TypeRef`] is the only type representation in the graph. Variadic
//! parameters are encoded with [`Repeated`] instead of a dedicated variant.

mod type_ref;

pub use type_ref::{Repeated, TypeRef};
