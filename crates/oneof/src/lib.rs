//! oneof: a closed, statically checked sum type.
//!
//! # Type-lists
//!
//! The set of alternatives is described by a [type-list](mod@crate::tlist): an ordered sequence of
//! types existing only at compile time.
//! ```
//! use oneof::tlist::{index_of, tlist, TypeList};
//!
//! type Alts = tlist![char, i16, i32, i64];
//!
//! assert_eq!(Alts::LEN, 4);
//! assert_eq!(index_of::<Alts, i64, _>(), 3);
//! ```
//!
//! # Variant
//!
//! A [`Variant<L>`](crate::variant::Variant) holds exactly one value of one of the types listed in
//! `L` (or nothing at all, if it has been created [empty](crate::variant::Variant::empty)).
//!
//! ## Creating and Querying
//!
//! The position (slot) of the alternative is resolved at compile time, from the type of the value:
//! ```
//! use oneof::tlist::tlist;
//! use oneof::variant::Variant;
//!
//! let v = Variant::<tlist![char, i16, i32, i64]>::new(3i32);
//!
//! assert!(v.is::<i32, _>());
//! assert!(!v.is::<char, _>());
//! assert_eq!(v.index(), Some(2));
//! ```
//!
//! The types that are not alternatives are rejected by the compiler:
//! ```compile_fail
//! use oneof::tlist::tlist;
//! use oneof::variant::Variant;
//!
//! let v = Variant::<tlist![char, i16, i32, i64]>::new(3.0f64);
//! ```
//!
//! ## Extracting
//!
//! The value can be accessed either by its type, or by its position. Accessing an alternative that
//! is not live yields a [`VariantError`](crate::variant::VariantError):
//! ```
//! use oneof::tlist::tlist;
//! use oneof::variant::{Variant, VariantError};
//!
//! let v = Variant::<tlist![char, i32, f64]>::new(3.0f64);
//!
//! assert_eq!(v.get::<f64, _>(), Ok(&3.0));
//! assert_eq!(v.get_at::<2>(), Ok(&3.0));
//! assert!(v.get::<char, _>().unwrap_err().is_mismatch());
//!
//! let empty = Variant::<tlist![char, i32, f64]>::empty();
//! assert_eq!(empty.get_at::<2>(), Err(VariantError::Empty));
//! ```
//!
//! ## Visiting
//!
//! A [`Visitor`](crate::variant::Visitor) is invoked exactly once, with the live value, typed as
//! the live alternative:
//! ```
//! use std::fmt::Display;
//!
//! use oneof::tlist::tlist;
//! use oneof::variant::{Variant, Visitor};
//!
//! struct Print;
//!
//! impl<'a, X: Display> Visitor<&'a X> for Print {
//!     type Output = String;
//!
//!     fn visit(self, input: &'a X) -> String {
//!         input.to_string()
//!     }
//! }
//!
//! let v = Variant::<tlist![char, i16, i32, i64]>::new(3i32);
//! assert_eq!(v.visit(Print).unwrap(), "3");
//! ```
//!
//! ## Re-assigning
//!
//! Assigning another value drops the previous one first:
//! ```
//! use oneof::tlist::tlist;
//! use oneof::variant::Variant;
//!
//! let mut v = Variant::<tlist![String, u32]>::new("text".to_owned());
//! v.set(42u32);
//! assert!(v.is::<u32, _>());
//!
//! v.reset();
//! assert!(v.is_empty());
//! ```

pub mod tlist {
    pub use oneof_tlist::*;
}

#[cfg(feature = "variant")]
pub mod variant {
    pub use oneof_variant::*;
}
