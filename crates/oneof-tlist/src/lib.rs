//! Type-level lists.
//!
//! A type-list is an ordered sequence of types that exists only at compile time: neither [`Nil`]
//! nor [`Cons`] is ever instantiated. The lists are used to describe the set of alternatives of a
//! sum type, and to resolve a type into its position (slot) within that set.
//!
//! ```
//! use oneof_tlist::{index_of, tlist, Front, PopFront, TypeList};
//!
//! type Alts = tlist![char, i16, i32, i64];
//!
//! assert_eq!(<Alts as TypeList>::LEN, 4);
//! assert_eq!(index_of::<Alts, i32, _>(), 2);
//!
//! let _: Front<Alts> = 'a';
//! let _: Front<PopFront<Alts>> = 1i16;
//! ```

mod index;
mod index_of;
mod list;
mod macros;
mod position;
mod push;
mod type_at;
mod type_ids;

mod exports {
    pub use crate::index::{Here, There, Witness};
    pub use crate::index_of::{index_of, IndexOf};
    pub use crate::list::{Cons, Front, Nil, NonEmpty, PopFront, TypeList};
    pub use crate::position::{Pos, PosIndex, Position, MAX_POSITIONS};
    pub use crate::push::{PushBack, PushFront};
    pub use crate::type_at::{Nth, TypeAt};
    pub use crate::type_ids::{first_index_of, TypeIds};
}

mod imports {
    pub type Nothing = std::convert::Infallible;
}

pub use exports::*;
pub use imports::*;
