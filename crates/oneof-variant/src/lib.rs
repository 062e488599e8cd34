//! A closed sum type: [`Variant<L>`](Variant) holds exactly one value out of the alternatives
//! listed in the type-list `L`.
//!
//! The layers, from the bottom:
//! - [storage](plumbing::Storage): a recursive union with a region per alternative, which does
//!   not know which of its regions is live;
//! - [slot access](plumbing::SlotAccess): compile-time navigation to the region of a slot;
//! - [`Variant`]: the storage paired with the index of the live alternative; all the checks are
//!   done on this level.

mod error;
mod slot;
mod storage;
mod variant;
mod visit;

mod exports {
    pub use crate::error::{SlotInfo, VariantError};
    pub use crate::slot::Member;
    pub use crate::storage::Alternatives;
    pub use crate::variant::Variant;
    pub use crate::visit::Visitor;

    pub mod plumbing {
        pub use crate::slot::SlotAccess;
        pub use crate::storage::{
            AnySlots, CloneSlots, DebugSlots, EqSlots, Slots, Storage, TotalEqSlots, Vacant,
        };
        pub use crate::visit::{VisitMut, VisitOwned, VisitRef};
    }
}

pub use exports::*;
