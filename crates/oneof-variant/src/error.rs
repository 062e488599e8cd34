use std::fmt;

use oneof_tlist::TypeList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("Variant is empty")]
    Empty,

    #[error("Slot mismatch [requested: {requested}, active: {active}]")]
    Mismatch { requested: SlotInfo, active: SlotInfo },

    #[error("Not an alternative: {type_name}")]
    NotAlternative { type_name: &'static str },
}

/// A slot of a variant: its index and the name of its alternative type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInfo {
    pub index: usize,
    pub type_name: &'static str,
}

impl VariantError {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
    pub fn is_not_alternative(&self) -> bool {
        matches!(self, Self::NotAlternative { .. })
    }

    pub fn empty() -> Self {
        Self::Empty
    }
    pub fn mismatch<L: TypeList>(requested: usize, active: usize) -> Self {
        Self::Mismatch { requested: SlotInfo::of::<L>(requested), active: SlotInfo::of::<L>(active) }
    }
    pub fn not_alternative<X: ?Sized>() -> Self {
        Self::NotAlternative { type_name: std::any::type_name::<X>() }
    }
}

impl SlotInfo {
    pub fn of<L: TypeList>(index: usize) -> Self {
        Self { index, type_name: L::type_name_at(index).unwrap_or("?") }
    }
}

impl fmt::Display for SlotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.index, self.type_name)
    }
}
