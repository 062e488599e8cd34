use std::any::Any;
use std::fmt;
use std::mem::ManuallyDrop;

use oneof_tlist::{Cons, Nil, TypeList};


/// Storage for exactly one value out of a sequence of alternatives.
///
/// The head region holds an `H`, the tail region holds the storage for the rest of the
/// alternatives. The storage does not know which region (if any) is live: that bookkeeping
/// belongs to its owner, and so does dropping the live value.
pub union Storage<H, T> {
    vacant: (),
    head: ManuallyDrop<H>,
    tail: ManuallyDrop<T>,
}

/// Storage for the empty list of alternatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vacant;

/// Maps a list of alternatives onto the storage for them.
pub trait Alternatives: TypeList {
    type Storage: Slots;

    fn vacant() -> Self::Storage;
}

impl Alternatives for Nil {
    type Storage = Vacant;

    fn vacant() -> Self::Storage {
        Vacant
    }
}

impl<H, T> Alternatives for Cons<H, T>
where
    T: Alternatives,
{
    type Storage = Storage<H, T::Storage>;

    fn vacant() -> Self::Storage {
        Storage::vacant()
    }
}

impl<H, T> Storage<H, T> {
    pub const fn vacant() -> Self {
        Self { vacant: () }
    }

    pub fn from_head(head: H) -> Self {
        Self { head: ManuallyDrop::new(head) }
    }

    pub fn from_tail(tail: T) -> Self {
        Self { tail: ManuallyDrop::new(tail) }
    }

    /// # Safety
    /// The head region must be live.
    pub unsafe fn head(&self) -> &H {
        let head: &ManuallyDrop<H> = unsafe { &self.head };
        head
    }

    /// # Safety
    /// The head region must be live.
    pub unsafe fn head_mut(&mut self) -> &mut H {
        let head: &mut ManuallyDrop<H> = unsafe { &mut self.head };
        head
    }

    /// Moves the value out of the head region, leaving it uninitialized.
    ///
    /// # Safety
    /// The head region must be live.
    pub unsafe fn take_head(&mut self) -> H {
        unsafe { ManuallyDrop::take(&mut self.head) }
    }

    /// # Safety
    /// A region within the tail must be live.
    pub unsafe fn tail(&self) -> &T {
        let tail: &ManuallyDrop<T> = unsafe { &self.tail };
        tail
    }

    /// # Safety
    /// A region within the tail must be live.
    pub unsafe fn tail_mut(&mut self) -> &mut T {
        let tail: &mut ManuallyDrop<T> = unsafe { &mut self.tail };
        tail
    }
}

impl<H, T> fmt::Debug for Storage<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage<{}, ..>", std::any::type_name::<H>())
    }
}

/// Operations on the region at a run-time slot index.
pub trait Slots {
    /// # Safety
    /// `idx` must name the live region. The region is uninitialized afterwards.
    unsafe fn drop_slot(&mut self, idx: usize);
}

pub trait CloneSlots: Sized {
    /// # Safety
    /// `idx` must name the live region.
    unsafe fn clone_slot(&self, idx: usize) -> Self;
}

pub trait EqSlots {
    /// # Safety
    /// `idx` must name the live region in both `self` and `other`.
    unsafe fn eq_slot(&self, other: &Self, idx: usize) -> bool;
}

/// [`EqSlots`] over alternatives that are all [`Eq`].
pub trait TotalEqSlots: EqSlots {}

pub trait DebugSlots {
    /// # Safety
    /// `idx` must name the live region.
    unsafe fn fmt_slot(&self, idx: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Access to the regions at a run-time slot index, typed as [`Any`].
///
/// Available when every alternative is `'static`.
pub trait AnySlots: Sized {
    /// Takes the value out of `value` (an `Option<X>`) and places it into the region at `idx`.
    ///
    /// Returns `None`, leaving `value` intact, unless the alternative at `idx` is `X`.
    fn place_any(idx: usize, value: &mut dyn Any) -> Option<Self>;

    /// # Safety
    /// `idx` must name the live region.
    unsafe fn any_slot(&self, idx: usize) -> &dyn Any;

    /// # Safety
    /// `idx` must name the live region.
    unsafe fn any_slot_mut(&mut self, idx: usize) -> &mut dyn Any;
}

impl Slots for Vacant {
    unsafe fn drop_slot(&mut self, idx: usize) {
        unreachable!("no region at slot {}", idx)
    }
}
impl CloneSlots for Vacant {
    unsafe fn clone_slot(&self, idx: usize) -> Self {
        unreachable!("no region at slot {}", idx)
    }
}
impl EqSlots for Vacant {
    unsafe fn eq_slot(&self, _other: &Self, idx: usize) -> bool {
        unreachable!("no region at slot {}", idx)
    }
}
impl TotalEqSlots for Vacant {}
impl AnySlots for Vacant {
    fn place_any(_idx: usize, _value: &mut dyn Any) -> Option<Self> {
        None
    }
    unsafe fn any_slot(&self, idx: usize) -> &dyn Any {
        unreachable!("no region at slot {}", idx)
    }
    unsafe fn any_slot_mut(&mut self, idx: usize) -> &mut dyn Any {
        unreachable!("no region at slot {}", idx)
    }
}
impl DebugSlots for Vacant {
    unsafe fn fmt_slot(&self, idx: usize, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unreachable!("no region at slot {}", idx)
    }
}

impl<H, T> Slots for Storage<H, T>
where
    T: Slots,
{
    unsafe fn drop_slot(&mut self, idx: usize) {
        match idx {
            0 => unsafe { ManuallyDrop::drop(&mut self.head) },
            _ => unsafe { self.tail_mut().drop_slot(idx - 1) },
        }
    }
}

impl<H, T> CloneSlots for Storage<H, T>
where
    H: Clone,
    T: CloneSlots,
{
    unsafe fn clone_slot(&self, idx: usize) -> Self {
        match idx {
            0 => Self::from_head(unsafe { self.head() }.clone()),
            _ => Self::from_tail(unsafe { self.tail().clone_slot(idx - 1) }),
        }
    }
}

impl<H, T> EqSlots for Storage<H, T>
where
    H: PartialEq,
    T: EqSlots,
{
    unsafe fn eq_slot(&self, other: &Self, idx: usize) -> bool {
        match idx {
            0 => unsafe { self.head() == other.head() },
            _ => unsafe { self.tail().eq_slot(other.tail(), idx - 1) },
        }
    }
}

impl<H, T> TotalEqSlots for Storage<H, T>
where
    H: Eq,
    T: TotalEqSlots,
{
}

impl<H, T> AnySlots for Storage<H, T>
where
    H: 'static,
    T: AnySlots,
{
    fn place_any(idx: usize, value: &mut dyn Any) -> Option<Self> {
        match idx {
            0 => value.downcast_mut::<Option<H>>()?.take().map(Self::from_head),
            _ => T::place_any(idx - 1, value).map(Self::from_tail),
        }
    }

    unsafe fn any_slot(&self, idx: usize) -> &dyn Any {
        match idx {
            0 => unsafe { self.head() as &dyn Any },
            _ => unsafe { self.tail().any_slot(idx - 1) },
        }
    }

    unsafe fn any_slot_mut(&mut self, idx: usize) -> &mut dyn Any {
        match idx {
            0 => unsafe { self.head_mut() as &mut dyn Any },
            _ => unsafe { self.tail_mut().any_slot_mut(idx - 1) },
        }
    }
}

impl<H, T> DebugSlots for Storage<H, T>
where
    H: fmt::Debug,
    T: DebugSlots,
{
    unsafe fn fmt_slot(&self, idx: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match idx {
            0 => fmt::Debug::fmt(unsafe { self.head() }, f),
            _ => unsafe { self.tail().fmt_slot(idx - 1, f) },
        }
    }
}
