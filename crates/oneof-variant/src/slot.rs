use oneof_tlist::{Here, IndexOf, There};

use crate::storage::{Alternatives, Storage};

/// Compile-time navigation to the region that holds an `X` at the slot named by `I`.
///
/// `Here` is the head region, `There<I>` is the region `I` within the tail. No liveness checks
/// are performed on this level.
pub trait SlotAccess<X, I>: Sized {
    fn place(value: X) -> Self;

    /// # Safety
    /// The region must be live.
    unsafe fn at(&self) -> &X;

    /// # Safety
    /// The region must be live.
    unsafe fn at_mut(&mut self) -> &mut X;

    /// # Safety
    /// The region must be live. It is uninitialized afterwards.
    unsafe fn take(&mut self) -> X;
}

impl<X, T> SlotAccess<X, Here> for Storage<X, T> {
    fn place(value: X) -> Self {
        Self::from_head(value)
    }
    unsafe fn at(&self) -> &X {
        unsafe { self.head() }
    }
    unsafe fn at_mut(&mut self) -> &mut X {
        unsafe { self.head_mut() }
    }
    unsafe fn take(&mut self) -> X {
        unsafe { self.take_head() }
    }
}

impl<X, H, T, I> SlotAccess<X, There<I>> for Storage<H, T>
where
    T: SlotAccess<X, I>,
{
    fn place(value: X) -> Self {
        Self::from_tail(T::place(value))
    }
    unsafe fn at(&self) -> &X {
        unsafe { self.tail().at() }
    }
    unsafe fn at_mut(&mut self) -> &mut X {
        unsafe { self.tail_mut().at_mut() }
    }
    unsafe fn take(&mut self) -> X {
        unsafe { self.tail_mut().take() }
    }
}

/// `X` is an alternative of the list, at the slot named by `I`.
///
/// Combines the slot resolution ([`IndexOf`]) with the access to the storage ([`SlotAccess`]).
pub trait Member<X, I>: Alternatives {
    const INDEX: usize;

    fn place(value: X) -> Self::Storage;

    /// # Safety
    /// The slot must be live.
    unsafe fn at(storage: &Self::Storage) -> &X;

    /// # Safety
    /// The slot must be live.
    unsafe fn at_mut(storage: &mut Self::Storage) -> &mut X;

    /// # Safety
    /// The slot must be live. It is uninitialized afterwards.
    unsafe fn take(storage: &mut Self::Storage) -> X;
}

impl<L, X, I> Member<X, I> for L
where
    L: Alternatives + IndexOf<X, I>,
    L::Storage: SlotAccess<X, I>,
{
    const INDEX: usize = <L as IndexOf<X, I>>::INDEX;

    fn place(value: X) -> Self::Storage {
        <L::Storage as SlotAccess<X, I>>::place(value)
    }
    unsafe fn at(storage: &Self::Storage) -> &X {
        unsafe { storage.at() }
    }
    unsafe fn at_mut(storage: &mut Self::Storage) -> &mut X {
        unsafe { storage.at_mut() }
    }
    unsafe fn take(storage: &mut Self::Storage) -> X {
        unsafe { <L::Storage as SlotAccess<X, I>>::take(storage) }
    }
}
