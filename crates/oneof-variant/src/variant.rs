use std::any::{Any, TypeId};
use std::fmt;

use oneof_tlist::{Nth, Pos, PosIndex, Position, TypeAt, TypeIds};

use crate::error::VariantError;
use crate::slot::Member;
use crate::storage::{
    Alternatives, AnySlots, CloneSlots, DebugSlots, EqSlots, Slots, TotalEqSlots,
};
use crate::visit::{VisitMut, VisitOwned, VisitRef};


const NPOS: usize = usize::MAX;

/// A value of one of the types listed in `L`.
///
/// The variant keeps the storage for its alternatives and the index of the alternative that is
/// currently live, or [`NPOS`](Variant::NPOS) if there is none.
///
/// The slot of an alternative type is resolved at compile time: the methods taking a type `X`
/// also take the index-witness `I`, which is normally left for the compiler to infer
/// (`v.is::<i32, _>()`). Asking for a type that is not an alternative does not compile.
///
/// ```
/// use oneof_tlist::tlist;
/// use oneof_variant::Variant;
///
/// let v = Variant::<tlist![char, i16, i32, i64]>::new(3i32);
///
/// assert!(v.is::<i32, _>());
/// assert!(!v.is::<char, _>());
/// assert_eq!(v.get::<i32, _>(), Ok(&3));
/// assert!(v.get::<char, _>().is_err());
/// ```
///
/// If a type is listed more than once, the witness cannot be inferred. When all the alternatives
/// are `'static`, the `*_first` methods resolve a type by its identity instead, to the first
/// slot it is listed at:
/// ```
/// use oneof_tlist::tlist;
/// use oneof_variant::Variant;
///
/// let v = Variant::<tlist![i32, i32, f64]>::new_first(3i32).unwrap();
///
/// assert_eq!(v.index(), Some(0));
/// assert!(v.holds::<i32>());
/// assert_eq!(v.get_first::<i32>(), Ok(&3));
/// ```
pub struct Variant<L: Alternatives> {
    storage: L::Storage,
    index: usize,
}

impl<L: Alternatives> Variant<L> {
    /// The discriminant of a variant with no live alternative.
    pub const NPOS: usize = NPOS;

    /// Create a variant with no live alternative.
    pub fn empty() -> Self {
        Self { storage: L::vacant(), index: NPOS }
    }

    /// Create a variant holding `value`.
    pub fn new<X, I>(value: X) -> Self
    where
        L: Member<X, I>,
    {
        Self { storage: <L as Member<X, I>>::place(value), index: <L as Member<X, I>>::INDEX }
    }

    /// The index of the live alternative.
    pub fn index(&self) -> Option<usize> {
        Some(self.index).filter(|idx| *idx != NPOS)
    }

    pub fn is_empty(&self) -> bool {
        self.index == NPOS
    }

    /// The name of the live alternative's type.
    pub fn type_name(&self) -> Option<&'static str> {
        L::type_name_at(self.index)
    }

    /// Whether the live alternative is the one at `X`'s slot.
    pub fn is<X, I>(&self) -> bool
    where
        L: Member<X, I>,
    {
        self.index == <L as Member<X, I>>::INDEX
    }

    /// The [`TypeId`] of the live alternative's type.
    pub fn active_type_id(&self) -> Option<TypeId>
    where
        L: TypeIds,
    {
        L::type_id_at(self.index)
    }

    /// Whether the live alternative is `X`, looked up by type identity.
    ///
    /// If `X` is listed more than once, the first occurrence is the one checked against.
    /// A type that is not an alternative is never held.
    pub fn holds<X>(&self) -> bool
    where
        L: TypeIds,
        X: ?Sized + 'static,
    {
        L::position_of::<X>() == Some(self.index)
    }

    pub fn get<X, I>(&self) -> Result<&X, VariantError>
    where
        L: Member<X, I>,
    {
        self.check_slot(<L as Member<X, I>>::INDEX)?;
        // SAFETY: the slot has just been checked to be live.
        Ok(unsafe { <L as Member<X, I>>::at(&self.storage) })
    }

    pub fn get_mut<X, I>(&mut self) -> Result<&mut X, VariantError>
    where
        L: Member<X, I>,
    {
        self.check_slot(<L as Member<X, I>>::INDEX)?;
        // SAFETY: the slot has just been checked to be live.
        Ok(unsafe { <L as Member<X, I>>::at_mut(&mut self.storage) })
    }

    /// Access the alternative at the position `N`.
    ///
    /// Unlike [`get`](Self::get), this one is not ambiguous when a type is listed more than once.
    pub fn get_at<const N: usize>(&self) -> Result<&Nth<L, N>, VariantError>
    where
        Pos<N>: Position,
        L: TypeAt<PosIndex<N>> + Member<Nth<L, N>, PosIndex<N>>,
    {
        self.get::<Nth<L, N>, PosIndex<N>>()
    }

    pub fn get_at_mut<const N: usize>(&mut self) -> Result<&mut Nth<L, N>, VariantError>
    where
        Pos<N>: Position,
        L: TypeAt<PosIndex<N>> + Member<Nth<L, N>, PosIndex<N>>,
    {
        self.get_mut::<Nth<L, N>, PosIndex<N>>()
    }

    /// Replace the live alternative (if any) with `value`.
    ///
    /// The previously live value is dropped before the new one is stored.
    pub fn set<X, I>(&mut self, value: X)
    where
        L: Member<X, I>,
    {
        self.destroy();
        self.storage = <L as Member<X, I>>::place(value);
        self.index = <L as Member<X, I>>::INDEX;

        tracing::trace!("Variant set [slot: {}, type: {}]", self.index, std::any::type_name::<X>());
    }

    /// Replace the live alternative (if any) with the value produced by `make`.
    ///
    /// The previously live value is dropped before `make` is invoked. Should `make` fail, its
    /// error is returned and the variant is left empty.
    pub fn emplace_with<X, I, E, F>(&mut self, make: F) -> Result<&mut X, E>
    where
        L: Member<X, I>,
        F: FnOnce() -> Result<X, E>,
    {
        self.destroy();

        let value = make().map_err(|reason| {
            tracing::debug!(
                "Variant left empty: failed to construct {}",
                std::any::type_name::<X>()
            );
            reason
        })?;
        self.set::<X, I>(value);

        // SAFETY: the slot has just been set.
        Ok(unsafe { <L as Member<X, I>>::at_mut(&mut self.storage) })
    }

    /// Move the live value out, leaving the variant empty.
    pub fn take<X, I>(&mut self) -> Result<X, VariantError>
    where
        L: Member<X, I>,
    {
        self.check_slot(<L as Member<X, I>>::INDEX)?;
        self.index = NPOS;

        tracing::trace!("Variant take [type: {}]", std::any::type_name::<X>());

        // SAFETY: the slot has been checked to be live and nothing refers to it after the
        // discriminant is reset.
        Ok(unsafe { <L as Member<X, I>>::take(&mut self.storage) })
    }

    /// Drop the live value (if any), leaving the variant empty.
    pub fn reset(&mut self) {
        if let Some(index) = self.index() {
            tracing::trace!("Variant reset [slot: {}]", index);
        }
        self.destroy();
    }

    /// Create a variant holding `value` at the first slot listed as `X`.
    pub fn new_first<X>(value: X) -> Result<Self, VariantError>
    where
        L: TypeIds,
        L::Storage: AnySlots,
        X: 'static,
    {
        let mut v = Self::empty();
        v.set_first(value)?;
        Ok(v)
    }

    /// Replace the live alternative (if any) with `value`, stored at the first slot listed as
    /// `X`.
    ///
    /// Should `X` not be an alternative, the variant is left intact.
    pub fn set_first<X>(&mut self, value: X) -> Result<(), VariantError>
    where
        L: TypeIds,
        L::Storage: AnySlots,
        X: 'static,
    {
        let index = Self::first_position_of::<X>()?;
        self.destroy();

        let storage = <L::Storage as AnySlots>::place_any(index, &mut Some(value))
            .ok_or_else(VariantError::not_alternative::<X>)?;
        self.storage = storage;
        self.index = index;

        tracing::trace!("Variant set [slot: {}, type: {}]", self.index, std::any::type_name::<X>());

        Ok(())
    }

    /// Access the live value as `X`, resolved to the first slot listed as `X`.
    pub fn get_first<X>(&self) -> Result<&X, VariantError>
    where
        L: TypeIds,
        L::Storage: AnySlots,
        X: 'static,
    {
        let index = Self::first_position_of::<X>()?;
        self.check_slot(index)?;
        // SAFETY: the slot has just been checked to be live.
        let live = unsafe { self.storage.any_slot(index) };
        live.downcast_ref::<X>().ok_or_else(VariantError::not_alternative::<X>)
    }

    pub fn get_first_mut<X>(&mut self) -> Result<&mut X, VariantError>
    where
        L: TypeIds,
        L::Storage: AnySlots,
        X: 'static,
    {
        let index = Self::first_position_of::<X>()?;
        self.check_slot(index)?;
        // SAFETY: the slot has just been checked to be live.
        let live = unsafe { self.storage.any_slot_mut(index) };
        live.downcast_mut::<X>().ok_or_else(VariantError::not_alternative::<X>)
    }

    /// Invoke `visitor` with a reference to the live value.
    pub fn visit<'a, V, Out>(&'a self, visitor: V) -> Result<Out, VariantError>
    where
        L::Storage: VisitRef<'a, V, Out>,
    {
        let index = self.check_not_empty()?;
        // SAFETY: the discriminant names the live slot.
        Ok(unsafe { self.storage.visit_ref(index, visitor) })
    }

    /// Invoke `visitor` with a mutable reference to the live value.
    pub fn visit_mut<'a, V, Out>(&'a mut self, visitor: V) -> Result<Out, VariantError>
    where
        L::Storage: VisitMut<'a, V, Out>,
    {
        let index = self.check_not_empty()?;
        // SAFETY: the discriminant names the live slot.
        Ok(unsafe { self.storage.visit_mut(index, visitor) })
    }

    /// Invoke `visitor` with the live value, consuming the variant.
    pub fn into_visit<V, Out>(mut self, visitor: V) -> Result<Out, VariantError>
    where
        L::Storage: VisitOwned<V, Out>,
    {
        let index = self.check_not_empty()?;
        self.index = NPOS;
        // SAFETY: the discriminant named the live slot; it is reset, so that the moved-out value
        // is not dropped once again when `self` goes out of scope.
        Ok(unsafe { self.storage.visit_owned(index, visitor) })
    }
}

impl<L: Alternatives> Variant<L> {
    fn check_not_empty(&self) -> Result<usize, VariantError> {
        match self.index {
            NPOS => {
                tracing::debug!("Variant access while empty");
                Err(VariantError::empty())
            },
            active => Ok(active),
        }
    }

    fn check_slot(&self, requested: usize) -> Result<(), VariantError> {
        match self.check_not_empty()? {
            active if active == requested => Ok(()),
            active => {
                let err = VariantError::mismatch::<L>(requested, active);
                tracing::debug!("Variant access denied: {}", err);
                Err(err)
            },
        }
    }

    fn first_position_of<X>() -> Result<usize, VariantError>
    where
        L: TypeIds,
        X: Any,
    {
        L::position_of::<X>().ok_or_else(|| {
            let err = VariantError::not_alternative::<X>();
            tracing::debug!("Variant access denied: {}", err);
            err
        })
    }

    fn destroy(&mut self) {
        let active = std::mem::replace(&mut self.index, NPOS);
        if active != NPOS {
            // SAFETY: `active` was the live slot; the discriminant is already reset in case the
            // drop of the value panics.
            unsafe { self.storage.drop_slot(active) }
        }
    }
}

impl<L: Alternatives> Drop for Variant<L> {
    fn drop(&mut self) {
        self.destroy()
    }
}

impl<L: Alternatives> Default for Variant<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L> Clone for Variant<L>
where
    L: Alternatives,
    L::Storage: CloneSlots,
{
    fn clone(&self) -> Self {
        match self.index {
            NPOS => Self::empty(),
            // SAFETY: the discriminant names the live slot.
            active => Self { storage: unsafe { self.storage.clone_slot(active) }, index: active },
        }
    }
}

impl<L> PartialEq for Variant<L>
where
    L: Alternatives,
    L::Storage: EqSlots,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.index, other.index) {
            (NPOS, NPOS) => true,
            // SAFETY: the same slot is live in both.
            (left, right) if left == right => unsafe { self.storage.eq_slot(&other.storage, left) },
            _ => false,
        }
    }
}

impl<L> Eq for Variant<L>
where
    L: Alternatives,
    L::Storage: TotalEqSlots,
{
}

impl<L> fmt::Debug for Variant<L>
where
    L: Alternatives,
    L::Storage: DebugSlots,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            NPOS => write!(f, "Variant(<empty>)"),
            active => {
                write!(f, "Variant({}: ", active)?;
                // SAFETY: the discriminant names the live slot.
                unsafe { self.storage.fmt_slot(active, f) }?;
                write!(f, ")")
            },
        }
    }
}
