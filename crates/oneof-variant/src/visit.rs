use crate::storage::{Storage, Vacant};

/// A visitor accepting `In`.
///
/// In order to visit a [`Variant`](crate::Variant) the visitor should implement this trait for
/// each of the variant's alternatives (`&X` for [`visit`](crate::Variant::visit), `&mut X` for
/// [`visit_mut`](crate::Variant::visit_mut), and `X` for
/// [`into_visit`](crate::Variant::into_visit)), with the same `Output` for all of them.
/// It can be done either generically:
/// ```
/// use std::fmt::Display;
/// use oneof_variant::Visitor;
///
/// struct Render;
///
/// impl<'a, X: Display> Visitor<&'a X> for Render {
///     type Output = String;
///
///     fn visit(self, input: &'a X) -> Self::Output {
///         input.to_string()
///     }
/// }
/// ```
/// or one impl per alternative type.
///
/// The visitor is consumed by the visit: it is invoked exactly once.
pub trait Visitor<In> {
    type Output;

    fn visit(self, input: In) -> Self::Output;
}

/// Dispatch of a visitor to the region at a run-time slot index, by reference.
pub trait VisitRef<'a, V, Out> {
    /// # Safety
    /// `idx` must name the live region.
    unsafe fn visit_ref(&'a self, idx: usize, visitor: V) -> Out;
}

/// Dispatch of a visitor to the region at a run-time slot index, by mutable reference.
pub trait VisitMut<'a, V, Out> {
    /// # Safety
    /// `idx` must name the live region.
    unsafe fn visit_mut(&'a mut self, idx: usize, visitor: V) -> Out;
}

/// Dispatch of a visitor to the region at a run-time slot index, by value.
pub trait VisitOwned<V, Out> {
    /// # Safety
    /// `idx` must name the live region. The value is moved out of the region: it is
    /// uninitialized afterwards.
    unsafe fn visit_owned(&mut self, idx: usize, visitor: V) -> Out;
}

impl<'a, V, Out> VisitRef<'a, V, Out> for Vacant {
    unsafe fn visit_ref(&'a self, idx: usize, _visitor: V) -> Out {
        unreachable!("no region at slot {}", idx)
    }
}
impl<'a, V, Out> VisitMut<'a, V, Out> for Vacant {
    unsafe fn visit_mut(&'a mut self, idx: usize, _visitor: V) -> Out {
        unreachable!("no region at slot {}", idx)
    }
}
impl<V, Out> VisitOwned<V, Out> for Vacant {
    unsafe fn visit_owned(&mut self, idx: usize, _visitor: V) -> Out {
        unreachable!("no region at slot {}", idx)
    }
}

impl<'a, V, Out, H, T> VisitRef<'a, V, Out> for Storage<H, T>
where
    H: 'a,
    T: 'a + VisitRef<'a, V, Out>,
    V: Visitor<&'a H, Output = Out>,
{
    unsafe fn visit_ref(&'a self, idx: usize, visitor: V) -> Out {
        match idx {
            0 => visitor.visit(unsafe { self.head() }),
            _ => unsafe { self.tail().visit_ref(idx - 1, visitor) },
        }
    }
}

impl<'a, V, Out, H, T> VisitMut<'a, V, Out> for Storage<H, T>
where
    H: 'a,
    T: 'a + VisitMut<'a, V, Out>,
    V: Visitor<&'a mut H, Output = Out>,
{
    unsafe fn visit_mut(&'a mut self, idx: usize, visitor: V) -> Out {
        match idx {
            0 => visitor.visit(unsafe { self.head_mut() }),
            _ => unsafe { self.tail_mut().visit_mut(idx - 1, visitor) },
        }
    }
}

impl<V, Out, H, T> VisitOwned<V, Out> for Storage<H, T>
where
    T: VisitOwned<V, Out>,
    V: Visitor<H, Output = Out>,
{
    unsafe fn visit_owned(&mut self, idx: usize, visitor: V) -> Out {
        match idx {
            0 => visitor.visit(unsafe { self.take_head() }),
            _ => unsafe { self.tail_mut().visit_owned(idx - 1, visitor) },
        }
    }
}
