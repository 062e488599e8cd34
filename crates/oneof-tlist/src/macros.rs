/// Spells a type-list out of a comma-separated sequence of types.
///
/// `tlist![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::Nil };
    ($head: ty $(, $tail: ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tlist!($($tail),*)>
    };
}
