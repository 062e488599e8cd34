use crate::index::{Here, There, Witness};

/// The number of const-positions that have an index-witness.
pub const MAX_POSITIONS: usize = 32;

/// A position given as a const-value.
#[derive(Debug, Clone, Copy)]
pub struct Pos<const N: usize>;

/// Maps a [`Pos`] onto its index-witness.
pub trait Position {
    type Index: Witness;
}

pub type PosIndex<const N: usize> = <Pos<N> as Position>::Index;

impl Position for Pos<0> {
    type Index = Here;
}

macro_rules! positions {
    ($($pos: literal => $prev: literal),* $(,)?) => {
        $(
            impl Position for Pos<$pos> {
                type Index = There<PosIndex<$prev>>;
            }
        )*
    };
}

positions!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30,
);
