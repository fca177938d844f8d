//! Enumeration of [exact covers] with Knuth's dancing links.
//!
//! Given a collection of subsets of some universe, [`Coverings`] yields
//! every sub-collection whose members are pairwise disjoint and whose
//! union is the whole universe. The universe itself is implicit: it is
//! the union of all input subsets.
//!
//! [exact covers]: https://en.wikipedia.org/wiki/Exact_cover

#![warn(missing_docs)]

pub mod latin_square;
pub(crate) mod matrix;
pub mod pentomino;
pub(crate) mod solver;
pub mod sudoku;

use core::fmt::Debug;

pub use solver::Coverings;

/// A subset of the universe: one row of the incidence matrix.
///
/// Two elements that compare equal denote the same universe member and
/// share a column, so `PartialEq` on [`Subset::Element`] must behave like
/// an equivalence relation. The elements of a single subset must be
/// pairwise distinct.
pub trait Subset {
    /// The universe-member type this subset is made of.
    type Element: PartialEq + Debug;

    /// The universe elements this subset covers, in a stable order.
    fn elements(&self) -> Vec<Self::Element>;
}

impl<E> Subset for Vec<E>
where
    E: PartialEq + Debug + Clone,
{
    type Element = E;

    fn elements(&self) -> Vec<E> {
        self.clone()
    }
}

impl<E, const N: usize> Subset for [E; N]
where
    E: PartialEq + Debug + Clone,
{
    type Element = E;

    fn elements(&self) -> Vec<E> {
        self.to_vec()
    }
}

impl<'a, E> Subset for &'a [E]
where
    E: PartialEq + Debug + Clone,
{
    type Element = E;

    fn elements(&self) -> Vec<E> {
        self.to_vec()
    }
}
