// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::{array, ops::Add};

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and
/// [`ClosedAdd`] instead of the `Sum` trait.
///
/// [`Iterator::sum()`]: https://doc.rust-lang.org/stable/std/iter/trait.Iterator.html#method.sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Zips two arrays together and applies the function `f` to each memberwise
/// element, returning a fixed size array of the results.
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();

    array::from_fn(|_| match (lhs.next(), rhs.next()) {
        (Some(l), Some(r)) => f(l, r),
        // both iterators yield exactly N items
        _ => unreachable!(),
    })
}
