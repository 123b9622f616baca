// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric capability traits used by the matrix and vector types.
//!
//! Every generic operation in this crate names the capabilities it needs
//! through one of these traits instead of probing for them ad hoc. Floating
//! point math is backed by `std` when available, or by the `libm` crate
//! under `no_std`.

use core::ops::{Add, Div, Mul, Neg, Sub};

pub mod promote;

pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

/// The additive identity, as an associated constant.
#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity, as an associated constant.
#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

/// Absolute value. Implemented as the identity for unsigned types.
pub trait Abs: Copy {
    #[must_use]
    fn abs(self) -> Self;
}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

pub trait Pow: Copy {
    #[must_use]
    fn powf(self, exp: Self) -> Self;
}

macro_rules! impl_zero_one {
    ( $( $num_ty:ty => ($zero:expr, $one:expr) ),* $(,)? ) => {
        $(
            impl Zero for $num_ty {
                const ZERO: Self = $zero;
            }

            impl One for $num_ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_zero_one! {
    u8 => (0, 1),
    u16 => (0, 1),
    u32 => (0, 1),
    u64 => (0, 1),
    u128 => (0, 1),
    usize => (0, 1),

    i8 => (0, 1),
    i16 => (0, 1),
    i32 => (0, 1),
    i64 => (0, 1),
    i128 => (0, 1),
    isize => (0, 1),

    f32 => (0.0, 1.0),
    f64 => (0.0, 1.0),
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}

macro_rules! impl_abs_for_signed_types {
    ( $($ty:ty),* $(,)? ) => {
        $(
            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }
        )*
    };
}

impl_abs_for_signed_types! {
    i8, i16, i32, i64, i128, isize,
}

macro_rules! impl_abs_for_unsigned_types {
    ( $($ty:ty),* $(,)? ) => {
        $(
            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_abs_for_unsigned_types! {
    u8, u16, u32, u64, u128, usize,
}

macro_rules! impl_float_traits {
    ( $($ty:ty),* $(,)? ) => {
        $(
            #[cfg(feature = "std")]
            impl Abs for $ty {
                #[inline(always)]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Abs for $ty {
                #[inline(always)]
                fn abs(self) -> Self {
                    libm::Libm::<$ty>::fabs(self)
                }
            }

            #[cfg(feature = "std")]
            impl Sqrt for $ty {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Sqrt for $ty {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$ty>::sqrt(self)
                }
            }

            #[cfg(feature = "std")]
            impl Pow for $ty {
                #[inline(always)]
                fn powf(self, exp: Self) -> Self {
                    <$ty>::powf(self, exp)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Pow for $ty {
                #[inline(always)]
                fn powf(self, exp: Self) -> Self {
                    libm::Libm::<$ty>::pow(self, exp)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}
