// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common-type resolution for mixed-element arithmetic.
//!
//! Binary operators on matrices and vectors accept operands with different
//! element types. The result element type is the *common type* of the two:
//! the narrowest numeric type both operands widen into without losing range.
//! [`Promote`] encodes that relation at the type level, so an incompatible
//! pairing is a missing impl rather than a runtime surprise.
//!
//! Two deliberate exceptions to strict losslessness, matching conventional
//! arithmetic conversions: 64-bit integers paired with a float promote to
//! `f64` (which cannot represent every `i64`/`u64` exactly), and `i64`
//! paired with `u64` promotes to `i128`.

/// Lossy numeric conversion with `as`-cast semantics.
///
/// Used where a value must land in an already-fixed element type, e.g. the
/// right operand of a compound assignment. Truncates like `as` does.
pub trait Cast<T> {
    #[must_use]
    fn cast(self) -> T;
}

impl<T> Cast<T> for T {
    #[inline(always)]
    fn cast(self) -> T {
        self
    }
}

macro_rules! impl_cast {
    ( $( $from:ty => $($to:ty),+ ; )+ ) => {
        $($(
            impl Cast<$to> for $from {
                #[inline(always)]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+)+
    };
}

impl_cast! {
    i8 => i16, i32, i64, i128, u8, u16, u32, u64, f32, f64;
    i16 => i8, i32, i64, i128, u8, u16, u32, u64, f32, f64;
    i32 => i8, i16, i64, i128, u8, u16, u32, u64, f32, f64;
    i64 => i8, i16, i32, i128, u8, u16, u32, u64, f32, f64;
    i128 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64;
    u8 => i8, i16, i32, i64, i128, u16, u32, u64, f32, f64;
    u16 => i8, i16, i32, i64, i128, u8, u32, u64, f32, f64;
    u32 => i8, i16, i32, i64, i128, u8, u16, u64, f32, f64;
    u64 => i8, i16, i32, i64, i128, u8, u16, u32, f32, f64;
    f32 => i8, i16, i32, i64, i128, u8, u16, u32, u64, f64;
    f64 => i8, i16, i32, i64, i128, u8, u16, u32, u64, f32;
}

/// Widening of a value into the common type shared with `Rhs`.
///
/// The impl grid below is symmetric: `A: Promote<B>` and `B: Promote<A>`
/// always name the same `Output`, so both operands of a binary operator can
/// be promoted and combined in that type.
pub trait Promote<Rhs = Self> {
    type Output;

    #[must_use]
    fn promote(self) -> Self::Output;
}

/// The common type of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

impl<T> Promote<T> for T {
    type Output = T;

    #[inline(always)]
    fn promote(self) -> T {
        self
    }
}

macro_rules! impl_promote {
    ( $( $lhs:ty, $rhs:ty => $out:ty ; )+ ) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote(self) -> $out {
                    self as $out
                }
            }

            impl Promote<$lhs> for $rhs {
                type Output = $out;

                #[inline(always)]
                fn promote(self) -> $out {
                    self as $out
                }
            }
        )+
    };
}

impl_promote! {
    // within the signed family, the wider type wins
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    // within the unsigned family
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    // mixed signedness widens to the first signed type holding both ranges
    i8, u8 => i16;
    i8, u16 => i32;
    i8, u32 => i64;
    i8, u64 => i128;
    i16, u8 => i16;
    i16, u16 => i32;
    i16, u32 => i64;
    i16, u64 => i128;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => i64;
    i32, u64 => i128;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i64, u64 => i128;

    // floats absorb everything; f32 only holds integers up to 16 bits
    f32, f64 => f64;
    f32, i8 => f32;
    f32, i16 => f32;
    f32, u8 => f32;
    f32, u16 => f32;
    f32, i32 => f64;
    f32, i64 => f64;
    f32, u32 => f64;
    f32, u64 => f64;
    f64, i8 => f64;
    f64, i16 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, u8 => f64;
    f64, u16 => f64;
    f64, u32 => f64;
    f64, u64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common<L: Promote<R>, R>(lhs: L, _rhs: R) -> L::Output {
        lhs.promote()
    }

    #[test]
    fn test_promote_widths() {
        assert_eq!(common(1_i8, 2_i16), 1_i16);
        assert_eq!(common(1_i16, 2_i8), 1_i16);
        assert_eq!(common(3_u8, 4_u64), 3_u64);
        assert_eq!(common(5_i32, 6_u16), 5_i32);
        assert_eq!(common(7_u32, 8_i32), 7_i64);
        assert_eq!(common(9_i64, 10_u64), 9_i128);
        assert_eq!(common(1_i32, 1_i32), 1_i32);
    }

    #[test]
    fn test_promote_floats() {
        assert_eq!(common(1.5_f32, 2.5_f64), 1.5_f64);
        assert_eq!(common(2_i16, 0.5_f32), 2.0_f32);
        assert_eq!(common(2_i32, 0.5_f32), 2.0_f64);
        assert_eq!(common(3_u64, 0.5_f64), 3.0_f64);
    }

    #[test]
    fn test_cast_truncates() {
        assert_eq!(Cast::<i32>::cast(2.9_f64), 2);
        assert_eq!(Cast::<i32>::cast(-2.9_f64), -2);
        assert_eq!(Cast::<u8>::cast(260_i32), 4);
        assert_eq!(Cast::<f64>::cast(7_i32), 7.0);
    }
}
