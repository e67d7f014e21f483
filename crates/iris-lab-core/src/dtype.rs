use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Numeric type usable for flower measurements.
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
    + Serialize
    + for<'de> Deserialize<'de>
    + 'static
{
    const ZERO: Self;
    const TWO: Self;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    ($t:ident) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const TWO: Self = 2.0;

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
            #[inline] fn abs(self) -> Self { $t::abs(self) }
            #[inline] fn sqrt(self) -> Self { $t::sqrt(self) }
            #[inline] fn powf(self, n: Self) -> Self { $t::powf(self, n) }
            #[inline] fn recip(self) -> Self { $t::recip(self) }
            #[inline] fn is_nan(self) -> bool { $t::is_nan(self) }
            #[inline] fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
