use core::cmp::Ordering;
use core::fmt::{Debug, Display};

use num_traits::{CheckedAdd, ToPrimitive, Zero};

use crate::error::Error;

/// A trait representing an edge weight (or a distance) which is an integer or a float.
pub trait Weight: Copy + PartialOrd + Zero + ToPrimitive + Debug + Display {
    /// Adds two weights, or returns `None` if the sum is not representable.
    fn checked_add(&self, v: &Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(&self, v: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, v)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(&self, v: &Self) -> Option<Self> {
                    let sum = self + v;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

integer_weight!(i32, i64, u32, u64, usize);
float_weight!(f32, f64);

/// Rejects weights that are negative or cannot be ordered at all.
pub(crate) fn validate<W: Weight>(w: W) -> Result<W, Error> {
    match w.partial_cmp(&W::zero()) {
        None => Err(Error::IncomparableWeight),
        Some(Ordering::Less) => Err(Error::NegativeWeight),
        Some(_) => Ok(w),
    }
}

pub(crate) fn add<W: Weight>(a: W, b: W) -> Result<W, Error> {
    a.checked_add(&b).ok_or(Error::ArithmeticOverflow)
}

/// Sums `weights`, failing instead of wrapping around.
pub(crate) fn sum<W: Weight>(weights: impl IntoIterator<Item = W>) -> Result<W, Error> {
    weights.into_iter().try_fold(W::zero(), add)
}

/// Total order over validated weights.
pub(crate) fn cmp<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
