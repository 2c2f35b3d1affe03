// src/types/raw.rs
//
// 約分しない分数
// 生成時の分子・分母をそのまま保持する。

use super::simplified::SimplifiedRational;
use super::Int;
use crate::error::{FractionError, Result};
use crate::rational::Rational;
use num_traits::Zero;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy)]
pub struct RawRational<T: Int = i32> {
    numerator: T,
    denominator: T,
}

impl<T: Int> RawRational<T> {
    /// `numerator / denominator` を生成する。約分は行わない
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::zero_denominator());
        }
        log::trace!("RawRational::new({}, {})", numerator, denominator);
        Ok(RawRational { numerator, denominator })
    }
}

impl<T: Int> Rational for RawRational<T> {
    type Int = T;

    fn construct(&self, numerator: T, denominator: T) -> Result<Self> {
        RawRational::new(numerator, denominator)
    }

    #[inline]
    fn numerator(&self) -> T {
        self.numerator
    }

    #[inline]
    fn denominator(&self) -> T {
        self.denominator
    }
}

/// 商の正負判定が一致し、かつ分子・分母が完全に一致する場合のみ等しい
///
/// 約分後の比較はしないので 1/2 と 2/4 は等しくない。
impl<T: Int> PartialEq for RawRational<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_positive_quotient() == other.is_positive_quotient()
            && self.numerator == other.numerator
            && self.denominator == other.denominator
    }
}

impl<T: Int> Eq for RawRational<T> {}

impl<T: Int> Hash for RawRational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

/// 表現が異なる値は数値が同じでも等しくない
impl<T: Int> PartialEq<SimplifiedRational<T>> for RawRational<T> {
    fn eq(&self, _other: &SimplifiedRational<T>) -> bool {
        false
    }
}

impl<T: Int> TryFrom<(T, T)> for RawRational<T> {
    type Error = FractionError;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self> {
        RawRational::new(numerator, denominator)
    }
}
