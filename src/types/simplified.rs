// src/types/simplified.rs
//
// 約分済みの分数
// 生成時に gcd で約分した分子・分母を保持する。
// 符号は分子・分母それぞれに残す: simplify(-10, 100) = (-1, 10), simplify(10, -100) = (1, -10)

use super::raw::RawRational;
use super::{magnitude_or_self, same_magnitude, Int};
use crate::error::{FractionError, Result};
use crate::rational::Rational;
use num_traits::{One, Zero};
use std::hash::{Hash, Hasher};

/// 分子が0の場合の約分方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroNumerator {
    /// 分母をそのまま残す: simplify(0, 10) = (0, 10)
    Preserve,
    /// 0/1 に正規化する: simplify(0, 10) = (0, 1)
    Canonical,
}

impl Default for ZeroNumerator {
    fn default() -> Self {
        if cfg!(feature = "canonical-zero") {
            ZeroNumerator::Canonical
        } else {
            ZeroNumerator::Preserve
        }
    }
}

/// 最大公約数（ユークリッドの互除法）
///
/// `a <= 0` または `b < 0` はエラー。負の値は呼び出し側で絶対値にしておくこと。
pub fn gcd<T: Int>(a: T, b: T) -> Result<T> {
    if a <= T::zero() || b < T::zero() {
        return Err(FractionError::invalid_argument("gcd requires a > 0 and b >= 0"));
    }
    log::trace!("gcd({}, {})", a, b);

    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    Ok(a)
}

/// 既定の方針で約分する
///
/// 例: `simplify(10, 100) = (1, 10)`
pub fn simplify<T: Int>(numerator: T, denominator: T) -> Result<(T, T)> {
    simplify_with(numerator, denominator, ZeroNumerator::default())
}

/// 分子0の扱いを指定して約分する
pub fn simplify_with<T: Int>(numerator: T, denominator: T, zero: ZeroNumerator) -> Result<(T, T)> {
    if denominator.is_zero() {
        return Err(FractionError::zero_denominator());
    }

    if numerator.is_zero() {
        return Ok(match zero {
            ZeroNumerator::Preserve => (numerator, denominator),
            ZeroNumerator::Canonical => (T::zero(), T::one()),
        });
    }

    let divider = gcd(magnitude_or_self(numerator), magnitude_or_self(denominator))?;
    let simplified = (numerator / divider, denominator / divider);
    log::trace!(
        "simplify({}, {}) = ({}, {})",
        numerator,
        denominator,
        simplified.0,
        simplified.1
    );
    Ok(simplified)
}

#[derive(Debug, Clone, Copy)]
pub struct SimplifiedRational<T: Int = i32> {
    numerator: T,
    denominator: T,
    zero: ZeroNumerator,
}

impl<T: Int> SimplifiedRational<T> {
    /// `numerator / denominator` を約分して生成する
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        Self::with_policy(numerator, denominator, ZeroNumerator::default())
    }

    /// 分子0の方針を指定して生成する。`construct` で作った値も同じ方針を引き継ぐ
    pub fn with_policy(numerator: T, denominator: T, zero: ZeroNumerator) -> Result<Self> {
        let (numerator, denominator) = simplify_with(numerator, denominator, zero)?;
        log::trace!("SimplifiedRational::new -> {}/{}", numerator, denominator);
        Ok(SimplifiedRational {
            numerator,
            denominator,
            zero,
        })
    }

    pub fn zero_policy(&self) -> ZeroNumerator {
        self.zero
    }
}

impl<T: Int> Rational for SimplifiedRational<T> {
    type Int = T;

    fn construct(&self, numerator: T, denominator: T) -> Result<Self> {
        SimplifiedRational::with_policy(numerator, denominator, self.zero)
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

/// 商の正負判定が一致し、かつ |分子| と |分母| が一致する場合に等しい
///
/// 約分済みなので 1/2 と 2/4 は等しい。分子0の方針は比較に含めない。
impl<T: Int> PartialEq for SimplifiedRational<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_positive_quotient() == other.is_positive_quotient()
            && same_magnitude(self.numerator, other.numerator)
            && same_magnitude(self.denominator, other.denominator)
    }
}

impl<T: Int> Eq for SimplifiedRational<T> {}

impl<T: Int> Hash for SimplifiedRational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_positive_quotient().hash(state);
        magnitude_or_self(self.numerator).hash(state);
        magnitude_or_self(self.denominator).hash(state);
    }
}

impl<T: Int> PartialEq<RawRational<T>> for SimplifiedRational<T> {
    fn eq(&self, _other: &RawRational<T>) -> bool {
        false
    }
}

impl<T: Int> TryFrom<(T, T)> for SimplifiedRational<T> {
    type Error = FractionError;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self> {
        SimplifiedRational::new(numerator, denominator)
    }
}
