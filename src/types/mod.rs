// src/types/mod.rs
//
// 固定幅整数による分数型
//
// ============================================================================
// 2つの表現
// ============================================================================
//
// | 入力        | RawRational | SimplifiedRational |
// |-------------|-------------|--------------------|
// | (2, 4)      | 2/4         | 1/2                |
// | (-10, 100)  | -10/100     | -1/10              |
// | (10, -100)  | 10/-100     | 1/-10              |
// | (0, 10)     | 0/10        | 0/10 (Preserve)    |
//
// 符号は分子・分母それぞれが独立に保持する。分母を正に揃える正規化は行わない。
// 値の符号は sign(分子) * sign(分母)。

pub mod raw;
pub mod simplified;
pub mod display;

use num_traits::{CheckedNeg, PrimInt, Signed, Zero};
use std::fmt;
use std::hash::Hash;

/// 分子・分母に使える固定幅の符号付き整数
///
/// i8 から i128、isize までのプリミティブ整数が該当する。
pub trait Int: PrimInt + Signed + CheckedNeg + Hash + fmt::Display + fmt::Debug {}

impl<T> Int for T where T: PrimInt + Signed + CheckedNeg + Hash + fmt::Display + fmt::Debug {}

/// 切り捨て除算の商が正かどうか
///
/// 真の符号判定ではない。|分子| < |分母| のとき商は 0 になり、正負どちらでも false。
/// `T::MIN / -1` はオーバーフローするが、真の商は正なので true を返す。
#[inline]
pub(crate) fn quotient_is_positive<T: Int>(numerator: T, denominator: T) -> bool {
    numerator
        .checked_div(&denominator)
        .map_or(true, |q| q > T::zero())
}

/// 絶対値。`T::MIN` は表せないので負のまま返す（gcd 側で拒否される）
#[inline]
pub(crate) fn magnitude_or_self<T: Int>(x: T) -> T {
    if x < T::zero() {
        x.checked_neg().unwrap_or(x)
    } else {
        x
    }
}

/// |a| == |b| を abs を計算せずに判定
#[inline]
pub(crate) fn same_magnitude<T: Int>(a: T, b: T) -> bool {
    a == b || a.checked_neg() == Some(b)
}
