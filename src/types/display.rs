// src/types/display.rs
//
// 分数の表示ロジック
//
// 形式は `|分子|/|分母|`。値が非負と判定されない場合は先頭に `-` を付ける。
// 両方の表現で同じ規則を使う。

use super::raw::RawRational;
use super::simplified::SimplifiedRational;
use super::Int;
use crate::rational::Rational;
use num_traits::{CheckedNeg, Zero};
use std::fmt;

impl<T: Int> fmt::Display for RawRational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_fraction(f)
    }
}

impl<T: Int> fmt::Display for SimplifiedRational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_fraction(f)
    }
}

pub(crate) fn write_fraction<T: Int>(
    f: &mut fmt::Formatter<'_>,
    negative: bool,
    numerator: T,
    denominator: T,
) -> fmt::Result {
    if negative {
        f.write_str("-")?;
    }
    write_magnitude(f, numerator)?;
    f.write_str("/")?;
    write_magnitude(f, denominator)
}

/// 符号を除いた10進表記
fn write_magnitude<T: Int>(f: &mut fmt::Formatter<'_>, n: T) -> fmt::Result {
    if n >= T::zero() {
        return write!(f, "{}", n);
    }
    match n.checked_neg() {
        Some(abs) => write!(f, "{}", abs),
        // T::MIN
        None => f.write_str(n.to_string().trim_start_matches('-')),
    }
}
