// src/rational.rs
//
// 分数型の共通インターフェース
// RawRational と SimplifiedRational はこのトレイトを実装し、
// 差分は生成時の約分の有無だけになる。

use crate::error::{FractionError, Result};
use crate::types::{self, display, Int};
use num_traits::{CheckedNeg, Zero};
use std::fmt;

/// 分子・分母を持つ不変の分数値
///
/// `construct` は自身と同じ型の値を生成するファクトリ。
/// 既定メソッドはこれを経由するので、`negate` などの結果は呼び出し元と同じ表現になる。
pub trait Rational: Sized + Copy {
    type Int: Int;

    /// 同じ表現の値を生成する（分母0はエラー、約分規則は実装側に従う）
    fn construct(&self, numerator: Self::Int, denominator: Self::Int) -> Result<Self>;

    fn numerator(&self) -> Self::Int;

    fn denominator(&self) -> Self::Int;

    /// 切り捨て除算 `numerator / denominator` が正かどうか
    ///
    /// 等価判定の前段で使う。真の符号判定ではなく、|分子| < |分母| の値は
    /// 正負にかかわらず false になる。
    fn is_positive_quotient(&self) -> bool {
        types::quotient_is_positive(self.numerator(), self.denominator())
    }

    /// 表示上の負号が付くかどうか: `(分子 > 0) != (分母 > 0)`
    ///
    /// 分子が0の場合は分母が正のとき負号が付く（"-0/5"）。
    fn is_negative(&self) -> bool {
        let zero = Self::Int::zero();
        (self.numerator() > zero) != (self.denominator() > zero)
    }

    /// 符号を反転した値 `-numerator/denominator`
    fn negate(&self) -> Result<Self> {
        let numerator = self
            .numerator()
            .checked_neg()
            .ok_or_else(|| FractionError::invalid_argument("numerator cannot be negated"))?;
        self.construct(numerator, self.denominator())
    }

    /// 逆数 `denominator/numerator`（分子0はエラー）
    fn invert(&self) -> Result<Self> {
        self.construct(self.denominator(), self.numerator())
    }

    /// `|分子|/|分母|`、負なら先頭に `-`
    fn fmt_fraction(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_fraction(f, self.is_negative(), self.numerator(), self.denominator())
    }
}
