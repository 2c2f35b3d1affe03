//! 固定幅整数の分子・分母による正確な分数型。
//!
//! 2つの表現がある:
//!
//! - [`RawRational`]: 生成時の分子・分母をそのまま保持する
//! - [`SimplifiedRational`]: 生成時に最大公約数で約分した値を保持する
//!
//! どちらも [`Rational`] トレイトを実装し、`construct` によって
//! 汎用コードからでも同じ表現の値を生成できる。
//!
//! ```
//! use fraction_core::{Rational, RawRational, SimplifiedRational};
//!
//! let raw = RawRational::new(2, 4).unwrap();
//! let simplified = SimplifiedRational::new(2, 4).unwrap();
//! assert_eq!(raw.to_string(), "2/4");
//! assert_eq!(simplified.to_string(), "1/2");
//! assert_eq!(simplified.negate().unwrap().to_string(), "-1/2");
//! ```

mod error;
mod rational;
mod types;

pub use error::{FractionError, Result};
pub use rational::Rational;
pub use types::raw::RawRational;
pub use types::simplified::{gcd, simplify, simplify_with, SimplifiedRational, ZeroNumerator};
pub use types::Int;
