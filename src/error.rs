// src/error.rs
//
// 分数型のエラー型定義
// 生成時および gcd / simplify の引数検証エラーを統一的に管理
//
// エラーの種類は InvalidArgument のみ。
// すべて呼び出し元へ同期的に返され、内部で回復することはない。

use std::fmt;

pub type Result<T> = std::result::Result<T, FractionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// 引数が契約を満たさない（分母が0、gcd の定義域外など）
    InvalidArgument(&'static str),
}

impl FractionError {
    pub fn invalid_argument(reason: &'static str) -> Self {
        log::debug!("rejected argument: {}", reason);
        FractionError::InvalidArgument(reason)
    }

    /// 分母0による生成エラー
    pub fn zero_denominator() -> Self {
        Self::invalid_argument("denominator must not be zero")
    }

    pub fn reason(&self) -> &'static str {
        match self {
            FractionError::InvalidArgument(reason) => reason,
        }
    }
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for FractionError {}
