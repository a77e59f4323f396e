//! # SSF Core
//!
//! 可持續學校建設可行性評估：核心資料模型與類型定義

pub mod banding;
pub mod constants;
pub mod params;
pub mod report;

// Re-export 主要類型
pub use banding::{Band, ScorePolarity, SpaceGrade};
pub use constants::DomainConstants;
pub use params::ProjectParameters;
pub use report::FeasibilityReport;

use rust_decimal::Decimal;

/// 可行性評估錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SsfError {
    #[error("參數超出定義域: {field} = {value}（要求 {expected}）")]
    InvalidParameter {
        field: &'static str,
        value: Decimal,
        expected: &'static str,
    },

    #[error("計算退化: {0}")]
    DegenerateComputation(String),
}

pub type Result<T> = std::result::Result<T, SsfError>;
