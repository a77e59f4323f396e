//! 評分分級
//!
//! 展示層用的分級工具：只做分類，不參與核准判定。儀表、CLI 摘要、
//! 靜態報表共用同一套規則，避免各自複製閾值。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 評分極性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorePolarity {
    /// 正向：評分越高越好（教學、總體）
    Direct,
    /// 反向：原始量越低越好（費用、功率）
    Inverted,
}

/// 評分分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Good,
    Warning,
    Bad,
}

impl Band {
    /// 依評分與極性分級
    ///
    /// 正向：≥ 0.9 優良，≥ 0.6 注意，其餘不佳。
    /// 反向：≤ 0.4 優良，≤ 0.7 注意，其餘不佳。
    pub fn classify(score: Decimal, polarity: ScorePolarity) -> Self {
        match polarity {
            ScorePolarity::Direct => {
                if score >= Decimal::new(9, 1) {
                    Band::Good
                } else if score >= Decimal::new(6, 1) {
                    Band::Warning
                } else {
                    Band::Bad
                }
            }
            ScorePolarity::Inverted => {
                if score <= Decimal::new(4, 1) {
                    Band::Good
                } else if score <= Decimal::new(7, 1) {
                    Band::Warning
                } else {
                    Band::Bad
                }
            }
        }
    }

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            Band::Good => "優良",
            Band::Warning => "注意",
            Band::Bad => "不佳",
        }
    }
}

/// 流通面積舒適度分級（展示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceGrade {
    /// ≥ 1200 m²
    Excellent,
    /// ≥ 800 m²
    Regular,
    /// < 800 m²
    Insufficient,
}

impl SpaceGrade {
    /// 依流通面積分級
    pub fn classify(circulation_area_m2: Decimal) -> Self {
        if circulation_area_m2 >= Decimal::from(1200) {
            SpaceGrade::Excellent
        } else if circulation_area_m2 >= Decimal::from(800) {
            SpaceGrade::Regular
        } else {
            SpaceGrade::Insufficient
        }
    }

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            SpaceGrade::Excellent => "充裕",
            SpaceGrade::Regular => "合格",
            SpaceGrade::Insufficient => "不足",
        }
    }
}
