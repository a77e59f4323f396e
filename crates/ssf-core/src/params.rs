//! 設計參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, SsfError};

/// 一次評估的可調設計參數
///
/// 每個欄位都有文件化的定義域，`validate()` 在任何推導量計算之前
/// 於邊界處拒絕越界值（fail fast，不產生部分報告）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// 常規教室數量，定義域 12 ..= 28
    pub classroom_count: u32,

    /// 創客空間 + 菜園面積（m²），定義域 300 ..= 1200
    pub maker_garden_area_m2: Decimal,

    /// 運動場面積（m²），定義域 600 ..= 1000
    pub sports_court_area_m2: Decimal,

    /// 太陽能板效率（%），定義域 18 ..= 26
    pub panel_efficiency_pct: Decimal,

    /// 每 kWp 安裝價格（貨幣單位），定義域 3500 ..= 5500
    pub price_per_kwp: Decimal,

    /// 市政初始預算（貨幣單位），必須為正
    ///
    /// 以「百萬」為單位的輸入須先經 [`with_initial_budget_millions`]
    /// 換算，換算不會折疊進核心公式。
    ///
    /// [`with_initial_budget_millions`]: ProjectParameters::with_initial_budget_millions
    pub initial_budget: Decimal,

    /// 施工工期（月），定義域 12 ..= 24
    pub construction_months: u32,
}

impl Default for ProjectParameters {
    /// 原始工具的預設參數組
    fn default() -> Self {
        Self {
            classroom_count: 12,
            maker_garden_area_m2: Decimal::from(400),
            sports_court_area_m2: Decimal::from(600),
            panel_efficiency_pct: Decimal::from(22),
            price_per_kwp: Decimal::from(4000),
            initial_budget: Decimal::from(7_000_000),
            construction_months: 20,
        }
    }
}

impl ProjectParameters {
    /// 建構器模式：設置教室數量
    pub fn with_classroom_count(mut self, count: u32) -> Self {
        self.classroom_count = count;
        self
    }

    /// 建構器模式：設置創客 + 菜園面積（m²）
    pub fn with_maker_garden_area_m2(mut self, area: Decimal) -> Self {
        self.maker_garden_area_m2 = area;
        self
    }

    /// 建構器模式：設置運動場面積（m²）
    pub fn with_sports_court_area_m2(mut self, area: Decimal) -> Self {
        self.sports_court_area_m2 = area;
        self
    }

    /// 建構器模式：設置太陽能板效率（%）
    pub fn with_panel_efficiency_pct(mut self, pct: Decimal) -> Self {
        self.panel_efficiency_pct = pct;
        self
    }

    /// 建構器模式：設置每 kWp 安裝價格
    pub fn with_price_per_kwp(mut self, price: Decimal) -> Self {
        self.price_per_kwp = price;
        self
    }

    /// 建構器模式：設置初始預算（貨幣單位）
    pub fn with_initial_budget(mut self, budget: Decimal) -> Self {
        self.initial_budget = budget;
        self
    }

    /// 建構器模式：以「百萬」為單位設置初始預算
    ///
    /// 顯式的單位換算步驟：`7.0` → `7_000_000`。
    pub fn with_initial_budget_millions(mut self, millions: Decimal) -> Self {
        self.initial_budget = millions * Decimal::from(1_000_000);
        self
    }

    /// 建構器模式：設置施工工期（月）
    pub fn with_construction_months(mut self, months: u32) -> Self {
        self.construction_months = months;
        self
    }

    /// 驗證所有參數落在文件化定義域內
    pub fn validate(&self) -> Result<()> {
        check_count(
            "classroom_count",
            self.classroom_count,
            12,
            28,
            "12 ..= 28",
        )?;
        check_range(
            "maker_garden_area_m2",
            self.maker_garden_area_m2,
            300,
            1200,
            "300 ..= 1200",
        )?;
        check_range(
            "sports_court_area_m2",
            self.sports_court_area_m2,
            600,
            1000,
            "600 ..= 1000",
        )?;
        check_range(
            "panel_efficiency_pct",
            self.panel_efficiency_pct,
            18,
            26,
            "18 ..= 26",
        )?;
        check_range(
            "price_per_kwp",
            self.price_per_kwp,
            3500,
            5500,
            "3500 ..= 5500",
        )?;

        if self.initial_budget <= Decimal::ZERO {
            return Err(SsfError::InvalidParameter {
                field: "initial_budget",
                value: self.initial_budget,
                expected: "> 0",
            });
        }

        check_count(
            "construction_months",
            self.construction_months,
            12,
            24,
            "12 ..= 24",
        )?;

        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: Decimal,
    min: i64,
    max: i64,
    expected: &'static str,
) -> Result<()> {
    if value < Decimal::from(min) || value > Decimal::from(max) {
        return Err(SsfError::InvalidParameter {
            field,
            value,
            expected,
        });
    }
    Ok(())
}

fn check_count(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
    expected: &'static str,
) -> Result<()> {
    if value < min || value > max {
        return Err(SsfError::InvalidParameter {
            field,
            value: Decimal::from(value),
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_params_are_valid() {
        let params = ProjectParameters::default();

        assert_eq!(params.classroom_count, 12);
        assert_eq!(params.maker_garden_area_m2, Decimal::from(400));
        assert_eq!(params.sports_court_area_m2, Decimal::from(600));
        assert_eq!(params.panel_efficiency_pct, Decimal::from(22));
        assert_eq!(params.price_per_kwp, Decimal::from(4000));
        assert_eq!(params.initial_budget, Decimal::from(7_000_000));
        assert_eq!(params.construction_months, 20);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_builder() {
        let params = ProjectParameters::default()
            .with_classroom_count(28)
            .with_maker_garden_area_m2(Decimal::from(1200))
            .with_panel_efficiency_pct(Decimal::new(185, 1)); // 18.5%

        assert_eq!(params.classroom_count, 28);
        assert_eq!(params.maker_garden_area_m2, Decimal::from(1200));
        assert_eq!(params.panel_efficiency_pct, Decimal::new(185, 1));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_budget_millions_conversion() {
        // 7.5 百萬 → 7_500_000
        let params =
            ProjectParameters::default().with_initial_budget_millions(Decimal::new(75, 1));

        assert_eq!(params.initial_budget, Decimal::from(7_500_000));
    }

    #[rstest]
    #[case::classrooms_low(ProjectParameters::default().with_classroom_count(11), "classroom_count")]
    #[case::classrooms_high(ProjectParameters::default().with_classroom_count(29), "classroom_count")]
    #[case::maker_low(
        ProjectParameters::default().with_maker_garden_area_m2(Decimal::from(299)),
        "maker_garden_area_m2"
    )]
    #[case::court_high(
        ProjectParameters::default().with_sports_court_area_m2(Decimal::from(1001)),
        "sports_court_area_m2"
    )]
    #[case::efficiency_low(
        ProjectParameters::default().with_panel_efficiency_pct(Decimal::new(179, 1)),
        "panel_efficiency_pct"
    )]
    #[case::price_high(
        ProjectParameters::default().with_price_per_kwp(Decimal::from(5501)),
        "price_per_kwp"
    )]
    #[case::budget_zero(
        ProjectParameters::default().with_initial_budget(Decimal::ZERO),
        "initial_budget"
    )]
    #[case::months_low(ProjectParameters::default().with_construction_months(11), "construction_months")]
    fn test_out_of_domain_rejected(
        #[case] params: ProjectParameters,
        #[case] expected_field: &str,
    ) {
        match params.validate() {
            Err(SsfError::InvalidParameter { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("預期 InvalidParameter，得到 {:?}", other),
        }
    }

    #[test]
    fn test_domain_boundaries_accepted() {
        // 定義域端點本身是合法值
        let low = ProjectParameters::default()
            .with_classroom_count(12)
            .with_maker_garden_area_m2(Decimal::from(300))
            .with_sports_court_area_m2(Decimal::from(600))
            .with_panel_efficiency_pct(Decimal::from(18))
            .with_price_per_kwp(Decimal::from(3500))
            .with_construction_months(12);
        assert!(low.validate().is_ok());

        let high = ProjectParameters::default()
            .with_classroom_count(28)
            .with_maker_garden_area_m2(Decimal::from(1200))
            .with_sports_court_area_m2(Decimal::from(1000))
            .with_panel_efficiency_pct(Decimal::from(26))
            .with_price_per_kwp(Decimal::from(5500))
            .with_construction_months(24);
        assert!(high.validate().is_ok());
    }
}
