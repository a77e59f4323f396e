//! 財務計算（預算準則）

use rust_decimal::Decimal;
use ssf_core::{DomainConstants, ProjectParameters, Result, SsfError};

use crate::clamp_score;

/// 財務計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialPlan {
    /// 專案總費用：基底 + 土建 + 太陽能 + 應急準備金
    pub total_cost: Decimal,
    /// 每月撥款額
    pub monthly_disbursement: Decimal,
    /// 逐月餘額表，長度 = 施工月數
    pub monthly_balance: Vec<Decimal>,
    /// 財務可行
    pub viable: bool,
    /// 財務評分（反向），已夾取到 [0, 1]
    pub score: Decimal,
}

/// 財務計算器
pub struct FinanceCalculator;

impl FinanceCalculator {
    /// 彙總費用並推導逐月現金流
    pub fn calculate(
        civil_cost: Decimal,
        solar_cost: Decimal,
        params: &ProjectParameters,
        consts: &DomainConstants,
    ) -> Result<FinancialPlan> {
        let total_cost = consts.base_cost + civil_cost + solar_cost + consts.contingency;

        if total_cost <= Decimal::ZERO {
            return Err(SsfError::DegenerateComputation(format!(
                "專案總費用非正（{}），無法評分",
                total_cost
            )));
        }

        let monthly_disbursement = if params.construction_months > 0 {
            (total_cost - params.initial_budget) / Decimal::from(params.construction_months)
        } else {
            Decimal::ZERO
        };

        // 逐月餘額：遞減至零後封底，不出現負值
        let monthly_balance: Vec<Decimal> = (1..=params.construction_months)
            .map(|month| {
                (params.initial_budget - monthly_disbursement * Decimal::from(month))
                    .max(Decimal::ZERO)
            })
            .collect();

        let viable =
            total_cost <= consts.max_total_budget && monthly_disbursement >= Decimal::ZERO;
        // 反向評分：費用越低越好
        let score = clamp_score(consts.max_total_budget / total_cost);

        Ok(FinancialPlan {
            total_cost,
            monthly_disbursement,
            monthly_balance,
            viable,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_plan() {
        // 4_450_000 + 2_800_000 + 450_000 + 200_000 = 7_900_000
        let params = ProjectParameters::default();
        let consts = DomainConstants::default();

        let plan = FinanceCalculator::calculate(
            Decimal::from(2_800_000),
            Decimal::from(450_000),
            &params,
            &consts,
        )
        .unwrap();

        assert_eq!(plan.total_cost, Decimal::from(7_900_000));
        // (7_900_000 - 7_000_000) / 20 = 45_000
        assert_eq!(plan.monthly_disbursement, Decimal::from(45_000));
        assert_eq!(plan.monthly_balance.len(), 20);
        assert_eq!(plan.monthly_balance[0], Decimal::from(6_955_000));
        assert_eq!(
            plan.monthly_balance.last().copied(),
            Some(Decimal::from(6_100_000))
        );
        assert!(plan.viable);
        // 8_000_000 / 7_900_000 > 1，夾取後得滿分
        assert_eq!(plan.score, Decimal::ONE);
    }

    #[test]
    fn test_over_budget_not_viable() {
        let params = ProjectParameters::default();
        let consts = DomainConstants::default();

        let plan = FinanceCalculator::calculate(
            Decimal::from(3_500_000),
            Decimal::from(500_000),
            &params,
            &consts,
        )
        .unwrap();

        // 總費用 8_650_000 超過 8_000_000 上限
        assert_eq!(plan.total_cost, Decimal::from(8_650_000));
        assert!(!plan.viable);
        assert!(plan.score < Decimal::ONE);
        assert!(plan.score > Decimal::ZERO);
    }

    #[test]
    fn test_balance_depletes_and_floors_at_zero() {
        // 初始預算 1_000_000，12 個月：餘額兩個月內歸零後持平
        let params = ProjectParameters::default()
            .with_initial_budget(Decimal::from(1_000_000))
            .with_construction_months(12);
        let consts = DomainConstants::default();

        let plan = FinanceCalculator::calculate(
            Decimal::from(2_800_000),
            Decimal::from(450_000),
            &params,
            &consts,
        )
        .unwrap();

        assert!(plan.monthly_disbursement > Decimal::ZERO);
        assert_eq!(plan.monthly_balance.len(), 12);

        // 非遞增且永不為負
        for window in plan.monthly_balance.windows(2) {
            assert!(window[1] <= window[0]);
        }
        for balance in &plan.monthly_balance {
            assert!(*balance >= Decimal::ZERO);
        }

        // 末月餘額 = max(initial - disbursement × 12, 0)
        let expected_last = (Decimal::from(1_000_000)
            - plan.monthly_disbursement * Decimal::from(12))
        .max(Decimal::ZERO);
        assert_eq!(plan.monthly_balance.last().copied(), Some(expected_last));
        assert_eq!(plan.monthly_balance.last().copied(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_negative_disbursement_not_viable() {
        // 初始預算超過總費用：撥款額為負，財務判定不可行
        let params = ProjectParameters::default()
            .with_initial_budget(Decimal::from(9_500_000));
        let consts = DomainConstants::default();

        let plan = FinanceCalculator::calculate(
            Decimal::from(2_800_000),
            Decimal::from(450_000),
            &params,
            &consts,
        )
        .unwrap();

        assert!(plan.monthly_disbursement < Decimal::ZERO);
        assert!(!plan.viable);
    }

    #[test]
    fn test_non_positive_total_cost_is_degenerate() {
        // 病態輸入：巨額負土建費用使總費用非正
        let params = ProjectParameters::default();
        let consts = DomainConstants::default();

        let result = FinanceCalculator::calculate(
            Decimal::from(-10_000_000),
            Decimal::ZERO,
            &params,
            &consts,
        );

        assert!(matches!(result, Err(SsfError::DegenerateComputation(_))));
    }
}
