//! # SSF — 可持續學校建設可行性評估
//!
//! Facade crate：重新導出核心模型與計算引擎，展示層只需依賴本 crate。

pub use ssf_calc::{
    AreaBreakdown, AreaCalculator, EnergyCalculator, EnergySizing, FeasibilityEngine,
    FinanceCalculator, FinancialPlan, StructuralQuantities, StructureCalculator,
};
pub use ssf_core::{
    Band, DomainConstants, FeasibilityReport, ProjectParameters, Result, ScorePolarity,
    SpaceGrade, SsfError,
};
