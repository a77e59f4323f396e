//! SSF CLI
//!
//! 可持續學校可行性評估的命令行前端：每個設計參數一個旗標，
//! 預設值即原始工具的預設參數組。評估本身不會失敗，退出碼 0；
//! 非零退出碼保留給越界/無效輸入。

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use ssf_calc::FeasibilityEngine;
use ssf_core::{Band, FeasibilityReport, ProjectParameters, ScorePolarity, SpaceGrade};

/// 可持續學校建設可行性評估
#[derive(Parser)]
#[command(name = "ssf")]
#[command(version)]
#[command(about = "評估學校建設方案的教學、電力與財務可行性")]
struct Cli {
    /// 常規教室數量
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(12..=28))]
    classrooms: u32,

    /// 創客空間 + 菜園面積（m²）
    #[arg(long, default_value = "400")]
    maker_garden_m2: Decimal,

    /// 運動場面積（m²）
    #[arg(long, default_value = "600")]
    court_m2: Decimal,

    /// 太陽能板效率（%）
    #[arg(long, default_value = "22.0")]
    efficiency_pct: Decimal,

    /// 每 kWp 安裝價格
    #[arg(long, default_value = "4000")]
    price_per_kwp: Decimal,

    /// 初始預算（貨幣單位）
    #[arg(long, default_value = "7000000", conflicts_with = "budget_millions")]
    initial_budget: Decimal,

    /// 初始預算（百萬，於邊界處換算成貨幣單位）
    #[arg(long)]
    budget_millions: Option<Decimal>,

    /// 施工工期（月）
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(12..=24))]
    months: u32,

    /// 以 JSON 輸出完整報告
    #[arg(long)]
    json: bool,

    /// 日誌詳細程度（-v、-vv、-vvv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_params(cli: &Cli) -> ProjectParameters {
    let params = ProjectParameters::default()
        .with_classroom_count(cli.classrooms)
        .with_maker_garden_area_m2(cli.maker_garden_m2)
        .with_sports_court_area_m2(cli.court_m2)
        .with_panel_efficiency_pct(cli.efficiency_pct)
        .with_price_per_kwp(cli.price_per_kwp)
        .with_construction_months(cli.months);

    match cli.budget_millions {
        Some(millions) => params.with_initial_budget_millions(millions),
        None => params.with_initial_budget(cli.initial_budget),
    }
}

fn gauge_line(title: &str, score: Decimal, polarity: ScorePolarity, viable: bool) -> String {
    let band = Band::classify(score, polarity);
    let pct = (score * Decimal::from(100)).round_dp(1);
    format!(
        "  {:<12} {:>6}%  儀表 {}  {}",
        title,
        pct,
        band.label(),
        if viable { "可行" } else { "須調整" }
    )
}

fn print_summary(report: &FeasibilityReport) {
    println!("=== 可持續學校可行性報告 ===\n");

    println!("評分儀表:");
    println!(
        "{}",
        gauge_line(
            "教學",
            report.pedagogy_score,
            ScorePolarity::Direct,
            report.pedagogy_viable
        )
    );
    println!(
        "{}",
        gauge_line(
            "太陽能",
            report.electrical_score,
            ScorePolarity::Inverted,
            report.electrical_viable
        )
    );
    println!(
        "{}",
        gauge_line(
            "預算",
            report.financial_score,
            ScorePolarity::Inverted,
            report.financial_viable
        )
    );
    println!(
        "{}",
        gauge_line(
            "專案總體",
            report.overall_score,
            ScorePolarity::Direct,
            report.overall_approved
        )
    );

    println!("\n面積分布 (m²):");
    println!("  教室           {:>10}", report.classroom_area_m2.round_dp(0));
    println!(
        "  創客 + 菜園    {:>10}",
        (report.used_area_m2 - report.classroom_area_m2 - report.fixed_area_m2).round_dp(0)
    );
    println!("  固定設施       {:>10}", report.fixed_area_m2.round_dp(0));
    println!(
        "  流通/擴建      {:>10}  {}",
        report.circulation_display_m2().round_dp(0),
        SpaceGrade::classify(report.circulation_area_m2).label()
    );
    println!("  已用合計       {:>10}", report.used_area_m2.round_dp(0));

    println!("\n太陽能系統:");
    println!(
        "  年耗電量       {:>10} kWh",
        report.annual_consumption_kwh.round_dp(0)
    );
    println!(
        "  所需功率       {:>10} kWp",
        report.required_power_kwp.round_dp(1)
    );
    println!("  板面積約       {:>10} m²", report.panel_area_m2.round_dp(0));
    println!("  系統費用       {:>10}", report.solar_cost.round_dp(0));

    println!("\n土建結構:");
    println!("  鋼筋混凝土     {:>10} m³", report.concrete_m3.round_dp(0));
    println!("  鋼材           {:>10} kg", report.steel_kg.round_dp(0));
    println!("  結構費用       {:>10}", report.civil_cost.round_dp(0));

    println!("\n財務:");
    println!("  專案總費用     {:>10}", report.total_cost.round_dp(0));
    println!(
        "  每月撥款       {:>10}",
        report.monthly_disbursement.round_dp(0)
    );
    if let Some(balance) = report.final_balance() {
        println!("  期末餘額       {:>10}", balance.round_dp(0));
    }

    println!();
    if report.overall_approved {
        println!("專案獲市政核准：所有指標綠燈！");
    } else {
        println!("未核准：請調整參數直到所有指標轉綠。");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = build_params(&cli);
    let engine = FeasibilityEngine::default();
    let report = engine.evaluate(&params).context("可行性評估失敗")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}
