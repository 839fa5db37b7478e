//! 계산 결과를 표/텍스트로 출력하기 위한 표시 도우미.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use crate::i18n::{keys, Translator};
use crate::roi::{CapacitySegment, CashFlowProjection, DepartmentImpact, RoiReport};

/// 보고서 머리말에 표시하는 산업군. 계산에는 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    #[default]
    Logistics,
    Manufacturing,
    Retail,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Industry::Logistics => "Logistics Service Provider (LSP)",
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
        }
    }
}

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// 천 단위 구분 기호를 넣어 숫자를 표시한다.
pub fn format_number(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// 통화 기호를 붙인 금액. 음수는 기호 앞에 부호를 둔다. (예: -$1,234)
pub fn format_money(value: f64, symbol: &str, decimals: usize) -> String {
    let n = format_number(value, decimals);
    match n.strip_prefix('-') {
        Some(abs) => format!("-{symbol}{abs}"),
        None => format!("{symbol}{n}"),
    }
}

fn segment_label(tr: &Translator, seg: CapacitySegment) -> &'static str {
    match seg {
        CapacitySegment::Productive => tr.t(keys::REPORT_PRODUCTIVE),
        CapacitySegment::Saved => tr.t(keys::REPORT_SAVED),
        CapacitySegment::RemainingWaste => tr.t(keys::REPORT_REMAINING_WASTE),
    }
}

fn render_department(
    out: &mut String,
    d: &DepartmentImpact,
    employees: u32,
    tr: &Translator,
    symbol: &str,
) -> fmt::Result {
    writeln!(
        out,
        "{}: {} ({} {})",
        tr.t(keys::REPORT_DEPT_COST),
        format_money(d.total_department_cost, symbol, 0),
        tr.t(keys::REPORT_EMPLOYEES),
        employees
    )?;
    writeln!(
        out,
        "{}: {}",
        tr.t(keys::REPORT_ANNUAL_SAVINGS),
        format_money(d.annual_savings, symbol, 2)
    )?;
    writeln!(
        out,
        "{}: {}/h",
        tr.t(keys::REPORT_HOURLY_RATE),
        format_money(d.hourly_rate, symbol, 2)
    )?;
    writeln!(out, "{}: {:.2}", tr.t(keys::REPORT_FTE), d.fte_recovered)?;
    writeln!(
        out,
        "{}: {} h",
        tr.t(keys::REPORT_HOURS_SAVED),
        format_number(d.saved_hours, 0)
    )?;
    writeln!(
        out,
        "{}: {:.1} h",
        tr.t(keys::REPORT_WEEKLY_WASTE),
        d.weekly_waste_hours_per_person
    )?;
    writeln!(out, "{}", tr.t(keys::REPORT_CAPACITY))?;
    for (seg, hours) in d.capacity_breakdown() {
        writeln!(out, "  {:<16} {:>14}", segment_label(tr, seg), format_number(hours, 0))?;
    }
    Ok(())
}

fn render_projection(
    out: &mut String,
    p: &CashFlowProjection,
    tr: &Translator,
    symbol: &str,
) -> fmt::Result {
    let payback = match p.payback_months {
        Some(m) => format!("{m:.1} {}", tr.t(keys::REPORT_MONTHS)),
        None => tr.t(keys::UNDEFINED).to_string(),
    };
    let break_even = match p.break_even_year() {
        Some(year) => p.years[year].label(),
        None => tr.t(keys::REPORT_BREAK_EVEN_NONE).to_string(),
    };
    writeln!(out, "{}: {}", tr.t(keys::REPORT_NPV), format_money(p.npv, symbol, 0))?;
    writeln!(out, "{}: {}", tr.t(keys::REPORT_PAYBACK), payback)?;
    writeln!(out, "{}: {}", tr.t(keys::REPORT_BREAK_EVEN), break_even)?;
    writeln!(
        out,
        "{}: {}",
        tr.t(keys::REPORT_STEADY_STATE),
        format_money(p.steady_state_saving, symbol, 0)
    )?;
    writeln!(
        out,
        "{}: {}",
        tr.t(keys::REPORT_YEAR_ONE_SAVING),
        format_money(p.year_one_saving(), symbol, 0)
    )?;
    writeln!(
        out,
        "{}: {}",
        tr.t(keys::REPORT_INTERNAL_COST),
        format_money(p.internal_resource_cost, symbol, 0)
    )?;
    writeln!(out, "{}", tr.t(keys::REPORT_CASH_FLOW))?;
    writeln!(
        out,
        "{:<14}{:>16}{:>16}{:>16}{:>16}",
        tr.t(keys::REPORT_COL_YEAR),
        tr.t(keys::REPORT_COL_INVESTMENT),
        tr.t(keys::REPORT_COL_GROSS),
        tr.t(keys::REPORT_COL_NET),
        tr.t(keys::REPORT_COL_CUMULATIVE)
    )?;
    for y in &p.years {
        writeln!(
            out,
            "{:<14}{:>16}{:>16}{:>16}{:>16}",
            y.label(),
            format_money(y.investment, symbol, 0),
            format_money(y.gross_savings, symbol, 0),
            format_money(y.net_cash_flow, symbol, 0),
            format_money(y.cumulative_cash_flow, symbol, 0)
        )?;
    }
    Ok(())
}

/// 결과를 사람이 읽는 표 형태로 만든다. 투자 전망이 있으면 3개년 보고서로 출력한다.
pub fn render_table(
    report: &RoiReport,
    industry: Industry,
    tr: &Translator,
    symbol: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match &report.projection {
        None => writeln!(out, "{}", tr.t(keys::REPORT_SINGLE_HEADING))?,
        Some(_) => writeln!(out, "{} {}", tr.t(keys::REPORT_THREE_YEAR_HEADING), industry.label())?,
    }
    render_department(&mut out, &report.department, report.assumptions.num_employees, tr, symbol)?;
    if let Some(p) = &report.projection {
        render_projection(&mut out, p, tr, symbol)?;
    }
    Ok(out)
}

/// 외부 표시 계층에 넘기기 위한 JSON 문자열.
pub fn render_json(report: &RoiReport, industry: Industry) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        industry: &'a str,
        #[serde(flatten)]
        report: &'a RoiReport,
    }
    serde_json::to_string_pretty(&Envelope {
        industry: industry.label(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1_650.0, 0), "1,650");
        assert_eq!(format_number(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-165_000.0, 0), "-165,000");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_number(-0.0001, 0), "0");
    }

    #[test]
    fn money_sign_before_symbol() {
        assert_eq!(format_money(150_000.0, "$", 0), "$150,000");
        assert_eq!(format_money(-7_500.0, "₩", 0), "-₩7,500");
    }
}
