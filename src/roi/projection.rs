use serde::Serialize;

use super::assumptions::{ensure_finite, Investment, RoiError};

/// 분석 기간 [년]
pub const HORIZON_YEARS: usize = 3;

/// 연차별 정착 곡선(1~3년차). 정상 상태 절감액 대비 실현 비율.
pub const ADOPTION_CURVE: [f64; HORIZON_YEARS] = [0.40, 0.85, 1.00];

/// 현금흐름 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowYear {
    /// 0 = 투자 시점
    pub year: usize,
    /// 투자/운영 비용 유출 (음수)
    pub investment: f64,
    /// 총 절감액
    pub gross_savings: f64,
    /// 순현금흐름
    pub net_cash_flow: f64,
    /// 누적 순현금흐름
    pub cumulative_cash_flow: f64,
}

impl CashFlowYear {
    pub fn label(&self) -> String {
        if self.year == 0 {
            "Year 0 (Now)".to_string()
        } else {
            format!("Year {}", self.year)
        }
    }
}

/// 3개년 현금흐름 전망과 NPV/회수기간.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowProjection {
    /// 완전 정착 시 연간 절감액
    pub steady_state_saving: f64,
    /// 내부 인력 투입 가치
    pub internal_resource_cost: f64,
    /// 0년차 총 선투자액
    pub total_upfront: f64,
    /// 연간 반복 비용
    pub recurring_annual_cost: f64,
    /// 할인율
    pub discount_rate: f64,
    /// 0~3년차 현금흐름
    pub years: [CashFlowYear; HORIZON_YEARS + 1],
    /// 순현재가치
    pub npv: f64,
    /// 회수기간 [개월]. 1년차 절감액이 0 이하이면 정의되지 않는다.
    pub payback_months: Option<f64>,
}

impl CashFlowProjection {
    /// 1년차 절감액(정착 곡선 적용)
    pub fn year_one_saving(&self) -> f64 {
        self.years[1].gross_savings
    }

    /// 회수기간을 반드시 필요로 하는 호출자를 위한 변형.
    pub fn payback_months_checked(&self) -> Result<f64, RoiError> {
        self.payback_months.ok_or_else(|| {
            RoiError::invalid(
                "payback_months",
                "1년차 절감액이 0 이하라 회수기간을 정의할 수 없습니다.",
            )
        })
    }

    /// 최초로 누적 현금흐름이 0 이상이 되는 연차.
    pub fn break_even_year(&self) -> Option<usize> {
        self.years
            .iter()
            .find(|y| y.cumulative_cash_flow >= 0.0)
            .map(|y| y.year)
    }
}

/// 순현금흐름 열을 할인율로 할인해 합산한다. (0년차는 할인하지 않음)
pub fn npv(discount_rate: f64, net_cash_flows: &[f64]) -> f64 {
    net_cash_flows
        .iter()
        .enumerate()
        .map(|(n, cf)| cf / (1.0 + discount_rate).powi(n as i32))
        .sum()
}

/// 정상 상태 절감액에 정착 곡선을 적용해 3개년 현금흐름을 전망한다.
pub fn project_cash_flows(
    steady_state_saving: f64,
    investment: &Investment,
) -> Result<CashFlowProjection, RoiError> {
    investment.validate()?;
    if !(steady_state_saving >= 0.0 && steady_state_saving.is_finite()) {
        return Err(RoiError::invalid(
            "steady_state_saving",
            "정상 상태 절감액은 0 이상이어야 합니다.",
        ));
    }

    let internal_resource_cost =
        ensure_finite("internal_resource_cost", investment.internal_resource_cost())?;
    let total_upfront = ensure_finite("total_upfront", investment.total_upfront())?;
    let recurring = investment.recurring_annual_cost;

    let mut years = [CashFlowYear {
        year: 0,
        investment: -total_upfront,
        gross_savings: 0.0,
        net_cash_flow: -total_upfront,
        cumulative_cash_flow: -total_upfront,
    }; HORIZON_YEARS + 1];

    let mut cumulative = -total_upfront;
    for (i, ratio) in ADOPTION_CURVE.iter().enumerate() {
        let gross_savings = steady_state_saving * ratio;
        let net_cash_flow = gross_savings - recurring;
        cumulative = ensure_finite("cumulative_cash_flow", cumulative + net_cash_flow)?;
        years[i + 1] = CashFlowYear {
            year: i + 1,
            investment: -recurring,
            gross_savings,
            net_cash_flow,
            cumulative_cash_flow: cumulative,
        };
    }

    let flows: Vec<f64> = years.iter().map(|y| y.net_cash_flow).collect();
    let npv = ensure_finite("npv", npv(investment.discount_rate, &flows))?;

    let year_one = years[1].gross_savings;
    let payback_months = if year_one > 0.0 {
        Some(ensure_finite("payback_months", 12.0 * total_upfront / year_one)?)
    } else {
        None
    };

    Ok(CashFlowProjection {
        steady_state_saving,
        internal_resource_cost,
        total_upfront,
        recurring_annual_cost: recurring,
        discount_rate: investment.discount_rate,
        years,
        npv,
        payback_months,
    })
}
