use serde::Serialize;

use super::assumptions::{ensure_finite, Assumptions, RoiError};
use crate::waste_basis;

/// 부서 단위 연간 영향 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentImpact {
    /// 1인당 부담 포함 인건비
    pub burdened_cost_per_person: f64,
    /// 1인당 연간 근무 시간 [h]
    pub annual_hours_per_person: f64,
    /// 부담 포함 시간당 단가
    pub hourly_rate: f64,
    /// 부서 전체 부담 포함 인건비
    pub total_department_cost: f64,
    /// 부서 전체 연간 근무 시간 [h]
    pub total_hours: f64,
    /// 부서 전체 낭비 시간 [h]
    pub wasted_hours_total: f64,
    /// 개선으로 회수하는 시간 [h]
    pub saved_hours: f64,
    /// 개선 후에도 남는 낭비 시간 [h]
    pub remaining_waste_hours: f64,
    /// 낭비를 제외한 생산 시간 [h]
    pub productive_hours: f64,
    /// 연간 절감액
    pub annual_savings: f64,
    /// 회수 인력 환산(FTE)
    pub fte_recovered: f64,
    /// 1인당 주당 낭비 시간 [h/week]
    pub weekly_waste_hours_per_person: f64,
}

/// 용량 막대 그래프 한 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacitySegment {
    Productive,
    Saved,
    RemainingWaste,
}

impl DepartmentImpact {
    /// 생산/회수/잔여 낭비 시간 구간. 합계는 부서 전체 근무 시간과 같다.
    pub fn capacity_breakdown(&self) -> [(CapacitySegment, f64); 3] {
        [
            (CapacitySegment::Productive, self.productive_hours),
            (CapacitySegment::Saved, self.saved_hours),
            (CapacitySegment::RemainingWaste, self.remaining_waste_hours),
        ]
    }
}

/// 1인당 단가와 부서 전체 낭비/회수 시간을 계산한다.
pub fn department_impact(a: &Assumptions) -> Result<DepartmentImpact, RoiError> {
    a.validate()?;

    let headcount = f64::from(a.num_employees);
    let burdened_cost_per_person = ensure_finite(
        "burdened_cost_per_person",
        a.annual_salary * (1.0 + a.fringe_rate),
    )?;
    let annual_hours_per_person = a.annual_hours_per_person();
    let hourly_rate = ensure_finite("hourly_rate", burdened_cost_per_person / annual_hours_per_person)?;
    let total_department_cost =
        ensure_finite("total_department_cost", burdened_cost_per_person * headcount)?;

    // 생산 시간과 잔여 낭비는 같은 합계에서 빼서 구해야 분할 합이 맞는다.
    let total_hours = ensure_finite("total_hours", annual_hours_per_person * headcount)?;
    let wasted_hours_total = annual_hours_per_person * a.waste_fraction * headcount;
    let saved_hours = wasted_hours_total * a.improvement_fraction;
    let remaining_waste_hours = wasted_hours_total - saved_hours;
    let productive_hours = total_hours - wasted_hours_total;

    let annual_savings = ensure_finite("annual_savings", saved_hours * hourly_rate)?;
    let fte_recovered = saved_hours / annual_hours_per_person;
    let weekly_waste_hours_per_person =
        waste_basis::fraction_to_weekly_hours(a.waste_fraction, a.work_days, a.daily_hours)?;

    Ok(DepartmentImpact {
        burdened_cost_per_person,
        annual_hours_per_person,
        hourly_rate,
        total_department_cost,
        total_hours,
        wasted_hours_total,
        saved_hours,
        remaining_waste_hours,
        productive_hours,
        annual_savings,
        fte_recovered,
        weekly_waste_hours_per_person,
    })
}
