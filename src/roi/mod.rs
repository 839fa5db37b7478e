//! 부서 생산성 개선 ROI 계산 엔진.
//! 입력 가정값만으로 결과를 산출하며 상태나 입출력을 갖지 않는다.

pub mod assumptions;
pub mod department;
pub mod projection;

pub use assumptions::*;
pub use department::{department_impact, CapacitySegment, DepartmentImpact};
pub use projection::{
    npv, project_cash_flows, CashFlowProjection, CashFlowYear, ADOPTION_CURVE, HORIZON_YEARS,
};

use serde::Serialize;

/// 계산 모드. 단년도 또는 투자 가정을 포함한 3개년 모델.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    SingleYear,
    ThreeYear(Investment),
}

/// 계산 결과 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiReport {
    pub assumptions: Assumptions,
    pub department: DepartmentImpact,
    /// 3개년 모드에서만 채워진다.
    pub projection: Option<CashFlowProjection>,
}

/// 가정값과 모드를 받아 ROI 결과를 계산한다.
pub fn compute(assumptions: Assumptions, mode: Mode) -> Result<RoiReport, RoiError> {
    let department = department_impact(&assumptions)?;
    let projection = match mode {
        Mode::SingleYear => None,
        Mode::ThreeYear(investment) => {
            Some(project_cash_flows(department.annual_savings, &investment)?)
        }
    };
    Ok(RoiReport {
        assumptions,
        department,
        projection,
    })
}

/// 단년도 모델
pub fn single_year(assumptions: Assumptions) -> Result<RoiReport, RoiError> {
    compute(assumptions, Mode::SingleYear)
}

/// 3개년 모델
pub fn three_year(assumptions: Assumptions, investment: Investment) -> Result<RoiReport, RoiError> {
    compute(assumptions, Mode::ThreeYear(investment))
}
