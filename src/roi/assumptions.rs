use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ROI 계산 시 발생 가능한 오류. 모든 오류는 입력 검증 단계에서 발생한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoiError {
    /// 입력 가정값이 허용 범위를 벗어남
    #[error("입력 가정 오류 ({field}): {detail}")]
    InvalidAssumption {
        field: &'static str,
        detail: String,
    },
}

impl RoiError {
    pub(crate) fn invalid(field: &'static str, detail: impl Into<String>) -> Self {
        RoiError::InvalidAssumption {
            field,
            detail: detail.into(),
        }
    }

    /// 오류가 발생한 입력 항목 이름.
    pub fn field(&self) -> &'static str {
        match self {
            RoiError::InvalidAssumption { field, .. } => field,
        }
    }
}

/// 부담률(fringe) 허용 범위
pub const FRINGE_RATE_RANGE: (f64, f64) = (0.0, 0.5);
/// 할인율 허용 범위
pub const DISCOUNT_RATE_RANGE: (f64, f64) = (0.05, 0.15);

/// 단일 계산 요청에 사용하는 부서 단위 가정값.
///
/// 비율 값은 모두 소수(0.25 = 25%)로 담는다. 값은 계산마다 새로 만들어
/// 엔진에 그대로 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// 대상 인원 [명]
    pub num_employees: u32,
    /// 1인당 연간 총급여
    pub annual_salary: f64,
    /// 복리후생/간접비 부담률 (0~0.5)
    pub fringe_rate: f64,
    /// 연간 근무일 [일]
    pub work_days: f64,
    /// 일일 생산 시간 [h]
    pub daily_hours: f64,
    /// 비생산 시간 비율 (0~1)
    pub waste_fraction: f64,
    /// 낭비 중 개선으로 제거할 비율 (0~1)
    pub improvement_fraction: f64,
}

impl Assumptions {
    /// 1인당 연간 근무 시간. 검증 전에도 호출할 수 있다.
    pub fn annual_hours_per_person(&self) -> f64 {
        self.work_days * self.daily_hours
    }

    /// 나눗셈 전에 필요한 전제 조건과 비율 범위를 확인한다.
    pub fn validate(&self) -> Result<(), RoiError> {
        if self.num_employees < 1 {
            return Err(RoiError::invalid(
                "num_employees",
                "대상 인원은 1명 이상이어야 합니다.",
            ));
        }
        if !(self.annual_salary >= 0.0 && self.annual_salary.is_finite()) {
            return Err(RoiError::invalid(
                "annual_salary",
                format!("연봉은 0 이상이어야 합니다. (입력: {})", self.annual_salary),
            ));
        }
        check_fraction("fringe_rate", self.fringe_rate, FRINGE_RATE_RANGE)?;
        if !(self.work_days > 0.0) {
            return Err(RoiError::invalid(
                "work_days",
                format!("연간 근무일은 0보다 커야 합니다. (입력: {})", self.work_days),
            ));
        }
        if !(self.daily_hours > 0.0) {
            return Err(RoiError::invalid(
                "daily_hours",
                format!("일일 근무 시간은 0보다 커야 합니다. (입력: {})", self.daily_hours),
            ));
        }
        let annual_hours = self.annual_hours_per_person();
        if !(annual_hours > 0.0 && annual_hours.is_finite()) {
            return Err(RoiError::invalid(
                "annual_hours_per_person",
                "1인당 연간 근무 시간이 0보다 커야 합니다.",
            ));
        }
        check_fraction("waste_fraction", self.waste_fraction, (0.0, 1.0))?;
        check_fraction(
            "improvement_fraction",
            self.improvement_fraction,
            (0.0, 1.0),
        )?;
        Ok(())
    }
}

/// 내부 구축 투입 강도. 외부 비용 대비 내부 인력 비용 배수를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationIntensity {
    Low,
    #[default]
    Medium,
    High,
}

impl ImplementationIntensity {
    pub const ALL: [ImplementationIntensity; 3] = [
        ImplementationIntensity::Low,
        ImplementationIntensity::Medium,
        ImplementationIntensity::High,
    ];

    /// 외부 비용 대비 내부 인력 비용 배수
    pub fn multiplier(self) -> f64 {
        match self {
            ImplementationIntensity::Low => 0.5,
            ImplementationIntensity::Medium => 1.0,
            ImplementationIntensity::High => 1.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImplementationIntensity::Low => "low",
            ImplementationIntensity::Medium => "medium",
            ImplementationIntensity::High => "high",
        }
    }
}

impl std::str::FromStr for ImplementationIntensity {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" | "0.5" => Ok(ImplementationIntensity::Low),
            "medium" | "med" | "m" | "1" | "1.0" => Ok(ImplementationIntensity::Medium),
            "high" | "h" | "1.5" => Ok(ImplementationIntensity::High),
            other => Err(RoiError::invalid(
                "internal_cost_multiplier",
                format!("알 수 없는 투입 강도: {other} (low/medium/high)"),
            )),
        }
    }
}

/// 3개년 모델의 투자/운영 비용 가정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// 초기 외부 비용(소프트웨어/컨설팅)
    pub initial_external_cost: f64,
    /// 연간 반복 비용(구독/지원)
    pub recurring_annual_cost: f64,
    /// 내부 구축 투입 강도
    pub intensity: ImplementationIntensity,
    /// 할인율(WACC) (0.05~0.15)
    pub discount_rate: f64,
}

impl Investment {
    pub fn internal_cost_multiplier(&self) -> f64 {
        self.intensity.multiplier()
    }

    /// 내부 인력 투입 가치 = (초기 외부 비용 + 연간 반복 비용) × 배수
    pub fn internal_resource_cost(&self) -> f64 {
        (self.initial_external_cost + self.recurring_annual_cost) * self.internal_cost_multiplier()
    }

    /// 0년차 총 선투자액
    pub fn total_upfront(&self) -> f64 {
        self.initial_external_cost + self.internal_resource_cost()
    }

    pub fn validate(&self) -> Result<(), RoiError> {
        if !(self.initial_external_cost >= 0.0 && self.initial_external_cost.is_finite()) {
            return Err(RoiError::invalid(
                "initial_external_cost",
                "초기 외부 비용은 0 이상이어야 합니다.",
            ));
        }
        if !(self.recurring_annual_cost >= 0.0 && self.recurring_annual_cost.is_finite()) {
            return Err(RoiError::invalid(
                "recurring_annual_cost",
                "연간 반복 비용은 0 이상이어야 합니다.",
            ));
        }
        check_fraction("discount_rate", self.discount_rate, DISCOUNT_RATE_RANGE)
    }
}

/// 계산된 중간값이 유한한지 확인한다. 큰 입력의 곱셈은 inf/NaN이 될 수 있다.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, RoiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RoiError::invalid(
            field,
            format!("계산 결과가 유한한 값이 아닙니다 ({value}). 입력 규모를 확인하세요."),
        ))
    }
}

fn check_fraction(field: &'static str, value: f64, (lo, hi): (f64, f64)) -> Result<(), RoiError> {
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(RoiError::invalid(
            field,
            format!("값 {value} 이(가) 허용 범위 [{lo}, {hi}] 를 벗어났습니다."),
        ))
    }
}
