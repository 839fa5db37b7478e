//! 낭비 시간 입력 기준(연간 시간 비율 ↔ 주당 시간) 변환.
//!
//! 주당 근무일은 5일로 고정하며, 연간 주 수는 `work_days / 5` 로 근사한다.

use serde::{Deserialize, Serialize};

use crate::roi::RoiError;

/// 주당 근무일 (고정 정책값)
pub const WORK_DAYS_PER_WEEK: f64 = 5.0;

/// 낭비 시간을 입력받는 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WasteBasis {
    /// 연간 근무 시간 대비 비율(%)
    #[default]
    Percentage,
    /// 1인당 주당 낭비 시간(h/week)
    HoursPerWeek,
}

/// 기준이 붙은 낭비 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", content = "value", rename_all = "snake_case")]
pub enum WasteInput {
    /// 비율(소수, 0.2 = 20%)
    Fraction(f64),
    /// 1인당 주당 시간 [h]
    HoursPerWeek(f64),
}

impl WasteInput {
    pub fn basis(&self) -> WasteBasis {
        match self {
            WasteInput::Fraction(_) => WasteBasis::Percentage,
            WasteInput::HoursPerWeek(_) => WasteBasis::HoursPerWeek,
        }
    }

    /// 입력 기준과 무관하게 연간 비율로 환산한다.
    pub fn to_fraction(self, work_days: f64, daily_hours: f64) -> Result<f64, RoiError> {
        match self {
            WasteInput::Fraction(f) => Ok(f),
            WasteInput::HoursPerWeek(h) => weekly_hours_to_fraction(h, work_days, daily_hours),
        }
    }

    /// 입력 기준과 무관하게 주당 시간으로 환산한다.
    pub fn to_weekly_hours(self, work_days: f64, daily_hours: f64) -> Result<f64, RoiError> {
        match self {
            WasteInput::Fraction(f) => fraction_to_weekly_hours(f, work_days, daily_hours),
            WasteInput::HoursPerWeek(h) => Ok(h),
        }
    }
}

/// 연간 주 수 = 근무일 / 5
pub fn weeks_per_year(work_days: f64) -> f64 {
    work_days / WORK_DAYS_PER_WEEK
}

fn check_calendar(work_days: f64, daily_hours: f64) -> Result<f64, RoiError> {
    if !(work_days > 0.0 && work_days.is_finite()) {
        return Err(RoiError::invalid(
            "work_days",
            "근무일은 0보다 커야 합니다.",
        ));
    }
    if !(daily_hours > 0.0 && daily_hours.is_finite()) {
        return Err(RoiError::invalid(
            "daily_hours",
            "일일 근무 시간은 0보다 커야 합니다.",
        ));
    }
    Ok(work_days * daily_hours)
}

/// 주당 낭비 시간을 연간 근무 시간 대비 비율로 바꾼다.
pub fn weekly_hours_to_fraction(
    weekly_waste_hours: f64,
    work_days: f64,
    daily_hours: f64,
) -> Result<f64, RoiError> {
    let annual_hours = check_calendar(work_days, daily_hours)?;
    if !(weekly_waste_hours >= 0.0 && weekly_waste_hours.is_finite()) {
        return Err(RoiError::invalid(
            "weekly_waste_hours",
            "주당 낭비 시간은 0 이상이어야 합니다.",
        ));
    }
    Ok((weekly_waste_hours * weeks_per_year(work_days)) / annual_hours)
}

/// 비율을 1인당 주당 낭비 시간으로 바꾼다.
pub fn fraction_to_weekly_hours(
    waste_fraction: f64,
    work_days: f64,
    daily_hours: f64,
) -> Result<f64, RoiError> {
    let annual_hours = check_calendar(work_days, daily_hours)?;
    if !(0.0..=1.0).contains(&waste_fraction) {
        return Err(RoiError::invalid(
            "waste_fraction",
            format!("낭비 비율 {waste_fraction} 이(가) [0, 1] 범위를 벗어났습니다."),
        ));
    }
    Ok((waste_fraction * annual_hours) / weeks_per_year(work_days))
}
