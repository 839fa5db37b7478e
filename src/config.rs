use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::Industry;
use crate::roi::{Assumptions, ImplementationIntensity, Investment, RoiError};
use crate::waste_basis::{WasteBasis, WasteInput};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 폼 기본값. 비율은 화면 입력과 같이 백분율(%)로 저장한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionDefaults {
    pub num_employees: u32,
    pub annual_salary: f64,
    pub fringe_pct: f64,
    pub work_days: f64,
    pub daily_hours: f64,
    pub waste_basis: WasteBasis,
    pub waste_pct: f64,
    pub waste_hours_per_week: f64,
    pub improvement_pct: f64,
}

impl Default for AssumptionDefaults {
    fn default() -> Self {
        Self {
            num_employees: 10,
            annual_salary: 120_000.0,
            fringe_pct: 25.0,
            work_days: 220.0,
            daily_hours: 7.5,
            waste_basis: WasteBasis::Percentage,
            waste_pct: 20.0,
            waste_hours_per_week: 8.0,
            improvement_pct: 50.0,
        }
    }
}

impl AssumptionDefaults {
    /// 선택된 기준의 낭비 입력값
    pub fn waste_input(&self) -> WasteInput {
        match self.waste_basis {
            WasteBasis::Percentage => WasteInput::Fraction(self.waste_pct / 100.0),
            WasteBasis::HoursPerWeek => WasteInput::HoursPerWeek(self.waste_hours_per_week),
        }
    }

    /// 백분율을 소수로 바꾸고 낭비 기준을 비율로 통일해 엔진 입력을 만든다.
    pub fn to_assumptions(&self) -> Result<Assumptions, RoiError> {
        let waste_fraction = self
            .waste_input()
            .to_fraction(self.work_days, self.daily_hours)?;
        Ok(Assumptions {
            num_employees: self.num_employees,
            annual_salary: self.annual_salary,
            fringe_rate: self.fringe_pct / 100.0,
            work_days: self.work_days,
            daily_hours: self.daily_hours,
            waste_fraction,
            improvement_fraction: self.improvement_pct / 100.0,
        })
    }
}

/// 투자 가정 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentDefaults {
    pub initial_external_cost: f64,
    pub recurring_annual_cost: f64,
    pub intensity: ImplementationIntensity,
    pub discount_rate_pct: f64,
}

impl Default for InvestmentDefaults {
    fn default() -> Self {
        Self {
            initial_external_cost: 75_000.0,
            recurring_annual_cost: 15_000.0,
            intensity: ImplementationIntensity::Medium,
            discount_rate_pct: 10.0,
        }
    }
}

impl InvestmentDefaults {
    pub fn to_investment(&self) -> Investment {
        Investment {
            initial_external_cost: self.initial_external_cost,
            recurring_annual_cost: self.recurring_annual_cost,
            intensity: self.intensity,
            discount_rate: self.discount_rate_pct / 100.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 (auto/ko/en)
    #[serde(default = "default_language")]
    pub language: String,
    /// 금액 표시용 통화 기호
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub industry: Industry,
    #[serde(default)]
    pub assumptions: AssumptionDefaults,
    #[serde(default)]
    pub investment: InvestmentDefaults,
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            currency_symbol: default_currency_symbol(),
            industry: Industry::default(),
            assumptions: AssumptionDefaults::default(),
            investment: InvestmentDefaults::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 명령행에서 넘어온 개별 입력값. 지정된 항목만 설정값을 덮어쓴다.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub num_employees: Option<u32>,
    pub annual_salary: Option<f64>,
    pub fringe_pct: Option<f64>,
    pub work_days: Option<f64>,
    pub daily_hours: Option<f64>,
    pub waste_pct: Option<f64>,
    pub waste_hours_per_week: Option<f64>,
    pub improvement_pct: Option<f64>,
    pub initial_external_cost: Option<f64>,
    pub recurring_annual_cost: Option<f64>,
    pub intensity: Option<ImplementationIntensity>,
    pub discount_rate_pct: Option<f64>,
    pub industry: Option<Industry>,
    pub currency_symbol: Option<String>,
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "설정 파일 로드");
        Config::from_toml_str(&content)?
    } else {
        tracing::info!(path = %path.display(), "설정 파일이 없어 기본값으로 생성");
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정을 로드했던 파일(없으면 기본 경로)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    /// 명령행 입력을 반영한다. 주당 시간이 주어지면 낭비 기준도 주당 시간으로 바꾼다.
    pub fn apply_overrides(&mut self, o: ConfigOverrides) {
        let a = &mut self.assumptions;
        if let Some(v) = o.num_employees {
            a.num_employees = v;
        }
        if let Some(v) = o.annual_salary {
            a.annual_salary = v;
        }
        if let Some(v) = o.fringe_pct {
            a.fringe_pct = v;
        }
        if let Some(v) = o.work_days {
            a.work_days = v;
        }
        if let Some(v) = o.daily_hours {
            a.daily_hours = v;
        }
        if let Some(v) = o.waste_pct {
            a.waste_pct = v;
            a.waste_basis = WasteBasis::Percentage;
        }
        if let Some(v) = o.waste_hours_per_week {
            a.waste_hours_per_week = v;
            a.waste_basis = WasteBasis::HoursPerWeek;
        }
        if let Some(v) = o.improvement_pct {
            a.improvement_pct = v;
        }

        let inv = &mut self.investment;
        if let Some(v) = o.initial_external_cost {
            inv.initial_external_cost = v;
        }
        if let Some(v) = o.recurring_annual_cost {
            inv.recurring_annual_cost = v;
        }
        if let Some(v) = o.intensity {
            inv.intensity = v;
        }
        if let Some(v) = o.discount_rate_pct {
            inv.discount_rate_pct = v;
        }

        if let Some(v) = o.industry {
            self.industry = v;
        }
        if let Some(v) = o.currency_symbol {
            self.currency_symbol = v;
        }
    }
}
