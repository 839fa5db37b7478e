use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::report::{self, OutputFormat};
use crate::roi::{self, Mode, RoiError, RoiReport};
use crate::ui_cli::{self, MenuChoice};
use crate::waste_basis::{self, WasteBasis};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 입력 가정 검증 오류
    #[error("{0}")]
    Roi(#[from] RoiError),
    /// 결과 직렬화 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 표 출력 작성 오류
    #[error("출력 작성 오류: {0}")]
    Format(#[from] std::fmt::Error),
}

/// 설정의 가정값으로 계산을 수행한다.
pub fn evaluate(cfg: &Config, three_year: bool) -> Result<RoiReport, AppError> {
    let assumptions = cfg.assumptions.to_assumptions()?;
    let mode = if three_year {
        Mode::ThreeYear(cfg.investment.to_investment())
    } else {
        Mode::SingleYear
    };
    tracing::debug!(?assumptions, ?mode, "ROI 계산");
    roi::compute(assumptions, mode).map_err(|e| {
        tracing::warn!(field = e.field(), "입력 가정 검증 실패");
        AppError::from(e)
    })
}

/// 계산 결과를 지정 형식의 문자열로 만든다.
pub fn render(
    cfg: &Config,
    tr: &Translator,
    three_year: bool,
    format: OutputFormat,
) -> Result<String, AppError> {
    let report = evaluate(cfg, three_year)?;
    match format {
        OutputFormat::Table => Ok(report::render_table(
            &report,
            cfg.industry,
            tr,
            &cfg.currency_symbol,
        )?),
        OutputFormat::Json => Ok(report::render_json(&report, cfg.industry)?),
    }
}

/// 낭비 기준 변환 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteConversion {
    /// 입력이 주어진 기준
    pub basis: WasteBasis,
    pub waste_fraction: f64,
    pub weekly_waste_hours: f64,
    pub weeks_per_year: f64,
}

/// 설정에 지정된 기준의 낭비 입력을 양쪽 기준으로 환산한다.
pub fn convert_waste(cfg: &Config) -> Result<WasteConversion, RoiError> {
    let a = &cfg.assumptions;
    let input = a.waste_input();
    Ok(WasteConversion {
        basis: input.basis(),
        waste_fraction: input.to_fraction(a.work_days, a.daily_hours)?,
        weekly_waste_hours: input.to_weekly_hours(a.work_days, a.daily_hours)?,
        weeks_per_year: waste_basis::weeks_per_year(a.work_days),
    })
}

pub fn render_waste(
    cfg: &Config,
    tr: &Translator,
    format: OutputFormat,
) -> Result<String, AppError> {
    let conv = convert_waste(cfg)?;
    match format {
        OutputFormat::Table => {
            let basis = match conv.basis {
                WasteBasis::Percentage => tr.t(keys::WASTE_BASIS_PERCENTAGE),
                WasteBasis::HoursPerWeek => tr.t(keys::WASTE_BASIS_HOURS),
            };
            Ok(format!(
                "{}: {basis}\n{}: {:.2}%\n{}: {:.2} h\n",
                tr.t(keys::WASTE_RESULT_BASIS),
                tr.t(keys::WASTE_RESULT_FRACTION),
                conv.waste_fraction * 100.0,
                tr.t(keys::WASTE_RESULT_HOURS),
                conv.weekly_waste_hours
            ))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&conv)?),
    }
}

/// 대화형 CLI 메인 루프를 실행한다.
pub fn run_interactive(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::SingleYear => ui_cli::handle_single_year(tr, config)?,
            MenuChoice::ThreeYear => ui_cli::handle_three_year(tr, config)?,
            MenuChoice::WasteBasis => ui_cli::handle_waste_basis(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                *tr = Translator::new(&i18n::resolve_language(None, Some(config.language.as_str())));
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
