use std::io::{self, BufRead, Write};

use crate::app::{self, AppError};
use crate::config::{AssumptionDefaults, Config, InvestmentDefaults};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::roi::ImplementationIntensity;
use crate::waste_basis::WasteBasis;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SingleYear,
    ThreeYear,
    WasteBasis,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SINGLE_YEAR));
    println!("{}", tr.t(keys::MAIN_MENU_THREE_YEAR));
    println!("{}", tr.t(keys::MAIN_MENU_WASTE_BASIS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    select_menu(&mut io::stdin().lock(), tr)
}

/// 유효한 선택이 나올 때까지 읽는다. 입력이 닫히면(EOF) 종료를 선택한 것으로 본다.
fn select_menu<R: BufRead>(input: &mut R, tr: &Translator) -> Result<MenuChoice, AppError> {
    loop {
        match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => match parse_menu(&sel) {
                Some(choice) => return Ok(choice),
                None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        }
    }
}

fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::SingleYear),
        "2" => Some(MenuChoice::ThreeYear),
        "3" => Some(MenuChoice::WasteBasis),
        "4" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 단년도 부서 ROI 메뉴를 처리한다.
pub fn handle_single_year(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mut run_cfg = cfg.clone();
    run_cfg.assumptions = prompt_assumptions(tr, &cfg.assumptions)?;
    print_report(tr, &run_cfg, false);
    Ok(())
}

/// 3개년 사업성 분석 메뉴를 처리한다.
pub fn handle_three_year(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mut run_cfg = cfg.clone();
    run_cfg.assumptions = prompt_assumptions(tr, &cfg.assumptions)?;
    run_cfg.investment = prompt_investment(tr, &cfg.investment)?;
    print_report(tr, &run_cfg, true);
    Ok(())
}

/// 낭비 기준 변환 메뉴를 처리한다.
pub fn handle_waste_basis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mut run_cfg = cfg.clone();
    let a = &mut run_cfg.assumptions;
    a.work_days = read_f64_or(tr, keys::PROMPT_WORK_DAYS, a.work_days)?;
    a.daily_hours = read_f64_or(tr, keys::PROMPT_DAILY_HOURS, a.daily_hours)?;
    prompt_waste(tr, a)?;
    match app::render_waste(&run_cfg, tr, report::OutputFormat::Table) {
        Ok(text) => print!("{text}"),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    cfg.currency_symbol = read_string_or(tr, keys::PROMPT_CURRENCY_SYMBOL, &cfg.currency_symbol)?;
    cfg.language = read_string_or(tr, keys::PROMPT_LANGUAGE, &cfg.language)?;
    Ok(())
}

fn print_report(tr: &Translator, cfg: &Config, three_year: bool) {
    // 입력 오류는 메뉴 루프를 끝내지 않고 안내만 한다.
    match app::render(cfg, tr, three_year, report::OutputFormat::Table) {
        Ok(text) => print!("\n{text}"),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
}

fn prompt_assumptions(
    tr: &Translator,
    defaults: &AssumptionDefaults,
) -> Result<AssumptionDefaults, AppError> {
    let mut a = defaults.clone();
    a.num_employees = read_u32_or(tr, keys::PROMPT_NUM_EMPLOYEES, a.num_employees)?;
    a.annual_salary = read_f64_or(tr, keys::PROMPT_ANNUAL_SALARY, a.annual_salary)?;
    a.fringe_pct = read_f64_or(tr, keys::PROMPT_FRINGE_PCT, a.fringe_pct)?;
    a.work_days = read_f64_or(tr, keys::PROMPT_WORK_DAYS, a.work_days)?;
    a.daily_hours = read_f64_or(tr, keys::PROMPT_DAILY_HOURS, a.daily_hours)?;
    prompt_waste(tr, &mut a)?;
    a.improvement_pct = read_f64_or(tr, keys::PROMPT_IMPROVEMENT_PCT, a.improvement_pct)?;
    Ok(a)
}

fn prompt_waste(tr: &Translator, a: &mut AssumptionDefaults) -> Result<(), AppError> {
    let current = match a.waste_basis {
        WasteBasis::Percentage => "1",
        WasteBasis::HoursPerWeek => "2",
    };
    let sel = read_string_or(tr, keys::PROMPT_WASTE_BASIS, current)?;
    if sel.trim() == "2" {
        a.waste_basis = WasteBasis::HoursPerWeek;
        a.waste_hours_per_week = read_f64_or(tr, keys::PROMPT_WASTE_HOURS, a.waste_hours_per_week)?;
    } else {
        a.waste_basis = WasteBasis::Percentage;
        a.waste_pct = read_f64_or(tr, keys::PROMPT_WASTE_PCT, a.waste_pct)?;
    }
    Ok(())
}

fn prompt_investment(
    tr: &Translator,
    defaults: &InvestmentDefaults,
) -> Result<InvestmentDefaults, AppError> {
    let mut inv = defaults.clone();
    inv.initial_external_cost =
        read_f64_or(tr, keys::PROMPT_INITIAL_COST, inv.initial_external_cost)?;
    inv.recurring_annual_cost =
        read_f64_or(tr, keys::PROMPT_RECURRING_COST, inv.recurring_annual_cost)?;
    inv.intensity = loop {
        let s = read_string_or(tr, keys::PROMPT_INTENSITY, inv.intensity.as_str())?;
        match s.parse::<ImplementationIntensity>() {
            Ok(v) => break v,
            Err(e) => println!("{e}"),
        }
    };
    inv.discount_rate_pct = read_f64_or(tr, keys::PROMPT_DISCOUNT_PCT, inv.discount_rate_pct)?;
    let internal = inv.to_investment().internal_resource_cost();
    println!(
        "  {}: {}",
        tr.t(keys::REPORT_INTERNAL_COST),
        report::format_number(internal, 0)
    );
    Ok(inv)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "입력이 종료되었습니다.").into());
    }
    Ok(buf)
}

fn read_string_or(tr: &Translator, key: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{} [{}: {default}]: ", tr.t(key), tr.t(keys::DEFAULT_HINT)))?;
    let s = s.trim();
    Ok(if s.is_empty() { default.to_string() } else { s.to_string() })
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_string_or(tr, key, &default.to_string())?;
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, key: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_string_or(tr, key, &default.to_string())?;
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::INVALID_NUMBER)),
        }
    }
}
