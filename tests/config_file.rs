//! 설정 파일 생성/로드 및 명령행 덮어쓰기 테스트.
use productivity_roi::app;
use productivity_roi::config::{self, Config, ConfigOverrides};
use productivity_roi::i18n::Translator;
use productivity_roi::report::{Industry, OutputFormat};
use productivity_roi::roi::ImplementationIntensity;
use productivity_roi::waste_basis::WasteBasis;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.currency_symbol, "$");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn save_writes_back_to_loaded_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roi.toml");
    let mut cfg = config::load_or_default(&path).expect("load");
    cfg.apply_overrides(ConfigOverrides {
        num_employees: Some(50),
        intensity: Some(ImplementationIntensity::High),
        industry: Some(Industry::Retail),
        ..Default::default()
    });
    cfg.save().expect("save");

    let text = std::fs::read_to_string(&path).expect("read");
    let parsed = Config::from_toml_str(&text).expect("parse");
    assert_eq!(parsed.assumptions.num_employees, 50);
    assert_eq!(parsed.investment.intensity, ImplementationIntensity::High);
    assert_eq!(parsed.industry, Industry::Retail);
}

#[test]
fn invalid_toml_is_reported() {
    assert!(Config::from_toml_str("assumptions = 3").is_err());
}

#[test]
fn weekly_hours_from_config_drive_the_engine() {
    let mut cfg = Config::default();
    cfg.apply_overrides(ConfigOverrides {
        waste_hours_per_week: Some(7.5),
        ..Default::default()
    });
    let report = app::evaluate(&cfg, false).expect("evaluate");
    assert!((report.department.wasted_hours_total - 3_300.0).abs() < 1e-6);

    let conv = app::convert_waste(&cfg).expect("convert");
    assert!((conv.waste_fraction - 0.20).abs() < 1e-12);
    assert!((conv.weeks_per_year - 44.0).abs() < 1e-12);
    assert_eq!(conv.basis, WasteBasis::HoursPerWeek);

    let tr = Translator::new("en");
    let text = app::render_waste(&cfg, &tr, OutputFormat::Table).expect("render");
    assert!(text.starts_with("Input basis: hours per week"), "{text}");
}

#[test]
fn invalid_override_surfaces_as_error() {
    let mut cfg = Config::default();
    cfg.apply_overrides(ConfigOverrides {
        work_days: Some(0.0),
        ..Default::default()
    });
    let tr = Translator::new("en");
    assert!(app::render(&cfg, &tr, false, OutputFormat::Table).is_err());
}
