//! 표/JSON 출력 형식 테스트.
use productivity_roi::app;
use productivity_roi::config::Config;
use productivity_roi::i18n::Translator;
use productivity_roi::report::OutputFormat;

#[test]
fn three_year_table_lists_every_year() {
    let cfg = Config::default();
    let tr = Translator::new("en-us");
    let text = app::render(&cfg, &tr, true, OutputFormat::Table).expect("render");
    assert!(text.contains("Logistics Service Provider (LSP)"));
    for label in ["Year 0 (Now)", "Year 1", "Year 2", "Year 3"] {
        assert!(text.contains(label), "missing {label}\n{text}");
    }
    assert!(text.contains("$1,500,000"));
    assert!(text.contains("-$165,000"));
    assert!(text.contains("33.0 months"));
    assert!(text.contains("Break-even: Year 3"), "{text}");
    assert!(text.contains("Year 1 saving (40% adoption): $60,000"), "{text}");
}

#[test]
fn break_even_outside_horizon_is_stated() {
    let mut cfg = Config::default();
    cfg.assumptions.improvement_pct = 0.0;
    let tr = Translator::new("en");
    let text = app::render(&cfg, &tr, true, OutputFormat::Table).expect("render");
    assert!(text.contains("Break-even: not within 3 years"), "{text}");
    assert!(text.contains("Payback: undefined"), "{text}");
}

#[test]
fn single_year_table_has_capacity_breakdown() {
    let cfg = Config::default();
    let tr = Translator::new("ko");
    let text = app::render(&cfg, &tr, false, OutputFormat::Table).expect("render");
    assert!(text.contains("13,200"));
    assert!(text.contains("1,650"));
    assert!(!text.contains("Year 1"));
}

#[test]
fn json_output_is_machine_readable() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let text = app::render(&cfg, &tr, true, OutputFormat::Json).expect("render");
    let v: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(v["industry"], "Logistics Service Provider (LSP)");
    assert_eq!(v["assumptions"]["num_employees"], 10);
    assert_eq!(v["projection"]["years"].as_array().map(Vec::len), Some(4));
    let fte = v["department"]["fte_recovered"].as_f64().expect("fte");
    assert!((fte - 1.0).abs() < 1e-12);
}
