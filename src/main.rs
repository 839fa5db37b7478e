use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use productivity_roi::app::{self, AppError};
use productivity_roi::config::{self, ConfigOverrides, DEFAULT_CONFIG_PATH};
use productivity_roi::i18n::{self, keys, Translator};
use productivity_roi::report::{Industry, OutputFormat};
use productivity_roi::roi::ImplementationIntensity;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "productivity_roi",
    about = "Departmental productivity ROI and 3-year business case calculator"
)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// UI 언어 (auto/ko/en)
    #[arg(long)]
    lang: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// 단년도 부서 ROI
    SingleYear(AssumptionArgs),
    /// 투자 비용을 포함한 3개년 현금흐름/NPV/회수기간
    ThreeYear {
        #[command(flatten)]
        assumptions: AssumptionArgs,
        #[command(flatten)]
        investment: InvestmentArgs,
    },
    /// 낭비 비율과 주당 낭비 시간 상호 변환
    Waste(AssumptionArgs),
    /// 대화형 메뉴
    Interactive,
}

#[derive(Debug, Args, Clone, Default)]
struct AssumptionArgs {
    #[arg(long)]
    employees: Option<u32>,
    #[arg(long)]
    salary: Option<f64>,
    #[arg(long = "fringe-pct")]
    fringe_pct: Option<f64>,
    #[arg(long = "work-days")]
    work_days: Option<f64>,
    #[arg(long = "daily-hours")]
    daily_hours: Option<f64>,
    #[arg(long = "waste-pct", conflicts_with = "waste_hours")]
    waste_pct: Option<f64>,
    #[arg(long = "waste-hours")]
    waste_hours: Option<f64>,
    #[arg(long = "improvement-pct")]
    improvement_pct: Option<f64>,
    #[arg(long = "currency")]
    currency: Option<String>,
}

#[derive(Debug, Args, Clone, Default)]
struct InvestmentArgs {
    #[arg(long = "initial-cost")]
    initial_cost: Option<f64>,
    #[arg(long = "recurring-cost")]
    recurring_cost: Option<f64>,
    #[arg(long)]
    intensity: Option<ImplementationIntensity>,
    #[arg(long = "discount-pct")]
    discount_pct: Option<f64>,
    #[arg(long, value_enum)]
    industry: Option<Industry>,
}

fn overrides(a: AssumptionArgs, inv: InvestmentArgs) -> ConfigOverrides {
    ConfigOverrides {
        num_employees: a.employees,
        annual_salary: a.salary,
        fringe_pct: a.fringe_pct,
        work_days: a.work_days,
        daily_hours: a.daily_hours,
        waste_pct: a.waste_pct,
        waste_hours_per_week: a.waste_hours,
        improvement_pct: a.improvement_pct,
        initial_external_cost: inv.initial_cost,
        recurring_annual_cost: inv.recurring_cost,
        intensity: inv.intensity,
        discount_rate_pct: inv.discount_pct,
        industry: inv.industry,
        currency_symbol: a.currency,
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let mut tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
    match try_run(cli, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, tr: &mut Translator) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    *tr = Translator::new(&i18n::resolve_language(
        cli.lang.as_deref(),
        Some(cfg.language.as_str()),
    ));
    tracing::debug!(lang = tr.language().as_code(), "언어 선택");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::SingleYear(a) => {
            cfg.apply_overrides(overrides(a, InvestmentArgs::default()));
            print!("{}", app::render(&cfg, tr, false, cli.format)?);
        }
        Commands::ThreeYear {
            assumptions,
            investment,
        } => {
            cfg.apply_overrides(overrides(assumptions, investment));
            print!("{}", app::render(&cfg, tr, true, cli.format)?);
        }
        Commands::Waste(a) => {
            cfg.apply_overrides(overrides(a, InvestmentArgs::default()));
            print!("{}", app::render_waste(&cfg, tr, cli.format)?);
        }
        Commands::Interactive => app::run_interactive(&mut cfg, tr)?,
    }
    Ok(())
}
