use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const UNDEFINED: &str = "general.undefined";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SINGLE_YEAR: &str = "main_menu.single_year";
    pub const MAIN_MENU_THREE_YEAR: &str = "main_menu.three_year";
    pub const MAIN_MENU_WASTE_BASIS: &str = "main_menu.waste_basis";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_NUMBER: &str = "error.invalid_number";
    pub const DEFAULT_HINT: &str = "prompt.default_hint";

    pub const PROMPT_NUM_EMPLOYEES: &str = "prompt.num_employees";
    pub const PROMPT_ANNUAL_SALARY: &str = "prompt.annual_salary";
    pub const PROMPT_FRINGE_PCT: &str = "prompt.fringe_pct";
    pub const PROMPT_WORK_DAYS: &str = "prompt.work_days";
    pub const PROMPT_DAILY_HOURS: &str = "prompt.daily_hours";
    pub const PROMPT_WASTE_BASIS: &str = "prompt.waste_basis";
    pub const PROMPT_WASTE_PCT: &str = "prompt.waste_pct";
    pub const PROMPT_WASTE_HOURS: &str = "prompt.waste_hours";
    pub const PROMPT_IMPROVEMENT_PCT: &str = "prompt.improvement_pct";
    pub const PROMPT_INITIAL_COST: &str = "prompt.initial_cost";
    pub const PROMPT_RECURRING_COST: &str = "prompt.recurring_cost";
    pub const PROMPT_INTENSITY: &str = "prompt.intensity";
    pub const PROMPT_DISCOUNT_PCT: &str = "prompt.discount_pct";
    pub const PROMPT_CURRENCY_SYMBOL: &str = "prompt.currency_symbol";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_SINGLE_HEADING: &str = "report.single_heading";
    pub const REPORT_THREE_YEAR_HEADING: &str = "report.three_year_heading";
    pub const REPORT_DEPT_COST: &str = "report.dept_cost";
    pub const REPORT_EMPLOYEES: &str = "report.employees";
    pub const REPORT_ANNUAL_SAVINGS: &str = "report.annual_savings";
    pub const REPORT_HOURLY_RATE: &str = "report.hourly_rate";
    pub const REPORT_FTE: &str = "report.fte";
    pub const REPORT_HOURS_SAVED: &str = "report.hours_saved";
    pub const REPORT_WEEKLY_WASTE: &str = "report.weekly_waste";
    pub const REPORT_CAPACITY: &str = "report.capacity";
    pub const REPORT_PRODUCTIVE: &str = "report.productive";
    pub const REPORT_SAVED: &str = "report.saved";
    pub const REPORT_REMAINING_WASTE: &str = "report.remaining_waste";
    pub const REPORT_NPV: &str = "report.npv";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_STEADY_STATE: &str = "report.steady_state";
    pub const REPORT_INTERNAL_COST: &str = "report.internal_cost";
    pub const REPORT_CASH_FLOW: &str = "report.cash_flow";
    pub const REPORT_COL_YEAR: &str = "report.col_year";
    pub const REPORT_COL_INVESTMENT: &str = "report.col_investment";
    pub const REPORT_COL_GROSS: &str = "report.col_gross";
    pub const REPORT_COL_NET: &str = "report.col_net";
    pub const REPORT_COL_CUMULATIVE: &str = "report.col_cumulative";
    pub const REPORT_MONTHS: &str = "report.months";
    pub const REPORT_BREAK_EVEN: &str = "report.break_even";
    pub const REPORT_BREAK_EVEN_NONE: &str = "report.break_even_none";
    pub const REPORT_YEAR_ONE_SAVING: &str = "report.year_one_saving";
    pub const WASTE_RESULT_BASIS: &str = "waste.result_basis";
    pub const WASTE_BASIS_PERCENTAGE: &str = "waste.basis_percentage";
    pub const WASTE_BASIS_HOURS: &str = "waste.basis_hours";
    pub const WASTE_RESULT_FRACTION: &str = "waste.result_fraction";
    pub const WASTE_RESULT_HOURS: &str = "waste.result_hours";
}

/// 지원 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    pub fn as_code(self) -> &'static str {
        match self {
            Language::En => "en-us",
            Language::Ko => "ko-kr",
        }
    }

    fn from_code(code: &str) -> Self {
        if code.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 선택된 언어로 UI 문자열을 돌려준다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(code: &str) -> Self {
        Self {
            lang: Language::from_code(&code.trim().to_lowercase()),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        UNDEFINED => "정의되지 않음",
        MAIN_MENU_TITLE => "\n=== 생산성 ROI 계산기 ===",
        MAIN_MENU_SINGLE_YEAR => "1) 단년도 부서 ROI",
        MAIN_MENU_THREE_YEAR => "2) 3개년 사업성 분석",
        MAIN_MENU_WASTE_BASIS => "3) 낭비 기준 변환",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_NUMBER => "숫자를 입력하세요.",
        DEFAULT_HINT => "기본값",
        PROMPT_NUM_EMPLOYEES => "대상 인원 [명]",
        PROMPT_ANNUAL_SALARY => "1인당 연간 총급여",
        PROMPT_FRINGE_PCT => "복리후생/부담률 [%] (0~50)",
        PROMPT_WORK_DAYS => "연간 근무일 [일]",
        PROMPT_DAILY_HOURS => "일일 생산 시간 [h]",
        PROMPT_WASTE_BASIS => "낭비 입력 기준 (1=비율%, 2=주당 시간)",
        PROMPT_WASTE_PCT => "비생산 시간 비율 [%]",
        PROMPT_WASTE_HOURS => "1인당 주당 낭비 시간 [h]",
        PROMPT_IMPROVEMENT_PCT => "낭비 감축 목표 [%]",
        PROMPT_INITIAL_COST => "초기 외부 비용(소프트웨어/컨설팅)",
        PROMPT_RECURRING_COST => "연간 반복 비용(구독/지원)",
        PROMPT_INTENSITY => "내부 투입 강도 (low/medium/high)",
        PROMPT_DISCOUNT_PCT => "할인율(WACC) [%] (5~15)",
        PROMPT_CURRENCY_SYMBOL => "통화 기호",
        PROMPT_LANGUAGE => "언어 (auto/ko/en)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        REPORT_SINGLE_HEADING => "== 부서 생산성 ROI ==",
        REPORT_THREE_YEAR_HEADING => "== 전략 보고서 (3개년 ROI) ==",
        REPORT_DEPT_COST => "부서 총 인건비(부담 포함)",
        REPORT_EMPLOYEES => "대상 인원",
        REPORT_ANNUAL_SAVINGS => "연간 절감액",
        REPORT_HOURLY_RATE => "시간당 단가",
        REPORT_FTE => "회수 인력(FTE)",
        REPORT_HOURS_SAVED => "연간 회수 시간",
        REPORT_WEEKLY_WASTE => "1인당 주당 낭비 시간",
        REPORT_CAPACITY => "-- 용량 구성 [h] --",
        REPORT_PRODUCTIVE => "생산",
        REPORT_SAVED => "회수",
        REPORT_REMAINING_WASTE => "잔여 낭비",
        REPORT_NPV => "3개년 NPV",
        REPORT_PAYBACK => "회수기간",
        REPORT_STEADY_STATE => "정상 상태 절감액(연)",
        REPORT_INTERNAL_COST => "내부 인력 투입 가치",
        REPORT_CASH_FLOW => "-- 현금흐름 전망 --",
        REPORT_COL_YEAR => "연차",
        REPORT_COL_INVESTMENT => "투자",
        REPORT_COL_GROSS => "총 절감",
        REPORT_COL_NET => "순현금흐름",
        REPORT_COL_CUMULATIVE => "누적",
        REPORT_MONTHS => "개월",
        REPORT_BREAK_EVEN => "손익분기 연차",
        REPORT_BREAK_EVEN_NONE => "3년 내 미달성",
        REPORT_YEAR_ONE_SAVING => "1년차 절감액(정착 40%)",
        WASTE_RESULT_BASIS => "입력 기준",
        WASTE_BASIS_PERCENTAGE => "연간 시간 대비 %",
        WASTE_BASIS_HOURS => "주당 시간",
        WASTE_RESULT_FRACTION => "연간 시간 대비 낭비 비율",
        WASTE_RESULT_HOURS => "1인당 주당 낭비 시간",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        UNDEFINED => "undefined",
        MAIN_MENU_TITLE => "\n=== Productivity ROI Calculator ===",
        MAIN_MENU_SINGLE_YEAR => "1) Departmental ROI (single year)",
        MAIN_MENU_THREE_YEAR => "2) Strategic business case (3 years)",
        MAIN_MENU_WASTE_BASIS => "3) Waste basis conversion",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid selection. Try again.",
        INVALID_NUMBER => "Please enter a number.",
        DEFAULT_HINT => "default",
        PROMPT_NUM_EMPLOYEES => "Employees in scope",
        PROMPT_ANNUAL_SALARY => "Avg. gross annual salary",
        PROMPT_FRINGE_PCT => "Burden rate [%] (0-50)",
        PROMPT_WORK_DAYS => "Working days / year",
        PROMPT_DAILY_HOURS => "Productive hours / day",
        PROMPT_WASTE_BASIS => "Waste basis (1=percentage, 2=hours per week)",
        PROMPT_WASTE_PCT => "Unproductive time [%]",
        PROMPT_WASTE_HOURS => "Identified waste [h/week/person]",
        PROMPT_IMPROVEMENT_PCT => "Target waste reduction [%]",
        PROMPT_INITIAL_COST => "External fees (software/consulting)",
        PROMPT_RECURRING_COST => "Annual recurring fee",
        PROMPT_INTENSITY => "Implementation intensity (low/medium/high)",
        PROMPT_DISCOUNT_PCT => "Discount rate (WACC) [%] (5-15)",
        PROMPT_CURRENCY_SYMBOL => "Currency symbol",
        PROMPT_LANGUAGE => "Language (auto/ko/en)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_SINGLE_HEADING => "== Departmental Productivity ROI ==",
        REPORT_THREE_YEAR_HEADING => "== Strategy Report (3-Year ROI) ==",
        REPORT_DEPT_COST => "Total dept. burdened cost",
        REPORT_EMPLOYEES => "Employees",
        REPORT_ANNUAL_SAVINGS => "Total annual savings",
        REPORT_HOURLY_RATE => "Blended hourly rate",
        REPORT_FTE => "Capacity reclaimed (FTE)",
        REPORT_HOURS_SAVED => "Hours saved / year",
        REPORT_WEEKLY_WASTE => "Waste per person / week",
        REPORT_CAPACITY => "-- Capacity breakdown [h] --",
        REPORT_PRODUCTIVE => "Productive",
        REPORT_SAVED => "Saved",
        REPORT_REMAINING_WASTE => "Remaining waste",
        REPORT_NPV => "3-year project NPV",
        REPORT_PAYBACK => "Payback",
        REPORT_STEADY_STATE => "Steady state saving / yr",
        REPORT_INTERNAL_COST => "Internal labor value",
        REPORT_CASH_FLOW => "-- Projected cash flows --",
        REPORT_COL_YEAR => "Year",
        REPORT_COL_INVESTMENT => "Investment",
        REPORT_COL_GROSS => "Gross savings",
        REPORT_COL_NET => "Net cash flow",
        REPORT_COL_CUMULATIVE => "Cumulative",
        REPORT_MONTHS => "months",
        REPORT_BREAK_EVEN => "Break-even",
        REPORT_BREAK_EVEN_NONE => "not within 3 years",
        REPORT_YEAR_ONE_SAVING => "Year 1 saving (40% adoption)",
        WASTE_RESULT_BASIS => "Input basis",
        WASTE_BASIS_PERCENTAGE => "% of annual time",
        WASTE_BASIS_HOURS => "hours per week",
        WASTE_RESULT_FRACTION => "Waste share of annual time",
        WASTE_RESULT_HOURS => "Waste hours per person / week",
        _ => return None,
    })
}
