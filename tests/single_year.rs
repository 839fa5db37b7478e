//! 단년도 부서 ROI 기준 시나리오 회귀 테스트.
use productivity_roi::config::AssumptionDefaults;
use productivity_roi::roi::{self, Assumptions, Mode, RoiError};
use productivity_roi::waste_basis::WasteBasis;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn reference() -> Assumptions {
    Assumptions {
        num_employees: 10,
        annual_salary: 120_000.0,
        fringe_rate: 0.25,
        work_days: 220.0,
        daily_hours: 7.5,
        waste_fraction: 0.20,
        improvement_fraction: 0.50,
    }
}

#[test]
fn reference_department() {
    let report = roi::single_year(reference()).expect("single year");
    let d = report.department;
    assert_close("burdened", d.burdened_cost_per_person, 150_000.0, 1e-12);
    assert_close("hours", d.annual_hours_per_person, 1_650.0, 1e-12);
    assert_close("rate", d.hourly_rate, 90.909_090_909, 1e-9);
    assert_close("dept cost", d.total_department_cost, 1_500_000.0, 1e-12);
    assert_close("wasted", d.wasted_hours_total, 3_300.0, 1e-12);
    assert_close("saved", d.saved_hours, 1_650.0, 1e-12);
    assert_close("remaining", d.remaining_waste_hours, 1_650.0, 1e-12);
    assert_close("productive", d.productive_hours, 13_200.0, 1e-12);
    assert_close("savings", d.annual_savings, 150_000.0, 1e-9);
    assert_close("fte", d.fte_recovered, 1.0, 1e-12);
    assert_close("weekly", d.weekly_waste_hours_per_person, 7.5, 1e-9);
    assert!(report.projection.is_none());
}

#[test]
fn single_year_entry_matches_mode_flag() {
    let a = roi::single_year(reference()).expect("entry");
    let b = roi::compute(reference(), Mode::SingleYear).expect("mode");
    assert_eq!(a, b);
}

#[test]
fn zero_work_days_is_invalid_assumption() {
    let err = roi::single_year(Assumptions {
        work_days: 0.0,
        ..reference()
    })
    .unwrap_err();
    assert!(matches!(err, RoiError::InvalidAssumption { field: "work_days", .. }));
}

#[test]
fn zero_daily_hours_is_invalid_assumption() {
    let err = roi::single_year(Assumptions {
        daily_hours: 0.0,
        ..reference()
    })
    .unwrap_err();
    assert_eq!(err.field(), "daily_hours");
}

#[test]
fn zero_headcount_is_invalid_assumption() {
    let err = roi::single_year(Assumptions {
        num_employees: 0,
        ..reference()
    })
    .unwrap_err();
    assert_eq!(err.field(), "num_employees");
}

#[test]
fn out_of_range_fractions_are_rejected() {
    let cases = [
        Assumptions {
            fringe_rate: -0.01,
            ..reference()
        },
        Assumptions {
            waste_fraction: 1.2,
            ..reference()
        },
        Assumptions {
            improvement_fraction: 1.0001,
            ..reference()
        },
    ];
    for a in cases {
        assert!(roi::single_year(a).is_err(), "{a:?}");
    }
}

#[test]
fn improvement_boundaries() {
    let none = roi::single_year(Assumptions {
        improvement_fraction: 0.0,
        ..reference()
    })
    .expect("zero improvement")
    .department;
    assert_eq!(none.annual_savings, 0.0);
    assert_eq!(none.fte_recovered, 0.0);

    let full = roi::single_year(Assumptions {
        improvement_fraction: 1.0,
        ..reference()
    })
    .expect("full improvement")
    .department;
    assert_eq!(full.saved_hours, full.wasted_hours_total);
    assert_eq!(full.remaining_waste_hours, 0.0);
}

#[test]
fn overflowing_salary_is_invalid_assumption() {
    let err = roi::single_year(Assumptions {
        annual_salary: f64::MAX,
        fringe_rate: 0.5,
        improvement_fraction: 0.0,
        ..reference()
    })
    .unwrap_err();
    assert_eq!(err.field(), "burdened_cost_per_person");
}

#[test]
fn weekly_waste_above_working_week_is_rejected() {
    // 주 37.5시간 근무에서 주당 40시간 낭비는 비율 1을 넘는다.
    let a = AssumptionDefaults {
        waste_basis: WasteBasis::HoursPerWeek,
        waste_hours_per_week: 40.0,
        ..Default::default()
    }
    .to_assumptions()
    .expect("conversion keeps the raw fraction");
    assert!(a.waste_fraction > 1.0, "{}", a.waste_fraction);
    let err = roi::single_year(a).unwrap_err();
    assert_eq!(err.field(), "waste_fraction");
}
