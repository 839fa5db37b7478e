//! 분할 불변식, 단조성, 낭비 기준 왕복 변환 속성 테스트.
use productivity_roi::roi::{self, Assumptions};
use productivity_roi::waste_basis::{fraction_to_weekly_hours, weekly_hours_to_fraction};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn within(actual: f64, expected: f64, rel_tol: f64) -> bool {
    (actual - expected).abs() <= rel_tol * expected.abs().max(1.0)
}

prop_compose! {
    fn assumptions()(
        num_employees in 1_u32..5_000,
        annual_salary in 0.0_f64..1_000_000.0,
        fringe_rate in 0.0_f64..=0.5,
        work_days in 1.0_f64..=366.0,
        daily_hours in 0.5_f64..=24.0,
        waste_fraction in 0.0_f64..=1.0,
        improvement_fraction in 0.0_f64..=1.0
    ) -> Assumptions {
        Assumptions {
            num_employees,
            annual_salary,
            fringe_rate,
            work_days,
            daily_hours,
            waste_fraction,
            improvement_fraction,
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn hours_partition_holds(a in assumptions()) {
        let d = roi::single_year(a).expect("valid").department;
        let total = d.annual_hours_per_person * f64::from(a.num_employees);
        prop_assert!(within(d.productive_hours + d.wasted_hours_total, total, 1e-9));
        prop_assert!(within(d.saved_hours + d.remaining_waste_hours, d.wasted_hours_total, 1e-9));
    }

    #[test]
    fn results_are_non_negative(a in assumptions()) {
        let d = roi::single_year(a).expect("valid").department;
        prop_assert!(d.hourly_rate >= 0.0);
        prop_assert!(d.annual_savings >= 0.0);
        prop_assert!(d.fte_recovered >= 0.0);
        prop_assert!(d.hourly_rate.is_finite() && d.annual_savings.is_finite());
    }

    #[test]
    fn savings_monotone_in_improvement(
        a in assumptions(),
        lo in 0.0_f64..=1.0,
        hi in 0.0_f64..=1.0
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let low = roi::single_year(Assumptions { improvement_fraction: lo, ..a }).expect("valid").department;
        let high = roi::single_year(Assumptions { improvement_fraction: hi, ..a }).expect("valid").department;
        prop_assert!(high.annual_savings >= low.annual_savings);
        prop_assert!(high.fte_recovered >= low.fte_recovered);
    }

    #[test]
    fn waste_basis_round_trip(
        fraction in 0.0_f64..=1.0,
        work_days in 0.01_f64..=366.0,
        daily_hours in 0.01_f64..=24.0
    ) {
        let weekly = fraction_to_weekly_hours(fraction, work_days, daily_hours).expect("to weekly");
        let back = weekly_hours_to_fraction(weekly, work_days, daily_hours).expect("to fraction");
        prop_assert!(within(back, fraction, 1e-9), "{} -> {} -> {}", fraction, weekly, back);
    }
}
