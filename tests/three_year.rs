//! 3개년 현금흐름/NPV/회수기간 회귀 테스트.
use productivity_roi::roi::{
    self, Assumptions, ImplementationIntensity, Investment, ADOPTION_CURVE,
};

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

fn investment() -> Investment {
    Investment {
        initial_external_cost: 75_000.0,
        recurring_annual_cost: 15_000.0,
        intensity: ImplementationIntensity::Medium,
        discount_rate: 0.10,
    }
}

#[test]
fn reference_projection() {
    let report = roi::three_year(reference(), investment()).expect("three year");
    let p = report.projection.expect("projection");

    assert_close("steady", p.steady_state_saving, 150_000.0, 1e-9);
    assert_close("internal", p.internal_resource_cost, 90_000.0, 1e-12);
    assert_close("upfront", p.total_upfront, 165_000.0, 1e-12);

    let expected_net = [
        -165_000.0,
        150_000.0 * ADOPTION_CURVE[0] - 15_000.0,
        150_000.0 * ADOPTION_CURVE[1] - 15_000.0,
        150_000.0 * ADOPTION_CURVE[2] - 15_000.0,
    ];
    for (y, want) in p.years.iter().zip(expected_net) {
        assert_close(&y.label(), y.net_cash_flow, want, 1e-9);
    }

    let discounted: f64 = expected_net
        .iter()
        .enumerate()
        .map(|(n, cf)| cf / 1.1_f64.powi(n as i32))
        .sum();
    assert_close("npv", p.npv, discounted, 1e-9);
    assert_close("npv literal", p.npv, 70_311.795_6, 1e-6);

    let payback = p.payback_months.expect("payback defined");
    assert_close("payback", payback, 12.0 * 165_000.0 / (150_000.0 * 0.40), 1e-9);
    assert_close("payback months", payback, 33.0, 1e-9);
    assert_close("cumulative y3", p.years[3].cumulative_cash_flow, 127_500.0, 1e-9);
}

#[test]
fn investment_rows_carry_outflows() {
    let p = roi::three_year(reference(), investment())
        .expect("three year")
        .projection
        .expect("projection");
    assert_eq!(p.years[0].investment, -165_000.0);
    assert_eq!(p.years[0].gross_savings, 0.0);
    for y in &p.years[1..] {
        assert_eq!(y.investment, -15_000.0);
    }
}

#[test]
fn payback_undefined_without_savings() {
    let report = roi::three_year(
        Assumptions {
            improvement_fraction: 0.0,
            ..reference()
        },
        investment(),
    )
    .expect("zero improvement still computes");
    let p = report.projection.expect("projection");
    assert_eq!(p.payback_months, None);
    let err = p.payback_months_checked().unwrap_err();
    assert_eq!(err.field(), "payback_months");
    assert!(p.npv < 0.0);
}

#[test]
fn higher_intensity_costs_more() {
    let npvs: Vec<f64> = ImplementationIntensity::ALL
        .iter()
        .map(|&intensity| {
            roi::three_year(
                reference(),
                Investment {
                    intensity,
                    ..investment()
                },
            )
            .expect("three year")
            .projection
            .expect("projection")
            .npv
        })
        .collect();
    assert!(npvs[0] > npvs[1] && npvs[1] > npvs[2], "{npvs:?}");
}

#[test]
fn discount_rate_outside_band_is_rejected() {
    for rate in [0.04, 0.16] {
        let err = roi::three_year(
            reference(),
            Investment {
                discount_rate: rate,
                ..investment()
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), "discount_rate");
    }
}

#[test]
fn overflowing_investment_is_invalid_assumption() {
    let err = roi::three_year(
        reference(),
        Investment {
            initial_external_cost: f64::MAX,
            recurring_annual_cost: f64::MAX,
            intensity: ImplementationIntensity::High,
            ..investment()
        },
    )
    .unwrap_err();
    assert_eq!(err.field(), "internal_resource_cost");
}
