//! Cross-checks between the z-factor and viscosity correlations.

use wp_fluids::{GasProperties, ViscosityMethod, ZMethod};

#[test]
fn all_z_methods_converge_over_a_pressure_sweep() {
    for method in ZMethod::ALL {
        let gas = GasProperties::new(0.7).unwrap().with_z_method(method);
        for p in (100..=5000).step_by(100) {
            let result = gas
                .evaluate(p as f64, 200.0)
                .unwrap_or_else(|e| panic!("{method} at {p} psia: {e}"));
            assert!(result.is_converged(), "{method} did not converge at {p} psia");
        }
    }
}

#[test]
fn z_methods_agree_within_a_few_percent() {
    let methods = ZMethod::ALL.map(|m| GasProperties::new(0.7).unwrap().with_z_method(m));
    for p in (200..=5000).step_by(400) {
        let zs: Vec<f64> = methods
            .iter()
            .map(|g| g.evaluate(p as f64, 200.0).unwrap().converged().unwrap().z)
            .collect();
        let lo = zs.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = zs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((hi - lo) / lo < 0.06, "spread at {p} psia: {zs:?}");
    }
}

#[test]
fn viscosity_follows_density_through_z() {
    for method in ViscosityMethod::ALL {
        let gas = GasProperties::new(0.65)
            .unwrap()
            .with_viscosity_method(method);
        let low = gas.evaluate(500.0, 180.0).unwrap().converged().unwrap();
        let high = gas.evaluate(4000.0, 180.0).unwrap().converged().unwrap();
        assert!(high.density > low.density);
        assert!(high.viscosity > low.viscosity, "{method}");
        assert!(low.viscosity > 0.008 && high.viscosity < 0.05, "{method}");
    }
}
