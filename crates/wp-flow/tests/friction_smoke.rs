//! Integration tests for friction on real conduit geometry.

use wp_flow::{Conduit, FrictionModel, LAMINAR_REYNOLDS, Roughness, fanning};

#[test]
fn tubing_friction_in_expected_band() {
    // 2-7/8" tubing, new steel.
    let tubing = Conduit::new(8000.0, 2.441, 90.0, Roughness::Absolute(0.0006)).unwrap();
    let rel = tubing.relative_roughness();
    for model in FrictionModel::ALL {
        let f = fanning(2e5, rel, model);
        assert!(f > 0.003 && f < 0.006, "{model}: {f}");
    }
}

#[test]
fn rougher_pipe_means_more_friction() {
    let smooth = Conduit::new(5000.0, 3.0, 90.0, Roughness::Relative(1e-5)).unwrap();
    let rough = Conduit::new(5000.0, 3.0, 90.0, Roughness::Relative(5e-3)).unwrap();
    for model in FrictionModel::ALL {
        let a = fanning(1e6, smooth.relative_roughness(), model);
        let b = fanning(1e6, rough.relative_roughness(), model);
        assert!(b > a, "{model}");
    }
}

#[test]
fn laminar_branch_below_transition() {
    let re = LAMINAR_REYNOLDS - 1.0;
    for model in FrictionModel::ALL {
        assert!((fanning(re, 0.001, model) - 16.0 / re).abs() < 1e-15);
    }
}
