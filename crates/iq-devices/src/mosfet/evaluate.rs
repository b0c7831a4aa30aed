//! MOSFET DC evaluation
//!
//! ## DC Current Model
//!
//! **Cutoff (Vg < Vth)**:
//! - Id = 0
//!
//! **Linear (Vd < Vg - Vth)**:
//! - Id = k * [(Vg-Vth)*Vd - Vd^2/2]
//!
//! **Saturation (Vd >= Vg - Vth)**:
//! - Id = k/2 * (Vg-Vth)^2
//!
//! with k = mobility * Cox and Cox = EPSILON_OX / tox. Negative Vd is not
//! clamped; callers sweep Vd from zero upward.

use super::params::DeviceParameters;
use super::types::{MosRegion, MosfetOutput};
use crate::error::DeviceError;

/// Evaluate drain current, region and small-signal conductances at `vd`.
///
/// Fails only when `params.tox` is not positive.
pub fn evaluate_mosfet_dc(params: &DeviceParameters, vd: f64) -> Result<MosfetOutput, DeviceError> {
    let k = params.k()?;
    let vgst = params.overdrive();

    if params.vg < params.vth {
        return Ok(MosfetOutput {
            id: 0.0,
            gm: 0.0,
            gds: 0.0,
            region: MosRegion::Cutoff,
        });
    }

    let out = if vd < vgst {
        MosfetOutput {
            id: k * (vgst * vd - 0.5 * vd * vd),
            gm: k * vd,
            gds: k * (vgst - vd),
            region: MosRegion::Linear,
        }
    } else {
        MosfetOutput {
            id: 0.5 * k * vgst * vgst,
            gm: k * vgst,
            gds: 0.0,
            region: MosRegion::Saturation,
        }
    };
    Ok(out)
}

/// Drain current [A] for the given bias and process point.
///
/// `tox` in meters, `mobility` in m^2/V/s.
pub fn mosfet_iv(vg: f64, vd: f64, tox: f64, mobility: f64, vth: f64) -> Result<f64, DeviceError> {
    let params = DeviceParameters {
        vg,
        tox,
        mobility,
        vth,
    };
    evaluate_mosfet_dc(&params, vd).map(|out| out.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn nominal() -> DeviceParameters {
        DeviceParameters {
            vg: 1.0,
            tox: 1.5e-9,
            mobility: 200e-4,
            vth: 0.4,
        }
    }

    #[test]
    fn test_cutoff() {
        let params = DeviceParameters {
            vg: 0.3,
            ..nominal()
        };
        let out = evaluate_mosfet_dc(&params, 1.0).unwrap();
        assert_eq!(out.region, MosRegion::Cutoff);
        assert_eq!(out.id, 0.0);
    }

    #[test]
    fn test_linear() {
        let out = evaluate_mosfet_dc(&nominal(), 0.1).unwrap();
        assert_eq!(out.region, MosRegion::Linear);
        // k = 0.02 * 0.023 = 4.6e-4; Id = k * (0.6*0.1 - 0.005)
        assert_relative_eq!(out.id, 4.6e-4 * 0.055, max_relative = 1e-12);
        assert_relative_eq!(out.gds, 4.6e-4 * 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_saturation() {
        let out = evaluate_mosfet_dc(&nominal(), 1.5).unwrap();
        assert_eq!(out.region, MosRegion::Saturation);
        assert_relative_eq!(out.id, 0.5 * 4.6e-4 * 0.36, max_relative = 1e-12);
        assert_eq!(out.gds, 0.0);
    }

    #[test]
    fn test_boundary_is_saturation() {
        let out = evaluate_mosfet_dc(&nominal(), 0.6).unwrap();
        assert_eq!(out.region, MosRegion::Saturation);
    }

    #[test]
    fn test_continuous_at_pinch_off() {
        let params = nominal();
        let vgst = params.overdrive();
        let k = params.k().unwrap();
        let triode = k * (vgst * vgst - 0.5 * vgst * vgst);
        let saturation = evaluate_mosfet_dc(&params, vgst).unwrap().id;
        assert_relative_eq!(triode, saturation, max_relative = 1e-12);

        let just_below = evaluate_mosfet_dc(&params, vgst - 1e-9).unwrap();
        assert_eq!(just_below.region, MosRegion::Linear);
        assert_relative_eq!(just_below.id, saturation, max_relative = 1e-9);
    }

    #[test]
    fn test_ids_increases_with_vg() {
        let base = nominal();
        let id1 = evaluate_mosfet_dc(&DeviceParameters { vg: 1.0, ..base }, 1.5).unwrap().id;
        let id2 = evaluate_mosfet_dc(&DeviceParameters { vg: 1.5, ..base }, 1.5).unwrap().id;
        let id3 = evaluate_mosfet_dc(&DeviceParameters { vg: 2.0, ..base }, 1.5).unwrap().id;
        assert!(id2 > id1);
        assert!(id3 > id2);
    }

    #[test]
    fn test_zero_tox_is_domain_error() {
        let err = mosfet_iv(1.0, 0.5, 0.0, 0.02, 0.4).unwrap_err();
        assert_eq!(err, DeviceError::NonPositiveOxide { tox: 0.0 });
    }

    #[test]
    fn test_deterministic() {
        let a = mosfet_iv(1.3, 0.7, 2e-9, 0.03, 0.5).unwrap();
        let b = mosfet_iv(1.3, 0.7, 2e-9, 0.03, 0.5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    proptest! {
        #[test]
        fn cutoff_for_any_drain_voltage(
            vth in 0.1f64..1.0,
            below in 0.0f64..0.1,
            vd in 0.0f64..1.5,
            tox_nm in 0.5f64..5.0,
        ) {
            let vg = vth - below - 1e-6;
            let id = mosfet_iv(vg, vd, tox_nm * 1e-9, 0.02, vth).unwrap();
            prop_assert_eq!(id, 0.0);
        }

        #[test]
        fn current_non_decreasing_in_drain_voltage(
            vg in 0.0f64..2.0,
            vth in 0.1f64..1.0,
            vd in 0.0f64..1.49,
        ) {
            let lo = mosfet_iv(vg, vd, 1.5e-9, 0.02, vth).unwrap();
            let hi = mosfet_iv(vg, vd + 0.01, 1.5e-9, 0.02, vth).unwrap();
            prop_assert!(hi >= lo * (1.0 - 1e-12));
        }
    }
}
