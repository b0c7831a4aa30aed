//! Evaluation of a [`ModeRequest`] into a [`Report`]
//!
//! Each mode validates its inputs against the slider bounds, converts to SI,
//! calls the matching `iq-devices` formula and packages the result. Nothing
//! is cached between calls.

use tracing::debug;

use iq_devices::cnt::cnt_bandgap;
use iq_devices::double_gate::dg_threshold;
use iq_devices::mobility::mobility_curve;
use iq_devices::mosfet::evaluate_mosfet_dc;
use iq_devices::radiation::radiation_shift;

use crate::error::CoreError;
use crate::mode::{Mode, ModeRequest};
use crate::params::{CntParams, DoubleGateParams, MobilityParams, MosfetIvParams, RadiationParams};
use crate::report::{PlotSpec, Report, Severity};
use crate::sweep::Linspace;

/// Drain voltage sweep of the I-V plot [V]
pub const DRAIN_SWEEP: Linspace = Linspace::new(0.0, 1.5, 200);
/// Lateral field sweep of the mobility plot [V/m]
pub const FIELD_SWEEP: Linspace = Linspace::new(1e4, 1e7, 200);

/// Validate `request` and evaluate its mode.
pub fn evaluate(request: &ModeRequest) -> Result<Report, CoreError> {
    request.validate()?;
    let report = match request {
        ModeRequest::MosfetIv(p) => mosfet_iv_report(p)?,
        ModeRequest::DoubleGate(p) => double_gate_report(p),
        ModeRequest::CntBandgap(p) => cnt_report(p)?,
        ModeRequest::Mobility(p) => mobility_report(p),
        ModeRequest::Radiation(p) => radiation_report(p),
    };
    debug!(
        mode = report.mode.slug(),
        readouts = report.readouts.len(),
        points = report.plot.as_ref().map_or(0, |plot| plot.points.len()),
        "evaluated"
    );
    Ok(report)
}

/// Evaluate `mode` at its slider defaults.
pub fn evaluate_defaults(mode: Mode) -> Result<Report, CoreError> {
    evaluate(&ModeRequest::defaults(mode))
}

fn mosfet_iv_report(p: &MosfetIvParams) -> Result<Report, CoreError> {
    let device = p.to_device();
    let points = DRAIN_SWEEP.try_sample(|vd| evaluate_mosfet_dc(&device, vd).map(|out| out.id))?;
    let plot = PlotSpec::new(
        "MOSFET I-V Characteristics",
        "Drain Voltage (V)",
        "Drain Current (A)",
        points,
    );
    Ok(Report::new(Mode::MosfetIv).with_plot(plot))
}

fn double_gate_report(p: &DoubleGateParams) -> Report {
    let (thickness, tox) = p.to_si();
    let vth = dg_threshold(thickness, tox);
    Report::new(Mode::DoubleGate)
        .with_readout("Predicted Double Gate MOSFET Vth", vth, "V")
        .with_message(
            Severity::Success,
            format!("Predicted Double Gate MOSFET Vth = {:.3} V", vth),
        )
}

fn cnt_report(p: &CntParams) -> Result<Report, CoreError> {
    let cnt = cnt_bandgap(p.n, p.m)?;
    let (severity, text) = if cnt.kind.is_metallic() {
        (Severity::Warning, "This CNT is metallic!")
    } else {
        (Severity::Success, "This CNT is semiconducting.")
    };
    Ok(Report::new(Mode::CntBandgap)
        .with_readout("CNT Diameter", cnt.diameter_nm, "nm")
        .with_readout("Bandgap", cnt.bandgap_ev, "eV")
        .with_message(severity, text.to_string()))
}

fn mobility_report(p: &MobilityParams) -> Report {
    let mu0 = p.mu0_si();
    let points = mobility_curve(FIELD_SWEEP, mu0).collect();
    let plot = PlotSpec::new(
        "Mobility Degradation Curve",
        "Electric Field (V/m)",
        "Mobility (m²/Vs)",
        points,
    );
    Report::new(Mode::Mobility).with_plot(plot)
}

fn radiation_report(p: &RadiationParams) -> Report {
    let shift = radiation_shift(p.dose_krad);
    // straight line from the origin, not a sampled curve
    let plot = PlotSpec::new(
        "Radiation-Induced ΔVth",
        "Dose (krad)",
        "Threshold Shift (V)",
        vec![(0.0, 0.0), (p.dose_krad, shift)],
    );
    Report::new(Mode::Radiation)
        .with_readout("ΔVth due to radiation", shift, "V")
        .with_plot(plot)
}
