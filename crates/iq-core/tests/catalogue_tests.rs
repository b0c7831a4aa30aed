use iq_core::{Mode, APP_TITLE};

#[test]
fn catalogue_lists_modes_in_dashboard_order() {
    let names: Vec<_> = Mode::ALL.iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        vec![
            "MOSFET I-V",
            "Double Gate MOS Threshold",
            "CNT Bandgap Explorer",
            "Mobility Degradation",
            "Radiation TID Threshold Shift",
        ]
    );
    assert!(APP_TITLE.starts_with("IQ-MOS"));
}

#[test]
fn slider_defaults_sit_inside_their_ranges() {
    for mode in Mode::ALL {
        for slider in mode.sliders() {
            assert!(slider.min <= slider.default && slider.default <= slider.max, "{}", slider.key);
            assert!(slider.step > 0.0);
        }
    }
}

#[test]
fn cnt_sliders_are_integer() {
    let info = Mode::CntBandgap.info();
    assert_eq!(info.sliders.len(), 2);
    assert!(info.sliders.iter().all(|s| s.integer && s.step == 1.0));
}

#[test]
fn catalogue_serializes_slug_and_sliders() {
    let json = serde_json::to_value(Mode::Mobility.info()).unwrap();
    assert_eq!(json["slug"], "mobility");
    assert_eq!(json["sliders"][0]["key"], "mu0_cm2");
    assert_eq!(json["sliders"][0]["max"], 500.0);
}
