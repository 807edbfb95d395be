//! README example: 2. An Antenna

use groundchain::{Antenna, RfError};

fn assert_approx(actual: f64, expected: f64, tol: f64, msg: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{msg}: expected {expected:.6}, got {actual:.6}"
    );
}

#[test]
fn s_band_13m_antenna() {
    let mut antenna = Antenna::new("13M-1", 13.0, 52.8).with_ambient_temp_k(290.0);
    assert_approx(antenna.area(), 132.73, 0.01, "Area");

    antenna.set_frequency(2.2e9).unwrap();

    assert_approx(antenna.gain(), 46.76, 0.01, "Gain");
    assert_approx(antenna.beamwidth().unwrap(), 0.734, 0.001, "Beamwidth");
    // 45 K sky through the main beam plus ground through the backlobes
    assert_approx(antenna.noise_temperature(), 126.42, 1e-6, "Antenna T");
}

#[test]
fn retuning_overwrites_derived_state() {
    let mut antenna = Antenna::default().with_ambient_temp_k(290.0);
    antenna.set_frequency(2.2e9).unwrap();
    let s_band = antenna.clone();

    antenna.set_frequency(8.2e9).unwrap();

    assert_eq!(antenna.frequency(), Some(8.2e9));
    assert_approx(antenna.wavelength().unwrap(), 0.036560055853658534, 1e-12, "Wavelength");
    assert_approx(antenna.beamwidth().unwrap(), 0.19686183921200748, 1e-12, "Beamwidth");
    assert_approx(antenna.gain(), 58.18806671447332, 1e-9, "Gain");
    assert_ne!(antenna.gain(), s_band.gain());

    // tuning back reproduces the first result exactly
    antenna.set_frequency(2.2e9).unwrap();
    assert_eq!(antenna, s_band);
}

#[test]
fn ground_temperature_must_be_set() {
    let mut antenna = Antenna::default();
    assert_eq!(
        antenna.set_frequency(2.2e9),
        Err(RfError::UninitializedField("ambient_temp_k"))
    );
}

#[test]
fn zero_efficiency_is_a_domain_error() {
    let mut antenna = Antenna::new("Blocked", 13.0, 0.0).with_ambient_temp_k(290.0);
    let err = antenna.set_frequency(2.2e9).unwrap_err();
    assert_eq!(
        err,
        RfError::Domain {
            operation: "log10",
            value: 0.0
        }
    );
}
