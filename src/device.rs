use std::default::Default;
use std::fmt;

use tracing::debug;

// identifies the device at the other end of a chain link
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceId(pub String);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generic element in a ground station signal chain.
///
/// Defaults to a lossy cable. The noise temperature is derived from the gain,
/// treated as a loss, and the ambient temperature the loss sits at.
#[derive(Clone, Debug, PartialEq)]
pub struct Device {
    pub name: String,
    pub noise_figure: f64,          // dB
    pub in_dev: Option<DeviceId>,   // upstream device
    pub out_dev: Option<DeviceId>,  // downstream device
    pub in_bw: Option<f64>,         // Hz
    pub out_bw: Option<f64>,        // Hz
    pub frequency: Option<f64>,     // Hz
    pub out_freq: Option<f64>,      // Hz
    gain: f64,                      // dB
    ambient_temp: f64,              // K
    noise_temperature: f64,         // K, derived from gain and ambient_temp
}

impl Default for Device {
    fn default() -> Self {
        Device::new("Cable", -0.5)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: gain {} dB, T {} K",
            self.name, self.gain, self.noise_temperature
        )
    }
}

impl Device {
    pub fn new(name: impl Into<String>, gain: f64) -> Device {
        let ambient_temp = 290.0;
        Device {
            name: name.into(),
            noise_figure: -0.5,
            in_dev: None,
            out_dev: None,
            in_bw: None,
            out_bw: None,
            frequency: None,
            out_freq: None,
            gain,
            ambient_temp,
            noise_temperature: noise_temperature_from_loss(gain, ambient_temp),
        }
    }

    pub fn id(&self) -> DeviceId {
        DeviceId(self.name.clone())
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn ambient_temp(&self) -> f64 {
        self.ambient_temp
    }

    pub fn noise_temperature(&self) -> f64 {
        self.noise_temperature
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
        self.recompute_noise_temperature();
    }

    pub fn set_ambient_temp(&mut self, ambient_temp: f64) {
        self.ambient_temp = ambient_temp;
        self.recompute_noise_temperature();
    }

    /// Record the neighbours of this device in the chain.
    ///
    /// The links are advisory; nothing is validated and the other devices are untouched.
    pub fn connect(&mut self, dev_in: Option<DeviceId>, dev_out: Option<DeviceId>) {
        debug!(device = %self.name, ?dev_in, ?dev_out, "connect");
        self.in_dev = dev_in;
        self.out_dev = dev_out;
    }

    // antennas replace the loss-derived temperature with their own budget
    pub(crate) fn override_gain_and_temperature(&mut self, gain: f64, noise_temperature: f64) {
        self.gain = gain;
        self.noise_temperature = noise_temperature;
    }

    fn recompute_noise_temperature(&mut self) {
        self.noise_temperature = noise_temperature_from_loss(self.gain, self.ambient_temp);
        debug!(
            device = %self.name,
            gain = self.gain,
            noise_temperature = self.noise_temperature,
            "recomputed noise temperature"
        );
    }
}

/// Equivalent noise temperature of a loss (dB, sign ignored) at `ambient_temp` kelvin.
///
/// `T = (10^(|loss|/10) - 1) * ambient_temp`, so a lossless device contributes 0 K.
pub fn noise_temperature_from_loss(loss: f64, ambient_temp: f64) -> f64 {
    (rfconversions::power::db_to_linear(loss.abs()) - 1.0) * ambient_temp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default() {
        let cable = Device::default();
        assert_eq!(cable.name, "Cable");
        assert_eq!(cable.gain(), -0.5);
        assert_eq!(cable.noise_figure, -0.5);
        assert_eq!(cable.ambient_temp(), 290.0);
        assert_eq!(cable.in_dev, None);
        assert_eq!(cable.out_dev, None);
        assert_eq!(cable.in_bw, None);
        assert_eq!(cable.frequency, None);
        assert_eq!(cable.out_freq, None);
        assert_approx(cable.noise_temperature(), 35.385351747569366, 1e-9);
    }

    #[test]
    fn lossless_device_has_no_noise() {
        let through = Device::new("Through", 0.0);
        assert_eq!(through.noise_temperature(), 0.0);
    }

    #[test]
    fn loss_sign_is_ignored() {
        let lossy = Device::new("Attenuator", -3.0);
        let positive = Device::new("Attenuator", 3.0);
        assert_eq!(lossy.noise_temperature(), positive.noise_temperature());
        assert_approx(lossy.noise_temperature(), 288.62607134097505, 1e-6);
    }

    #[test]
    fn set_gain_recomputes_noise_temperature() {
        let mut cable = Device::default();
        cable.set_gain(-1.0);
        assert_eq!(cable.gain(), -1.0);
        assert_approx(cable.noise_temperature(), 75.08836942030851, 1e-9);
    }

    #[test]
    fn set_ambient_temp_recomputes_noise_temperature() {
        let mut cable = Device::default();
        cable.set_ambient_temp(0.0);
        assert_eq!(cable.noise_temperature(), 0.0);
    }

    #[test]
    fn connect_stores_links() {
        let lna = Device::new("LNA", 50.0);
        let mut cable = Device::default();
        cable.connect(None, Some(lna.id()));

        assert_eq!(cable.in_dev, None);
        assert_eq!(cable.out_dev, Some(DeviceId("LNA".to_string())));
        // the linked device is not modified
        assert_eq!(lna.in_dev, None);
    }

    #[test]
    fn display() {
        let through = Device::new("Through", 0.0);
        assert_eq!(through.to_string(), "Through: gain 0 dB, T 0 K");
    }
}
