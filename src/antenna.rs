use std::f64::consts::PI;
use std::fmt;

use tracing::{debug, trace};

use crate::device::{Device, DeviceId};
use crate::error::RfError;
use crate::freq_to_length;

/// Noise temperature contributions of an antenna, in kelvin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntennaTemperature {
    /// Sky noise seen through the main beam.
    pub main_beam: f64,
    /// Ground noise picked up by the backlobe.
    pub ground_backlobe: f64,
    /// Half-weighted backlobe contribution.
    pub half_backlobe: f64,
}

impl AntennaTemperature {
    pub fn total(&self) -> f64 {
        self.main_beam + self.ground_backlobe + self.half_backlobe
    }
}

/// A parabolic ground station antenna.
///
/// Built around a [`Device`] that carries the name, chain links, gain and
/// noise temperature. The gain and noise temperature inherited from the
/// default cable are stale until [`Antenna::set_frequency`] has run.
#[derive(Clone, Debug, PartialEq)]
pub struct Antenna {
    device: Device,
    diameter: f64,                   // m
    efficiency: f64,                 // %, aperture efficiency
    area: f64,                       // m^2
    pub sky_temp_k: f64,             // K
    pub ambient_temp_k: Option<f64>, // K, ground temperature behind the dish
    wavelength: Option<f64>,         // m
    beamwidth: Option<f64>,          // degrees
}

impl Default for Antenna {
    fn default() -> Self {
        Antenna::new("13M-1", 13.0, 52.8)
    }
}

impl fmt::Display for Antenna {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            display_optional(self.device.frequency),
            self.device.gain(),
            self.device.noise_temperature(),
            display_optional(self.beamwidth)
        )
    }
}

fn display_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

impl Antenna {
    pub fn new(name: impl Into<String>, diameter: f64, efficiency: f64) -> Antenna {
        let mut device = Device::default();
        device.name = name.into();
        Antenna {
            device,
            diameter,
            efficiency,
            area: PI * diameter.powi(2) / 4.0,
            sky_temp_k: 45.0,
            ambient_temp_k: None,
            wavelength: None,
            beamwidth: None,
        }
    }

    pub fn with_sky_temp_k(mut self, sky_temp_k: f64) -> Self {
        self.sky_temp_k = sky_temp_k;
        self
    }

    pub fn with_ambient_temp_k(mut self, ambient_temp_k: f64) -> Self {
        self.ambient_temp_k = Some(ambient_temp_k);
        self
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn name(&self) -> &str {
        &self.device.name
    }

    pub fn id(&self) -> DeviceId {
        self.device.id()
    }

    pub fn connect(&mut self, dev_in: Option<DeviceId>, dev_out: Option<DeviceId>) {
        self.device.connect(dev_in, dev_out);
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn frequency(&self) -> Option<f64> {
        self.device.frequency
    }

    pub fn wavelength(&self) -> Option<f64> {
        self.wavelength
    }

    pub fn beamwidth(&self) -> Option<f64> {
        self.beamwidth
    }

    pub fn gain(&self) -> f64 {
        self.device.gain()
    }

    pub fn noise_temperature(&self) -> f64 {
        self.device.noise_temperature()
    }

    /// Tune the antenna to `frequency` (Hz), deriving wavelength, beamwidth,
    /// gain and noise temperature.
    ///
    /// Nothing is validated up front; the call fails where the arithmetic
    /// breaks down. On error the antenna is left as it was.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), RfError> {
        let wavelength = freq_to_length(frequency)?;

        if self.diameter == 0.0 {
            return Err(RfError::DivisionByZero {
                quantity: "beamwidth",
            });
        }
        // empirical half-power beamwidth, degrees
        let beamwidth = 70.0 * wavelength / self.diameter;

        if wavelength == 0.0 {
            return Err(RfError::DivisionByZero { quantity: "gain" });
        }
        let aperture_gain = self.efficiency / 100.0 * (PI * self.diameter / wavelength).powi(2);
        if aperture_gain.is_nan() || aperture_gain <= 0.0 {
            return Err(RfError::Domain {
                operation: "log10",
                value: aperture_gain,
            });
        }
        if aperture_gain.is_infinite() {
            return Err(RfError::Overflow { quantity: "gain" });
        }
        let gain = 10.0 * aperture_gain.log10();

        let budget = self.temperature_budget(beamwidth)?;

        self.device.frequency = Some(frequency);
        self.wavelength = Some(wavelength);
        self.beamwidth = Some(beamwidth);
        self.device.override_gain_and_temperature(gain, budget.total());

        debug!(
            antenna = %self.device.name,
            frequency,
            wavelength,
            beamwidth,
            gain,
            noise_temperature = budget.total(),
            "set frequency"
        );
        Ok(())
    }

    /// Recompute the antenna noise temperature from the current beamwidth,
    /// store it, and return it.
    pub fn calc_antenna_temp(&mut self) -> Result<f64, RfError> {
        let budget = self.antenna_temperature_budget()?;
        let total = budget.total();
        let gain = self.device.gain();
        self.device.override_gain_and_temperature(gain, total);
        Ok(total)
    }

    /// The three noise temperature contributions at the current beamwidth.
    pub fn antenna_temperature_budget(&self) -> Result<AntennaTemperature, RfError> {
        let beamwidth = self
            .beamwidth
            .ok_or(RfError::UninitializedField("beamwidth"))?;
        self.temperature_budget(beamwidth)
    }

    // Each term is weighted over the beamwidth it is collected from. The weights
    // cancel, but a zero beamwidth still has to fail.
    fn temperature_budget(&self, beamwidth: f64) -> Result<AntennaTemperature, RfError> {
        if beamwidth == 0.0 {
            return Err(RfError::DivisionByZero {
                quantity: "antenna temperature",
            });
        }
        let ambient_temp_k = self
            .ambient_temp_k
            .ok_or(RfError::UninitializedField("ambient_temp_k"))?;
        let efficiency = self.efficiency / 100.0;

        let budget = AntennaTemperature {
            main_beam: 1.0 / beamwidth * (self.sky_temp_k * efficiency * beamwidth),
            ground_backlobe: 1.0 / beamwidth
                * (ambient_temp_k * (1.0 - efficiency) / 2.0 * beamwidth),
            half_backlobe: 1.0 / beamwidth
                * (ambient_temp_k / 2.0 * (1.0 - efficiency) / 2.0 * beamwidth),
        };
        trace!(?budget, "antenna temperature budget");
        Ok(budget)
    }
}
