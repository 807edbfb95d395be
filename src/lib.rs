mod antenna;
mod config;
pub mod constants;
mod device;
mod error;

pub use antenna::{Antenna, AntennaTemperature};
pub use config::{load_config, DeviceConfig, Element, StationConfig};
pub use device::{noise_temperature_from_loss, Device, DeviceId};
pub use error::{ConfigError, RfError};

use constants::SPEED_OF_LIGHT;

/// Wavelength in meters of a frequency in Hz.
pub fn freq_to_length(freq: f64) -> Result<f64, RfError> {
    if freq == 0.0 {
        return Err(RfError::DivisionByZero {
            quantity: "wavelength",
        });
    }
    Ok(SPEED_OF_LIGHT / freq)
}

/// The view of a chain element a link budget needs.
///
/// Implemented by [`Device`] and [`Antenna`]; the derived figures are
/// computed from the gain and noise temperature alone.
pub trait ChainElement {
    fn name(&self) -> &str;

    /// dB
    fn gain(&self) -> f64;

    /// K
    fn noise_temperature(&self) -> f64;

    /// Figure of merit G/T in dB/K.
    fn figure_of_merit(&self) -> Result<f64, RfError> {
        let t = self.noise_temperature();
        if t.is_nan() || t <= 0.0 {
            return Err(RfError::Domain {
                operation: "log10",
                value: t,
            });
        }
        Ok(self.gain() - 10.0 * t.log10())
    }

    /// Thermal noise spectral density kT in dBm/Hz.
    fn noise_spectral_density(&self) -> Result<f64, RfError> {
        let noise_spectral_density = constants::BOLTZMANN * self.noise_temperature();
        if noise_spectral_density.is_nan() || noise_spectral_density <= 0.0 {
            return Err(RfError::Domain {
                operation: "log10",
                value: noise_spectral_density,
            });
        }
        Ok(rfconversions::power::watts_to_dbm(noise_spectral_density))
    }

    /// Noise figure (dB) equivalent to the noise temperature, referenced to 290 K.
    fn equivalent_noise_figure(&self) -> f64 {
        rfconversions::noise::noise_figure_from_noise_temperature(self.noise_temperature())
    }
}

impl ChainElement for Device {
    fn name(&self) -> &str {
        &self.name
    }

    fn gain(&self) -> f64 {
        Device::gain(self)
    }

    fn noise_temperature(&self) -> f64 {
        Device::noise_temperature(self)
    }
}

impl ChainElement for Antenna {
    fn name(&self) -> &str {
        Antenna::name(self)
    }

    fn gain(&self) -> f64 {
        Antenna::gain(self)
    }

    fn noise_temperature(&self) -> f64 {
        Antenna::noise_temperature(self)
    }
}
