use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ConfigError, RfError};
use crate::{Antenna, Device, DeviceId};

/// A station's signal chain as described in TOML, listed antenna first.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StationConfig {
    pub devices: Vec<DeviceConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceConfig {
    Cable {
        name: String,
        gain: f64,
        ambient_temp: Option<f64>,
    },
    Antenna {
        name: String,
        diameter: f64,
        efficiency: f64,
        sky_temp_k: Option<f64>,
        ambient_temp_k: Option<f64>,
        frequency: Option<f64>,
    },
}

// a constructed chain element
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Device(Device),
    Antenna(Antenna),
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Device(device) => &device.name,
            Element::Antenna(antenna) => antenna.name(),
        }
    }

    pub fn id(&self) -> DeviceId {
        match self {
            Element::Device(device) => device.id(),
            Element::Antenna(antenna) => antenna.id(),
        }
    }

    pub fn connect(&mut self, dev_in: Option<DeviceId>, dev_out: Option<DeviceId>) {
        match self {
            Element::Device(device) => device.connect(dev_in, dev_out),
            Element::Antenna(antenna) => antenna.connect(dev_in, dev_out),
        }
    }
}

impl DeviceConfig {
    pub fn build(self) -> Result<Element, RfError> {
        match self {
            DeviceConfig::Cable {
                name,
                gain,
                ambient_temp,
            } => {
                let mut device = Device::new(name, gain);
                if let Some(ambient_temp) = ambient_temp {
                    device.set_ambient_temp(ambient_temp);
                }
                Ok(Element::Device(device))
            }
            DeviceConfig::Antenna {
                name,
                diameter,
                efficiency,
                sky_temp_k,
                ambient_temp_k,
                frequency,
            } => {
                let mut antenna = Antenna::new(name, diameter, efficiency);
                if let Some(sky_temp_k) = sky_temp_k {
                    antenna.sky_temp_k = sky_temp_k;
                }
                antenna.ambient_temp_k = ambient_temp_k;
                if let Some(frequency) = frequency {
                    antenna.set_frequency(frequency)?;
                }
                Ok(Element::Antenna(antenna))
            }
        }
    }
}

impl StationConfig {
    pub fn from_toml_str(content: &str) -> Result<StationConfig, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build every device and link each to its neighbours in listed order.
    pub fn build(self) -> Result<Vec<Element>, RfError> {
        let mut elements = self
            .devices
            .into_iter()
            .map(DeviceConfig::build)
            .collect::<Result<Vec<Element>, RfError>>()?;

        let ids: Vec<DeviceId> = elements.iter().map(Element::id).collect();
        for (i, element) in elements.iter_mut().enumerate() {
            let dev_in = if i > 0 { Some(ids[i - 1].clone()) } else { None };
            let dev_out = ids.get(i + 1).cloned();
            element.connect(dev_in, dev_out);
        }
        debug!(count = elements.len(), "built station chain");
        Ok(elements)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Vec<Element>, ConfigError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading station config");
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = StationConfig::from_toml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.build()?)
}
