/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Boltzmann constant in J/K (SI units).
pub const BOLTZMANN: f64 = 1.380649e-23;
