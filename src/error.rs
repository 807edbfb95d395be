//! Error types for the RF chain calculations.

use std::path::PathBuf;

use thiserror::Error;

/// Numeric failures raised where a formula breaks down.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfError {
    /// A divisor was exactly zero.
    #[error("division by zero computing {quantity}")]
    DivisionByZero {
        /// The quantity being derived when the division failed.
        quantity: &'static str,
    },

    /// A math function was called outside its domain (e.g. log10 of a non-positive value).
    #[error("{operation} is undefined for {value}")]
    Domain {
        /// The operation that rejected its argument.
        operation: &'static str,
        /// The offending argument.
        value: f64,
    },

    /// An intermediate result exceeded the range of f64.
    #[error("{quantity} overflowed")]
    Overflow {
        /// The quantity being derived when the overflow happened.
        quantity: &'static str,
    },

    /// A field the formula needs has not been set.
    #[error("field `{0}` is not initialized")]
    UninitializedField(&'static str),
}

/// Errors that can occur loading a station description.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read station config: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a station.
    #[error("failed to parse station config: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A device in the file could not be computed.
    #[error("invalid device in station config")]
    Rf(#[from] RfError),
}
