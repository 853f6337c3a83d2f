// SPDX-License-Identifier: GPL-3.0-only

/// Errors surfaced by the fetch pipeline and the preference store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StarryError {
    /// PokéAPI answered with a non-success status for the query
    #[error("no Pokémon matches '{0}'")]
    NotFound(String),
    /// The request never produced a usable response (offline, DNS, bad body...)
    #[error("network failure: {0}")]
    Network(String),
    /// The persistent key-value store could not be read or written
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for StarryError {
    fn from(err: reqwest::Error) -> Self {
        StarryError::Network(err.to_string())
    }
}

impl From<anywho::Error> for StarryError {
    fn from(err: anywho::Error) -> Self {
        StarryError::Storage(err.to_string())
    }
}

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: u32) -> f64 {
    f64::from(num) / 10.0
}

/// Formats a Pokédex number the way cards and titles show it (`#001`)
pub fn padded_id(id: u32) -> String {
    format!("#{id:03}")
}
