//! Provider capabilities.
//!
//! Describes which request flows a rate provider can serve, so the client can
//! be wired with a latest-rates source and a historical source independently.

/// Describes the capabilities of a rate provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Whether the provider serves "latest rates for base currency".
    pub supports_latest: bool,

    /// Whether the provider serves daily time series for a pair.
    pub supports_historical: bool,
}
