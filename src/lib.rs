pub mod consts;
pub mod client;

#[cfg(feature = "bestiary")]
pub mod bestiary;

#[cfg(feature = "ge")]
pub mod ge;

#[cfg(feature = "hiscores")]
pub mod hiscores;

#[cfg(test)]
mod tests;

lazy_static::lazy_static! {
    /// Timeout, in seconds, applied to every web-services request
    ///
    /// Can be overridden with the `RUNESCAPE_API_TIMEOUT` environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var("RUNESCAPE_API_TIMEOUT")
        .ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(10);

    /// Base URL of the web-services host
    ///
    /// Can be overridden with the `RUNESCAPE_API_HOST` environment variable
    pub static ref WEB_SERVICES_URL: String = std::env::var("RUNESCAPE_API_HOST")
        .unwrap_or_else(|_| String::from(consts::DEFAULT_WEB_SERVICES_URL));
}

pub mod prelude {
    pub use super::client::{DecodeError, Error};

    #[cfg(feature = "bestiary")]
    pub use super::bestiary::{self, schema::Beast};

    #[cfg(feature = "ge")]
    pub use super::ge::{self, schema::{Category, CategoryPrices, GraphingData, Item, ItemPriceInformation}};

    #[cfg(feature = "hiscores")]
    pub use super::hiscores::{self, Table, schema::{Activity, ClanMate, Player, Skill}};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
