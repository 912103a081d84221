//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Root of static assets; documents under `deck/` are served at `/deck`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `public/` next to this crate's manifest
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `HOST` or `PORT` is set but
    /// unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ServerError::InvalidEnv { var: "HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let assets_dir = lookup("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { host, port, assets_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn deck_dir(&self) -> PathBuf {
        self.assets_dir.join("deck")
    }

    /// Filesystem path backing a `/deck/...` link, or `None` for any other href.
    #[must_use]
    pub fn deck_path(&self, href: &str) -> Option<PathBuf> {
        href.strip_prefix("/deck/").filter(|rest| !rest.is_empty()).map(|rest| self.deck_dir().join(rest))
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
