//! Server settings loaded via OrthoConfig from CLI flags, `MEETUP_*`
//! environment variables and config files.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Lowest work factor bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuration for the HTTP server and its backing stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MEETUP")]
pub struct ServerSettings {
    /// Listen address; `0.0.0.0` when unset.
    pub host: Option<String>,
    #[ortho_config(default = 8081)]
    pub port: u16,
    /// Full connection URL; wins over the `pg_*` parts.
    pub database_url: Option<String>,
    pub pg_username: Option<String>,
    pub pg_password: Option<String>,
    pub pg_host: Option<String>,
    pub pg_port: Option<u16>,
    pub pg_database: Option<String>,
    #[ortho_config(default = 10)]
    pub bcrypt_cost: u32,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

/// `pg_*` settings that cannot be assembled into a connection URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid database settings: {0}")]
pub struct InvalidDatabaseUrl(String);

impl InvalidDatabaseUrl {
    fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// A `bcrypt_cost` outside `4..=31`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bcrypt cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {0}")]
pub struct InvalidBcryptCost(pub u32);

impl ServerSettings {
    pub fn bind_addr(&self) -> (String, u16) {
        let host = self.host.as_deref().unwrap_or("0.0.0.0");
        (host.to_owned(), self.port)
    }

    /// The configured connection URL, assembled from the `pg_*` parts when
    /// only a username is set. `Ok(None)` means run without a database.
    ///
    /// Credentials and the database name are percent-encoded.
    ///
    /// # Errors
    ///
    /// [`InvalidDatabaseUrl`] when the parts do not form a URL, for example
    /// a host containing `/` or `@`.
    pub fn database_url(&self) -> Result<Option<String>, InvalidDatabaseUrl> {
        if let Some(url) = self.database_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return Ok(Some(url.to_owned()));
        }
        let Some(username) = self
            .pg_username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        else {
            return Ok(None);
        };

        let host = self.pg_host.as_deref().unwrap_or("localhost");
        let mut url = Url::parse(&format!("postgres://{host}"))
            .map_err(|err| InvalidDatabaseUrl::new(format!("host {host:?}: {err}")))?;
        if !url.host_str().is_some_and(|parsed| parsed.eq_ignore_ascii_case(host)) {
            return Err(InvalidDatabaseUrl::new(format!("host {host:?} is not a bare host")));
        }
        url.set_port(Some(self.pg_port.unwrap_or(5432)))
            .map_err(|()| InvalidDatabaseUrl::new("port"))?;
        url.set_username(username)
            .map_err(|()| InvalidDatabaseUrl::new("username"))?;
        if let Some(password) = self.pg_password.as_deref().filter(|pw| !pw.is_empty()) {
            url.set_password(Some(password))
                .map_err(|()| InvalidDatabaseUrl::new("password"))?;
        }
        url.path_segments_mut()
            .map_err(|()| InvalidDatabaseUrl::new("database"))?
            .clear()
            .push(self.pg_database.as_deref().unwrap_or("meetsup"));
        Ok(Some(url.into()))
    }

    /// # Errors
    ///
    /// [`InvalidBcryptCost`] when the cost is outside what bcrypt accepts.
    pub fn bcrypt_cost(&self) -> Result<u32, InvalidBcryptCost> {
        if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            Ok(self.bcrypt_cost)
        } else {
            Err(InvalidBcryptCost(self.bcrypt_cost))
        }
    }
}
