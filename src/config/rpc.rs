// nct: RPC connection settings
//
// Values come from namecoin.conf; anything absent falls back to the
// environment (`$USER` for the RPC user) or to namecoind's defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};

use super::ConfigError;

/// namecoind's default mainnet RPC port.
pub const DEFAULT_RPC_PORT: u16 = 8336;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";

/// Connection settings handed to the gateway at construction.
#[derive(Clone)]
pub struct RpcConfig {
    pub user: String,
    /// Never printed; see the `Debug` impl.
    pub password: String,
    pub host: String,
    pub port: u16,
    pub ssl: bool,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            user: std::env::var("USER").unwrap_or_default(),
            password: String::new(),
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            ssl: false,
        }
    }
}

impl RpcConfig {
    /// `~/.namecoin/namecoin.conf`, relative to the working directory when
    /// no home directory can be determined.
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".namecoin")
            .join("namecoin.conf")
    }

    /// Load settings from an INI file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file_opt(path, literal_values()).map_err(|source| {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_ini(&ini)
    }

    /// Build settings from the top-level (section-less) keys of a parsed file.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let props = ini.general_section();
        let mut config = Self::default();

        if let Some(user) = props.get("rpcuser") {
            config.user = user.to_string();
        }
        if let Some(password) = props.get("rpcpassword") {
            config.password = password.to_string();
        }
        if let Some(host) = props.get("rpchost").or_else(|| props.get("rpcconnect")) {
            config.host = host.to_string();
        }
        if let Some(port) = props.get("rpcport") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "rpcport",
                value: port.to_string(),
            })?;
        }
        if let Some(ssl) = props.get("rpcssl") {
            config.ssl = parse_bool("rpcssl", ssl)?;
        }

        Ok(config)
    }

    /// Endpoint URL for the JSON-RPC server.
    pub fn url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}/", scheme, self.host, self.port)
    }
}

/// namecoind reads values verbatim; passwords may contain quotes or backslashes.
fn literal_values() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// Custom Debug implementation that never reveals the RPC password.
impl fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConfig")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
