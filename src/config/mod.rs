use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "guestbook.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub identity: Identity,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!("{} not found => load default configuration.", file_path.display());
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub secret_key: Option<String>,
}

pub struct Identity {
    pub login_url: String,
    pub logout_url: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            identity,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be zero"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            secret_key,
        } = webserver.unwrap_or_default();
        let address = address
            .parse()
            .map_err(|err| anyhow!("Invalid web server address '{address}': {err}"))?;
        let webserver = WebServer {
            address,
            port,
            secret_key: secret_key.filter(|key| !key.is_empty()),
        };

        let raw::Identity {
            login_url,
            logout_url,
        } = identity.unwrap_or_default();
        if login_url.is_empty() || logout_url.is_empty() {
            return Err(anyhow!("Missing login or logout URL of the identity provider"));
        }
        let identity = Identity {
            login_url,
            logout_url,
        };

        Ok(Self {
            db,
            webserver,
            identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.identity.login_url, "/login");
        assert_eq!(cfg.identity.logout_url, "/logout");
    }

    #[test]
    fn reject_invalid_address() {
        let raw: raw::Config =
            toml::from_str("[webserver]\naddress = \"localhost:80\"\nport = 80\n").unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw: raw::Config =
            toml::from_str("[db]\nconnection-sqlite = \":memory:\"\nconnection-pool-size = 0\n")
                .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn ignore_empty_secret_key() {
        let raw: raw::Config = toml::from_str(
            "[webserver]\naddress = \"0.0.0.0\"\nport = 80\nsecret-key = \"\"\n",
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(cfg.webserver.secret_key.is_none());
        assert_eq!(cfg.webserver.address, IpAddr::from([0, 0, 0, 0]));
    }
}
