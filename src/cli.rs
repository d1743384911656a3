use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use guestbook_db_sqlite::Connections;
use guestbook_webserver::LocalIdentityProvider;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "A guestbook with comments grouped into sections")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL of the SQLite database (overrides the configuration)
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Port to listen on (overrides the configuration)
    #[arg(short, long)]
    port: Option<u16>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    guestbook_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let identity_gw = LocalIdentityProvider::new(cfg.identity.login_url, cfg.identity.logout_url);
    let web_cfg = guestbook_webserver::Cfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
        secret_key: cfg.webserver.secret_key,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(guestbook_webserver::run(
        connections,
        web_cfg,
        Box::new(identity_gw),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_overrides() {
        let args = Args::parse_from(["guestbook", "--db-url", ":memory:", "-p", "9000"]);
        assert_eq!(args.db_url.as_deref(), Some(":memory:"));
        assert_eq!(args.port, Some(9000));
        assert!(args.config_file.is_none());
    }
}
