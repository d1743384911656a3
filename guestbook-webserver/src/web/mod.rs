use std::net::IpAddr;

use rocket::{
    config::Config as RocketCfg,
    data::{Limits, ToByteUnit},
    figment::Figment,
    Rocket, Route,
};

use guestbook_core::gateways::identity::IdentityGateway;

mod error;
mod frontend;
mod guards;
pub mod identity;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub use self::error::Error;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    /// Key for encrypting private cookies (base64 or hex).
    pub secret_key: Option<String>,
}

impl Cfg {
    fn figment(&self) -> Figment {
        let figment = RocketCfg::figment()
            .merge(("address", self.address))
            .merge(("port", self.port));
        match &self.secret_key {
            Some(key) => figment.merge(("secret_key", key.as_str())),
            None => figment,
        }
    }
}

// Comments are stored verbatim, so the form limits
// must not get in the way of long comments.
fn form_limits() -> Limits {
    Limits::default()
        .limit("form", 8.mebibytes())
        .limit("data-form", 8.mebibytes())
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Figment,
}

pub(crate) struct Gateways {
    identity: Box<dyn IdentityGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;
    let Gateways { identity } = gateways;

    let rocket_cfg = rocket_cfg.merge(("limits", form_limits()));
    let mut instance = rocket::custom(rocket_cfg)
        .manage(db)
        .manage(guards::Identity(identity));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    cfg: Cfg,
    identity: Box<dyn IdentityGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: cfg.figment(),
    };
    let gateways = Gateways { identity };
    info!("Starting web server on {}:{}", cfg.address, cfg.port);
    let instance = rocket_instance(options, db, gateways);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
