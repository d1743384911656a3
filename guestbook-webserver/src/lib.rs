#[macro_use]
extern crate log;

use guestbook_core::gateways::identity::IdentityGateway;
use guestbook_db_sqlite::Connections;

mod web;

pub use web::{identity::LocalIdentityProvider, Cfg};

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    identity_gw: Box<dyn IdentityGateway + Send + Sync>,
) {
    web::run(connections.into(), cfg, identity_gw).await;
}
