use rocket::{config::Config as RocketCfg, figment::Figment, local::blocking::Client, Route};

use super::{identity::LocalIdentityProvider, sqlite};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use guestbook_core::{entities::*, repositories::CommentRepo};
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let connections = guestbook_db_sqlite::Connections::init(":memory:", 1).unwrap();
    guestbook_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Figment::from(RocketCfg::debug_default()),
    };
    let gateways = super::Gateways {
        identity: Box::new(LocalIdentityProvider::default()),
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn login(client: &Client, email: &str) {
    let res = client
        .post("/login")
        .header(rocket::http::ContentType::Form)
        .body(format!("email={email}&continue=%2F"))
        .dispatch();
    assert_eq!(res.status(), rocket::http::Status::SeeOther);
}
