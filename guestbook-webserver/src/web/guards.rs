use core::ops::Deref;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};
use serde::{Deserialize, Serialize};

use guestbook_core::{entities::*, gateways::identity::IdentityGateway};

pub const COOKIE_CALLER_KEY: &str = "guestbook-caller";

/// The session cookie content
#[derive(Debug, Serialize, Deserialize)]
struct CallerCookie {
    identity: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
}

impl From<&Caller> for CallerCookie {
    fn from(from: &Caller) -> Self {
        Self {
            identity: from.identity.clone(),
            email: from.email.as_str().to_owned(),
            nickname: from.nickname.clone(),
        }
    }
}

impl From<CallerCookie> for Caller {
    fn from(from: CallerCookie) -> Self {
        let CallerCookie {
            identity,
            email,
            nickname,
        } = from;
        Self {
            identity,
            email: EmailAddress::new_unchecked(email),
            nickname,
        }
    }
}

pub fn caller_cookie_value(caller: &Caller) -> serde_json::Result<String> {
    serde_json::to_string(&CallerCookie::from(caller))
}

/// The identity of the visitor, if any.
#[derive(Debug)]
pub struct Auth {
    caller: Option<Caller>,
}

impl Auth {
    pub fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    fn caller_from_cookie(request: &Request) -> Option<Caller> {
        let cookie = request.cookies().get_private(COOKIE_CALLER_KEY)?;
        match serde_json::from_str::<CallerCookie>(cookie.value()) {
            Ok(caller) if !caller.identity.is_empty() => Some(caller.into()),
            Ok(_) => None,
            Err(err) => {
                warn!("Ignoring malformed session cookie: {err}");
                None
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let caller = Self::caller_from_cookie(request);
        Outcome::Success(Self { caller })
    }
}

pub struct Identity(pub Box<dyn IdentityGateway + Send + Sync>);

impl Deref for Identity {
    type Target = dyn IdentityGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
