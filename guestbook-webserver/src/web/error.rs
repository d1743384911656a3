use guestbook_core::usecases::Error as UsecaseError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

/// Any failure while handling a request.
///
/// Visitors only ever get to see a generic server error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        error!("Failed to handle {} {}: {self}", req.method(), req.uri());
        Err(Status::InternalServerError)
    }
}
