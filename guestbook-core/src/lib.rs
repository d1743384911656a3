pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use guestbook_entities::{
        author::*, caller::*, comment::*, email::*, id::*, section::*, time::*,
    };
}

pub use repositories::Error as RepoError;
