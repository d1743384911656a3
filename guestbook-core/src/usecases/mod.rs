mod error;
mod post_comment;
mod section;
mod view_section;


pub use self::{error::Error, post_comment::*, section::*, view_section::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::identity::*, repositories::*};
}
