// Low-level database access traits.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// An append-only store of comments that are partitioned by section.
pub trait CommentRepo {
    /// Store a new comment.
    ///
    /// The repository assigns both the id and the date of the comment.
    /// Dates never decrease within a section.
    fn create_comment(&self, comment: NewComment) -> Result<Comment>;

    /// Newest comments of a section first.
    fn recent_comments_of_section(
        &self,
        section: &SectionKey,
        limit: usize,
    ) -> Result<Vec<Comment>>;
}
