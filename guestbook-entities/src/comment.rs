use crate::{author::*, id::*, section::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id      : Id,
    pub section : SectionKey,
    pub author  : Option<Author>,
    pub content : String,
    // Assigned by the storage layer
    pub date    : Timestamp,
}

/// A comment that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub section : SectionKey,
    pub author  : Option<Author>,
    pub content : String,
}

impl NewComment {
    pub fn into_comment(self, id: Id, date: Timestamp) -> Comment {
        let Self {
            section,
            author,
            content,
        } = self;
        Comment {
            id,
            section,
            author,
            content,
            date,
        }
    }
}
