pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, section::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn section(mut self, name: &str) -> Self {
            self.comment.section = SectionKey::from(&SectionName::new(name));
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn date_millis(mut self, millis: i64) -> Self {
            self.comment.date = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    section: SectionKey::from(&SectionName::default()),
                    author: None,
                    content: String::new(),
                    date: Timestamp::now(),
                },
            }
        }
    }
}
