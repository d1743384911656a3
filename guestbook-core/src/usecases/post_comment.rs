use super::prelude::*;
use super::{resolve_section_for_posting, section_key};

/// Parameters of a comment submission as sent by the visitor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewCommentRequest<'a> {
    pub section_name: Option<&'a str>,
    pub content: Option<&'a str>,
}

/// Store a new comment and return it along with the
/// section it has been posted to.
///
/// The content is taken as it is. Escaping is up to the
/// rendering layer.
pub fn post_comment<R>(
    repo: &R,
    caller: Option<&Caller>,
    request: NewCommentRequest,
) -> Result<(SectionName, Comment)>
where
    R: CommentRepo,
{
    let NewCommentRequest {
        section_name,
        content,
    } = request;
    let section_name = resolve_section_for_posting(section_name);
    let author = caller.map(|caller| Author {
        identity: Some(caller.identity.clone()),
        name: None,
        email: Some(caller.email.clone()),
    });
    let new_comment = NewComment {
        section: section_key(&section_name),
        author,
        content: content.unwrap_or_default().to_owned(),
    };
    let comment = repo.create_comment(new_comment)?;
    log::debug!("Stored comment {} in {}", comment.id, comment.section);
    Ok((section_name, comment))
}
