use super::prelude::*;
use super::{resolve_section_for_listing, section_key};

/// Maximum number of comments that are shown per section.
pub const MAX_RECENT_COMMENTS: usize = 10;

/// Shown instead of the caller if nobody is signed in.
pub const ANONYMOUS_POSTER: &str = "Anonymous Poster";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Login,
    Logout,
}

impl AccountAction {
    pub const fn link_text(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }
}

#[derive(Debug)]
pub struct SectionView {
    /// Display value of the caller
    pub user: String,
    /// Newest first
    pub comments: Vec<Comment>,
    pub section_name: SectionName,
    /// Login or logout URL that leads back to the current page
    pub url: String,
    pub url_action: AccountAction,
}

pub fn view_section<R, G>(
    repo: &R,
    identity: &G,
    caller: Option<&Caller>,
    requested_section: Option<&str>,
    current_url: &str,
) -> Result<SectionView>
where
    R: CommentRepo,
    G: IdentityGateway + ?Sized,
{
    let section_name = resolve_section_for_listing(requested_section);
    let comments =
        repo.recent_comments_of_section(&section_key(&section_name), MAX_RECENT_COMMENTS)?;
    debug_assert!(comments.len() <= MAX_RECENT_COMMENTS);
    let (user, url, url_action) = match caller {
        Some(caller) => (
            caller.display_name().to_owned(),
            identity.create_logout_url(current_url),
            AccountAction::Logout,
        ),
        None => (
            ANONYMOUS_POSTER.to_owned(),
            identity.create_login_url(current_url),
            AccountAction::Login,
        ),
    };
    Ok(SectionView {
        user,
        comments,
        section_name,
        url,
        url_action,
    })
}
