use guestbook_core::gateways::identity::IdentityGateway;
use url::form_urlencoded;

pub const CONTINUE_PARAM: &str = "continue";

/// Identity provider that is served by this web server itself.
///
/// Visitors sign in with their e-mail address, there are no passwords.
/// Only meant for development and self-hosted setups.
#[derive(Debug, Clone)]
pub struct LocalIdentityProvider {
    login_url: String,
    logout_url: String,
}

impl LocalIdentityProvider {
    pub fn new(login_url: impl Into<String>, logout_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
            logout_url: logout_url.into(),
        }
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new("/login", "/logout")
    }
}

fn append_continue_param(base_url: &str, dest_url: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(CONTINUE_PARAM, dest_url)
        .finish();
    format!("{base_url}{separator}{query}")
}

impl IdentityGateway for LocalIdentityProvider {
    fn create_login_url(&self, dest_url: &str) -> String {
        append_continue_param(&self.login_url, dest_url)
    }
    fn create_logout_url(&self, dest_url: &str) -> String {
        append_continue_param(&self.logout_url, dest_url)
    }
}

/// Only redirect to paths on this server.
pub fn local_redirect_target(dest_url: Option<&str>) -> &str {
    match dest_url {
        Some(url) if url.starts_with('/') && !url.starts_with("//") && !url.contains('\\') => url,
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_urls_with_encoded_continuation() {
        let idp = LocalIdentityProvider::default();
        assert_eq!(idp.create_login_url("/"), "/login?continue=%2F");
        assert_eq!(
            idp.create_logout_url("/?section_name=A B"),
            "/logout?continue=%2F%3Fsection_name%3DA+B"
        );
    }

    #[test]
    fn append_to_existing_query() {
        let idp = LocalIdentityProvider::new("https://idp.example.com/auth?app=gb", "/logout");
        assert_eq!(
            idp.create_login_url("/"),
            "https://idp.example.com/auth?app=gb&continue=%2F"
        );
    }

    #[test]
    fn reject_foreign_redirect_targets() {
        assert_eq!(local_redirect_target(None), "/");
        assert_eq!(local_redirect_target(Some("")), "/");
        assert_eq!(local_redirect_target(Some("https://example.com/")), "/");
        assert_eq!(local_redirect_target(Some("//example.com/")), "/");
        assert_eq!(local_redirect_target(Some("/\\example.com")), "/");
        assert_eq!(
            local_redirect_target(Some("/?section_name=Testing")),
            "/?section_name=Testing"
        );
    }
}
