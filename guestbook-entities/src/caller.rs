use uuid::Uuid;

use crate::email::EmailAddress;

/// An authenticated visitor as reported by the identity provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub identity : String,
    pub email    : EmailAddress,
    pub nickname : Option<String>,
}

impl Caller {
    /// Derive a caller with a stable identity for the given address.
    pub fn from_email(email: EmailAddress, nickname: Option<String>) -> Self {
        let identity = Uuid::new_v5(&Uuid::NAMESPACE_URL, email.normalized().as_bytes())
            .as_simple()
            .to_string();
        let nickname = nickname
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());
        Self {
            identity,
            email,
            nickname,
        }
    }

    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(self.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_stable_and_case_insensitive() {
        let a = Caller::from_email(EmailAddress::new_unchecked("Foo@Example.com".into()), None);
        let b = Caller::from_email(EmailAddress::new_unchecked("foo@example.com".into()), None);
        assert!(!a.identity.is_empty());
        assert_eq!(a.identity, b.identity);
        let c = Caller::from_email(EmailAddress::new_unchecked("bar@example.com".into()), None);
        assert_ne!(a.identity, c.identity);
    }

    #[test]
    fn display_name_prefers_nickname() {
        let email = EmailAddress::new_unchecked("foo@example.com".into());
        let caller = Caller::from_email(email.clone(), Some("  ".into()));
        assert_eq!(caller.display_name(), "foo@example.com");
        let caller = Caller::from_email(email, Some("Foo".into()));
        assert_eq!(caller.display_name(), "Foo");
    }
}
