use crate::email::EmailAddress;

/// The person who wrote a comment.
///
/// Only embedded into a [`Comment`](crate::comment::Comment),
/// never stored on its own.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Author {
    pub identity : Option<String>,
    pub name     : Option<String>,
    pub email    : Option<EmailAddress>,
}

impl Author {
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.email.as_ref().map(EmailAddress::as_str))
            .or(self.identity.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_fallbacks() {
        let mut author = Author {
            identity: Some("123".into()),
            ..Default::default()
        };
        assert_eq!(author.display_name(), Some("123"));
        author.email = Some(EmailAddress::new_unchecked("a@b.c".into()));
        assert_eq!(author.display_name(), Some("a@b.c"));
        author.name = Some("Alice".into());
        assert_eq!(author.display_name(), Some("Alice"));
        assert_eq!(Author::default().display_name(), None);
    }
}
