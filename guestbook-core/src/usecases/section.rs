use super::prelude::*;

fn requested_or_default(requested: Option<&str>) -> SectionName {
    requested
        .filter(|name| !name.is_empty())
        .map(SectionName::new)
        .unwrap_or_default()
}

/// Resolve the section that should be listed.
///
/// Section names are case-sensitive, except for the lower-cased
/// default name that is mapped onto the default section.
pub fn resolve_section_for_listing(requested: Option<&str>) -> SectionName {
    let name = requested_or_default(requested);
    if name.as_str() == DEFAULT_SECTION_NAME.to_lowercase() {
        return SectionName::default();
    }
    name
}

/// Resolve the section a new comment is posted to.
///
/// NOTE: Unlike [`resolve_section_for_listing`] the lower-cased
/// default name is taken literally.
pub fn resolve_section_for_posting(requested: Option<&str>) -> SectionName {
    requested_or_default(requested)
}

pub fn section_key(name: &SectionName) -> SectionKey {
    SectionKey::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_if_missing_or_empty() {
        assert!(resolve_section_for_listing(None).is_default());
        assert!(resolve_section_for_listing(Some("")).is_default());
        assert!(resolve_section_for_posting(None).is_default());
        assert!(resolve_section_for_posting(Some("")).is_default());
    }

    #[test]
    fn coerce_lower_cased_default_name_only_for_listing() {
        let listed = resolve_section_for_listing(Some("general_submission"));
        assert_eq!(listed.as_str(), "General_Submission");
        let posted = resolve_section_for_posting(Some("general_submission"));
        assert_eq!(posted.as_str(), "general_submission");
    }

    #[test]
    fn other_names_are_case_sensitive_literals() {
        assert_eq!(
            resolve_section_for_listing(Some("GENERAL_SUBMISSION")).as_str(),
            "GENERAL_SUBMISSION"
        );
        assert_eq!(resolve_section_for_listing(Some("Testing")).as_str(), "Testing");
        assert_eq!(resolve_section_for_listing(Some("testing")).as_str(), "testing");
        assert_eq!(resolve_section_for_posting(Some("Testing")).as_str(), "Testing");
    }

    #[test]
    fn same_name_yields_same_key() {
        let a = section_key(&SectionName::new("Testing"));
        let b = section_key(&SectionName::new("Testing"));
        let c = section_key(&SectionName::new("testing"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
