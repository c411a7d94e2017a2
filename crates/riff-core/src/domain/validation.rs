use crate::domain::{entities::Descriptor, error::DomainError};

/// Centralized domain validation.
///
/// Resolution rules that span several fields live in the resolver; the
/// single-value rules live here.
pub struct DomainValidator;

impl DomainValidator {
    /// Function names become Kubernetes resource names, so they follow the
    /// DNS-1123 subdomain shape: lowercase alphanumerics, `-` and `.`,
    /// starting and ending with an alphanumeric.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() > 253 {
            return Err(invalid("name is longer than 253 characters"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }
        let alnum = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        if !alnum(name.chars().next()) || !alnum(name.chars().last()) {
            return Err(invalid("name must start and end with a letter or digit"));
        }
        Ok(())
    }

    /// Coerce a derived name (directory or artifact stem) into a valid
    /// function name. `None` when nothing usable is left.
    ///
    /// Only names the user did not type go through here; an explicit
    /// `--name` is checked with [`Self::validate_name`] instead.
    pub fn sanitize_name(raw: &str) -> Option<String> {
        let mapped: String = raw
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.' {
                    c
                } else {
                    '-'
                }
            })
            .take(253)
            .collect();
        let trimmed = mapped.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn validate_descriptor(descriptor: &Descriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["echo", "demo", "upper-1", "a", "square.v2"] {
            assert!(DomainValidator::validate_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn invalid_names_fail() {
        for name in ["", "Echo", "my_fn", "-lead", "trail-", "a b", ".hidden"] {
            assert!(
                matches!(
                    DomainValidator::validate_name(name),
                    Err(DomainError::InvalidName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn derived_names_are_coerced() {
        assert_eq!(DomainValidator::sanitize_name("My_Func").as_deref(), Some("my-func"));
        assert_eq!(DomainValidator::sanitize_name("__Hello World.").as_deref(), Some("hello-world"));
        assert_eq!(DomainValidator::sanitize_name("echo").as_deref(), Some("echo"));
        assert_eq!(DomainValidator::sanitize_name(""), None);
        assert_eq!(DomainValidator::sanitize_name("___"), None);

        let long = DomainValidator::sanitize_name(&"a".repeat(300)).unwrap();
        assert_eq!(long.len(), 253);
        assert!(DomainValidator::validate_name(&long).is_ok());
    }
}
