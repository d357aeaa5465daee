use pkg_constants::naming::DNS1123_SUBDOMAIN_MAX_LENGTH;
use tracing::debug;

use crate::error::{Result, UtilError};

/// Sanitize an arbitrary string into a DNS-1123 compatible resource name.
///
/// The input is lower-cased, `.` becomes `-`, anything outside `[a-z0-9-]` is
/// dropped and leading/trailing hyphens are trimmed. Internal hyphen runs are
/// kept as they are. Names longer than 253 characters are cut and re-trimmed.
pub fn normalize_name(input: &str) -> Result<String> {
    let sanitized: String = input
        .to_lowercase()
        .chars()
        .map(|c| if c == '.' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    let trimmed = sanitized.trim_matches('-');
    if trimmed.is_empty() {
        return Err(UtilError::Validation(format!(
            "name '{}' has no characters allowed in [a-z0-9-]",
            input
        )));
    }

    if trimmed.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        // Only ASCII survives the filter, so byte slicing is safe.
        let cut = trimmed[..DNS1123_SUBDOMAIN_MAX_LENGTH].trim_end_matches('-');
        debug!(
            "Truncated normalized name from {} to {} characters",
            trimmed.len(),
            cut.len()
        );
        return Ok(cut.to_string());
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_dns1123(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= DNS1123_SUBDOMAIN_MAX_LENGTH
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn rejects_names_without_usable_characters() {
        assert!(normalize_name("").is_err());
        assert!(normalize_name("$!@#$!@#$%").is_err());
        assert!(normalize_name("-----").is_err());
        assert!(normalize_name("...").is_err());
        assert!(matches!(
            normalize_name("   "),
            Err(UtilError::Validation(_))
        ));
    }

    #[test]
    fn normalizes_hostnames_and_urls() {
        assert_eq!(normalize_name("https://my.host.com").unwrap(), "httpsmy-host-com");
        assert_eq!(normalize_name(" my.host.com").unwrap(), "my-host-com");
        assert_eq!(normalize_name("MY.HOST.COM").unwrap(), "my-host-com");
        assert_eq!(normalize_name("-my-host;").unwrap(), "my-host");
        assert_eq!(normalize_name("-my-72host;").unwrap(), "my-72host");
    }

    #[test]
    fn keeps_internal_dash_runs() {
        assert_eq!(
            normalize_name(" @#$_#*($%-my-[];.1@##@%2#-host;   ").unwrap(),
            "my--12-host"
        );
    }

    #[test]
    fn legal_names_are_unchanged() {
        for name in ["my-host", "12-my-host-123", "my-12host", "m", "0"] {
            assert_eq!(normalize_name(name).unwrap(), name);
        }
    }

    #[test]
    fn long_names_are_cut_to_subdomain_limit() {
        for len in [
            DNS1123_SUBDOMAIN_MAX_LENGTH,
            DNS1123_SUBDOMAIN_MAX_LENGTH + 1,
            DNS1123_SUBDOMAIN_MAX_LENGTH * 2,
        ] {
            let result = normalize_name(&"x".repeat(len)).unwrap();
            assert_eq!(result.len(), DNS1123_SUBDOMAIN_MAX_LENGTH);
        }
    }

    #[test]
    fn cut_does_not_leave_trailing_hyphen() {
        let input = format!("{}.{}", "a".repeat(252), "b".repeat(10));
        let result = normalize_name(&input).unwrap();
        assert_eq!(result, "a".repeat(252));
        assert!(is_dns1123(&result));
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "https://my.host.com",
            "VM_Name With Spaces",
            " @#$_#*($%-my-[];.1@##@%2#-host;   ",
            "rhel8.4-x86_64",
        ] {
            let once = normalize_name(input).unwrap();
            assert!(is_dns1123(&once), "{once} is not a DNS-1123 name");
            assert_eq!(normalize_name(&once).unwrap(), once);
        }
    }
}
