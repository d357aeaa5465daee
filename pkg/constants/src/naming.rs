//! Platform naming constraints.

/// Maximum length of a DNS-1123 subdomain, which bounds normalized resource names.
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of a label value attached to a managed resource.
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;

/// Separator placed between a truncated label value and its original length.
pub const LABEL_LENGTH_SEPARATOR: char = '-';
