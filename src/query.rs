//! Query-Param Codec
//!
//! Bidirectional mapping between typed filter/sort/page values and the
//! string-only URL query representation. Decoding is total: any string that
//! is not a member of the target enum degrades to the documented default
//! instead of erroring, since the URL bar is user-editable input.

use crate::models::{ProjectStatus, SortDirection, SortField, UserRole, UserStatus};

/// Closed string enums that round-trip through a URL query parameter.
pub trait QueryCodec: Sized + Copy {
    const DEFAULT: Self;

    fn parse(raw: &str) -> Option<Self>;
    fn encode(&self) -> &'static str;

    /// Total decode: absent or unrecognized input yields the default.
    fn decode(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }

    /// Decode for nullable filter values: absent or unrecognized input
    /// yields "unset" rather than a default member.
    fn decode_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }
}

impl QueryCodec for SortField {
    const DEFAULT: Self = SortField::Name;

    fn parse(raw: &str) -> Option<Self> {
        SortField::parse(raw)
    }

    fn encode(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryCodec for SortDirection {
    const DEFAULT: Self = SortDirection::Asc;

    fn parse(raw: &str) -> Option<Self> {
        SortDirection::parse(raw)
    }

    fn encode(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryCodec for ProjectStatus {
    // Filters have no meaningful member default; `decode_opt` is the entry
    // point for them. DEFAULT only backs the blanket `decode`.
    const DEFAULT: Self = ProjectStatus::Planned;

    fn parse(raw: &str) -> Option<Self> {
        ProjectStatus::parse(raw)
    }

    fn encode(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryCodec for UserStatus {
    const DEFAULT: Self = UserStatus::Green;

    fn parse(raw: &str) -> Option<Self> {
        UserStatus::parse(raw)
    }

    fn encode(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryCodec for UserRole {
    const DEFAULT: Self = UserRole::Employee;

    fn parse(raw: &str) -> Option<Self> {
        UserRole::parse(raw)
    }

    fn encode(&self) -> &'static str {
        self.as_str()
    }
}

/// Total page-number decode: 1-based, anything unparseable or below 1
/// falls back to page 1.
pub fn decode_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PROJECT_STATUS_ORDER, USER_ROLES, USER_STATUS_ORDER};

    #[test]
    fn test_sort_field_round_trip() {
        for field in [SortField::Name, SortField::Status] {
            assert_eq!(SortField::decode(Some(field.encode())), field);
        }
    }

    #[test]
    fn test_sort_direction_round_trip() {
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(SortDirection::decode(Some(dir.encode())), dir);
        }
    }

    #[test]
    fn test_status_and_role_round_trip() {
        for status in PROJECT_STATUS_ORDER {
            assert_eq!(ProjectStatus::decode_opt(Some(status.encode())), Some(status));
        }
        for status in USER_STATUS_ORDER {
            assert_eq!(UserStatus::decode_opt(Some(status.encode())), Some(status));
        }
        for role in USER_ROLES {
            assert_eq!(UserRole::decode_opt(Some(role.encode())), Some(role));
        }
    }

    #[test]
    fn test_garbage_degrades_to_default() {
        assert_eq!(SortField::decode(Some("created_at")), SortField::Name);
        assert_eq!(SortDirection::decode(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortField::decode(None), SortField::Name);
    }

    #[test]
    fn test_garbage_filter_is_unset() {
        assert_eq!(ProjectStatus::decode_opt(Some("DONE")), None);
        assert_eq!(UserStatus::decode_opt(Some("")), None);
        assert_eq!(UserRole::decode_opt(None), None);
    }

    #[test]
    fn test_decode_page() {
        assert_eq!(decode_page(Some("3")), 3);
        assert_eq!(decode_page(Some("0")), 1);
        assert_eq!(decode_page(Some("-2")), 1);
        assert_eq!(decode_page(Some("abc")), 1);
        assert_eq!(decode_page(None), 1);
    }
}
