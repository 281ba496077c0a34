/// Schema name of the shared metadata object type. Handled as a distinct
/// literal; it has no decode form.
pub const META_TYPE_NAME: &str = "DB_META";

/// Prefix marking a synthesized paginated-result type. The suffix is the
/// canonical name of the wrapped element type, so schema names and cache keys
/// stay in strict 1:1 correspondence.
pub const QUERY_TYPE_PREFIX: &str = "DB_QUERY_";

pub fn encode(canonical_element_name: &str) -> String {
    format!("{QUERY_TYPE_PREFIX}{canonical_element_name}")
}

/// Recovers the canonical element name from a synthesized type name.
/// Returns None when `type_name` does not carry the prefix. Stripping by
/// prefix rather than by a fixed offset keeps decode consistent with encode
/// if the prefix ever changes length.
pub fn decode(type_name: &str) -> Option<&str> {
    type_name.strip_prefix(QUERY_TYPE_PREFIX)
}

/// True for every schema name this component is responsible for: the meta
/// type literal and any name carrying the query prefix, including the
/// shape-valid but semantically empty bare prefix.
pub fn is_managed_name(type_name: &str) -> bool {
    type_name == META_TYPE_NAME || type_name.starts_with(QUERY_TYPE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip_test() {
        for name in ["Account", "BlogPost", "_Internal", "X"] {
            assert_eq!(decode(&encode(name)), Some(name));
        }
    }

    #[test]
    fn decode_strip_length_matches_prefix_test() {
        // encode and decode are two views of the same constant; the number of
        // characters added must equal the number removed
        let encoded = encode("Account");
        assert_eq!(encoded.len() - "Account".len(), QUERY_TYPE_PREFIX.len());
        assert_eq!(decode(&encoded), Some(&encoded[QUERY_TYPE_PREFIX.len()..]));
    }

    #[test]
    fn decode_rejects_foreign_names_test() {
        assert_eq!(decode("Account"), None);
        assert_eq!(decode("DB_META"), None);
        assert_eq!(decode("db_query_Account"), None);
    }

    #[test]
    fn decode_of_bare_prefix_is_empty_test() {
        assert_eq!(decode(QUERY_TYPE_PREFIX), Some(""));
    }

    #[test]
    fn is_managed_name_test() {
        assert!(is_managed_name("DB_META"));
        assert!(is_managed_name("DB_QUERY_Account"));
        assert!(is_managed_name("DB_QUERY_"));
        assert!(!is_managed_name("OTHER"));
        assert!(!is_managed_name("DB_METADATA"));
    }
}
