// file: src/query.rs
// description: search string sanitization and URL encoding
// reference: input validation patterns

use crate::error::{LookupError, Result};

/// Normalize a raw search string and encode it for use as a URL query value.
///
/// Empty or whitespace-only input is rejected before any network call is
/// made. Otherwise the string is trimmed, lowercased and percent-encoded.
pub fn sanitize(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let normalized = raw.trim().to_lowercase();
    Ok(urlencoding::encode(&normalized).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(sanitize(""), Err(LookupError::EmptyQuery)));
    }

    #[test]
    fn test_rejects_whitespace_only_input() {
        assert!(matches!(sanitize("   \t\n"), Err(LookupError::EmptyQuery)));
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(sanitize("  Dune  ").unwrap(), "dune");
    }

    #[test]
    fn test_encodes_spaces_and_punctuation() {
        assert_eq!(
            sanitize("The Left Hand of Darkness").unwrap(),
            "the%20left%20hand%20of%20darkness"
        );
        assert_eq!(sanitize("Dune (novel)").unwrap(), "dune%20%28novel%29");
    }

    #[test]
    fn test_encoding_roundtrips_to_normalized_form() {
        let inputs = ["  Dune ", "A Wizard of Earthsea", "L'Étranger"];
        for raw in inputs {
            let normalized = raw.trim().to_lowercase();
            let encoded = sanitize(raw).unwrap();
            let decoded = urlencoding::decode(&encoded).unwrap();
            assert_eq!(decoded, normalized);
        }
    }
}
