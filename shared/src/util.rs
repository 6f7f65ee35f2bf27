//! Small helpers shared by the storefront crates

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Materialize a stable cart-line identity string.
///
/// `"{product_id}-{color}-{size}"`, with `"default"` standing in for the
/// size of single-size products. Whitespace runs in the color and size are
/// collapsed to `-` so the identity stays a single stable token.
pub fn variant_identity(product_id: &str, color: &str, size: Option<&str>) -> String {
    let size_part = match size {
        Some(size) => collapse_whitespace(size),
        None => "default".to_string(),
    };
    format!("{}-{}-{}", product_id, collapse_whitespace(color), size_part)
}

/// Strip separator characters (dashes and whitespace) from a mobile number,
/// keeping digits and a leading country-code `+`.
pub fn normalize_mobile(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Replace every whitespace run with a single `-`.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_whitespace = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_identity_with_size() {
        assert_eq!(
            variant_identity("ip14", "Midnight Black", Some("256GB")),
            "ip14-Midnight-Black-256GB"
        );
    }

    #[test]
    fn test_variant_identity_without_size() {
        assert_eq!(
            variant_identity("buds3", "White", None),
            "buds3-White-default"
        );
    }

    #[test]
    fn test_variant_identity_collapses_whitespace_runs() {
        assert_eq!(
            variant_identity("rog", "Eclipse  Gray ", Some("32GB RAM")),
            "rog-Eclipse-Gray--32GB-RAM"
        );
    }

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("0917-123-4567"), "09171234567");
        assert_eq!(normalize_mobile("+63 917 123 4567"), "+639171234567");
        assert_eq!(normalize_mobile("09171234567"), "09171234567");
    }
}
