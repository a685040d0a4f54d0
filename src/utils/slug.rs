use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Barber id from a display name: lowercased, whitespace runs become `-`.
pub fn slugify(name: &str) -> String {
    WHITESPACE
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Lele"), "lele");
        assert_eq!(slugify("Gian Marco"), "gian-marco");
        assert_eq!(slugify("  Jurgen \t Junior "), "jurgen-junior");
    }
}
