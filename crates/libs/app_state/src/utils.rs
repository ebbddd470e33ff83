/// Treats unset and whitespace-only values the same way.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[must_use]
pub fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_become_none() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_owned())), None);
        assert_eq!(non_blank(Some(" abc ".to_owned())), Some("abc".to_owned()));
    }

    #[test]
    fn trailing_slashes_are_removed() {
        assert_eq!(trim_trailing_slash("https://api.frontegg.com/"), "https://api.frontegg.com");
        assert_eq!(trim_trailing_slash("http://localhost:1234"), "http://localhost:1234");
    }
}
