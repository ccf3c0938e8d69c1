/// Renders `text` as a Rust string literal.
pub fn quote(text: &str) -> String {
    format!("{:?}", text)
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Age"), "\"Age\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
    }
}
