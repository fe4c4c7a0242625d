use serde_json::Value;

/// Reindent a JSON document with two spaces, keeping key order
pub fn pretty_json(text: &str) -> serde_json::Result<String> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reindents_with_two_spaces() {
        let pretty = pretty_json(r#"{"b":1,"a":[true,null]}"#).unwrap();
        assert_eq!(
            pretty,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn scalars_and_surrounding_whitespace() {
        assert_eq!(pretty_json("  42 \n").unwrap(), "42");
        assert_eq!(pretty_json("[]").unwrap(), "[]");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(pretty_json("{ not json").is_err());
        assert!(pretty_json("").is_err());
    }
}
