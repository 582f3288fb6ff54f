//! `{{.key}}` placeholder substitution.

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*\.([A-Za-z0-9_]+)\s*\}\}").expect("Valid placeholder regex")
});

/// Replace each `{{.key}}` in `message` with the matching field of `data`.
///
/// `data` must serialize to a map; anything else substitutes nothing.
/// Placeholders with no matching field are left as written. String values
/// are inserted raw, other values in their JSON form.
pub(crate) fn render<T>(message: &str, data: &T) -> String
where
    T: Serialize + ?Sized,
{
    if !message.contains("{{") {
        return message.to_string();
    }
    let fields = match serde_json::to_value(data) {
        Ok(Value::Object(fields)) => fields,
        _ => return message.to_string(),
    };

    PLACEHOLDER
        .replace_all(message, |caps: &Captures<'_>| match fields.get(&caps[1]) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_substitutes_fields() {
        let data = HashMap::from([("user", "saba"), ("guild", "fly")]);
        assert_eq!(
            render("{{.user}} joined {{ .guild }}", &data),
            "saba joined fly"
        );
    }

    #[test]
    fn test_non_string_values() {
        #[derive(Serialize)]
        struct Count {
            count: u32,
            ok: bool,
        }
        assert_eq!(
            render("{{.count}} {{.ok}}", &Count { count: 3, ok: true }),
            "3 true"
        );
    }

    #[test]
    fn test_missing_field_left_in_place() {
        let data: HashMap<&str, &str> = HashMap::new();
        assert_eq!(render("hi {{.name}}", &data), "hi {{.name}}");
        assert_eq!(render("hi {{.name}}", &()), "hi {{.name}}");
    }
}
