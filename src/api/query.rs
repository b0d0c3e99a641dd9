use serde_json::Value;
use url::form_urlencoded::Serializer;

use super::Payload;

/// Flattens a payload into a form-encoded query string for GET and DELETE requests.
///
/// The API expects PHP-style parameters, so we follow `http_build_query`:
/// booleans become `1`/`0`, nulls (and empty arrays or objects) are left out entirely,
/// and nested values are addressed as `key[child]=value` or `key[0]=value`.
/// One difference remains: `*` is left as-is where PHP would send `%2A`.
/// Both decode to the same character.
pub fn build_query(payload: &Payload) -> String {
    let mut serializer = Serializer::new(String::new());
    for (key, value) in payload {
        append_value(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_value(serializer: &mut Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            serializer.append_pair(key, if *flag { "1" } else { "0" });
        }
        Value::Number(number) => {
            serializer.append_pair(key, &number.to_string());
        }
        Value::String(text) => {
            serializer.append_pair(key, text);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_value(serializer, &format!("{key}[{index}]"), item);
            }
        }
        Value::Object(fields) => {
            for (name, item) in fields {
                append_value(serializer, &format!("{key}[{name}]"), item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payloads must be objects"),
        }
    }

    #[test]
    fn empty_payload_yields_empty_query() {
        assert_eq!(build_query(&Payload::new()), "");
    }

    #[test]
    fn booleans_are_numeric() {
        let query = build_query(&payload(json!({ "_expand": true, "archived": false })));
        assert_eq!(query, "_expand=1&archived=0");
    }

    #[test]
    fn template_filter_is_percent_encoded() {
        let query = build_query(&payload(json!({
            "_expand": true,
            "_filter": "type=='custom',type=='premium'",
        })));
        assert_eq!(
            query,
            "_expand=1&_filter=type%3D%3D%27custom%27%2Ctype%3D%3D%27premium%27"
        );
    }

    #[test]
    fn nested_and_empty_values() {
        let query = build_query(&payload(json!({
            "blank": [],
            "empty": "",
            "nested": { "a": 1, "b": ["x", "y z"] },
            "none": null,
            "nothing": {},
            "ratio": 1.5,
        })));
        assert_eq!(
            query,
            "empty=&nested%5Ba%5D=1&nested%5Bb%5D%5B0%5D=x&nested%5Bb%5D%5B1%5D=y+z&ratio=1.5"
        );
    }
}
