use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

static STRINGS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/en.json")).unwrap_or_else(|err| {
        log::error!("Failed to parse string table: {err}");
        Value::Object(serde_json::Map::new())
    })
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(plural_category);
            category
                .and_then(|c| map.get(c))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key. Unknown keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` placeholder substitution.
///
/// A `count` argument selects between `one` and `other` plural forms when the
/// entry is an object.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    get_nested_value(&STRINGS, key)
        .and_then(|v| render_value(v, args))
        .unwrap_or_else(|| key.to_string())
}

/// Format an integer with thousands separators.
#[must_use]
pub fn fmt_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
