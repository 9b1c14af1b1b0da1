use serde_json::{Map, Number, Value};

/// Tooltip markup for a raw GeoJSON feature. Only `properties` is read, so
/// a feature whose geometry does not parse still gets its tooltip.
pub fn tooltip_html(feature: &Value) -> String {
    feature
        .get("properties")
        .and_then(Value::as_object)
        .map(properties_tooltip_html)
        .unwrap_or_default()
}

/// The place name and a line break, then the popup entries as
/// `value - key` list items in document order.
fn properties_tooltip_html(properties: &Map<String, Value>) -> String {
    let mut html = String::new();
    if let Some(place) = properties
        .get("place")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
    {
        html.push_str(place);
        html.push_str("<br>");
    }
    if let Some(content) = properties.get("popupContent").and_then(Value::as_object) {
        html.push_str("<ul>");
        for (key, value) in content {
            html.push_str("<li>");
            html.push_str(&display_value(value));
            html.push_str(" - ");
            html.push_str(key);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html
}

fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        other => other.to_string(),
    }
}

/// Numbers print the way a browser prints them: whole floats lose `.0`.
fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_floats_print_as_integers() {
        assert_eq!(display_value(&json!(5.0)), "5");
        assert_eq!(display_value(&json!(-2.0)), "-2");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(7)), "7");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
