//! Small helpers for writing html by hand

/// Escape text content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// ` name="value"`, with the value escaped
pub fn attr(name: &str, value: &str) -> String {
    format!(" {}=\"{}\"", name, escape(value))
}

/// Attributes every rendered node carries
pub fn node_attrs(id: &str, class: &str) -> String {
    let mut out = attr("class", class);
    if !id.is_empty() {
        out.push_str(&attr("data-id", id));
    }
    out
}

/// Inline icon placeholder; the host page maps `data-icon` to a glyph.
pub fn icon(name: &str) -> String {
    format!(
        "<span class=\"proto-icon\"{} aria-hidden=\"true\"></span>",
        attr("data-icon", name)
    )
}
