//! Small HTML building helpers shared by the views and the shell.

/// Escape text for use in element content and quoted attribute values.
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

/// Wrap a view body in the titled card every panel uses.
pub fn card(slot: &str, title: &str, body: &str) -> String {
    format!(
        "<section class=\"card\" data-view=\"{slot}\">\
         <header class=\"card-header\"><h3 class=\"card-title\">{title}</h3></header>\
         <div class=\"card-content\">{body}</div>\
         </section>",
        slot = escape(slot),
        title = escape(title),
    )
}

/// Full HTML document around `body`.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body>{body}</body>\
         </html>",
        title = escape(title),
    )
}
