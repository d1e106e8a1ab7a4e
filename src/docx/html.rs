//! HTML preview rendering for extracted paragraphs.

use crate::model::Run;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
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

/// Serialize runs to inline HTML, styles carried on `span` style attributes.
pub fn runs_to_html(runs: &[Run]) -> String {
    let mut parts = String::new();
    for run in runs {
        if run.is_line_break {
            parts.push_str("<br/>");
            continue;
        }
        let mut style: Vec<String> = Vec::new();
        if run.bold.is_on() {
            style.push("font-weight:700".into());
        }
        if run.italic.is_on() {
            style.push("font-style:italic".into());
        }
        if run.underline.is_on() {
            style.push("text-decoration:underline".into());
        }
        if let Some(color) = &run.color {
            style.push(format!("color:{color}"));
        }
        if let Some(size) = run.size_pt {
            style.push(format!("font-size:{size}pt"));
        }
        if let Some(font) = &run.font {
            style.push(format!("font-family:\"{}\"", font.replace('"', "\\\"")));
        }
        if style.is_empty() {
            parts.push_str("<span>");
        } else {
            parts.push_str(&format!("<span style=\"{}\">", style.join(";")));
        }
        parts.push_str(&escape_html(&run.text));
        parts.push_str("</span>");
    }
    parts
}

/// Wrap rendered runs in `h{level}` for headings, `p` otherwise.
pub fn paragraph_fragment(level: Option<u8>, runs: &[Run]) -> String {
    let inner = runs_to_html(runs);
    match level {
        Some(n) => format!("<h{n}>{inner}</h{n}>"),
        None => format!("<p>{inner}</p>"),
    }
}
