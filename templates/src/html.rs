//! HTML building blocks shared by the templates.

use crate::model::RenderedFragment;

/// Escapes HTML special characters in a string.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Appends a two-column heading row.
pub fn push_header_row(html: &mut String, label: &str) {
    html.push_str("<tr><td colspan=\"2\">");
    html.push_str(&escape_html(label));
    html.push_str("</td></tr>");
}

/// Appends a `label | value` row. Both are escaped.
pub fn push_data_row(html: &mut String, label: &str, value: &str) {
    html.push_str("<tr><td>");
    html.push_str(&escape_html(label));
    html.push_str("</td><td>");
    html.push_str(&escape_html(value));
    html.push_str("</td></tr>");
}

/// Wraps a fragment in a minimal standalone HTML document.
#[must_use]
pub fn render_page(title: &str, fragment: &RenderedFragment) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} — DBpedia Navigator</title>
</head>
<body>
<main id="main-content">
<h1>{title}</h1>
{fragment}
</main>
</body>
</html>
"##,
        title = escape_html(title),
        fragment = fragment.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b class="x">A & B</b>"#),
            "&lt;b class=&quot;x&quot;&gt;A &amp; B&lt;/b&gt;"
        );
    }

    #[test]
    fn rows() {
        let mut html = String::new();
        push_header_row(&mut html, "City Information");
        push_data_row(&mut html, "elevation", "113 m");
        assert_eq!(
            html,
            "<tr><td colspan=\"2\">City Information</td></tr><tr><td>elevation</td><td>113 m</td></tr>"
        );
    }

    #[test]
    fn page_embeds_fragment_unescaped() {
        let fragment = RenderedFragment::new("<table></table>".to_string());
        let page = render_page("Leipzig & Co", &fragment);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Leipzig &amp; Co — DBpedia Navigator</title>"));
        assert!(page.contains("\n<table></table>\n"));
    }
}
