/// HTML wrapper around a rendered figure.
///
/// The template (`page.html`) is embedded at compile time and uses `{{TOKEN}}`
/// placeholders. Tokens the caller does not fill are blanked so they never
/// reach the browser.

const TEMPLATE: &str = include_str!("page.html");

const CLOSED: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Closed</title></head>\
<body style=\"font-family: system-ui, sans-serif; color: #333; padding: 24px\">\
<p>Figure closed. The next figure, if any, opens in a new tab.</p></body></html>";

/// Renders the viewer page for one figure.
///
/// # Arguments
/// - `title`: page title, already plain text (escaped here)
/// - `svg`  : standalone SVG document, inlined as-is
/// - `index`: 1-based position of the figure in this run
pub fn render_page(title: &str, svg: &str, index: usize) -> String {
    let html = TEMPLATE
        .replace("{{TITLE}}", &crate::render::svg::escape(title))
        .replace("{{INDEX}}", &index.to_string());

    // The SVG goes in last so braces inside figure text are left alone.
    match html.split_once("{{SVG}}") {
        Some((head, tail)) => format!(
            "{}{}{}",
            blank_remaining(head.to_owned()),
            svg,
            blank_remaining(tail.to_owned())
        ),
        None => blank_remaining(html),
    }
}

/// Page returned after the close button is pressed.
pub fn closed_page() -> &'static str {
    CLOSED
}

/// Replaces any `{{TOKEN}}` left in `html` with an empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        match html[start..].find("}}") {
            Some(end) => html.replace_range(start..start + end + 2, ""),
            None => break,
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_title_index_and_svg() {
        let html = render_page("A & B", "<svg id=\"fig\"></svg>", 2);
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<svg id=\"fig\"></svg>"));
        assert!(html.contains("Figure 2."));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn svg_text_with_braces_survives() {
        let html = render_page("t", "<svg><text>{{kept}}</text></svg>", 1);
        assert!(html.contains("{{kept}}"));
    }

    #[test]
    fn unknown_tokens_are_blanked() {
        assert_eq!(blank_remaining("a{{X}}b{{Y}}c".into()), "abc");
        assert_eq!(blank_remaining("open {{ only".into()), "open {{ only");
    }
}
