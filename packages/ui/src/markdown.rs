use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render note content as HTML for the read-only preview. Raw HTML in the
/// source is shown as text rather than injected, and link or image targets
/// with any scheme other than http, https or mailto are emptied.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Relative URLs pass; absolute ones only with an allowed scheme. Browsers
/// ignore whitespace and control characters inside a scheme, so they are
/// ignored here too.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let allowed = match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => {
            let scheme = cleaned[..end].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    };
    if allowed {
        url
    } else {
        CowStr::Borrowed("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("# Call list\n\n- **Ana**\n- ~~Bob~~");
        assert!(html.contains("<h1>Call list</h1>"));
        assert!(html.contains("<strong>Ana</strong>"));
        assert!(html.contains("<del>Bob</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_emptied() {
        let html = render_markdown("[x](javascript:alert(1)) ![i](JavaScript:alert(2))");
        assert!(!html.to_lowercase().contains("javascript"));
        assert!(html.contains("<a href=\"\">x</a>"));
    }

    #[test]
    fn test_scheme_check_ignores_case_and_padding() {
        assert_eq!(&*safe_url(CowStr::Borrowed("JAVASCRIPT:alert(1)")), "");
        assert_eq!(&*safe_url(CowStr::Borrowed("java\tscript:alert(1)")), "");
        assert_eq!(&*safe_url(CowStr::Borrowed("data:text/html,hi")), "");
        assert_eq!(&*safe_url(CowStr::Borrowed("HTTPS://example.com")), "HTTPS://example.com");
        assert_eq!(&*safe_url(CowStr::Borrowed("notes/a:b")), "notes/a:b");
    }

    #[test]
    fn test_safe_links_are_kept() {
        let html = render_markdown(
            "[site](https://example.com/a?b=1) [mail](mailto:ana@example.com) [rel](/notes#top)",
        );
        assert!(html.contains("href=\"https://example.com/a?b=1\""));
        assert!(html.contains("href=\"mailto:ana@example.com\""));
        assert!(html.contains("href=\"/notes#top\""));
    }
}
