//! Slide templates.
//!
//! Every layout is a pure function from an [`EnrichedSlide`] and a
//! [`ThemePalette`] to a complete HTML document laid out on a square
//! [`CANVAS_PX`] canvas. The rasterizer output is resampled to the requested
//! size afterwards, so templates never need to know the final pixel size.
//!
//! User text is HTML-escaped and newlines (real ones and the two-character
//! `\n` escape) become `<br>`. The optional highlight is located in the raw
//! text first, so it only ever wraps characters the reader can see.

mod comparison;
mod cover;
pub mod css;
mod cta;
mod point;
mod problem;
mod summary;

use log::warn;

use crate::slide::{EnrichedSlide, PageInfo, SlideKind};
use crate::theme::ThemePalette;

/// Side length of the layout canvas in CSS pixels.
pub const CANVAS_PX: u32 = 1080;

/// Render `slide` with the template matching its type.
///
/// Unknown types render with the point layout and a warning.
pub fn render_slide(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let kind = slide.data.kind().unwrap_or_else(|| {
        warn!(
            "Unknown slide type '{}' on page {}; using the point layout",
            slide.data.slide_type, slide.page.current
        );
        SlideKind::Point
    });
    render_kind(kind, slide, theme)
}

/// Render `slide` with an explicit layout, ignoring its `type` field.
pub fn render_kind(kind: SlideKind, slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    match kind {
        SlideKind::Cover => cover::render(slide, theme),
        SlideKind::Problem => problem::render(slide, theme),
        SlideKind::Point => point::render(slide, theme),
        SlideKind::Comparison => comparison::render(slide, theme),
        SlideKind::Summary => summary::render(slide, theme),
        SlideKind::Cta => cta::render(slide, theme),
    }
}

/// Escape the five HTML-significant characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Map the literal two-character `\n` escape and CR line endings to `\n`.
fn normalize_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Escape, then turn line breaks into `<br>`.
fn markup(s: &str) -> String {
    escape(s).replace('\n', "<br>")
}

/// Turn real newlines and literal `\n` sequences into `<br>`.
pub fn newlines_to_br(s: &str) -> String {
    normalize_newlines(s).replace('\n', "<br>")
}

/// Escaped, line-broken text for a field. Absent fields render empty.
pub fn text(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|s| markup(&normalize_newlines(s)))
        .unwrap_or_default()
}

/// Render `raw` as markup, wrapping the first exact occurrence of `highlight`
/// in a span.
///
/// Matching runs on the unescaped text, so entities and `<br>` tags can never
/// be split. No match renders exactly like [`text`].
pub fn apply_highlight(raw: &str, highlight: Option<&str>, class: &str) -> String {
    let raw = normalize_newlines(raw);
    let Some(needle) = highlight.map(normalize_newlines).filter(|h| !h.is_empty()) else {
        return markup(&raw);
    };
    match raw.find(&needle) {
        Some(start) => {
            let end = start + needle.len();
            format!(
                r#"{}<span class="{class}">{}</span>{}"#,
                markup(&raw[..start]),
                markup(&raw[start..end]),
                markup(&raw[end..])
            )
        }
        None => markup(&raw),
    }
}

pub(crate) fn page_num_html(page: PageInfo) -> String {
    format!(r#"<div class="page-num">{}</div>"#, page.label())
}

pub(crate) fn dot_indicator_html(page: PageInfo) -> String {
    if page.total == 0 {
        return String::new();
    }
    let dots: String = (1..=page.total)
        .map(|i| {
            if i == page.current {
                r#"<div class="dot active"></div>"#
            } else {
                r#"<div class="dot"></div>"#
            }
        })
        .collect();
    format!(r#"<div class="dot-indicator">{dots}</div>"#)
}

/// Top-left logo; inverted to white on dark themes.
pub(crate) fn logo_html(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    match slide.logo.as_deref() {
        Some(src) if !src.is_empty() => {
            let class = if theme.is_dark() {
                "logo-img logo-img-light"
            } else {
                "logo-img"
            };
            format!(r#"<img class="{class}" src="{src}" />"#)
        }
        _ => String::new(),
    }
}

pub(crate) fn footer_html(slide: &EnrichedSlide, style: Option<&str>) -> String {
    let name = text(&slide.data.footer_name);
    let handle = text(&slide.data.footer_handle);
    let style = style
        .map(|s| format!(r#" style="{s}""#))
        .unwrap_or_default();
    format!(
        r#"<div class="footer"{style}><div class="footer-flex">
        <div class="footer-brand"><span class="footer-shield"></span><span>{name}</span></div>
        <span>{handle}</span>
    </div></div>"#
    )
}

/// Assemble a full document from the base stylesheet, layout-specific CSS and
/// the body content. Logo, page label, footer and dots are added here.
pub(crate) fn document(
    slide: &EnrichedSlide,
    theme: &ThemePalette,
    extra_css: &str,
    content: &str,
    footer_style: Option<&str>,
) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><style>
    {base}
    {extra_css}
    </style></head><body>
    {logo}
    {page_num}
    {content}
    {footer}
    {dots}
    </body></html>"#,
        base = css::base_css(theme),
        logo = logo_html(slide, theme),
        page_num = page_num_html(slide.page),
        footer = footer_html(slide, footer_style),
        dots = dot_indicator_html(slide.page),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Slide;
    use crate::theme;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(newlines_to_br("a\\nb\nc\r\nd"), "a<br>b<br>c<br>d");
    }

    #[test]
    fn highlight_wraps_first_match_only() {
        let out = apply_highlight("B and B", Some("B"), "hl");
        assert_eq!(out, r#"<span class="hl">B</span> and B"#);
    }

    #[test]
    fn highlight_without_match_is_a_noop() {
        assert_eq!(apply_highlight("A widget", Some("Z"), "hl"), "A widget");
        assert_eq!(apply_highlight("A widget", Some(""), "hl"), "A widget");
        assert_eq!(apply_highlight("A widget", None, "hl"), "A widget");
        // matching is case sensitive
        assert_eq!(apply_highlight("A widget", Some("WIDGET"), "hl"), "A widget");
    }

    #[test]
    fn highlight_matches_visible_text() {
        let out = apply_highlight("R&D team", Some("R&D"), "hl");
        assert_eq!(out, r#"<span class="hl">R&amp;D</span> team"#);
        let out = apply_highlight("one\\ntwo", Some("one\ntwo"), "hl");
        assert_eq!(out, r#"<span class="hl">one<br>two</span>"#);
    }

    #[test]
    fn highlight_never_matches_inside_markup() {
        let raw = "R&D\nteam";
        let plain = text(&Some(raw.into()));
        for needle in ["amp", "br", "&amp;", "<br>", ";"] {
            assert_eq!(apply_highlight(raw, Some(needle), "hl"), plain, "{needle}");
        }
    }

    #[test]
    fn dots_mark_current_page() {
        let html = dot_indicator_html(PageInfo::new(2, 3));
        assert_eq!(html.matches("class=\"dot\"").count(), 2);
        assert_eq!(html.matches("dot active").count(), 1);
        assert!(dot_indicator_html(PageInfo::new(0, 0)).is_empty());
    }

    #[test]
    fn logo_is_inverted_on_dark_themes() {
        let mut slide = EnrichedSlide::bare(Slide::new("point"), PageInfo::new(1, 1));
        assert!(logo_html(&slide, theme::lookup("dark_professional")).is_empty());

        slide.logo = Some("data:image/png;base64,AAAA".into());
        let dark = logo_html(&slide, theme::lookup("dark_professional"));
        assert!(dark.contains("logo-img-light"));
        let light = logo_html(&slide, theme::lookup("light_clean"));
        assert!(!light.contains("logo-img-light"));
        assert!(light.contains("data:image/png;base64,AAAA"));
    }

    #[test]
    fn unknown_type_uses_point_layout() {
        let mut unknown = Slide::new("nonexistent");
        unknown.heading = Some("Heading".into());
        let mut point = unknown.clone();
        point.slide_type = "point".into();
        let t = theme::lookup(theme::DEFAULT_THEME);
        let page = PageInfo::new(1, 2);
        assert_eq!(
            render_slide(&EnrichedSlide::bare(unknown, page), t),
            render_slide(&EnrichedSlide::bare(point, page), t)
        );
    }
}
