use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{apply_highlight, document, text};

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let d = &slide.data;
    let badge = text(&d.badge);
    let title = apply_highlight(
        d.title.as_deref().unwrap_or_default(),
        d.highlight.as_deref(),
        "hl-underline",
    );
    let subtitle = text(&d.subtitle);

    let profile = match slide.profile.as_deref() {
        Some(src) => format!(
            r#"<div class="cover-profile"><img src="{src}" /></div>
    <div class="cover-profile-info">
        <div class="glass-chip cp-chip">
            <div class="cp-name">{name}</div>
            <div class="cp-title">{title}</div>
        </div>
    </div>"#,
            name = text(&d.profile_name),
            title = text(&d.profile_title),
        ),
        None => String::new(),
    };

    let css = format!(
        r#"
    .content {{ margin-top: 120px; max-width: 600px; position: relative; z-index: 2; }}
    h1 {{ font-size: 52px; line-height: 1.35; margin: 36px 0 32px; letter-spacing: -1.5px; font-weight: 900; }}
    .sub {{ font-size: 28px; line-height: 1.75; color: {t2}; letter-spacing: 0.3px; }}
    .cover-profile {{ position: absolute; right: -30px; bottom: 80px; width: 520px; z-index: 1; }}
    .cover-profile img {{ width: 100%; height: auto; object-fit: contain; }}
    .cover-profile-info {{ position: absolute; bottom: 100px; right: 80px; z-index: 3; text-align: right; }}
    .cp-name {{ font-size: 24px; font-weight: bold; color: {t1}; }}
    .cp-title {{ font-size: 15px; color: {t2}; margin-top: 4px; }}
"#,
        t1 = theme.t1,
        t2 = theme.t2,
    );

    let content = format!(
        r#"<div class="shield-mark"></div>
    {profile}
    <div class="content">
        <div class="top-line"></div>
        <div class="badge">{badge}</div>
        <h1>{title}</h1>
        <p class="sub">{subtitle}</p>
    </div>"#
    );

    document(slide, theme, &css, &content, None)
}
