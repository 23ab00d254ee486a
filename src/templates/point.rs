use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{apply_highlight, document, text};

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let d = &slide.data;
    let number = match d.number.as_deref() {
        Some(n) if !n.is_empty() => text(&d.number),
        _ => "01".to_string(),
    };
    let heading = apply_highlight(
        d.heading.as_deref().unwrap_or_default(),
        d.highlight.as_deref(),
        "hl-marker",
    );
    let body = text(&d.body);
    let accent = theme.accent;

    let css = format!(
        r#"
    .content {{ margin-top: 180px; position: relative; }}
    .num-watermark {{
        color: {num_color};
        font-size: 180px; font-weight: 900;
        position: absolute; top: -60px; right: 20px;
        line-height: 1; z-index: 0;
        font-variant-numeric: tabular-nums;
    }}
    .point-header {{ display: flex; align-items: center; gap: 20px; margin-bottom: 36px; position: relative; z-index: 1; }}
    .point-number {{ font-size: 56px; font-weight: 900; color: {accent}; line-height: 1; font-variant-numeric: tabular-nums; }}
    .point-number-line {{ width: 1px; height: 48px; background: linear-gradient(180deg, {accent}, transparent); }}
    h2 {{ font-size: 44px; line-height: 1.35; margin-bottom: 28px; letter-spacing: -1.5px; font-weight: 900; position: relative; z-index: 1; }}
    .body-card {{
        position: relative; z-index: 1;
        padding: 32px 36px;
        border-radius: 16px;
        background: {glass_bg};
        border: 1px solid {glass_bd};
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
        border-left: 4px solid {accent};
    }}
    .body {{ font-size: 28px; line-height: 1.75; color: {t2}; letter-spacing: 0.3px; }}
"#,
        num_color = theme.num_color,
        glass_bg = theme.glass_bg(),
        glass_bd = theme.glass_bd(),
        glass_blur = theme.glass_blur(),
        t2 = theme.t2,
    );

    let content = format!(
        r#"<div class="content">
        <div class="num-watermark">{number}</div>
        <div class="point-header">
            <div class="point-number">{number}</div>
            <div class="point-number-line"></div>
            <div class="badge">POINT {number}</div>
        </div>
        <h2>{heading}</h2>
        <div class="body-card"><p class="body">{body}</p></div>
    </div>"#
    );

    document(slide, theme, &css, &content, None)
}
