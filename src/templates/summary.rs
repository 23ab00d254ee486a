use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{document, escape, newlines_to_br, text};

fn checklist_html(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"
        <div class="check-item">
            <div class="check-badge">{:02}</div>
            <div class="check-content">
                <span class="check-icon">&#10003;</span>
                <span class="check-text">{}</span>
            </div>
        </div>"#,
                i + 1,
                newlines_to_br(&escape(item))
            )
        })
        .collect()
}

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let title = text(&slide.data.title);
    let items = checklist_html(&slide.data.items);
    let (accent, accent_sub) = (theme.accent, theme.accent_sub);
    let glass_blur = theme.glass_blur();

    let css = format!(
        r#"
    .content {{ margin-top: 100px; }}
    h2 {{ font-size: 42px; margin-bottom: 40px; font-weight: 900; letter-spacing: -1.5px; }}
    .check-item {{
        display: flex; align-items: flex-start; gap: 18px;
        padding: 20px 24px; margin-bottom: 10px; border-radius: 14px;
        background: {glass_bg};
        border: 1px solid {glass_bd};
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
    }}
    .check-badge {{
        min-width: 36px; height: 36px; border-radius: 50%;
        background: linear-gradient(135deg, {accent}, {accent_sub});
        color: #0f1923;
        font-size: 15px; font-weight: 900;
        display: flex; align-items: center; justify-content: center;
        flex-shrink: 0;
        font-variant-numeric: tabular-nums;
    }}
    .check-content {{ display: flex; align-items: flex-start; gap: 10px; padding-top: 4px; }}
    .check-icon {{ color: {accent}; font-size: 18px; font-weight: 900; flex-shrink: 0; margin-top: 2px; }}
    .check-text {{ font-size: 26px; line-height: 1.6; color: {t1}; letter-spacing: 0.3px; }}
"#,
        glass_bg = theme.glass_bg(),
        glass_bd = theme.glass_bd(),
        t1 = theme.t1,
    );

    let content = format!(
        r#"<div class="content">
        <div class="top-line"></div>
        <h2>{title}</h2>
        {items}
    </div>"#
    );

    document(slide, theme, &css, &content, None)
}
