use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{document, escape, newlines_to_br, text};

/// Numbered chips for one column. Item count is not limited.
fn items_html(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"<div class="item"><span class="item-num">{}</span>{}</div>"#,
                i + 1,
                newlines_to_br(&escape(item))
            )
        })
        .collect()
}

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let d = &slide.data;
    let title = text(&d.title);
    let left_label = text(&d.left_label);
    let right_label = text(&d.right_label);
    let left = items_html(&d.left_items);
    let right = items_html(&d.right_items);
    let (accent, accent_sub) = (theme.accent, theme.accent_sub);
    let glass_blur = theme.glass_blur();

    let css = format!(
        r#"
    .content {{ margin-top: 100px; }}
    h2 {{ font-size: 40px; margin-bottom: 44px; text-align: center; font-weight: 900; letter-spacing: -1.5px; }}
    .columns {{ display: flex; gap: 20px; position: relative; }}
    .col {{ flex: 1; }}
    .vs-divider {{
        position: absolute; left: 50%; top: 50%;
        transform: translate(-50%, -50%);
        width: 48px; height: 48px;
        background: linear-gradient(135deg, {accent}, {accent_sub});
        border-radius: 50%;
        display: flex; align-items: center; justify-content: center;
        font-size: 16px; font-weight: 900; color: #0f1923;
        z-index: 5;
    }}
    .col-header {{
        font-size: 24px; font-weight: bold; padding: 16px 0;
        text-align: center; margin-bottom: 18px; border-radius: 12px;
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
    }}
    .col-left .col-header {{ background: rgba(100,149,237,0.10); color: #7EB3FF; border: 1px solid rgba(100,149,237,0.20); }}
    .col-right .col-header {{ background: {badge_bg}; color: {accent}; border: 1px solid {badge_bd}; }}
    .item {{
        font-size: 24px; line-height: 1.6; padding: 16px 20px;
        margin-bottom: 10px; border-radius: 12px;
        color: {t2};
        display: flex; align-items: flex-start; gap: 12px;
    }}
    .col-left .item {{ background: rgba(100,149,237,0.06); border: 1px solid rgba(100,149,237,0.12); }}
    .col-right .item {{ background: {card_bg}; border: 1px solid {card_bd}; color: {t1}; }}
    .item-num {{
        min-width: 24px; height: 24px; border-radius: 6px;
        display: inline-flex; align-items: center; justify-content: center;
        font-size: 13px; font-weight: 800;
        flex-shrink: 0; margin-top: 2px;
    }}
    .col-left .item-num {{ background: rgba(100,149,237,0.15); color: #7EB3FF; }}
    .col-right .item-num {{ background: {badge_bg}; color: {accent}; }}
"#,
        badge_bg = theme.badge_bg,
        badge_bd = theme.badge_bd,
        card_bg = theme.card_bg,
        card_bd = theme.card_bd,
        t1 = theme.t1,
        t2 = theme.t2,
    );

    let content = format!(
        r#"<div class="content">
        <div class="top-line" style="margin: 0 auto 36px auto;"></div>
        <h2>{title}</h2>
        <div class="columns">
            <div class="col col-left">
                <div class="col-header">{left_label}</div>
                {left}
            </div>
            <div class="vs-divider">&#8594;</div>
            <div class="col col-right">
                <div class="col-header">{right_label}</div>
                {right}
            </div>
        </div>
    </div>"#
    );

    document(slide, theme, &css, &content, None)
}
