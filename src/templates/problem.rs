use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{apply_highlight, document, text};

const SWIPE_HINT: &str = "\u{2192} \u{c2a4}\u{c640}\u{c774}\u{d504}\u{d574}\u{c11c} \u{d655}\u{c778}\u{d558}\u{c138}\u{c694}";

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let d = &slide.data;
    let emoji = text(&d.emoji);
    let main_text = apply_highlight(
        d.main_text.as_deref().unwrap_or_default(),
        d.highlight.as_deref(),
        "hl-marker",
    );
    let sub_text = text(&d.sub_text);

    let css = format!(
        r#"
    .content {{ margin-top: 200px; text-align: center; }}
    .emoji-container {{
        display: inline-flex; align-items: center; justify-content: center;
        width: 120px; height: 120px; border-radius: 50%;
        background: {glass_bg};
        border: 1px solid {glass_bd};
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
        margin-bottom: 40px;
        box-shadow: 0 8px 32px rgba(0,0,0,0.2);
    }}
    .emoji {{ font-size: 56px; }}
    h2 {{ font-size: 44px; line-height: 1.45; margin-bottom: 32px; font-weight: 900; letter-spacing: -1.5px; }}
    .sub {{ font-size: 28px; line-height: 1.75; color: {t2}; letter-spacing: 0.3px; }}
    .swipe-hint {{
        position: absolute; bottom: 100px; left: 50%;
        transform: translateX(-50%);
        color: {t3}; font-size: 16px; letter-spacing: 1px;
    }}
"#,
        glass_bg = theme.glass_bg(),
        glass_bd = theme.glass_bd(),
        glass_blur = theme.glass_blur(),
        t2 = theme.t2,
        t3 = theme.t3,
    );

    let content = format!(
        r#"<div class="content">
        <div class="emoji-container"><span class="emoji">{emoji}</span></div>
        <h2>{main_text}</h2>
        <p class="sub">{sub_text}</p>
    </div>
    <div class="swipe-hint"><span>{SWIPE_HINT}</span></div>"#
    );

    document(slide, theme, &css, &content, None)
}
