//! Stylesheet shared by every slide layout.

use crate::theme::ThemePalette;

use super::CANVAS_PX;

const FONT_IMPORT: &str =
    "@import url('https://cdn.jsdelivr.net/gh/orioncactus/pretendard@v1.3.9/dist/web/static/pretendard.min.css');";

const FONT_STACK: &str = "'Pretendard', 'Pretendard Variable', 'Malgun Gothic', 'NanumGothic', 'Noto Sans KR', sans-serif";

/// Base rules: page box, typography, badges, footer, logo, glass chips and
/// the dot indicator.
pub fn base_css(t: &ThemePalette) -> String {
    let px = CANVAS_PX;
    let accent = t.accent;
    let accent_sub = t.accent_sub;
    let (glass_bg, glass_bd, glass_blur) = (t.glass_bg(), t.glass_bd(), t.glass_blur());

    format!(
        r#"
    {FONT_IMPORT}
    @page {{ size: {px}px {px}px; margin: 0; }}
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    html {{ width: {px}px; height: {px}px; overflow: hidden; }}
    body {{
        width: {px}px; height: {px}px;
        font-family: {FONT_STACK};
        background: {bg};
        color: {t1};
        padding: 80px;
        position: relative;
        overflow: hidden;
        word-break: keep-all;
        overflow-wrap: break-word;
    }}
    .hl-underline {{
        background-image: linear-gradient(90deg, {accent}, {accent_sub});
        background-position: 0 88%;
        background-size: 100% 6px;
        background-repeat: no-repeat;
        padding-bottom: 4px;
    }}
    .hl-marker {{
        background: linear-gradient(180deg, transparent 55%, {badge_bd} 55%);
        padding: 0 2px;
    }}
    .badge {{
        display: inline-block;
        background: {badge_bg};
        color: {accent};
        padding: 10px 24px;
        border-radius: 8px;
        font-size: 22px;
        border: 1px solid {badge_bd};
        font-weight: bold;
        letter-spacing: 1px;
    }}
    .badge::before {{ content: '\25C6'; margin-right: 8px; font-size: 14px; opacity: 0.7; }}
    .page-num {{
        position: absolute; top: 50px; right: 60px;
        font-size: 18px; color: {t3};
        letter-spacing: 2px;
    }}
    .footer {{
        position: absolute; bottom: 40px; left: 80px; right: 80px;
        border-top: 1px solid {divider};
        padding-top: 16px;
        font-size: 16px; color: {t3};
    }}
    .footer-flex {{ display: flex; justify-content: space-between; align-items: center; }}
    .footer-brand {{ display: flex; align-items: center; gap: 8px; }}
    .footer-shield {{
        display: inline-block;
        width: 16px; height: 18px;
        background: linear-gradient(180deg, {accent}, {accent_sub});
        clip-path: polygon(50% 0%, 100% 20%, 100% 70%, 50% 100%, 0% 70%, 0% 20%);
        opacity: 0.35;
    }}
    .top-line {{
        width: 56px; height: 4px;
        background: linear-gradient(90deg, {accent}, {accent_sub});
        margin-bottom: 36px;
        border-radius: 2px;
    }}
    .glass-chip {{
        display: inline-block;
        background: {glass_bg};
        border: 1px solid {glass_bd};
        border-radius: 40px;
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
        padding: 10px 24px;
    }}
    .logo-img {{ position: absolute; top: 48px; left: 80px; height: 44px; opacity: 0.85; }}
    .logo-img-light {{ filter: brightness(0) invert(1); }}
    .dot-indicator {{
        position: absolute; bottom: 78px; right: 80px;
        display: flex; gap: 8px; align-items: center; z-index: 10;
    }}
    .dot {{ width: 8px; height: 8px; border-radius: 50%; background: {t3}; opacity: 0.4; }}
    .dot.active {{
        width: 24px; border-radius: 4px;
        background: linear-gradient(90deg, {accent}, {accent_sub});
        opacity: 1;
    }}
    .shield-mark {{
        position: absolute;
        right: -40px; bottom: -40px;
        width: 380px; height: 440px;
        background: linear-gradient(180deg, {accent}, {accent_sub});
        clip-path: polygon(50% 0%, 100% 20%, 100% 70%, 50% 100%, 0% 70%, 0% 20%);
        opacity: 0.04;
        z-index: 0;
    }}
"#,
        bg = t.bg,
        t1 = t.t1,
        t3 = t.t3,
        badge_bg = t.badge_bg,
        badge_bd = t.badge_bd,
        divider = t.divider,
    )
}
