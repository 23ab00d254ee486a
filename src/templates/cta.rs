use crate::slide::EnrichedSlide;
use crate::theme::ThemePalette;

use super::{document, text};

/// Footer offset that keeps the footer clear of the profile cut-out.
const CUTOUT_FOOTER_STYLE: &str = "left:520px;";

pub(super) fn render(slide: &EnrichedSlide, theme: &ThemePalette) -> String {
    let d = &slide.data;
    let message = text(&d.message);
    let sub_message = text(&d.sub_message);
    let name = text(&d.name);
    let contact = text(&d.contact);
    let handle = text(&d.handle);

    let contact_box = |class: &str| {
        format!(
            r#"<div class="{class}">
                <div class="cta-name">{name}</div>
                <div class="cta-phone-btn">
                    <span class="phone-icon">&#9742;</span>
                    <span>{contact}</span>
                </div>
                <div class="cta-handle">{handle}</div>
            </div>"#
        )
    };

    // two layouts: photo on the left with text on the right, or centered text
    let (profile_html, section, footer_style) = match slide.profile.as_deref() {
        Some(src) => (
            format!(r#"<div class="cta-profile-cutout"><img src="{src}" /></div>"#),
            format!(
                r#"<div class="cta-right">
            <h2>{message}</h2>
            <p class="sub-msg">{sub_message}</p>
            {}
        </div>"#,
                contact_box("cta-contact-box")
            ),
            Some(CUTOUT_FOOTER_STYLE),
        ),
        None => (
            String::new(),
            format!(
                r#"<div class="cta-center">
            <h2>{message}</h2>
            <p class="sub-msg">{sub_message}</p>
            {}
        </div>"#,
                contact_box("cta-contact-box-center")
            ),
            None,
        ),
    };

    let (accent, accent_sub) = (theme.accent, theme.accent_sub);
    let css = format!(
        r#"
    .cta-layout {{ display: flex; align-items: center; height: 920px; position: relative; }}
    .cta-profile-cutout {{ position: absolute; left: -40px; bottom: 10px; width: 540px; z-index: 10; }}
    .cta-profile-cutout img {{ width: 100%; height: auto; }}
    .cta-right {{ margin-left: 450px; z-index: 2; max-width: 540px; }}
    .cta-right h2 {{ font-size: 38px; line-height: 1.45; margin-bottom: 24px; font-weight: 900; letter-spacing: -1.5px; }}
    .cta-right .sub-msg {{ font-size: 24px; color: {t2}; margin-bottom: 36px; line-height: 1.75; letter-spacing: 0.3px; }}
    .cta-contact-box, .cta-contact-box-center {{
        background: {glass_bg};
        border: 1px solid {badge_bd};
        border-radius: 16px;
        backdrop-filter: blur({glass_blur});
        -webkit-backdrop-filter: blur({glass_blur});
    }}
    .cta-contact-box {{ padding: 28px 36px; }}
    .cta-contact-box-center {{ padding: 32px 48px; display: inline-block; }}
    .cta-name {{ font-size: 22px; color: {t2}; margin-bottom: 16px; }}
    .cta-phone-btn {{
        display: inline-flex; align-items: center; gap: 12px;
        background: {badge_bg};
        border: 1px solid {badge_bd};
        border-radius: 12px;
        padding: 16px 28px;
        margin-bottom: 12px;
    }}
    .cta-phone-btn span {{ font-size: 30px; font-weight: 900; color: {accent}; letter-spacing: 1px; }}
    .cta-phone-btn .phone-icon {{ font-size: 24px; }}
    .cta-handle {{ font-size: 18px; color: {accent_sub}; font-weight: 600; }}
    .cta-center {{ width: 100%; text-align: center; margin-top: 160px; }}
    .cta-center h2 {{ font-size: 42px; line-height: 1.45; margin-bottom: 28px; font-weight: 900; letter-spacing: -1.5px; }}
    .cta-center .sub-msg {{ font-size: 22px; color: {t2}; margin-bottom: 48px; line-height: 1.75; }}
    .cta-contact-box-center .cta-handle {{ font-size: 20px; }}
"#,
        t2 = theme.t2,
        glass_bg = theme.glass_bg(),
        glass_blur = theme.glass_blur(),
        badge_bg = theme.badge_bg,
        badge_bd = theme.badge_bd,
    );

    let content = format!(
        r#"<div class="shield-mark"></div>
    <div class="cta-layout">
        {profile_html}
        {section}
    </div>"#
    );

    document(slide, theme, &css, &content, footer_style)
}
