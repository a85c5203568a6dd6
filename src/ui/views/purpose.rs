use aligner::domain::entities::PurposeProfile;

use super::join_or_dash;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_purpose_header(
    profile: &PurposeProfile,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Purpose, "Stated Purpose");
    header.add("Text", profile.raw_text.as_str());
    header.render(supports_color, supports_unicode)
}

/// Profile fields, one per line, indented under a `Purpose` heading.
pub fn render_purpose_profile(
    profile: &PurposeProfile,
    verbose: u8,
    supports_color: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::plain("Purpose").bold().render(supports_color));
    out.push('\n');
    out.push_str(&format!(
        "  Domain: {}\n",
        ColoredText::info(profile.domain_focus.as_str()).render(supports_color)
    ));
    out.push_str(&format!(
        "  Objectives: {}\n",
        join_or_dash(&profile.core_objectives)
    ));
    out.push_str(&format!(
        "  Technologies: {}\n",
        join_or_dash(&profile.technologies)
    ));
    if verbose > 0 {
        out.push_str(&format!(
            "  Matched terms: {}\n",
            join_or_dash(&profile.matched_terms)
        ));
        out.push_str(&format!(
            "  Success criteria: {}\n",
            join_or_dash(&profile.success_criteria)
        ));
    }
    out
}
