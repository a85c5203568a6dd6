use std::path::Path;

use aligner::application::AlignmentOutcome;
use aligner::domain::entities::{AlignmentAnalysis, CleanupPlan};

use super::join_or_dash;
use super::purpose::render_purpose_profile;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_analyze_header(
    root: &Path,
    stated_purpose: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Analyze, "Aligner Analyze");
    header.add("Project", root.display().to_string());
    header.add("Purpose", stated_purpose);
    header.render(supports_color, supports_unicode)
}

pub fn render_analyze_report(
    outcome: &AlignmentOutcome,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&render_purpose_profile(
        &outcome.purpose_analysis,
        verbose,
        supports_color,
    ));
    out.push('\n');

    let analysis = &outcome.alignment_analysis;
    if !analysis.misaligned_components.is_empty() {
        out.push_str(&render_misaligned(analysis, supports_color, supports_unicode));
        out.push('\n');
    }
    if verbose > 0 && !analysis.aligned_components.is_empty() {
        out.push_str(&render_aligned(analysis, supports_color, supports_unicode));
        out.push('\n');
    }
    if !outcome.cleanup_plan.is_empty() {
        out.push_str(&render_cleanup_plan(
            &outcome.cleanup_plan,
            supports_color,
            supports_unicode,
        ));
        out.push('\n');
    }

    out.push_str(&render_analyze_summary(
        outcome,
        supports_color,
        supports_unicode,
    ));
    out
}

fn render_misaligned(
    analysis: &AlignmentAnalysis,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::plain(format!("Misaligned ({})", analysis.misaligned_count()))
            .bold()
            .render(supports_color)
    );
    for component in &analysis.misaligned_components {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            component.file,
            ColoredText::error(format!("{:.2}", component.alignment_score))
                .render(supports_color)
        ));
        for reason in &component.reasons {
            out.push_str(&format!(
                "      {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(reason.as_str()).render(supports_color)
            ));
        }
    }
    out
}

fn render_aligned(
    analysis: &AlignmentAnalysis,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::plain(format!("Aligned ({})", analysis.aligned_count()))
            .bold()
            .render(supports_color)
    );
    for component in &analysis.aligned_components {
        let served = if component.purpose_served.is_empty() {
            String::new()
        } else {
            format!(
                " {}",
                ColoredText::dim(component.purpose_served.join(", ")).render(supports_color)
            )
        };
        out.push_str(&format!(
            "  {} {} {}{}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            component.file,
            ColoredText::success(format!("{:.2}", component.alignment_score))
                .render(supports_color),
            served
        ));
    }
    out
}

fn render_cleanup_plan(
    plan: &CleanupPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::plain("Cleanup plan").bold().render(supports_color)
    );
    for action in &plan.actions {
        out.push_str(&format!(
            "  {} remove or refactor {} ({})\n",
            Icon::Bullet.colored(supports_color, supports_unicode),
            action.target,
            action.reason
        ));
        if !action.functions_affected.is_empty() {
            out.push_str(&format!(
                "      functions: {}\n",
                join_or_dash(&action.functions_affected)
            ));
        }
    }
    if plan.backup_recommended {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("Back up the project before applying changes.").render(supports_color)
        ));
    }
    out
}

pub fn render_analyze_summary(
    outcome: &AlignmentOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let analysis = &outcome.alignment_analysis;
    let mut summary = if analysis.cleanup_required {
        ResultSummary::partial("Cleanup required")
    } else {
        ResultSummary::success("Project aligned")
    };

    summary.add_stat(
        "Alignment",
        format!(
            "{}% ({} severity)",
            analysis.alignment_percentage,
            ColoredText::level(analysis.severity).render(supports_color)
        ),
    );
    summary.add_stat(
        "Components",
        format!(
            "{} ({} aligned, {} misaligned)",
            analysis.total_components,
            analysis.aligned_count(),
            analysis.misaligned_count()
        ),
    );
    summary.add_stat("Confidence", format!("{:.2}", outcome.confidence));

    if analysis.cleanup_required {
        summary.add_stat(
            "Estimated effort",
            ColoredText::level(outcome.cleanup_plan.estimated_effort).render(supports_color),
        );
        summary.with_next_step("re-run with --output <FILE> to keep the full plan");
    }

    summary.render(supports_color, supports_unicode)
}

/// Failure line shown instead of a report.
pub fn render_analyze_failure(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message).render(supports_color)
    )
}
