use std::path::Path;

use aligner::domain::entities::{ProjectAnalysis, ProjectFact};

use super::join_or_dash;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_scan_header(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Scan, "Aligner Scan");
    header.add("Project", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

fn render_fact(fact: &ProjectFact, verbose: u8, supports_color: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::info(fact.relative_path.as_str()).render(supports_color),
        ColoredText::dim(format!("({} lines)", fact.line_count)).render(supports_color)
    );

    if !fact.declared_symbols.is_empty() {
        out.push_str(&format!("  symbols: {}\n", join_or_dash(&fact.symbol_names())));
    }
    if !fact.keyword_hits.is_empty() {
        let hits: Vec<String> = fact
            .keyword_hits
            .iter()
            .map(|hit| format!("{}×{}", hit.keyword, hit.count))
            .collect();
        out.push_str(&format!("  keywords: {}\n", hits.join(", ")));
    }
    if verbose > 0 && !fact.imported_modules.is_empty() {
        out.push_str(&format!("  imports: {}\n", join_or_dash(&fact.imported_modules)));
    }
    for statement in &fact.purpose_statements {
        out.push_str(&format!(
            "  purpose (line {}): {}\n",
            statement.line_number, statement.text
        ));
    }
    out
}

pub fn render_scan_report(
    project: &ProjectAnalysis,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for fact in project.facts() {
        out.push_str(&render_fact(fact, verbose, supports_color));
    }
    if !project.facts().is_empty() {
        out.push('\n');
    }

    let mut summary = ResultSummary::success("Scan complete");
    summary.add_stat("Files found", project.total_files);
    summary.add_stat("Files analysed", project.facts().len());
    summary.add_stat(
        "Code / config / docs",
        format!(
            "{} / {} / {}",
            project.code_files.len(),
            project.config_files.len(),
            project.documentation_files.len()
        ),
    );
    summary.add_stat("Dependencies", join_or_dash(&project.dependencies));
    if project.facts().is_empty() {
        summary.add_warning("no supported files found");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
