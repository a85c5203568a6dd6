use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use aligner::application::AnalysisResponse;
use aligner::infrastructure::atomic_write;
use aligner::presentation::{create_analyze_use_case, resolve_config, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::views::analyze::{
    render_analyze_failure, render_analyze_header, render_analyze_report,
};

pub struct AnalyzeArgs<'a> {
    pub path: &'a Path,
    pub purpose: &'a str,
    pub threshold: Option<f64>,
    pub config: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub fail_under: Option<u32>,
}

pub fn cmd_analyze(
    args: AnalyzeArgs<'_>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let mut config = resolve_config(args.config, Some(args.path))?;
    if let Some(threshold) = args.threshold {
        config.scoring.threshold = threshold;
        config.validate()?;
    }
    let ui = UiContext::new(json, verbose, color);

    if !json {
        print!(
            "{}",
            render_analyze_header(args.path, args.purpose, ui.color, ui.unicode)
        );
        println!();
    }

    let response = create_analyze_use_case(config).respond(args.path, args.purpose);

    if let Some(output) = args.output {
        let bytes = serde_json::to_vec_pretty(&response)?;
        atomic_write(output, &bytes)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
        info!(path = %output.display(), "report written");
    }

    if json {
        emit_event(&response)?;
    } else {
        match &response {
            AnalysisResponse::Report(outcome) => {
                print!(
                    "{}",
                    render_analyze_report(outcome, verbose, ui.color, ui.unicode)
                );
            }
            AnalysisResponse::Failure { error, .. } => {
                eprint!("{}", render_analyze_failure(error, ui.color, ui.unicode));
            }
        }
    }

    if let Some(minimum) = args.fail_under {
        if let Some(outcome) = response.outcome() {
            let percentage = outcome.alignment_analysis.alignment_percentage;
            if percentage < minimum {
                if !json {
                    eprintln!("Alignment {}% is below the required {}%", percentage, minimum);
                }
                std::process::exit(1);
            }
        }
    }

    if response.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
