use std::path::Path;

use anyhow::Result;

use aligner::domain::services::PurposeAnalyzer;
use aligner::presentation::{resolve_config, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::views::purpose::{render_purpose_header, render_purpose_profile};

pub fn cmd_purpose(
    text: &str,
    config: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(config, Some(&cwd))?;
    let profile = PurposeAnalyzer::new(&config.vocabulary).analyze(text);

    if json {
        emit_event(&profile)?;
        return Ok(());
    }

    let ui = UiContext::new(json, verbose, color);
    print!("{}", render_purpose_header(&profile, ui.color, ui.unicode));
    println!();
    print!("{}", render_purpose_profile(&profile, verbose, ui.color));
    Ok(())
}
