use std::path::Path;

use anyhow::Result;

use aligner::presentation::{create_analyze_use_case, resolve_config, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ErrorEvent, FactEvent, ScanCompleteEvent};
use crate::ui::views::scan::{render_scan_header, render_scan_report};

pub fn cmd_scan(
    path: &Path,
    config: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = resolve_config(config, Some(path))?;
    let ui = UiContext::new(json, verbose, color);
    let use_case = create_analyze_use_case(config);

    if !json {
        print!("{}", render_scan_header(path, ui.color, ui.unicode));
        println!();
    }

    let project = match use_case.scan(path) {
        Ok(project) => project,
        Err(err) if json => {
            emit_event(&ErrorEvent::new("scan", err.to_string()))?;
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        for fact in project.facts() {
            emit_event(&FactEvent::new(fact))?;
        }
        emit_event(&ScanCompleteEvent::new(&project))?;
    } else {
        print!(
            "{}",
            render_scan_report(&project, verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}
