use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use aed_cli::pipeline::{OutputConfig, clean, default_output_path, ingest, output};
use aed_cli::types::CleanResult;
use aed_model::{CleanOptions, LAST_CHECKED_FORMAT};
use aed_transform::normalization::INPUT_DATE_FORMATS;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_formats() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Direction", "Pattern", "Example"]);
    apply_table_style(&mut table);
    for format in INPUT_DATE_FORMATS {
        table.add_row(vec!["input", format.pattern, format.example]);
    }
    table.add_row(vec!["output", LAST_CHECKED_FORMAT, "14/Dec/2023"]);
    println!("{table}");
    println!("Dates in any other layout are written through unchanged.");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let input = &args.input;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let options = match args.region {
        Some(region) => CleanOptions::new().with_region(region),
        None => CleanOptions::default(),
    };
    let run_span = info_span!("run", input = %input.display(), dry_run = args.dry_run);
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let features = info_span!("ingest").in_scope(|| ingest(input))?;

    let run = clean(&features, &options);

    let output_config = OutputConfig {
        output: &output_path,
        skip_report: args.skip_report.as_deref(),
        dry_run: args.dry_run,
    };
    let output_result = info_span!("output", output = %output_path.display())
        .in_scope(|| output(&run, &output_config))?;

    info!(
        accepted = run.accepted_count(),
        skipped = run.skipped_count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(CleanResult {
        input: input.clone(),
        output: output_path,
        region: options.region,
        run,
        sha256: output_result.sha256,
        written: output_result.written,
        skip_report: output_result.skip_report,
    })
}
