use anyhow::{Context, Result};
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::config::AppConfig;
use crate::pipeline::{Analyzer, validate_pdf_filename};
use crate::util::write_json_pretty;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let filename = args
        .pdf_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .with_context(|| format!("invalid UTF-8 filename: {}", args.pdf_path.display()))?;

    validate_pdf_filename(&filename)?;

    let config = AppConfig {
        upload_dir: args.out_dir.clone(),
        static_dir: args.out_dir.clone(),
    };
    let analyzer = Analyzer::new(config)?;

    let report = analyzer.analyze_file(&args.pdf_path, &filename)?;

    let report_path = args
        .report_path
        .unwrap_or_else(|| args.out_dir.join("analysis_report.json"));
    write_json_pretty(&report_path, &report)?;

    info!(path = %report_path.display(), "wrote analysis report");
    info!(image = %report.image_path, "wrote word cloud");
    info!(
        tier = report.risk.tier.as_str(),
        total = report.risk.total_matches,
        density = report.risk.relative_density,
        "risk assessment"
    );
    for entry in &report.phrases {
        info!(phrase = %entry.phrase, count = entry.count, "matched phrase");
    }

    Ok(())
}
