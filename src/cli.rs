use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "finsignal",
    version,
    about = "Financial-disclosure risk language scanner"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one disclosure PDF and write a JSON report plus word cloud
    Analyze(AnalyzeArgs),
    /// Run the upload-form web server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the disclosure PDF
    pub pdf_path: PathBuf,

    #[arg(long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Report destination; defaults to <out-dir>/analysis_report.json
    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    #[arg(long, default_value = "uploads")]
    pub upload_dir: PathBuf,

    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,
}
