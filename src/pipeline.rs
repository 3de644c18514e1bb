use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AnalyzeError;
use crate::extract;
use crate::matcher::PhraseMatcher;
use crate::model::{AnalysisReport, PhraseCount};
use crate::scorer;
use crate::util::{ensure_directory, now_utc_string, sha256_hex};
use crate::wordcloud;

/// The analysis pipeline: extract -> match -> score -> render, strictly in
/// that order, one document at a time. No retries; any failure is terminal
/// for the current request.
pub struct Analyzer {
    config: AppConfig,
    matcher: PhraseMatcher,
}

impl Analyzer {
    pub fn new(config: AppConfig) -> Result<Self> {
        ensure_directory(&config.upload_dir)?;
        ensure_directory(&config.static_dir)?;

        let matcher = PhraseMatcher::new().context("failed to compile the risk lexicon")?;

        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn analyze_file(
        &self,
        path: &Path,
        display_name: &str,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let bytes = fs::read(path).map_err(|err| {
            AnalyzeError::DocumentRead(format!("failed to read {}: {err}", path.display()))
        })?;

        self.analyze_bytes(&bytes, display_name)
    }

    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        display_name: &str,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let text = extract::extract_text_from_bytes(bytes)?;
        let tally = self.matcher.scan(&text);
        let risk = scorer::assess(tally.total(), text.chars().count());

        let image_path = self.config.wordcloud_path();
        wordcloud::render(&text, &image_path)?;

        info!(
            filename = display_name,
            total = risk.total_matches,
            tier = risk.tier.as_str(),
            distinct_phrases = tally.len(),
            "analysis complete"
        );

        let phrases = tally
            .ranked()
            .into_iter()
            .map(|(phrase, count)| PhraseCount {
                phrase: phrase.to_string(),
                count,
            })
            .collect();

        Ok(AnalysisReport {
            filename: display_name.to_string(),
            sha256: sha256_hex(bytes),
            analyzed_at: now_utc_string(),
            phrases,
            risk,
            image_path: image_path.display().to_string(),
        })
    }
}

/// Upload validation shared by the web form and the CLI: a name must be
/// present and carry a `.pdf` extension (case-insensitive). Extension check
/// only, no content sniffing.
pub fn validate_pdf_filename(filename: &str) -> Result<(), AnalyzeError> {
    if filename.trim().is_empty() {
        return Err(AnalyzeError::Validation(
            "Please select a PDF file.".to_string(),
        ));
    }

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AnalyzeError::Validation(
            "Only PDF files are supported.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tests::minimal_pdf;
    use crate::model::RiskTier;

    #[test]
    fn validation_rejects_missing_and_non_pdf_names() {
        assert!(matches!(
            validate_pdf_filename(""),
            Err(AnalyzeError::Validation(_))
        ));
        assert!(matches!(
            validate_pdf_filename("report.docx"),
            Err(AnalyzeError::Validation(_))
        ));
        assert!(validate_pdf_filename("report.pdf").is_ok());
        assert!(validate_pdf_filename("REPORT.PDF").is_ok());
    }

    #[test]
    fn missing_file_is_a_document_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::new(AppConfig {
            upload_dir: dir.path().join("uploads"),
            static_dir: dir.path().join("static"),
        })
        .unwrap();

        let err = analyzer
            .analyze_file(Path::new("/nonexistent/report.pdf"), "report.pdf")
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::DocumentRead(_)));
    }

    #[test]
    fn synthetic_disclosure_scores_end_to_end() {
        let pdf = minimal_pdf("There is a material uncertainty and an impairment of assets.");

        let text = extract::extract_text_from_bytes(&pdf).unwrap();
        let tally = PhraseMatcher::new().unwrap().scan(&text);

        assert_eq!(tally.net_count("material uncertainty"), 1);
        assert_eq!(tally.net_count("impairment"), 1);
        assert_eq!(tally.total(), 2);

        let risk = scorer::assess(tally.total(), text.chars().count());
        assert_eq!(risk.tier, RiskTier::Low);
    }

    #[test]
    fn analyze_bytes_produces_the_full_report() {
        // Needs a system font for the word cloud; skipped where none exists.
        if wordcloud::load_system_font().is_err() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            upload_dir: dir.path().join("uploads"),
            static_dir: dir.path().join("static"),
        };
        let analyzer = Analyzer::new(config.clone()).unwrap();

        let pdf = minimal_pdf("Liquidity risk rose and losses continued. Losses again.");
        let report = analyzer.analyze_bytes(&pdf, "q3_disclosure.pdf").unwrap();

        assert_eq!(report.filename, "q3_disclosure.pdf");
        assert_eq!(report.sha256, sha256_hex(&pdf));
        assert_eq!(report.phrases[0].phrase, "losses");
        assert_eq!(report.phrases[0].count, 2);
        assert_eq!(report.risk.tier, RiskTier::Low);
        assert!(config.wordcloud_path().exists());
    }
}
