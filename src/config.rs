use std::path::PathBuf;

/// Fixed name of the rendered word-cloud image. The path is shared by every
/// request; concurrent analyses race on it and the last writer wins.
pub const WORDCLOUD_FILENAME: &str = "wordcloud_risk.png";

/// Explicit configuration record for the analysis pipeline, passed in at
/// construction time instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where uploaded documents are stored.
    pub upload_dir: PathBuf,
    /// Where rendered artifacts (the word-cloud PNG) are written.
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn wordcloud_path(&self) -> PathBuf {
        self.static_dir.join(WORDCLOUD_FILENAME)
    }
}
