use thiserror::Error;

/// Failure taxonomy of one analysis request. Every variant is terminal for
/// the current request; nothing is retried.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Missing upload or wrong file extension. Recovered at the web
    /// boundary by re-rendering the form with the message.
    #[error("{0}")]
    Validation(String),

    /// The input is not a readable PDF.
    #[error("could not read the document: {0}")]
    DocumentRead(String),

    /// Word-cloud generation failed, e.g. on a document with no
    /// renderable vocabulary.
    #[error("could not render the word cloud: {0}")]
    Render(String),
}
