//! Web boundary: the upload form, the analysis endpoint, and the rendered
//! word-cloud image. One request is processed start to finish; the
//! synchronous pipeline runs on a blocking worker.

mod pages;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use tracing::error;

use crate::error::AnalyzeError;
use crate::pipeline::{Analyzer, validate_pdf_filename};

#[get("/")]
pub async fn index() -> HttpResponse {
    html(pages::form_page(None))
}

#[post("/analyze")]
pub async fn analyze(analyzer: web::Data<Analyzer>, mut payload: Multipart) -> HttpResponse {
    let (filename, bytes) = match read_pdf_upload(&mut payload).await {
        Ok(upload) => upload,
        Err(err) => return html(pages::form_page(Some(&err.to_string()))),
    };

    if let Err(err) = validate_pdf_filename(&filename) {
        return html(pages::form_page(Some(&err.to_string())));
    }

    let stored_path = analyzer
        .config()
        .upload_dir
        .join(sanitize_filename(&filename));

    let result = web::block(move || {
        std::fs::write(&stored_path, &bytes).map_err(|err| {
            AnalyzeError::DocumentRead(format!(
                "failed to store upload at {}: {err}",
                stored_path.display()
            ))
        })?;
        analyzer.analyze_bytes(&bytes, &filename)
    })
    .await;

    match result {
        Ok(Ok(report)) => html(pages::results_page(&report)),
        Ok(Err(err)) => {
            error!(error = %err, "analysis failed");
            html(pages::form_page(Some(&err.to_string())))
        }
        Err(err) => {
            error!(error = %err, "analysis worker failed");
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(pages::form_page(Some("The analysis could not be completed.")))
        }
    }
}

#[get("/static/wordcloud_risk.png")]
pub async fn wordcloud_image(analyzer: web::Data<Analyzer>) -> HttpResponse {
    match std::fs::read(analyzer.config().wordcloud_path()) {
        Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Err(_) => HttpResponse::NotFound().finish(),
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Pull the single `pdf` file field out of the multipart payload.
async fn read_pdf_upload(payload: &mut Multipart) -> Result<(String, Vec<u8>), AnalyzeError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|err| AnalyzeError::Validation(format!("The upload could not be read: {err}")))?
    {
        if field.name() != "pdf" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|err| {
            AnalyzeError::Validation(format!("The upload could not be read: {err}"))
        })? {
            bytes.extend_from_slice(&chunk);
        }

        return Ok((filename, bytes));
    }

    Err(AnalyzeError::Validation(
        "Please select a PDF file.".to_string(),
    ))
}

/// Keep uploaded names filesystem-safe: path separators and anything
/// outside [A-Za-z0-9._-] become underscores.
fn sanitize_filename(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.trim_matches(['.', '_', '-']).is_empty() {
        "upload.pdf".to_string()
    } else {
        safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd.pdf"), ".._.._etc_passwd.pdf");
        assert_eq!(sanitize_filename("q3 report (final).pdf"), "q3_report__final_.pdf");
        assert_eq!(sanitize_filename("annual-2025.pdf"), "annual-2025.pdf");
    }

    #[test]
    fn sanitize_falls_back_for_degenerate_names() {
        assert_eq!(sanitize_filename("///"), "upload.pdf");
        assert_eq!(sanitize_filename("..."), "upload.pdf");
    }
}
