//! Inline HTML for the two pages the server renders. Small enough that a
//! template engine would be more machinery than markup.

use crate::model::AnalysisReport;

const STYLE: &str = "\
body{font-family:sans-serif;max-width:760px;margin:2rem auto;color:#222}\
h1{font-size:1.4rem}\
table{border-collapse:collapse;margin:1rem 0}\
td,th{border:1px solid #ccc;padding:.3rem .8rem;text-align:left}\
img{max-width:100%;border:1px solid #ccc}\
.error{color:#8c1e1e;font-weight:bold}\
.tier-low{color:#16604f}.tier-moderate{color:#9a7b00}\
.tier-high{color:#a05812}.tier-critical{color:#8c1e1e}";

pub fn form_page(error: Option<&str>) -> String {
    let message = error
        .map(|msg| format!("<p class=\"error\">{}</p>", escape_html(msg)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
         <title>Disclosure risk scanner</title><style>{STYLE}</style></head>\n\
         <body><h1>Disclosure risk scanner</h1>\
         <p>Upload a financial-disclosure PDF to scan it for risk-indicative language.</p>\
         {message}\
         <form action=\"/analyze\" method=\"post\" enctype=\"multipart/form-data\">\
         <input type=\"file\" name=\"pdf\" accept=\".pdf\">\
         <button type=\"submit\">Analyze</button>\
         </form></body></html>\n"
    )
}

pub fn results_page(report: &AnalysisReport) -> String {
    let mut rows = String::new();
    for entry in &report.phrases {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.phrase),
            entry.count
        ));
    }
    if report.phrases.is_empty() {
        rows.push_str("<tr><td colspan=\"2\">No risk phrases detected</td></tr>");
    }

    let tier = report.risk.tier.as_str();

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
         <title>Analysis of {filename}</title><style>{STYLE}</style></head>\n\
         <body><h1>Analysis of {filename}</h1>\
         <p class=\"tier-{tier}\">Risk tier: <strong>{tier}</strong> &mdash; {description}</p>\
         <p>{total} net matches over {length} characters \
         (relative density {density:.4})</p>\
         <table><tr><th>Phrase</th><th>Net count</th></tr>{rows}</table>\
         <h2>Term frequency</h2>\
         <img src=\"/static/wordcloud_risk.png\" alt=\"word cloud\">\
         <p><a href=\"/\">Analyze another document</a></p>\
         </body></html>\n",
        filename = escape_html(&report.filename),
        description = escape_html(&report.risk.description),
        total = report.risk.total_matches,
        length = report.risk.text_length,
        density = report.risk.relative_density,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PhraseCount, RiskTier};
    use crate::scorer;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            filename: "q3 <draft>.pdf".to_string(),
            sha256: "0".repeat(64),
            analyzed_at: "2026-01-01T00:00:00Z".to_string(),
            phrases: vec![PhraseCount {
                phrase: "going concern".to_string(),
                count: 3,
            }],
            risk: scorer::assess(3, 1_000),
            image_path: "static/wordcloud_risk.png".to_string(),
        }
    }

    #[test]
    fn form_page_escapes_the_error_message() {
        let page = form_page(Some("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn results_page_escapes_the_filename_and_lists_phrases() {
        let report = sample_report();
        assert_eq!(report.risk.tier, RiskTier::Low);

        let page = results_page(&report);
        assert!(page.contains("q3 &lt;draft&gt;.pdf"));
        assert!(page.contains("going concern"));
        assert!(page.contains("Risk tier: <strong>low</strong>"));
        assert!(page.contains("/static/wordcloud_risk.png"));
    }

    #[test]
    fn results_page_handles_an_empty_tally() {
        let mut report = sample_report();
        report.phrases.clear();
        let page = results_page(&report);
        assert!(page.contains("No risk phrases detected"));
    }
}
