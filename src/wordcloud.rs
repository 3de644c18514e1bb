//! Term-frequency word-cloud rendering.
//!
//! Display-only: nothing here feeds the risk score. The document text is
//! tokenized, stop-word filtered, and the most frequent terms are drawn
//! onto a fixed 800x400 white PNG with font size scaled by frequency.

use std::collections::HashMap;
use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{Font, Scale, point};
use tracing::debug;

use crate::error::AnalyzeError;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;
const MARGIN: f32 = 12.0;
const WORD_GAP: f32 = 14.0;
const ROW_GAP: f32 = 8.0;
const MIN_FONT_SIZE: f32 = 13.0;
const MAX_FONT_SIZE: f32 = 64.0;
const MAX_WORDS: usize = 60;

const PALETTE: [[u8; 3]; 6] = [
    [31, 61, 107],
    [140, 30, 30],
    [22, 96, 84],
    [90, 62, 120],
    [160, 88, 18],
    [45, 45, 45],
];

/// Standard English stop words. Tokens are alphabetic-only, so contraction
/// fragments ("don", "t", "ve", ...) appear as their own entries.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Lowercased alphabetic term frequencies with stop words removed, sorted
/// by count descending (alphabetical tie-break for determinism).
pub fn term_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in text.split(|c: char| !c.is_alphabetic()) {
        if token.len() < 2 {
            continue;
        }
        let word = token.to_lowercase();
        if is_stopword(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}

/// Probe well-known system font locations. Rendering needs a real font; a
/// machine without one gets a render error rather than a blank image.
pub fn load_system_font() -> Result<Font<'static>, AnalyzeError> {
    let font_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in font_paths {
        if let Ok(data) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                debug!(path, "loaded system font");
                return Ok(font);
            }
        }
    }

    Err(AnalyzeError::Render(
        "no usable system font found".to_string(),
    ))
}

/// Render the word cloud for `text` to a PNG at `output`. Fails when the
/// document has no vocabulary left after stop-word filtering.
pub fn render(text: &str, output: &Path) -> Result<(), AnalyzeError> {
    let frequencies = term_frequencies(text);
    if frequencies.is_empty() {
        return Err(AnalyzeError::Render(
            "document has no renderable vocabulary".to_string(),
        ));
    }

    let font = load_system_font()?;
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb([255, 255, 255]));

    let max_count = frequencies[0].1 as f32;
    let mut x = MARGIN;
    let mut y = MARGIN;
    let mut row_height = 0.0_f32;

    for (index, (word, count)) in frequencies.iter().take(MAX_WORDS).enumerate() {
        let weight = (*count as f32 / max_count).sqrt();
        let scale = Scale::uniform(MIN_FONT_SIZE + (MAX_FONT_SIZE - MIN_FONT_SIZE) * weight);

        let v_metrics = font.v_metrics(scale);
        let word_height = v_metrics.ascent - v_metrics.descent;
        let word_width = measure_width(&font, word, scale);

        if x + word_width > CANVAS_WIDTH as f32 - MARGIN && x > MARGIN {
            x = MARGIN;
            y += row_height + ROW_GAP;
            row_height = 0.0;
        }
        if y + word_height > CANVAS_HEIGHT as f32 - MARGIN {
            break;
        }

        let color = PALETTE[index % PALETTE.len()];
        draw_word(&mut canvas, &font, word, scale, x, y + v_metrics.ascent, color);

        x += word_width + WORD_GAP;
        row_height = row_height.max(word_height);
    }

    canvas
        .save(output)
        .map_err(|err| AnalyzeError::Render(format!("failed to write {}: {err}", output.display())))
}

fn measure_width(font: &Font<'_>, word: &str, scale: Scale) -> f32 {
    font.layout(word, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

fn draw_word(
    canvas: &mut RgbImage,
    font: &Font<'_>,
    word: &str,
    scale: Scale,
    x: f32,
    baseline: f32,
    color: [u8; 3],
) {
    for glyph in font.layout(word, scale, point(x, baseline)) {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = bounds.min.x + gx as i32;
            let py = bounds.min.y + gy as i32;
            if px < 0 || py < 0 || px >= CANVAS_WIDTH as i32 || py >= CANVAS_HEIGHT as i32 {
                return;
            }
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            for channel in 0..3 {
                let background = pixel.0[channel] as f32;
                let ink = color[channel] as f32;
                pixel.0[channel] = (background + (ink - background) * coverage) as u8;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_drop_stop_words_and_short_tokens() {
        let frequencies = term_frequencies("The losses and the waiver of a covenant");
        let words: Vec<&str> = frequencies.iter().map(|(w, _)| w.as_str()).collect();
        assert!(words.contains(&"losses"));
        assert!(words.contains(&"waiver"));
        assert!(words.contains(&"covenant"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"and"));
        assert!(!words.contains(&"of"));
        assert!(!words.contains(&"a"));
    }

    #[test]
    fn frequencies_are_case_folded_and_sorted_by_count() {
        let frequencies = term_frequencies("Impairment impairment IMPAIRMENT waiver waiver audit");
        assert_eq!(frequencies[0], ("impairment".to_string(), 3));
        assert_eq!(frequencies[1], ("waiver".to_string(), 2));
        assert_eq!(frequencies[2], ("audit".to_string(), 1));
    }

    #[test]
    fn tie_break_is_alphabetical() {
        let frequencies = term_frequencies("zeta alpha");
        assert_eq!(frequencies[0].0, "alpha");
        assert_eq!(frequencies[1].0, "zeta");
    }

    #[test]
    fn all_stop_word_text_has_no_vocabulary() {
        assert!(term_frequencies("the and of a to").is_empty());
        assert!(term_frequencies("").is_empty());
    }

    #[test]
    fn render_rejects_empty_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let err = render("", &dir.path().join("cloud.png")).unwrap_err();
        assert!(matches!(err, AnalyzeError::Render(_)));
    }

    #[test]
    fn render_writes_a_png_when_a_font_is_available() {
        // Skipped on machines without any of the probed system fonts.
        if load_system_font().is_err() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cloud.png");
        render("liquidity liquidity covenant impairment audit", &output).unwrap();

        let image = image::open(&output).unwrap();
        assert_eq!(image.width(), CANVAS_WIDTH);
        assert_eq!(image.height(), CANVAS_HEIGHT);
    }
}
