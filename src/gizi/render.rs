use std::fmt::Write;

use super::dto::{AnalysisResult, ItemAnalysis};

pub const NOT_AVAILABLE: &str = "Tidak tersedia";
pub const NO_ASSESSMENT: &str = "Tidak ada penilaian.";
pub const NO_RESULTS: &str =
    "Tidak ada hasil yang tersedia. Pastikan Anda memasukkan nama makanan atau minuman.";
pub const CONNECTION_ERROR: &str = "Terjadi kesalahan koneksi. Mohon coba lagi.";

#[derive(Debug, Clone, Copy)]
enum Slot {
    Food,
    Drink,
}

impl Slot {
    fn label(self) -> &'static str {
        match self {
            Slot::Food => "Makanan",
            Slot::Drink => "Minuman",
        }
    }
}

/// Renders one analysis response into the results fragment.
pub fn render_results(data: &AnalysisResult) -> String {
    if let Some(msg) = data.server_error() {
        return error_block(&msg);
    }
    if data.is_empty() {
        return placeholder(NO_RESULTS);
    }

    let mut html = String::new();
    render_slot(&mut html, Slot::Food, data.food_error(), data.food.as_ref());
    render_slot(&mut html, Slot::Drink, data.drink_error(), data.drink.as_ref());
    html
}

pub fn error_block(msg: &str) -> String {
    format!(r#"<div class="error-message">{}</div>"#, escape_html(msg))
}

pub fn placeholder(msg: &str) -> String {
    format!(r#"<p class="placeholder-message">{}</p>"#, escape_html(msg))
}

fn render_slot(out: &mut String, slot: Slot, error: Option<String>, item: Option<&ItemAnalysis>) {
    if let Some(msg) = error {
        let _ = write!(
            out,
            r#"<div class="error-message">Gagal menganalisis {}: {}</div>"#,
            slot.label(),
            escape_html(&msg)
        );
    } else if let Some(item) = item {
        render_item(out, slot, item);
    }
}

fn render_item(out: &mut String, slot: Slot, item: &ItemAnalysis) {
    let name = item.name().unwrap_or_default();
    let nutrients = item.nutrients.clone().unwrap_or_default();

    let _ = write!(
        out,
        r#"<div class="nutrition-result"><h3>Analisis {}: {}</h3><div class="nutrients">"#,
        slot.label(),
        escape_html(&name)
    );
    for (label, value) in nutrients.rows() {
        let value = value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let _ = write!(
            out,
            "<p><strong>{}:</strong> {}</p>",
            label,
            escape_html(&value)
        );
    }
    let assessment = item
        .assessment()
        .unwrap_or_else(|| NO_ASSESSMENT.to_string());
    let _ = write!(
        out,
        r#"</div><div class="assessment"><p><strong>Penilaian Gizi:</strong> {}</p></div></div>"#,
        escape_html(&assessment)
    );
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
