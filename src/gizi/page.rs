use super::dto::RawFormInputs;
use super::render::{escape_html, placeholder};

/// Ids of the host page elements the controller drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub food_name: &'static str,
    pub drink_name: &'static str,
    pub user_age: &'static str,
    pub check_button: &'static str,
    pub loading_section: &'static str,
    pub results_section: &'static str,
    pub results_content: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            food_name: "foodName",
            drink_name: "drinkName",
            user_age: "userAge",
            check_button: "checkGiziBtn",
            loading_section: "loadingSection",
            results_section: "resultsSection",
            results_content: "resultsContent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Results,
}

/// Visible state of the nutrition check page.
#[derive(Debug, Clone)]
pub struct PageView {
    pub ids: ElementIds,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub submit_disabled: bool,
    pub results_content: String,
}

impl PageView {
    /// Initial page: results region showing a fact as placeholder content.
    pub fn with_fact(fact: &str) -> Self {
        Self {
            ids: ElementIds::default(),
            loading_visible: false,
            results_visible: true,
            submit_disabled: false,
            results_content: placeholder(fact),
        }
    }

    pub fn show_loading(&mut self) {
        self.results_content.clear();
        self.results_visible = false;
        self.loading_visible = true;
        self.submit_disabled = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading_visible = false;
        self.results_visible = true;
        self.submit_disabled = false;
    }

    pub fn state(&self) -> UiState {
        if self.loading_visible {
            UiState::Loading
        } else {
            UiState::Results
        }
    }

    /// Full HTML document. `alert` is shown as a blocking notice above the form.
    pub fn to_document(&self, values: &RawFormInputs, alert: Option<&str>) -> String {
        let ids = &self.ids;
        let alert_html = alert
            .map(|msg| format!(r#"<div class="alert" role="alert">{}</div>"#, escape_html(msg)))
            .unwrap_or_default();
        format!(
            r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Cek Gizi</title>
</head>
<body>
<main>
<h1>Cek Gizi Makanan &amp; Minuman</h1>
{alert_html}
<form method="post" action="/check">
<label for="{food_id}">Nama Makanan</label>
<input type="text" id="{food_id}" name="food" value="{food}">
<label for="{drink_id}">Nama Minuman</label>
<input type="text" id="{drink_id}" name="drink" value="{drink}">
<label for="{age_id}">Usia</label>
<input type="text" id="{age_id}" name="age" value="{age}">
<button type="submit" id="{btn_id}"{disabled}>Cek Gizi</button>
</form>
<section id="{loading_id}" style="display: {loading_display}"><div class="spinner"></div><p>Menganalisis...</p></section>
<section id="{results_id}" style="display: {results_display}"><h2>Hasil Analisis</h2><div id="{content_id}">{content}</div></section>
</main>
</body>
</html>
"#,
            food_id = ids.food_name,
            drink_id = ids.drink_name,
            age_id = ids.user_age,
            btn_id = ids.check_button,
            loading_id = ids.loading_section,
            results_id = ids.results_section,
            content_id = ids.results_content,
            food = escape_html(&values.food),
            drink = escape_html(&values.drink),
            age = escape_html(&values.age),
            disabled = if self.submit_disabled { " disabled" } else { "" },
            loading_display = display(self.loading_visible),
            results_display = display(self.results_visible),
            content = self.results_content,
        )
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
