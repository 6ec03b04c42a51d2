use super::inputs::{AGE_RANGE, FormInputs, HEIGHT_RANGE, MIN_INCOME_LPA, MIN_WEIGHT};
use crate::predictor::{Occupation, PredictionResult, SubmitOutcome};

pub const PAGE_TITLE: &str = "Insurance Premium Predictor";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "❌ Could not connect to the backend API. Please try again later.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "❌ An unexpected error occurred.";
pub const SPINNER_MESSAGE: &str = "🔍 Predicting insurance premium category...";

const STYLE: &str = r#"
    *, *::before, *::after { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: system-ui, -apple-system, BlinkMacSystemFont, sans-serif;
      background: #ffffff;
      color: #31333f;
      padding: 3rem 1rem;
    }
    main { max-width: 704px; margin: 0 auto; }
    h1 { font-size: 2rem; margin-bottom: 1rem; }
    h3 { font-size: 1.25rem; margin: 1rem 0 0.75rem; }
    p.intro { margin-bottom: 1.5rem; }
    label { display: block; font-size: 0.875rem; margin: 1rem 0 0.25rem; }
    input, select {
      width: 100%;
      padding: 0.5rem 0.75rem;
      border: 1px solid #d6d6d9;
      border-radius: 0.5rem;
      background: #f0f2f6;
      font-size: 1rem;
    }
    button {
      margin-top: 1.5rem;
      padding: 0.5rem 1rem;
      border: 1px solid #d6d6d9;
      border-radius: 0.5rem;
      background: #ffffff;
      font-size: 1rem;
      cursor: pointer;
    }
    button:disabled { opacity: 0.5; cursor: wait; }
    .spinner { display: none; margin-top: 1rem; }
    .spinner.active { display: block; }
    .banner { margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; }
    .banner.success { background: #dff5e3; color: #177233; }
    .banner.error { background: #ffe5e5; color: #7d1a1a; }
    .banner.info { background: #e1efff; color: #0e4a8f; }
    .detail { margin-top: 0.5rem; white-space: pre-wrap; font-family: monospace; }
    .metric { margin-top: 1rem; }
    .metric-label { font-size: 0.875rem; }
    .metric-value { font-size: 2.25rem; }
    hr { margin: 1.5rem 0; border: none; border-top: 1px solid #e6e6e9; }
    .progress-row { display: flex; gap: 1rem; align-items: center; margin-bottom: 0.75rem; }
    .progress-label { flex: 2; font-weight: 600; }
    .progress-cell { flex: 5; }
    .progress-track { height: 0.5rem; border-radius: 0.25rem; background: #f0f2f6; }
    .progress-fill { height: 100%; border-radius: 0.25rem; background: #ff4b4b; }
    .caption { font-size: 0.875rem; color: #808495; margin-top: 0.25rem; }
"#;

const SCRIPT: &str = r#"
    document.getElementById("predict-form").addEventListener("submit", function () {
      document.getElementById("predict-button").disabled = true;
      document.getElementById("spinner").classList.add("active");
    });
"#;

/// Full page: form plus the outcome of the latest submission, if any.
pub fn render_page(inputs: &FormInputs, outcome: Option<&SubmitOutcome>) -> String {
    let outcome_block = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>">
  <style>{style}</style>
</head>
<body>
<main>
  <h1>🛡️ Insurance Premium Category Predictor</h1>
  <p class="intro">Enter your details below to predict your insurance premium category.</p>
{form}
  <div id="spinner" class="spinner" role="status">{spinner}</div>
  <section id="outcome">{outcome_block}</section>
</main>
<script>{script}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        style = STYLE,
        form = render_form(inputs),
        spinner = SPINNER_MESSAGE,
        outcome_block = outcome_block,
        script = SCRIPT,
    )
}

/// The input widgets, pre-filled with `inputs`.
pub fn render_form(inputs: &FormInputs) -> String {
    let smoker_options = [true, false]
        .iter()
        .map(|value| {
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = value,
                selected = selected_attr(*value == inputs.smoker),
                label = if *value { "True" } else { "False" },
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let occupation_options = Occupation::ALL
        .iter()
        .map(|occupation| {
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = occupation.as_str(),
                selected = selected_attr(*occupation == inputs.occupation),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"  <form id="predict-form" method="post" action="/">
    <label for="age">Age</label>
    <input id="age" name="age" type="number" step="1" min="{age_min}" max="{age_max}" value="{age}" required>
    <label for="weight">Weight (kg)</label>
    <input id="weight" name="weight" type="number" step="0.01" min="{weight_min}" value="{weight}" required>
    <label for="height">Height (m)</label>
    <input id="height" name="height" type="number" step="0.01" min="{height_min}" max="{height_max}" value="{height}" required>
    <label for="income_lpa">Annual Income (LPA)</label>
    <input id="income_lpa" name="income_lpa" type="number" step="0.01" min="{income_min}" value="{income}" required>
    <label for="smoker">Are you a smoker?</label>
    <select id="smoker" name="smoker">{smoker_options}</select>
    <label for="city">City</label>
    <input id="city" name="city" type="text" value="{city}">
    <label for="occupation">Occupation</label>
    <select id="occupation" name="occupation">{occupation_options}</select>
    <button id="predict-button" type="submit">🔮 Predict Premium Category</button>
  </form>"#,
        age_min = AGE_RANGE.start(),
        age_max = AGE_RANGE.end(),
        age = inputs.age,
        weight_min = number(MIN_WEIGHT),
        weight = number(inputs.weight),
        height_min = number(*HEIGHT_RANGE.start()),
        height_max = number(*HEIGHT_RANGE.end()),
        height = number(inputs.height),
        income_min = number(MIN_INCOME_LPA),
        income = number(inputs.income_lpa),
        smoker_options = smoker_options,
        city = escape_html(&inputs.city),
        occupation_options = occupation_options,
    )
}

pub fn render_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Success(result) => render_success(result),
        SubmitOutcome::HttpError { status, body } => format!(
            r#"<div class="banner error">❌ API Error: {}</div><div class="detail">{}</div>"#,
            status,
            escape_html(body)
        ),
        SubmitOutcome::ConnectionError => {
            format!(r#"<div class="banner error">{}</div>"#, CONNECTION_ERROR_MESSAGE)
        }
        SubmitOutcome::UnexpectedError(message) => format!(
            r#"<div class="banner error">{}</div><div class="detail">{}</div>"#,
            UNEXPECTED_ERROR_MESSAGE,
            escape_html(message)
        ),
    }
}

fn render_success(result: &PredictionResult) -> String {
    let category = escape_html(&result.predicted_category);

    let rows = result
        .class_probabilities
        .iter()
        .map(|(class, probability)| {
            format!(
                r#"<div class="progress-row"><div class="progress-label">{class}</div><div class="progress-cell"><div class="progress-track"><div class="progress-fill" style="width: {width}"></div></div><div class="caption">{caption}</div></div></div>"#,
                class = escape_html(class),
                width = format_percent(probability),
                caption = format_percent(probability),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="banner success">🎯 <strong>Predicted Insurance Premium Category: {category}</strong></div>
<div class="metric"><div class="metric-label">Model Confidence (Predicted Category)</div><div class="metric-value">{confidence}</div></div>
<hr>
<h3>📊 Confidence Percentage by Category</h3>
{rows}
<div class="banner info">ℹ️ The model is most confident that the premium category is <strong>{category}</strong>.</div>"#,
        category = category,
        confidence = format_percent(result.confidence),
        rows = rows,
    )
}

/// Fraction as a percentage with one decimal place: `0.8234` -> `82.3%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

// 65.0 rather than 65
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
