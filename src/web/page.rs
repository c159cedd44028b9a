use std::fmt::Write;

use crate::dashboard::{DashboardView, GlobePanel, SelectOption};
use crate::error::RenderError;
use crate::figure::Figure;

pub const PAGE_TITLE: &str = "Global Typhoon Tracker";
pub const PAGE_HEADING: &str = "🌍 Global Typhoon Insights";
pub const SELECT_LABEL: &str = "Select Typhoon for Detailed View";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🌪️</text></svg>";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// JSON safe to place inside a `<script>` element.
fn script_json(figure: &Figure) -> Result<String, RenderError> {
    Ok(figure.to_json()?.replace("</", "<\\/"))
}

fn shell(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="{icon}">
<link rel="stylesheet" href="/styles.css">
<script src="{plotly}"></script>
</head>
<body>
<div class="app">
{body}
</div>
<script src="/app.js"></script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        icon = FAVICON,
        plotly = PLOTLY_CDN,
    )
}

fn chart(out: &mut String, id: &str, figure: &Figure) -> Result<(), RenderError> {
    write!(
        out,
        "<div class=\"chart\" id=\"{id}\" data-figure=\"{id}-data\"></div>\n<script type=\"application/json\" id=\"{id}-data\">{}</script>\n",
        script_json(figure)?
    )?;
    Ok(())
}

fn sidebar(
    out: &mut String,
    options: &[SelectOption],
    selected: Option<&str>,
) -> Result<(), RenderError> {
    out.push_str("<aside class=\"sidebar\">\n<h2>Typhoon Explorer</h2>\n");
    out.push_str("<form method=\"get\" action=\"/\">\n");
    writeln!(
        out,
        "<label for=\"typhoon\">{}</label>",
        escape_html(SELECT_LABEL)
    )?;
    out.push_str("<select id=\"typhoon\" name=\"typhoon\" data-autosubmit>\n");
    for option in options {
        let marker = if Some(option.value.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        writeln!(
            out,
            "<option value=\"{}\"{marker}>{}</option>",
            escape_html(&option.value),
            escape_html(&option.label)
        )?;
    }
    out.push_str("</select>\n<noscript><button type=\"submit\">Show</button></noscript>\n");
    out.push_str("</form>\n</aside>\n");
    Ok(())
}

/// Renders a complete dashboard page.
pub fn render_dashboard(view: &DashboardView) -> Result<String, RenderError> {
    let mut body = String::new();
    sidebar(&mut body, &view.options, Some(view.selected.as_str()))?;

    body.push_str("<main class=\"main\">\n");
    writeln!(body, "<h1>{}</h1>", escape_html(PAGE_HEADING))?;
    body.push_str("<div class=\"columns\">\n<section class=\"column wide\">\n");
    match &view.globe {
        GlobePanel::Chart { figure } => chart(&mut body, "globe", figure)?,
        GlobePanel::Failed { message } => {
            writeln!(body, "<div class=\"error\">{}</div>", escape_html(message))?;
        }
    }
    body.push_str("</section>\n<section class=\"column narrow\">\n");

    let detail = &view.detail;
    writeln!(body, "<h2>{}</h2>", escape_html(&detail.heading))?;
    body.push_str("<dl class=\"details\">\n");
    for field in detail.fields() {
        writeln!(
            body,
            "<dt>{}:</dt><dd>{}</dd>",
            field.label,
            escape_html(&field.value)
        )?;
    }
    body.push_str("</dl>\n<h3>Description</h3>\n");
    writeln!(body, "<p>{}</p>", escape_html(&detail.description))?;
    body.push_str("</section>\n</div>\n");

    body.push_str("<section class=\"analysis\">\n<h2>Typhoon Comparative Analysis</h2>\n");
    chart(&mut body, "comparison", &view.comparison)?;
    body.push_str("</section>\n</main>\n");

    Ok(shell(&body))
}

/// Page shown when a render pass aborts: the selector stays usable above the error.
pub fn render_failure(
    err: &RenderError,
    options: &[SelectOption],
    requested: Option<&str>,
) -> Result<String, RenderError> {
    let mut body = String::new();
    sidebar(&mut body, options, requested)?;
    body.push_str("<main class=\"main\">\n");
    writeln!(body, "<h1>{}</h1>", escape_html(PAGE_HEADING))?;
    writeln!(
        body,
        "<div class=\"error\">{}</div>",
        escape_html(&format!("An error occurred: {err}"))
    )?;
    body.push_str("</main>\n");
    Ok(shell(&body))
}
