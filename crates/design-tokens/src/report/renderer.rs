//! Report renderer.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use super::filters::register_filters;
use super::output::OutputMode;
use crate::validate::ValidationError;

const REPORT_TEMPLATE: &str = r#"{% for error in errors -%}
{{ ("[" ~ error.code ~ "]") | style("code") }} {{ error.message }}
{% if error.suggestion %}  {{ "suggestion:" | style("label") }} {{ error.suggestion | style("suggestion") }}
{% endif -%}
{% endfor -%}
{% if errors -%}
{{ ((errors | length | plural("error")) ~ " found") | style("summary") }}
{%- else -%}
{{ "All design tokens are valid." | style("ok") }}
{%- endif %}"#;

/// Success message printed when no errors were found.
pub const SUCCESS_MESSAGE: &str = "All design tokens are valid.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render report: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    errors: &'a [ValidationError],
}

/// Renders validation errors for humans or machines.
///
/// # Example
///
/// ```rust
/// use design_tokens::{validate_tokens, OutputMode, ReportRenderer};
///
/// let renderer = ReportRenderer::new(OutputMode::Text).unwrap();
/// let report = renderer.render(&validate_tokens()).unwrap();
/// assert_eq!(report, "All design tokens are valid.");
/// ```
pub struct ReportRenderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl ReportRenderer {
    pub fn new(mode: OutputMode) -> Result<Self, ReportError> {
        let mut env = Environment::new();
        register_filters(&mut env, mode.should_use_color());
        env.add_template("report", REPORT_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn render(&self, errors: &[ValidationError]) -> Result<String, ReportError> {
        if self.mode.is_structured() {
            let report = JsonReport {
                ok: errors.is_empty(),
                errors,
            };
            return Ok(serde_json::to_string_pretty(&report)?);
        }

        let tmpl = self.env.get_template("report")?;
        Ok(tmpl.render(minijinja::context! { errors => errors })?)
    }
}

/// Renders a report in one call.
pub fn render_report(errors: &[ValidationError], mode: OutputMode) -> Result<String, ReportError> {
    ReportRenderer::new(mode)?.render(errors)
}
