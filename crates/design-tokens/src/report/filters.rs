//! MiniJinja filter registration.

use console::Style;
use minijinja::{Environment, Value};

/// Style for a named report element. Unknown names render unstyled.
fn report_style(name: &str) -> Style {
    match name {
        "code" => Style::new().red().bold(),
        "suggestion" => Style::new().dim(),
        "label" => Style::new().yellow(),
        "summary" => Style::new().red(),
        "ok" => Style::new().green().bold(),
        _ => Style::new(),
    }
}

/// Registers the report filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            report_style(&name)
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text
        }
    });

    // Pluralizes a noun by count: {{ n | plural("error") }} -> "1 error" / "2 errors"
    env.add_filter("plural", |count: usize, noun: String| -> String {
        if count == 1 {
            format!("{} {}", count, noun)
        } else {
            format!("{} {}s", count, noun)
        }
    });
}
