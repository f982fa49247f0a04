use dioxus::prelude::*;

use crate::domain::{parse_number_text, ThemeMode};
use crate::ui::theme;

/// Labelled numeric input. Reports every keystroke as a number; when the
/// owner refuses a value the field snaps back to what the owner holds.
#[component]
pub fn NumberField(
    label: String,
    value: f64,
    theme: ThemeMode,
    on_change: EventHandler<f64>,
    #[props(default = "any".to_string())] step: String,
) -> Element {
    let mut draft = use_signal(|| None::<String>);
    let shown = display_text(draft().as_deref(), value);

    rsx! {
        label { class: "block",
            span { class: "{theme::label_class(theme)}", "{label}" }
            input {
                class: "mt-1 {theme::input_class(theme)}",
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                step: "{step}",
                value: "{shown}",
                oninput: move |evt| {
                    let text = evt.value();
                    let parsed = parse_number_text(&text);
                    draft.set(Some(text));
                    on_change.call(parsed);
                },
            }
        }
    }
}

/// Keeps the user's in-progress text (`"12."`, `""`) while it still means
/// the stored value, otherwise shows the stored value.
pub fn display_text(draft: Option<&str>, value: f64) -> String {
    match draft {
        Some(text) if parse_number_text(text) == value => text.to_string(),
        _ => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_stored_value_without_draft() {
        assert_eq!(display_text(None, 64.42), "64.42");
        assert_eq!(display_text(None, 100.0), "100");
    }

    #[test]
    fn keeps_partial_input_that_matches() {
        assert_eq!(display_text(Some("12."), 12.0), "12.");
        assert_eq!(display_text(Some(""), 0.0), "");
    }

    #[test]
    fn rejected_draft_snaps_back() {
        assert_eq!(display_text(Some("60"), 27.0), "27");
    }
}
