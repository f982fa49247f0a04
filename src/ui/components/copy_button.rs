use std::time::Duration;

use dioxus::{document, prelude::*};
use tokio::time::sleep;
use tracing::warn;

use crate::domain::ThemeMode;
use crate::ui::theme;

const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Copies `text` to the clipboard and flips its label to "Copied!" once the
/// browser confirms the write.
#[component]
pub fn CopyButton(text: String, label: String, theme: ThemeMode) -> Element {
    let mut copied = use_signal(|| false);
    let on_copy = move |_| {
        let text = text.clone();
        spawn(async move {
            if copy_text_to_clipboard(&text).await {
                copied.set(true);
                sleep(COPIED_FEEDBACK).await;
                copied.set(false);
            }
        });
    };
    let caption = if copied() { "Copied!".to_string() } else { label.clone() };

    rsx! {
        button {
            class: "{theme::btn_secondary(theme)}",
            r#type: "button",
            onclick: on_copy,
            "{caption}"
        }
    }
}

/// Runs the clipboard script and reports whether the browser accepted it.
async fn copy_text_to_clipboard(text: &str) -> bool {
    let Some(script) = clipboard_script(text) else {
        return false;
    };
    match document::eval(&script).await {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(err) => {
            warn!(%err, "clipboard script failed");
            false
        }
    }
}

/// Script body for `document::eval`; its return value is the copy outcome.
fn clipboard_script(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let payload = serde_json::to_string(text).ok()?;
    Some(format!(
        r#"const data = {payload};
try {{
    if (navigator.clipboard && navigator.clipboard.writeText) {{
        await navigator.clipboard.writeText(data);
        return true;
    }}
}} catch (_err) {{}}
try {{
    const textarea = document.createElement('textarea');
    textarea.value = data;
    textarea.style.position = 'fixed';
    textarea.style.opacity = '0';
    document.body.appendChild(textarea);
    textarea.focus();
    textarea.select();
    const ok = document.execCommand('copy');
    document.body.removeChild(textarea);
    return ok;
}} catch (_err) {{
    return false;
}}"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_copied() {
        assert_eq!(clipboard_script("  \n"), None);
    }

    #[test]
    fn payload_is_escaped_as_a_js_string() {
        let script = clipboard_script("PSA 10 \"Charizard\"\nHolo").unwrap();
        assert!(script.starts_with(r#"const data = "PSA 10 \"Charizard\"\nHolo";"#));
        assert!(script.contains("return ok;"));
    }
}
