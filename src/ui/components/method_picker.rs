use dioxus::prelude::*;

use crate::domain::{best_channel, SellingMethod, SellingMethods, ThemeMode};
use crate::ui::theme;
use crate::util::format_currency;

/// Radio group over the three channels, each showing its net value. The
/// most profitable channel carries a "(Best)" tag.
#[component]
pub fn MethodPicker(
    methods: SellingMethods,
    selected: SellingMethod,
    theme: ThemeMode,
    on_select: EventHandler<SellingMethod>,
) -> Element {
    let best = best_channel(&methods);
    rsx! {
        div { class: "grid gap-3 sm:grid-cols-3", role: "radiogroup",
            for method in SellingMethod::ALL {
                label {
                    key: "{method.id()}",
                    class: "{option_class(theme, method == selected)}",
                    input {
                        r#type: "radio",
                        name: "selling-method",
                        value: method.id(),
                        checked: method == selected,
                        onchange: move |_| on_select.call(method),
                    }
                    span { class: "ml-2 font-medium", "{option_label(method, best)}" }
                    span {
                        class: "ml-auto font-semibold {theme::value_text(theme, methods.get(method))}",
                        "{format_currency(methods.get(method))}"
                    }
                }
            }
        }
    }
}

pub fn option_label(method: SellingMethod, best: SellingMethod) -> String {
    if method == best {
        format!("{} (Best)", method.display())
    } else {
        method.display().to_string()
    }
}

fn option_class(theme: ThemeMode, selected: bool) -> &'static str {
    match (theme, selected) {
        (ThemeMode::Light, true) => "flex cursor-pointer items-center rounded-lg border border-blue-500 bg-blue-50 px-4 py-3",
        (ThemeMode::Light, false) => "flex cursor-pointer items-center rounded-lg border border-slate-200 px-4 py-3 hover:border-slate-400",
        (ThemeMode::Dark, true) => "flex cursor-pointer items-center rounded-lg border border-blue-400 bg-blue-500/10 px-4 py-3",
        (ThemeMode::Dark, false) => "flex cursor-pointer items-center rounded-lg border border-slate-700 px-4 py-3 hover:border-slate-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_channel_is_tagged() {
        assert_eq!(
            option_label(SellingMethod::Consigner, SellingMethod::Consigner),
            "Consigner (Best)"
        );
        assert_eq!(option_label(SellingMethod::Ebay, SellingMethod::Consigner), "eBay");
    }
}
