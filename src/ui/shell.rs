use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, ThemeMode};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let theme = state.with(|s| s.theme);
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let links = nav_entries().into_iter().map(|(target, label)| {
        let active = current_route == target;
        rsx! {
            NavButton {
                key: "{label}",
                active,
                onclick: move |_| { nav.push(target.clone()); },
                label,
                theme,
            }
        }
    });

    let toggle_label = match theme {
        ThemeMode::Light => "🌙 Dark",
        ThemeMode::Dark => "☀️ Light",
    };

    rsx! {
        div { class: "{theme::page_background(theme)}",
            header {
                class: "{theme::header_class(theme)}",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-4",
                    button {
                        class: "text-left",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        h1 { class: "text-xl font-semibold tracking-tight {theme::accent_text(theme)}", "{APP_NAME}" }
                        p { class: "text-xs {theme::text_muted(theme)}", "grade smarter, sell smarter" }
                    }

                    nav { class: "flex flex-wrap gap-2 text-sm",
                        {links}
                        button {
                            class: "{theme::btn_secondary(theme)}",
                            title: "Switch to {theme.toggle().name()} theme",
                            onclick: move |_| state.with_mut(|s| s.theme = s.theme.toggle()),
                            "{toggle_label}"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-8 text-xs {theme::text_muted(theme)}",
                "{APP_NAME} {version_label()} · estimates only, not financial advice"
            }
        }
    }
}

fn nav_entries() -> [(Route, &'static str); 6] {
    [
        (Route::Home {}, "Home"),
        (Route::Calculator {}, "Calculator"),
        (Route::BestMethod {}, "Best Method"),
        (Route::PsaLookup {}, "PSA Lookup"),
        (Route::PsaBatch {}, "Batch Lookup"),
        (Route::Quote {}, "Get a Quote"),
    ]
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    theme: ThemeMode,
) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
