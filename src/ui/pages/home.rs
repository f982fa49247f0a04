use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;

struct Feature {
    title: &'static str,
    blurb: &'static str,
    route: Route,
    cta: &'static str,
}

fn features() -> [Feature; 4] {
    [
        Feature {
            title: "Grading Calculator",
            blurb: "Weigh grading fees against the odds of a PSA 10, 9 or 8 and see what each selling channel nets you.",
            route: Route::Calculator {},
            cta: "Open calculator",
        },
        Feature {
            title: "Best Selling Method",
            blurb: "Drag an item price and compare eBay, a reseller and a consigner side by side.",
            route: Route::BestMethod {},
            cta: "Compare channels",
        },
        Feature {
            title: "PSA Cert Lookup",
            blurb: "Pull card details for a certification number and get a ready-to-paste listing.",
            route: Route::PsaLookup {},
            cta: "Look up a cert",
        },
        Feature {
            title: "Batch Lookup",
            blurb: "Check up to 100 certs at once from a list, a range or a photo of your slabs.",
            route: Route::PsaBatch {},
            cta: "Run a batch",
        },
    ]
}

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let nav = use_navigator();

    let cards = features().into_iter().map(|feature| {
        let Feature { title, blurb, route, cta } = feature;
        rsx! {
            div { key: "{title}", class: "{theme::panel(theme)} flex flex-col gap-3",
                h2 { class: "text-lg font-semibold", "{title}" }
                p { class: "flex-1 text-sm {theme::text_muted(theme)}", "{blurb}" }
                button {
                    class: "{theme::btn_primary(theme)} self-start",
                    onclick: move |_| { nav.push(route.clone()); },
                    "{cta}"
                }
            }
        }
    });

    rsx! {
        div { class: "space-y-10",
            section { class: "space-y-3 text-center",
                h1 { class: "text-3xl font-bold tracking-tight", "Know what a slab is worth before you send it in" }
                p { class: "mx-auto max-w-2xl {theme::text_muted(theme)}",
                    "Price grading runs, pick the channel that pays best and look up PSA certificates without leaving your desk."
                }
            }

            section { class: "grid gap-6 md:grid-cols-2", {cards} }

            section { class: "grid gap-6 md:grid-cols-2",
                div { class: "{theme::panel(theme)} space-y-2",
                    h2 { class: "text-lg font-semibold", "Use the calculator to" }
                    ul { class: "space-y-1 text-sm {theme::text_muted(theme)}",
                        li { "• Determine maximum purchase prices for profitable grading" }
                        li { "• Evaluate risk vs. reward for different card conditions" }
                        li { "• Compare potential ROI across different purchase options" }
                        li { "• Identify the most profitable selling strategy" }
                    }
                }
                div { class: "{theme::panel(theme)} space-y-2",
                    h2 { class: "text-lg font-semibold", "Selling a whole collection?" }
                    ul { class: "space-y-1 text-sm {theme::text_muted(theme)}",
                        li { "• Get a quote within 24 hours" }
                        li { "• Free shipping on collections valued over $1000" }
                        li { "• Payment sent within 3 business days of receipt" }
                    }
                    button {
                        class: "{theme::btn_secondary(theme)}",
                        onclick: move |_| { nav.push(Route::Quote {}); },
                        "Get a quote"
                    }
                }
            }
        }
    }
}
