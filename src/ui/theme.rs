//! Light/dark class helpers for consistent styling across pages.

use crate::domain::ThemeMode;

// ============================================
// PAGE / CHROME
// ============================================

pub fn page_background(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "slab-scout min-h-screen bg-slate-50 text-slate-900 font-sans",
        ThemeMode::Dark => "slab-scout dark min-h-screen bg-slate-950 text-slate-100 font-sans",
    }
}

pub fn header_class(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "border-b border-slate-200 bg-white/90 backdrop-blur px-6 py-4",
        ThemeMode::Dark => "border-b border-slate-800 bg-slate-950/90 backdrop-blur px-6 py-4",
    }
}

pub fn nav_button(theme: ThemeMode, active: bool) -> &'static str {
    match (theme, active) {
        (ThemeMode::Light, true) => "rounded-lg border border-blue-500/60 bg-blue-50 px-3 py-1.5 font-semibold text-blue-700",
        (ThemeMode::Light, false) => "rounded-lg border border-transparent px-3 py-1.5 text-slate-600 transition hover:border-slate-300 hover:text-slate-900",
        (ThemeMode::Dark, true) => "rounded-lg border border-blue-400/60 bg-blue-500/15 px-3 py-1.5 font-semibold text-blue-300",
        (ThemeMode::Dark, false) => "rounded-lg border border-transparent px-3 py-1.5 text-slate-400 transition hover:border-slate-700 hover:text-slate-200",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-lg bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-500 disabled:opacity-50",
        ThemeMode::Dark => "rounded-lg bg-blue-500 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-400 disabled:opacity-50",
    }
}

pub fn btn_secondary(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-lg border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100 disabled:opacity-50",
        ThemeMode::Dark => "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:bg-slate-800 disabled:opacity-50",
    }
}

pub fn btn_tab(theme: ThemeMode, active: bool) -> &'static str {
    match (theme, active) {
        (ThemeMode::Light, true) => "rounded-t-lg border-b-2 border-blue-600 px-4 py-2 text-sm font-semibold text-blue-700",
        (ThemeMode::Light, false) => "rounded-t-lg border-b-2 border-transparent px-4 py-2 text-sm text-slate-500 hover:text-slate-800",
        (ThemeMode::Dark, true) => "rounded-t-lg border-b-2 border-blue-400 px-4 py-2 text-sm font-semibold text-blue-300",
        (ThemeMode::Dark, false) => "rounded-t-lg border-b-2 border-transparent px-4 py-2 text-sm text-slate-500 hover:text-slate-200",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "w-full rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm text-slate-900 focus:border-blue-500 focus:outline-none",
        ThemeMode::Dark => "w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-blue-400 focus:outline-none",
    }
}

pub fn label_class(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "block text-xs font-semibold uppercase text-slate-500",
        ThemeMode::Dark => "block text-xs font-semibold uppercase text-slate-400",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-xl border border-slate-200 bg-white p-6 shadow-sm",
        ThemeMode::Dark => "rounded-xl border border-slate-800 bg-slate-900/60 p-6",
    }
}

pub fn panel_highlight(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-xl border border-emerald-300 bg-emerald-50 p-4",
        ThemeMode::Dark => "rounded-xl border border-emerald-700/60 bg-emerald-500/10 p-4",
    }
}

pub fn alert_error(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-lg border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-700",
        ThemeMode::Dark => "rounded-lg border border-red-800 bg-red-500/10 px-4 py-3 text-sm text-red-300",
    }
}

pub fn alert_info(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "rounded-lg border border-amber-300 bg-amber-50 px-4 py-3 text-sm text-amber-800",
        ThemeMode::Dark => "rounded-lg border border-amber-700/60 bg-amber-500/10 px-4 py-3 text-sm text-amber-200",
    }
}

pub fn code_block(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "max-h-80 overflow-auto whitespace-pre-wrap rounded-lg bg-slate-100 p-4 font-mono text-xs text-slate-800",
        ThemeMode::Dark => "max-h-80 overflow-auto whitespace-pre-wrap rounded-lg bg-slate-950 p-4 font-mono text-xs text-slate-200",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "text-slate-500",
        ThemeMode::Dark => "text-slate-400",
    }
}

pub fn accent_text(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "text-blue-700",
        ThemeMode::Dark => "text-blue-300",
    }
}

/// Green for gains, red for losses.
pub fn value_text(theme: ThemeMode, value: f64) -> &'static str {
    match (theme, value >= 0.0) {
        (ThemeMode::Light, true) => "text-emerald-700",
        (ThemeMode::Light, false) => "text-red-600",
        (ThemeMode::Dark, true) => "text-emerald-400",
        (ThemeMode::Dark, false) => "text-red-400",
    }
}
