#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};
use tracing::{info, warn};

use crate::config::{AppConfig, LoggingConfig};

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => {
            util::logging::init(&config.logging);
            config
        }
        Err(err) => {
            util::logging::init(&LoggingConfig::default());
            warn!(%err, "invalid configuration, using defaults");
            AppConfig::default()
        }
    }
}

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let config = load_config();
    info!(
        version = %util::version::version_label(),
        api_url = %config.api_url,
        "starting"
    );

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let desktop = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(util::version::app_title())
            )
        };
        builder.with_cfg(desktop)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.with_context(config).launch(app::App);
}
