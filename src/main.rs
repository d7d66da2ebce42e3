//! Entry point for the Galla Zubko portfolio app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod catalog;
mod components;
mod i18n;
mod prefs;
mod reveal;
mod state;

const SITE_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("atelier=info")
        .init();

    tracing::info!("Starting Galla Zubko portfolio");

    // Optional window geometry overrides from env.
    let win_w = std::env::var("ATELIER_WIN_W")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(1200.0);
    let win_h = std::env::var("ATELIER_WIN_H")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(800.0);

    let window = WindowBuilder::new()
        .with_title("Galla Zubko")
        .with_inner_size(LogicalSize::new(win_w, win_h));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!(r#"<style>{}</style>"#, SITE_CSS)),
        )
        .launch(components::app::App);
}
