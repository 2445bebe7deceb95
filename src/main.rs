mod app;
mod config;
mod domain;
mod error;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use tracing::{info, warn};

use crate::app::App;
use crate::config::{default_webview_data_dir, EditorConfig};

fn main() {
    let (config, config_error) = match EditorConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (EditorConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        let message = format!("{err:#}");
        warn!(error = %message, "invalid config, using defaults");
    }
    info!(page_size = config.page_size, "starting table editor");

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Table Editor"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
