//! Employee Database GUI - add, edit, view and delete employee records
//!
//! Built with GPUI. Records live in process memory only and are gone when
//! the window closes.

mod app;
mod components;
mod config;
mod error;
mod form;
mod handlers;
mod models;
mod roster;
mod store;
mod theme;

use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;

use app::App;
use config::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load_from_env().unwrap_or_else(|err| {
        log::warn!("{:#}; falling back to default configuration", err);
        AppConfig::default()
    });

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(config.window_width), px(config.window_height)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.window_title.clone())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(config.clone(), window, cx));

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        match opened {
            Ok(_) => log::info!("Employee Database started ({:?} ids)", config.id_scheme),
            Err(err) => {
                log::error!("Failed to open window: {:#}", err);
                cx.quit();
            }
        }
    });
}
