//! Gallery application lifecycle.

mod actions;

pub use actions::{ClearToasts, Quit, ToggleTheme};

use anyhow::{Context as _, Result};
use gpui::{AppContext, Application, KeyBinding, WindowOptions};

use crate::config::Settings;
use crate::notifications::NotificationStore;
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;
use crate::ui::views::{Gallery, GalleryDemos};

/// Gallery application entry point.
pub struct App;

impl App {
    /// Loads settings and runs the gallery until the window closes.
    pub fn run() -> Result<()> {
        let settings = match Settings::default_path() {
            Ok(path) => Settings::load_or_default(&path),
            Err(err) => {
                tracing::warn!("no config directory, using default settings: {err}");
                Settings::default()
            }
        };

        Application::new().run(move |cx: &mut gpui::App| {
            cx.set_global(Theme::from(settings.appearance.theme));
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            if let Err(err) = Self::open_gallery(&settings, cx) {
                tracing::error!("failed to open gallery: {err:#}");
                cx.quit();
            }
        });

        Ok(())
    }

    fn open_gallery(settings: &Settings, cx: &mut gpui::App) -> Result<()> {
        let viewport = Viewport::new();
        let store = NotificationStore::with_defaults(settings.toasts.defaults());
        let demos = GalleryDemos::new(
            &viewport,
            &store,
            settings.floating.default_placement,
            settings.floating.gap,
            cx,
        )?;
        let max_visible = settings.toasts.max_visible;

        cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| Gallery::new(viewport, store, demos, max_visible, window, cx))
        })
        .context("opening gallery window")?;

        tracing::info!("gallery window opened");
        Ok(())
    }

    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-t", ToggleTheme, None),
            KeyBinding::new("cmd-shift-k", ClearToasts, None),
        ]);
    }
}
