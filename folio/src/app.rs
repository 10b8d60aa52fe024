#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::time::Instant;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{SiteConfig, load_initial_site_config};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::content::{ContentEvent, ContentWidget};
use crate::widgets::header::HeaderEvent;
use crate::widgets::shell::{ShellEvent, ShellWidget};
use crate::widgets::sidebar::SidebarEvent;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Shell(ShellEvent),
    Header(HeaderEvent),
    Sidebar(SidebarEvent),
    Content(ContentEvent),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) shell: ShellWidget,
    pub(crate) content: ContentWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: SiteConfig,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application. The sidebar flag is derived from the
    /// initial window width before the first frame is drawn.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        (Self::with_config(load_initial_site_config()), Task::none())
    }

    /// Build the app around an already loaded site config.
    pub(crate) fn with_config(config: SiteConfig) -> Self {
        let shell = ShellWidget::new(
            &config.layout,
            DEFAULT_WINDOW_WIDTH,
            Instant::now(),
        );

        App {
            config,
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            widgets: Widgets {
                shell,
                content: ContentWidget::new(),
            },
        }
    }

    /// Window size requested at startup.
    pub(crate) fn initial_window_size() -> Size {
        Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }

    pub(crate) fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
