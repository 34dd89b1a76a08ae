//! Main application wiring the settings panel to the article preview

use crate::ui::main_view;
use folio_core::ArticleSettings;
use folio_ui::{OutsideClose, PanelEvent, PanelMessage, ParamsPanel, PANEL_WIDTH};
use iced::{
    event, executor, Application, Command, Element, Event, Point, Rectangle, Size, Subscription,
    Theme,
};
use tracing::{debug, info};

/// Horizontal space taken by the trigger arrow next to the sidebar
const TRIGGER_GUTTER: f32 = 64.0;

pub struct FolioApp {
    pub committed: ArticleSettings,
    pub panel: ParamsPanel,
    watcher: OutsideClose,
    theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction within the settings panel
    Panel(PanelMessage),
    /// Runtime event forwarded to the outside-interaction watcher
    EventOccurred(Event, event::Status),
}

impl Application for FolioApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        info!("Initializing Folio application");

        // The watched region is the full-height strip holding the sidebar
        // and its trigger; the unbounded height makes window resizes a
        // non-event for hit testing.
        let panel_region = Rectangle::new(
            Point::ORIGIN,
            Size::new(PANEL_WIDTH + TRIGGER_GUTTER, f32::INFINITY),
        );

        (
            Self {
                committed: ArticleSettings::default(),
                panel: ParamsPanel::new(),
                watcher: OutsideClose::new(panel_region),
                theme: Theme::Light,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Folio - Article Preview".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Panel(message) => {
                if let Some(PanelEvent::SettingsApplied(settings)) = self.panel.update(message) {
                    info!(?settings, "Applying article settings");
                    self.committed = settings;
                }
                Command::none()
            }
            Message::EventOccurred(event, status) => {
                if let Some(dismiss) = self.watcher.handle_event(&event, status) {
                    debug!(?dismiss, "Closing settings panel");
                    self.panel.close();
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Listen for outside interaction only while the panel is open; the
        // subscription (and with it the watcher) detaches the moment the
        // panel closes, so nothing runs while it is shut.
        if self.panel.is_open() {
            event::listen_with(|event, status| Some(Message::EventOccurred(event, status)))
        } else {
            Subscription::none()
        }
    }
}

impl Default for FolioApp {
    fn default() -> Self {
        let (app, _) = Self::new(());
        app
    }
}
