//! Slide-out panel for article display settings
//!
//! Holds a draft [`ArticleSettings`] the user edits field by field. The
//! draft only reaches the host through [`PanelEvent::SettingsApplied`],
//! emitted on Apply (current draft) and on Reset (the default record).

use folio_core::{ArticleSettings, ColorOption, ContentWidth, FontFamily, FontSize};
use iced::widget::{column, container, horizontal_rule, pick_list, radio, row, text, Space};
use iced::{Alignment, Element, Length};

use super::button::{apply_button, clear_button};

/// Width of the open panel, in logical pixels
pub const PANEL_WIDTH: f32 = 320.0;

/// Messages from the settings panel
#[derive(Debug, Clone)]
pub enum PanelMessage {
    /// Arrow trigger pressed
    Toggled,
    FontFamilyChanged(FontFamily),
    FontSizeChanged(FontSize),
    FontColorChanged(ColorOption),
    BackgroundColorChanged(ColorOption),
    ContentWidthChanged(ContentWidth),
    /// Apply the current draft
    ApplyPressed,
    /// Revert the draft to defaults and apply them
    ResetPressed,
}

/// Events the panel hands back to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The user committed a settings record (via Apply or Reset)
    SettingsApplied(ArticleSettings),
}

/// Settings panel widget
#[derive(Debug, Clone)]
pub struct ParamsPanel {
    is_open: bool,
    draft: ArticleSettings,
}

impl Default for ParamsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsPanel {
    /// Create a closed panel with the default draft
    pub fn new() -> Self {
        Self {
            is_open: false,
            draft: ArticleSettings::default(),
        }
    }

    /// Create a closed panel seeded with an existing record
    pub fn with_settings(settings: ArticleSettings) -> Self {
        Self {
            is_open: false,
            draft: settings,
        }
    }

    /// Whether the sidebar is currently open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The in-progress, not-yet-applied record
    pub fn draft(&self) -> ArticleSettings {
        self.draft
    }

    /// Force the panel closed. No-op when already closed, so a dismissal
    /// arriving mid-toggle is absorbed rather than raised.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Handle a panel message, returning an event for the parent
    pub fn update(&mut self, message: PanelMessage) -> Option<PanelEvent> {
        match message {
            PanelMessage::Toggled => {
                self.is_open = !self.is_open;
                None
            }
            // Each field change replaces the record wholesale with a copy
            // differing in one field, like the form state it models.
            PanelMessage::FontFamilyChanged(font_family) => {
                self.draft = ArticleSettings {
                    font_family,
                    ..self.draft
                };
                None
            }
            PanelMessage::FontSizeChanged(font_size) => {
                self.draft = ArticleSettings {
                    font_size,
                    ..self.draft
                };
                None
            }
            PanelMessage::FontColorChanged(font_color) => {
                self.draft = ArticleSettings {
                    font_color,
                    ..self.draft
                };
                None
            }
            PanelMessage::BackgroundColorChanged(background_color) => {
                self.draft = ArticleSettings {
                    background_color,
                    ..self.draft
                };
                None
            }
            PanelMessage::ContentWidthChanged(content_width) => {
                self.draft = ArticleSettings {
                    content_width,
                    ..self.draft
                };
                None
            }
            // The draft is Copy, so the event carries a snapshot taken now,
            // untouched by any later field change.
            PanelMessage::ApplyPressed => Some(PanelEvent::SettingsApplied(self.draft)),
            PanelMessage::ResetPressed => {
                self.draft = ArticleSettings::default();
                Some(PanelEvent::SettingsApplied(self.draft))
            }
        }
    }

    /// Build the view: just the arrow trigger when closed, the full
    /// sidebar plus the trigger when open
    pub fn view(&self) -> Element<'_, PanelMessage> {
        let arrow = clear_button(if self.is_open { "<" } else { ">" })
            .on_press(PanelMessage::Toggled)
            .padding([10.0, 14.0]);

        if !self.is_open {
            return container(arrow).padding(12).into();
        }

        let title = text("Article Parameters")
            .size(24)
            .style(iced::theme::Text::Color(iced::Color::WHITE));

        let font_sizes = FontSize::ALL.iter().fold(
            row![].spacing(16).align_items(Alignment::Center),
            |sizes, &size| {
                sizes.push(radio(
                    size.to_string(),
                    size,
                    Some(self.draft.font_size),
                    PanelMessage::FontSizeChanged,
                ))
            },
        );

        let form = column![
            title,
            Space::with_height(16),
            field(
                "Font",
                pick_list(
                    FontFamily::ALL.to_vec(),
                    Some(self.draft.font_family),
                    PanelMessage::FontFamilyChanged,
                )
                .width(Length::Fill)
                .into(),
            ),
            field("Font size", font_sizes.into()),
            field(
                "Font color",
                pick_list(
                    ColorOption::ALL.to_vec(),
                    Some(self.draft.font_color),
                    PanelMessage::FontColorChanged,
                )
                .width(Length::Fill)
                .into(),
            ),
            horizontal_rule(1),
            field(
                "Background color",
                pick_list(
                    ColorOption::ALL.to_vec(),
                    Some(self.draft.background_color),
                    PanelMessage::BackgroundColorChanged,
                )
                .width(Length::Fill)
                .into(),
            ),
            field(
                "Content width",
                pick_list(
                    ContentWidth::ALL.to_vec(),
                    Some(self.draft.content_width),
                    PanelMessage::ContentWidthChanged,
                )
                .width(Length::Fill)
                .into(),
            ),
            Space::with_height(Length::Fill),
            row![
                clear_button("Reset").on_press(PanelMessage::ResetPressed),
                Space::with_width(Length::Fill),
                apply_button("Apply").on_press(PanelMessage::ApplyPressed),
            ],
        ]
        .spacing(14)
        .padding(20)
        .width(Length::Fixed(PANEL_WIDTH));

        row![
            container(form)
                .height(Length::Fill)
                .style(iced::theme::Container::Box),
            container(arrow).padding(12),
        ]
        .into()
    }
}

/// Label a form control the way the sidebar lays out every field
fn field<'a>(label: &str, control: Element<'a, PanelMessage>) -> Element<'a, PanelMessage> {
    let label = text(label.to_uppercase())
        .size(13)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.7, 0.7, 0.7,
        )));

    column![label, control].spacing(6).into()
}
