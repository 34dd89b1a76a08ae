//! Top-level layout: settings panel beside the article preview

use crate::app::{FolioApp, Message};
use crate::ui::article::article_view;
use iced::widget::row;
use iced::Element;

pub fn main_view(app: &FolioApp) -> Element<'_, Message> {
    let panel = app.panel.view().map(Message::Panel);

    row![panel, article_view(&app.committed)].into()
}
