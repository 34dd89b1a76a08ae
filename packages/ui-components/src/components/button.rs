use iced::widget::button;

pub fn apply_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(label).style(iced::theme::Button::Primary)
}

pub fn clear_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(label).style(iced::theme::Button::Secondary)
}
