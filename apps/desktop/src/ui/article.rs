//! Article preview styled by the committed settings

use crate::app::Message;
use folio_core::{Article, ArticleSettings, ColorOption};
use iced::widget::{column, container, scrollable, text, Space};
use iced::{Background, Color, Element, Font, Length, Theme};

pub fn article_view(settings: &ArticleSettings) -> Element<'static, Message> {
    let article = Article::sample();
    let font = Font::with_name(settings.font_family.font_name());
    let body_size = settings.font_size.pixels();
    let ink = palette_color(settings.font_color);

    let mut body = column![
        text(article.title)
            .font(font)
            .size(body_size * 2.0)
            .style(iced::theme::Text::Color(ink)),
        text(article.subtitle)
            .font(font)
            .size(body_size * 1.2)
            .style(iced::theme::Text::Color(ink)),
        Space::with_height(8),
    ]
    .spacing(18);

    for paragraph in article.paragraphs {
        body = body.push(
            text(*paragraph)
                .font(font)
                .size(body_size)
                .style(iced::theme::Text::Color(ink)),
        );
    }

    let page = container(body)
        .max_width(settings.content_width.pixels())
        .padding(40);

    container(scrollable(
        container(page).width(Length::Fill).center_x(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(background_style(settings.background_color))
    .into()
}

fn palette_color(option: ColorOption) -> Color {
    let [r, g, b] = option.rgb();
    Color::from_rgb8(r, g, b)
}

/// Paints the whole preview surface in the applied background color
struct PageBackground(Color);

impl container::StyleSheet for PageBackground {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.0)),
            ..Default::default()
        }
    }
}

fn background_style(option: ColorOption) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(PageBackground(palette_color(option))))
}
