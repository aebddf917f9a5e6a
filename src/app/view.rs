use super::messages::Message;
use super::state::{App, CARD_SPACING_PX, READER_MAX_WIDTH_PX, reader_font};
use crate::theme::Theme;
use folio_core::catalog::kind_counts;
use folio_core::{
    FontFamily, FontSize, LineHeight, LiteraryWork, OverlayView, ReaderBody, ReadingSettings,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::LineHeight as TextLineHeight;
use iced::widget::{
    Column, button, center, column, container, horizontal_space, mouse_area, opaque, pick_list,
    row, scrollable, stack, text,
};
use iced::{Border, Element, Length, Pixels};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let header = row![
            text("Literary Works").size(28),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let cards = self
            .catalog
            .iter()
            .fold(Column::new().spacing(CARD_SPACING_PX), |list, work| {
                list.push(work_card(work, self.is_last_opened(work)))
            })
            .push(stats_panel());

        let base = container(
            column![header, scrollable(cards).height(Length::Fill)]
                .spacing(16)
                .padding(24),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        match self.overlay.view() {
            OverlayView::Hidden => base.into(),
            OverlayView::Loading { work } => self.modal(base.into(), loading_panel(work)),
            OverlayView::Open {
                work,
                body,
                settings,
                live_settings,
            } => self.modal(
                base.into(),
                reader_panel(work, body, settings, live_settings),
            ),
        }
    }

    fn modal<'a>(
        &self,
        base: Element<'a, Message>,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let backdrop = Theme::from(self.config.theme).backdrop();
        stack![
            base,
            opaque(
                mouse_area(center(opaque(content)).style(move |_theme| {
                    container::Style {
                        background: Some(backdrop.into()),
                        ..container::Style::default()
                    }
                }))
                .on_press(Message::CloseReader)
            )
        ]
        .into()
    }
}

fn card_meta(work: &LiteraryWork) -> String {
    let mut meta = format!("{} · {}", work.kind, work.style);
    if let Some(words) = work.word_count {
        meta.push_str(&format!(" · {words} words"));
    }
    if let Some(reading_time) = work.reading_time_label() {
        meta.push_str(" · ");
        meta.push_str(&reading_time);
    }
    meta
}

/// Kind, style, word count and approximate reading time for the reader header.
fn reader_meta(work: &LiteraryWork) -> Vec<String> {
    let mut meta = vec![work.kind.to_string(), work.style.clone()];
    if let Some(words) = work.word_count {
        meta.push(format!("{words} words"));
    }
    if let Some(minutes) = work.reading_minutes() {
        meta.push(format!("~{minutes} min read"));
    }
    meta
}

fn work_card(work: &LiteraryWork, last_opened: bool) -> Element<'_, Message> {
    let meta = card_meta(work);

    let mut title = row![text(&work.title).size(20), horizontal_space()].align_y(Vertical::Center);
    if last_opened {
        title = title.push(text("Last opened").size(12));
    }

    container(
        column![
            title,
            text(meta).size(13),
            text(&work.description),
            text(&work.excerpt).font(reader_font(FontFamily::Serif)),
            button("Read").on_press(Message::OpenWork(work.id.clone())),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |theme: &iced::Theme| {
        let mut style = container::rounded_box(theme);
        if last_opened {
            style.border = Border {
                color: theme.palette().primary,
                width: 2.0,
                ..style.border
            };
        }
        style
    })
    .into()
}

fn stats_panel<'a>() -> Element<'a, Message> {
    let counts = kind_counts()
        .into_iter()
        .fold(row![].spacing(24), |stats, (kind, count)| {
            stats.push(
                column![text(count.to_string()).size(28), text(kind.plural_label()).size(13)]
                    .spacing(4)
                    .align_x(Horizontal::Center)
                    .width(Length::Fill),
            )
        });

    container(
        column![text("Literary Portfolio Statistics").size(20), counts]
            .spacing(12)
            .align_x(Horizontal::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn loading_panel(work: &LiteraryWork) -> Element<'_, Message> {
    container(
        column![
            text(&work.title).size(22),
            text("Loading reader…"),
        ]
        .spacing(12),
    )
    .padding(32)
    .style(container::rounded_box)
    .into()
}

fn reader_panel<'a>(
    work: &'a LiteraryWork,
    body: &'a ReaderBody,
    settings: ReadingSettings,
    live_settings: ReadingSettings,
) -> Element<'a, Message> {
    let meta = reader_meta(work)
        .into_iter()
        .fold(row![].spacing(12), |meta, label| meta.push(text(label).size(13)));

    let header = row![
        column![text(&work.title).size(24), meta].spacing(4),
        horizontal_space(),
        button("Close").on_press(Message::CloseReader),
    ]
    .align_y(Vertical::Center);

    let controls = row![
        pick_list(
            FontSize::ALL,
            Some(live_settings.font_size),
            Message::FontSizeChanged
        ),
        pick_list(
            LineHeight::ALL,
            Some(live_settings.line_height),
            Message::LineHeightChanged
        ),
        pick_list(
            FontFamily::ALL,
            Some(live_settings.font_family),
            Message::FontFamilyChanged
        ),
        button("Reset").on_press(Message::ResetReadingSettings),
    ]
    .spacing(8)
    .align_y(Vertical::Center);

    let font = reader_font(settings.font_family);
    let size = settings.font_size.points();
    let line_height = TextLineHeight::Absolute(Pixels(settings.line_height_points()));

    let content: Element<'a, Message> = match body {
        ReaderBody::Placeholder => column![
            text("The full text of this work is not available yet.")
                .size(size)
                .font(font),
            text(&work.excerpt)
                .size(size)
                .line_height(line_height)
                .font(font),
        ]
        .spacing(size)
        .into(),
        ReaderBody::Paragraphs(blocks) => blocks
            .iter()
            .fold(Column::new().spacing(size), |column, block| {
                column.push(
                    text(block.as_str())
                        .size(size)
                        .line_height(line_height)
                        .font(font),
                )
            })
            .into(),
    };

    container(
        column![
            header,
            controls,
            scrollable(container(content).padding([0, 12])).height(Length::Fill),
        ]
        .spacing(16),
    )
    .padding(24)
    .max_width(READER_MAX_WIDTH_PX)
    .height(Length::FillPortion(9))
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::catalog::find_work;

    #[test]
    fn reader_header_lists_style_words_and_minutes() {
        let work = find_work("lantern-season").expect("catalog entry");
        assert_eq!(
            reader_meta(work),
            vec!["Poetry", "Free verse", "38 words", "~1 min read"]
        );
    }

    #[test]
    fn reader_header_skips_missing_word_count() {
        let work = find_work("the-cartographers-daughter").expect("catalog entry");
        assert_eq!(
            reader_meta(work),
            vec!["Short Story", "Literary fiction", "~1 min read"]
        );
    }

    #[test]
    fn card_shows_word_count() {
        let work = find_work("salt-and-iron").expect("catalog entry");
        assert_eq!(
            card_meta(work),
            "Novel · Historical fantasy · 86000 words · 430 min read"
        );
    }
}
