// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: Option<&'a lightbox::State>,
    pub image_count: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.lightbox {
        Some(state) => state
            .view(LightboxViewContext { i18n: ctx.i18n })
            .map(Message::Lightbox),
        None => view_host(ctx.i18n, ctx.image_count),
    }
}

/// Screen shown while the lightbox is closed.
fn view_host(i18n: &I18n, image_count: usize) -> Element<'_, Message> {
    let count = i18n.tr_with_args(
        "host-image-count",
        &[("count", FluentValue::from(image_count))],
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("host-title")).size(typography::TITLE_LG))
        .push(text(count).size(typography::BODY))
        .push(
            button(text(i18n.tr("host-reopen")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Reopen),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
