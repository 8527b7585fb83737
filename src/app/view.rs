// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::card::TiltCard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{CardContent, TiltCardCanvas};
use iced::widget::{canvas, Column, Container, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub card: &'a TiltCard,
    pub content: &'a CardContent,
    pub cache: &'a canvas::Cache,
}

/// Renders the card centered on the stage with a live tilt readout below it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let card = TiltCardCanvas::new(ctx.card, ctx.content, ctx.cache, Message::Card).into_element();

    let caption = Text::new(readout(ctx.card)).size(typography::CAPTION);

    let column = Column::new()
        .push(card)
        .push(caption)
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

    Container::new(column)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::stage)
        .into()
}

/// One-line status under the card: effective rotation and phase.
pub fn readout(card: &TiltCard) -> String {
    let rotation = card.transforms().card;
    format!(
        "pitch {:+.1}°  yaw {:+.1}°  {:?}",
        rotation.rotate_x,
        rotation.rotate_y,
        card.phase()
    )
}
