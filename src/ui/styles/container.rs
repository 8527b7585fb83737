// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Dark stage the card floats over.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_950)),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}
