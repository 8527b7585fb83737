// SPDX-License-Identifier: MPL-2.0
//! `iced_tilt` is a drag-to-tilt 3D card built with the Iced GUI framework.
//!
//! The card rotates in perspective as it is dragged, its content layer
//! shifts with parallax, and a sheen overlay slides across it. On release a
//! damped spring brings it back to rest.
//!
//! The host-independent core lives in [`motion`], [`domain`] and [`card`];
//! [`ui`] renders a card on an iced canvas and [`app`] is the showcase window.

#![doc(html_root_url = "https://docs.rs/iced_tilt/0.1.0")]

pub mod app;
pub mod card;
pub mod domain;
pub mod error;
pub mod motion;
pub mod ui;
