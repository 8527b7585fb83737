// SPDX-License-Identifier: MPL-2.0
pub mod tilt_card;

pub use tilt_card::{CardContent, CardEvent, TiltCardCanvas};
