// SPDX-License-Identifier: MPL-2.0
//! Domain layer - card value objects with no framework dependencies.
//!
//! # Modules
//!
//! - [`card`]: Card types ([`CardConfig`](card::CardConfig),
//!   [`TiltState`](card::TiltState), [`DragSample`](card::DragSample),
//!   [`CardPreset`](card::CardPreset))

pub mod card;
