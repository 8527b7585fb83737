// SPDX-License-Identifier: MPL-2.0
//! Host-independent motion primitives: interpolation, springs, transforms.

pub mod interpolate;
pub mod spring;
pub mod transform;

pub use interpolate::{interpolate, Span};
pub use spring::{Spring, SpringConfig, MAX_STEP_SECS, REST_EPSILON};
pub use transform::{project, Transform, TransformOp};
