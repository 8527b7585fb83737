// SPDX-License-Identifier: MPL-2.0
//! Clamped linear interpolation between two spans.
//!
//! Every projection the card makes from its tilt state goes through
//! [`interpolate`]: clamping the raw tilt, mapping it to a parallax offset,
//! sliding the sheen. Spans may run in either direction, so an output span of
//! `[2.0, -2.0]` expresses an inverted mapping.

/// A closed span of values, possibly descending (`from > to`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub from: f32,
    pub to: f32,
}

impl Span {
    #[must_use]
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// A span centered on zero: `[-half_width, half_width]`.
    #[must_use]
    pub const fn symmetric(half_width: f32) -> Self {
        Self {
            from: -half_width,
            to: half_width,
        }
    }

    /// Same endpoints, opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.to - self.from
    }

    #[must_use]
    pub fn midpoint(self) -> f32 {
        (self.from + self.to) * 0.5
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.from.min(self.to)
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.from.max(self.to)
    }
}

/// Maps `value` from `input` onto `output`, clamping to the output endpoints.
///
/// A zero-width (or non-finite width) input span has no meaningful slope; the
/// result is then `output.from`, never NaN or infinity. Mapping a span onto
/// itself is an exact clamp.
///
/// ```
/// use iced_tilt::motion::{interpolate, Span};
///
/// let yaw_to_offset = |yaw| interpolate(yaw, Span::symmetric(10.0), Span::new(2.0, -2.0));
/// assert_eq!(yaw_to_offset(0.0), 0.0);
/// assert_eq!(yaw_to_offset(10.0), -2.0);
/// assert_eq!(yaw_to_offset(25.0), -2.0);
/// ```
#[must_use]
pub fn interpolate(value: f32, input: Span, output: Span) -> f32 {
    let width = input.width();
    if width == 0.0 || !width.is_finite() || value.is_nan() {
        return output.from;
    }
    if input == output {
        return value.clamp(input.min(), input.max());
    }

    let t = ((value - input.from) / width).clamp(0.0, 1.0);
    output.from * (1.0 - t) + output.to * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_span_is_a_clamp() {
        let span = Span::symmetric(12.0);
        assert_eq!(interpolate(5.0, span, span), 5.0);
        assert_eq!(interpolate(-12.0, span, span), -12.0);
        assert_eq!(interpolate(40.0, span, span), 12.0);
        assert_eq!(interpolate(-40.0, span, span), -12.0);
    }

    #[test]
    fn inverted_output_maps_ends_to_opposite_ends() {
        let input = Span::symmetric(10.0);
        let output = Span::new(120.0, -120.0);
        assert_eq!(interpolate(-10.0, input, output), 120.0);
        assert_eq!(interpolate(10.0, input, output), -120.0);
        assert_eq!(interpolate(0.0, input, output), 0.0);
    }

    #[test]
    fn midpoint_of_input_hits_midpoint_of_output() {
        let output = Span::new(0.2, 0.5);
        let value = interpolate(5.0, Span::new(0.0, 10.0), output);
        assert!((value - output.midpoint()).abs() < 1e-6);
    }

    #[test]
    fn zero_width_input_returns_output_start() {
        let degenerate = Span::symmetric(0.0);
        assert_eq!(interpolate(0.0, degenerate, Span::new(0.2, 0.5)), 0.2);
        assert_eq!(interpolate(7.0, degenerate, Span::new(3.0, -3.0)), 3.0);
        assert_eq!(interpolate(-7.0, degenerate, degenerate), 0.0);
    }

    #[test]
    fn nan_value_returns_output_start() {
        let value = interpolate(f32::NAN, Span::symmetric(1.0), Span::new(4.0, 8.0));
        assert_eq!(value, 4.0);
    }

    #[test]
    fn span_helpers() {
        let span = Span::new(3.0, -1.0);
        assert_eq!(span.width(), -4.0);
        assert_eq!(span.midpoint(), 1.0);
        assert_eq!(span.min(), -1.0);
        assert_eq!(span.max(), 3.0);
        assert_eq!(span.reversed(), Span::new(-1.0, 3.0));
    }
}
