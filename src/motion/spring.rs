// SPDX-License-Identifier: MPL-2.0
//! Damped harmonic oscillator used for the return-to-rest animation.
//!
//! The spring is integrated with semi-implicit Euler. Frame deltas are split
//! into sub-steps no longer than [`SpringConfig::max_step`] so the result does
//! not depend much on the host's frame rate, and stiff or heavily damped
//! springs stay inside the integrator's stable region.

/// Largest integration step, in seconds.
pub const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Upper bound on sub-steps taken by one [`Spring::advance`] call.
pub const MAX_SUB_STEPS: u32 = 4096;

/// Position and velocity below which a spring counts as settled.
pub const REST_EPSILON: f32 = 0.01;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub const DEFAULT_MASS: f32 = 1.0;
    pub const DEFAULT_STIFFNESS: f32 = 120.0;
    pub const DEFAULT_DAMPING: f32 = 18.0;

    #[must_use]
    pub const fn new(mass: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Damping ratio ζ. Below 1 the spring overshoots, at 1 it is critically damped.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency ω₀ in rad/s.
    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Longest stable sub-step: at most [`MAX_STEP_SECS`], with `ω₀·h ≤ 1`
    /// and `c·h/m ≤ 1`.
    #[must_use]
    pub fn max_step(&self) -> f32 {
        let mut step = MAX_STEP_SECS;
        let omega = self.natural_frequency();
        if omega > 0.0 {
            step = step.min(omega.recip());
        }
        if self.damping > 0.0 {
            step = step.min(self.mass / self.damping);
        }
        step
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MASS,
            Self::DEFAULT_STIFFNESS,
            Self::DEFAULT_DAMPING,
        )
    }
}

/// A single animated scalar pulled toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    config: SpringConfig,
}

impl Spring {
    /// Creates a spring at rest on zero.
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            config,
        }
    }

    /// Creates a spring released from `position` with no velocity, heading to zero.
    #[must_use]
    pub fn released_from(position: f32, config: SpringConfig) -> Self {
        Self {
            position,
            ..Self::new(config)
        }
    }

    /// Sets the target value for the spring to animate towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Integrates a single step of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let displacement = self.position - self.target;
        let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
        self.velocity += force / self.config.mass * dt;
        self.position += self.velocity * dt;
    }

    /// Advances the simulation by `dt` seconds. Returns true if still animating.
    ///
    /// Once position and velocity are both within [`REST_EPSILON`] of rest the
    /// spring snaps onto its target. A spring whose state is no longer finite
    /// snaps too.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // saturating cast
            let steps = ((dt / self.config.max_step()).ceil() as u32).clamp(1, MAX_SUB_STEPS);
            #[allow(clippy::cast_precision_loss)]
            let sub_dt = dt / steps as f32;
            for _ in 0..steps {
                self.step(sub_dt);
            }
        }

        if !(self.position.is_finite() && self.velocity.is_finite()) {
            log::warn!("spring diverged with {:?}; snapping to target", self.config);
            self.snap_to_target();
            return false;
        }
        if self.is_at_rest(REST_EPSILON) {
            self.snap_to_target();
            return false;
        }
        true
    }

    fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    /// Returns true if both displacement and velocity are within `epsilon`.
    #[must_use]
    pub fn is_at_rest(&self, epsilon: f32) -> bool {
        (self.position - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}
