//! Damped-spring animation of a single scalar.
//!
//! Each [`Animated`] value is an independent mass on a spring pulled toward a
//! target. The camera uses three of them (distance, latitude, longitude); the
//! longitude spring carries a wrap interval so it always travels the short way
//! around the globe.

use crate::error::{QuizError, QuizResult};

/// Half-open cyclic interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wrap {
    pub start: f32,
    pub end: f32,
}

impl Wrap {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.end - self.start
    }

    /// Fold `value` back into `[start, end)` by whole periods.
    pub fn fold(&self, value: f32) -> f32 {
        let period = self.period();
        let folded = if value < self.start {
            value + ((self.start - value) / period).ceil() * period
        } else if value >= self.end {
            value - ((value - self.start) / period).floor() * period
        } else {
            value
        };
        // rounding can land exactly on `end`
        if folded >= self.end {
            folded - period
        } else {
            folded
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub wrap: Option<Wrap>,
    pub displacement_tolerance: f32,
    pub velocity_tolerance: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 170.0,
            damping: 26.0,
            wrap: None,
            displacement_tolerance: 1e-3,
            velocity_tolerance: 1e-3,
        }
    }
}

impl SpringConfig {
    /// Spring whose damping sits exactly at the critical value `2·sqrt(k·m)`.
    pub fn critically_damped(mass: f32, stiffness: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            ..Self::default()
        }
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Largest Euler step (ms) for which the integration still contracts.
    ///
    /// Returns `f32::INFINITY` for a spring without stiffness.
    pub fn max_stable_delta_ms(&self) -> f32 {
        if self.stiffness <= 0.0 {
            return f32::INFINITY;
        }
        1000.0 * self.damping / self.stiffness
    }

    pub fn validate(&self) -> QuizResult<()> {
        let bad = |msg: &str| Err(QuizError::InvalidSpring(msg.to_string()));
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return bad("mass must be positive");
        }
        if !(self.stiffness >= 0.0) || !(self.damping >= 0.0) {
            return bad("stiffness and damping must be non-negative");
        }
        if !(self.displacement_tolerance > 0.0) || !(self.velocity_tolerance > 0.0) {
            return bad("tolerances must be positive");
        }
        if let Some(w) = self.wrap {
            if !(w.start < w.end) {
                return bad("wrap start must be below wrap end");
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animated {
    config: SpringConfig,
    value: f32,
    target: f32,
    velocity: f32,
    active: bool,
}

impl Animated {
    /// Panics on an invalid config; that is a programming error, not input.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        Self {
            config,
            value: initial,
            target: initial,
            velocity: 0.0,
            active: false,
        }
    }

    /// Aim at a new target, keeping the current value and velocity.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.active = true;
    }

    pub fn step(&mut self, delta_ms: f32) {
        if !self.active {
            return;
        }
        let seconds = delta_ms / 1000.0;
        let c = &self.config;
        let displacement = self.displacement();
        let acceleration = (-c.stiffness * displacement - c.damping * self.velocity) / c.mass;

        if displacement.abs() < c.displacement_tolerance
            && self.velocity.abs() < c.velocity_tolerance
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.active = false;
            return;
        }

        let next = self.value + seconds * self.velocity;
        self.value = match c.wrap {
            Some(w) => w.fold(next),
            None => next,
        };
        self.velocity += seconds * acceleration;
    }

    /// Signed distance from the target, taking the short way round a wrap.
    pub fn displacement(&self) -> f32 {
        let direct = self.value - self.target;
        let Some(w) = self.config.wrap else {
            return direct;
        };
        let wrap_left = self.value - (w.start - (w.end - self.target));
        let wrap_right = self.value - (w.end + (self.target - w.start));
        [wrap_left, wrap_right]
            .into_iter()
            .fold(direct, |best, d| if d.abs() < best.abs() { d } else { best })
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_value_is_at_rest_on_target() {
        let a = Animated::new(SpringConfig::default(), 4.0);
        assert_eq!(a.get(), 4.0);
        assert_eq!(a.target(), 4.0);
        assert_eq!(a.velocity(), 0.0);
        assert!(!a.is_active());
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_panics() {
        let cfg = SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        };
        let _ = Animated::new(cfg, 0.0);
    }

    #[test]
    fn inverted_wrap_is_rejected() {
        let cfg = SpringConfig::default().with_wrap(Wrap::new(10.0, -10.0));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn critical_damping_matches_formula() {
        let cfg = SpringConfig::critically_damped(2.0, 8.0);
        assert!((cfg.damping - 8.0).abs() < 1e-6);
    }
}
