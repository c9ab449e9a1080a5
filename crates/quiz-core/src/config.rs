//! Runtime configuration for a quiz session.

use crate::animate::{SpringConfig, Wrap};
use crate::constants::*;
use crate::error::{QuizError, QuizResult};

/// What to do when a collaborator reports that a resource failed to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Give up: the session moves to its error phase.
    #[default]
    Fatal,
    /// Re-issue the load up to `max_attempts` times in total, then give up.
    Retry { max_attempts: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizConfig {
    pub history_len: usize,
    pub distance_spring: SpringConfig,
    pub latitude_spring: SpringConfig,
    pub longitude_spring: SpringConfig,
    pub intro_distance: f32,
    pub max_frame_delta_ms: f32,
    pub fovy_deg: f32,
    pub resource_failure: FailurePolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let tolerant = |cfg: SpringConfig| SpringConfig {
            displacement_tolerance: SPRING_TOLERANCE,
            velocity_tolerance: SPRING_TOLERANCE,
            ..cfg
        };
        let angle = tolerant(SpringConfig::critically_damped(1.0, ANGLE_STIFFNESS));
        Self {
            history_len: HISTORY_LEN,
            distance_spring: tolerant(SpringConfig::critically_damped(1.0, DISTANCE_STIFFNESS)),
            latitude_spring: angle,
            longitude_spring: angle.with_wrap(Wrap::new(LONGITUDE_WRAP.0, LONGITUDE_WRAP.1)),
            intro_distance: DISTANCE_INTRO,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            fovy_deg: FOVY_DEG,
            resource_failure: FailurePolicy::Fatal,
        }
    }
}

impl QuizConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.resource_failure = policy;
        self
    }

    pub fn validate(&self) -> QuizResult<()> {
        let springs = [
            &self.distance_spring,
            &self.latitude_spring,
            &self.longitude_spring,
        ];
        for spring in springs {
            spring.validate()?;
        }
        if !(self.max_frame_delta_ms > 0.0) {
            return Err(QuizError::InvalidConfig(
                "max_frame_delta_ms must be positive".into(),
            ));
        }
        if let Some(s) = springs
            .iter()
            .find(|s| self.max_frame_delta_ms >= s.max_stable_delta_ms())
        {
            return Err(QuizError::InvalidConfig(format!(
                "max_frame_delta_ms {} is not below the stable step {} of a camera spring",
                self.max_frame_delta_ms,
                s.max_stable_delta_ms()
            )));
        }
        if !(self.intro_distance > 1.0) {
            return Err(QuizError::InvalidConfig(
                "intro_distance must lie outside the globe".into(),
            ));
        }
        if !(self.fovy_deg > 0.0 && self.fovy_deg < 180.0) {
            return Err(QuizError::InvalidConfig(
                "fovy_deg must be within (0, 180)".into(),
            ));
        }
        if let FailurePolicy::Retry { max_attempts: 0 } = self.resource_failure {
            return Err(QuizError::InvalidConfig(
                "retry policy needs at least one attempt".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(QuizConfig::default().validate(), Ok(()));
    }

    #[test]
    fn frame_clamp_above_stable_step_is_rejected() {
        let cfg = QuizConfig {
            max_frame_delta_ms: 1_000.0,
            ..QuizConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn retry_without_attempts_is_rejected() {
        let cfg =
            QuizConfig::default().with_failure_policy(FailurePolicy::Retry { max_attempts: 0 });
        assert!(cfg.validate().is_err());
    }
}
