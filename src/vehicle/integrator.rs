use super::state::Velocity;
use crate::sim::{physics, Pose};
use serde::{Deserialize, Serialize};

/// Maps wheel angle and speed to a yaw increment for one tick.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Yaw grows with `speed^speed_exponent` but never exceeds `max_rate * dt`.
    Clamped {
        coefficient: f32,
        /// Radians per second.
        max_rate: f32,
        speed_exponent: f32,
    },
    /// Yaw proportional to wheel angle and speed, uncapped.
    Linear { coefficient: f32 },
}

impl RotationPolicy {
    pub fn yaw_increment(&self, steering_angle: f32, speed: f32, dt: f32) -> f32 {
        match *self {
            RotationPolicy::Clamped {
                coefficient,
                max_rate,
                speed_exponent,
            } => {
                // The sign comes from the full unclamped product; dt >= 0 never flips it.
                let desired = steering_angle * speed.powf(speed_exponent) * coefficient * dt;
                physics::sign(desired) * (max_rate * dt).min(desired.abs()).abs()
            }
            RotationPolicy::Linear { coefficient } => steering_angle * speed * coefficient * dt,
        }
    }
}

/// Advances the pose: yaw first, then translate along the new heading.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseIntegrator {
    #[serde(flatten)]
    pub policy: RotationPolicy,
    /// Distance ahead of the body origin the car yaws around. Zero turns in place.
    #[serde(default)]
    pub pivot_offset: f32,
}

impl PoseIntegrator {
    pub fn new(policy: RotationPolicy, pivot_offset: f32) -> Self {
        Self {
            policy,
            pivot_offset,
        }
    }

    /// Next pose from the already-updated velocity and wheel angle.
    ///
    /// Order matters: rotation is composed onto the current pose first, then
    /// the translation, so a forward speed moves along the rotated heading.
    pub fn integrate(&self, pose: Pose, velocity: Velocity, steering_angle: f32, dt: f32) -> Pose {
        let yaw = self
            .policy
            .yaw_increment(steering_angle, velocity.speed(), dt);
        let turned = pose.yawed(yaw, self.pivot_offset);
        turned.translated(velocity.world(turned.forward()) * dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Float3;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;
    const DT: f32 = 1.0 / 60.0;

    fn clamped() -> RotationPolicy {
        RotationPolicy::Clamped {
            coefficient: 0.015,
            max_rate: 100f32.to_radians(),
            speed_exponent: 1.5,
        }
    }

    #[test]
    fn clamped_grows_super_linearly_below_cap() {
        let policy = clamped();
        let slow = policy.yaw_increment(0.1, 1.0, DT);
        let fast = policy.yaw_increment(0.1, 4.0, DT);

        assert_relative_eq!(slow, 0.1 * 0.015 * DT, epsilon = 1e-9);
        assert_relative_eq!(fast / slow, 8.0, epsilon = 1e-3);
    }

    #[test]
    fn clamped_caps_at_max_rate() {
        let policy = clamped();
        let yaw = policy.yaw_increment(0.5, 900.0, DT);
        assert_relative_eq!(yaw, 100f32.to_radians() * DT, epsilon = 1e-7);

        let yaw = policy.yaw_increment(-0.5, 900.0, DT);
        assert_relative_eq!(yaw, -100f32.to_radians() * DT, epsilon = 1e-7);
    }

    #[test]
    fn clamped_is_zero_when_still_or_centered() {
        let policy = clamped();
        assert_eq!(policy.yaw_increment(0.5, 0.0, DT), 0.0);
        assert_eq!(policy.yaw_increment(0.0, 50.0, DT), 0.0);
        assert_eq!(policy.yaw_increment(0.5, 50.0, 0.0), 0.0);
    }

    #[test]
    fn linear_is_uncapped() {
        let policy = RotationPolicy::Linear { coefficient: 0.015 };
        let yaw = policy.yaw_increment(0.5, 900.0, DT);
        assert_relative_eq!(yaw, 0.5 * 900.0 * 0.015 * DT, epsilon = TOLERANCE);
        assert!(yaw > 100f32.to_radians() * DT);
    }

    #[test]
    fn translation_follows_rotated_heading() {
        let integrator = PoseIntegrator::new(RotationPolicy::Linear { coefficient: 0.5 }, 0.0);
        let pose = integrator.integrate(Pose::IDENTITY, Velocity::Forward(10.0), 0.3, 1.0);

        // yaw = 0.3 * 10 * 0.5 = 1.5 rad; displacement uses the new heading.
        let expected = Float3::new(-(1.5f32).sin(), 0.0, -(1.5f32).cos()) * 10.0;
        assert_relative_eq!(pose.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(pose.position.z, expected.z, epsilon = 1e-4);

        // Translate-then-rotate would have moved straight down -Z.
        assert!(pose.position.x < -9.0);
    }

    #[test]
    fn linear_velocity_translates_in_world_space() {
        let integrator = PoseIntegrator::new(clamped(), 0.0);
        let v = Float3::new(2.0, 0.0, -6.0);
        let pose = integrator.integrate(Pose::IDENTITY, Velocity::Linear(v), 0.2, 0.5);

        assert_relative_eq!(pose.position.x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(pose.position.z, -3.0, epsilon = TOLERANCE);
        assert!(pose.frame.yaw() > 0.0);
    }

    #[test]
    fn pivot_offset_changes_turning_path() {
        let policy = RotationPolicy::Linear { coefficient: 0.015 };
        let origin = PoseIntegrator::new(policy, 0.0);
        let ahead = PoseIntegrator::new(policy, 2.0);

        let a = origin.integrate(Pose::IDENTITY, Velocity::Forward(20.0), 0.5, DT);
        let b = ahead.integrate(Pose::IDENTITY, Velocity::Forward(20.0), 0.5, DT);

        assert_eq!(a.frame, b.frame);
        assert!((a.position - b.position).magnitude() > 1e-4);
    }

    #[test]
    fn serializes_flattened_policy() {
        let json = r#"{"policy": "linear", "coefficient": 0.25, "pivot_offset": 2.0}"#;
        let integrator: PoseIntegrator = serde_json::from_str(json).unwrap();
        assert_eq!(
            integrator,
            PoseIntegrator::new(RotationPolicy::Linear { coefficient: 0.25 }, 2.0)
        );
    }
}
