use super::input::ControlInput;
use super::state::KinematicState;
use crate::config::{ConfigError, Preset, VehicleConfig};
use crate::sim::{Matrix4, Pose};
use tracing::{debug, info, trace};

/// Validated, immutable vehicle behaviour.
///
/// `step` is the whole per-tick transition and holds no state of its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vehicle {
    config: VehicleConfig,
}

impl Vehicle {
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// State a session starts in.
    pub fn initial_state(&self) -> KinematicState {
        KinematicState::at_rest(self.config.force.at_rest())
    }

    /// One tick: steering, then force, then pose.
    pub fn step(&self, state: KinematicState, input: ControlInput, dt: f32) -> KinematicState {
        debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
        let c = &self.config;

        let steering_angle = c
            .steering
            .update(state.steering_angle, input, dt, c.rate_mode);
        let velocity = c.force.update(
            state.velocity,
            state.pose.forward(),
            input,
            dt,
            c.rate_mode,
        );
        let pose = c.integrator.integrate(state.pose, velocity, steering_angle, dt);

        KinematicState {
            pose,
            velocity,
            steering_angle,
        }
    }
}

/// Result of a tick as far as the host is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The quit intent was held; the host should end the session.
    QuitRequested,
}

/// Owns the single vehicle state of a session and advances it per tick.
#[derive(Debug, Clone)]
pub struct Simulation {
    vehicle: Vehicle,
    state: KinematicState,
    tick: u64,
}

impl Simulation {
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        let vehicle = Vehicle::new(config)?;
        info!(
            force = ?config.force,
            integrator = ?config.integrator,
            rate_mode = ?config.rate_mode,
            "vehicle simulation created"
        );
        Ok(Self {
            state: vehicle.initial_state(),
            vehicle,
            tick: 0,
        })
    }

    pub fn from_preset(preset: Preset) -> Self {
        let vehicle = Vehicle {
            config: preset.config(),
        };
        info!(%preset, "vehicle simulation created from preset");
        Self {
            state: vehicle.initial_state(),
            vehicle,
            tick: 0,
        }
    }

    /// Advances the owned state by one tick of `dt` seconds.
    ///
    /// The state is stepped even when quit is requested; quitting only tells
    /// the host to stop calling `tick`.
    pub fn tick(&mut self, input: ControlInput, dt: f32) -> TickOutcome {
        self.state = self.vehicle.step(self.state, input, dt);
        self.tick += 1;

        trace!(
            tick = self.tick,
            speed = self.state.speed(),
            steering = self.state.steering_angle,
            x = self.state.pose.position.x,
            z = self.state.pose.position.z,
            "tick"
        );

        if input.quit {
            debug!(tick = self.tick, "quit requested");
            TickOutcome::QuitRequested
        } else {
            TickOutcome::Running
        }
    }

    /// Back to the starting state, same configuration.
    pub fn reset(&mut self) {
        info!(after_ticks = self.tick, "vehicle simulation reset");
        self.state = self.vehicle.initial_state();
        self.tick = 0;
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn state(&self) -> KinematicState {
        self.state
    }

    pub fn pose(&self) -> Pose {
        self.state.pose
    }

    pub fn world_matrix(&self) -> Matrix4 {
        self.state.pose.world_matrix()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }
}
