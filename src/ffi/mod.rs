//! C ABI for engine hosts.
//!
//! Functions:
//! - `drive_create` / `drive_create_from_json` - build a simulation handle
//! - `drive_tick` - advance one frame, optionally writing the new pose
//! - `drive_get_state` - read the full kinematic state
//! - `drive_reset` - back to rest with the same configuration
//! - `drive_free` - release a handle
//!
//! Input bits: accelerate=1, decelerate=2, steer_left=4, steer_right=8, quit=16.
//!
//! # Return Codes
//! - `0`: Success / running
//! - `1`: Quit requested (the state was still advanced)
//! - `-1`: Null pointer
//! - `-2`: Invalid argument (negative or non-finite dt)

use crate::config::{Preset, VehicleConfig};
use crate::sim::Float3;
use crate::vehicle::{ControlInput, Simulation, TickOutcome};
use tracing::warn;

/// Pose written after every tick.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct DrivePose {
    /// Row-major world matrix, row-vector convention.
    pub world: [f32; 16],
    pub position: Float3,
    pub forward: Float3,
}

/// Full kinematic state.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct DriveState {
    pub position: Float3,
    pub forward: Float3,
    pub up: Float3,
    /// World-space velocity.
    pub velocity: Float3,
    /// Signed speed along forward.
    pub speed: f32,
    pub steering_angle: f32,
    pub tick: u64,
}

/// Opaque handle to a running simulation.
pub type DriveHandle = *mut std::ffi::c_void;

fn into_handle(sim: Simulation) -> DriveHandle {
    Box::into_raw(Box::new(sim)) as DriveHandle
}

/// Create a simulation from a built-in preset.
///
/// `0` drag_slip, `1` projected_slip, `2` accumulator.
///
/// # Returns
/// - Valid handle on success (non-null)
/// - Null for an unknown preset index
#[no_mangle]
pub extern "C" fn drive_create(preset: i32) -> DriveHandle {
    let Some(preset) = usize::try_from(preset)
        .ok()
        .and_then(|i| Preset::ALL.get(i).copied())
    else {
        warn!(preset, "unknown preset index");
        return std::ptr::null_mut();
    };
    into_handle(Simulation::from_preset(preset))
}

/// Create a simulation from a UTF-8 JSON vehicle config.
///
/// # Returns
/// - Valid handle on success (non-null)
/// - Null on invalid UTF-8, malformed JSON or rejected values
///
/// # Safety
/// - `data` must point to a valid buffer of at least `data_len` bytes
#[no_mangle]
pub unsafe extern "C" fn drive_create_from_json(data: *const u8, data_len: usize) -> DriveHandle {
    if data.is_null() || data_len == 0 {
        return std::ptr::null_mut();
    }

    let bytes = std::slice::from_raw_parts(data, data_len);
    let Ok(json) = std::str::from_utf8(bytes) else {
        warn!("vehicle config is not valid UTF-8");
        return std::ptr::null_mut();
    };
    match VehicleConfig::from_json(json).and_then(Simulation::new) {
        Ok(sim) => into_handle(sim),
        Err(e) => {
            warn!(error = %e, "rejected vehicle config");
            std::ptr::null_mut()
        }
    }
}

/// Advance one tick.
///
/// # Returns
/// - `0` running, `1` quit requested
/// - `-1` null handle, `-2` invalid dt
///
/// # Safety
/// - `handle` must be a valid handle from `drive_create*`
/// - `out_pose` must be null or a valid pointer to a `DrivePose`
#[no_mangle]
pub unsafe extern "C" fn drive_tick(
    handle: DriveHandle,
    input_bits: u32,
    dt: f32,
    out_pose: *mut DrivePose,
) -> i32 {
    if handle.is_null() {
        return -1;
    }
    if !dt.is_finite() || dt < 0.0 {
        return -2;
    }
    let sim = &mut *(handle as *mut Simulation);

    let outcome = sim.tick(ControlInput::from_bits(input_bits), dt);

    if !out_pose.is_null() {
        let pose = sim.pose();
        *out_pose = DrivePose {
            world: pose.world_matrix().m,
            position: pose.position,
            forward: pose.forward(),
        };
    }

    match outcome {
        TickOutcome::Running => 0,
        TickOutcome::QuitRequested => 1,
    }
}

/// Read the current state.
///
/// # Safety
/// - `handle` must be a valid handle from `drive_create*`
/// - `out_state` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn drive_get_state(handle: DriveHandle, out_state: *mut DriveState) -> i32 {
    if handle.is_null() || out_state.is_null() {
        return -1;
    }
    let sim = &*(handle as *const Simulation);
    let state = sim.state();

    *out_state = DriveState {
        position: state.pose.position,
        forward: state.pose.forward(),
        up: state.pose.up(),
        velocity: state.world_velocity(),
        speed: state.forward_speed(),
        steering_angle: state.steering_angle,
        tick: sim.ticks(),
    };
    0
}

/// Reset to rest, keeping the configuration.
///
/// # Safety
/// - `handle` must be a valid handle from `drive_create*`
#[no_mangle]
pub unsafe extern "C" fn drive_reset(handle: DriveHandle) -> i32 {
    if handle.is_null() {
        return -1;
    }
    (*(handle as *mut Simulation)).reset();
    0
}

/// Free a simulation handle.
///
/// # Safety
/// - `handle` must be a valid handle from `drive_create*`, or null
#[no_mangle]
pub unsafe extern "C" fn drive_free(handle: DriveHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut Simulation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::MaybeUninit;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn lifecycle_create_tick_free() {
        let handle = drive_create(0);
        assert!(!handle.is_null());

        let mut pose = MaybeUninit::<DrivePose>::uninit();
        unsafe {
            for _ in 0..30 {
                assert_eq!(
                    drive_tick(handle, ControlInput::ACCELERATE, DT, pose.as_mut_ptr()),
                    0
                );
            }
            let pose = pose.assume_init();
            assert!(pose.position.z < 0.0);
            assert_eq!(pose.world[12], pose.position.x);
            assert_eq!(pose.world[14], pose.position.z);

            let mut state = MaybeUninit::<DriveState>::uninit();
            assert_eq!(drive_get_state(handle, state.as_mut_ptr()), 0);
            let state = state.assume_init();
            assert_eq!(state.tick, 30);
            assert!(state.speed > 0.0);

            drive_free(handle);
        }
    }

    #[test]
    fn unknown_preset_is_null() {
        assert!(drive_create(-1).is_null());
        assert!(drive_create(3).is_null());
    }

    #[test]
    fn null_handles_are_rejected() {
        unsafe {
            assert_eq!(drive_tick(std::ptr::null_mut(), 0, DT, std::ptr::null_mut()), -1);
            assert_eq!(drive_reset(std::ptr::null_mut()), -1);
            assert_eq!(
                drive_get_state(std::ptr::null_mut(), std::ptr::null_mut()),
                -1
            );
            drive_free(std::ptr::null_mut());
        }
    }

    #[test]
    fn quit_and_invalid_dt_codes() {
        let handle = drive_create(2);
        unsafe {
            assert_eq!(drive_tick(handle, 0, -1.0, std::ptr::null_mut()), -2);
            assert_eq!(drive_tick(handle, 0, f32::NAN, std::ptr::null_mut()), -2);
            assert_eq!(
                drive_tick(handle, ControlInput::QUIT, DT, std::ptr::null_mut()),
                1
            );
            drive_free(handle);
        }
    }

    #[test]
    fn reset_returns_to_rest() {
        let handle = drive_create(1);
        unsafe {
            for _ in 0..10 {
                drive_tick(handle, ControlInput::ACCELERATE, DT, std::ptr::null_mut());
            }
            assert_eq!(drive_reset(handle), 0);

            let mut state = MaybeUninit::<DriveState>::uninit();
            drive_get_state(handle, state.as_mut_ptr());
            let state = state.assume_init();
            assert_eq!(state.tick, 0);
            assert_eq!(state.speed, 0.0);
            drive_free(handle);
        }
    }

    #[test]
    fn create_from_json() {
        let json = Preset::Accumulator.config().to_json_pretty().unwrap();
        let handle = unsafe { drive_create_from_json(json.as_ptr(), json.len()) };
        assert!(!handle.is_null());
        unsafe { drive_free(handle) };

        let bad = b"{ not json";
        let handle = unsafe { drive_create_from_json(bad.as_ptr(), bad.len()) };
        assert!(handle.is_null());
    }
}
