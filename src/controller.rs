//! Keyboard control of the tank.
//!
//! Key press and key repeat events are mapped to one of eight [`TankAction`]s,
//! each of which nudges a scalar of the [`TankState`] by a fixed step.
//! Releases are ignored.

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::settings::Settings;

pub const PITCH_MIN: f32 = -90.0;
pub const PITCH_MAX: f32 = 0.0;
pub const YAW_WRAP: f32 = 180.0;

/// Pose of the turret and position of the chassis. Angles in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TankState {
    pub turret_yaw: f32,
    pub turret_pitch: f32,
    pub chassis_x: f32,
    pub chassis_z: f32,
}

impl TankState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negates the yaw when it sits exactly on +180 or -180.
    ///
    /// Runs once per frame. The equality check is exact, so a yaw that steps
    /// past the boundary between two frames is left alone, and a yaw resting
    /// on the boundary flips sign every frame.
    pub fn wrap_turret_yaw(&mut self) {
        if self.turret_yaw == YAW_WRAP || self.turret_yaw == -YAW_WRAP {
            self.turret_yaw = -self.turret_yaw;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TankAction {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
}

impl TankAction {
    pub const ALL: [TankAction; 8] = [
        TankAction::YawLeft,
        TankAction::YawRight,
        TankAction::PitchUp,
        TankAction::PitchDown,
        TankAction::MoveForward,
        TankAction::MoveBack,
        TankAction::MoveLeft,
        TankAction::MoveRight,
    ];

    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyA => Some(TankAction::YawLeft),
            KeyCode::KeyD => Some(TankAction::YawRight),
            KeyCode::KeyW => Some(TankAction::PitchUp),
            KeyCode::KeyS => Some(TankAction::PitchDown),
            KeyCode::ArrowUp => Some(TankAction::MoveForward),
            KeyCode::ArrowDown => Some(TankAction::MoveBack),
            KeyCode::ArrowLeft => Some(TankAction::MoveLeft),
            KeyCode::ArrowRight => Some(TankAction::MoveRight),
            _ => None,
        }
    }
}

/// Step sizes applied per key event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TankController {
    pub yaw_step: f32,
    pub pitch_step: f32,
    pub move_step: f32,
}

impl TankController {
    pub fn new(yaw_step: f32, pitch_step: f32, move_step: f32) -> Self {
        Self {
            yaw_step,
            pitch_step,
            move_step,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.yaw_step, settings.pitch_step, settings.move_step)
    }

    pub fn apply(&self, state: &mut TankState, action: TankAction) {
        match action {
            TankAction::YawLeft => state.turret_yaw += self.yaw_step,
            TankAction::YawRight => state.turret_yaw -= self.yaw_step,
            // negative pitch raises the muzzle
            TankAction::PitchUp => {
                if state.turret_pitch > PITCH_MIN {
                    state.turret_pitch = (state.turret_pitch - self.pitch_step).max(PITCH_MIN);
                }
            }
            TankAction::PitchDown => {
                if state.turret_pitch < PITCH_MAX {
                    state.turret_pitch = (state.turret_pitch + self.pitch_step).min(PITCH_MAX);
                }
            }
            TankAction::MoveForward => state.chassis_z += self.move_step,
            TankAction::MoveBack => state.chassis_z -= self.move_step,
            TankAction::MoveLeft => state.chassis_x += self.move_step,
            TankAction::MoveRight => state.chassis_x -= self.move_step,
        }
    }

    /// Applies the action bound to a pressed or repeated key.
    ///
    /// Returns `true` when the event was consumed.
    pub fn handle_window_events(&self, state: &mut TankState, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(state, event.state, event.physical_key)
            }
            _ => false,
        }
    }

    /// Key repeats arrive as further presses, so they step again.
    pub fn handle_key(&self, state: &mut TankState, key_state: ElementState, key: PhysicalKey) -> bool {
        if key_state != ElementState::Pressed {
            return false;
        }
        let PhysicalKey::Code(key) = key else {
            return false;
        };
        match TankAction::from_key(key) {
            Some(action) => {
                self.apply(state, action);
                log::trace!("{:?} -> {:?}", action, state);
                true
            }
            None => false,
        }
    }
}

impl Default for TankController {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
