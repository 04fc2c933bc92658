// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::Point;

use waymark_view3d::Viewport;

/// Fraction of the scene diagonal traveled per tick at the default step.
const MOTION_STEP_SIZE: f64 = 1.0 / 1000.0;

/// Linear speed multiplier while the acceleration modifier is held.
const MOTION_ACCELERATION_FACTOR: f64 = 10.0;

/// Degrees turned per discrete steering step.
const ANGLE_STEP_SIZE: f64 = 1.0;

/// Angular speed multiplier while the acceleration modifier is held.
const ANGLE_ACCELERATION_FACTOR: f64 = 3.0;

/// Dot-product threshold above which [`FlightController::restore_up_vector`]
/// pulls the camera upright.
const RESTORE_UP_THRESHOLD: f64 = 0.3;

/// Fraction of the remaining tilt removed per restore step.
const RESTORE_UP_FRACTION: f64 = 0.25;

/// The flight state machine.
///
/// The mode is [`FlightMode::Idle`] unless exactly one flight was started by
/// a button press and not yet ended by the matching release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightMode {
    /// No flight in progress; ticks are ignored.
    #[default]
    Idle,
    /// Primary-button flight toward the scene.
    FlyingForward,
    /// Secondary-button flight away from the scene.
    FlyingReverse,
}

/// Modifier keys sampled alongside each event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Multiplies linear and angular speeds while held.
    pub accelerate: bool,
    /// Switches the per-tick motion from translation to roll while held.
    pub roll: bool,
}

/// Discrete navigation keys, independent of the flight state machine.
///
/// Each key moves or turns the camera by one step when delivered to
/// [`FlightController::on_key`]. The letter bindings use
/// [`FlightKey::from_char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightKey {
    /// Yaw left one angle step.
    ArrowLeft,
    /// Yaw right one angle step.
    ArrowRight,
    /// Pitch up one angle step.
    ArrowUp,
    /// Pitch down one angle step.
    ArrowDown,
    /// Roll counterclockwise one angle step.
    PageUp,
    /// Roll clockwise one angle step.
    PageDown,
    /// Move along the view direction by one linear step.
    Forward,
    /// Move against the view direction by one linear step.
    Backward,
    /// Slide along the camera's local left axis.
    SlideLeft,
    /// Slide along the camera's local right axis.
    SlideRight,
    /// Slide along the view-up vector.
    SlideUp,
    /// Slide against the view-up vector.
    SlideDown,
}

impl FlightKey {
    /// Maps the letter bindings to their keys.
    ///
    /// Two letters per motion, home-row and left-hand variants. Returns
    /// `None` for characters without a binding.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' | 'i' => Some(Self::Forward),
            'z' | 'k' => Some(Self::Backward),
            'j' => Some(Self::SlideLeft),
            'l' => Some(Self::SlideRight),
            'u' => Some(Self::SlideUp),
            'o' => Some(Self::SlideDown),
            _ => None,
        }
    }
}

/// Flight-style camera navigation controller.
///
/// Owns the flight state machine, the persistent step sizes, and the yaw and
/// pitch deltas accumulated from mouse movement between ticks. The camera it
/// drives lives inside the [`Viewport`] passed to each entry point; the
/// controller itself holds no scene references.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightController {
    mode: FlightMode,
    step_size: f64,
    angle_step_size: f64,
    motion_disabled: bool,
    default_up: DVec3,
    pending_yaw: f64,
    pending_pitch: f64,
    reference_diagonal: f64,
    last_cursor: Option<Point>,
}

impl FlightController {
    /// Creates an idle controller with default step sizes and `+Z` up.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: FlightMode::Idle,
            step_size: MOTION_STEP_SIZE,
            angle_step_size: ANGLE_STEP_SIZE,
            motion_disabled: false,
            default_up: DVec3::Z,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            reference_diagonal: 1.0,
            last_cursor: None,
        }
    }

    /// Current flight mode.
    #[must_use]
    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    /// Linear step size as a fraction of the scene diagonal per tick.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Sets the linear step size.
    pub fn set_step_size(&mut self, step: f64) {
        self.step_size = step;
    }

    /// Angular step size in degrees.
    #[must_use]
    pub fn angle_step_size(&self) -> f64 {
        self.angle_step_size
    }

    /// Sets the angular step size in degrees.
    pub fn set_angle_step_size(&mut self, step: f64) {
        self.angle_step_size = step;
    }

    /// Whether linear motion is disabled.
    ///
    /// Steering and roll still work while motion is disabled; the linear
    /// speed is forced to zero.
    #[must_use]
    pub fn motion_disabled(&self) -> bool {
        self.motion_disabled
    }

    /// Enables or disables linear motion.
    pub fn set_motion_disabled(&mut self, disabled: bool) {
        self.motion_disabled = disabled;
    }

    /// The world up direction [`FlightController::restore_up_vector`] pulls
    /// toward.
    #[must_use]
    pub fn default_up(&self) -> DVec3 {
        self.default_up
    }

    /// Sets the world up direction.
    pub fn set_default_up(&mut self, up: DVec3) {
        self.default_up = up;
    }

    /// Scene diagonal sampled at the start of the current flight.
    #[must_use]
    pub fn reference_diagonal(&self) -> f64 {
        self.reference_diagonal
    }

    /// Primary button pressed: start a forward flight, or turn a reverse
    /// flight around.
    pub fn on_primary_button_down(&mut self, viewport: &Viewport) {
        match self.mode {
            FlightMode::Idle => self.start_flight(FlightMode::FlyingForward, viewport),
            FlightMode::FlyingReverse => self.mode = FlightMode::FlyingForward,
            FlightMode::FlyingForward => {}
        }
    }

    /// Primary button released: end a forward flight.
    pub fn on_primary_button_up(&mut self) {
        if self.mode == FlightMode::FlyingForward {
            self.end_flight();
        }
    }

    /// Secondary button pressed: start a reverse flight, or turn a forward
    /// flight around.
    pub fn on_secondary_button_down(&mut self, viewport: &Viewport) {
        match self.mode {
            FlightMode::Idle => self.start_flight(FlightMode::FlyingReverse, viewport),
            FlightMode::FlyingForward => self.mode = FlightMode::FlyingReverse,
            FlightMode::FlyingReverse => {}
        }
    }

    /// Secondary button released: end a reverse flight.
    pub fn on_secondary_button_up(&mut self) {
        if self.mode == FlightMode::FlyingReverse {
            self.end_flight();
        }
    }

    fn start_flight(&mut self, mode: FlightMode, viewport: &Viewport) {
        self.reference_diagonal = viewport.visible_diagonal_length();
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.last_cursor = None;
        self.mode = mode;
    }

    fn end_flight(&mut self) {
        self.mode = FlightMode::Idle;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.last_cursor = None;
    }

    /// Accumulates steering from cursor movement while flying.
    ///
    /// Horizontal movement maps to yaw with its sign flipped so dragging
    /// right turns the camera right; vertical movement maps to pitch
    /// unflipped. Deltas are scaled by the camera's view angle over the
    /// viewport width, so a given cursor travel steers by the same fraction
    /// of the field of view at any window size, and by the angular
    /// acceleration while the modifier is held. Outside a flight this only
    /// tracks the cursor.
    pub fn on_mouse_move(&mut self, cursor: Point, modifiers: Modifiers, viewport: &Viewport) {
        let last = self.last_cursor.replace(cursor);
        if self.mode == FlightMode::Idle {
            return;
        }
        let Some(last) = last else {
            return;
        };
        let width = viewport.pixel_size().width;
        if width <= 0.0 {
            return;
        }
        let scale = 5.0 * viewport.camera().view_angle_deg() / width;
        let angle_step = self.angle_speed(modifiers, ANGLE_ACCELERATION_FACTOR) * scale;
        self.pending_yaw -= (cursor.x - last.x) * angle_step;
        self.pending_pitch += (cursor.y - last.y) * angle_step;
    }

    /// Advances the current flight by one timer tick.
    ///
    /// Without the roll modifier the tick applies the pending yaw and pitch,
    /// translates position and focal point together along the view
    /// direction, and re-orthogonalizes the up vector. With the roll
    /// modifier held it rolls instead, the sign following the flight
    /// direction. Idle ticks are ignored.
    pub fn on_tick(&mut self, modifiers: Modifiers, viewport: &mut Viewport) {
        if self.mode == FlightMode::Idle {
            return;
        }
        let speed = self.linear_speed(modifiers);
        let angle_speed = self.angle_speed(modifiers, ANGLE_ACCELERATION_FACTOR);

        let camera = viewport.camera_mut();
        if modifiers.roll {
            match self.mode {
                FlightMode::FlyingForward => camera.roll(-angle_speed),
                FlightMode::FlyingReverse => camera.roll(angle_speed),
                FlightMode::Idle => {}
            }
        } else {
            camera.yaw(self.pending_yaw);
            camera.pitch(self.pending_pitch);
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            let direction = camera.direction_of_projection();
            match self.mode {
                FlightMode::FlyingForward => camera.move_along(direction, speed),
                FlightMode::FlyingReverse => camera.move_along(direction, -speed),
                FlightMode::Idle => {}
            }
            camera.orthogonalize_view_up();
        }
        viewport.adjust_after_motion();
    }

    /// Applies one discrete key step.
    ///
    /// Key steps scale with the linear acceleration factor even for the
    /// angular keys, so accelerated keyboard turning is coarser than
    /// accelerated mouse steering.
    pub fn on_key(&mut self, key: FlightKey, modifiers: Modifiers, viewport: &mut Viewport) {
        let speed = self.linear_speed(modifiers);
        let angle_speed = self.angle_speed(modifiers, MOTION_ACCELERATION_FACTOR);

        let camera = viewport.camera_mut();
        match key {
            FlightKey::ArrowLeft => camera.yaw(angle_speed),
            FlightKey::ArrowRight => camera.yaw(-angle_speed),
            FlightKey::ArrowUp => {
                camera.pitch(angle_speed);
                camera.orthogonalize_view_up();
            }
            FlightKey::ArrowDown => {
                camera.pitch(-angle_speed);
                camera.orthogonalize_view_up();
            }
            FlightKey::PageUp => camera.roll(-angle_speed),
            FlightKey::PageDown => camera.roll(angle_speed),
            FlightKey::Forward => {
                let direction = camera.direction_of_projection();
                camera.move_along(direction, -speed);
            }
            FlightKey::Backward => {
                let direction = camera.direction_of_projection();
                camera.move_along(direction, speed);
            }
            FlightKey::SlideLeft => {
                let lateral = camera.lateral_axis();
                camera.move_along(lateral, speed);
            }
            FlightKey::SlideRight => {
                let lateral = camera.lateral_axis();
                camera.move_along(lateral, -speed);
            }
            FlightKey::SlideUp => {
                let up = camera.view_up();
                camera.move_along(up, -speed);
            }
            FlightKey::SlideDown => {
                let up = camera.view_up();
                camera.move_along(up, speed);
            }
        }
        viewport.adjust_after_motion();
    }

    /// Handles the persistent step-size characters.
    ///
    /// `'+'` doubles the linear step, `'-'` halves it; everything else is
    /// ignored. The change survives across flights.
    pub fn on_char(&mut self, c: char) {
        match c {
            '+' => self.step_size *= 2.0,
            '-' => self.step_size *= 0.5,
            _ => {}
        }
    }

    /// Pulls the camera's up vector a step toward the default up.
    ///
    /// Only acts while the camera is reasonably upright already (dot product
    /// with the default up above a threshold), so an intentionally inverted
    /// camera is left alone. Callers run this between flights to level the
    /// horizon gradually.
    pub fn restore_up_vector(&self, viewport: &mut Viewport) {
        let camera = viewport.camera_mut();
        let up = camera.view_up().normalize_or_zero();
        let target = self.default_up.normalize_or_zero();
        if up.dot(target) <= RESTORE_UP_THRESHOLD {
            return;
        }
        camera.set_view_up(up + (target - up) * RESTORE_UP_FRACTION);
        camera.orthogonalize_view_up();
    }

    fn linear_speed(&self, modifiers: Modifiers) -> f64 {
        if self.motion_disabled {
            return 0.0;
        }
        let factor = if modifiers.accelerate {
            MOTION_ACCELERATION_FACTOR
        } else {
            1.0
        };
        self.reference_diagonal * self.step_size * factor
    }

    fn angle_speed(&self, modifiers: Modifiers, acceleration: f64) -> f64 {
        let factor = if modifiers.accelerate {
            acceleration
        } else {
            1.0
        };
        self.angle_step_size * factor
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}
