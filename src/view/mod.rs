pub mod camera;
pub mod input;
#[cfg(test)]
mod tests;

pub use camera::Camera;
pub use input::{ViewAction, ViewKey};

use std::collections::BTreeSet;
use glam::{DVec2, Mat4, Vec3};

use camera::WORLD_UP;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;
pub const ORTHO_HALF_HEIGHT: f32 = 10.0;
/// Upper bound on a single frame step, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.5, 5.5, 10.0);
pub const DEFAULT_LOOK_DIRECTION: Vec3 = Vec3::new(0.0, -0.5, -2.0);
pub const DEFAULT_ZOOM: f32 = 80.0;
pub const DEFAULT_MOVEMENT_SPEED: f32 = 10.0;

pub const ORTHO_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const ORTHO_YAW: f32 = -90.0;
pub const ORTHO_PITCH: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Owns the camera pose, projection mode and input/timing bookkeeping.
pub struct ViewController {
    camera: Camera,
    mode: ProjectionMode,
    last_pointer: DVec2,
    first_pointer: bool,
    delta_time: f32,
    last_frame: Option<f64>,
    held: BTreeSet<ViewKey>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Camera::new(
            DEFAULT_POSITION,
            DEFAULT_LOOK_DIRECTION,
            DEFAULT_ZOOM,
            DEFAULT_MOVEMENT_SPEED,
        ))
    }
}

impl ViewController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            mode: ProjectionMode::Perspective,
            last_pointer: DVec2::ZERO,
            first_pointer: true,
            delta_time: 0.0,
            last_frame: None,
            held: BTreeSet::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Re-arms jump prevention; the next pointer event only seeds coordinates.
    pub fn reset_pointer(&mut self) {
        self.first_pointer = true;
    }

    /// Pointer coordinates stay in f64; only the per-event offset is narrowed.
    /// Non-finite coordinates are dropped without touching the stored position.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let pointer = DVec2::new(x, y);
        if self.first_pointer {
            self.last_pointer = pointer;
            self.first_pointer = false;
        }

        // Screen Y grows downward, pitch grows upward.
        let x_offset = (pointer.x - self.last_pointer.x) as f32;
        let y_offset = (self.last_pointer.y - pointer.y) as f32;
        self.last_pointer = pointer;

        self.camera.process_mouse(x_offset, y_offset);
    }

    pub fn handle_scroll(&mut self, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        let speed = self.camera.movement_speed() + amount;
        self.camera.set_movement_speed(speed);
    }

    pub fn handle_discrete_key(&mut self, key: ViewKey) -> ViewAction {
        let dt = self.delta_time;
        match key {
            ViewKey::Exit => return ViewAction::Exit,
            ViewKey::Perspective => {
                if self.mode != ProjectionMode::Perspective {
                    log::debug!("Switching to perspective projection");
                }
                self.mode = ProjectionMode::Perspective;
            }
            ViewKey::Orthographic => {
                if self.mode != ProjectionMode::Orthographic {
                    log::debug!("Switching to orthographic projection");
                }
                self.mode = ProjectionMode::Orthographic;
                self.camera.snap_to(ORTHO_POSITION, ORTHO_YAW, ORTHO_PITCH);
            }
            ViewKey::Forward => {
                let front = self.camera.front();
                self.camera.translate(front, dt);
            }
            ViewKey::Backward => {
                let front = self.camera.front();
                self.camera.translate(-front, dt);
            }
            ViewKey::Left => {
                let right = self.camera.right();
                self.camera.translate(-right, dt);
            }
            ViewKey::Right => {
                let right = self.camera.right();
                self.camera.translate(right, dt);
            }
            ViewKey::Up => self.camera.translate(WORLD_UP, dt),
            ViewKey::Down => self.camera.translate(-WORLD_UP, dt),
        }
        ViewAction::Continue
    }

    pub fn process_keyboard(&mut self, key: ViewKey, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Stores the frame delta. The first call, a clock that runs backwards,
    /// or a stall longer than `MAX_FRAME_DELTA` all yield a bounded step.
    pub fn advance_frame(&mut self, current_time: f64) {
        let delta = match self.last_frame {
            Some(last) => (current_time - last) as f32,
            None => 0.0,
        };
        self.delta_time = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.last_frame = Some(current_time);
    }

    /// One frame of input processing: advance time, then act on every held key.
    pub fn update(&mut self, current_time: f64) -> ViewAction {
        self.advance_frame(current_time);

        let held: Vec<ViewKey> = self.held.iter().copied().collect();
        let mut action = ViewAction::Continue;
        for key in held {
            if self.handle_discrete_key(key) == ViewAction::Exit {
                action = ViewAction::Exit;
            }
        }
        action
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.camera.zoom().to_radians(),
                aspect,
                NEAR_PLANE,
                FAR_PLANE,
            ),
            ProjectionMode::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    NEAR_PLANE,
                    FAR_PLANE,
                )
            }
        }
    }
}
