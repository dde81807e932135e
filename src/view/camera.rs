use glam::{Mat4, Vec3};

/// World up axis used for strafing, vertical movement and re-orthonormalizing the basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_MOVEMENT_SPEED: f32 = 1.0;
pub const MAX_MOVEMENT_SPEED: f32 = 50.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 90.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Free-flying camera pose.
///
/// `front`, `right` and `up` are always derived from `yaw`/`pitch`; they are
/// never written independently, so the basis stays orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    yaw: f32,   // degrees, rotation around world Y
    pitch: f32, // degrees, rotation above/below the horizon
    zoom: f32,
    movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Builds a camera at `position` looking along `look_direction`.
    ///
    /// Yaw and pitch are recovered from the direction so the first mouse
    /// movement continues from the authored view instead of snapping.
    pub fn new(position: Vec3, look_direction: Vec3, zoom: f32, movement_speed: f32) -> Self {
        let dir = look_direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        let pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees();
        let yaw = dir.z.atan2(dir.x).to_degrees();

        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: WORLD_UP,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            movement_speed: movement_speed.clamp(MIN_MOVEMENT_SPEED, MAX_MOVEMENT_SPEED),
            mouse_sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Non-finite values are ignored.
    pub fn set_movement_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            return;
        }
        self.movement_speed = speed.clamp(MIN_MOVEMENT_SPEED, MAX_MOVEMENT_SPEED);
    }

    /// Applies a pointer offset (already in "up is positive" convention).
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        if !(x_offset.is_finite() && y_offset.is_finite()) {
            return;
        }
        self.yaw = wrap_degrees(self.yaw + x_offset * self.mouse_sensitivity);
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Places the camera and points it by yaw/pitch, recomputing the basis.
    pub fn snap_to(&mut self, position: Vec3, yaw: f32, pitch: f32) {
        self.position = position;
        self.yaw = wrap_degrees(yaw);
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Moves along `direction` by `movement_speed * dt`.
    pub fn translate(&mut self, direction: Vec3, dt: f32) {
        self.position += direction * self.movement_speed * dt;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level_camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::NEG_Z, 45.0, 5.0)
    }

    #[test]
    fn test_camera_initialization() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z, 80.0, 10.0);
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(camera.yaw(), -90.0, epsilon = 0.001);
        assert_relative_eq!(camera.pitch(), 0.0, epsilon = 0.001);
        assert_eq!(camera.zoom(), 80.0);
        assert_eq!(camera.movement_speed(), 10.0);
    }

    #[test]
    fn test_initial_direction_is_preserved() {
        let look = Vec3::new(0.0, -0.5, -2.0);
        let camera = Camera::new(Vec3::new(0.5, 5.5, 10.0), look, 80.0, 10.0);
        let expected = look.normalize();
        assert_relative_eq!(camera.front().x, expected.x, epsilon = 0.001);
        assert_relative_eq!(camera.front().y, expected.y, epsilon = 0.001);
        assert_relative_eq!(camera.front().z, expected.z, epsilon = 0.001);
        assert!(camera.pitch() < 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let mut camera = level_camera();
        camera.process_mouse(137.0, 250.0);
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert_relative_eq!(f.length(), 1.0, epsilon = 0.0001);
        assert_relative_eq!(r.length(), 1.0, epsilon = 0.0001);
        assert_relative_eq!(u.length(), 1.0, epsilon = 0.0001);
        assert_relative_eq!(f.dot(r), 0.0, epsilon = 0.0001);
        assert_relative_eq!(f.dot(u), 0.0, epsilon = 0.0001);
        assert_relative_eq!(r.dot(u), 0.0, epsilon = 0.0001);
    }

    #[test]
    fn test_movement_directions() {
        let camera = level_camera();
        assert_relative_eq!(camera.front().z, -1.0, epsilon = 0.001);
        assert_relative_eq!(camera.right().x, 1.0, epsilon = 0.001);
        assert_relative_eq!(camera.up().y, 1.0, epsilon = 0.001);
    }

    #[test]
    fn test_mouse_movement() {
        let mut camera = level_camera();

        camera.process_mouse(100.0, 0.0);
        assert_relative_eq!(camera.yaw(), -80.0, epsilon = 0.001);

        camera.process_mouse(0.0, 100.0);
        assert_relative_eq!(camera.pitch(), 10.0, epsilon = 0.001);

        camera.process_mouse(0.0, 10_000.0);
        assert_relative_eq!(camera.pitch(), 89.0, epsilon = 0.001);

        camera.process_mouse(0.0, -20_000.0);
        assert_relative_eq!(camera.pitch(), -89.0, epsilon = 0.001);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut camera = level_camera();
        camera.process_mouse(3600.0 + 1800.0, 0.0);
        assert!(camera.yaw() >= -180.0 && camera.yaw() < 180.0);
        assert_relative_eq!(camera.yaw(), 90.0, epsilon = 0.01);
    }

    #[test]
    fn test_speed_and_zoom_are_bounded() {
        let mut camera = level_camera();
        camera.set_movement_speed(500.0);
        assert_eq!(camera.movement_speed(), MAX_MOVEMENT_SPEED);
        camera.set_movement_speed(-3.0);
        assert_eq!(camera.movement_speed(), MIN_MOVEMENT_SPEED);
        camera.set_zoom(170.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_translate_scales_with_speed() {
        let mut camera = level_camera();
        camera.translate(camera.front(), 0.5);
        assert_relative_eq!(camera.position.z, -2.5, epsilon = 0.001);
    }
}
