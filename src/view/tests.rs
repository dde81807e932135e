use super::*;
use approx::assert_relative_eq;

fn controller() -> ViewController {
    ViewController::default()
}

#[test]
fn test_first_pointer_move_is_ignored() {
    let mut view = controller();
    let (yaw, pitch) = (view.camera().yaw(), view.camera().pitch());

    view.handle_pointer_move(912.0, 17.0);
    assert_eq!(view.camera().yaw(), yaw);
    assert_eq!(view.camera().pitch(), pitch);

    view.handle_pointer_move(922.0, 7.0);
    assert_relative_eq!(view.camera().yaw(), yaw + 1.0, epsilon = 0.001);
    assert_relative_eq!(view.camera().pitch(), pitch + 1.0, epsilon = 0.001);
}

#[test]
fn test_reset_pointer_rearms_jump_prevention() {
    let mut view = controller();
    view.handle_pointer_move(0.0, 0.0);
    view.handle_pointer_move(10.0, 0.0);
    let yaw = view.camera().yaw();

    view.reset_pointer();
    view.handle_pointer_move(5000.0, -4000.0);
    assert_eq!(view.camera().yaw(), yaw);
}

#[test]
fn test_pitch_stays_clamped() {
    let mut view = controller();
    let moves = [
        (0.0, 0.0),
        (10.0, -9000.0),
        (-30.0, -20_000.0),
        (55.0, 40_000.0),
        (55.0, 39_999.0),
        (-7.0, 1.0e6),
    ];
    for (x, y) in moves {
        view.handle_pointer_move(x, y);
        let pitch = view.camera().pitch();
        assert!((-89.0..=89.0).contains(&pitch), "pitch {} out of range", pitch);
    }
}

#[test]
fn test_scroll_keeps_speed_in_range() {
    let mut view = controller();
    for amount in [3.0, 100.0, -7.5, -400.0, 0.5, 12.0, 1.0e9, -1.0e9] {
        view.handle_scroll(amount);
        let speed = view.camera().movement_speed();
        assert!((1.0..=50.0).contains(&speed), "speed {} out of range", speed);
    }

    let mut view = controller();
    view.handle_scroll(5.0);
    assert_eq!(view.camera().movement_speed(), DEFAULT_MOVEMENT_SPEED + 5.0);
}

#[test]
fn test_orthographic_snaps_to_canonical_pose() {
    let mut view = controller();
    view.handle_pointer_move(0.0, 0.0);
    view.handle_pointer_move(321.0, 123.0);
    view.camera_mut().position = Vec3::new(-4.0, 17.0, 2.0);

    view.handle_discrete_key(ViewKey::Orthographic);

    let camera = view.camera();
    assert_eq!(view.mode(), ProjectionMode::Orthographic);
    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 10.0));
    assert_relative_eq!(camera.yaw(), -90.0, epsilon = 0.0001);
    assert_relative_eq!(camera.pitch(), 0.0, epsilon = 0.0001);
    assert_relative_eq!(camera.front().x, 0.0, epsilon = 0.0001);
    assert_relative_eq!(camera.front().y, 0.0, epsilon = 0.0001);
    assert_relative_eq!(camera.front().z, -1.0, epsilon = 0.0001);
    assert_relative_eq!(camera.up().y, 1.0, epsilon = 0.0001);
}

#[test]
fn test_perspective_preserves_pose() {
    let mut view = controller();
    view.handle_discrete_key(ViewKey::Orthographic);
    view.handle_pointer_move(0.0, 0.0);
    view.handle_pointer_move(40.0, -25.0);
    view.camera_mut().position = Vec3::new(1.0, 2.0, 3.0);
    let before = view.camera().clone();

    view.handle_discrete_key(ViewKey::Perspective);
    assert_eq!(view.mode(), ProjectionMode::Perspective);
    assert_eq!(*view.camera(), before);

    view.handle_discrete_key(ViewKey::Perspective);
    assert_eq!(*view.camera(), before);
}

#[test]
fn test_exit_is_signaled_not_performed() {
    let mut view = controller();
    let before = view.camera().clone();
    assert_eq!(view.handle_discrete_key(ViewKey::Exit), ViewAction::Exit);
    assert_eq!(*view.camera(), before);
}

#[test]
fn test_frame_delta_is_clamped() {
    let mut view = controller();
    view.advance_frame(12.0);
    assert_eq!(view.delta_time(), 0.0);

    view.advance_frame(12.05);
    assert_relative_eq!(view.delta_time(), 0.05, epsilon = 0.0001);

    view.advance_frame(30.0);
    assert_eq!(view.delta_time(), MAX_FRAME_DELTA);

    view.advance_frame(2.0);
    assert_eq!(view.delta_time(), 0.0);
}

#[test]
fn test_held_keys_move_by_speed_and_delta() {
    let mut view = ViewController::new(Camera::new(Vec3::ZERO, Vec3::NEG_Z, 45.0, 10.0));
    view.process_keyboard(ViewKey::Forward, true);

    assert_eq!(view.update(1.0), ViewAction::Continue);
    assert_eq!(view.camera().position, Vec3::ZERO);

    view.update(1.05);
    assert_relative_eq!(view.camera().position.z, -0.5, epsilon = 0.001);

    view.process_keyboard(ViewKey::Forward, false);
    view.process_keyboard(ViewKey::Right, true);
    view.process_keyboard(ViewKey::Up, true);
    view.update(1.10);
    assert_relative_eq!(view.camera().position.x, 0.5, epsilon = 0.001);
    assert_relative_eq!(view.camera().position.y, 0.5, epsilon = 0.001);
    assert_relative_eq!(view.camera().position.z, -0.5, epsilon = 0.001);
}

#[test]
fn test_vertical_movement_uses_world_up() {
    let mut view = ViewController::new(Camera::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0), 45.0, 10.0));
    view.advance_frame(0.0);
    view.advance_frame(0.1);
    view.handle_discrete_key(ViewKey::Down);
    assert_relative_eq!(view.camera().position.x, 0.0, epsilon = 0.0001);
    assert_relative_eq!(view.camera().position.y, -1.0, epsilon = 0.0001);
    assert_relative_eq!(view.camera().position.z, 0.0, epsilon = 0.0001);
}

#[test]
fn test_held_exit_requests_shutdown() {
    let mut view = controller();
    view.process_keyboard(ViewKey::Exit, true);
    assert_eq!(view.update(0.0), ViewAction::Exit);
}

#[test]
fn test_mode_keys_apply_before_movement() {
    let mut view = controller();
    view.process_keyboard(ViewKey::Forward, true);
    view.process_keyboard(ViewKey::Orthographic, true);

    view.update(0.0);
    view.update(0.05);
    assert_eq!(view.mode(), ProjectionMode::Orthographic);
    assert_relative_eq!(view.camera().position.x, 0.0, epsilon = 0.0001);
    assert_relative_eq!(view.camera().position.y, 0.0, epsilon = 0.0001);
    assert_relative_eq!(view.camera().position.z, 9.5, epsilon = 0.0001);
}

#[test]
fn test_non_finite_scroll_is_ignored() {
    let mut view = controller();
    view.handle_scroll(4.0);
    let speed = view.camera().movement_speed();

    for amount in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        view.handle_scroll(amount);
        assert_eq!(view.camera().movement_speed(), speed);
    }

    view.camera_mut().set_movement_speed(f32::NAN);
    view.camera_mut().set_zoom(f32::NAN);
    assert_eq!(view.camera().movement_speed(), speed);
    assert_eq!(view.camera().zoom(), DEFAULT_ZOOM);
}

#[test]
fn test_non_finite_pointer_is_ignored() {
    let mut view = controller();
    view.handle_pointer_move(100.0, 100.0);
    let (yaw, pitch) = (view.camera().yaw(), view.camera().pitch());

    view.handle_pointer_move(f64::NAN, 100.0);
    view.handle_pointer_move(100.0, f64::INFINITY);
    assert_eq!(view.camera().yaw(), yaw);
    assert_eq!(view.camera().pitch(), pitch);

    // The stored position survives, so the next real move is a normal offset.
    view.handle_pointer_move(110.0, 90.0);
    assert!(view.camera().front().is_finite());
    assert_relative_eq!(view.camera().yaw(), yaw + 1.0, epsilon = 0.001);
    assert_relative_eq!(view.camera().pitch(), pitch + 1.0, epsilon = 0.001);
}

#[test]
fn test_pointer_offsets_keep_precision_far_from_origin() {
    let mut view = controller();
    let yaw = view.camera().yaw();

    view.handle_pointer_move(1.0e9, 0.0);
    view.handle_pointer_move(1.0e9 + 10.0, 0.0);
    assert_relative_eq!(view.camera().yaw(), yaw + 1.0, epsilon = 0.001);
}

#[test]
fn test_view_matrix_is_pure() {
    let mut view = controller();
    view.handle_pointer_move(0.0, 0.0);
    view.handle_pointer_move(12.5, 3.25);
    let first = view.view_matrix();
    let second = view.view_matrix();
    assert_eq!(first.to_cols_array(), second.to_cols_array());
}

#[test]
fn test_view_matrix_changes_with_pose() {
    let mut view = controller();
    let initial = view.view_matrix();
    view.camera_mut().position += Vec3::X;
    assert_ne!(initial, view.view_matrix());
}

#[test]
fn test_perspective_projection() {
    let view = controller();
    let aspect = 1000.0 / 800.0;
    let projection = view.projection_matrix(aspect);
    let expected = Mat4::perspective_rh(DEFAULT_ZOOM.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
    assert_eq!(projection, expected);

    // Near plane maps to depth 0, far plane to depth 1.
    let near = projection.project_point3(Vec3::new(0.0, 0.0, -NEAR_PLANE));
    let far = projection.project_point3(Vec3::new(0.0, 0.0, -FAR_PLANE));
    assert_relative_eq!(near.z, 0.0, epsilon = 0.0001);
    assert_relative_eq!(far.z, 1.0, epsilon = 0.0001);
}

#[test]
fn test_orthographic_projection_extent() {
    let mut view = controller();
    view.handle_discrete_key(ViewKey::Orthographic);
    let aspect = 2.0;
    let projection = view.projection_matrix(aspect);

    let corner = projection.project_point3(Vec3::new(20.0, 10.0, -50.0));
    assert_relative_eq!(corner.x, 1.0, epsilon = 0.0001);
    assert_relative_eq!(corner.y, 1.0, epsilon = 0.0001);

    // Orthographic ignores zoom.
    view.camera_mut().set_zoom(30.0);
    assert_eq!(projection, view.projection_matrix(aspect));
}
