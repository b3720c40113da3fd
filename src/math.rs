use glam::{vec2, Mat2, Vec2};

/// Rotation by `theta` radians, counterclockwise in the y-up math frame.
pub fn rotation(theta: f32) -> Mat2 {
    Mat2::from_angle(theta)
}

/// Reflection about the x axis (flips the y component).
///
/// Direction math happens in a y-up frame while the screen's y axis grows
/// downward; every direction vector passes through this exactly once before
/// it is combined with a screen-space position.
pub fn reflection() -> Mat2 {
    Mat2::from_cols(Vec2::X, -Vec2::Y)
}

/// Orthogonal projection onto `v`. `v` must be non-zero.
///
/// Projecting a ray's travel vector onto the view direction and taking the
/// length yields the perpendicular (fisheye-corrected) wall distance.
pub fn projection_onto(v: Vec2) -> Mat2 {
    let inv = 1.0 / v.dot(v);
    Mat2::from_cols(
        vec2(v.x * v.x, v.x * v.y) * inv,
        vec2(v.x * v.y, v.y * v.y) * inv,
    )
}
