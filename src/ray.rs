use glam::Vec2;

/// Which grid-line family a sweep crossed to find a wall. Renderers shade
/// the two families differently so adjoining faces stay distinguishable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Horizontal,
    Vertical,
}

/// One ray's wall intersection.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hit {
    /// World coordinate of the intersection (screen space, y down).
    pub point: Vec2,
    /// Sweep family that produced the hit.
    pub side: Side,
    /// Travel distance projected onto the view direction. Using this instead
    /// of the raw ray length is what removes the fisheye distortion.
    pub distance: f32,
    /// Grid row of the wall cell that was struck.
    pub row: usize,
    /// Grid column of the wall cell that was struck.
    pub col: usize,
}
