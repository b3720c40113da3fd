use crate::map::Map;
use crate::math;
use crate::player::{Player, Turn, Walk};
use crate::ray::{Hit, Side};
use glam::{vec2, Mat2, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Grid lines checked per sweep before a ray gives up.
pub const DEFAULT_SEARCH_DEPTH: usize = 8;

/// Rays within this angle (radians) of a grid-line family run parallel to it
/// and skip that family's sweep, so no tangent division can blow up.
const AXIS_EPS: f32 = 1e-6;

/// Which quadrant of the y-up frame a ray points into, split along the two
/// axes the sweeps march on.
#[derive(Clone, Copy)]
struct Quadrant {
    /// Ray points into negative x (angle to the +x axis is obtuse).
    obtuse: bool,
    /// Ray points toward smaller screen y.
    looking_up: bool,
}

impl Quadrant {
    fn sign_x(self) -> f32 {
        if self.obtuse {
            -1.0
        } else {
            1.0
        }
    }

    fn sign_y(self) -> f32 {
        if self.looking_up {
            -1.0
        } else {
            1.0
        }
    }
}

/// The raycasting core. Owns the immutable grid and the mutable pose, and
/// keeps one hit slot per ray, refreshed after every successful turn or step.
///
/// The renderer and the input device live outside: input arrives as discrete
/// [`turn`](Engine::turn) / [`step`](Engine::step) calls, and the renderer
/// reads [`hits`](Engine::hits) and [`player`](Engine::player) whenever it
/// wants to redraw.
pub struct Engine {
    map: Map,
    player: Player,
    max_search_depth: usize,
    hits: Vec<Option<Hit>>,
}

impl Engine {
    pub fn new(map: Map, player: Player) -> Self {
        Self::with_search_depth(map, player, DEFAULT_SEARCH_DEPTH)
    }

    pub fn with_search_depth(map: Map, player: Player, max_search_depth: usize) -> Self {
        log::info!(
            "engine ready: {}x{} map, {} rays, search depth {}",
            map.height(),
            map.width(),
            player.ray_count(),
            max_search_depth
        );
        let mut this = Self {
            map,
            player,
            max_search_depth,
            hits: Vec::new(),
        };
        this.recompute_rays();
        this
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Hit results in ray order, leftmost screen column first. `None` marks
    /// a ray that exhausted the search depth without finding a wall.
    pub fn hits(&self) -> &[Option<Hit>] {
        &self.hits
    }

    pub fn turn(&mut self, dir: Turn) {
        self.player.turn(dir);
        self.recompute_rays();
    }

    /// Collision-gated move along the view direction. Returns `false` and
    /// leaves the pose and hits untouched when the destination is out of
    /// bounds or inside a wall.
    pub fn step(&mut self, dir: Walk) -> bool {
        let sign = match dir {
            Walk::Forward => 1.0,
            Walk::Backward => -1.0,
        };
        // the direction vector is y-up; positions are screen space
        let heading = math::reflection() * self.player.direction();
        let next = self.player.position() + heading.normalize() * (self.player.speed() * sign);

        if !self.passable(next) {
            log::debug!("move to ({}, {}) rejected", next.x, next.y);
            return false;
        }

        self.player.move_to(next);
        self.recompute_rays();
        true
    }

    fn passable(&self, pos: Vec2) -> bool {
        let (row, col) = self.map.cell_indices(pos);
        self.map.in_bounds(row, col) && self.map.material(row as usize, col as usize) == 0
    }

    /// Recast every ray against the map. Idempotent for a fixed pose; the
    /// whole hit array is replaced in one go.
    pub fn recompute_rays(&mut self) {
        let pos = self.player.position();
        let (row, col) = self.map.cell_indices(pos);
        let proj = math::projection_onto(self.player.direction());

        let hits: Vec<Option<Hit>> = self
            .player
            .rays()
            .iter()
            .map(|&offset| self.cast(self.player.direction() + offset, pos, row, col, proj))
            .collect();
        self.hits = hits;
    }

    /// March one ray: two bounded sweeps, one per grid-line family, then the
    /// nearer perpendicular distance wins.
    fn cast(&self, ray: Vec2, pos: Vec2, row: isize, col: isize, proj: Mat2) -> Option<Hit> {
        // angle to the +x axis, folded into the first quadrant
        let theta = (ray.x / ray.length()).clamp(-1.0, 1.0).acos();
        let obtuse = theta > FRAC_PI_2;
        let theta = if obtuse { PI - theta } else { theta };
        // screen y grows downward, so looking up means the reflected ray
        // pulls the position toward smaller y
        let looking_up = (math::reflection() * ray).y < 0.0;
        let quadrant = Quadrant { obtuse, looking_up };

        let scan_horizontal = theta > AXIS_EPS;
        let scan_vertical = FRAC_PI_2 - theta > AXIS_EPS;
        let tan_theta = theta.tan();

        let mut horizontal: Option<Hit> = None;
        let mut vertical: Option<Hit> = None;

        for depth in 0..self.max_search_depth {
            if horizontal.is_none() && scan_horizontal {
                let band = row + if looking_up { 0 } else { 1 };
                let edge = self.map.cell_height() * band as f32;
                let dy = (edge - pos.y).abs() + depth as f32 * self.map.cell_height();
                // an axis-aligned vertical ray crosses grid lines straight on
                let dx = if scan_vertical { dy / tan_theta } else { 0.0 };
                let hit_row = row + (depth as isize + 1) * if looking_up { -1 } else { 1 };
                let hit_col = crossed_index(pos.x, dx, obtuse, self.map.cell_width());

                if self.map.is_wall(hit_row, hit_col) {
                    horizontal = Some(make_hit(
                        pos,
                        vec2(dx, dy),
                        proj,
                        quadrant,
                        Side::Horizontal,
                        hit_row,
                        hit_col,
                    ));
                }
            }

            if vertical.is_none() && scan_vertical {
                let band = col + if obtuse { 0 } else { 1 };
                let edge = self.map.cell_width() * band as f32;
                let dx = (edge - pos.x).abs() + depth as f32 * self.map.cell_width();
                let dy = dx * tan_theta;
                let hit_col = col + (depth as isize + 1) * if obtuse { -1 } else { 1 };
                let hit_row = crossed_index(pos.y, dy, looking_up, self.map.cell_height());

                if self.map.is_wall(hit_row, hit_col) {
                    vertical = Some(make_hit(
                        pos,
                        vec2(dx, dy),
                        proj,
                        quadrant,
                        Side::Vertical,
                        hit_row,
                        hit_col,
                    ));
                }
            }

            if (horizontal.is_some() || !scan_horizontal)
                && (vertical.is_some() || !scan_vertical)
            {
                break;
            }
        }

        match (horizontal, vertical) {
            (Some(h), Some(v)) => Some(if h.distance < v.distance { h } else { v }),
            (h, v) => h.or(v),
        }
    }
}

/// Index of the cell band reached after travelling `delta` along one axis
/// from `base`. Floored like [`Map::cell_indices`], so a crossing left of or
/// above the grid maps to a negative index and reads as a miss.
fn crossed_index(base: f32, delta: f32, toward_negative: bool, cell: f32) -> isize {
    let coord = if toward_negative {
        base - delta
    } else {
        base + delta
    };
    (coord / cell).floor() as isize
}

fn make_hit(
    pos: Vec2,
    delta: Vec2,
    proj: Mat2,
    quadrant: Quadrant,
    side: Side,
    row: isize,
    col: isize,
) -> Hit {
    // screen-space travel from the player to the crossing
    let travel = vec2(delta.x * quadrant.sign_x(), delta.y * quadrant.sign_y());
    Hit {
        point: pos + travel,
        side,
        // the projection matrix lives in the y-up frame of the direction
        // vector, so the travel vector crosses frames before projecting;
        // unsigned magnitudes would cancel in two of the four quadrants
        distance: (proj * (math::reflection() * travel)).length(),
        row: row as usize,
        col: col as usize,
    }
}
