use serde::{Deserialize, Serialize};

/// Control polygon length bounds. Degree = length - 1, so this allows
/// curves from degree 1 up to degree 15.
pub const MIN_POINTS: usize = 2;
pub const MAX_POINTS: usize = 16;

/// Maximum number of successive degree-elevation steps.
pub const MAX_ELEVATION_LEVEL: u32 = 5;

pub const DEFAULT_POINT_COUNT: usize = 4;

/// Hit radii in canvas pixels. Press is a little more forgiving than hover.
pub const PRESS_RADIUS: f32 = 24.0;
pub const HOVER_RADIUS: f32 = 20.0;

/// Fallback drawing surface size when the host reports nothing usable.
pub const DEFAULT_WIDTH: f32 = 1400.0;
pub const DEFAULT_HEIGHT: f32 = 900.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn lerp(a: Point, b: Point, t: f32) -> Point {
        Point {
            x: (1.0 - t) * a.x + t * b.x,
            y: (1.0 - t) * a.y + t * b.y,
        }
    }

    pub fn midpoint(a: Point, b: Point) -> Point {
        Point {
            x: 0.5 * (a.x + b.x),
            y: 0.5 * (a.y + b.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// Host pages form a closed set; the core only cares about entering
/// the page that hosts the curve surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Playground,
    Theory,
    About,
}

impl Page {
    pub fn from_id(id: &str) -> Option<Page> {
        match id {
            "playground" => Some(Page::Playground),
            "theory" => Some(Page::Theory),
            "about" => Some(Page::About),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Playground => "playground",
            Page::Theory => "theory",
            Page::About => "about",
        }
    }

    /// Whether this page hosts the drawing surface.
    pub fn hosts_surface(&self) -> bool {
        matches!(self, Page::Playground)
    }
}
