//! Scene construction: turns the editor state into an ordered display
//! list. Read-only with respect to state; the host paints the commands
//! in order onto its 2D surface.

use serde::Serialize;

use crate::geometry::bezier::{sample_into, sample_segments};
use crate::model::{Color, Point};
use crate::Editor;

const GRID_SPACING: f32 = 60.0;

const COLOR_POLYGON: Color = Color::rgba(17, 17, 17, 255);
const COLOR_POINT: Color = Color::rgba(17, 17, 17, 255);
const COLOR_POINT_OUTLINE: Color = Color::rgba(224, 224, 224, 255);
const COLOR_BASE_CURVE: Color = Color::rgba(17, 17, 17, 255);
const COLOR_ELEVATED_POLYGON: Color = Color::rgba(244, 194, 194, 230);
const COLOR_ELEVATED_POINT: Color = Color::rgba(212, 138, 138, 255);
const COLOR_HOVER: Color = Color::rgba(240, 240, 240, 255);
const COLOR_GRID: Color = Color::rgba(0, 0, 0, 20);
const COLOR_LABEL: Color = Color::rgba(0, 0, 0, 178);

/// Curve colors per elevation step; steps beyond the palette clamp to
/// the last entry.
const ELEVATION_PALETTE: [Color; 4] = [
    Color::rgba(255, 182, 193, 242),
    Color::rgba(248, 180, 193, 230),
    Color::rgba(244, 194, 194, 217),
    Color::rgba(240, 180, 190, 204),
];

pub fn elevation_step_color(step: usize) -> Color {
    ELEVATION_PALETTE[step.min(ELEVATION_PALETTE.len() - 1)]
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCmd {
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f32,
        dash: Option<(f32, f32)>,
    },
    Disc {
        center: Point,
        radius: f32,
        fill: Color,
        outline: Option<Color>,
    },
    Label {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
}

struct PointStyle {
    fill: Color,
    radius: f32,
    hover_index: Option<usize>,
    active_index: Option<usize>,
}

pub fn build_scene(ed: &Editor) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();
    push_grid(&mut cmds, ed.surface_size());

    if ed.show_base() {
        push_polygon(&mut cmds, ed.points(), COLOR_POLYGON, (10.0, 8.0));
        push_curve(&mut cmds, ed.points(), COLOR_BASE_CURVE, 3.5);
        push_points(
            &mut cmds,
            ed.points(),
            PointStyle {
                fill: COLOR_POINT,
                radius: 10.0,
                hover_index: ed.hover_index(),
                active_index: ed.dragging_index(),
            },
        );
    }

    if ed.show_elevated() {
        for (step, polygon) in ed.history().iter().enumerate() {
            push_polygon(&mut cmds, polygon, COLOR_ELEVATED_POLYGON, (6.0, 6.0));
            push_curve(&mut cmds, polygon, elevation_step_color(step), 2.5);
            push_points(
                &mut cmds,
                polygon,
                PointStyle {
                    fill: COLOR_ELEVATED_POINT,
                    radius: 8.0,
                    hover_index: None,
                    active_index: None,
                },
            );
        }
    }

    cmds
}

fn push_grid(cmds: &mut Vec<DrawCmd>, (width, height): (f32, f32)) {
    let mut x = GRID_SPACING;
    while x < width {
        cmds.push(DrawCmd::Polyline {
            points: vec![Point::new(x, 0.0), Point::new(x, height)],
            color: COLOR_GRID,
            width: 1.0,
            dash: Some((4.0, 16.0)),
        });
        x += GRID_SPACING;
    }
    let mut y = GRID_SPACING;
    while y < height {
        cmds.push(DrawCmd::Polyline {
            points: vec![Point::new(0.0, y), Point::new(width, y)],
            color: COLOR_GRID,
            width: 1.0,
            dash: Some((4.0, 16.0)),
        });
        y += GRID_SPACING;
    }
}

fn push_polygon(cmds: &mut Vec<DrawCmd>, points: &[Point], color: Color, dash: (f32, f32)) {
    if points.len() < 2 {
        return;
    }
    cmds.push(DrawCmd::Polyline {
        points: points.to_vec(),
        color,
        width: 2.0,
        dash: Some(dash),
    });
}

/// Sampled curve rendering: straight-line interpolation between uniform
/// samples, an accepted approximation of the analytic curve.
fn push_curve(cmds: &mut Vec<DrawCmd>, polygon: &[Point], color: Color, width: f32) {
    if polygon.len() < 2 {
        return;
    }
    let mut samples = Vec::new();
    sample_into(polygon, sample_segments(polygon.len()), &mut samples);
    cmds.push(DrawCmd::Polyline {
        points: samples,
        color,
        width,
        dash: None,
    });
}

fn push_points(cmds: &mut Vec<DrawCmd>, points: &[Point], style: PointStyle) {
    for (i, &pt) in points.iter().enumerate() {
        let is_active = style.active_index == Some(i);
        let is_hover = style.hover_index == Some(i);
        let r = if is_active {
            style.radius + 3.0
        } else if is_hover {
            style.radius + 2.0
        } else {
            style.radius
        };
        if is_active || is_hover {
            cmds.push(DrawCmd::Disc {
                center: pt,
                radius: r + 4.0,
                fill: COLOR_HOVER,
                outline: None,
            });
        }
        cmds.push(DrawCmd::Disc {
            center: pt,
            radius: r,
            fill: style.fill,
            outline: Some(COLOR_POINT_OUTLINE),
        });
        cmds.push(DrawCmd::Label {
            text: format!("P{}", i),
            x: pt.x + r + 8.0,
            y: pt.y,
            color: COLOR_LABEL,
        });
    }
}
