//! Braille canvas backend for the render contract
//!
//! The explorer works in virtual pixels. Each terminal cell is
//! `CELL_WIDTH × CELL_HEIGHT` of them, so mouse cells map back onto the
//! same coordinates the scene was built in.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
        Block,
    },
};

use bellcurve_core::render::{Primitive, Scene};
use bellcurve_core::Orientation;

/// Virtual pixels per terminal column
pub const CELL_WIDTH: f64 = 8.0;
/// Virtual pixels per terminal row
pub const CELL_HEIGHT: f64 = 16.0;

/// Spacing of the hatching lines in a band of opacity 1
const BAND_STRIDE: f64 = 4.8;

const CURVE_COLOR: Color = Color::Cyan;
const BAR_COLOR: Color = Color::Yellow;
const MARKER_COLOR: Color = Color::Red;
const GRID_COLOR: Color = Color::DarkGray;
const BAND_COLOR: Color = Color::Blue;
const CURSOR_COLOR: Color = Color::White;

/// Surface size in virtual pixels for a canvas area
pub fn surface_size(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width) * CELL_WIDTH,
        f64::from(area.height) * CELL_HEIGHT,
    )
}

/// Virtual pixel at the center of a terminal cell, if the cell is in `area`
pub fn cell_to_surface(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let inside =
        column >= area.x && column < area.right() && row >= area.y && row < area.bottom();
    if !inside {
        return None;
    }
    Some((
        (f64::from(column - area.x) + 0.5) * CELL_WIDTH,
        (f64::from(row - area.y) + 0.5) * CELL_HEIGHT,
    ))
}

/// Plot-relative scene coordinates to canvas coordinates (y up)
struct Projection {
    origin: (f64, f64),
    height: f64,
    plot_width: f64,
    plot_height: f64,
}

impl Projection {
    fn new(scene: &Scene) -> Self {
        Self {
            origin: scene.origin,
            height: scene.height,
            plot_width: scene.plot_width,
            plot_height: scene.plot_height,
        }
    }

    fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.origin.0 + x, self.height - (self.origin.1 + y))
    }

    fn in_plot_x(&self, x: f64) -> bool {
        (0.0..=self.plot_width).contains(&x)
    }

    fn bottom_margin(&self) -> f64 {
        self.height - self.origin.1 - self.plot_height
    }
}

/// A canvas that paints `scene` inside `block`
pub fn scene_canvas<'a>(
    scene: &'a Scene,
    block: Block<'a>,
) -> Canvas<'a, impl Fn(&mut Context) + 'a> {
    Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, scene.width])
        .y_bounds([0.0, scene.height])
        .paint(move |ctx| paint_scene(ctx, scene))
}

fn paint_scene(ctx: &mut Context, scene: &Scene) {
    if scene.is_empty() {
        return;
    }
    let proj = Projection::new(scene);

    for primitive in &scene.primitives {
        match primitive {
            Primitive::GridLine {
                orientation,
                position,
            } => draw_grid(ctx, &proj, *orientation, *position),
            Primitive::Band { x0, x1, opacity } => draw_band(ctx, &proj, *x0, *x1, *opacity),
            Primitive::Bar {
                x,
                y,
                width,
                height,
                ..
            } => draw_bar(ctx, &proj, *x, *y, *width, *height),
            Primitive::Path { points } => draw_path(ctx, &proj, points),
            Primitive::Marker { x, multiple, .. } => {
                if proj.in_plot_x(*x) {
                    let (cx, bottom) = proj.point(*x, proj.plot_height);
                    let (_, top) = proj.point(*x, 0.0);
                    ctx.draw(&CanvasLine::new(cx, bottom, cx, top, MARKER_COLOR));
                    ctx.print(
                        cx,
                        top,
                        Span::styled(format!("{}σ", multiple), Style::default().fg(MARKER_COLOR)),
                    );
                }
            }
            Primitive::Tick {
                orientation: Orientation::Horizontal,
                position,
                label,
            } => {
                if proj.in_plot_x(*position) {
                    let (cx, _) = proj.point(*position, 0.0);
                    ctx.print(cx, proj.bottom_margin() / 2.0, label.clone());
                }
            }
            Primitive::Tick {
                orientation: Orientation::Vertical,
                position,
                label,
            } => {
                let (_, cy) = proj.point(0.0, *position);
                ctx.print(0.0, cy, label.clone());
            }
            Primitive::Dot { x, y, radius } => {
                let (cx, cy) = proj.point(*x, *y);
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: *radius,
                    color: CURVE_COLOR,
                });
            }
            Primitive::CursorPoint { x, y } => {
                let (cx, cy) = proj.point(*x, *y);
                let (_, bottom) = proj.point(*x, proj.plot_height);
                ctx.draw(&CanvasLine::new(cx, bottom, cx, cy, CURSOR_COLOR));
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: CELL_WIDTH / 2.0,
                    color: CURSOR_COLOR,
                });
            }
            Primitive::Label { x, y, text } => {
                let (cx, cy) = proj.point(*x, *y);
                ctx.print(
                    cx.min(scene.width - text.chars().count() as f64 * CELL_WIDTH).max(0.0),
                    cy,
                    Span::styled(text.clone(), Style::default().fg(CURSOR_COLOR)),
                );
            }
        }
    }

    let (left, bottom) = proj.point(0.0, proj.plot_height);
    let (right, top) = proj.point(proj.plot_width, 0.0);
    ctx.draw(&CanvasLine::new(left, bottom, right, bottom, Color::Gray));
    ctx.draw(&CanvasLine::new(left, bottom, left, top, Color::Gray));
}

fn draw_grid(ctx: &mut Context, proj: &Projection, orientation: Orientation, position: f64) {
    match orientation {
        Orientation::Horizontal => {
            if proj.in_plot_x(position) {
                let (x, y0) = proj.point(position, proj.plot_height);
                let (_, y1) = proj.point(position, 0.0);
                ctx.draw(&CanvasLine::new(x, y0, x, y1, GRID_COLOR));
            }
        }
        Orientation::Vertical => {
            let (x0, y) = proj.point(0.0, position);
            let (x1, _) = proj.point(proj.plot_width, position);
            ctx.draw(&CanvasLine::new(x0, y, x1, y, GRID_COLOR));
        }
    }
}

/// Hatch the band; sparser lines read as lower opacity
fn draw_band(ctx: &mut Context, proj: &Projection, x0: f64, x1: f64, opacity: f64) {
    if !(opacity > 0.0) {
        return;
    }
    let stride = BAND_STRIDE / opacity;
    let (start, end) = (x0.max(0.0), x1.min(proj.plot_width));
    let mut x = start;
    while x <= end {
        let (cx, bottom) = proj.point(x, proj.plot_height);
        let (_, top) = proj.point(x, 0.0);
        ctx.draw(&CanvasLine::new(cx, bottom, cx, top, BAND_COLOR));
        x += stride;
    }
    ctx.layer();
}

fn draw_bar(ctx: &mut Context, proj: &Projection, x: f64, y: f64, width: f64, height: f64) {
    let left = x.max(0.0);
    let right = (x + width).min(proj.plot_width);
    if right <= left || height <= 0.0 {
        return;
    }
    let (cx, cy) = proj.point(left, y + height);
    ctx.draw(&Rectangle {
        x: cx,
        y: cy,
        width: right - left,
        height,
        color: BAR_COLOR,
    });
}

fn draw_path(ctx: &mut Context, proj: &Projection, points: &[(f64, f64)]) {
    for pair in points.windows(2) {
        let Some(((x0, y0), (x1, y1))) = clip_segment(pair[0], pair[1], proj.plot_width) else {
            continue;
        };
        let (ax, ay) = proj.point(x0, y0);
        let (bx, by) = proj.point(x1, y1);
        ctx.draw(&CanvasLine::new(ax, ay, bx, by, CURVE_COLOR));
    }
}

type Segment = ((f64, f64), (f64, f64));

/// Clip a segment to the vertical strip `0 ≤ x ≤ max_x`, interpolating y
fn clip_segment(a: (f64, f64), b: (f64, f64), max_x: f64) -> Option<Segment> {
    let (left, right) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    if right.0 < 0.0 || left.0 > max_x {
        return None;
    }
    let at = |x: f64| {
        let dx = right.0 - left.0;
        if dx == 0.0 {
            (x, left.1)
        } else {
            (x, left.1 + (right.1 - left.1) * (x - left.0) / dx)
        }
    };
    let start = if left.0 < 0.0 { at(0.0) } else { left };
    let end = if right.0 > max_x { at(max_x) } else { right };
    Some((start, end))
}
