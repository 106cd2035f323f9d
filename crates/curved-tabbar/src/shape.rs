//! Scalloped silhouette of the tab bar.
//!
//! Pure geometry: a rectangle whose top edge is replaced by a concave dip
//! built from two mirrored cubic Bezier curves. The outline is serialized
//! to SVG path data and applied to the bar as a CSS `clip-path`, following
//! the browser coordinate convention (y grows downward, so the dip's peak
//! sits *below* the top edge).

/// Half-width of the dip at the top edge, in CSS pixels.
pub const CUTOUT_HALF_WIDTH: f64 = 50.0;
/// Depth of the dip below the top edge.
pub const CUTOUT_DEPTH: f64 = 45.0;
/// Horizontal distance from the dip center to each control point.
const CONTROL_OFFSET: f64 = 33.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// Closed outline of the bar silhouette.
#[derive(Clone, PartialEq, Debug)]
pub struct CurvedOutline {
    segments: Vec<Segment>,
}

/// Builds the bar outline for a `width` x `height` rectangle: left edge up,
/// straight run to `center - 50`, cubic curve down to the peak at
/// `(center, 45)`, mirrored cubic curve back up to `center + 50`, straight
/// run to the right edge, then down and across the bottom.
pub fn curved_outline(width: f64, height: f64) -> CurvedOutline {
    let center = width / 2.0;
    let segments = vec![
        Segment::MoveTo(Point::new(0.0, height)),
        Segment::LineTo(Point::new(0.0, 0.0)),
        Segment::LineTo(Point::new(center - CUTOUT_HALF_WIDTH, 0.0)),
        Segment::CubicTo {
            ctrl1: Point::new(center - CONTROL_OFFSET, 0.0),
            ctrl2: Point::new(center - CONTROL_OFFSET, CUTOUT_DEPTH),
            to: Point::new(center, CUTOUT_DEPTH),
        },
        Segment::CubicTo {
            ctrl1: Point::new(center + CONTROL_OFFSET, CUTOUT_DEPTH),
            ctrl2: Point::new(center + CONTROL_OFFSET, 0.0),
            to: Point::new(center + CUTOUT_HALF_WIDTH, 0.0),
        },
        Segment::LineTo(Point::new(width, 0.0)),
        Segment::LineTo(Point::new(width, height)),
        Segment::Close,
    ];
    CurvedOutline { segments }
}

impl CurvedOutline {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Close))
    }

    /// SVG path data, usable both in `<path d=...>` and `clip-path: path(...)`.
    pub fn to_svg_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            if !path.is_empty() {
                path.push(' ');
            }
            match segment {
                Segment::MoveTo(p) => path.push_str(&format!("M {} {}", fmt(p.x), fmt(p.y))),
                Segment::LineTo(p) => path.push_str(&format!("L {} {}", fmt(p.x), fmt(p.y))),
                Segment::CubicTo { ctrl1, ctrl2, to } => path.push_str(&format!(
                    "C {} {} {} {} {} {}",
                    fmt(ctrl1.x),
                    fmt(ctrl1.y),
                    fmt(ctrl2.x),
                    fmt(ctrl2.y),
                    fmt(to.x),
                    fmt(to.y)
                )),
                Segment::Close => path.push('Z'),
            }
        }
        path
    }
}

// Path data stays compact: integers render without a fraction part.
fn fmt(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
