//! Primitive fragments and the document envelope.
//!
//! A laid-out figure is a flat, ordered sequence of [`Primitive`] values.
//! Each serializes to a single markup fragment; [`document`] joins the
//! fragments and wraps them in the fixed 200 x 200 viewport the
//! proportion table is sized for.

use std::fmt;

use crate::types::{Length, Point};

/// Viewport edge length in output units.
pub const VIEW_SIZE: u32 = 200;

/// View box matching [`VIEW_SIZE`], centered on the origin.
pub const VIEW_BOX: &str = "-100 -100 200 200";

/// Translucent guide paths along the axes, for eyeballing placement.
const AXIS_GUIDES: &str = concat!(
    r#"<path d="M0 -250 V 500" stroke="green" stroke-width="0.5" stroke-opacity="0.5"/>"#,
    "\n",
    r#"<path d="M-250 0 H 500" stroke="green" stroke-width="0.5" stroke-opacity="0.5"/>"#,
    "\n",
);

/// One drawable instruction.
///
/// Primitives carry no identity of their own; consumers rely on emission
/// order, so reordering a sequence changes its meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Straight segment between two joints.
    Line { start: Point, end: Point },
    /// Axis-aligned ellipse (head, hand, and foot caps).
    Ellipse { center: Point, rx: Length, ry: Length },
}

impl Primitive {
    pub const fn line(start: Point, end: Point) -> Primitive {
        Primitive::Line { start, end }
    }

    pub const fn ellipse(center: Point, rx: Length, ry: Length) -> Primitive {
        Primitive::Ellipse { center, rx, ry }
    }

    /// The serialized markup fragment. Numeric fields are the raw
    /// coordinate values; no rounding is applied.
    pub fn fragment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Line { start, end } => write!(
                f,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                start.x, start.y, end.x, end.y
            ),
            Primitive::Ellipse { center, rx, ry } => write!(
                f,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
                center.x, center.y, rx, ry
            ),
        }
    }
}

/// Envelope options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Draw the axis guide paths behind the figure.
    pub axes: bool,
}

/// Wrap an ordered fragment sequence in the document envelope: the fixed
/// viewport plus a group carrying the figure's identifier.
pub fn document(id: &str, primitives: &[Primitive], options: &RenderOptions) -> String {
    let mut out = format!(
        concat!(
            r#"<svg class="cartesian" width="{size}" height="{size}" "#,
            r#"viewBox="{view_box}" preserveAspectRatio="xMidYMid meet">"#,
            "\n",
        ),
        size = VIEW_SIZE,
        view_box = VIEW_BOX,
    );
    out.push_str(&format!("<g id=\"{}\">\n", escape_attr(id)));
    if options.axes {
        out.push_str(AXIS_GUIDES);
    }
    for primitive in primitives {
        out.push_str(&format!("{primitive}\n"));
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Minimal attribute-value escaping for the group id.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
