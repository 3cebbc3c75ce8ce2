//! Procedural stick figures.
//!
//! A figure is laid out skeletally: starting from a hip anchor, every
//! joint is derived by chained polar offsets through a fixed proportion
//! table, optionally perturbed by bounded random jitter ("sway"), and
//! emitted as a flat sequence of line and ellipse primitives wrapped in
//! an SVG envelope.
//!
//! ```
//! use manikin::{Figure, Point};
//!
//! let mut figure = Figure::new("dancer", Point::ORIGIN)
//!     .with_sway(1.0)
//!     .with_seed(42);
//! let svg = manikin::render(&mut figure);
//! assert!(svg.contains(r#"<g id="dancer">"#));
//! ```

pub mod body;
pub mod errors;
pub mod figure;
pub mod log;
pub mod svg;
pub mod types;

pub use body::{BodyPart, Direction, Proportions, Side, FACTOR};
pub use errors::{KeyKind, UnknownKey};
pub use figure::{Figure, PRIMITIVES_PER_FIGURE};
pub use svg::{document, Primitive, RenderOptions};
pub use types::{Angle, Length, Point};

/// Lay out a figure and wrap its primitives in the document envelope.
pub fn render(figure: &mut Figure) -> String {
    render_with_options(figure, &RenderOptions::default())
}

/// [`render`] with envelope options.
pub fn render_with_options(figure: &mut Figure, options: &RenderOptions) -> String {
    let primitives = figure.layout();
    svg::document(figure.id(), &primitives, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_emits_a_complete_document() {
        let mut figure = Figure::new("walker", Point::new(10.0, 0.0));
        let out = render(&mut figure);

        assert!(out.starts_with(r#"<svg class="cartesian""#));
        assert!(out.contains(r#"<g id="walker">"#));
        assert_eq!(out.matches("<line").count(), 15);
        assert_eq!(out.matches("<ellipse").count(), 5);
        assert!(out.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn render_with_axes() {
        let mut figure = Figure::new("guided", Point::ORIGIN);
        let out = render_with_options(&mut figure, &RenderOptions { axes: true });
        assert_eq!(out.matches("<path").count(), 2);
    }
}
