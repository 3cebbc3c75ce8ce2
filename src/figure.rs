//! Skeletal figure layout.
//!
//! A figure is laid out by walking outward from its hip anchor: each step
//! resolves a direction and a body part, perturbs the angle by bounded
//! jitter when sway is on, and derives the next joint with a single polar
//! offset. Joints are plain values passed between steps; the torso step
//! *returns* the shoulder anchor and the upper-body steps take it as a
//! parameter, so step ordering is enforced by data flow rather than by
//! mutable figure state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::body::{BodyPart, Direction, Proportions, Side};
use crate::svg::Primitive;
use crate::types::{Angle, Point};

/// Primitives emitted per figure: 2 torso lines, a neck line and head
/// cap, and four limbs of 3 lines and a cap each.
pub const PRIMITIVES_PER_FIGURE: usize = 20;

/// Bounded angular perturbation in half-turns, uniform over
/// `[-amplitude/32, amplitude/32)`.
fn jitter<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    amplitude * (rng.gen_range(0.0..1.0) / 16.0 - 1.0 / 32.0)
}

/// One stick figure: identifier, hip anchor, proportion table, sway
/// amplitude, and its private jitter source.
///
/// Built once per render and consumed by [`Figure::layout`]; nothing
/// persists across renders and two figures never share state.
pub struct Figure {
    id: String,
    hip: Point,
    proportions: Proportions,
    sway: f64,
    rng: SmallRng,
}

impl Figure {
    /// A figure at the given hip anchor with scale 1, sway off, and an
    /// entropy-seeded jitter source.
    pub fn new(id: impl Into<String>, hip: Point) -> Figure {
        Figure {
            id: id.into(),
            hip,
            proportions: Proportions::new(1.0),
            sway: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Set the figure-wide scale applied to every proportion.
    pub fn with_scale(mut self, scale: f64) -> Figure {
        self.proportions = Proportions::new(scale);
        self
    }

    /// Set the sway amplitude. Zero keeps every joint at its nominal
    /// angle and draws nothing from the jitter source; 1 gives each
    /// segment class its full swing.
    pub fn with_sway(mut self, sway: f64) -> Figure {
        self.sway = sway;
        self
    }

    /// Seed the jitter source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Figure {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hip(&self) -> Point {
        self.hip
    }

    pub fn proportions(&self) -> &Proportions {
        &self.proportions
    }

    /// Lay out the whole figure.
    ///
    /// Emission order is fixed: torso, neck and head, right arm, left
    /// arm, right leg, left leg.
    pub fn layout(&mut self) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(PRIMITIVES_PER_FIGURE);
        let shoulder = self.torso(&mut out);
        self.neck_head(shoulder, &mut out);
        self.arm(shoulder, Side::Right, &mut out);
        self.arm(shoulder, Side::Left, &mut out);
        self.leg(Side::Right, &mut out);
        self.leg(Side::Left, &mut out);
        debug_assert_eq!(out.len(), PRIMITIVES_PER_FIGURE);
        out
    }

    /// One extension step: nominal direction plus jitter (when sway is
    /// on), walked for the part's scaled length.
    fn extend(&mut self, from: Point, dir: Direction, part: BodyPart) -> Point {
        let mut angle = dir.angle();
        if self.sway != 0.0 {
            let wobble = jitter(&mut self.rng, self.sway * part.sway_class());
            angle = (angle + Angle(wobble)).normalized();
        }
        from.offset(angle, self.proportions.length(part))
    }

    /// Cap ellipse closing off a chain. The center sits one y-radius
    /// beyond the anchor along the chain's *nominal* terminal direction,
    /// which is exact for vertical terminals and a deliberate
    /// approximation for swayed ones: the cap rides the nominal axis even
    /// when the last bone was jittered off it.
    fn cap(&self, anchor: Point, dir: Direction, half_width: BodyPart, half_height: BodyPart) -> Primitive {
        let rx = self.proportions.length(half_width);
        let ry = self.proportions.length(half_height);
        Primitive::ellipse(anchor.offset(dir.angle(), ry), rx, ry)
    }

    /// Hip up to the shoulder anchor. Emits the two torso lines and
    /// returns the anchor the neck and arms hang off.
    fn torso(&mut self, out: &mut Vec<Primitive>) -> Point {
        let belly_end = self.extend(self.hip, Direction::Up, BodyPart::Belly);
        let shoulder = self.extend(belly_end, Direction::Up, BodyPart::Ribs);
        crate::log::debug!(x = shoulder.x, y = shoulder.y, "derived shoulder anchor");
        out.push(Primitive::line(self.hip, belly_end));
        out.push(Primitive::line(belly_end, shoulder));
        shoulder
    }

    fn neck_head(&mut self, shoulder: Point, out: &mut Vec<Primitive>) {
        let neck_end = self.extend(shoulder, Direction::Up, BodyPart::Neck);
        out.push(Primitive::line(shoulder, neck_end));
        out.push(self.cap(
            neck_end,
            Direction::Up,
            BodyPart::HeadHalfWidth,
            BodyPart::HeadHalfHeight,
        ));
    }

    fn arm(&mut self, shoulder: Point, side: Side, out: &mut Vec<Primitive>) {
        let shoulder_end = self.extend(shoulder, side.direction(), BodyPart::Shoulder);
        let elbow = self.extend(shoulder_end, Direction::Down, BodyPart::UpperArm);
        let wrist = self.extend(elbow, Direction::Down, BodyPart::LowerArm);
        crate::log::trace!(side = ?side, x = wrist.x, y = wrist.y, "wrist");
        out.push(Primitive::line(shoulder, shoulder_end));
        out.push(Primitive::line(shoulder_end, elbow));
        out.push(Primitive::line(elbow, wrist));
        out.push(self.cap(
            wrist,
            Direction::Down,
            BodyPart::HandHalfWidth,
            BodyPart::HandHalfHeight,
        ));
    }

    fn leg(&mut self, side: Side, out: &mut Vec<Primitive>) {
        let hip_end = self.extend(self.hip, side.direction(), BodyPart::Hip);
        let knee = self.extend(hip_end, Direction::Down, BodyPart::UpperLeg);
        let ankle = self.extend(knee, Direction::Down, BodyPart::LowerLeg);
        crate::log::trace!(side = ?side, x = ankle.x, y = ankle.y, "ankle");
        out.push(Primitive::line(self.hip, hip_end));
        out.push(Primitive::line(hip_end, knee));
        out.push(Primitive::line(knee, ankle));
        out.push(self.cap(
            ankle,
            Direction::Down,
            BodyPart::FootHalfWidth,
            BodyPart::FootHalfHeight,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Length;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got {actual}"
        );
    }

    fn line_ends(p: &Primitive) -> (Point, Point) {
        match p {
            Primitive::Line { start, end } => (*start, *end),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    fn ellipse_parts(p: &Primitive) -> (Point, Length, Length) {
        match p {
            Primitive::Ellipse { center, rx, ry } => (*center, *rx, *ry),
            other => panic!("expected an ellipse, got {other:?}"),
        }
    }

    // ==================== Jitter tests ====================

    #[test]
    fn jitter_stays_within_amplitude_bound() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = jitter(&mut rng, 4.0);
            assert!((-0.125..0.125).contains(&v), "out of bound: {v}");
        }
        for _ in 0..10_000 {
            let v = jitter(&mut rng, 1.0);
            assert!((-0.03125..0.03125).contains(&v), "out of bound: {v}");
        }
    }

    #[test]
    fn jitter_spreads_over_its_interval() {
        let mut rng = SmallRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..10_000).map(|_| jitter(&mut rng, 4.0)).collect();
        let min = draws.iter().copied().fold(f64::MAX, f64::min);
        let max = draws.iter().copied().fold(f64::MIN, f64::max);
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(min < -0.1, "min {min} never approached the lower bound");
        assert!(max > 0.1, "max {max} never approached the upper bound");
        assert!(mean.abs() < 0.01, "mean {mean} is off-center");
    }

    #[test]
    fn zero_amplitude_is_exactly_zero() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(jitter(&mut rng, 0.0), 0.0);
        }
    }

    // ==================== Layout tests ====================

    #[test]
    fn layout_emits_twenty_primitives() {
        let mut fig = Figure::new("n", Point::ORIGIN);
        assert_eq!(fig.layout().len(), PRIMITIVES_PER_FIGURE);

        let mut swayed = Figure::new("s", Point::new(12.0, -3.0))
            .with_scale(2.0)
            .with_sway(1.5)
            .with_seed(99);
        assert_eq!(swayed.layout().len(), PRIMITIVES_PER_FIGURE);
    }

    #[test]
    fn layout_order_is_lines_and_caps_in_fixed_positions() {
        let mut fig = Figure::new("n", Point::ORIGIN).with_sway(1.0).with_seed(5);
        let primitives = fig.layout();
        for (i, p) in primitives.iter().enumerate() {
            let is_cap = matches!(i, 3 | 7 | 11 | 15 | 19);
            match p {
                Primitive::Ellipse { .. } => assert!(is_cap, "unexpected cap at {i}"),
                Primitive::Line { .. } => assert!(!is_cap, "unexpected line at {i}"),
            }
        }
    }

    #[test]
    fn unswayed_unit_figure_matches_reference_skeleton() {
        let mut fig = Figure::new("ref", Point::ORIGIN);
        let p = fig.layout();

        // Torso: straight up from the hip, one belly and one ribs length.
        let (hip, belly_end) = line_ends(&p[0]);
        assert_point(hip, 0.0, 0.0);
        assert_point(belly_end, 0.0, 10.0);
        let (_, shoulder) = line_ends(&p[1]);
        assert_point(shoulder, 0.0, 20.0);

        // Neck and head cap.
        let (neck_start, neck_end) = line_ends(&p[2]);
        assert_point(neck_start, 0.0, 20.0);
        assert_point(neck_end, 0.0, 22.5);
        let (head, head_rx, head_ry) = ellipse_parts(&p[3]);
        assert_point(head, 0.0, 27.5);
        assert!((head_rx.raw() - 3.0).abs() < EPS);
        assert!((head_ry.raw() - 5.0).abs() < EPS);

        // Right arm, then its mirror.
        let (_, r_shoulder_end) = line_ends(&p[4]);
        assert_point(r_shoulder_end, 7.5, 20.0);
        let (_, r_elbow) = line_ends(&p[5]);
        assert_point(r_elbow, 7.5, 7.5);
        let (_, r_wrist) = line_ends(&p[6]);
        assert_point(r_wrist, 7.5, -2.5);
        let (r_hand, hand_rx, hand_ry) = ellipse_parts(&p[7]);
        assert_point(r_hand, 7.5, -5.5);
        assert!((hand_rx.raw() - 2.0).abs() < EPS);
        assert!((hand_ry.raw() - 3.0).abs() < EPS);

        let (_, l_shoulder_end) = line_ends(&p[8]);
        assert_point(l_shoulder_end, -7.5, 20.0);
        let (l_hand, _, _) = ellipse_parts(&p[11]);
        assert_point(l_hand, -7.5, -5.5);

        // Right leg, then its mirror.
        let (leg_root, r_hip_end) = line_ends(&p[12]);
        assert_point(leg_root, 0.0, 0.0);
        assert_point(r_hip_end, 5.0, 0.0);
        let (_, r_knee) = line_ends(&p[13]);
        assert_point(r_knee, 5.0, -15.0);
        let (_, r_ankle) = line_ends(&p[14]);
        assert_point(r_ankle, 5.0, -30.0);
        let (r_foot, foot_rx, foot_ry) = ellipse_parts(&p[15]);
        assert_point(r_foot, 5.0, -31.5);
        assert!((foot_rx.raw() - 3.0).abs() < EPS);
        assert!((foot_ry.raw() - 1.5).abs() < EPS);

        let (l_foot, _, _) = ellipse_parts(&p[19]);
        assert_point(l_foot, -5.0, -31.5);
    }

    #[test]
    fn hip_anchor_translates_the_whole_skeleton() {
        let mut at_origin = Figure::new("a", Point::ORIGIN);
        let mut moved = Figure::new("b", Point::new(40.0, -25.0));
        let base = at_origin.layout();
        let shifted = moved.layout();

        for (a, b) in base.iter().zip(&shifted) {
            match (a, b) {
                (Primitive::Line { start: s1, end: e1 }, Primitive::Line { start: s2, end: e2 }) => {
                    assert_point(*s2 - *s1, 40.0, -25.0);
                    assert_point(*e2 - *e1, 40.0, -25.0);
                }
                (
                    Primitive::Ellipse { center: c1, .. },
                    Primitive::Ellipse { center: c2, .. },
                ) => {
                    assert_point(*c2 - *c1, 40.0, -25.0);
                }
                (a, b) => panic!("kind mismatch: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_skeleton() {
        let mut a = Figure::new("a", Point::ORIGIN).with_sway(1.0).with_seed(42);
        let mut b = Figure::new("b", Point::ORIGIN).with_sway(1.0).with_seed(42);
        assert_eq!(a.layout(), b.layout());

        let mut c = Figure::new("c", Point::ORIGIN).with_sway(1.0).with_seed(43);
        assert_ne!(a.layout(), c.layout());
    }

    #[test]
    fn zero_sway_never_consumes_randomness() {
        // Two figures with independent entropy seeds agree exactly when
        // sway is off, so no draw can have happened.
        let mut a = Figure::new("a", Point::ORIGIN);
        let mut b = Figure::new("b", Point::ORIGIN);
        assert_eq!(a.layout(), b.layout());
    }

    #[test]
    fn caps_ride_the_nominal_axis_even_under_sway() {
        // The head cap center is always one half-height above the neck
        // end, regardless of where jitter put the neck end itself.
        let mut fig = Figure::new("s", Point::ORIGIN).with_sway(2.0).with_seed(17);
        let p = fig.layout();
        let (_, neck_end) = line_ends(&p[2]);
        let (head, _, head_ry) = ellipse_parts(&p[3]);
        assert_point(head, neck_end.x, neck_end.y + head_ry.raw());

        let (_, wrist) = line_ends(&p[6]);
        let (hand, _, hand_ry) = ellipse_parts(&p[7]);
        assert_point(hand, wrist.x, wrist.y - hand_ry.raw());
    }
}
