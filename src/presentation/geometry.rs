//! Chart geometry shared by every formatter.
//!
//! Angles are in degrees, clockwise from 12 o'clock. Coordinates are SVG
//! user units with y pointing down.
use super::palette::Tone;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// Radius of the trust gauge ring.
pub const GAUGE_RADIUS: f64 = 80.0;
/// Circumference of the trust gauge ring.
pub const GAUGE_CIRCUMFERENCE: f64 = 502.65;

/// Stroke length of the gauge arc for a 0-100 score. Out-of-range scores
/// are clamped.
pub fn gauge_dash(score: f64) -> f64 {
    (score.clamp(0.0, 100.0) / 100.0) * GAUGE_CIRCUMFERENCE
}

pub const DONUT_CENTER: Point = Point { x: 150.0, y: 150.0 };
pub const DONUT_OUTER_RADIUS: f64 = 100.0;
pub const DONUT_INNER_RADIUS: f64 = 60.0;

/// One category fed into a donut.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutCategory {
    pub label: &'static str,
    pub value: u32,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: &'static str,
    pub value: u32,
    pub tone: Tone,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl DonutSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path of the slice on the outer ring.
    pub fn path(&self) -> String {
        describe_arc(
            DONUT_CENTER,
            DONUT_OUTER_RADIUS,
            self.start_angle,
            self.end_angle,
        )
    }

    /// Where the slice's count is drawn: mid-angle, halfway through the ring.
    pub fn label_position(&self) -> Point {
        polar_to_cartesian(
            DONUT_CENTER,
            (DONUT_OUTER_RADIUS + DONUT_INNER_RADIUS) / 2.0,
            (self.start_angle + self.end_angle) / 2.0,
        )
    }
}

/// A severity donut, or the flat placeholder ring when there is nothing to
/// draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Donut {
    Placeholder,
    Slices(Vec<DonutSlice>),
}

impl Donut {
    /// Lays categories out at cumulative angles proportional to their share
    /// of `total`. Zero-valued categories get no slice.
    pub fn build(total: u32, categories: &[DonutCategory]) -> Donut {
        if total == 0 {
            return Donut::Placeholder;
        }
        let total = f64::from(total);
        let mut current = 0.0;
        let slices = categories
            .iter()
            .filter(|category| category.value > 0)
            .map(|category| {
                let sweep = f64::from(category.value) / total * 360.0;
                let slice = DonutSlice {
                    label: category.label,
                    value: category.value,
                    tone: category.tone,
                    start_angle: current,
                    end_angle: current + sweep,
                };
                current += sweep;
                slice
            })
            .collect();
        Donut::Slices(slices)
    }
}

/// SVG path for a pie slice from `start` to `end` degrees. A sweep of 360
/// or more is drawn as a closed circle.
pub fn describe_arc(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = polar_to_cartesian(center, radius, start);
    let sweep = end - start;

    if sweep >= 360.0 {
        let mid = polar_to_cartesian(center, radius, start + 180.0);
        return format!(
            "M {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} Z",
            from.x,
            from.y,
            mid.x,
            mid.y,
            from.x,
            from.y,
            r = radius
        );
    }

    let to = polar_to_cartesian(center, radius, end);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r} {r} 0 {} 1 {:.2} {:.2} Z",
        center.x,
        center.y,
        from.x,
        from.y,
        large_arc,
        to.x,
        to.y,
        r = radius
    )
}

pub const SPIDER_CENTER: Point = Point { x: 180.0, y: 180.0 };
pub const SPIDER_MAX_RADIUS: f64 = 100.0;
pub const SPIDER_LEVELS: usize = 5;
const SPIDER_LABEL_OFFSET: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpiderAxis {
    pub label: &'static str,
    pub value: f64,
    pub angle: f64,
    pub tip: Point,
    pub point: Point,
    pub label_position: Point,
    pub anchor: TextAnchor,
}

/// Radar chart of 0-100 values, one axis per value.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiderChart {
    pub axes: Vec<SpiderAxis>,
    pub grid: Vec<Vec<Point>>,
}

impl SpiderChart {
    /// Axis `i` of `n` sits at `i * 360 / n` degrees. No values yields an
    /// empty chart.
    pub fn build(values: &[(&'static str, f64)]) -> SpiderChart {
        if values.is_empty() {
            return SpiderChart {
                axes: Vec::new(),
                grid: Vec::new(),
            };
        }
        let step = 360.0 / values.len() as f64;

        let grid = (1..=SPIDER_LEVELS)
            .map(|level| {
                let radius = SPIDER_MAX_RADIUS / SPIDER_LEVELS as f64 * level as f64;
                (0..values.len())
                    .map(|i| polar_to_cartesian(SPIDER_CENTER, radius, i as f64 * step))
                    .collect()
            })
            .collect();

        let axes = values
            .iter()
            .enumerate()
            .map(|(i, &(label, value))| {
                let angle = i as f64 * step;
                let radius = value.clamp(0.0, 100.0) / 100.0 * SPIDER_MAX_RADIUS;
                let label_position = polar_to_cartesian(
                    SPIDER_CENTER,
                    SPIDER_MAX_RADIUS + SPIDER_LABEL_OFFSET,
                    angle,
                );
                SpiderAxis {
                    label,
                    value,
                    angle,
                    tip: polar_to_cartesian(SPIDER_CENTER, SPIDER_MAX_RADIUS, angle),
                    point: polar_to_cartesian(SPIDER_CENTER, radius, angle),
                    label_position,
                    anchor: anchor_for(label_position.x),
                }
            })
            .collect();

        SpiderChart { axes, grid }
    }

    pub fn polygon(&self) -> Vec<Point> {
        self.axes.iter().map(|axis| axis.point).collect()
    }
}

fn anchor_for(x: f64) -> TextAnchor {
    if x > SPIDER_CENTER.x + 5.0 {
        TextAnchor::Start
    } else if x < SPIDER_CENTER.x - 5.0 {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// SVG `points` attribute for a polygon.
pub fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn category(label: &'static str, value: u32) -> DonutCategory {
        DonutCategory {
            label,
            value,
            tone: Tone::Gray,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_polar_zero_degrees_points_up() {
        let p = polar_to_cartesian(Point { x: 0.0, y: 0.0 }, 10.0, 0.0);
        assert!(approx(p.x, 0.0) && approx(p.y, -10.0));
        let p = polar_to_cartesian(Point { x: 0.0, y: 0.0 }, 10.0, 90.0);
        assert!(approx(p.x, 10.0) && approx(p.y, 0.0));
    }

    #[test]
    fn test_gauge_dash() {
        assert!(approx(gauge_dash(100.0), GAUGE_CIRCUMFERENCE));
        assert!(approx(gauge_dash(50.0), GAUGE_CIRCUMFERENCE / 2.0));
        assert!(approx(gauge_dash(150.0), GAUGE_CIRCUMFERENCE));
    }

    #[test]
    fn test_zero_total_is_placeholder() {
        assert_eq!(Donut::build(0, &[category("High", 0)]), Donut::Placeholder);
    }

    #[test]
    fn test_donut_slices_are_cumulative() {
        let donut = Donut::build(4, &[category("Critical", 1), category("High", 0), category("Low", 3)]);
        let Donut::Slices(slices) = donut else {
            panic!("expected slices");
        };
        assert_eq!(slices.len(), 2);
        assert!(approx(slices[0].start_angle, 0.0));
        assert!(approx(slices[0].end_angle, 90.0));
        assert!(approx(slices[1].start_angle, 90.0));
        assert!(approx(slices[1].end_angle, 360.0));
    }

    #[test]
    fn test_full_circle_arc() {
        let path = describe_arc(DONUT_CENTER, 100.0, 0.0, 360.0);
        assert!(path.starts_with("M 150.00 50.00 A 100 100 0 1 1 150.00 250.00"));
        assert!(!path.contains(" L "));
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(describe_arc(DONUT_CENTER, 100.0, 0.0, 270.0).contains(" 0 1 1 "));
        assert!(describe_arc(DONUT_CENTER, 100.0, 0.0, 90.0).contains(" 0 0 1 "));
    }

    #[test]
    fn test_label_position_mid_ring() {
        let slice = DonutSlice {
            label: "High",
            value: 1,
            tone: Tone::Orange,
            start_angle: 0.0,
            end_angle: 180.0,
        };
        let p = slice.label_position();
        assert!(approx(p.x, 150.0 + 80.0) && approx(p.y, 150.0));
    }

    #[test]
    fn test_spider_chart_axes() {
        let chart = SpiderChart::build(&[("A", 100.0), ("B", 50.0), ("C", 0.0), ("D", 20.0)]);
        assert_eq!(chart.axes.len(), 4);
        assert_eq!(chart.grid.len(), SPIDER_LEVELS);
        assert!(approx(chart.axes[1].angle, 90.0));
        assert_eq!(chart.axes[0].anchor, TextAnchor::Middle);
        assert_eq!(chart.axes[1].anchor, TextAnchor::Start);
        assert_eq!(chart.axes[3].anchor, TextAnchor::End);
        assert!(approx(chart.axes[0].point.y, 80.0));
        assert!(approx(chart.axes[2].point.y, 180.0));
    }

    #[test]
    fn test_empty_spider_chart() {
        let chart = SpiderChart::build(&[]);
        assert!(chart.axes.is_empty());
        assert!(chart.polygon().is_empty());
    }

    proptest! {
        #[test]
        fn donut_sweeps_sum_to_full_circle(values in proptest::collection::vec(0_u32..500, 1..6)) {
            let total: u32 = values.iter().sum();
            let categories: Vec<DonutCategory> =
                values.iter().map(|&v| category("x", v)).collect();
            match Donut::build(total, &categories) {
                Donut::Placeholder => {
                    prop_assert_eq!(total, 0);
                }
                Donut::Slices(slices) => {
                    let sum: f64 = slices.iter().map(DonutSlice::sweep).sum();
                    prop_assert!((sum - 360.0).abs() < 1e-6);
                    for slice in &slices {
                        prop_assert!(!slice.start_angle.is_nan() && !slice.end_angle.is_nan());
                    }
                }
            }
        }

        #[test]
        fn spider_points_stay_inside_chart(values in proptest::collection::vec(-50.0_f64..150.0, 1..10)) {
            let labelled: Vec<(&'static str, f64)> = values.iter().map(|&v| ("x", v)).collect();
            let chart = SpiderChart::build(&labelled);
            for axis in &chart.axes {
                let dx = axis.point.x - SPIDER_CENTER.x;
                let dy = axis.point.y - SPIDER_CENTER.y;
                prop_assert!((dx * dx + dy * dy).sqrt() <= SPIDER_MAX_RADIUS + 1e-9);
            }
        }
    }
}
