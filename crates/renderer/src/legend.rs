//! Horizontal color legend drawn beneath the chart.

use heatmap_common::LegendLayout;

use crate::buckets::ColorBuckets;
use crate::scene::{Group, Line, Rect, Stroke, Text, TextAnchor};

const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_GAP: f64 = 15.0;
const TICK_LENGTH: f64 = 5.0;
const BASELINE_OVERHANG: f64 = 30.0;

/// Build the legend group.
///
/// One rectangle per bucket, a lower-bound label and tick at each bucket's
/// left edge, one extra label and tick for the top bucket's upper bound, and
/// a baseline under the strip. `origin` is the group's translation.
pub fn build_legend(buckets: &ColorBuckets, layout: &LegendLayout, origin: (f64, f64)) -> Group {
    let count = buckets.len();
    let rect_width = layout.width / count as f64;
    let mut legend = Group::new().with_id("legend").translated(origin.0, origin.1);

    for (i, color) in buckets.colors().iter().enumerate() {
        legend.push(
            Rect::new(i as f64 * rect_width, 0.0, rect_width, layout.height)
                .with_fill(color.clone())
                .with_stroke(Stroke::black(1.0)),
        );
    }

    for i in 0..=count {
        let x = i as f64 * rect_width;
        legend.push(Line::new(x, layout.height, x, layout.height + TICK_LENGTH, Stroke::black(1.0)));
    }

    let label = |x: f64, value: String| {
        Text::new(x, layout.height + LABEL_GAP, format!("{}°C", value))
            .with_size(LABEL_FONT_SIZE)
            .anchored(TextAnchor::Middle)
    };
    for (i, range) in buckets.ranges().iter().enumerate() {
        legend.push(label(i as f64 * rect_width, range.low_label()));
    }
    if let Some(top) = buckets.ranges().last() {
        legend.push(label(count as f64 * rect_width, top.high_label()));
    }

    legend.push(
        Line::new(
            -BASELINE_OVERHANG,
            layout.height,
            layout.width + BASELINE_OVERHANG,
            layout.height,
            Stroke::black(1.0),
        )
        .with_class("baseline"),
    );

    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_common::Color;

    #[test]
    fn test_legend_structure() {
        let palette: Vec<Color> = (0..4).map(|i| Color::Array(vec![i, i, i])).collect();
        let buckets = ColorBuckets::new(0.0, 8.0, &palette).unwrap();
        let legend = build_legend(&buckets, &LegendLayout::default(), (300.0, 340.0));

        assert_eq!(legend.translate, (300.0, 340.0));
        assert_eq!(legend.rects().count(), 4);
        assert!(legend.rects().all(|r| r.width == 75.0));

        let labels: Vec<&str> = legend.texts().map(|t| t.content.as_str()).collect();
        assert_eq!(labels, vec!["0.0°C", "2.0°C", "4.0°C", "6.0°C", "8.0°C"]);

        // five boundary ticks plus the baseline
        assert_eq!(legend.lines().count(), 6);
        let baseline = legend.lines().last().unwrap();
        assert_eq!((baseline.x1, baseline.x2), (-30.0, 330.0));
    }
}
