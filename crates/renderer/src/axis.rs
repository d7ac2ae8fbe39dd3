//! Axis groups: a domain line plus one translated group per tick.

use crate::scale::{BandScale, LinearScale};
use crate::scene::{Group, Line, Stroke, Text, TextAnchor};

/// Tick mark length in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between the tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;

const TICK_FONT_SIZE: f64 = 10.0;

/// Horizontal axis below the chart area, ticks at the given values.
pub fn bottom_axis(scale: &LinearScale, ticks: &[i32], offset_y: f64) -> Group {
    let (r0, r1) = scale.range();
    let mut axis = Group::new().with_id("x-axis").translated(0.0, offset_y);
    axis.push(Line::new(r0, 0.0, r1, 0.0, Stroke::black(1.0)).with_class("domain"));

    for &value in ticks {
        let mut tick = Group::new()
            .with_class("tick")
            .translated(scale.scale(f64::from(value)), 0.0);
        tick.push(Line::new(0.0, 0.0, 0.0, TICK_SIZE, Stroke::black(1.0)));
        tick.push(
            Text::new(0.0, TICK_SIZE + TICK_PADDING, value.to_string())
                .with_size(TICK_FONT_SIZE)
                .anchored(TextAnchor::Middle)
                .shifted(0.71),
        );
        axis.push(tick);
    }
    axis
}

/// Vertical axis on the left edge with one tick centered on each band.
pub fn left_axis(scale: &BandScale) -> Group {
    let (r0, r1) = scale.range();
    let mut axis = Group::new().with_id("y-axis");
    axis.push(Line::new(0.0, r0, 0.0, r1, Stroke::black(1.0)).with_class("domain"));

    for (index, label) in scale.labels().iter().enumerate() {
        let Some(center) = scale.center_at(index) else {
            continue;
        };
        let mut tick = Group::new().with_class("tick").translated(0.0, center);
        tick.push(Line::new(0.0, 0.0, -TICK_SIZE, 0.0, Stroke::black(1.0)));
        tick.push(
            Text::new(-(TICK_SIZE + TICK_PADDING), 0.0, label.clone())
                .with_size(TICK_FONT_SIZE)
                .anchored(TextAnchor::End)
                .shifted(0.32),
        );
        axis.push(tick);
    }
    axis
}
