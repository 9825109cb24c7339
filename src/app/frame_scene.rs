//! Builder für Frame-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{FrameScene, KnobSprite, SegmentSprite};

/// Baut eine FrameScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> FrameScene {
    let segments = state
        .segments()
        .map(|segment| SegmentSprite {
            points: segment.points.to_array(),
            color: segment.color,
        })
        .collect();

    let knobs = state
        .knobs()
        .iter()
        .map(|knob| {
            let geometry = knob.geometry();
            KnobSprite {
                center: geometry.center.to_array(),
                size: geometry.size.to_array(),
                radius: geometry.radius,
                knob_position: knob.knob_position().to_array(),
                output_value: knob.output_value().to_array(),
                pressed: knob.is_pressed(),
            }
        })
        .collect();

    FrameScene {
        tick: state.tick_count,
        canvas: state.options.canvas(),
        segments,
        knobs,
    }
}
