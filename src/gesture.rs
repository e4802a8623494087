use egui::Pos2;

/// A recognized single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// A drag crossed the pan threshold; carries the press position.
    PanStart { position: Pos2 },
    /// The pointer moved while a pan is in progress.
    PanUpdate { position: Pos2 },
    /// The pointer was released while a pan was in progress.
    PanEnd { position: Pos2 },
    /// Press and release without meaningful movement.
    Tap { position: Pos2 },
}

/// Configuration for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Cumulative pointer travel, in logical units, required before a
    /// press turns into a pan. Anything below ends as a tap.
    pub min_pan_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_pan_distance: 1.0,
        }
    }
}

/// Classifies raw press/move/release events into pans and taps.
///
/// The two are mutually exclusive: once a press accumulates enough
/// movement to become a pan it can never end as a tap, and a press that
/// never crosses the threshold emits no pan events at all. This keeps
/// jitter during a tap from producing zero-length strokes.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    pressed_at: Option<Pos2>,
    last_position: Option<Pos2>,
    travelled: f32,
    panning: bool,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Pointer went down; nothing is emitted until we know what this is.
    pub fn pointer_pressed(&mut self, position: Pos2) {
        self.pressed_at = Some(position);
        self.last_position = Some(position);
        self.travelled = 0.0;
        self.panning = false;
    }

    /// Pointer moved. May emit nothing (below threshold), a
    /// `PanStart` + `PanUpdate` pair (threshold just crossed), or a
    /// single `PanUpdate` (pan already in progress).
    pub fn pointer_moved(&mut self, position: Pos2) -> Vec<Gesture> {
        let Some(last) = self.last_position else {
            // Move without a press; not ours to interpret.
            return Vec::new();
        };
        if position == last {
            // Pointer held still; not an update event.
            return Vec::new();
        }

        self.travelled += (position - last).length();
        self.last_position = Some(position);

        if self.panning {
            return vec![Gesture::PanUpdate { position }];
        }

        if self.travelled >= self.config.min_pan_distance {
            self.panning = true;
            let start = self.pressed_at.unwrap_or(position);
            return vec![
                Gesture::PanStart { position: start },
                Gesture::PanUpdate { position },
            ];
        }

        Vec::new()
    }

    /// Pointer went up; resolves the press as pan end or tap.
    pub fn pointer_released(&mut self, position: Pos2) -> Option<Gesture> {
        let pressed_at = self.pressed_at.take()?;
        self.last_position = None;

        let gesture = if self.panning {
            Gesture::PanEnd { position }
        } else {
            Gesture::Tap {
                position: pressed_at,
            }
        };
        self.panning = false;
        self.travelled = 0.0;
        Some(gesture)
    }

    /// Whether a pan is currently in progress.
    pub fn is_panning(&self) -> bool {
        self.panning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn jitter_below_threshold_stays_a_tap() {
        let mut rec = GestureRecognizer::new();
        rec.pointer_pressed(pos2(10.0, 10.0));
        assert!(rec.pointer_moved(pos2(10.3, 10.0)).is_empty());
        assert!(rec.pointer_moved(pos2(10.3, 10.3)).is_empty());

        let gesture = rec.pointer_released(pos2(10.3, 10.3));
        assert_eq!(
            gesture,
            Some(Gesture::Tap {
                position: pos2(10.0, 10.0)
            })
        );
    }

    #[test]
    fn crossing_threshold_emits_start_at_press_position() {
        let mut rec = GestureRecognizer::new();
        rec.pointer_pressed(pos2(5.0, 5.0));

        let gestures = rec.pointer_moved(pos2(8.0, 5.0));
        assert_eq!(
            gestures,
            vec![
                Gesture::PanStart {
                    position: pos2(5.0, 5.0)
                },
                Gesture::PanUpdate {
                    position: pos2(8.0, 5.0)
                },
            ]
        );

        assert_eq!(
            rec.pointer_released(pos2(8.0, 5.0)),
            Some(Gesture::PanEnd {
                position: pos2(8.0, 5.0)
            })
        );
    }
}
