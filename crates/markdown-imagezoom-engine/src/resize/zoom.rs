/// Lower zoom clamp, percent.
pub const MIN_ZOOM: u32 = 10;
/// Upper zoom clamp, percent.
pub const MAX_ZOOM: u32 = 500;
/// Zoom percentage points per pixel of radial pointer movement.
pub const DEFAULT_SENSITIVITY: f64 = 0.2;

/// Tunables for the drag-to-zoom math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Percentage points of zoom per pixel of radial distance change.
    pub sensitivity: f64,
    pub min_zoom: u32,
    pub max_zoom: u32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl ZoomSettings {
    /// Zoom for a pointer at `current_distance` from the image center, given
    /// the distance and zoom recorded at arm time. Radial movement away from
    /// the center enlarges, toward it shrinks.
    pub fn zoom_for_distance(
        &self,
        baseline_zoom: u32,
        baseline_distance: f64,
        current_distance: f64,
    ) -> u32 {
        let delta = (current_distance - baseline_distance) * self.sensitivity;
        self.clamp((baseline_zoom as f64 + delta).round() as i64)
    }

    /// Clamps a zoom value into the configured range. Floor wins over
    /// ceiling if the settings were constructed inverted.
    pub fn clamp(&self, zoom: i64) -> u32 {
        zoom.min(self.max_zoom as i64).max(self.min_zoom as i64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, 100.0, 100.0, 100)] // no movement
    #[case(100, 100.0, 350.0, 150)] // +250px out = +50
    #[case(100, 350.0, 100.0, 50)] // 250px in = -50
    #[case(80, 100.0, 200.0, 100)] // baseline from existing zoom
    #[case(100, 100.0, 10_000.0, 500)] // clamped high
    #[case(100, 10_000.0, 0.0, 10)] // clamped low
    #[case(500, 0.0, 10_000.0, 500)] // already at ceiling
    #[case(10, 10_000.0, 0.0, 10)] // already at floor
    fn zoom_for_distance_cases(
        #[case] baseline_zoom: u32,
        #[case] baseline_distance: f64,
        #[case] current_distance: f64,
        #[case] expected: u32,
    ) {
        let settings = ZoomSettings::default();
        assert_eq!(
            settings.zoom_for_distance(baseline_zoom, baseline_distance, current_distance),
            expected
        );
    }

    #[test]
    fn result_is_always_within_bounds() {
        let settings = ZoomSettings::default();
        for baseline in [10u32, 80, 100, 250, 500] {
            for delta in [-100_000.0, -500.0, -1.0, 0.0, 1.0, 500.0, 100_000.0] {
                let zoom = settings.zoom_for_distance(baseline, 1_000.0, 1_000.0 + delta);
                assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom), "zoom {zoom} escaped clamp");
            }
        }
    }

    #[test]
    fn fractional_deltas_round_to_nearest() {
        let settings = ZoomSettings::default();
        // 12px * 0.2 = 2.4 -> 102; 13px * 0.2 = 2.6 -> 103
        assert_eq!(settings.zoom_for_distance(100, 0.0, 12.0), 102);
        assert_eq!(settings.zoom_for_distance(100, 0.0, 13.0), 103);
    }

    #[test]
    fn custom_sensitivity_scales_delta() {
        let settings = ZoomSettings {
            sensitivity: 1.0,
            ..ZoomSettings::default()
        };
        assert_eq!(settings.zoom_for_distance(100, 0.0, 50.0), 150);
    }
}
