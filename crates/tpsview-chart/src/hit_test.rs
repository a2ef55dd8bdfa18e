//! Pointer → sample lookup.

use tpsview_core::Sample;

use crate::transform::{ChartTransform, Point};

/// Default pointer tolerance in pixels.
pub const DEFAULT_HOVER_RADIUS: f64 = 8.0;

/// First sample, in index order, whose marker lies within `radius` of
/// `pointer`.
///
/// This is a forward scan, not a nearest-neighbour search: when markers
/// overlap, the earlier sample wins. Invalid samples have no marker and are
/// never returned.
pub fn hit_test<'a>(
    samples: &'a [Sample],
    transform: &ChartTransform,
    pointer: Point,
    radius: f64,
) -> Option<&'a Sample> {
    samples.iter().find(|sample| {
        transform
            .point_for(sample.index, sample.value)
            .is_some_and(|at| at.distance(pointer) <= radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Margins, Size};

    fn series(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| Sample {
                index,
                timestamp: format!("t{index}"),
                value: *value,
                participants: vec![],
            })
            .collect()
    }

    fn transform_for(samples: &[Sample]) -> ChartTransform {
        ChartTransform::new(Size::default(), Margins::default(), samples.len())
    }

    #[test]
    fn test_empty_sequence_has_no_hit() {
        let t = transform_for(&[]);
        assert!(hit_test(&[], &t, Point::new(60.0, 40.0), 8.0).is_none());
    }

    #[test]
    fn test_exact_marker_position_hits() {
        let samples = series(&[19.5, 4.0, 20.0]);
        let t = transform_for(&samples);
        for sample in &samples {
            let at = t.point_for(sample.index, sample.value).unwrap();
            assert_eq!(hit_test(&samples, &t, at, 8.0), Some(sample));
        }
    }

    #[test]
    fn test_radius_is_inclusive() {
        let samples = series(&[10.0]);
        let t = transform_for(&samples);
        // Marker at (60, 240).
        assert!(hit_test(&samples, &t, Point::new(68.0, 240.0), 8.0).is_some());
        assert!(hit_test(&samples, &t, Point::new(68.01, 240.0), 8.0).is_none());
    }

    #[test]
    fn test_first_match_wins_over_nearest() {
        // 200 samples over 990px puts neighbours ~5px apart.
        let samples = series(&vec![15.0; 200]);
        let t = transform_for(&samples);
        let second = t.point_for(1, 15.0).unwrap();
        let hit = hit_test(&samples, &t, second, 8.0).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_invalid_samples_are_skipped() {
        let samples = series(&[f64::NAN, 12.0]);
        let t = transform_for(&samples);
        // Where the NaN sample would sit if it were at the top edge.
        assert!(hit_test(&samples, &t, Point::new(60.0, 40.0), 8.0).is_none());
        // Scanning past the invalid sample still finds the next one.
        let second = t.point_for(1, 12.0).unwrap();
        assert_eq!(hit_test(&samples, &t, second, 8.0).map(|s| s.index), Some(1));
    }

    #[test]
    fn test_round_trip_self_consistency() {
        let values: Vec<f64> = (0..60).map(|i| (i as f64 * 7.3) % 22.0).collect();
        let samples = series(&values);
        let t = transform_for(&samples);
        for sample in &samples {
            let at = t.point_for(sample.index, sample.value).unwrap();
            let hit = hit_test(&samples, &t, at, DEFAULT_HOVER_RADIUS).unwrap();
            let expected = samples
                .iter()
                .find(|s| t.point_for(s.index, s.value).unwrap().distance(at) <= DEFAULT_HOVER_RADIUS)
                .unwrap();
            assert_eq!(hit.index, expected.index);
            assert!(hit.index <= sample.index);
        }
    }

    #[test]
    fn test_pointer_outside_graph_misses() {
        let samples = series(&[19.0, 18.0]);
        let t = transform_for(&samples);
        assert!(hit_test(&samples, &t, Point::new(1150.0, 20.0), 8.0).is_none());
    }
}
