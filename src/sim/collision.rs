//! Circle overlap tests
//!
//! Everything that collides in the arena is a circle: the player's contact
//! disc, the sword tip and every monster body.

use glam::Vec2;

/// True iff the two discs overlap or touch
#[inline]
pub fn circles_intersect(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let radius_sum = r1 + r2;
    c1.distance_squared(c2) <= radius_sum * radius_sum
}

/// Indices of every circle in `others` touched by the query disc
pub fn overlapping<I>(center: Vec2, radius: f32, others: I) -> impl Iterator<Item = usize>
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    others
        .into_iter()
        .enumerate()
        .filter(move |&(_, (c, r))| circles_intersect(center, radius, c, r))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_counts() {
        // 3-4-5 triangle: exact boundary
        assert!(circles_intersect(Vec2::ZERO, 2.0, Vec2::new(3.0, 4.0), 3.0));
        assert!(!circles_intersect(Vec2::ZERO, 2.0, Vec2::new(3.0, 4.0), 2.9));
    }

    #[test]
    fn test_concentric() {
        assert!(circles_intersect(Vec2::new(7.0, 7.0), 0.0, Vec2::new(7.0, 7.0), 0.0));
    }

    #[test]
    fn test_overlapping_indices() {
        let bodies = [
            (Vec2::new(10.0, 0.0), 5.0),
            (Vec2::new(100.0, 0.0), 5.0),
            (Vec2::new(0.0, -12.0), 3.0),
        ];
        let hits: Vec<usize> = overlapping(Vec2::ZERO, 10.0, bodies).collect();
        assert_eq!(hits, vec![0, 2]);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            x1 in -1000.0f32..1000.0, y1 in -1000.0f32..1000.0, r1 in 0.0f32..100.0,
            x2 in -1000.0f32..1000.0, y2 in -1000.0f32..1000.0, r2 in 0.0f32..100.0,
        ) {
            let a = Vec2::new(x1, y1);
            let b = Vec2::new(x2, y2);
            prop_assert_eq!(circles_intersect(a, r1, b, r2), circles_intersect(b, r2, a, r1));
        }

        #[test]
        fn prop_axis_aligned_boundary_inclusive(d in 0u32..200, r1 in 0u32..100, r2 in 0u32..100) {
            // Small integers keep every square exact in f32
            let hit = circles_intersect(Vec2::ZERO, r1 as f32, Vec2::new(d as f32, 0.0), r2 as f32);
            prop_assert_eq!(hit, d <= r1 + r2);
        }
    }
}
