use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// Unit vector pointing from `from` towards `to`.
///
/// Returns `None` when the points coincide (or the difference is not finite), since such a
/// vector has no direction to normalize to.
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Signed rotation that turns `heading` towards `target` the short way round.
///
/// The result always lies in `(-PI, PI]`, so `heading + shortest_rotation(target, heading)`
/// is `target` shifted by whole turns. Non-finite input yields `0.0`.
pub fn shortest_rotation(target: f32, heading: f32) -> f32 {
    let delta = target - heading;
    if !delta.is_finite() {
        return 0.0;
    }

    // rem_euclid can round up to TAU itself, so the result is in [-PI, PI]
    let wrapped = (delta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Moves `start` towards `end` by at most `shift`, never overshooting.
pub fn approach(start: f32, end: f32, shift: f32) -> f32 {
    if start < end {
        return end.min(start + shift);
    }

    end.max(start - shift)
}

/// Heading angle of a direction vector, measured from the +x axis.
pub fn heading_of(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn direction_to_is_unit_length() {
        let dir = direction_to(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)).unwrap();

        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(dir.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(dir.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn direction_to_same_point_is_none() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(direction_to(p, p), None);
    }

    #[test]
    fn direction_to_non_finite_is_none() {
        assert_eq!(direction_to(Vec2::ZERO, Vec2::new(f32::NAN, 1.0)), None);
    }

    #[test]
    fn squared_distance_matches_distance() {
        let a = Vec2::new(3.0, 0.0);
        let b = Vec2::new(0.0, 4.0);

        assert_abs_diff_eq!(a.distance(b), 5.0);
        assert_abs_diff_eq!(a.distance_squared(b), 25.0);
        assert_abs_diff_eq!((a - b).length_squared(), 25.0);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(1.0, 0.0, 1.0)]
    #[case(-1.0, 0.0, -1.0)]
    #[case(3.0 * PI / 2.0, 0.0, -PI / 2.0)]
    #[case(-3.0 * PI / 2.0, 0.0, PI / 2.0)]
    #[case(0.1, 2.0 * TAU + 0.2, -0.1)]
    #[case(PI - 0.1, -PI + 0.1, -0.2)]
    fn shortest_rotation_turns_the_short_way(
        #[case] target: f32,
        #[case] heading: f32,
        #[case] expected: f32,
    ) {
        assert_abs_diff_eq!(shortest_rotation(target, heading), expected, epsilon = 1e-4);
    }

    #[test]
    fn shortest_rotation_half_turn_is_positive() {
        assert_abs_diff_eq!(shortest_rotation(-PI, 0.0), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(shortest_rotation(PI, 0.0), PI, epsilon = 1e-6);
    }

    #[test]
    fn shortest_rotation_stays_in_half_open_range() {
        let samples = [
            -1e10, -50.0, -7.5, -PI, -1.0, 0.0, 0.5, PI, 4.0, 13.0, 77.7, 1e6, 1e10,
        ];

        for &target in &samples {
            for &heading in &samples {
                let delta = shortest_rotation(target, heading);
                assert!(
                    -PI < delta && delta <= PI,
                    "delta {delta} out of range for target {target}, heading {heading}"
                );
            }
        }
    }

    #[rstest]
    #[case(0.0, 1.0, 0.1, 0.1)]
    #[case(0.0, 0.05, 0.1, 0.05)]
    #[case(0.0, -1.0, 0.1, -0.1)]
    #[case(0.0, -0.05, 0.1, -0.05)]
    #[case(2.0, 2.0, 0.1, 2.0)]
    fn approach_never_overshoots(
        #[case] start: f32,
        #[case] end: f32,
        #[case] shift: f32,
        #[case] expected: f32,
    ) {
        assert_abs_diff_eq!(approach(start, end, shift), expected);
    }

    #[test]
    fn shortest_rotation_of_non_finite_is_zero() {
        assert_eq!(shortest_rotation(0.0, f32::INFINITY), 0.0);
        assert_eq!(shortest_rotation(f32::NEG_INFINITY, 0.0), 0.0);
        assert_eq!(shortest_rotation(f32::NAN, 1.0), 0.0);
    }

    #[test]
    fn heading_of_axes() {
        assert_abs_diff_eq!(heading_of(Vec2::X), 0.0);
        assert_abs_diff_eq!(heading_of(Vec2::Y), PI / 2.0);
        assert_abs_diff_eq!(heading_of(Vec2::NEG_X), PI);
    }
}
