use crate::constants::{ACCELERATION_FACTOR, SPEED_DEAD_ZONE};
use crate::error::GameError;

fn validate_direction(direction: i32) -> Result<(), GameError> {
    match direction {
        -1..=1 => Ok(()),
        _ => Err(GameError::InvalidDirection(direction)),
    }
}

fn apply_acceleration(speed: f64, speed_limit: f64, forward: bool) -> f64 {
    // Fast response from rest, gentle near the limit
    let delta = (speed.abs() / speed_limit).cos() * ACCELERATION_FACTOR;
    if forward { speed + delta } else { speed - delta }
}

/// Advance one axis of speed by one tick.
///
/// Fading is applied every tick, acceleration only when `direction` is
/// non-zero. The result is clamped to `[-limit, limit]` and snapped to
/// zero inside the dead zone.
pub fn update_speed(speed: f64, direction: i32, limit: f64, fading: f64) -> Result<f64, GameError> {
    validate_direction(direction)?;
    if !(0.0..=1.0).contains(&fading) {
        return Err(GameError::InvalidFading(fading));
    }
    let limit = limit.abs();
    if limit == 0.0 || !limit.is_finite() {
        return Err(GameError::InvalidSpeedLimit(limit));
    }

    let mut result = speed * fading;
    if direction != 0 {
        result = apply_acceleration(result, limit, direction > 0);
    }
    result = result.max(-limit).min(limit);

    if result.abs() < SPEED_DEAD_ZONE {
        result = 0.0;
    }
    Ok(result)
}

/// Velocity of the ship on both axes together with its tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    pub row_speed: f64,
    pub column_speed: f64,
    pub row_speed_limit: f64,
    pub column_speed_limit: f64,
    pub fading: f64,
}

impl Kinematics {
    pub fn new(row_speed_limit: f64, column_speed_limit: f64, fading: f64) -> Self {
        Kinematics {
            row_speed: 0.0,
            column_speed: 0.0,
            row_speed_limit,
            column_speed_limit,
            fading,
        }
    }

    /// Apply one tick of input, returning the new `(row_speed, column_speed)`.
    pub fn update(&mut self, rows_direction: i32, columns_direction: i32) -> Result<(f64, f64), GameError> {
        // Validate both axes before touching state
        validate_direction(rows_direction)?;
        validate_direction(columns_direction)?;
        self.row_speed = update_speed(self.row_speed, rows_direction, self.row_speed_limit, self.fading)?;
        self.column_speed = update_speed(self.column_speed, columns_direction, self.column_speed_limit, self.fading)?;
        Ok((self.row_speed, self.column_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accelerates_fast_from_rest() {
        let speed = update_speed(0.0, 1, 2.0, 0.8).unwrap();
        assert!((speed - 0.75).abs() < 1e-9);
        let speed = update_speed(0.0, -1, 2.0, 0.8).unwrap();
        assert!((speed + 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_acceleration_follows_cosine_curve() {
        let speed = update_speed(1.5, 1, 2.0, 0.8).unwrap();
        let faded: f64 = 1.5 * 0.8;
        let expected = faded + (faded / 2.0).cos() * 0.75;
        assert!((speed - expected).abs() < 1e-9);
    }

    #[test]
    fn test_braking_slows_down() {
        let speed = update_speed(2.0, -1, 2.0, 0.8).unwrap();
        let expected = 1.6 - (0.8f64).cos() * 0.75;
        assert!((speed - expected).abs() < 1e-9);
    }

    #[test]
    fn test_speed_is_clamped_to_limit() {
        let mut speed = 0.0;
        for _ in 0..50 {
            speed = update_speed(speed, 1, 2.0, 1.0).unwrap();
        }
        assert_eq!(speed, 2.0);
    }

    #[test]
    fn test_fading_without_input() {
        let speed = update_speed(1.0, 0, 2.0, 0.8).unwrap();
        assert!((speed - 0.8).abs() < 1e-9);
        let speed = update_speed(-1.0, 0, 2.0, 0.8).unwrap();
        assert!((speed + 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_dead_zone_snaps_to_zero() {
        assert_eq!(update_speed(0.1, 0, 2.0, 0.8).unwrap(), 0.0);
        // 0.9375 fades to 0.75, braking removes cos(0.375) * 0.75 ~ 0.698
        assert_eq!(update_speed(0.9375, -1, 2.0, 0.8).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_direction() {
        assert!(matches!(update_speed(0.0, 2, 2.0, 0.8), Err(GameError::InvalidDirection(2))));
        assert!(matches!(update_speed(0.0, -3, 2.0, 0.8), Err(GameError::InvalidDirection(-3))));
    }

    #[test]
    fn test_rejects_invalid_fading() {
        assert!(matches!(update_speed(0.0, 0, 2.0, 1.5), Err(GameError::InvalidFading(_))));
        assert!(matches!(update_speed(0.0, 0, 2.0, -0.1), Err(GameError::InvalidFading(_))));
    }

    #[test]
    fn test_rejects_zero_limit() {
        assert!(matches!(update_speed(0.0, 1, 0.0, 0.8), Err(GameError::InvalidSpeedLimit(_))));
    }

    #[test]
    fn test_kinematics_leaves_state_on_error() {
        let mut kinematics = Kinematics::new(2.0, 2.0, 0.8);
        kinematics.update(1, 1).unwrap();
        let before = kinematics;
        assert!(kinematics.update(1, 5).is_err());
        assert_eq!(kinematics, before);
    }

    #[test]
    fn test_kinematics_axes_are_independent() {
        let mut kinematics = Kinematics::new(2.0, 2.0, 0.8);
        let (row_speed, column_speed) = kinematics.update(-1, 0).unwrap();
        assert!(row_speed < 0.0);
        assert_eq!(column_speed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_result_within_limit(speed in -5.0..5.0f64, direction in -1..=1i32, limit in 0.5..4.0f64, fading in 0.0..=1.0f64) {
            let result = update_speed(speed, direction, limit, fading).unwrap();
            prop_assert!(result >= -limit && result <= limit);
        }

        #[test]
        fn prop_result_outside_dead_zone(speed in -5.0..5.0f64, direction in -1..=1i32, fading in 0.0..=1.0f64) {
            let result = update_speed(speed, direction, 2.0, fading).unwrap();
            prop_assert!(result == 0.0 || result.abs() >= 0.1);
        }

        #[test]
        fn prop_no_input_only_fades(speed in -2.0..2.0f64) {
            let result = update_speed(speed, 0, 2.0, 0.8).unwrap();
            prop_assert!(result.abs() <= speed.abs());
            prop_assert!(result == 0.0 || result.signum() == speed.signum());
            if (speed * 0.8).abs() >= 0.1 {
                prop_assert!((result - speed * 0.8).abs() < 1e-12);
            }
        }

        #[test]
        fn prop_invalid_direction_is_rejected(direction in prop_oneof![-100..-1i32, 2..100i32]) {
            prop_assert!(update_speed(0.0, direction, 2.0, 0.8).is_err());
        }
    }
}
