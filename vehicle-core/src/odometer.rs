//! Bounded odometer counters
//!
//! Both vehicle odometers roll over at a fixed capacity. The rollover does not
//! follow plain modulo arithmetic: for every full capacity contained in the
//! driven distance, the counter drops by `capacity + 1`. The number of
//! rollovers is derived from the distance alone, so a counter that was already
//! close to its capacity can end up above it after a short drive, and a
//! distance just above a multiple of the capacity can leave it below zero.
//!
//! Existing odometer readings depend on this exact behavior, so it is kept
//! as-is rather than replaced by `%`.

/// Capacity of the total-distance odometer, in kilometers
pub const ODOMETER_CAPACITY: i64 = 999_999;

/// Capacity of the daily (trip) odometer, in kilometers
pub const DAILY_ODOMETER_CAPACITY: i64 = 999;

/// Advance a bounded counter by `distance`
///
/// Computes `overflow = floor(distance / capacity)` and returns
/// `(value + distance) - (capacity * overflow + overflow)`.
///
/// The result is not clamped: it may be negative or above `capacity`, and is
/// carried as-is into the next advance. A non-positive `capacity` counts no
/// overflows and returns the plain sum.
///
/// # Example
/// ```
/// use vehicle_core::odometer::{advance, DAILY_ODOMETER_CAPACITY};
///
/// assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 2600), 600);
/// assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 1000), 0);
/// assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 1998), -2);
/// ```
pub fn advance(value: i64, capacity: i64, distance: u32) -> i64 {
    let distance = i64::from(distance);
    if capacity <= 0 {
        return value.saturating_add(distance);
    }

    let overflow_times = distance / capacity;
    let result = value
        .saturating_add(distance)
        .saturating_sub(capacity * overflow_times + overflow_times);

    if result < 0 {
        log::trace!(
            "Odometer advanced below zero: value={}, capacity={}, distance={} -> {}",
            value,
            capacity,
            distance,
            result
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_overflow() {
        assert_eq!(advance(0, ODOMETER_CAPACITY, 0), 0);
        assert_eq!(advance(0, ODOMETER_CAPACITY, 15), 15);
        assert_eq!(advance(100, ODOMETER_CAPACITY, 50), 150);
        assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 998), 998);
    }

    #[test]
    fn test_advance_subtracts_one_extra_per_overflow() {
        // Plain modulo would give 1 and 2 here
        assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 1000), 0);
        assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 2600), 600);
        assert_eq!(advance(0, ODOMETER_CAPACITY, 1_000_000), 0);
        assert_eq!(advance(0, ODOMETER_CAPACITY, 2_600_000), 600_000);
    }

    #[test]
    fn test_advance_exact_capacity() {
        // One overflow counted, capacity + 1 subtracted
        assert_eq!(advance(0, DAILY_ODOMETER_CAPACITY, 999), -1);
        assert_eq!(advance(10, DAILY_ODOMETER_CAPACITY, 999), 9);
    }

    #[test]
    fn test_overflow_count_ignores_current_value() {
        // 998 + 5 is above capacity but the distance alone never overflows
        assert_eq!(advance(998, DAILY_ODOMETER_CAPACITY, 5), 1003);
    }

    #[test]
    fn test_negative_result_carries_into_next_advance() {
        // 1998 = 2 * 999, so 2 * 1000 is subtracted
        let after_first = advance(0, DAILY_ODOMETER_CAPACITY, 1998);
        assert_eq!(after_first, -2);
        assert_eq!(advance(after_first, DAILY_ODOMETER_CAPACITY, 5), 3);

        assert_eq!(advance(5, DAILY_ODOMETER_CAPACITY, 1998), 3);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(advance(7, 0, 3), 10);
        assert_eq!(advance(i64::MAX, 0, 3), i64::MAX);
    }

    #[test]
    fn test_large_distances() {
        // floor(u32::MAX / 999_999) = 4294; 4294967295 - 4294 * 1_000_000
        assert_eq!(advance(0, ODOMETER_CAPACITY, u32::MAX), 967_295);
    }
}
