//! Scoring and pacing rules
//!
//! Points scale with both the number of rows cleared and the current level;
//! the tick interval shrinks as the level rises, bottoming out at 50ms.

use blockfall_types::{
    LEVEL_THRESHOLD, POINTS_PER_LEVEL, TICK_INTERVALS_MS, TICK_INTERVAL_FLOOR_MS,
};

/// Points awarded for clearing `rows` rows at `level`
pub fn points_for_clear(rows: usize, level: u32) -> u32 {
    rows as u32 * POINTS_PER_LEVEL * level
}

/// Whether `score` has crossed the threshold for `level`
pub fn crossed_level_threshold(score: u32, level: u32) -> bool {
    score > level * LEVEL_THRESHOLD
}

/// Tick interval for a level, in milliseconds (level is 1-based)
pub fn tick_interval_ms(level: u32) -> u32 {
    if level == 0 {
        return TICK_INTERVALS_MS[0];
    }
    match TICK_INTERVALS_MS.get(level as usize - 1) {
        Some(&interval) => interval,
        None => TICK_INTERVAL_FLOOR_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_rows_and_level() {
        assert_eq!(points_for_clear(1, 1), 10);
        assert_eq!(points_for_clear(2, 1), 20);
        assert_eq!(points_for_clear(1, 5), 50);
        assert_eq!(points_for_clear(4, 3), 120);
        assert_eq!(points_for_clear(0, 9), 0);
    }

    #[test]
    fn test_level_threshold() {
        assert!(!crossed_level_threshold(300, 1));
        assert!(crossed_level_threshold(301, 1));
        assert!(!crossed_level_threshold(600, 2));
        assert!(crossed_level_threshold(601, 2));
    }

    #[test]
    fn test_tick_intervals() {
        assert_eq!(tick_interval_ms(1), 650);
        assert_eq!(tick_interval_ms(2), 600);
        assert_eq!(tick_interval_ms(8), 325);
        assert_eq!(tick_interval_ms(19), 50);
        assert_eq!(tick_interval_ms(25), 50); // floor past the table
    }
}
