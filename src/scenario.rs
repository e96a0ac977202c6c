use crate::constants::{GUN_AVAILABLE_YEAR, SCENARIO_END_YEAR};

/// Story lines shown under the year counter.
const PHRASES: [(u32, &str); 9] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
    (SCENARIO_END_YEAR, "The orbit is clean. Well done!"),
];

/// Ticks between two garbage spawns, keyed by `[from, until)` year ranges.
const GARBAGE_DELAYS: [(u32, u32, u32); 6] = [
    (1961, 1969, 20),
    (1969, 1981, 14),
    (1981, 1995, 10),
    (1995, 2010, 8),
    (2010, 2020, 6),
    (2020, SCENARIO_END_YEAR, 2),
];

pub fn phrase_for(year: u32) -> Option<&'static str> {
    PHRASES.iter().find(|(phrase_year, _)| *phrase_year == year).map(|(_, phrase)| *phrase)
}

/// `None` before the garbage starts falling and after the scenario ends.
pub fn garbage_delay_ticks(year: u32) -> Option<u32> {
    GARBAGE_DELAYS
        .iter()
        .find(|(from, until, _)| (*from..*until).contains(&year))
        .map(|(_, _, delay)| *delay)
}

pub fn gun_available(year: u32) -> bool {
    year >= GUN_AVAILABLE_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases() {
        assert_eq!(phrase_for(1957), Some("First Sputnik"));
        assert_eq!(phrase_for(2020), Some("Take the plasma gun! Shoot the garbage!"));
        assert_eq!(phrase_for(1958), None);
    }

    #[test]
    fn test_garbage_delays() {
        assert_eq!(garbage_delay_ticks(1957), None);
        assert_eq!(garbage_delay_ticks(1960), None);
        assert_eq!(garbage_delay_ticks(1961), Some(20));
        assert_eq!(garbage_delay_ticks(1968), Some(20));
        assert_eq!(garbage_delay_ticks(1969), Some(14));
        assert_eq!(garbage_delay_ticks(2019), Some(6));
        assert_eq!(garbage_delay_ticks(2099), Some(2));
        assert_eq!(garbage_delay_ticks(SCENARIO_END_YEAR), None);
    }

    #[test]
    fn test_gun_unlocks() {
        assert!(!gun_available(2019));
        assert!(gun_available(2020));
        assert!(gun_available(2050));
    }
}
