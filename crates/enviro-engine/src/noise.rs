//! Seeded noise source.
//!
//! Every stochastic-looking term in the synthesizer comes from
//! `seeded_unit`, a pure hash-like transform of an integer seed. Seeds are
//! composed from the analysis location and the calendar month, so the same
//! query replays the same series across processes and over time.

/// Fixed seed base for nation-wide series, which have no anchor point.
pub const NATIONAL_SEED: i64 = 924_571;

/// Reproducible pseudo-random value in `[0, 1)` from an integer seed.
///
/// Classic `frac(sin(seed * a + b) * c)` transform; approximately uniform
/// over the seed magnitudes used here (10^3 to 10^9).
pub fn seeded_unit(seed: i64) -> f64 {
    let x = ((seed as f64) * 12.9898 + 78.233).sin() * 43_758.5453;
    x - x.floor()
}

/// Seed base derived from a query point. Quantizes to ~11 m so that any two
/// distinguishable map clicks get distinct noise sequences.
pub fn location_seed(lat: f64, lon: f64) -> i64 {
    (lat * 10_000.0).round() as i64 + (lon * 10_000.0).round() as i64 * 100_000
}

/// Seed for one calendar month of one location's series. The uncertainty
/// draw for the same month uses `month_seed(..) + 1` to stay decorrelated
/// from the value draw.
pub fn month_seed(location: i64, year: i32, month: u32) -> i64 {
    location + year as i64 * 13 + month as i64 * 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_unit_in_unit_interval() {
        for seed in [-1_000_000_000i64, -12345, 0, 1, 999, 1_000_000, 987_654_321] {
            let v = seeded_unit(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} gave {v}");
        }
    }

    #[test]
    fn test_seeded_unit_reproducible() {
        assert_eq!(seeded_unit(42), seeded_unit(42));
        assert_eq!(seeded_unit(-7_733_102), seeded_unit(-7_733_102));
    }

    #[test]
    fn test_nearby_seeds_decorrelated() {
        let a = seeded_unit(1000);
        let b = seeded_unit(1001);
        assert!((a - b).abs() > 1e-6);
    }

    #[test]
    fn test_location_seed_distinguishes_points() {
        let a = location_seed(31.5204, 74.3587);
        let b = location_seed(31.5205, 74.3587);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rough_uniformity() {
        // Bucket 10k consecutive seeds into deciles; each should land within
        // a loose band around 1000.
        let mut buckets = [0usize; 10];
        for seed in 0..10_000i64 {
            let v = seeded_unit(seed);
            buckets[(v * 10.0) as usize] += 1;
        }
        for (i, count) in buckets.iter().enumerate() {
            assert!(
                (600..1400).contains(count),
                "decile {i} has {count} samples"
            );
        }
    }
}
