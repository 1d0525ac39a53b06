//! Embedded new-moon conjunction ephemeris.
//!
//! Geocentric conjunction instants, JD (TT), bucketed by the Gregorian
//! year of the instant. Generated offline from the same truncated
//! ELP2000-82 series the library uses for lunar positions.

use hilal_hijri::NewMoonTable;

static NEW_MOONS: [(i32, &[f64]); 3] = [
    (
        2024,
        &[
            2460320.99872,
            2460350.45844,
            2460379.87580,
            2460409.26538,
            2460438.64108,
            2460468.02719,
            2460497.45705,
            2460526.96816,
            2460556.58136,
            2460586.28483,
            2460616.03344,
            2460645.76538,
            2460675.43581,
        ],
    ),
    (
        2025,
        &[
            2460705.02580,
            2460734.53205,
            2460763.95775,
            2460793.31400,
            2460822.62719,
            2460851.93900,
            2460881.30011,
            2460910.75567,
            2460940.32997,
            2460970.01817,
            2460999.78344,
            2461029.57233,
        ],
    ),
    (
        2026,
        &[
            2461059.32858,
            2461089.00150,
            2461118.55845,
            2461147.99525,
            2461177.33483,
            2461206.62164,
            2461235.90636,
            2461265.23483,
            2461294.64456,
            2461324.16053,
            2461353.79386,
            2461383.53692,
        ],
    ),
];

/// The embedded table as a [`NewMoonTable`].
pub fn new_moon_table() -> NewMoonTable {
    NewMoonTable::new(NEW_MOONS.iter().map(|&(year, jds)| (year, jds.to_vec())))
}

/// Every embedded conjunction, sorted.
pub fn all_conjunctions() -> Vec<f64> {
    let mut all: Vec<f64> = NEW_MOONS
        .iter()
        .flat_map(|&(_, jds)| jds.iter().copied())
        .collect();
    all.sort_by(f64::total_cmp);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunctions_are_about_a_synodic_month_apart() {
        let all = all_conjunctions();
        assert!(all.len() >= 36);
        for pair in all.windows(2) {
            let gap = pair[1] - pair[0];
            assert!((29.2..=29.9).contains(&gap), "gap: {gap}");
        }
    }
}
