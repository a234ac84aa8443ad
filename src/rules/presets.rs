use super::LifeRules;

// Bit n set = n neighbors.
const fn counts(list: &[u32]) -> u16 {
    let mut mask = 0;
    let mut i = 0;
    while i < list.len() {
        mask |= 1 << list[i];
        i += 1;
    }
    mask
}

impl LifeRules {
    /// Preset for Conway's classic Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::from_masks(counts(&[3]), counts(&[2, 3]))
    }

    /// HighLife variant (B36/S23) - has a self-replicating pattern
    pub const fn high_life() -> Self {
        Self::from_masks(counts(&[3, 6]), counts(&[2, 3]))
    }

    /// Day & Night variant (B3678/S34678)
    pub const fn day_and_night() -> Self {
        Self::from_masks(counts(&[3, 6, 7, 8]), counts(&[3, 4, 6, 7, 8]))
    }

    /// Majority vote over the 3x3 neighborhood (B5678/S45678)
    pub const fn majority() -> Self {
        Self::from_masks(counts(&[5, 6, 7, 8]), counts(&[4, 5, 6, 7, 8]))
    }
}
