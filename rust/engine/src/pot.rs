/// One contested slice of the pot. Seats are listed in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotLayer {
    /// Chips in this layer.
    pub amount: u32,
    /// Seats eligible to win this layer: still contesting the hand and
    /// contributed up to this layer's level.
    pub eligible: Vec<usize>,
}

/// Splits a hand's wagers into main/side pots by contribution level.
///
/// Players who went all-in for less than the final wager can only win the
/// layers they paid into; folded players' chips stay in the layers they
/// reached but their seats are never eligible. Layer amounts always sum to
/// the sum of contributions.
#[derive(Debug, Clone)]
pub struct PotManager {
    layers: Vec<PotLayer>,
}

impl PotManager {
    /// Build pot layers from whole-hand contributions, indexed by seat.
    /// `contributions[seat] = (total wagered this hand, still contesting)`.
    pub fn from_contributions(contributions: &[(u32, bool)]) -> Self {
        let mut levels: Vec<u32> = contributions
            .iter()
            .map(|&(amount, _)| amount)
            .filter(|&amount| amount > 0)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut layers: Vec<PotLayer> = Vec::with_capacity(levels.len());
        let mut prev = 0u32;
        for &level in &levels {
            let mut amount = 0u32;
            let mut eligible = Vec::new();
            for (seat, &(contrib, contesting)) in contributions.iter().enumerate() {
                amount += contrib.min(level) - contrib.min(prev);
                if contesting && contrib >= level {
                    eligible.push(seat);
                }
            }
            layers.push(PotLayer { amount, eligible });
            prev = level;
        }

        // A layer nobody can contest (its only contributors folded) rolls
        // down into the nearest contested layer below it.
        let mut i = layers.len();
        while i > 1 {
            i -= 1;
            if layers[i].eligible.is_empty() {
                let orphan = layers.remove(i);
                layers[i - 1].amount += orphan.amount;
            }
        }

        Self { layers }
    }

    pub fn layers(&self) -> &[PotLayer] {
        &self.layers
    }

    pub fn total(&self) -> u32 {
        self.layers.iter().map(|l| l.amount).sum()
    }

    /// The layer every contributor is eligible for.
    pub fn main_pot(&self) -> u32 {
        self.layers.first().map(|l| l.amount).unwrap_or(0)
    }

    /// Restricted layers above the main pot, lowest first.
    pub fn side_pots(&self) -> Vec<u32> {
        self.layers.iter().skip(1).map(|l| l.amount).collect()
    }
}
