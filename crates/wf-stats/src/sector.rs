//! Racetrack sector hits
//!
//! Sectors overlap (Zero Game sits inside Voisins), so one spin can count
//! toward several of them.

use serde::{Deserialize, Serialize};

use wf_core::{Sector, WheelNumber};

use crate::tracker::{CountStat, SpinTracker};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorStats {
    pub voisins: CountStat,
    pub tiers: CountStat,
    pub orphelins: CountStat,
    pub zero_game: CountStat,
}

impl SectorStats {
    pub fn get(&self, sector: Sector) -> CountStat {
        match sector {
            Sector::Voisins => self.voisins,
            Sector::Tiers => self.tiers,
            Sector::Orphelins => self.orphelins,
            Sector::ZeroGame => self.zero_game,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectorTracker {
    counts: [usize; 4],
}

impl SpinTracker for SectorTracker {
    type Output = SectorStats;

    fn observe(&mut self, n: WheelNumber) {
        for sector in n.sectors() {
            self.counts[sector.index()] += 1;
        }
    }

    fn finish(&self, total: usize) -> SectorStats {
        let stat = |sector: Sector| CountStat::new(self.counts[sector.index()], total);
        SectorStats {
            voisins: stat(Sector::Voisins),
            tiers: stat(Sector::Tiers),
            orphelins: stat(Sector::Orphelins),
            zero_game: stat(Sector::ZeroGame),
        }
    }
}
