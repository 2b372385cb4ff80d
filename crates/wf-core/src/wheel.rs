//! European wheel topology
//!
//! Physical pocket order, color sets, named sectors and the per-number
//! neighbor table. Downstream charts and sector legends depend on these
//! memberships matching a real single-zero wheel exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::{POCKET_COUNT, WheelNumber};

macro_rules! numbers {
    ($($n:literal),* $(,)?) => {
        [$(WheelNumber($n)),*]
    };
}

/// Pockets in physical clockwise order, starting at zero
pub const WHEEL_ORDER: [WheelNumber; POCKET_COUNT] = numbers![
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub const RED_NUMBERS: [WheelNumber; 18] = numbers![
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub const BLACK_NUMBERS: [WheelNumber; 18] = numbers![
    2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35,
];

/// Voisins du Zéro
pub const VOISINS_DU_ZERO: [WheelNumber; 17] = numbers![
    22, 18, 29, 7, 28, 12, 35, 3, 26, 0, 32, 15, 19, 4, 21, 2, 25,
];

/// Tiers du Cylindre
pub const TIERS_DU_CYLINDRE: [WheelNumber; 12] = numbers![
    27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33,
];

pub const ORPHELINS: [WheelNumber; 8] = numbers![17, 34, 6, 1, 20, 14, 31, 9];

/// Jeu Zéro
pub const ZERO_GAME: [WheelNumber; 7] = numbers![12, 35, 3, 26, 0, 32, 15];

/// Physical neighbors, indexed by number.
///
/// Reproduces the reference layout table verbatim, including its seam around
/// zero: 0 lists two neighbors, 32 and 26 list three.
static NEIGHBORS: [&[WheelNumber]; POCKET_COUNT] = [
    &numbers![32, 15],         // 0
    &numbers![33, 20, 14, 31], // 1
    &numbers![21, 25, 17, 34], // 2
    &numbers![35, 26, 0, 32],  // 3
    &numbers![19, 21, 2, 25],  // 4
    &numbers![10, 24, 16, 33], // 5
    &numbers![34, 27, 13, 36], // 6
    &numbers![29, 28, 12, 35], // 7
    &numbers![30, 23, 10, 5],  // 8
    &numbers![31, 22, 18, 29], // 9
    &numbers![23, 5, 24, 16],  // 10
    &numbers![36, 30, 8, 23],  // 11
    &numbers![28, 35, 3, 26],  // 12
    &numbers![27, 36, 11, 30], // 13
    &numbers![20, 31, 9, 22],  // 14
    &numbers![0, 32, 19, 4],   // 15
    &numbers![24, 33, 1, 20],  // 16
    &numbers![25, 34, 6, 27],  // 17
    &numbers![22, 29, 7, 28],  // 18
    &numbers![15, 4, 21, 2],   // 19
    &numbers![1, 14, 31, 9],   // 20
    &numbers![4, 2, 25, 17],   // 21
    &numbers![9, 18, 29, 7],   // 22
    &numbers![8, 10, 5, 24],   // 23
    &numbers![5, 16, 33, 1],   // 24
    &numbers![2, 17, 34, 6],   // 25
    &numbers![3, 0, 32],       // 26
    &numbers![6, 13, 36, 11],  // 27
    &numbers![7, 12, 35, 3],   // 28
    &numbers![18, 7, 28, 12],  // 29
    &numbers![11, 8, 23, 10],  // 30
    &numbers![14, 9, 22, 18],  // 31
    &numbers![0, 15, 19],      // 32
    &numbers![16, 1, 20, 14],  // 33
    &numbers![17, 6, 27, 13],  // 34
    &numbers![12, 3, 26, 0],   // 35
    &numbers![13, 11, 30, 8],  // 36
];

/// Physical neighbors of `n` (2-4 numbers)
#[inline]
pub fn neighbors_of(n: WheelNumber) -> &'static [WheelNumber] {
    NEIGHBORS[n.index()]
}

/// Named racetrack sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sector {
    Voisins,
    Tiers,
    Orphelins,
    ZeroGame,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Voisins,
        Sector::Tiers,
        Sector::Orphelins,
        Sector::ZeroGame,
    ];

    pub fn numbers(self) -> &'static [WheelNumber] {
        match self {
            Sector::Voisins => &VOISINS_DU_ZERO,
            Sector::Tiers => &TIERS_DU_CYLINDRE,
            Sector::Orphelins => &ORPHELINS,
            Sector::ZeroGame => &ZERO_GAME,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Sector::Voisins => "Voisins du Zéro",
            Sector::Tiers => "Tiers du Cylindre",
            Sector::Orphelins => "Orphelins",
            Sector::ZeroGame => "Zero Game",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
