//! Heuristic next-number prediction
//!
//! An entertainment heuristic: additive scores from wheel topology, recent
//! history and the statistics of a finished run. It has no predictive power
//! over a fair wheel.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use wf_core::{Color, POCKET_COUNT, WheelNumber};
use wf_stats::Statistics;

use crate::analysis::{RecentCounts, cold_numbers, hot_numbers};
use crate::neighbors::{math_neighbors, neighbor_set};
use crate::reason::Reason;

/// Ranked predictions per result
pub const PREDICTION_COUNT: usize = 5;

/// Hot and cold lists are cut to this length in the result
pub const DISPLAY_LIMIT: usize = 5;

// ═══════════════════════════════════════════════════════════════════════════════
// WEIGHTS
// ═══════════════════════════════════════════════════════════════════════════════

const HOT_RANK_WEIGHT: u32 = 12;
const PHYSICAL_NEIGHBOR_WEIGHT: u32 = 20;
const MATH_NEIGHBOR_WEIGHT: u32 = 8;
const DUE_WEIGHT: u32 = 6;
const COLOR_ALTERNATION_WEIGHT: u32 = 4;
const RECENT_BURST_WEIGHT: u32 = 3;

/// Due threshold is this fraction of the due window
const DUE_FACTOR: f64 = 0.6;
const DUE_WINDOW: usize = 50;

/// Recent occurrences above this earn the burst tag
const HIGH_RECENT_COUNT: usize = 2;

const MIN_CONFIDENCE: u32 = 15;
const MAX_CONFIDENCE: u32 = 95;
const RANDOM_CONFIDENCE: u8 = 10;

const GENERAL_BASE_CONFIDENCE: u8 = 60;
const GENERAL_CONFIDENCE_STEP: u8 = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════════

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub number: WheelNumber,
    /// 10-95
    pub confidence: u8,
    pub reasoning: Vec<Reason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub top_predictions: Vec<Prediction>,
    pub hot_numbers: Vec<WheelNumber>,
    pub cold_numbers: Vec<WheelNumber>,
    pub neighbors: Vec<WheelNumber>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCORING
// ═══════════════════════════════════════════════════════════════════════════════

/// Additive scores remembering the order numbers were first scored.
///
/// Ranking ties resolve by that order.
#[derive(Debug, Clone)]
struct ScoreBoard {
    scores: [u32; POCKET_COUNT],
    order: Vec<WheelNumber>,
}

impl ScoreBoard {
    fn new() -> Self {
        Self {
            scores: [0; POCKET_COUNT],
            order: Vec::with_capacity(POCKET_COUNT),
        }
    }

    fn add(&mut self, n: WheelNumber, points: u32) {
        if !self.order.contains(&n) {
            self.order.push(n);
        }
        self.scores[n.index()] += points;
    }

    /// Highest scores first, stable on ties
    fn ranked(&self) -> Vec<(WheelNumber, u32)> {
        let mut ranked: Vec<_> = self.order.iter().map(|&n| (n, self.scores[n.index()])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

fn confidence_for(score: u32) -> u8 {
    (score / 2).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Gap a number must exceed to count as due after `recent_len` spins
fn due_threshold(recent_len: usize) -> f64 {
    DUE_WINDOW.min(recent_len) as f64 * DUE_FACTOR
}

fn score_board(
    anchor: WheelNumber,
    stats: &Statistics,
    recent_counts: &RecentCounts,
    hot: &[WheelNumber],
    threshold: f64,
) -> ScoreBoard {
    let mut board = ScoreBoard::new();

    for (rank, &n) in hot.iter().enumerate() {
        board.add(n, (hot.len() - rank) as u32 * HOT_RANK_WEIGHT);
    }
    for &n in anchor.neighbors() {
        board.add(n, PHYSICAL_NEIGHBOR_WEIGHT);
    }
    for n in math_neighbors(anchor).into_iter().filter(|&n| n != anchor) {
        board.add(n, MATH_NEIGHBOR_WEIGHT);
    }
    for f in stats.numbers.iter().filter(|f| f.gap as f64 > threshold) {
        board.add(f.number, DUE_WEIGHT);
    }
    let anchor_color = anchor.color();
    for f in &stats.numbers {
        let color = f.number.color();
        if color != anchor_color && color != Color::Green {
            board.add(f.number, COLOR_ALTERNATION_WEIGHT);
        }
    }
    for (n, count) in recent_counts.iter() {
        board.add(n, count as u32 * RECENT_BURST_WEIGHT);
    }

    board
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Predict the next number.
///
/// `anchor` is the number just spun; without one the last of `recent` is
/// used. With neither, the result is built from frequencies alone.
pub fn predict(anchor: Option<WheelNumber>, stats: &Statistics, recent: &[WheelNumber]) -> PredictionResult {
    predict_with_rng(anchor, stats, recent, &mut rand::rng())
}

/// [`predict`] with an explicit RNG for the padding draw
pub fn predict_with_rng<R>(
    anchor: Option<WheelNumber>,
    stats: &Statistics,
    recent: &[WheelNumber],
    rng: &mut R,
) -> PredictionResult
where
    R: Rng + ?Sized,
{
    match anchor.or_else(|| recent.last().copied()) {
        Some(anchor) => anchored_prediction(anchor, stats, recent, rng),
        None => general_prediction(stats),
    }
}

/// Frequency-only prediction used when there is nothing to anchor on
pub fn general_prediction(stats: &Statistics) -> PredictionResult {
    let hot: Vec<WheelNumber> = stats.numbers.iter().take(DISPLAY_LIMIT).map(|f| f.number).collect();
    let cold: Vec<WheelNumber> = stats
        .numbers
        .iter()
        .rev()
        .take(DISPLAY_LIMIT)
        .map(|f| f.number)
        .collect();

    let top_predictions = hot
        .iter()
        .enumerate()
        .map(|(rank, &number)| Prediction {
            number,
            confidence: GENERAL_BASE_CONFIDENCE
                .saturating_sub(GENERAL_CONFIDENCE_STEP * rank as u8)
                .max(RANDOM_CONFIDENCE),
            reasoning: vec![Reason::MostFrequent],
        })
        .collect();

    PredictionResult {
        top_predictions,
        hot_numbers: hot,
        cold_numbers: cold,
        neighbors: Vec::new(),
    }
}

fn anchored_prediction<R>(
    anchor: WheelNumber,
    stats: &Statistics,
    recent: &[WheelNumber],
    rng: &mut R,
) -> PredictionResult
where
    R: Rng + ?Sized,
{
    let recent_counts = RecentCounts::new(recent);
    let hot = hot_numbers(stats, &recent_counts);
    let cold = cold_numbers(stats);
    let physical = anchor.neighbors();
    let numeric = math_neighbors(anchor);

    let threshold = due_threshold(recent.len());
    let is_due = |gap: usize| gap as f64 > threshold;
    let is_math_neighbor = |n: WheelNumber| n != anchor && numeric.contains(&n);

    let board = score_board(anchor, stats, &recent_counts, &hot, threshold);

    let mut top_predictions: Vec<Prediction> = board
        .ranked()
        .into_iter()
        .take(PREDICTION_COUNT)
        .map(|(number, score)| {
            let mut reasoning = Vec::new();
            if physical.contains(&number) {
                reasoning.push(Reason::PhysicalNeighbor);
            }
            if is_math_neighbor(number) {
                reasoning.push(Reason::MathematicalNeighbor);
            }
            if hot.contains(&number) {
                reasoning.push(Reason::HotNumber);
            }
            if recent_counts.get(number) > HIGH_RECENT_COUNT {
                reasoning.push(Reason::HighRecentFrequency);
            }
            if stats.frequency_of(number).is_some_and(|f| is_due(f.gap)) {
                reasoning.push(Reason::Due);
            }
            if reasoning.is_empty() {
                reasoning.push(Reason::StatisticalAnalysis);
            }
            Prediction {
                number,
                confidence: confidence_for(score),
                reasoning,
            }
        })
        .collect();

    pad_predictions(&mut top_predictions, rng);

    debug!(
        "Prediction anchored on {} over {} recent spins: {:?}",
        anchor,
        recent.len(),
        top_predictions.iter().map(|p| p.number.value()).collect::<Vec<_>>()
    );

    PredictionResult {
        top_predictions,
        hot_numbers: hot.into_iter().take(DISPLAY_LIMIT).collect(),
        cold_numbers: cold.into_iter().take(DISPLAY_LIMIT).collect(),
        neighbors: neighbor_set(anchor),
    }
}

/// Fill up to [`PREDICTION_COUNT`] with distinct random numbers
fn pad_predictions<R>(predictions: &mut Vec<Prediction>, rng: &mut R)
where
    R: Rng + ?Sized,
{
    while predictions.len() < PREDICTION_COUNT {
        let remaining: Vec<WheelNumber> = WheelNumber::all()
            .filter(|n| !predictions.iter().any(|p| p.number == *n))
            .collect();
        let Some(&number) = remaining.choose(rng) else {
            break;
        };
        predictions.push(Prediction {
            number,
            confidence: RANDOM_CONFIDENCE,
            reasoning: vec![Reason::RandomSelection],
        });
    }
}
