//! Human-readable reports

use wf_core::{Color, Column, Dozen, Sector, WheelNumber};
use wf_predict::PredictionResult;
use wf_stats::{CountStat, Statistics, Streak};

/// Numbers listed in the frequency table
const TOP_NUMBERS: usize = 10;

pub fn print_statistics(stats: &Statistics) {
    println!("📊 Statistics over {} spins\n", stats.total_spins);

    println!("Colors");
    for color in Color::ALL {
        print_count(color.name(), stats.colors.get(color));
    }

    println!("\nMost frequent");
    for f in stats.most_frequent(TOP_NUMBERS) {
        println!(
            "  {:>2}  {:>8}  {:>6.2}%  gap {}",
            f.number, f.count, f.percentage, f.gap
        );
    }

    println!("\nDozens");
    for dozen in Dozen::ALL {
        let d = stats.dozens.get(dozen);
        println!(
            "  {:<18} {:>8}  {:>6.2}%  longest run {}",
            dozen.label(),
            d.count,
            d.percentage,
            d.streak
        );
    }
    print_count("zero", stats.dozens.zero);

    println!("\nColumns");
    for column in Column::ALL {
        print_count(column.label(), stats.columns.get(column));
    }

    println!("\nRanges");
    print_count("1-18", stats.ranges.low);
    print_count("19-36", stats.ranges.high);
    print_count("odd", stats.ranges.odd);
    print_count("even", stats.ranges.even);

    println!("\nSectors");
    for sector in Sector::ALL {
        print_count(sector.name(), stats.sectors.get(sector));
    }

    println!("\nStreaks (current / longest)");
    let s = &stats.streaks;
    print_streak("red", s.red);
    print_streak("black", s.black);
    print_streak("odd", s.odd);
    print_streak("even", s.even);
    for dozen in Dozen::ALL {
        print_streak(dozen.label(), s.dozens.get(dozen));
    }
}

pub fn print_prediction(anchor: Option<WheelNumber>, recent: &[WheelNumber], result: &PredictionResult) {
    match anchor.or_else(|| recent.last().copied()) {
        Some(n) => println!("🎯 Prediction after {} ({} recent spins)\n", n, recent.len()),
        None => println!("🎯 Prediction from overall frequencies\n"),
    }

    for (rank, p) in result.top_predictions.iter().enumerate() {
        let reasons: Vec<&str> = p.reasoning.iter().map(|r| r.as_str()).collect();
        println!(
            "  {}. {:>2}  {:>2}%  {}",
            rank + 1,
            p.number,
            p.confidence,
            reasons.join(", ")
        );
    }

    println!();
    println!("  hot        {}", join(&result.hot_numbers));
    println!("  cold       {}", join(&result.cold_numbers));
    if !result.neighbors.is_empty() {
        println!("  neighbors  {}", join(&result.neighbors));
    }
}

fn print_count(label: &str, stat: CountStat) {
    println!("  {:<18} {:>8}  {:>6.2}%", label, stat.count, stat.percentage);
}

fn print_streak(label: &str, streak: Streak) {
    println!("  {:<18} {:>3} / {}", label, streak.current, streak.longest);
}

fn join(numbers: &[WheelNumber]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
