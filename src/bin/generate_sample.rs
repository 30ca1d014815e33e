use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a deterministic sample trade export.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Where to write the JSON array.
    #[arg(default_value = "sample_trades.json")]
    output: PathBuf,
}

/// One row shaped like the market tool's JSON export: every number is a
/// string, exactly as scraped from the page.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow {
    title: String,
    image: String,
    buy_price: String,
    buy_time_ago: String,
    sell_price: String,
    sell_time_ago: String,
    from_location: String,
    to_location: String,
    profit: String,
    profit_percent: String,
    sold_per_day: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const CITIES: [&str; 7] = [
    "Bridgewatch",
    "Caerleon",
    "Fort Sterling",
    "Lymhurst",
    "Martlock",
    "Thetford",
    "Black Market",
];

const ITEMS: [(&str, &str, f64); 8] = [
    ("Adept's Bag", "T4_BAG", 1_500.0),
    ("Expert's Broadsword", "T5_MAIN_SWORD", 9_000.0),
    ("Master's Leather Jacket", "T6_ARMOR_LEATHER_SET1", 28_000.0),
    ("Journeyman's Cape", "T3_CAPE", 400.0),
    ("Grandmaster's Great Axe", "T7_2H_AXE", 95_000.0),
    ("Adept's Mercenary Hood", "T4_HEAD_LEATHER_SET1", 1_100.0),
    ("Expert's Fire Staff", "T5_MAIN_FIRESTAFF", 12_500.0),
    ("Elder's Plate Boots", "T8_SHOES_PLATE_SET1", 240_000.0),
];

fn time_ago(rng: &mut SimpleRng) -> String {
    let minutes = rng.range(1.0, 60.0 * 30.0) as u64;
    if minutes < 60 {
        format!("{minutes} min ago")
    } else {
        format!("{} h ago", minutes / 60)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(42);

    let mut rows = Vec::new();
    for &(title, id, base) in &ITEMS {
        for _ in 0..6 {
            let from = rng.pick(&CITIES);
            let mut to = rng.pick(&CITIES);
            while to == from {
                to = rng.pick(&CITIES);
            }

            let buy = (base * rng.range(0.8, 1.1)).round();
            let sell = (base * rng.range(0.85, 1.45)).round();
            let profit = sell - buy;

            rows.push(ExportRow {
                title: title.to_string(),
                image: format!("https://render.albiononline.com/v1/item/{id}.png"),
                buy_price: format!("{buy}"),
                buy_time_ago: time_ago(&mut rng),
                sell_price: format!("{sell}"),
                sell_time_ago: time_ago(&mut rng),
                from_location: from.to_string(),
                to_location: to.to_string(),
                profit: format!("{profit}"),
                profit_percent: format!("{:.1}", profit / buy * 100.0),
                sold_per_day: format!("{:.0}", rng.range(0.0, 400.0)),
            });
        }
    }

    let json = serde_json::to_string_pretty(&rows).context("serialising sample rows")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} trade records to {}",
        rows.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_output_path() {
        let args = Args::try_parse_from(["generate_sample"]).unwrap();
        assert_eq!(args.output, PathBuf::from("sample_trades.json"));
    }

    #[test]
    fn test_positional_output_path() {
        let args = Args::try_parse_from(["generate_sample", "out/trades.json"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out/trades.json"));
    }

    #[test]
    fn test_flags_are_not_taken_as_paths() {
        let err = Args::try_parse_from(["generate_sample", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let err = Args::try_parse_from(["generate_sample", "-o", "x.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
