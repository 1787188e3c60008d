//! credit-engine CLI
//!
//! Score seasonal revenue and structure loans from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Score a revenue series from a JSON file
//! credit-engine score --input revenue.json
//!
//! # Blend with a bureau score, output as JSON
//! credit-engine score --input revenue.json --bureau 680 --format json
//!
//! # Project a repayment calendar for a 300,000 loan
//! credit-engine calendar --input revenue.json --amount 300000
//!
//! # Rank lender offers
//! credit-engine offers --input revenue.json --amount 300000
//!
//! # Emit a named seasonal pattern for testing
//! credit-engine generate --pattern festival_retail
//! ```

use credit_engine::core::lender::LenderCatalog;
use credit_engine::core::revenue::RevenueSeries;
use credit_engine::scoring::bureau::BureauBlender;
use credit_engine::scoring::season_score::ScoreCalculator;
use credit_engine::simulation::patterns::{generate_random_series, pattern_names, pattern_series, PatternConfig};
use credit_engine::structuring::offers::OfferRanker;
use credit_engine::structuring::repayment::RepaymentSimulator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"credit-engine — seasonal-revenue credit scoring and loan structuring

USAGE:
    credit-engine <COMMAND> [OPTIONS]

COMMANDS:
    score       Compute the season score for a revenue series
    calendar    Project a twelve-month repayment calendar
    offers      Rank lender offers by effective cost
    generate    Emit a seasonal revenue series (for testing)
    help        Show this message

OPTIONS (score, calendar, offers):
    --input <FILE>      Path to JSON revenue file
    --bureau <SCORE>    Optional external bureau score (300-900)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (calendar, offers):
    --amount <AMOUNT>   Requested loan amount

OPTIONS (calendar):
    --rate <PERCENT>    Override the score-derived annual rate

OPTIONS (generate):
    --pattern <NAME>    Named pattern: festival_retail, agriculture,
                        coaching, catering, tourism, firecracker,
                        wedding, religious
    --random            Generate a random seasonal series instead
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    credit-engine score --input revenue.json
    credit-engine score --input revenue.json --bureau 680 --format json
    credit-engine calendar --input revenue.json --amount 300000
    credit-engine offers --input revenue.json --amount 300000 --bureau 720
    credit-engine generate --pattern festival_retail --output revenue.json"#
    );
}

/// JSON schema for input revenue files.
#[derive(serde::Deserialize)]
struct RevenueFile {
    revenue: Vec<String>,
}

#[derive(serde::Serialize)]
struct RevenueOutput {
    revenue: Vec<String>,
}

/// Options shared by the score/calendar/offers commands.
struct EngineArgs {
    input_path: Option<String>,
    bureau: Option<u32>,
    amount: Option<Decimal>,
    rate: Option<Decimal>,
    format: String,
}

fn parse_engine_args(args: &[String]) -> EngineArgs {
    let mut parsed = EngineArgs {
        input_path: None,
        bureau: None,
        amount: None,
        rate: None,
        format: "text".to_string(),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                parsed.input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--bureau" => {
                i += 1;
                parsed.bureau = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(
                    || {
                        eprintln!("--bureau requires a number");
                        process::exit(1);
                    },
                ));
            }
            "--amount" => {
                i += 1;
                parsed.amount = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(
                    || {
                        eprintln!("--amount requires a positive number");
                        process::exit(1);
                    },
                ));
            }
            "--rate" => {
                i += 1;
                parsed.rate = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(
                    || {
                        eprintln!("--rate requires a number");
                        process::exit(1);
                    },
                ));
            }
            "--format" => {
                i += 1;
                parsed.format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

fn load_revenue(path: &str) -> RevenueSeries {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: RevenueFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "revenue": ["45000", "42000", "38000", "35000", "40000", "38000",
              "42000", "55000", "120000", "340000", "380000", "95000"]
}}"#
        );
        process::exit(1);
    });

    let mut values = Vec::with_capacity(file.revenue.len());
    for raw in &file.revenue {
        let value: Decimal = raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid revenue value '{}': {}", raw, e);
            process::exit(1);
        });
        values.push(value);
    }

    RevenueSeries::new(values).unwrap_or_else(|e| {
        eprintln!("Invalid revenue series: {}", e);
        process::exit(1);
    })
}

fn require_input(parsed: &EngineArgs) -> RevenueSeries {
    let path = parsed.input_path.clone().unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });
    load_revenue(&path)
}

fn require_amount(parsed: &EngineArgs) -> Decimal {
    let amount = parsed.amount.unwrap_or_else(|| {
        eprintln!("Error: --amount <AMOUNT> is required");
        process::exit(1);
    });
    if amount <= Decimal::ZERO {
        eprintln!("Error: --amount must be positive");
        process::exit(1);
    }
    amount
}

fn cmd_score(args: &[String]) {
    let parsed = parse_engine_args(args);
    let series = require_input(&parsed);

    let season = ScoreCalculator::score(&series).unwrap_or_else(|e| {
        eprintln!("Scoring failed: {}", e);
        process::exit(1);
    });
    let blended = BureauBlender::blend(&season, parsed.bureau);

    if parsed.format == "json" {
        println!("{}", serde_json::to_string_pretty(&blended).unwrap());
    } else {
        println!("{}", blended.breakdown);
        println!("Scoring method: {}", blended.scoring_method);
        if let Some(band) = blended.bureau_band {
            println!("Bureau band:    {}", band);
        }
    }
}

fn cmd_calendar(args: &[String]) {
    let parsed = parse_engine_args(args);
    let series = require_input(&parsed);
    let amount = require_amount(&parsed);

    // Rate precedence: explicit --rate, else the blended tier, else the
    // 16% fallback used for ineligible applicants.
    let rate = match parsed.rate {
        Some(rate) => rate,
        None => {
            let season = ScoreCalculator::score(&series).unwrap_or_else(|e| {
                eprintln!("Scoring failed: {}", e);
                process::exit(1);
            });
            BureauBlender::blend(&season, parsed.bureau)
                .rate()
                .unwrap_or(dec!(16))
        }
    };

    let calendar = RepaymentSimulator::simulate(amount, rate, &series);

    if parsed.format == "json" {
        println!("{}", serde_json::to_string_pretty(&calendar).unwrap());
    } else {
        println!("{}", calendar);
    }
}

fn cmd_offers(args: &[String]) {
    let parsed = parse_engine_args(args);
    let series = require_input(&parsed);
    let amount = require_amount(&parsed);

    let season = ScoreCalculator::score(&series).unwrap_or_else(|e| {
        eprintln!("Scoring failed: {}", e);
        process::exit(1);
    });
    let blended = BureauBlender::blend(&season, parsed.bureau);

    let catalog = LenderCatalog::default();
    let offers = OfferRanker::rank(blended.total(), amount, &catalog);

    if parsed.format == "json" {
        println!("{}", serde_json::to_string_pretty(&offers).unwrap());
    } else if offers.is_empty() {
        println!(
            "No offers: score {} is below the eligibility threshold.",
            blended.total()
        );
    } else {
        println!("Score {} — {} offers:", blended.total(), offers.len());
        for (i, offer) in offers.iter().enumerate() {
            println!("  {}. {}", i + 1, offer);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut pattern: Option<String> = None;
    let mut random = false;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pattern" => {
                i += 1;
                pattern = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--pattern requires a name");
                    process::exit(1);
                }));
            }
            "--random" => {
                random = true;
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let series = if random {
        generate_random_series(&PatternConfig::default())
    } else {
        let name = pattern.unwrap_or_else(|| {
            eprintln!("Error: --pattern <NAME> or --random is required");
            process::exit(1);
        });
        pattern_series(&name).unwrap_or_else(|| {
            eprintln!(
                "Unknown pattern '{}'. Available: {}",
                name,
                pattern_names().join(", ")
            );
            process::exit(1);
        })
    };

    let output = RevenueOutput {
        revenue: series.months().iter().map(|v| v.to_string()).collect(),
    };
    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Wrote 12-month series → {}", path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "score" => cmd_score(rest),
        "calendar" => cmd_calendar(rest),
        "offers" => cmd_offers(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
