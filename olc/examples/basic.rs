//! Basic example demonstrating olc library usage.
//!
//! Run with: cargo run --example basic -- [length]

use olc::{OlcCodec, OlcError};
use std::env;

fn main() -> Result<(), OlcError> {
    // Get code length from command line
    let length = env::args()
        .nth(1)
        .map(|arg| {
            arg.parse().unwrap_or_else(|_| {
                eprintln!("Usage: cargo run --example basic -- [length]");
                std::process::exit(1);
            })
        })
        .unwrap_or(olc::DEFAULT_CODE_LENGTH);

    let codec = OlcCodec::builder().code_length(length).build()?;

    // Encode some well-known places
    let locations = [
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Mount Everest, Nepal", 27.9881, 86.9250),
        ("Denali, Alaska", 63.0695, -151.0074),
        ("North Pole", 90.0, 0.0),
    ];

    println!("Plus Codes ({} characters):", codec.code_length());
    println!("{:-<60}", "");

    for (name, lat, lon) in &locations {
        let code = codec.encode_degrees(*lat, *lon)?;
        let area = codec.decode(&code)?;
        let (center_lat, center_lon) = area.center_degrees();
        println!(
            "{}: {} (center {:.6}, {:.6})",
            name, code, center_lat, center_lon
        );
        println!("  {}", olc::maps_url(&code));
    }

    Ok(())
}
