use csd::{decode, encode_fixed_nonzero, encode_places, encode_places_with, Csd, EncodeOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Canonical Signed Digit Demo ===\n");

    println!("Fixed fractional places:\n");
    for (value, places) in [(28.5, 2), (-0.5, 2), (0.7071, 8), (100.125, 4)] {
        match encode_places(value, places) {
            Ok(csd) => match decode(&csd) {
                Ok(back) => println!("  {value:>8} ({places} places) -> {csd:<16} -> {back}"),
                Err(e) => println!("  {value:>8} -> {csd}: decode error: {e}"),
            },
            Err(e) => println!("  {value:>8}: encode error: {e}"),
        }
    }

    println!("\nNon-zero digit budget:\n");
    for budget in 1..=5 {
        match Csd::from_nonzero_budget(0.7071, budget) {
            Ok(csd) => println!(
                "  0.7071 (budget {budget}) -> {:<14} = {:<12} nonzero={}",
                csd,
                csd.to_f64(),
                csd.nonzero_count()
            ),
            Err(e) => println!("  budget {budget}: encode error: {e}"),
        }
    }

    println!("\nReference vectors:\n");
    let checks = [
        ("encode_places(28.5, 2)", encode_places(28.5, 2).ok(), "+00-00.+0"),
        ("encode_places(-0.5, 2)", encode_places(-0.5, 2).ok(), "0.-0"),
        (
            "encode_fixed_nonzero(28.5, 4)",
            encode_fixed_nonzero(28.5, 4).ok(),
            "+00-00.+",
        ),
        (
            "encode_fixed_nonzero(-0.5, 4)",
            encode_fixed_nonzero(-0.5, 4).ok(),
            "0.-",
        ),
    ];
    for (name, got, expected) in checks {
        if got.as_deref() == Some(expected) {
            println!("  ✓ {name} == {expected:?}");
        } else {
            println!("  ✗ {name} == {got:?}, expected {expected:?}");
        }
    }

    println!("\nMalformed input:\n");
    for input in ["+0x-", "+.0."] {
        match decode(input) {
            Ok(value) => println!("  {input:?} unexpectedly decoded to {value}"),
            Err(e) => println!("  {input:?}: {e}"),
        }
    }

    println!("\nTraced encoding of 28.5 (set RUST_LOG=debug to see each digit):\n");
    let options = EncodeOptions::new().with_trace(true);
    match encode_places_with(28.5, 2, &options) {
        Ok(csd) => println!("  28.5 -> {csd}"),
        Err(e) => println!("  encode error: {e}"),
    }

    println!("\n=== Demo Complete ===");
}
