//! Rebuild the same corner of the universe twice and check it matches
//!
//! Usage:
//!   cargo run -p cosmos --example seed_stability -- [seed phrase]

use std::sync::Arc;

use cosmos::{AtlasConfig, ManualClock, Universe};

fn main() -> Result<(), cosmos::CosmosError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let phrase = std::env::args().nth(1).unwrap_or_else(|| "42".to_string());
    let config = AtlasConfig::new(phrase, 0);
    let first = Universe::with_clock(&config, Arc::new(ManualClock::new(0.0)));
    let second = Universe::with_clock(&config, Arc::new(ManualClock::new(0.0)));

    let mut checked = 0;
    for x in 0..4 {
        let a = first.get_galaxy(x, x * 1_000, 0)?;
        let b = second.get_galaxy(x, x * 1_000, 0)?;
        assert_eq!(a.snapshot(), b.snapshot());

        for index in 0..5 {
            let sa = a.get_solar_system(index)?;
            let sb = b.get_solar_system(index)?;
            assert_eq!(sa.snapshot(), sb.snapshot());
            assert_eq!(sa.planets(), sb.planets());
            checked += sa.planet_count();
        }
        println!("{:<28} {:<10} ok", a.name(), a.class());
    }

    println!("{checked} planets identical across both universes");
    println!("config fingerprint {}", config.fingerprint());
    Ok(())
}
