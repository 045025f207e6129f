//! Walk from a galaxy down to its planets and print what is found
//!
//! Usage:
//!   cargo run -p cosmos --example explore_universe -- [atlas.toml]
//!
//! Without a config file the universe uses seed "42" and starts now.
//! Set `RUST_LOG=cosmos=debug` to watch the lazy derivations.

use cosmos::{Address, AtlasConfig, PlanetQuery, Survey, Universe};
use planetary::LifeForm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AtlasConfig::load(path)?,
        None => AtlasConfig::starting_now("42"),
    };
    let universe = Universe::new(&config);

    let galaxy = universe.get_galaxy(4_200_000, 5_100_000, 4_900_000)?;
    println!("{} ({}) at {}", galaxy.name(), galaxy.class(), galaxy.coordinates());
    println!(
        "  {} systems, {} black holes, {} pulsars, {} quasars",
        galaxy.num_systems(),
        galaxy.black_holes(),
        galaxy.pulsars(),
        galaxy.quasars()
    );

    for index in 0..3 {
        let system = galaxy.get_solar_system(index)?;
        let stars: Vec<_> = system.stars().iter().map(|s| s.name()).collect();
        println!();
        println!("{} [{}: {}]", system.name(), system.multiplicity(), stars.join(", "));

        for planet in system.planets() {
            println!(
                "  {:<24} {:<18} {:>8.1} °C  life: {:<20} rings: {}",
                planet.name,
                planet.kind.to_string(),
                planet.surface_temperature_celsius(),
                planet.life.to_string(),
                if planet.has_rings { "yes" } else { "no" }
            );
        }
    }

    let query = PlanetQuery::life(LifeForm::IntelligentLife);
    let survey = Survey::galaxy(&galaxy, &query, 200);
    println!();
    println!(
        "Intelligent life on {} of {} planets in the first 200 systems",
        survey.stats.matches, survey.stats.planets_visited
    );
    if let Some(finding) = survey.findings.first() {
        let token = finding.address.encode();
        println!("  first: {} -> {}", finding.planet.name, token);
        let decoded: Address = token.parse()?;
        let location = universe.resolve(&decoded)?;
        if let Some(planet) = location.planet() {
            println!("  resolved back to {}", planet.name);
        }
    }

    Ok(())
}
