//! Generate a handful of planets from one system seed and print their attributes
//!
//! Usage:
//!   cargo run -p planetary --example generate_planets -- [seed phrase]

use planetary::generate_planet;
use seed_chain::SeedChain;
use units::PhysicalConstants;

fn main() {
    let phrase = std::env::args().nth(1).unwrap_or_else(|| "42".to_string());
    let chain = SeedChain::from_phrase(&phrase);
    let constants = PhysicalConstants::standard();

    let galaxy = chain.galaxy(0, 0, 0);
    let system = chain.solar_system(&galaxy, 0);

    println!("Seed phrase: {phrase}");
    println!();

    for index in 0..6 {
        let slot = chain.planet_slot(&system, index);
        let name = format!("Survey {index}");
        let planet = generate_planet(&chain, &constants, &slot, &name);

        println!("{} ({})", planet.name, planet.kind);
        println!("  atmosphere:   {}", planet.atmosphere);
        println!("  diameter:     {:.0} km", planet.physique.diameter.to_km());
        println!("  mass:         {:.3} M⊕", planet.physique.mass.to_earth_masses());
        println!("  gravity:      {:.2} m/s²", planet.physique.gravity);
        println!("  temperature:  {:.1} °C", planet.surface_temperature_celsius());
        println!(
            "  orbit:        {:.2} AU, {:.1} days",
            planet.orbit.radius_au(),
            planet.orbit.period.to_days()
        );
        println!(
            "  day length:   {:.1} h, tilt {:.1}°",
            planet.rotation.period.to_hours(),
            planet.rotation.axial_tilt
        );
        println!("  elements:     {}", planet.elements.join(", "));
        println!("  life:         {}", planet.life);
        println!("  rings:        {}", if planet.has_rings { "yes" } else { "no" });
        println!();
    }
}
