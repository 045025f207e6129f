//! Element sets: two characteristic elements plus a weighted draw from the
//! periodic table

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::kind::PlanetKind;

/// Number of canonical elements every planet carries
pub const PRESELECTED: usize = 2;
pub const MIN_ELEMENTS: usize = 5;
pub const MAX_ELEMENTS: usize = 10;

/// Relative occurrence weight of every element
///
/// The 118 elements in atomic-number order, followed by the compound and
/// mythical entries that element sets may also contain. Weights only need to
/// be positive; they are not normalized.
pub const PERIODIC_TABLE: &[(&str, f64)] = &[
    ("Hydrogen", 0.30),
    ("Helium", 0.20),
    ("Lithium", 1e-3),
    ("Beryllium", 5e-4),
    ("Boron", 5e-4),
    ("Carbon", 0.05),
    ("Nitrogen", 0.03),
    ("Oxygen", 0.06),
    ("Fluorine", 2e-3),
    ("Neon", 0.02),
    ("Sodium", 0.01),
    ("Magnesium", 0.03),
    ("Aluminum", 0.015),
    ("Silicon", 0.04),
    ("Phosphorus", 6e-3),
    ("Sulfur", 0.02),
    ("Chlorine", 6e-3),
    ("Argon", 8e-3),
    ("Potassium", 5e-3),
    ("Calcium", 0.015),
    ("Scandium", 5e-4),
    ("Titanium", 4e-3),
    ("Vanadium", 1e-3),
    ("Chromium", 3e-3),
    ("Manganese", 3e-3),
    ("Iron", 0.04),
    ("Cobalt", 2e-3),
    ("Nickel", 0.01),
    ("Copper", 2e-3),
    ("Zinc", 2e-3),
    ("Gallium", 5e-4),
    ("Germanium", 5e-4),
    ("Arsenic", 3e-4),
    ("Selenium", 3e-4),
    ("Bromine", 3e-4),
    ("Krypton", 5e-4),
    ("Rubidium", 3e-4),
    ("Strontium", 5e-4),
    ("Yttrium", 3e-4),
    ("Zirconium", 5e-4),
    ("Niobium", 2e-4),
    ("Molybdenum", 2e-4),
    ("Technetium", 1e-5),
    ("Ruthenium", 1e-4),
    ("Rhodium", 5e-5),
    ("Palladium", 1e-4),
    ("Silver", 1e-4),
    ("Cadmium", 1e-4),
    ("Indium", 5e-5),
    ("Tin", 2e-4),
    ("Antimony", 5e-5),
    ("Tellurium", 1e-4),
    ("Iodine", 5e-5),
    ("Xenon", 1e-4),
    ("Cesium", 5e-5),
    ("Barium", 2e-4),
    ("Lanthanum", 1e-4),
    ("Cerium", 1e-4),
    ("Praseodymium", 5e-5),
    ("Neodymium", 1e-4),
    ("Promethium", 1e-6),
    ("Samarium", 5e-5),
    ("Europium", 2e-5),
    ("Gadolinium", 5e-5),
    ("Terbium", 2e-5),
    ("Dysprosium", 5e-5),
    ("Holmium", 2e-5),
    ("Erbium", 3e-5),
    ("Thulium", 1e-5),
    ("Ytterbium", 3e-5),
    ("Lutetium", 1e-5),
    ("Hafnium", 3e-5),
    ("Tantalum", 2e-5),
    ("Tungsten", 5e-5),
    ("Rhenium", 1e-5),
    ("Osmium", 2e-5),
    ("Iridium", 2e-5),
    ("Platinum", 5e-5),
    ("Gold", 3e-5),
    ("Mercury", 3e-5),
    ("Thallium", 1e-5),
    ("Lead", 1e-4),
    ("Bismuth", 1e-5),
    ("Polonium", 1e-6),
    ("Astatine", 1e-7),
    ("Radon", 1e-6),
    ("Francium", 1e-7),
    ("Radium", 1e-6),
    ("Actinium", 1e-6),
    ("Thorium", 5e-5),
    ("Protactinium", 1e-6),
    ("Uranium", 3e-5),
    ("Neptunium", 1e-7),
    ("Plutonium", 1e-7),
    ("Americium", 1e-8),
    ("Curium", 1e-8),
    ("Berkelium", 1e-8),
    ("Californium", 1e-8),
    ("Einsteinium", 1e-8),
    ("Fermium", 1e-8),
    ("Mendelevium", 1e-8),
    ("Nobelium", 1e-8),
    ("Lawrencium", 1e-8),
    ("Rutherfordium", 1e-9),
    ("Dubnium", 1e-9),
    ("Seaborgium", 1e-9),
    ("Bohrium", 1e-9),
    ("Hassium", 1e-9),
    ("Meitnerium", 1e-9),
    ("Darmstadtium", 1e-9),
    ("Roentgenium", 1e-9),
    ("Copernicium", 1e-9),
    ("Nihonium", 1e-9),
    ("Flerovium", 1e-9),
    ("Moscovium", 1e-9),
    ("Livermorium", 1e-9),
    ("Tennessine", 1e-9),
    ("Oganesson", 1e-9),
    ("Water", 0.05),
    ("Methane", 0.02),
    ("Z-Divinium", 1e-9),
];

/// Weight of a named entry, if the table knows it
pub fn weight_of(name: &str) -> Option<f64> {
    PERIODIC_TABLE
        .iter()
        .find(|(element, _)| *element == name)
        .map(|(_, weight)| *weight)
}

/// Draw the element set of a planet
///
/// Two elements come from the kind's canonical list. The total size is drawn
/// in `5..=10`; the rest are weighted picks without replacement from
/// [`PERIODIC_TABLE`], skipping the preselected pair. The result never holds
/// duplicates.
pub fn sample_elements(kind: PlanetKind, rng: &mut ChaChaRng) -> Vec<String> {
    let canonical = kind.canonical_elements();
    let mut selected: Vec<&'static str> = canonical[..]
        .choose_multiple(rng, PRESELECTED)
        .copied()
        .collect();

    let total = rng.random_range(MIN_ELEMENTS..=MAX_ELEMENTS);

    let mut remaining: Vec<(&'static str, f64)> = PERIODIC_TABLE
        .iter()
        .filter(|(name, _)| !selected.contains(name))
        .copied()
        .collect();

    while selected.len() < total && !remaining.is_empty() {
        let Ok(weights) = WeightedIndex::new(remaining.iter().map(|(_, weight)| *weight)) else {
            break;
        };
        let (name, _) = remaining.remove(weights.sample(rng));
        selected.push(name);
    }

    selected.into_iter().map(String::from).collect()
}
