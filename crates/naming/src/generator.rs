use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use seed_chain::Seed;
use serde::{Deserialize, Serialize};

use crate::words::{
    GALAXY_PREFIXES, GALAXY_SUFFIXES, PLANET_PREFIXES, PLANET_SUFFIXES, SYSTEM_FIRST, SYSTEM_LAST,
    SYSTEM_LINK,
};

/// ChaCha stream reserved for names
const NAME_STREAM: u64 = 7;

/// Chance that a galaxy or planet is called "Original" instead of a designation
const ORIGINAL_CHANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameKind {
    Galaxy,
    System,
    Planet,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            NameKind::Galaxy => "galaxy",
            NameKind::System => "system",
            NameKind::Planet => "planet",
        };
        write!(f, "{}", str)
    }
}

/// Generate the display name of an entity from its seed
///
/// * galaxies and planets: `"PrefixSuffix L-nnn"`, or `"PrefixSuffix Original"`
///   for one name in a hundred
/// * systems: `"Word link Word lnnn"`
pub fn generate_name(seed: &Seed, kind: NameKind) -> String {
    let mut rng = seed.rng_stream(NAME_STREAM);

    match kind {
        NameKind::System => system_name(&mut rng),
        NameKind::Galaxy => compound_name(&mut rng, GALAXY_PREFIXES, GALAXY_SUFFIXES),
        NameKind::Planet => compound_name(&mut rng, PLANET_PREFIXES, PLANET_SUFFIXES),
    }
}

/// Lowercase, URL-safe form of a name: spaces and punctuation become `_`
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => '_',
        })
        .collect()
}

fn compound_name(rng: &mut ChaChaRng, prefixes: &[&str], suffixes: &[&str]) -> String {
    let prefix = pick(rng, prefixes);
    let suffix = pick(rng, suffixes);

    if rng.random::<f64>() < ORIGINAL_CHANCE {
        format!("{prefix}{suffix} Original")
    } else {
        let letter = random_letter(rng, b'A');
        let number = rng.random_range(1..=999u32);
        format!("{prefix}{suffix} {letter}-{number:03}")
    }
}

fn system_name(rng: &mut ChaChaRng) -> String {
    let first = pick(rng, SYSTEM_FIRST);
    let link = pick(rng, SYSTEM_LINK);
    let last = pick(rng, SYSTEM_LAST);
    let letter = random_letter(rng, b'a');
    let number = rng.random_range(1..=999u32);
    format!("{first} {link} {last} {letter}{number:03}")
}

fn pick<'a>(rng: &mut ChaChaRng, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

fn random_letter(rng: &mut ChaChaRng, base: u8) -> char {
    char::from(base + rng.random_range(0..26u8))
}
