use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::star_class::{StarClass, StarColor};

#[test]
fn every_class_has_a_distinct_color() {
    let colors: HashSet<StarColor> = StarClass::ALL.iter().map(|c| c.color()).collect();
    assert_eq!(colors.len(), StarClass::ALL.len());
}

#[test]
fn radius_factors_match_the_class_table() {
    assert_eq!(StarClass::RedDwarf.radius_factor(), 0.5);
    assert_eq!(StarClass::YellowDwarf.radius_factor(), 1.0);
    assert_eq!(StarClass::BlueGiant.radius_factor(), 2.0);
    assert_eq!(StarClass::RedGiant.radius_factor(), 3.0);
    assert_eq!(StarClass::WhiteDwarf.radius_factor(), 0.3);
    assert_eq!(StarClass::NeutronStar.radius_factor(), 0.2);
}

#[test]
fn red_giants_are_orange() {
    assert_eq!(StarClass::RedGiant.color(), StarColor::Orange);
    assert_eq!(StarClass::RedGiant.color().to_string(), "orange");
    assert_eq!(StarClass::RedGiant.to_string(), "Red Giant");
}

#[test]
fn uniform_sampling_reaches_every_class() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let seen: HashSet<StarClass> = (0..500).map(|_| StarClass::sample(&mut rng)).collect();
    assert_eq!(seen.len(), 6);
}

#[test]
fn rgb_channels_follow_color_names() {
    let (r, _, b) = StarColor::Red.rgb();
    assert!(r > b);
    let (r, _, b) = StarColor::Blue.rgb();
    assert!(b > r);
}
