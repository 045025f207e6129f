use seed_chain::Seed;

use crate::generator::{generate_name, slug, NameKind};

fn seeds(count: usize) -> impl Iterator<Item = Seed> {
    (0..count).map(|i| Seed::from_phrase(&format!("name-{i}")))
}

#[test]
fn names_are_deterministic() {
    let seed = Seed::from_phrase("42");
    for kind in [NameKind::Galaxy, NameKind::System, NameKind::Planet] {
        assert_eq!(generate_name(&seed, kind), generate_name(&seed, kind));
    }
}

#[test]
fn galaxy_and_planet_names_have_two_parts() {
    for seed in seeds(200) {
        for kind in [NameKind::Galaxy, NameKind::Planet] {
            let name = generate_name(&seed, kind);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2, "unexpected name {name}");

            let designation = parts[1];
            if designation != "Original" {
                let (letter, number) = designation.split_at(1);
                assert!(letter.chars().all(|c| c.is_ascii_uppercase()));
                assert!(number.starts_with('-'));
                assert_eq!(number.len(), 4, "designation {designation}");
            }
        }
    }
}

#[test]
fn system_names_have_four_parts() {
    for seed in seeds(200) {
        let name = generate_name(&seed, NameKind::System);
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 4, "unexpected name {name}");

        let tag = parts[3];
        assert_eq!(tag.len(), 4);
        assert!(tag.chars().next().is_some_and(|c| c.is_ascii_lowercase()));
        assert!(tag[1..].chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn kinds_draw_from_different_lists() {
    let seed = Seed::from_phrase("kinds");
    assert_ne!(
        generate_name(&seed, NameKind::Galaxy),
        generate_name(&seed, NameKind::Planet)
    );
}

#[test]
fn original_names_are_rare() {
    let originals = seeds(2000)
        .filter(|seed| generate_name(seed, NameKind::Planet).ends_with("Original"))
        .count();
    assert!(originals < 100, "{originals} originals out of 2000");
}

#[test]
fn slug_is_url_safe() {
    assert_eq!(slug("Kaelon K-042"), "kaelon_k-042");
    assert_eq!(slug("Vestia Original"), "vestia_original");

    for seed in seeds(50) {
        let s = slug(&generate_name(&seed, NameKind::Planet));
        assert!(s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
    }
}
