use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::address::Address;
use crate::coordinates::Coordinates;
use crate::error::CosmosError;

fn coords(x: u64, y: u64, z: u64) -> Coordinates {
    Coordinates::new(x, y, z).unwrap()
}

fn token(query: &str) -> String {
    URL_SAFE.encode(query)
}

#[test]
fn test_query_forms() {
    let c = coords(1, 2, 3);
    assert_eq!(Address::galaxy(c).query(), "coordinates=1,2,3");
    assert_eq!(Address::system(c, 4).query(), "coordinates=1,2,3&system=4");
    assert_eq!(
        Address::planet(c, 4, "Kaelon K-042").with_page(2).query(),
        "coordinates=1,2,3&system=4&planet=kaelon_k-042&page=2"
    );
}

#[test]
fn test_encode_decode() {
    let address = Address::planet(coords(10, 0, 9_999_999), 12, "Vestia Original").with_page(3);
    let encoded = address.encode();

    assert_eq!(encoded.len() % 4, 0);
    assert_eq!(Address::decode(&encoded).unwrap(), address);
    assert_eq!(encoded.parse::<Address>().unwrap(), address);
    assert_eq!(address.to_string(), encoded);
}

#[test]
fn test_page_without_system() {
    let decoded = Address::decode(&token("coordinates=5,6,7&page=1")).unwrap();
    assert_eq!(decoded, Address::galaxy(coords(5, 6, 7)).with_page(1));
}

#[test]
fn test_planet_name_is_lowercased() {
    let decoded = Address::decode(&token("coordinates=1,1,1&system=0&planet=ABC_x-1")).unwrap();
    assert_eq!(decoded.planet.as_deref(), Some("abc_x-1"));
}

#[test]
fn test_rejects_bad_token_length() {
    let err = Address::decode("abc").unwrap_err();
    assert!(matches!(err, CosmosError::InvalidAddress(_)));
    assert!(Address::decode("").is_err());
}

#[test]
fn test_rejects_non_base64() {
    assert!(matches!(
        Address::decode("!!!!").unwrap_err(),
        CosmosError::InvalidAddress(_)
    ));
}

#[test]
fn test_rejects_malformed_queries() {
    let bad = [
        "system=1",
        "coordinates=1,2",
        "coordinates=1,2,3,4",
        "coordinates=+1,2,3",
        "coordinates=1,2,3&planet=abc",
        "coordinates=1,2,3&system=1&planet=a b",
        "coordinates=1,2,3&system=x",
        "coordinates=1,2,3&page=1&system=1",
        "coordinates=1,2,3&color=red",
    ];
    for query in bad {
        let err = Address::decode(&token(query)).unwrap_err();
        assert!(
            matches!(err, CosmosError::InvalidAddress(_)),
            "{query} gave {err:?}"
        );
    }
}

#[test]
fn test_out_of_universe_coordinates() {
    let err = Address::decode(&token("coordinates=10000001,0,0")).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn test_huge_coordinates_report_a_positive_axis() {
    let err = Address::parse_query("coordinates=18446744073709551615,0,0").unwrap_err();
    match err {
        CosmosError::CoordinatesOutOfRange { x, y, z, .. } => {
            assert_eq!((x, y, z), (i64::MAX, 0, 0));
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}
