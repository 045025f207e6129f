mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        assert_relative_eq!(Mass::from_earth_masses(1.0).to_kg(), EARTH_MASS_KG);
        assert_relative_eq!(Mass::from_solar_masses(1.0).to_kg(), SOLAR_MASS_KG);
        assert_relative_eq!(Mass::from_kg(EARTH_MASS_KG * 3.0).to_earth_masses(), 3.0);
        assert_relative_eq!(
            Mass::from_solar_masses(1.0).to_earth_masses(),
            SOLAR_MASS_KG / EARTH_MASS_KG
        );
    }

    #[test]
    fn test_mass_arithmetic() {
        let m = Mass::from_kg(10.0);
        assert_relative_eq!((m + m).to_kg(), 20.0);
        assert_relative_eq!((m * 0.5).to_kg(), 5.0);
        assert_relative_eq!(m / Mass::from_kg(4.0), 2.5);
        assert_eq!(Mass::zero().to_kg(), 0.0);
    }
}
