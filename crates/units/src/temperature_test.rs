mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::Temperature;

    #[test]
    fn test_celsius_kelvin_conversion() {
        assert_relative_eq!(Temperature::from_celsius(0.0).to_kelvin(), 273.15);
        assert_relative_eq!(Temperature::from_kelvin(0.0).to_celsius(), -273.15);
        assert_relative_eq!(Temperature::from_celsius(-20.0).to_celsius(), -20.0);
    }

    #[test]
    fn test_ordering() {
        assert!(Temperature::from_celsius(50.0) > Temperature::from_celsius(-20.0));
    }
}
