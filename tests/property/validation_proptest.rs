//! Property-based tests for spot payload validation

use campmap::shared::{validate_new_spot, CoordinateInput, NewSpotRequest, SharedError};
use proptest::prelude::*;

fn request(latitude: CoordinateInput, longitude: CoordinateInput) -> NewSpotRequest {
    NewSpotRequest {
        name: Some("Bear Creek".to_string()),
        location: Some("Near Guanella Pass".to_string()),
        description: None,
        state: Some("CO".to_string()),
        latitude: Some(latitude),
        longitude: Some(longitude),
    }
}

proptest! {
    #[test]
    fn test_in_range_coordinates_are_accepted(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let spot = validate_new_spot(&request(lat.into(), lon.into())).unwrap();
        prop_assert_eq!(spot.latitude, lat);
        prop_assert_eq!(spot.longitude, lon);
    }

    #[test]
    fn test_numeric_strings_match_numbers(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let from_text = validate_new_spot(&request(
            CoordinateInput::Text(lat.to_string()),
            CoordinateInput::Text(lon.to_string()),
        ))
        .unwrap();
        prop_assert_eq!(from_text.latitude, lat);
        prop_assert_eq!(from_text.longitude, lon);
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected(
        lat in prop_oneof![90.000001f64..1e9, -1e9f64..-90.000001],
    ) {
        let err = validate_new_spot(&request(lat.into(), 0.0.into())).unwrap_err();
        prop_assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn test_non_numeric_text_is_rejected(text in "[a-zA-Z][a-zA-Z ]{0,12}") {
        // "inf", "nan" and friends parse as f64 but are not finite
        let err = validate_new_spot(&request(CoordinateInput::Text(text), 0.0.into())).unwrap_err();
        prop_assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn test_state_is_stored_upper_case(state in "[a-zA-Z]{2}") {
        let mut req = request(39.6.into(), (-105.3).into());
        req.state = Some(state.clone());
        let spot = validate_new_spot(&req).unwrap();
        prop_assert_eq!(spot.state, state.to_ascii_uppercase());
    }

    #[test]
    fn test_blank_name_is_missing(blank in "[ \t]{0,5}") {
        let mut req = request(39.6.into(), (-105.3).into());
        req.name = Some(blank);
        let err = validate_new_spot(&req).unwrap_err();
        prop_assert_eq!(err, SharedError::missing_field("name"));
    }
}
