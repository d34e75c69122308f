use crate::{CoreError, Rating};

#[test]
fn test_rating_accepts_one_through_five() {
    for value in 1..=5 {
        let rating = Rating::new(value).unwrap();
        assert_eq!(rating.value(), value);
    }
}

#[test]
fn test_rating_rejects_zero() {
    // Zero is the "not rated yet" state of the review form
    let result = Rating::new(0);

    assert!(matches!(
        result,
        Err(CoreError::InvalidRating { value: 0, .. })
    ));
}

#[test]
fn test_rating_rejects_above_five() {
    let result = Rating::new(6);

    assert!(matches!(result, Err(CoreError::InvalidRating { .. })));
}

#[test]
fn test_rating_serde_round_trips_as_number() {
    let rating = Rating::new(4).unwrap();
    let json = serde_json::to_string(&rating).unwrap();

    assert_eq!(json, "4");
    assert_eq!(serde_json::from_str::<Rating>(&json).unwrap(), rating);
}

#[test]
fn test_rating_deserialize_rejects_out_of_range() {
    assert!(serde_json::from_str::<Rating>("0").is_err());
    assert!(serde_json::from_str::<Rating>("9").is_err());
}
