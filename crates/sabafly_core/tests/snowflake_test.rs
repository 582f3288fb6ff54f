use sabafly_core::Snowflake;

#[test]
fn serializes_as_string() {
    let id = Snowflake::new(1082025248330891388);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"1082025248330891388\"");
}

#[test]
fn deserializes_from_string_or_number() {
    let from_str: Snowflake = serde_json::from_str("\"1082025248330891388\"").unwrap();
    let from_num: Snowflake = serde_json::from_str("1082025248330891388").unwrap();
    assert_eq!(from_str, from_num);
    assert_eq!(from_str.to_string(), "1082025248330891388");
}

#[test]
fn rejects_negative_numbers() {
    assert!(serde_json::from_str::<Snowflake>("-5").is_err());
}
