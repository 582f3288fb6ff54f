use sabafly_core::Snowflake;
use sabafly_token::Token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Session {
    token: Token,
}

#[test]
fn round_trips_through_wire_form() {
    let token = Token::new(Snowflake::new(1082025248330891388));
    let parsed: Token = token.to_string().parse().unwrap();

    assert_eq!(parsed, token);
    assert!(parsed.matches(&token));
    assert_eq!(parsed.created_at(), token.created_at());
}

#[test]
fn round_trips_inside_json() {
    let session = Session {
        token: Token::new(Snowflake::new(175928847299117063)),
    };
    let json = serde_json::to_string(&session).unwrap();
    assert!(json.starts_with("{\"token\":\""));

    let back: Session = serde_json::from_str(&json).unwrap();
    assert!(back.token.matches(&session.token));
}

#[test]
fn distinct_tokens_do_not_match() {
    let id = Snowflake::new(1);
    assert!(!Token::new(id).matches(&Token::new(id)));
}

#[test]
fn invalid_json_token_is_rejected() {
    assert!(serde_json::from_str::<Session>(r#"{"token":"only.two"}"#).is_err());
}
