//! JSON backend tests

use objstream_core::prelude::*;
use objstream_core::{Expectation, TokenClass};
use serde_json::{Value, json};

fn read_one(text: &str) -> Result<Value> {
    let parser = Parser::new(JsonFormat);
    let mut events = parser.parse(text)?;
    DeserializeContext::new(parser.format()).execute(&EventDriven(JsonValueDeserializer), &mut events, 0)
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn documents_flatten_in_key_order() {
        let tokens = JsonFormat::tokens(json!({"z": 1, "a": [true, null], "m": {}}));
        assert_eq!(
            tokens,
            vec![
                JsonToken::ObjectStart,
                JsonToken::from("z"),
                JsonToken::Scalar(json!(1)),
                JsonToken::from("a"),
                JsonToken::ArrayStart,
                JsonToken::Scalar(json!(true)),
                JsonToken::Scalar(Value::Null),
                JsonToken::ArrayEnd,
                JsonToken::from("m"),
                JsonToken::ObjectStart,
                JsonToken::ObjectEnd,
                JsonToken::ObjectEnd,
            ]
        );
    }

    #[test]
    fn successive_documents_share_one_sequence() {
        let parser = Parser::new(JsonFormat);
        let tokens: Vec<JsonToken> = parser
            .parse(r#"{"a": 1} {"b": 2}"#)
            .expect("parse")
            .collect::<Result<_>>()
            .expect("tokens");

        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[4], JsonToken::ObjectStart);
        assert_eq!(tokens[5].as_key(), Some("b"));
        assert_eq!(tokens[6].as_scalar(), Some(&json!(2)));
    }

    #[test]
    fn classify_reports_every_class() {
        let format = JsonFormat::new();
        assert_eq!(format.classify(&JsonToken::ArrayStart), TokenClass::ArrayStart);
        assert_eq!(format.classify(&JsonToken::from("k")), TokenClass::Property);
        assert_eq!(format.classify(&JsonToken::Scalar(json!("s"))), TokenClass::Scalar);
        assert!(format.is_obj_start(&JsonToken::ObjectStart));
        assert!(format.is_obj_end(&JsonToken::ObjectEnd));
        assert!(!format.is_obj_end(&JsonToken::ArrayEnd));
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn rebuilds_nested_values() {
        let doc = json!({
            "id": 7,
            "owner": {"name": "ada", "tags": ["x", {"deep": [1, 2]}]},
            "empty": {},
            "list": []
        });
        assert_eq!(read_one(&doc.to_string()).expect("value"), doc);
    }

    #[test]
    fn reads_successive_objects() {
        let parser = Parser::new(JsonFormat);
        let ctx = DeserializeContext::new(parser.format());
        let mut events = parser.parse("{\"a\": 1}\n{\"b\": {\"c\": 2}}\n").expect("parse");

        let first = ctx.execute(&EventDriven(JsonValueDeserializer), &mut events, 0).expect("first");
        let second = ctx.execute(&EventDriven(JsonValueDeserializer), &mut events, 0).expect("second");
        assert_eq!(first, json!({"a": 1}));
        assert_eq!(second, json!({"b": {"c": 2}}));

        let err = ctx
            .execute(&EventDriven(JsonValueDeserializer), &mut events, 0)
            .expect_err("no third object");
        assert!(err.is_end_of_input());
    }

    #[test]
    fn validated_json_reads_cleanly() {
        let format = JsonFormat;
        let ctx = DeserializeContext::new(&format)
            .with_config(DeserializeConfig::new().validate_structure(true));
        let mut events = Parser::new(JsonFormat).parse(r#"{"a": [1, {"b": null}], "c": "d"}"#).expect("parse");

        let value = ctx.execute(&EventDriven(JsonValueDeserializer), &mut events, 0).expect("value");
        assert_eq!(value["a"][1]["b"], Value::Null);
    }

    #[test]
    fn top_level_array_is_not_an_object() {
        let err = read_one("[1, 2]").expect_err("array document");
        assert!(matches!(
            err,
            Error::ProtocolViolation {
                expected: Expectation::ObjectStart,
                found: TokenClass::ArrayStart,
            }
        ));
    }

    #[test]
    fn malformed_json_surfaces_as_backend_error() {
        let err = read_one(r#"{"a": }"#).expect_err("syntax error");
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.kind(), objstream_core::ErrorKind::Backend);
    }

    #[test]
    fn value_without_key_is_rejected() {
        let format = JsonFormat;
        let ctx = DeserializeContext::new(&format);
        let mut events = EventStream::from_tokens(vec![
            JsonToken::ObjectStart,
            JsonToken::Scalar(json!(1)),
            JsonToken::ObjectEnd,
        ]);

        let err = ctx
            .execute(&EventDriven(JsonValueDeserializer), &mut events, 0)
            .expect_err("missing key");
        assert!(err.is_protocol_violation());
    }

    #[test]
    fn dangling_key_is_rejected() {
        let format = JsonFormat;
        let ctx = DeserializeContext::new(&format);
        let mut events = EventStream::from_tokens(vec![
            JsonToken::ObjectStart,
            JsonToken::from("a"),
            JsonToken::ObjectEnd,
        ]);

        let err = ctx
            .execute(&EventDriven(JsonValueDeserializer), &mut events, 0)
            .expect_err("missing value");
        assert!(err.is_protocol_violation());
    }
}
