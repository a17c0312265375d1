mod common;

use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use common::{outer_block, FlakyWriter};
use xml_marshal::token::{Attr, StartElement};
use xml_marshal::{
    encode, to_string, to_tokens, to_writer, Error, Token, TokenWriter, User, XmlOptions,
    XmlWriter,
};

fn encode_tokens(user: &User, start: &str) -> Vec<Token<'static>> {
    let mut tokens = Vec::new();
    encode(&mut tokens, user, StartElement::new(start.to_string())).unwrap();
    tokens
}

fn far_future() -> chrono::DateTime<Utc> {
    NaiveDate::from_ymd_opt(10_001, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

#[test]
fn test_blank_user_sequence() {
    let tokens = encode_tokens(&User::default(), "User");
    let expected = vec![
        Token::start("User"),
        Token::start("first_name"),
        Token::text(""),
        Token::end("first_name"),
        Token::start("Admin"),
        Token::text("false"),
        Token::end("Admin"),
        Token::start("Bio"),
        Token::end("Bio"),
        Token::start("CreatedAt"),
        Token::text("0001-01-01T00:00:00Z"),
        Token::end("CreatedAt"),
        Token::end("User"),
    ];
    assert_eq!(tokens, expected);
    assert!(!tokens.iter().any(|t| t.name() == Some("LastName")));
}

#[test]
fn test_mary_jane_sequence() {
    let tokens = encode_tokens(&User::new("Mary", "Jane"), "User");
    assert_eq!(
        &tokens[..8],
        &[
            Token::start("User"),
            Token::start("first_name"),
            Token::text("Mary"),
            Token::end("first_name"),
            Token::start("LastName"),
            Token::text("Jane"),
            Token::end("LastName"),
            Token::start("Admin"),
        ]
    );
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens.last(), Some(&Token::end("User")));
}

#[test]
fn test_blank_user_xml() {
    let xml = to_string(&User::default()).unwrap();
    assert_eq!(
        xml,
        "<User><first_name></first_name><Admin>false</Admin><Bio></Bio>\
         <CreatedAt>0001-01-01T00:00:00Z</CreatedAt></User>"
    );
}

#[test]
fn test_mary_jane_xml() {
    let xml = to_string(&User::new("Mary", "Jane")).unwrap();
    assert_eq!(
        xml,
        "<User><first_name>Mary</first_name><LastName>Jane</LastName>\
         <Admin>false</Admin><Bio></Bio>\
         <CreatedAt>0001-01-01T00:00:00Z</CreatedAt></User>"
    );
}

#[test]
fn test_bio_is_escaped() {
    let user = User::new("Mary", "Jane").with_bio("Rust & <Go>");
    let xml = to_string(&user).unwrap();
    assert!(xml.contains("<Bio>Rust &amp; &lt;Go&gt;</Bio>"));
}

#[test]
fn test_caller_start_tag_with_attributes() {
    let mut writer = XmlWriter::new(Vec::new());
    let start = StartElement::new("Member").with_attr("id", "42");
    encode(&mut writer, &User::new("Ada", ""), start).unwrap();
    let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert!(xml.starts_with("<Member id=\"42\"><first_name>Ada</first_name>"));
    assert!(xml.ends_with("</Member>"));
}

#[test]
fn test_nested_in_larger_document() {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write_token(&Token::start("Users")).unwrap();
    for user in [User::new("Mary", "Jane"), User::new("Ada", "")] {
        encode(&mut writer, &user, StartElement::new("User")).unwrap();
    }
    writer.write_token(&Token::end("Users")).unwrap();
    let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(xml.matches("<User>").count(), 2);
    assert!(xml.starts_with("<Users><User>"));
    assert!(xml.ends_with("</User></Users>"));
}

#[test]
fn test_timestamp_with_fraction() {
    let created = Utc
        .with_ymd_and_hms(2009, 11, 10, 23, 0, 0)
        .unwrap()
        .with_nanosecond(500_000_000)
        .unwrap();
    let tokens = to_tokens(&User::default().with_created_at(created)).unwrap();
    assert!(tokens.contains(&Token::text("2009-11-10T23:00:00.5Z")));
}

#[test]
fn test_timestamp_failure_stops_encoding() {
    let user = User::new("Mary", "Jane").with_created_at(far_future());
    let mut writer = FlakyWriter::default();
    let err = encode(&mut writer, &user, StartElement::new("User")).unwrap_err();

    assert!(err.is_marshal());
    assert_eq!(writer.flushes, 0);
    assert!(!writer.tokens.iter().any(|t| t.name() == Some("CreatedAt")));
    assert_ne!(writer.tokens.last(), Some(&Token::end("User")));
    assert_eq!(writer.tokens.last(), Some(&Token::end("Bio")));
}

#[test]
fn test_write_failure_stops_encoding() {
    let mut writer = FlakyWriter::failing_on(5);
    let err = encode(&mut writer, &User::new("Mary", "Jane"), StartElement::new("User"))
        .unwrap_err();

    assert_eq!(err, Error::io("connection reset"));
    assert_eq!(writer.attempts, 5);
    assert_eq!(writer.tokens.len(), 4);
    assert_eq!(writer.flushes, 0);
}

#[test]
fn test_flush_failure_is_the_result() {
    let mut writer = FlakyWriter::failing_flush();
    let err = encode(&mut writer, &User::default(), StartElement::new("User")).unwrap_err();
    assert_eq!(err, Error::io("flush failed"));
    assert_eq!(writer.tokens.len(), 13);
    assert_eq!(writer.flushes, 1);
}

#[test]
fn test_flush_called_once_on_success() {
    let mut writer = FlakyWriter::default();
    encode(&mut writer, &User::default(), StartElement::new("User")).unwrap();
    assert_eq!(writer.flushes, 1);
    assert_eq!(outer_block(&writer.tokens).as_deref(), Some("User"));
}

#[test]
fn test_invalid_start_tag_rejected_by_xml_writer() {
    let mut writer = XmlWriter::new(Vec::new());
    let err = encode(&mut writer, &User::default(), StartElement::new("my user")).unwrap_err();
    assert_eq!(err, Error::invalid_name("my user"));
}

#[test]
fn test_to_writer_with_declaration() {
    let mut buffer = Vec::new();
    let options = XmlOptions::new().with_declaration(true).with_capacity(16);
    xml_marshal::to_writer_with_options(&mut buffer, &User::new("Mary", "Jane"), options)
        .unwrap();
    let xml = String::from_utf8(buffer).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<User>"));

    let mut plain = Vec::new();
    to_writer(&mut plain, &User::new("Mary", "Jane")).unwrap();
    assert!(xml.ends_with(std::str::from_utf8(&plain).unwrap()));
}

#[test]
fn test_writer_io_failure() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = to_writer(Closed, &User::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_start_attributes_survive_token_log() {
    let mut tokens: Vec<Token<'static>> = Vec::new();
    let start = StartElement::new("User").with_attr("lang", "en");
    encode(&mut tokens, &User::default(), start).unwrap();
    match &tokens[0] {
        Token::Start(start) => assert_eq!(start.attrs, vec![Attr::new("lang", "en")]),
        other => panic!("expected start token, got {other:?}"),
    }
}
