use strutta_client::error::AppError;
use strutta_client::xml::parse_document;

#[test]
fn parses_a_flat_document() {
    let doc = parse_document("<response><status>ok</status><count>3</count></response>").unwrap();
    assert_eq!(doc.name, "response");
    assert_eq!(doc.child_text("status"), Some("ok"));
    assert_eq!(doc.child_text("count"), Some("3"));
    assert!(doc.child("missing").is_none());
}

#[test]
fn parses_nested_elements_and_attributes() {
    let body = r#"<response><games total="2"><game id="1"><name>First</name></game><game id="2"><name>Second</name></game></games></response>"#;
    let doc = parse_document(body).unwrap();

    let games = doc.child("games").unwrap();
    assert_eq!(games.attribute("total"), Some("2"));

    let ids: Vec<_> = games
        .children_named("game")
        .filter_map(|game| game.attribute("id"))
        .collect();
    assert_eq!(ids, ["1", "2"]);
    assert_eq!(games.children[0].child_text("name"), Some("First"));
}

#[test]
fn ignores_declaration_and_comments() {
    let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><!-- generated --><response><status>ok</status></response>";
    let doc = parse_document(body).unwrap();
    assert_eq!(doc.child_text("status"), Some("ok"));
}

#[test]
fn unescapes_entities_in_text() {
    let doc = parse_document("<response><name>Fish &amp; Chips</name></response>").unwrap();
    assert_eq!(doc.child_text("name"), Some("Fish & Chips"));
}

#[test]
fn keeps_cdata_text_verbatim() {
    let doc =
        parse_document("<response><html><![CDATA[<b>bold</b>]]></html></response>").unwrap();
    assert_eq!(doc.child_text("html"), Some("<b>bold</b>"));
}

#[test]
fn child_text_trims_surrounding_whitespace() {
    let doc = parse_document("<response>\n  <status>\n    ok\n  </status>\n</response>").unwrap();
    assert_eq!(doc.child_text("status"), Some("ok"));
}

#[test]
fn handles_self_closing_elements() {
    let doc = parse_document(r#"<response><empty/><after>x</after></response>"#).unwrap();
    assert!(doc.child("empty").is_some());
    assert_eq!(doc.child_text("after"), Some("x"));
}

#[test]
fn malformed_body_yields_decode_error_with_escaped_excerpt() {
    let err = parse_document("<response><unclosed></response>").unwrap_err();
    match err {
        AppError::Decode(message) => {
            // The quoted body must be entity-escaped, never raw markup
            assert!(message.contains("&lt;"), "unexpected message: {message}");
            assert!(!message.contains("<response>"));
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn non_xml_body_is_rejected() {
    assert!(matches!(
        parse_document("502 Bad Gateway page"),
        Err(AppError::Decode(_))
    ));
    assert!(matches!(parse_document(""), Err(AppError::Decode(_))));
}
