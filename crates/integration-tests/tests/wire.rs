use apierr::{ErrorPayload, Format, XML_HEADER, bad_request, create, internal_error, not_found};

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn not_found_in_every_format() {
    let payload = not_found("My message", &[]);

    insta::assert_snapshot!(text(payload.to_text()), @"404 Not Found: My message");
    insta::assert_snapshot!(
        text(payload.to_json()),
        @r#"{"statusCode":404,"error":"Not Found","message":"My message"}"#
    );
    insta::assert_snapshot!(
        text(payload.to_xml()),
        @r#"<?xml version="1.0" encoding="UTF-8"?><error><status_code>404</status_code><error>Not Found</error><message>My message</message></error>"#
    );
}

#[test]
fn internal_error_in_every_format() {
    let payload = internal_error("My message", &[]);

    insta::assert_snapshot!(text(payload.to_text()), @"500 Internal Server Error: My message");
    insta::assert_snapshot!(
        text(payload.to_json()),
        @r#"{"statusCode":500,"error":"Internal Server Error","message":"My message"}"#
    );
    insta::assert_snapshot!(
        text(payload.to_xml()),
        @r#"<?xml version="1.0" encoding="UTF-8"?><error><status_code>500</status_code><error>Internal Server Error</error><message>My message</message></error>"#
    );
}

#[test]
fn formatted_bad_request() {
    let payload = bad_request("My %s message", &["formatted".into()]);
    assert_eq!(payload.message(), "My formatted message");
    assert_eq!(text(payload.to_text()), "400 Bad Request: My formatted message");
}

#[test]
fn json_has_exactly_three_keys() {
    let payload = create(409, "version %d is stale", &[7.into()]);
    let parsed: serde_json::Value = serde_json::from_slice(&payload.to_json()).unwrap();

    let object = parsed.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(object["statusCode"], 409);
    assert_eq!(object["error"], "Conflict");
    assert_eq!(object["message"], "version 7 is stale");
}

#[test]
fn json_parses_back_into_a_payload() {
    let payload = create(418, "short <and> stout & \"quoted\"", &[]);
    let parsed: ErrorPayload = serde_json::from_slice(&payload.to_json()).unwrap();
    assert_eq!(parsed, payload);
}

#[test]
fn json_key_order_is_fixed() {
    let json = text(create(401, "who?", &[]).to_json());
    let status = json.find("\"statusCode\"").unwrap();
    let error = json.find("\"error\"").unwrap();
    let message = json.find("\"message\"").unwrap();
    assert!(status < error && error < message);
}

#[test]
fn xml_header_directly_precedes_root() {
    for code in [200, 404, 503, 999] {
        let xml = text(create(code, "line one\nline two", &[]).to_xml());
        assert!(xml.starts_with(&format!("{XML_HEADER}<error>")), "{xml}");
        assert!(xml.ends_with("</message></error>"));
    }
}

#[test]
fn text_has_no_trailing_newline() {
    let text = text(create(502, "upstream said \"no\"", &[]).to_text());
    assert_eq!(text, "502 Bad Gateway: upstream said \"no\"");
    assert!(!text.ends_with('\n'));
}

#[test]
fn rendering_is_deterministic() {
    let payload = create(503, "retry in %d seconds", &[30.into()]);
    for format in Format::ALL {
        assert_eq!(payload.render(format), payload.clone().render(format));
    }
}

#[test]
fn payloads_cross_threads() {
    let handles: Vec<_> = (0..4_u16)
        .map(|i| std::thread::spawn(move || create(400 + i, "worker %d", &[i.into()])))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let payload = handle.join().unwrap();
        assert_eq!(payload.message(), format!("worker {i}"));
    }
}
