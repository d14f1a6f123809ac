use super::*;

#[test]
fn parses_request_line_headers_and_body() -> AppResult<()> {
    let request = parse(
        "POST /login?next=/home HTTP/1.1\nHost: example.com\nContent-Type: application/x-www-form-urlencoded\n\nuser=admin&pass=secret",
    )?;
    if request.method != "POST" || request.path != "/login?next=/home" {
        return Err(AppError::validation(format!(
            "Unexpected request line: {} {}",
            request.method, request.path
        )));
    }
    if request.header("Host") != Some("example.com") {
        return Err(AppError::validation("Unexpected Host"));
    }
    if request.header("Content-Type") != Some("application/x-www-form-urlencoded") {
        return Err(AppError::validation("Unexpected Content-Type"));
    }
    if request.body != "user=admin&pass=secret" {
        return Err(AppError::validation(format!(
            "Unexpected body: {:?}",
            request.body
        )));
    }
    Ok(())
}

#[test]
fn protocol_versions_default_minor_to_zero() -> AppResult<()> {
    let http11 = parse("GET / HTTP/1.1\nHost: a\n")?;
    if (http11.protocol_major, http11.protocol_minor) != (1, 1) {
        return Err(AppError::validation("Expected HTTP/1.1 -> (1, 1)"));
    }
    let http2 = parse("GET / HTTP/2\nHost: a\n")?;
    if (http2.protocol_major, http2.protocol_minor) != (2, 0) {
        return Err(AppError::validation("Expected HTTP/2 -> (2, 0)"));
    }
    Ok(())
}

#[test]
fn header_value_splits_on_first_colon_only() -> AppResult<()> {
    let request = parse("GET / HTTP/1.1\nCookie: a=1; path=/; x:y\n")?;
    if request.headers != [("Cookie".to_owned(), "a=1; path=/; x:y".to_owned())] {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            request.headers
        )));
    }
    Ok(())
}

#[test]
fn header_names_keep_case_and_order() -> AppResult<()> {
    let request = parse("GET / HTTP/1.1\nhost: a\nX-Token: 1\nAccept: */*\n\n")?;
    let names: Vec<&str> = request.headers.iter().map(|(name, _)| name.as_str()).collect();
    if names != ["host", "X-Token", "Accept"] {
        return Err(AppError::validation(format!("Unexpected order: {:?}", names)));
    }
    if request.header("Host").is_some() {
        return Err(AppError::validation("Exact lookup must be case-sensitive"));
    }
    if request.host() != Some("a") {
        return Err(AppError::validation("Host lookup should ignore case"));
    }
    Ok(())
}

#[test]
fn duplicate_header_last_value_wins_in_first_position() -> AppResult<()> {
    let request = parse("GET / HTTP/1.1\nX-A: 1\nHost: h\nX-A: 2\n\n")?;
    let expected = [
        ("X-A".to_owned(), "2".to_owned()),
        ("Host".to_owned(), "h".to_owned()),
    ];
    if request.headers != expected {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            request.headers
        )));
    }
    Ok(())
}

#[test]
fn crlf_templates_parse_like_lf() -> AppResult<()> {
    let crlf = parse("GET /a HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\nbody")?;
    let lf = parse("GET /a HTTP/1.1\nHost: example.com\nAccept: */*\n\nbody")?;
    if crlf != lf {
        return Err(AppError::validation(format!(
            "CRLF and LF differ: {:?} vs {:?}",
            crlf, lf
        )));
    }
    Ok(())
}

#[test]
fn body_is_empty_without_separator() -> AppResult<()> {
    let request = parse("GET / HTTP/1.1\nHost: a\nAccept: */*")?;
    if !request.body.is_empty() {
        return Err(AppError::validation("Expected empty body"));
    }
    if request.headers.len() != 2 {
        return Err(AppError::validation("Expected both headers"));
    }
    Ok(())
}

#[test]
fn full_body_mode_keeps_every_line_after_separator() -> AppResult<()> {
    let raw = "POST / HTTP/1.1\nHost: a\n\nline one\nline two\nline three";
    let request = parse_with(raw, BodyMode::Full)?;
    if request.body != "line one\nline two\nline three" {
        return Err(AppError::validation(format!(
            "Unexpected body: {:?}",
            request.body
        )));
    }
    Ok(())
}

#[test]
fn last_line_body_mode_keeps_only_final_line() -> AppResult<()> {
    let raw = "POST / HTTP/1.1\nHost: a\n\nline one\nline two\nline three";
    let request = parse_with(raw, BodyMode::LastLine)?;
    if request.body != "line three" {
        return Err(AppError::validation(format!(
            "Unexpected body: {:?}",
            request.body
        )));
    }

    let trailing = parse_with("POST / HTTP/1.1\nHost: a\n\nfirst\n", BodyMode::LastLine)?;
    if !trailing.body.is_empty() {
        return Err(AppError::validation(format!(
            "Trailing newline should leave an empty last line: {:?}",
            trailing.body
        )));
    }
    Ok(())
}

#[test]
fn request_line_needs_three_parts() -> AppResult<()> {
    for raw in ["GET /\nHost: a", "GET / HTTP/1.1 extra\nHost: a", ""] {
        match parse(raw) {
            Err(ParseError::MalformedRequest {
                fault: RequestLineFault::PartCount,
                ..
            }) => {}
            other => {
                return Err(AppError::validation(format!(
                    "Expected part count error for {:?}, got {:?}",
                    raw, other
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn empty_path_is_rejected() -> AppResult<()> {
    match parse("GET  HTTP/1.1\nHost: a") {
        Err(ParseError::MalformedRequest {
            fault: RequestLineFault::EmptyPath,
            ..
        }) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected empty path error, got {:?}",
            other
        ))),
    }
}

#[test]
fn invalid_protocol_versions_are_rejected() -> AppResult<()> {
    for raw in [
        "GET / HTTPS/1.1",
        "GET / HTTP/x",
        "GET / HTTP/1.x",
        "GET / HTTP/",
        "GET / 1.1",
    ] {
        match parse(raw) {
            Err(ParseError::MalformedRequest {
                fault: RequestLineFault::InvalidVersion,
                ..
            }) => {}
            other => {
                return Err(AppError::validation(format!(
                    "Expected version error for {:?}, got {:?}",
                    raw, other
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn header_without_colon_reports_line_number() -> AppResult<()> {
    match parse("GET / HTTP/1.1\nHost: a\nbroken header\n\nbody") {
        Err(ParseError::MalformedHeader { line_number, line }) => {
            if line_number != 3 || line != "broken header" {
                return Err(AppError::validation(format!(
                    "Unexpected location: {} {:?}",
                    line_number, line
                )));
            }
            Ok(())
        }
        other => Err(AppError::validation(format!(
            "Expected malformed header, got {:?}",
            other
        ))),
    }
}

#[test]
fn lines_after_separator_are_not_headers() -> AppResult<()> {
    let request = parse("POST / HTTP/1.1\nHost: a\n\nnot: a header")?;
    if request.headers.len() != 1 || request.body != "not: a header" {
        return Err(AppError::validation(format!("Unexpected parse: {:?}", request)));
    }
    Ok(())
}

#[test]
fn serialization_round_trips_parsed_requests() -> AppResult<()> {
    let samples = [
        "GET /search?q=a HTTP/1.1\nHost: example.com\nCookie: a=1; x:y\n\n",
        "POST /api HTTP/1.0\r\nHost: api.local:8080\r\nContent-Type: application/json\r\n\r\n{\"a\":\n1}",
        "PUT /x HTTP/2\nHost: h\nX-Empty:\n",
    ];
    for raw in samples {
        let parsed = parse(raw)?;
        let reparsed = parse(&parsed.to_raw())?;
        if parsed != reparsed {
            return Err(AppError::validation(format!(
                "Round trip changed {:?} into {:?}",
                parsed, reparsed
            )));
        }
    }
    Ok(())
}

#[test]
fn to_raw_uses_crlf_and_keeps_header_order() -> AppResult<()> {
    let request = parse("GET /a HTTP/1.1\nHost: h\nAccept: */*\n\nbody")?;
    let raw = request.to_raw();
    if raw != "GET /a HTTP/1.1\r\nHost: h\r\nAccept: */*\r\n\r\nbody" {
        return Err(AppError::validation(format!("Unexpected raw: {:?}", raw)));
    }
    Ok(())
}

#[test]
fn set_header_overwrites_in_place() -> AppResult<()> {
    let mut request = parse("GET / HTTP/1.1\nHost: a\nAccept: */*\n")?;
    request.set_header("Host", "b");
    request.set_header("X-New", "1");
    let expected = [
        ("Host".to_owned(), "b".to_owned()),
        ("Accept".to_owned(), "*/*".to_owned()),
        ("X-New".to_owned(), "1".to_owned()),
    ];
    if request.headers != expected {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            request.headers
        )));
    }
    Ok(())
}
