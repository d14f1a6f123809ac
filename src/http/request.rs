use std::fmt;

use crate::args::BodyMode;
use crate::error::{ParseError, RequestLineFault};

const HTTP_PREFIX: &str = "HTTP/";

/// Structured view of a raw HTTP request.
///
/// Header names keep the casing they were captured with and the order of
/// their first appearance. Setting a header that already exists replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub protocol_major: u32,
    pub protocol_minor: u32,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Request {
    /// Returns the value of the header with exactly this name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets a header, overwriting an existing entry with the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.headers.iter_mut().find(|(key, _)| key == name) {
            value.clone_into(&mut entry.1);
        } else {
            self.headers.push((name.to_owned(), value.to_owned()));
        }
    }

    /// Removes every header whose name matches ignoring ASCII case.
    pub fn remove_header_ignore_case(&mut self, name: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }

    /// Host the request targets. Lookup ignores ASCII case and skips empty values.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("host"))
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn protocol(&self) -> String {
        format!(
            "{}{}.{}",
            HTTP_PREFIX, self.protocol_major, self.protocol_minor
        )
    }

    /// Serializes back to raw request text with CRLF line breaks.
    #[must_use]
    pub fn to_raw(&self) -> String {
        RawRequest {
            request: self,
            line_break: "\r\n",
        }
        .to_string()
    }

    /// Same layout as [`Request::to_raw`] with plain `\n` breaks, for terminals.
    #[must_use]
    pub fn to_display(&self) -> String {
        RawRequest {
            request: self,
            line_break: "\n",
        }
        .to_string()
    }
}

struct RawRequest<'req> {
    request: &'req Request,
    line_break: &'static str,
}

impl fmt::Display for RawRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.request;
        write!(
            f,
            "{} {} {}{}",
            request.method,
            request.path,
            request.protocol(),
            self.line_break
        )?;
        for (name, value) in &request.headers {
            write!(f, "{}: {}{}", name, value, self.line_break)?;
        }
        f.write_str(self.line_break)?;
        f.write_str(&request.body)
    }
}

/// Parses raw request text, taking everything after the header block as the body.
///
/// # Errors
///
/// Returns [`ParseError::MalformedRequest`] when the request line is not
/// `METHOD PATH HTTP/<major>[.<minor>]`, and [`ParseError::MalformedHeader`]
/// when a header line has no colon or an empty name.
pub fn parse(raw: &str) -> Result<Request, ParseError> {
    parse_with(raw, BodyMode::Full)
}

/// Parses raw request text with an explicit body extraction mode.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with(raw: &str, body_mode: BodyMode) -> Result<Request, ParseError> {
    let mut segments = raw.split_inclusive('\n');
    let request_segment = segments.next().unwrap_or_default();
    let request_line = strip_line_break(request_segment);
    let (method, path, protocol) = split_request_line(request_line)?;
    let (protocol_major, protocol_minor) = parse_protocol(protocol)
        .ok_or_else(|| malformed(request_line, RequestLineFault::InvalidVersion))?;

    let mut request = Request {
        method: method.to_owned(),
        path: path.to_owned(),
        protocol_major,
        protocol_minor,
        headers: Vec::new(),
        body: String::new(),
    };

    let mut consumed = request_segment.len();
    let mut body_offset = None;
    for (index, segment) in segments.enumerate() {
        consumed = consumed.saturating_add(segment.len());
        let line = strip_line_break(segment);
        if line.trim().is_empty() {
            body_offset = Some(consumed);
            break;
        }
        let (name, value) = split_header(line).ok_or_else(|| ParseError::MalformedHeader {
            line_number: index.saturating_add(2),
            line: line.to_owned(),
        })?;
        request.set_header(name, value);
    }

    if let Some(offset) = body_offset {
        request.body = extract_body(raw, offset, body_mode).to_owned();
    }

    Ok(request)
}

fn split_request_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [method, path, protocol] = parts.as_slice() else {
        return Err(malformed(line, RequestLineFault::PartCount));
    };
    if method.is_empty() {
        return Err(malformed(line, RequestLineFault::EmptyMethod));
    }
    if path.is_empty() {
        return Err(malformed(line, RequestLineFault::EmptyPath));
    }
    Ok((*method, *path, *protocol))
}

fn parse_protocol(protocol: &str) -> Option<(u32, u32)> {
    let version = protocol.strip_prefix(HTTP_PREFIX)?;
    match version.split_once('.') {
        Some((major, minor)) => Some((major.parse().ok()?, minor.parse().ok()?)),
        None => Some((version.parse().ok()?, 0)),
    }
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}

fn extract_body(raw: &str, offset: usize, body_mode: BodyMode) -> &str {
    match body_mode {
        BodyMode::Full => raw.get(offset..).unwrap_or_default(),
        BodyMode::LastLine => raw
            .rsplit('\n')
            .next()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or_default(),
    }
}

fn strip_line_break(segment: &str) -> &str {
    let line = segment.strip_suffix('\n').unwrap_or(segment);
    line.strip_suffix('\r').unwrap_or(line)
}

fn malformed(line: &str, fault: RequestLineFault) -> ParseError {
    ParseError::MalformedRequest {
        line: line.to_owned(),
        fault,
    }
}
