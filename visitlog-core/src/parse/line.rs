use crate::parse::{APACHE_TIME_FORMAT, LogEntry, ParseError, RequestLine};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// `%h %l %u %t "%r" %>s %b "%{Referer}i" "%{User-Agent}i"`
///
/// Quoted fields accept backslash escapes, which is how Apache writes quotes
/// that appear inside a header value. Anything after the user agent is ignored
/// so that combined-plus variants still parse.
static COMBINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<host>\S*) \S+ \S+ \[(?P<time>[^\]]+)\] "(?P<request>(?:[^"\\]|\\.)*)" (?P<status>\S+) (?P<bytes>\S+) "(?P<referer>(?:[^"\\]|\\.)*)" "(?P<agent>(?:[^"\\]|\\.)*)""#,
    )
    .expect("combined log pattern is valid")
});

/// Parses one line of an Apache combined access log.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let caps = COMBINED
        .captures(line.trim_end_matches(['\r', '\n']))
        .ok_or(ParseError::Malformed)?;

    let time = &caps["time"];
    let timestamp =
        DateTime::parse_from_str(time, APACHE_TIME_FORMAT).map_err(|_| ParseError::Timestamp {
            value: time.to_string(),
        })?;

    let status = &caps["status"];
    let status = status.parse::<u16>().map_err(|_| ParseError::Numeric {
        field: "status",
        value: status.to_string(),
    })?;

    let bytes = match &caps["bytes"] {
        "-" => None,
        raw => Some(raw.parse::<u64>().map_err(|_| ParseError::Numeric {
            field: "byte count",
            value: raw.to_string(),
        })?),
    };

    let referer = match unescape(&caps["referer"]) {
        r if r.is_empty() || r == "-" => None,
        r => Some(r.into_owned()),
    };

    Ok(LogEntry {
        host: caps["host"].to_string(),
        timestamp,
        request: RequestLine::parse(&unescape(&caps["request"])),
        status,
        bytes,
        referer,
        user_agent: unescape(&caps["agent"]).into_owned(),
    })
}

fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\')) => out.push(next),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
