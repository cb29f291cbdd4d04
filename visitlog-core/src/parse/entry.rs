use chrono::{DateTime, FixedOffset};
use std::fmt::{Display, Formatter};

/// Timestamp layout of `%t` in Apache access logs.
pub const APACHE_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One access-log line, projected onto the fields the importer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// `%h`, empty when the log carried no usable address.
    pub host: String,
    /// `%t`, keeping the offset the server wrote.
    pub timestamp: DateTime<FixedOffset>,
    pub request: RequestLine,
    pub status: u16,
    /// `None` when the server logged `-`.
    pub bytes: Option<u64>,
    /// `None` for `-` and for an empty header.
    pub referer: Option<String>,
    pub user_agent: String,
}

impl LogEntry {
    /// An address of `-` or an empty field cannot be attributed to a visitor.
    pub fn has_host(&self) -> bool {
        !self.host.is_empty() && self.host != "-"
    }
}

/// The quoted `%r` field, split into its three parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    /// Path plus query, exactly as requested.
    pub target: String,
    pub protocol: String,
}

impl RequestLine {
    /// Splits `%r` into method, target and protocol.
    ///
    /// The target runs from the first space up to the last ` HTTP/`, so paths
    /// containing spaces and trailing junk after the protocol still yield the
    /// path alone. HTTP/0.9 style `GET /path` has no protocol. Only text that
    /// does not start with a method is kept whole as the target.
    pub fn parse(raw: &str) -> Self {
        let Some((method, rest)) = raw.split_once(' ') else {
            return Self::unparsed(raw);
        };
        if !is_method(method) {
            return Self::unparsed(raw);
        }

        let (target, protocol) = match rest.rfind(" HTTP/") {
            Some(at) => (&rest[..at], &rest[at + 1..]),
            None => (rest, ""),
        };
        if target.is_empty() {
            return Self::unparsed(raw);
        }

        RequestLine {
            method: method.to_string(),
            target: target.to_string(),
            protocol: protocol.to_string(),
        }
    }

    // Garbage such as TLS handshakes hitting a plain port.
    fn unparsed(raw: &str) -> Self {
        RequestLine {
            method: String::new(),
            target: raw.to_string(),
            protocol: String::new(),
        }
    }
}

fn is_method(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_uppercase())
}

impl Display for RequestLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.method.is_empty(), self.protocol.is_empty()) {
            (true, _) => write!(f, "{}", self.target),
            (false, true) => write!(f, "{} {}", self.method, self.target),
            (false, false) => write!(f, "{} {} {}", self.method, self.target, self.protocol),
        }
    }
}

/// Renders the entry back into combined format. Identity and user fields are
/// not retained and come out as `-`.
impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let host = if self.host.is_empty() { "-" } else { &self.host };
        let bytes = self
            .bytes
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            host,
            self.timestamp.format(APACHE_TIME_FORMAT),
            escape(&self.request.to_string()),
            self.status,
            bytes,
            escape(self.referer.as_deref().unwrap_or("-")),
            escape(&self.user_agent),
        )
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
