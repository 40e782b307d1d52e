/// What a matched candidate means to the assembly loop. The three
/// terminator forms and the three prefix forms of each field keyword
/// collapse to one token each; only the consumed length differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Terminator,
    Data,
    Id,
    EventType,
    Retry,
}

/// Candidate table in match-priority order: terminators first, then each
/// field keyword with its longest form first so `"data: "` wins over
/// `"data:"` and `"data"` when the bytes allow it.
const CANDIDATES: &[(&[u8], Token)] = &[
    (b"\r\n", Token::Terminator),
    (b"\r", Token::Terminator),
    (b"\n", Token::Terminator),
    (b"data: ", Token::Data),
    (b"data:", Token::Data),
    (b"data", Token::Data),
    (b"id: ", Token::Id),
    (b"id:", Token::Id),
    (b"id", Token::Id),
    (b"event: ", Token::EventType),
    (b"event:", Token::EventType),
    (b"event", Token::EventType),
    (b"retry: ", Token::Retry),
    (b"retry:", Token::Retry),
    (b"retry", Token::Retry),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// A candidate matched; consume this many bytes.
    Match(Token, usize),
    /// A higher-priority candidate may still match once more bytes arrive.
    Incomplete,
    /// No candidate can match at the current position.
    NoMatch,
}

/// Scans the start of `buf` against the candidate table.
///
/// Returns `Incomplete` whenever the buffered bytes are a proper prefix of
/// a not-yet-ruled-out candidate and more input may arrive, so a short read
/// is never misreported as `NoMatch`. With `at_eof` set, candidates longer
/// than the remaining bytes are simply ruled out.
pub(crate) fn scan_token(buf: &[u8], at_eof: bool) -> Scan {
    for &(candidate, token) in CANDIDATES {
        if buf.len() >= candidate.len() {
            if buf.starts_with(candidate) {
                return Scan::Match(token, candidate.len());
            }
        } else if !at_eof && candidate.starts_with(buf) {
            return Scan::Incomplete;
        }
    }
    Scan::NoMatch
}
