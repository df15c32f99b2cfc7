//! Log output parser (git log --name-status)

use std::borrow::Cow;

use super::super::template::{FIELD_SEPARATOR, RECORD_SEPARATOR, STATUS_SEPARATOR};
use crate::model::{RawCommit, RawFileChange};

use super::Parser;

impl Parser {
    /// Parse `git log` output into raw commit records
    ///
    /// Every record starts with RECORD_SEPARATOR. The first line holds the
    /// header fields; the remaining lines are name-status entries:
    ///
    /// ```text
    /// \x1e<hash>\x1f<author>\x1f<date>\x1f<parents>\x1f<subject>
    ///
    /// A\tsrc/new.rs
    /// R100\told.rs\tnew.rs
    /// ```
    pub fn parse_log(output: &str) -> Vec<RawCommit> {
        output
            .split(RECORD_SEPARATOR)
            .filter(|record| !record.trim().is_empty())
            .map(Self::parse_log_record)
            .collect()
    }

    /// Parse one record (header line plus name-status lines)
    pub(super) fn parse_log_record(record: &str) -> RawCommit {
        let mut lines = record.lines();
        let mut commit = Self::parse_log_header(lines.next().unwrap_or_default());
        commit.changes = lines.filter_map(Self::parse_name_status_line).collect();
        commit
    }

    /// Parse the header line
    ///
    /// Fields: hash, author, date, parents, subject. Missing trailing
    /// fields are left empty. The subject is the last field and may
    /// contain anything except a newline.
    pub(super) fn parse_log_header(header: &str) -> RawCommit {
        let mut fields = header.splitn(5, FIELD_SEPARATOR);
        let mut next = || fields.next().unwrap_or_default();

        let id = next().trim().to_string();
        let author = next().trim().to_string();
        let timestamp = next().trim().to_string();
        let parents = next().split_whitespace().map(str::to_string).collect();
        let message = next().trim().to_string();

        RawCommit {
            id,
            author,
            timestamp,
            message,
            parents,
            changes: Vec::new(),
        }
    }

    /// Parse a single name-status line
    ///
    /// Formats:
    /// - "A\tpath"
    /// - "R100\tsource\tdestination"
    ///
    /// Returns None for lines without a path. The status code is kept
    /// verbatim; classification happens later. Paths git wrapped in double
    /// quotes are unquoted.
    pub(super) fn parse_name_status_line(line: &str) -> Option<RawFileChange> {
        if line.trim().is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split(STATUS_SEPARATOR).collect();
        match parts.as_slice() {
            [status, path] => Some(RawFileChange::new(
                status.trim(),
                Self::unquote_path(path),
            )),
            [status, source, path, ..] => Some(RawFileChange::with_source(
                status.trim(),
                Self::unquote_path(source),
                Self::unquote_path(path),
            )),
            _ => None,
        }
    }

    /// Undo git's C-style path quoting
    ///
    /// Even with `core.quotePath=false`, git quotes paths containing `"`,
    /// `\` or control characters: `"a\"b.txt"`. Escapes are `\a \b \t \n
    /// \v \f \r \" \\` and three-digit octal bytes. Unquoted fields are
    /// returned as-is; invalid UTF-8 after decoding is replaced lossily.
    pub(super) fn unquote_path(field: &str) -> Cow<'_, str> {
        let Some(inner) = field
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        else {
            return Cow::Borrowed(field);
        };

        let bytes = inner.as_bytes();
        let mut decoded = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'\\' || i + 1 == bytes.len() {
                decoded.push(bytes[i]);
                i += 1;
                continue;
            }

            let escaped = bytes[i + 1];
            let simple = match escaped {
                b'a' => Some(0x07),
                b'b' => Some(0x08),
                b't' => Some(b'\t'),
                b'n' => Some(b'\n'),
                b'v' => Some(0x0b),
                b'f' => Some(0x0c),
                b'r' => Some(b'\r'),
                b'"' => Some(b'"'),
                b'\\' => Some(b'\\'),
                _ => None,
            };
            if let Some(byte) = simple {
                decoded.push(byte);
                i += 2;
                continue;
            }

            match octal_byte(&bytes[i + 1..]) {
                Some(byte) => {
                    decoded.push(byte);
                    i += 4;
                }
                None => {
                    decoded.push(b'\\');
                    i += 1;
                }
            }
        }

        Cow::Owned(String::from_utf8_lossy(&decoded).into_owned())
    }
}

/// Value of a leading three-digit octal escape (`303` → 0xC3)
fn octal_byte(digits: &[u8]) -> Option<u8> {
    let digits = digits.get(..3)?;
    if !digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
        return None;
    }
    let value = digits
        .iter()
        .fold(0u16, |acc, d| acc * 8 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}
