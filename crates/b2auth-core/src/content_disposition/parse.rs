//! Content-Disposition header value grammar (RFC 6266 subset).
//!
//! ```text
//! value      = disposition-type *( OWS ";" OWS [ parameter ] )
//! parameter  = token OWS "=" OWS ( token / quoted-string )
//! ```

use crate::error::{AuthError, Result};

use super::{ContentDisposition, DispositionParam};

/// RFC 7230 `tchar`.
pub(super) fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

pub(super) fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tchar)
}

/// Characters allowed inside a quoted-string once unescaped.
pub(super) fn is_qdtext(c: char) -> bool {
    c == '\t' || !c.is_control()
}

/// Characters a built value may carry: visible ASCII, SP and HTAB. Parsing
/// still accepts obs-text in quoted strings; building never produces it.
pub(super) fn is_field_text(c: char) -> bool {
    c == '\t' || (' '..='~').contains(&c)
}

pub(super) fn parse(input: &str) -> Result<ContentDisposition> {
    let mut cur = Cursor { src: input, pos: 0 };

    cur.skip_ws();
    let disposition_type = cur
        .token()
        .ok_or_else(|| cur.error("missing disposition type"))?
        .to_string();

    let mut parameters = Vec::new();
    loop {
        cur.skip_ws();
        let Some(c) = cur.peek() else { break };
        if c != ';' {
            return Err(cur.error(format!("unexpected character {c:?}")));
        }
        cur.bump();
        cur.skip_ws();
        // Tolerate empty segments such as a trailing ';'.
        if matches!(cur.peek(), None | Some(';')) {
            continue;
        }

        let name = cur
            .token()
            .ok_or_else(|| cur.error("expected parameter name"))?
            .to_string();
        cur.skip_ws();
        if cur.peek() != Some('=') {
            return Err(cur.error(format!("parameter `{name}` has no value")));
        }
        cur.bump();
        cur.skip_ws();

        let value = if cur.peek() == Some('"') {
            cur.quoted_string()?
        } else {
            cur.token()
                .ok_or_else(|| cur.error(format!("parameter `{name}` has an empty value")))?
                .to_string()
        };
        parameters.push(DispositionParam { name, value });
    }

    Ok(ContentDisposition {
        disposition_type,
        parameters,
    })
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    fn token(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_tchar(c))
            .map_or(rest.len(), |(i, _)| i);
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    fn quoted_string(&mut self) -> Result<String> {
        self.bump(); // opening quote
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated quoted string")),
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some(c) if is_qdtext(c) => out.push(c),
                    _ => return Err(self.error("invalid escape in quoted string")),
                },
                Some(c) if is_qdtext(c) => out.push(c),
                Some(c) => {
                    return Err(self.error(format!("control character {c:?} in quoted string")))
                }
            }
        }
    }

    fn error(&self, reason: impl Into<String>) -> AuthError {
        AuthError::parse(self.src, format!("{} at offset {}", reason.into(), self.pos))
    }
}
