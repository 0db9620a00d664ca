//! Structured Content-Disposition header value.
//!
//! The value is parsed from and serialized to its raw header form by two
//! explicit operations: [`ContentDisposition::parse`] (fallible) and
//! [`Display`](std::fmt::Display) (canonical form). Every value built through
//! the constructors below serializes to a string that parses back to an equal
//! value.

mod decode;
mod parse;

use std::fmt;
use std::str::FromStr;

use crate::error::{AuthError, Result};

use parse::{is_field_text, is_token};

/// A single `name=value` parameter. Values are stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispositionParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    disposition_type: String,
    parameters: Vec<DispositionParam>,
}

impl ContentDisposition {
    /// Parses a raw header value such as `attachment; filename="report.pdf"`.
    pub fn parse(raw: &str) -> Result<Self> {
        parse::parse(raw)
    }

    /// Creates a value with the given disposition type and no parameters.
    pub fn new(disposition_type: impl Into<String>) -> Result<Self> {
        let disposition_type = disposition_type.into();
        if !is_token(&disposition_type) {
            return Err(AuthError::parse(
                &disposition_type,
                "disposition type is not a valid token",
            ));
        }
        Ok(Self {
            disposition_type,
            parameters: Vec::new(),
        })
    }

    pub fn inline() -> Self {
        Self {
            disposition_type: "inline".to_string(),
            parameters: Vec::new(),
        }
    }

    pub fn attachment() -> Self {
        Self {
            disposition_type: "attachment".to_string(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter. The name must be a token; the value may hold
    /// visible ASCII, spaces and tabs (it is quoted on output if needed).
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        if !is_token(&name) {
            return Err(AuthError::parse(&name, "parameter name is not a valid token"));
        }
        if let Some(c) = value.chars().find(|&c| !is_field_text(c)) {
            return Err(AuthError::parse(
                &value,
                format!("parameter `{name}` contains {c:?}; only visible ASCII, space and tab are allowed"),
            ));
        }
        self.parameters.push(DispositionParam { name, value });
        Ok(self)
    }

    /// Appends a plain `filename` parameter.
    pub fn with_filename(self, filename: impl Into<String>) -> Result<Self> {
        self.with_parameter("filename", filename)
    }

    pub fn disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn is_inline(&self) -> bool {
        self.disposition_type.eq_ignore_ascii_case("inline")
    }

    pub fn is_attachment(&self) -> bool {
        self.disposition_type.eq_ignore_ascii_case("attachment")
    }

    pub fn parameters(&self) -> &[DispositionParam] {
        &self.parameters
    }

    /// First parameter whose name matches case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Filename hint: `filename*` (RFC 5987, UTF-8) wins over `filename`.
    pub fn filename(&self) -> Option<String> {
        self.parameter("filename*")
            .and_then(decode::decode_ext_value)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.parameter("filename")
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
    }

    /// True if any parameter name uses RFC 2231/5987 continuation syntax (`*`).
    pub fn has_parameter_continuations(&self) -> bool {
        self.parameters.iter().any(|p| p.name.contains('*'))
    }

    /// Fails on the first parameter that uses continuation syntax.
    pub fn reject_parameter_continuations(&self) -> Result<()> {
        match self.parameters.iter().find(|p| p.name.contains('*')) {
            Some(p) => Err(AuthError::ParameterContinuation(p.name.clone())),
            None => Ok(()),
        }
    }
}

impl FromStr for ContentDisposition {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disposition_type)?;
        for p in &self.parameters {
            write!(f, "; {}=", p.name)?;
            if is_token(&p.value) {
                f.write_str(&p.value)?;
            } else {
                write_quoted(f, &p.value)?;
            }
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests;
