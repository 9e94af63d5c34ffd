//! Substitution engine.
//!
//! Template files use a `{{ Variable }}` placeholder syntax. A leading dot
//! is accepted (`{{.Author}}`), matching the spelling most template authors
//! bring over from Go-style templates; `{{ Author }}` and `{{.Author}}` are
//! equivalent.
//!
//! Compilation and execution are split the way the error contract demands:
//! an unterminated delimiter fails at [`CompiledTemplate::parse`] time, an
//! invalid expression fails at [`CompiledTemplate::render`] time. A variable
//! that is well-formed but absent from the context renders as the empty
//! string — declared variables are documentation, not a contract.

use std::collections::BTreeMap;

use crate::error::{WmError, WmResult};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Flat variable-name → value mapping supplied by the caller.
///
/// No nesting, no type coercion, no defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionContext {
    vars: BTreeMap<String, String>,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One parsed piece of a template: either literal text or a variable
/// expression still to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// Raw expression text between the delimiters, untrimmed.
    Expression(String),
}

/// A template compiled into literal and expression segments.
///
/// Rendering is pure: the same compiled template with the same context
/// always produces the same output bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    /// Name used in error messages, conventionally the output-relative path.
    name: String,
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Compile template source into segments.
    ///
    /// # Errors
    ///
    /// Returns [`WmError::Parse`] if an opening `{{` has no matching `}}`.
    /// Expression validity is deliberately not checked here; that is an
    /// execution-time concern (see [`CompiledTemplate::render`]).
    pub fn parse(name: impl Into<String>, source: &str) -> WmResult<Self> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find(OPEN) {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + OPEN.len()..];
            let close = after_open.find(CLOSE).ok_or_else(|| WmError::Parse {
                subject: name.clone(),
                reason: "unterminated '{{' delimiter".into(),
            })?;
            segments.push(Segment::Expression(after_open[..close].to_string()));
            rest = &after_open[close + CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Execute the template against a substitution context.
    ///
    /// # Errors
    ///
    /// Returns [`WmError::Render`] if an expression is empty or is not a
    /// plain identifier (optionally dot-prefixed). Unknown variables render
    /// as the empty string; extra context entries are ignored.
    pub fn render(&self, ctx: &SubstitutionContext) -> WmResult<String> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Expression(expr) => {
                    let var = self.variable_name(expr)?;
                    if let Some(value) = ctx.get(var) {
                        out.push_str(value);
                    }
                }
            }
        }

        Ok(out)
    }

    /// Validate an expression and extract the variable name it references.
    fn variable_name<'a>(&self, expr: &'a str) -> WmResult<&'a str> {
        let trimmed = expr.trim();
        let name = trimmed.strip_prefix('.').unwrap_or(trimmed);

        let valid = !name.is_empty()
            && name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid {
            return Err(WmError::Render {
                subject: self.name.clone(),
                reason: format!("invalid template construct '{{{{{expr}}}}}'"),
            });
        }

        Ok(name)
    }
}
