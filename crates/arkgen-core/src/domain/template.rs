//! Template specifications and parameter substitution.
//!
//! A [`TemplateSpec`] is a named, parameterized text blueprint for one file's
//! content. Specs are process-wide immutable constants supplied by the
//! adapter catalog; the domain only defines their shape and the substitution
//! algorithm.
//!
//! ## Placeholder convention
//!
//! Placeholders are written `{{NAME}}` with `SCREAMING_SNAKE_CASE` names, the
//! contract between the engine and the built-in templates:
//!
//! | Parameter | Example | Source |
//! |-----------------------|----------------|----------------------------|
//! | `PASCAL_NAME` | "CustomButton" | normalized artifact name |
//! | `PROJECT_NAME` | "MyApp" | verbatim caller input |
//! | `PROJECT_NAME_LOWER` | "myapp" | computed |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Parameter name for the normalized artifact identifier.
pub const PARAM_PASCAL_NAME: &str = "PASCAL_NAME";
/// Parameter name for the verbatim project name (human-facing labels).
pub const PARAM_PROJECT_NAME: &str = "PROJECT_NAME";
/// Parameter name for the lower-cased project name (manifest identifiers).
pub const PARAM_PROJECT_NAME_LOWER: &str = "PROJECT_NAME_LOWER";

const OPEN_MARKER: &str = "{{";
const CLOSE_MARKER: &str = "}}";

// ── TemplateId ────────────────────────────────────────────────────────────────

/// Identifies one built-in blueprint, keyed by the artifact sub-role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// Custom component file (`<PascalName>.ets`).
    Component,
    /// Page file (`<PascalName>.ets`).
    Page,
    /// Project entry ability lifecycle file.
    EntryAbility,
    /// Project index/landing page.
    IndexPage,
    /// Application manifest (`app.json5`).
    AppManifest,
    /// Module manifest (`module.json5`).
    ModuleManifest,
    /// Logging utility seeded into the project.
    LoggerUtil,
}

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Page => "page",
            Self::EntryAbility => "entry-ability",
            Self::IndexPage => "index-page",
            Self::AppManifest => "app-manifest",
            Self::ModuleManifest => "module-manifest",
            Self::LoggerUtil => "logger-util",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateSpec ──────────────────────────────────────────────────────────────

/// A named blueprint: the parameters it expects and a body with placeholder
/// markers for them.
///
/// The body is opaque payload — the engine never parses or validates the
/// target-language text it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub id: TemplateId,
    /// Parameter names this body references. Used to check template/binding
    /// consistency before rendering.
    pub params: &'static [&'static str],
    pub body: &'static str,
}

impl TemplateSpec {
    pub const fn new(
        id: TemplateId,
        params: &'static [&'static str],
        body: &'static str,
    ) -> Self {
        Self { id, params, body }
    }

    /// Verify every placeholder in the body is declared in `params`.
    ///
    /// A spec whose body references an undeclared parameter is malformed;
    /// catalog implementations should check this at load time.
    pub fn validate(&self) -> Result<(), DomainError> {
        for name in placeholders(self.body) {
            if !self.params.contains(&name) {
                return Err(DomainError::UndeclaredParameter {
                    template: self.id.to_string(),
                    parameter: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ── ParameterBinding ──────────────────────────────────────────────────────────

/// Mapping from parameter name to concrete value, built fresh per invocation.
///
/// `BTreeMap` rather than `HashMap` so Debug output and serialization are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterBinding(BTreeMap<String, String>);

impl ParameterBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming self for fluent construction:
    ///
    /// ```rust
    /// use arkgen_core::domain::template::{ParameterBinding, PARAM_PASCAL_NAME};
    ///
    /// let binding = ParameterBinding::new().with(PARAM_PASCAL_NAME, "CustomButton");
    /// assert_eq!(binding.get(PARAM_PASCAL_NAME), Some("CustomButton"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Substitution ──────────────────────────────────────────────────────────────

/// Render a template body by replacing `{{NAME}}` placeholders from `binding`.
///
/// Textual and single-pass: the body is scanned left to right exactly once,
/// so bound values that themselves contain placeholder-like sequences are
/// emitted verbatim, never re-expanded. An unmatched `{{` with no closing
/// marker is copied through literally.
///
/// # Errors
///
/// `DomainError::UnboundParameter` naming the first placeholder with no
/// binding entry — a missing parameter is never substituted with an empty
/// string.
pub fn substitute(
    template: TemplateId,
    body: &str,
    binding: &ParameterBinding,
) -> Result<String, DomainError> {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find(OPEN_MARKER) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN_MARKER.len()..];

        let Some(end) = after.find(CLOSE_MARKER) else {
            // No closing marker: the remainder is literal text.
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = &after[..end];
        match binding.get(name) {
            Some(value) => out.push_str(value),
            None => {
                return Err(DomainError::UnboundParameter {
                    template: template.to_string(),
                    parameter: name.to_string(),
                });
            }
        }
        rest = &after[end + CLOSE_MARKER.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Iterate the placeholder names referenced in a body, in order of appearance.
fn placeholders(body: &str) -> impl Iterator<Item = &str> {
    let mut rest = body;
    std::iter::from_fn(move || {
        let start = rest.find(OPEN_MARKER)?;
        let after = &rest[start + OPEN_MARKER.len()..];
        let end = after.find(CLOSE_MARKER)?;
        let name = &after[..end];
        rest = &after[end + CLOSE_MARKER.len()..];
        Some(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding() -> ParameterBinding {
        ParameterBinding::new()
            .with(PARAM_PASCAL_NAME, "CustomButton")
            .with(PARAM_PROJECT_NAME, "MyApp")
    }

    #[test]
    fn substitutes_all_occurrences() {
        let body = "struct {{PASCAL_NAME}} in {{PROJECT_NAME}}: {{PASCAL_NAME}}";
        let out = substitute(TemplateId::Component, body, &binding()).unwrap();
        assert_eq!(out, "struct CustomButton in MyApp: CustomButton");
    }

    #[test]
    fn missing_parameter_is_an_error_naming_it() {
        let body = "hello {{PROJECT_NAME_LOWER}}";
        let err = substitute(TemplateId::AppManifest, body, &binding()).unwrap_err();
        match err {
            DomainError::UnboundParameter { parameter, template } => {
                assert_eq!(parameter, "PROJECT_NAME_LOWER");
                assert_eq!(template, "app-manifest");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn values_are_not_recursively_expanded() {
        let b = ParameterBinding::new().with("A", "{{B}}").with("B", "boom");
        let out = substitute(TemplateId::Component, "x {{A}} y", &b).unwrap();
        assert_eq!(out, "x {{B}} y");
    }

    #[test]
    fn unclosed_marker_is_literal() {
        let out = substitute(TemplateId::Component, "a {{PASCAL_NAME} b", &binding()).unwrap();
        assert_eq!(out, "a {{PASCAL_NAME} b");
    }

    #[test]
    fn body_without_placeholders_is_unchanged() {
        let body = "build() {\n  Column() {\n  }\n}\n";
        let out = substitute(TemplateId::ModuleManifest, body, &binding()).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn validate_flags_undeclared_placeholder() {
        let spec = TemplateSpec::new(TemplateId::Page, &[], "hi {{PASCAL_NAME}}");
        assert!(matches!(
            spec.validate(),
            Err(DomainError::UndeclaredParameter { .. })
        ));

        let ok = TemplateSpec::new(TemplateId::Page, &[PARAM_PASCAL_NAME], "hi {{PASCAL_NAME}}");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn full_binding_never_errors_partial_always_does() {
        let spec = TemplateSpec::new(
            TemplateId::AppManifest,
            &[PARAM_PROJECT_NAME, PARAM_PROJECT_NAME_LOWER],
            "{{PROJECT_NAME}} / {{PROJECT_NAME_LOWER}}",
        );

        let full = ParameterBinding::new()
            .with(PARAM_PROJECT_NAME, "MyApp")
            .with(PARAM_PROJECT_NAME_LOWER, "myapp");
        assert!(substitute(spec.id, spec.body, &full).is_ok());

        // Omitting any one required parameter always fails.
        for missing in spec.params {
            let mut partial = ParameterBinding::new();
            for p in spec.params {
                if p != missing {
                    partial = partial.with(*p, "v");
                }
            }
            assert!(
                substitute(spec.id, spec.body, &partial).is_err(),
                "expected failure when omitting {missing}"
            );
        }
    }
}
