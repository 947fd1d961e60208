//! Single-pass placeholder substitution renderer.

use arkgen_core::{
    application::ports::TemplateRenderer,
    domain::{ParameterBinding, TemplateSpec, substitute},
    error::ArkgenResult,
};
use tracing::instrument;

/// Renderer delegating to the domain's single-pass substitution.
///
/// Kept behind the port so a richer template engine could replace it
/// without touching the application layer.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %spec.id))]
    fn render(&self, spec: &TemplateSpec, binding: &ParameterBinding) -> ArkgenResult<String> {
        Ok(substitute(spec.id, spec.body, binding)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgen_core::domain::{PARAM_PASCAL_NAME, TemplateId};

    #[test]
    fn renders_through_the_port() {
        let spec = TemplateSpec::new(
            TemplateId::Component,
            &[PARAM_PASCAL_NAME],
            "export struct {{PASCAL_NAME}} {}",
        );
        let binding = ParameterBinding::new().with(PARAM_PASCAL_NAME, "CustomButton");
        let out = SimpleRenderer::new().render(&spec, &binding).unwrap();
        assert_eq!(out, "export struct CustomButton {}");
    }

    #[test]
    fn unbound_parameter_surfaces_as_error() {
        let spec = TemplateSpec::new(TemplateId::Page, &[PARAM_PASCAL_NAME], "{{PASCAL_NAME}}");
        let err = SimpleRenderer::new()
            .render(&spec, &ParameterBinding::new())
            .unwrap_err();
        assert!(err.to_string().contains("PASCAL_NAME"));
    }
}
