//! Simple placeholder substitution renderer.

use stubsmith_core::{application::ports::TemplateRenderer, domain::TemplateContext};
use tracing::instrument;

/// Renderer using literal, single-pass `{{Token}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(placeholders = context.len()))]
    fn render(&self, template: &str, context: &TemplateContext) -> String {
        context.render(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let ctx = TemplateContext::new().with("TraitName", "Auditable");
        let out = SimpleRenderer::new().render("trait {{TraitName}} // {{TraitName}}", &ctx);
        assert_eq!(out, "trait Auditable // Auditable");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let out = SimpleRenderer::new().render("{{Missing}}", &TemplateContext::new());
        assert_eq!(out, "{{Missing}}");
    }
}
