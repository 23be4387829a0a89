//! Component source templates.

use minijinja::{context, Environment};

/// Template engine for generated component files.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the default component template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        // A .tsx name keeps auto-escaping off; the body is already JSX
        env.add_template("component.tsx", COMPONENT_TEMPLATE)
            .expect("Failed to add component template");

        Self { env }
    }

    /// Render a function component returning `body` inside a fragment.
    pub fn render_component(
        &self,
        name: &str,
        imports: &[String],
        body: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("component.tsx")?;

        tmpl.render(context! {
            name => name,
            imports => imports,
            body => body,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const COMPONENT_TEMPLATE: &str = r#"{% for line in imports %}{{ line }}
{% endfor %}{% if imports %}
{% endif %}export default function {{ name }}() {
  return (
    <>
      {{ body|indent(6) }}
    </>
  )
}
"#;
