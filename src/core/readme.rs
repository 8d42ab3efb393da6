use std::collections::HashMap;
use tera::{Context, Tera};

use crate::error::Result;

const README_TEMPLATE: &str = r#"# {{ project_name }}

## Overview
This project is designed to automate the generation of documentation for your codebase. It includes features for generating doc comments, creating README files, documenting API endpoints, and generating usage examples.

## Features
- **Generate Doc Comments**: Automatically generate doc comments for your source files.
- **Create README**: Generate a comprehensive README file for your project.
- **Document API Endpoints**: Create detailed documentation for your API endpoints.
- **Generate Usage Examples**: Provide usage examples for your code.

## Installation
To install the necessary dependencies, run:
```bash
cargo build
```

## Usage
To start the documentation generator, run:
```bash
docsmith serve
```

## Configuration
Ensure the model API key is available in the environment:
```env
GEMINI_API_KEY=your_gemini_api_key_here
```

## Contributing
Contributions are welcome! Please fork the repository and submit a pull request.

## License
This project is licensed under the {{ license }} License.

## Contact
For any questions or issues, please contact {{ author }}{% if contact %} at {{ contact }}{% endif %}.
{% if generated_on %}
---
Generated on {{ generated_on }}.
{% endif %}"#;

/// Renders the fixed README template with per-project values substituted.
pub struct ReadmeRenderer {
    tera: Tera,
}

impl ReadmeRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("readme.md", README_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(
        &self,
        project_name: &str,
        settings: &HashMap<String, String>,
        generated_on: Option<&str>,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("project_name", project_name);
        context.insert(
            "author",
            settings.get("author").map(String::as_str).unwrap_or("Unknown"),
        );
        context.insert(
            "contact",
            settings.get("contact").map(String::as_str).unwrap_or(""),
        );
        context.insert(
            "license",
            settings.get("license").map(String::as_str).unwrap_or("MIT"),
        );
        context.insert("generated_on", &generated_on);

        Ok(self.tera.render("readme.md", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("author".to_string(), "Ada".to_string());
        map.insert("contact".to_string(), "ada@example.com".to_string());
        map.insert("license".to_string(), "MIT".to_string());
        map
    }

    #[test]
    fn test_renders_project_name_as_title() {
        let renderer = ReadmeRenderer::new().unwrap();
        let readme = renderer
            .render("Automated Documentation Creator", &settings(), None)
            .unwrap();

        assert!(readme.starts_with("# Automated Documentation Creator\n"));
        assert!(readme.contains("## Overview"));
        assert!(readme.contains("## License"));
        assert!(readme.contains("contact Ada at ada@example.com"));
    }

    #[test]
    fn test_generated_on_line_is_optional() {
        let renderer = ReadmeRenderer::new().unwrap();

        let without = renderer.render("P", &settings(), None).unwrap();
        assert!(!without.contains("Generated on"));

        let with = renderer.render("P", &settings(), Some("2026-08-23")).unwrap();
        assert!(with.contains("Generated on 2026-08-23."));
    }
}
