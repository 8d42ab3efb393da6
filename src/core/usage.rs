use std::path::Path;

/// Prompt asking the model for runnable usage examples of a source file.
pub fn build_prompt(path: &Path, source: &str) -> String {
    format!(
        "Generate practical usage examples for the code in {}. \
         Return a Markdown document with one fenced code block per example \
         and a one-line description above each block:\n\n{}",
        path.display(),
        source
    )
}

/// Placeholder document written when no model is configured or no source file
/// was supplied.
pub fn fallback_document(project_name: &str) -> String {
    format!(
        "# Usage Examples\n\n\
         Usage examples for {} have not been generated yet.\n\n\
         ```\n// Usage example\n// ... existing code ...\n```\n",
        project_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_names_the_project() {
        let doc = fallback_document("demo");
        assert!(doc.starts_with("# Usage Examples\n"));
        assert!(doc.contains("Usage examples for demo"));
    }

    #[test]
    fn test_prompt_carries_the_source() {
        let prompt = build_prompt(Path::new("lib.rs"), "pub fn f() {}");
        assert!(prompt.contains("lib.rs"));
        assert!(prompt.contains("pub fn f() {}"));
    }
}
