use regex::Regex;
use std::path::Path;

use crate::error::{DocsmithError, Result};

/// Builds doc-comment prompts and cleans up model responses before they are
/// written back over the source file.
pub struct JsdocGenerator {
    fence_pattern: Regex,
}

impl JsdocGenerator {
    pub fn new() -> Result<Self> {
        // Matches an opening fence with an optional language tag, or a bare
        // closing fence.
        let fence_pattern =
            Regex::new(r"```[\w+-]*\n?").map_err(|e| DocsmithError::Config(e.to_string()))?;

        Ok(Self { fence_pattern })
    }

    /// Prompt asking the model to return the whole file with doc comments added.
    pub fn build_prompt(&self, path: &Path, source: &str) -> String {
        format!(
            "Generate doc comments for the following source file ({}). \
             Return the complete file with the comments inserted, and no other text:\n\n{}",
            path.display(),
            source
        )
    }

    /// Strip Markdown code fences the model tends to wrap its answer in.
    pub fn clean_response(&self, response: &str) -> String {
        self.fence_pattern.replace_all(response, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_language_tagged_fences() {
        let generator = JsdocGenerator::new().unwrap();
        let response = "```typescript\nconst x = 1;\n```";
        assert_eq!(generator.clean_response(response), "const x = 1;\n");
    }

    #[test]
    fn test_strips_bare_fences() {
        let generator = JsdocGenerator::new().unwrap();
        let response = "```\nfn main() {}\n```\n";
        assert_eq!(generator.clean_response(response), "fn main() {}\n");
    }

    #[test]
    fn test_leaves_plain_code_untouched() {
        let generator = JsdocGenerator::new().unwrap();
        let response = "/// Adds two numbers\nfn add(a: i32, b: i32) -> i32 { a + b }";
        assert_eq!(generator.clean_response(response), response);
    }

    #[test]
    fn test_prompt_includes_file_path_and_source() {
        let generator = JsdocGenerator::new().unwrap();
        let prompt = generator.build_prompt(Path::new("src/index.ts"), "let a = 1;");
        assert!(prompt.contains("src/index.ts"));
        assert!(prompt.contains("let a = 1;"));
    }
}
