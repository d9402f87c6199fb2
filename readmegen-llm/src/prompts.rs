//! README generation prompts
//!
//! This module contains the instruction templates submitted to the model,
//! with the repository metadata substituted in.

use readmegen_core::PromptContext;

/// System prompt for README generation
pub const README_SYSTEM_PROMPT: &str = r#"
You are an expert technical writer specializing in crafting clear, accurate, and
professional README documents for software repositories.

Your role is to analyze repository metadata - the file structure and the language
breakdown - and produce a complete, well-organized README in Markdown.

Key responsibilities:
- Infer the project's purpose and architecture from its file layout
- Describe the technology stack based on the actual language breakdown
- Structure content with proper headings and logical flow
- Write for developers encountering the project for the first time

Key principles:
- Base every statement on the metadata actually provided
- Never invent files, commands, or capabilities the metadata does not support
- Maintain a professional, technical tone throughout
"#;

/// System prompt for the minimal template variant
pub const MINIMAL_SYSTEM_PROMPT: &str =
    "You are an expert technical writer. Generate Markdown README files for software repositories.";

/// Which instruction template to substitute the metadata into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptTemplate {
    /// Full styling instruction enumerating the required README sections
    #[default]
    Rich,
    /// One-line-per-field instruction, the degenerate variant
    Minimal,
}

impl PromptTemplate {
    /// The system prompt paired with this template
    pub fn system_prompt(&self) -> &'static str {
        match self {
            PromptTemplate::Rich => README_SYSTEM_PROMPT,
            PromptTemplate::Minimal => MINIMAL_SYSTEM_PROMPT,
        }
    }

    /// Render the user-facing instruction block with the metadata substituted in
    pub fn render(&self, context: &PromptContext) -> String {
        match self {
            PromptTemplate::Rich => create_readme_prompt(context),
            PromptTemplate::Minimal => create_minimal_prompt(context),
        }
    }
}

/// Template for the full README generation prompt
pub fn create_readme_prompt(context: &PromptContext) -> String {
    format!(
        r#"Generate a complete README.md document for the repository "{}".

1. The language breakdown of the repository (bytes of code per language):
<languages>
{}
</languages>

2. The complete file tree of the repository:
<file_tree>
{}
</file_tree>

The README must contain the following sections, in this order:
- Hero: project title with relevant badges
- Overview: what the project is and why it exists
- Features: the key capabilities evident from the repository structure
- Tech Stack: the languages and technologies actually used
- Architecture: how the major parts fit together
- Project Structure: an annotated view of the important directories and files
- Usage: how to build and run the project
- Contributing: how to contribute
- License: licensing information as far as the metadata shows it

IMPORTANT FORMATTING INSTRUCTIONS:
- Return ONLY the README document itself
- DO NOT wrap the document in markdown code blocks (no ``` or ```markdown)
- DO NOT include any explanation or commentary before or after the document
- DO NOT use emoji in headers

IMPORTANT:
1. Only reference badges, links, and files that the metadata above supports - never fabricate them
2. Derive the tech stack from the language breakdown, not from assumptions
3. Keep the project structure section limited to paths that actually appear in the file tree"#,
        context.repo_name,
        format_languages(context),
        format_file_tree(context),
    )
}

/// Template for the minimal one-line-per-field prompt
pub fn create_minimal_prompt(context: &PromptContext) -> String {
    format!(
        "Generate a proper markdown based README.md file for a GitHub repository with the following metadata:\n\
         - Repository Name: {}\n\
         - Languages Used: {}\n\
         - File Structure: {}",
        context.repo_name,
        serde_json::to_string(&context.languages_used).unwrap_or_else(|_| "{}".to_string()),
        serde_json::to_string(&context.all_files).unwrap_or_else(|_| "[]".to_string()),
    )
}

/// Render the language mapping as one `name: bytes` line per language,
/// largest first so the dominant language leads.
fn format_languages(context: &PromptContext) -> String {
    if context.languages_used.is_empty() {
        return "(no language data)".to_string();
    }

    let mut languages: Vec<(&String, &u64)> = context.languages_used.iter().collect();
    languages.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    languages
        .into_iter()
        .map(|(name, bytes)| format!("- {}: {} bytes", name, bytes))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the file paths one per line, preserving upstream order
fn format_file_tree(context: &PromptContext) -> String {
    if context.all_files.is_empty() {
        return "(empty repository)".to_string();
    }

    context
        .all_files
        .iter()
        .map(|path| format!("- {}", path))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmegen_core::RepositoryMetadata;
    use std::collections::HashMap;

    fn sample_context() -> PromptContext {
        let mut languages = HashMap::new();
        languages.insert("C".to_string(), 120u64);
        languages.insert("Makefile".to_string(), 30u64);

        let metadata = RepositoryMetadata::new(
            vec!["README".to_string(), "src/main.c".to_string()],
            languages,
        );
        PromptContext::new("Hello-World", &metadata)
    }

    #[test]
    fn test_rich_prompt_substitutes_all_fields() {
        let prompt = create_readme_prompt(&sample_context());

        assert!(prompt.contains("\"Hello-World\""));
        assert!(prompt.contains("- C: 120 bytes"));
        assert!(prompt.contains("- src/main.c"));
        // Dominant language first
        assert!(prompt.find("- C: 120 bytes").unwrap() < prompt.find("- Makefile: 30 bytes").unwrap());
    }

    #[test]
    fn test_rich_prompt_lists_required_sections() {
        let prompt = create_readme_prompt(&sample_context());
        for section in [
            "Hero",
            "Overview",
            "Features",
            "Tech Stack",
            "Architecture",
            "Project Structure",
            "Usage",
            "Contributing",
            "License",
        ] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
        assert!(prompt.contains("never fabricate"));
        assert!(prompt.contains("DO NOT use emoji in headers"));
    }

    #[test]
    fn test_minimal_prompt_substitutes_all_fields() {
        let prompt = create_minimal_prompt(&sample_context());
        assert!(prompt.contains("Repository Name: Hello-World"));
        assert!(prompt.contains("\"C\":120"));
        assert!(prompt.contains("src/main.c"));
    }

    #[test]
    fn test_empty_metadata_renders_without_error() {
        let metadata = RepositoryMetadata::new(Vec::new(), HashMap::new());
        let context = PromptContext::new("empty", &metadata);

        let rich = PromptTemplate::Rich.render(&context);
        assert!(rich.contains("(empty repository)"));
        assert!(rich.contains("(no language data)"));

        let minimal = PromptTemplate::Minimal.render(&context);
        assert!(minimal.contains("{}"));
        assert!(minimal.contains("[]"));
    }

    #[test]
    fn test_default_template_is_rich() {
        assert_eq!(PromptTemplate::default(), PromptTemplate::Rich);
    }
}
