/// Language tags registered with the syntax highlighter, in display order
pub const CODE_LANGUAGE_SUBSET: &[&str] = &[
    "python",
    "javascript",
    "java",
    "go",
    "bash",
    "c",
    "cpp",
    "csharp",
    "css",
    "diff",
    "graphql",
    "json",
    "kotlin",
    "less",
    "lua",
    "makefile",
    "markdown",
    "objectivec",
    "perl",
    "php",
    "php-template",
    "plaintext",
    "python-repl",
    "r",
    "ruby",
    "rust",
    "scss",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vbnet",
    "wasm",
    "xml",
    "yaml",
];

/// Exact, case-sensitive tag match
pub fn is_supported_code_language(tag: &str) -> bool {
    CODE_LANGUAGE_SUBSET.contains(&tag)
}
