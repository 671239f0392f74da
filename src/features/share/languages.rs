//! File extension to language display name lookup, used for embed titles.

/// Extension -> display name. Keys are lowercase.
const LANGUAGES: &[(&str, &str)] = &[
    ("bash", "Bash"),
    ("c", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("css", "CSS"),
    ("cxx", "C++"),
    ("dart", "Dart"),
    ("dockerfile", "Dockerfile"),
    ("ex", "Elixir"),
    ("exs", "Elixir"),
    ("go", "Go"),
    ("h", "C"),
    ("hpp", "C++"),
    ("hs", "Haskell"),
    ("html", "HTML"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("jsx", "JavaScript React"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("lua", "Lua"),
    ("md", "Markdown"),
    ("php", "PHP"),
    ("pl", "Perl"),
    ("ps1", "PowerShell"),
    ("py", "Python"),
    ("r", "R"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("sass", "Sass"),
    ("scala", "Scala"),
    ("scss", "SCSS"),
    ("sh", "Shell"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("toml", "TOML"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript React"),
    ("txt", "Plain Text"),
    ("vue", "Vue"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("zig", "Zig"),
];

/// Shown when a file has no extension at all
const NO_EXTENSION: &str = "Plain Text";

/// Display name for a file extension (case-insensitive).
///
/// Unknown extensions fall back to the uppercased extension, so `xyz`
/// becomes `XYZ`.
pub fn display_name(extension: &str) -> String {
    if extension.is_empty() {
        return NO_EXTENSION.to_string();
    }
    LANGUAGES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| extension.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(display_name("py"), "Python");
        assert_eq!(display_name("rs"), "Rust");
        assert_eq!(display_name("yml"), "YAML");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(display_name("RS"), "Rust");
        assert_eq!(display_name("Py"), "Python");
    }

    #[test]
    fn test_unknown_extension_uppercased() {
        assert_eq!(display_name("foo"), "FOO");
        assert_eq!(display_name("xyz"), "XYZ");
    }

    #[test]
    fn test_missing_extension() {
        assert_eq!(display_name(""), "Plain Text");
    }

    #[test]
    fn test_table_keys_are_lowercase_and_unique() {
        for (i, (ext, _)) in LANGUAGES.iter().enumerate() {
            assert_eq!(*ext, ext.to_lowercase());
            assert!(!LANGUAGES[i + 1..].iter().any(|(other, _)| other == ext));
        }
    }
}
