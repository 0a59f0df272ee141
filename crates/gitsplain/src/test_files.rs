//! Test-file classification.
//!
//! A path is a test artifact when either rule fires:
//!
//! 1. **Directory rule**: some path segment is a known test directory name
//!    (case-insensitive)
//! 2. **Filename rule**: the filename matches a per-extension pattern, either
//!    as a suffix or, with leading dots removed, as a prefix
//!
//! Classification is a pure function of the path string. Test files are
//! filtered before parsing so test scaffolding never shows up as architecture.

use std::path::Path;

/// Directory names that mark everything below them as tests.
pub const TEST_DIR_NAMES: &[&str] = &["test", "tests", "__tests__", "spec", "specs", "testing"];

/// Filename patterns keyed by dot-prefixed, lowercase extension.
pub const TEST_FILE_PATTERNS: &[(&str, &[&str])] = &[
    (".py", &["test_", "_test.py", "conftest.py"]),
    (".js", &[".test.js", ".spec.js", "_test.js"]),
    (".jsx", &[".test.jsx", ".spec.jsx"]),
    (".ts", &[".test.ts", ".spec.ts", "_test.ts"]),
    (".tsx", &[".test.tsx", ".spec.tsx"]),
    (".go", &["_test.go"]),
    (".rs", &["_test.rs"]),
    (".java", &["Test.java", "Tests.java"]),
    (".kt", &["Test.kt", "Tests.kt"]),
    (".rb", &["_spec.rb", "_test.rb"]),
    (".php", &["Test.php", "Tests.php"]),
    (".cs", &["Tests.cs", "Test.cs"]),
    (".swift", &["Tests.swift", "Test.swift"]),
    (".scala", &["Test.scala", "Spec.scala"]),
];

/// Whether `path` looks like a test file.
#[must_use]
pub fn is_test_file(path: &str) -> bool {
    is_test_file_with(path, &[])
}

/// Like [`is_test_file`], with extra directory names treated as test
/// directories (compared case-insensitively).
#[must_use]
pub fn is_test_file_with(path: &str, extra_test_dirs: &[String]) -> bool {
    in_test_directory(path, extra_test_dirs) || matches_test_filename(path)
}

fn in_test_directory(path: &str, extra_test_dirs: &[String]) -> bool {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .any(|segment| {
            let segment = segment.to_lowercase();
            TEST_DIR_NAMES.contains(&segment.as_str())
                || extra_test_dirs
                    .iter()
                    .any(|dir| dir.eq_ignore_ascii_case(&segment))
        })
}

fn matches_test_filename(path: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());

    patterns_for(&ext).iter().any(|pattern| {
        name.ends_with(pattern) || name.starts_with(pattern.trim_start_matches('.'))
    })
}

/// Filename patterns for a dot-prefixed extension; empty if none are configured.
#[must_use]
pub fn patterns_for(ext: &str) -> &'static [&'static str] {
    TEST_FILE_PATTERNS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, patterns)| *patterns)
        .unwrap_or_default()
}
