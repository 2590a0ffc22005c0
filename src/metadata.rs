// src/metadata.rs
//! Package metadata extraction
//!
//! Parses the Provides declaration of a package's primary source file to
//! recover its name, version token, and free-text description, e.g.
//!
//! ```text
//! \ProvidesPackage{foo}[2020/01/01 v1.2 sample pkg]
//! ```
//!
//! An absent declaration is not an error; callers treat the package as
//! unversioned.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;
use walkdir::WalkDir;

/// Name and raw option string from a Provides declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Raw bracket contents, empty when the declaration has no options
    pub options: String,
}

fn provides_package_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\ProvidesPackage\{([[:alnum:]]+)\}(?:\s*\[([^\]]*)\])?").unwrap()
    })
}

fn provides_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\ProvidesClass\{([[:alnum:]]+)\}(?:\s*\[([^\]]*)\])?").unwrap()
    })
}

fn version_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // 1-4 digit groups separated by '.', '/' or '-': 2020/01/01, 1.2-3, 7.
    // Only a free-standing token counts; digits inside a word like "v1.2"
    // are part of the description.
    RE.get_or_init(|| Regex::new(r"(?:^|\s)(\d+(?:[./-]\d+){0,3})(?:\s|$)").unwrap())
}

/// Scan file content for a Provides declaration
///
/// Looks for `\ProvidesClass` when `is_class` is set, `\ProvidesPackage`
/// otherwise. The first matching line wins. Returns `None` when no
/// declaration is present.
pub fn extract_declaration(content: &str, is_class: bool) -> Option<Declaration> {
    let re = if is_class {
        provides_class_re()
    } else {
        provides_package_re()
    };

    for line in content.lines() {
        if let Some(caps) = re.captures(line) {
            let name = caps[1].to_string();
            let options = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            debug!("Found Provides declaration for '{}'", name);
            return Some(Declaration { name, options });
        }
    }

    None
}

/// Split a declaration option string into (version, description)
///
/// The version is the first numeric token of 1-4 digit groups separated by
/// '.', '/' or '-'; the description is the remainder with the token removed
/// and leading whitespace trimmed. Without a numeric token the version is
/// empty and the whole option string is the description.
pub fn split_version_description(options: &str) -> (String, String) {
    let token = version_token_re()
        .captures(options)
        .and_then(|caps| caps.get(1));

    match token {
        Some(m) => {
            let version = m.as_str().to_string();
            let mut description = String::with_capacity(options.len() - version.len());
            description.push_str(&options[..m.start()]);
            description.push_str(&options[m.end()..]);
            (version, description.trim_start().to_string())
        }
        None => (String::new(), options.to_string()),
    }
}

/// Find the primary source file under `source` and extract its declaration
///
/// For a `.sty`/`.cls` file the file itself is the primary source; for a
/// directory every style (or class, when `is_class`) file is scanned in
/// name order and the first one carrying a declaration wins. Unreadable or
/// undeclared sources yield `None`.
pub fn scan_source(source: &Path, is_class: bool) -> Option<Declaration> {
    let wanted = if is_class { "cls" } else { "sty" };

    let candidates: Vec<_> = if source.is_file() {
        vec![source.to_path_buf()]
    } else {
        WalkDir::new(source)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == wanted))
            .collect()
    };

    candidates.iter().find_map(|path| {
        let content = fs::read_to_string(path).ok()?;
        extract_declaration(&content, is_class)
    })
}
