//! Umbrella header import parsing.
//!
//! An umbrella header declares a module's public API surface as a sequence of
//! `#import` directives. Parsing extracts the basenames of the locally
//! imported headers; the classifier then uses that set as a basename filter
//! for the public scope.
//!
//! Parsing is deliberately strict about the reference shape. A reference is
//! either a bare header name (`"Header.h"`, `<Header.h>`) or a
//! product-qualified one whose prefix must equal the declaring module's
//! product name (`<MyLib/Header.h>`). Anything else (deeper nesting, a
//! foreign prefix, an import of a system framework) contributes nothing.
//! A malformed line is never an error: headers routinely contain comments,
//! macros, and conditional blocks this parser has no business rejecting.

use std::collections::BTreeSet;

use crate::domain::headers::SYSTEM_FRAMEWORK_IMPORTS;

/// Extract the public import basenames from umbrella header content.
///
/// Line order and duplicates do not matter; only set membership does.
pub fn parse_public_imports(content: &str, product_name: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter_map(|line| local_import(line, product_name))
        .map(str::to_string)
        .collect()
}

/// The imported header basename declared by `line`, if it is a well-formed
/// local import.
fn local_import<'a>(line: &'a str, product_name: &str) -> Option<&'a str> {
    let stripped = line.trim();
    let rest = stripped.strip_prefix("#import")?.trim_start();

    let (open, close) = match rest.chars().next()? {
        '"' => ('"', '"'),
        '<' => ('<', '>'),
        _ => return None,
    };
    let body = &rest[open.len_utf8()..];
    let reference = &body[..body.find(close)?];

    let components: Vec<&str> = reference.split('/').collect();
    let name = match components.as_slice() {
        [name] => name,
        [prefix, name] if *prefix == product_name => name,
        _ => return None,
    };

    if SYSTEM_FRAMEWORK_IMPORTS.contains(&components[0]) {
        return None;
    }
    if name.is_empty() {
        return None;
    }
    Some(name)
}
