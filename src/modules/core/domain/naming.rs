//! Shell identifier derivation

/// Turn a command name into a fragment usable in a shell variable name.
///
/// Hyphens, dots and spaces all become underscores. Nothing else is touched.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            c => c,
        })
        .collect()
}

/// Identifier of the child `name` below the node identified by `prefix`
pub fn child_identifier(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, sanitize(name))
}
