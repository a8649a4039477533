//! Starter files written by `sift init`.
//!
//! The templates are kept as real TOML (so tests can parse them) and every setting is
//! commented out on the way to disk.

/// Project-level starter config.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Starter config for `~/.sift.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Commented-out project config.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Commented-out global config.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Turns every setting line of `template` into a comment.
///
/// Existing comments and blank lines pass through untouched.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| match line {
            "" => "\n".to_string(),
            l if l.starts_with('#') => format!("{l}\n"),
            l => format!("# {l}\n"),
        })
        .collect()
}
