//! Catalog data compiled into the binary

const CATALOGS: &[(&str, &str)] = &[
    ("homebrew", include_str!("../../catalogs/homebrew.json")),
    ("browser", include_str!("../../catalogs/browser.json")),
    ("editor", include_str!("../../catalogs/editor.json")),
    ("terminal", include_str!("../../catalogs/terminal.json")),
    ("node", include_str!("../../catalogs/node.json")),
    ("shell", include_str!("../../catalogs/shell.json")),
    ("git", include_str!("../../catalogs/git.json")),
    ("communication", include_str!("../../catalogs/communication.json")),
    ("productivity", include_str!("../../catalogs/productivity.json")),
    ("design", include_str!("../../catalogs/design.json")),
    ("ai", include_str!("../../catalogs/ai.json")),
    ("api", include_str!("../../catalogs/api.json")),
    ("database", include_str!("../../catalogs/database.json")),
    ("java", include_str!("../../catalogs/java.json")),
    (
        "js-package-manager",
        include_str!("../../catalogs/js-package-manager.json"),
    ),
];

/// Embedded JSON for `category`, if one ships with the binary
pub fn lookup(category: &str) -> Option<&'static str> {
    CATALOGS
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, json)| *json)
}

#[cfg(test)]
pub fn ids() -> impl Iterator<Item = &'static str> {
    CATALOGS.iter().map(|(id, _)| *id)
}
