/// Well-known repository aliases and their URLs.
const KNOWN: &[(&str, &str)] = &[
    ("google", "https://dl.google.com/dl/android/maven2/"),
    ("maven-central", "https://repo.maven.apache.org/maven2/"),
    ("gradle-plugin-portal", "https://plugins.gradle.org/m2/"),
];

/// Expand a repository alias to its URL. Unknown entries are taken as URLs.
pub fn repository_url(entry: &str) -> String {
    KNOWN
        .iter()
        .find(|(alias, _)| *alias == entry)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| entry.to_string())
}
