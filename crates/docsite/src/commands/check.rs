//! `docsite check` command implementation.

use std::collections::HashSet;

use docsite_config::{NavigationTree, SiteConfiguration};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid.
pub(crate) fn execute(args: &ConfigArgs) -> Result<(), CliError> {
    let output = Output::new();
    let config = args.load()?;

    print_summary(&output, &config);

    for warning in warnings(&config) {
        output.warning(&format!("Warning: {warning}"));
    }

    output.success("Configuration is valid");
    Ok(())
}

fn print_summary(output: &Output, config: &SiteConfiguration) {
    let metadata = config.metadata();
    let navigation = config.navigation();

    output.highlight(&metadata.title);
    output.separator();
    output.info(&format!("Site URL: {}", metadata.canonical_site_url));

    let locales: Vec<_> = config
        .locales()
        .iter()
        .map(|l| format!("{} ({})", l.key, l.lang))
        .collect();
    output.info(&format!("Locales: {}", locales.join(", ")));

    output.info(&format!(
        "Sidebar: {} groups, {} items, {} pages {}",
        navigation.len(),
        navigation.item_count(),
        navigation.slugs().count(),
        output.dim(&format!("(depth {})", navigation.depth()))
    ));

    if !config.social().is_empty() {
        let platforms: Vec<_> = config.social().iter().map(|(p, _)| p.as_str()).collect();
        output.info(&format!("Social: {}", platforms.join(", ")));
    }

    match config.edit_link() {
        Some(edit_link) => output.info(&format!("Edit links: {}", edit_link.base_url)),
        None => output.info("Edit links: disabled"),
    }

    if !config.plugins().is_empty() {
        output.info(&format!("Plugins: {}", config.plugins().join(", ")));
    }
    output.info(&format!("Footer: {}", config.footer().copyright));
}

/// Non-fatal issues worth reporting to the author.
fn warnings(config: &SiteConfiguration) -> Vec<String> {
    let mut warnings = Vec::new();
    let navigation = config.navigation();

    if navigation.is_empty() {
        warnings.push("sidebar is empty".to_owned());
    }
    for slug in duplicate_slugs(navigation) {
        warnings.push(format!("slug '{slug}' appears more than once in the sidebar"));
    }

    warnings
}

/// Slugs referenced by more than one sidebar leaf, in first-repeat order.
fn duplicate_slugs(navigation: &NavigationTree) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    navigation
        .slugs()
        .filter(|slug| !seen.insert(*slug) && reported.insert(*slug))
        .collect()
}

#[cfg(test)]
mod tests {
    use docsite_config::{BuildContext, ConfigFormat};
    use pretty_assertions::assert_eq;

    use super::*;

    fn load(sidebar: &str) -> SiteConfiguration {
        let toml = format!(
            "[metadata]\ntitle = \"EienJS\"\ncanonical_site_url = \"https://eienjs.com\"\n{sidebar}"
        );
        SiteConfiguration::from_content(&toml, ConfigFormat::Toml, &BuildContext::new(2026))
            .unwrap()
    }

    #[test]
    fn test_warns_on_empty_sidebar() {
        let config = load("");
        assert_eq!(warnings(&config), vec!["sidebar is empty"]);
    }

    #[test]
    fn test_warns_on_duplicate_slugs_once() {
        let config = load(
            r#"
[[sidebar]]
label = "Guides"
items = [
  { label = "Manifest", slug = "getting-started/manifest" },
  { label = "Manifest again", slug = "/getting-started/manifest" },
  { label = "Manifest thrice", slug = "getting-started/manifest" },
  { label = "Contributing", slug = "getting-started/contributing" },
]
"#,
        );
        assert_eq!(
            warnings(&config),
            vec!["slug 'getting-started/manifest' appears more than once in the sidebar"]
        );
    }

    #[test]
    fn test_no_warnings_for_clean_sidebar() {
        let config = load(
            r#"
[[sidebar]]
label = "Guides"
items = [{ label = "Manifest", slug = "getting-started/manifest" }]
"#,
        );
        assert!(warnings(&config).is_empty());
    }
}
