//! List categories command

use colored::Colorize;
use std::io::Write;

use crate::catalog::Catalog;
use crate::interfaces::cli::CliError;

/// Print category names with record counts, or the records of `categories`
pub fn list_categories<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    categories: &[String],
) -> Result<(), CliError> {
    if categories.is_empty() {
        return list_summary(out, catalog);
    }

    let mut shown = 0;
    for category in categories {
        if !catalog.contains(category) {
            writeln!(
                out,
                "{} Unknown category: {}",
                "⚠".bold().yellow(),
                category.yellow()
            )?;
            continue;
        }
        shown += 1;

        let records = catalog.records(category);
        writeln!(out, "{} ({})", category.bold().green(), records.len())?;
        for record in records {
            let mut line = format!(
                "  {} -> {}",
                record.name.cyan(),
                record.url.blue().underline()
            );
            if !record.description.is_empty() {
                line.push_str(&format!(" {}", record.description.dimmed()));
            }
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }

    if shown == 0 {
        return Err(CliError::CatalogError(format!(
            "none of the requested categories exist: {}",
            categories.join(", ")
        )));
    }
    Ok(())
}

fn list_summary<W: Write>(out: &mut W, catalog: &Catalog) -> Result<(), CliError> {
    if catalog.is_empty() {
        writeln!(out, "{} No categories found", "ℹ".bold().blue())?;
        return Ok(());
    }

    writeln!(out, "{}", "Categories:".bold().green())?;
    writeln!(out)?;
    for name in catalog.names() {
        let count = catalog.records(name).len();
        writeln!(
            out,
            "  {} {}",
            name.cyan(),
            format!("({} links)", count).dimmed()
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{} Total {} categories, {} links",
        "ℹ".bold().blue(),
        catalog.len().to_string().green(),
        catalog.record_count().to_string().green()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LinkRecord;

    fn catalog() -> Catalog {
        Catalog::from_iter([
            (
                "DNS".to_string(),
                vec![LinkRecord::new("dnsdumpster", "https://dnsdumpster.com", "")],
            ),
            (
                "Servers".to_string(),
                vec![
                    LinkRecord::new("Shodan", "https://www.shodan.io", "Devices"),
                    LinkRecord::new("Censys", "https://search.censys.io", ""),
                ],
            ),
        ])
    }

    fn run(categories: &[&str]) -> (Result<(), CliError>, String) {
        colored::control::set_override(false);
        let categories: Vec<String> = categories.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = list_categories(&mut out, &catalog(), &categories);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_summary_lists_counts() {
        let (result, output) = run(&[]);
        assert!(result.is_ok());
        assert!(output.contains("DNS (1 links)"));
        assert!(output.contains("Servers (2 links)"));
        assert!(output.contains("Total 2 categories, 3 links"));
    }

    #[test]
    fn test_records_of_named_category() {
        let (result, output) = run(&["Servers"]);
        assert!(result.is_ok());
        assert!(output.contains("Shodan -> https://www.shodan.io Devices"));
        assert!(output.contains("Censys -> https://search.censys.io"));
        assert!(!output.contains("dnsdumpster"));
    }

    #[test]
    fn test_unknown_categories() {
        let (result, output) = run(&["Nope", "DNS"]);
        assert!(result.is_ok());
        assert!(output.contains("Unknown category: Nope"));

        let (result, _) = run(&["Nope"]);
        assert!(matches!(result, Err(CliError::CatalogError(_))));
    }
}
