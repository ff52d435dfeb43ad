//! Output formatting utilities

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::Specialist;
use crate::cli::OutputFormat;

/// Resolve `Auto` to the human-readable format; `Table` means the grid for
/// lists and the pretty detail view for single records
pub fn effective_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => OutputFormat::Table,
        other => other,
    }
}

/// One row of the catalog grid
#[derive(Tabled)]
struct SpecialistRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "RATING")]
    rating: String,
    #[tabled(rename = "REVIEWS")]
    reviews: u32,
    #[tabled(rename = "AVAILABILITY")]
    availability: String,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "LANGUAGES")]
    languages: String,
    #[tabled(rename = "NEW")]
    is_new: String,
}

impl From<&Specialist> for SpecialistRow {
    fn from(s: &Specialist) -> Self {
        let languages = s
            .languages
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: s.id.0,
            name: s.name.clone(),
            category: s.category.to_string(),
            rating: s.rating.to_string(),
            reviews: s.review_count,
            availability: s.availability.to_string(),
            price: s.price.to_string(),
            languages,
            is_new: if s.is_new { "yes" } else { "-" }.to_string(),
        }
    }
}

/// Render the specialist grid as a table
pub fn specialist_table(list: &[Specialist]) -> String {
    let rows: Vec<SpecialistRow> = list.iter().map(SpecialistRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Pretty single-record view
pub fn print_specialist_detail(s: &Specialist) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(s.id).cyan());
    println!("{}: {}", style("Name").bold(), style(&s.name).yellow());
    println!("{}: @{}", style("Handle").bold(), s.handle);
    println!("{}: {}", style("Category").bold(), s.category);
    println!("{}", style("─".repeat(60)).dim());

    println!(
        "{}: {} ({} reviews)",
        style("Rating").bold(),
        s.rating,
        s.review_count
    );
    println!("{}: {}", style("Availability").bold(), s.availability);
    println!("{}: {}", style("Price").bold(), s.price);
    println!(
        "{}: {} years",
        style("Experience").bold(),
        s.experience_years
    );

    if !s.skills.is_empty() {
        println!("{}: {}", style("Skills").bold(), s.skills.join(", "));
    }

    if !s.languages.is_empty() {
        let langs: Vec<String> = s.languages.iter().map(|l| l.to_string()).collect();
        println!("{}: {}", style("Languages").bold(), langs.join(", "));
    }

    if s.is_new {
        println!("{}", style("New on the platform").green());
    }

    println!("{}", style("─".repeat(60)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;

    #[test]
    fn test_effective_format() {
        assert_eq!(effective_format(OutputFormat::Auto), OutputFormat::Table);
        assert_eq!(effective_format(OutputFormat::Json), OutputFormat::Json);
        assert_eq!(effective_format(OutputFormat::Yaml), OutputFormat::Yaml);
        assert_eq!(effective_format(OutputFormat::Table), OutputFormat::Table);
    }

    #[test]
    fn test_table_contains_every_name() {
        let list = mock::specialists();
        let table = specialist_table(&list);
        for s in &list {
            assert!(table.contains(&s.name));
        }
    }
}
