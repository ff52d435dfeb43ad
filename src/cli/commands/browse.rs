//! `workr browse` command - interactive catalog session
//!
//! Mirrors the prototype's single-page flow: a forced role selection when no
//! role is persisted, then a filterable grid with session-scoped favorites.

use console::style;
use dialoguer::{Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::catalog::{filter_specialists, Category, FilterCriteria, Specialist, SpecialistId};
use crate::cli::commands::catalog::FetchArgs;
use crate::cli::output;
use crate::cli::GlobalOpts;
use crate::core::favorites::Favorites;
use crate::core::role::{RoleAction, UserType};

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,
}

const MENU: &[&str] = &[
    "Search",
    "Pick category",
    "Toggle favorite",
    "Show favorites",
    "Reset filters",
    "Quit",
];

/// Run the interactive session
pub fn run(args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = super::load_role_store(global)?;

    // Role gate: nothing renders until a role is chosen
    if store.current().is_none() {
        let roles = [UserType::Customer, UserType::Contractor];
        let pick = Select::new()
            .with_prompt("Choose your role")
            .items(&["Customer", "Contractor"])
            .default(0)
            .interact()
            .into_diagnostic()?;
        store
            .apply(RoleAction::Select(roles[pick]))
            .into_diagnostic()?;
        println!("Role saved: {}", style(roles[pick]).yellow());
    }

    eprintln!("{}", style("Loading specialists...").dim());
    let specialists = super::catalog::fetch_specialists(&args.fetch)?;

    let mut favorites = Favorites::new();
    let mut criteria = FilterCriteria::default();

    loop {
        let visible = filter_specialists(&specialists, &criteria);
        print_grid(&visible, &favorites);

        let choice = Select::new()
            .with_prompt("Action")
            .items(MENU)
            .default(0)
            .interact()
            .into_diagnostic()?;

        match choice {
            0 => {
                let term: String = Input::new()
                    .with_prompt("Search (empty to clear)")
                    .allow_empty(true)
                    .interact_text()
                    .into_diagnostic()?;
                criteria.search = if term.trim().is_empty() {
                    None
                } else {
                    Some(term)
                };
            }
            1 => {
                criteria.category = pick_category()?;
            }
            2 => {
                let id: u32 = Input::new()
                    .with_prompt("Specialist id")
                    .interact_text()
                    .into_diagnostic()?;
                let id = SpecialistId(id);
                if specialists.iter().any(|s| s.id == id) {
                    favorites = favorites.toggle(id);
                } else {
                    println!("{}", style(format!("No specialist with id {}", id)).red());
                }
            }
            3 => {
                print_favorites(&specialists, &favorites);
            }
            4 => {
                criteria = FilterCriteria::default();
            }
            _ => break,
        }
    }

    Ok(())
}

fn pick_category() -> Result<Option<Category>> {
    let categories = [
        None,
        Some(Category::Design),
        Some(Category::Development),
        Some(Category::Marketing),
        Some(Category::Writing),
        Some(Category::Photography),
    ];
    let labels: Vec<String> = categories
        .iter()
        .map(|c| match c {
            Some(c) => c.to_string(),
            None => "all".to_string(),
        })
        .collect();

    let pick = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(categories[pick])
}

fn print_grid(visible: &[Specialist], favorites: &Favorites) {
    if visible.is_empty() {
        println!("No specialists match the current filters.");
        return;
    }
    println!("{}", output::specialist_table(visible));
    println!(
        "{} specialist(s), {} favorite(s)",
        visible.len(),
        favorites.count()
    );
}

fn print_favorites(specialists: &[Specialist], favorites: &Favorites) {
    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }
    println!("{} favorite(s):", favorites.count());
    for id in favorites.ids() {
        if let Some(s) = specialists.iter().find(|s| s.id == id) {
            println!("  {} {} ({})", style(s.id).cyan(), s.name, s.category);
        }
    }
}
