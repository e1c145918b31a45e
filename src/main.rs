use std::io::{self, Write};
use std::path::Path;

use anyhow::{Result, bail};
use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use mealprep::config::Config;
use mealprep::interactive::{self, PlanDecision};
use mealprep::storage;
use mealprep_catalog::Catalog;
use mealprep_planning::rules::RuleRegistry;
use mealprep_planning::{MealDiary, PlanError, PlanSession};
use mealprep_shopping::{ShoppingList, render::format_amount};

/// mealprep - rule-driven meal planning
#[derive(Parser)]
#[command(name = "mealprep")]
#[command(about = "Plan meals under house rules and build the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan for the configured dates and confirm it interactively
    Plan {
        /// Seed for deterministic generation
        #[arg(long)]
        seed: Option<u64>,

        /// Accept the first generated plan without prompting
        #[arg(long)]
        accept: bool,
    },
    /// Inspect or maintain the stored meal diary
    Diary {
        #[command(subcommand)]
        command: DiaryCommands,
    },
    /// Rebuild a shopping list from the stored diary
    Shopping {
        /// First date included (defaults to the diary start)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date included (defaults to the diary end)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List catalog meals, or show one meal's ingredient lines
    Catalog {
        /// Meal to show in full
        meal: Option<String>,
    },
    /// List the available planning rules
    Rules,
}

#[derive(Debug, Subcommand)]
enum DiaryCommands {
    /// Print the stored diary
    Show,
    /// Remove dates from the stored diary
    Remove {
        /// Dates to remove (YYYY-MM-DD)
        #[arg(required = true)]
        dates: Vec<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealprep::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Plan { seed, accept } => plan_command(config, seed, accept),
        Commands::Diary { command } => diary_command(config, command),
        Commands::Shopping { from, to } => shopping_command(config, from, to),
        Commands::Catalog { meal } => catalog_command(meal),
        Commands::Rules => rules_command(),
    }
}

#[tracing::instrument(skip(config))]
fn plan_command(config: Config, seed: Option<u64>, accept: bool) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let registry = RuleRegistry::builtin();

    let rules = registry.rule_set(&config.planning.rules)?;
    let pool = catalog.select(&config.planning.meals)?;
    let dates = config.planning_dates().map_err(|e| anyhow::anyhow!(e))?;
    if dates.is_empty() {
        bail!("no planning dates configured; set planning.dates in the config file");
    }

    let diary_path = Path::new(&config.storage.diary_path).to_path_buf();
    let history = storage::load_diary(&diary_path, &catalog)?;
    tracing::info!(
        dates = dates.len(),
        pool = pool.len(),
        rules = rules.len(),
        history = history.len(),
        "starting planning session"
    );

    let mut session = PlanSession::new(
        pool,
        rules,
        history.clone(),
        config.planning.max_attempts,
        seed,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut proposal = check_feasible(session.generate(&dates))?;

    while !accept {
        match interactive::confirm_plan(&proposal, &mut input, &mut output)? {
            PlanDecision::Accepted => break,
            PlanDecision::Rework(changed) => {
                for &date in &changed {
                    if let Some(meal) = proposal.get(date) {
                        session.reject(date, meal.name());
                    }
                }
                proposal = check_feasible(session.regenerate(&proposal, &changed))?;
            }
        }
    }

    let full = history.upsert(&proposal);
    storage::save_diary(&diary_path, &full)?;

    let list = ShoppingList::from_diary(&proposal);
    let list_path =
        storage::write_shopping_list(Path::new(&config.storage.shopping_list_dir), &list)?;
    tracing::info!(path = %list_path.display(), entries = list.len(), "shopping list written");

    writeln!(output, "\nShopping list written to {}", list_path.display())?;
    writeln!(output, "Bon appetit!")?;
    Ok(())
}

/// Map terminal infeasibility to the user-facing message; pass everything
/// else through. Transient retries never reach this point.
fn check_feasible(result: Result<MealDiary, PlanError>) -> Result<MealDiary> {
    match result {
        Ok(slice) => Ok(slice),
        Err(err) if err.is_infeasible() => {
            bail!("no valid plan exists under the current rules and rejections ({err}); relax the rules or the candidate pool")
        }
        Err(err) => Err(err.into()),
    }
}

#[tracing::instrument(skip(config))]
fn diary_command(config: Config, command: DiaryCommands) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let diary_path = Path::new(&config.storage.diary_path).to_path_buf();
    let diary = storage::load_diary(&diary_path, &catalog)?;

    match command {
        DiaryCommands::Show => {
            if diary.is_empty() {
                println!("The diary is empty.");
            } else {
                println!("{diary}");
            }
        }
        DiaryCommands::Remove { dates } => {
            let mut diary = diary;
            let mut removed = 0usize;
            for date in dates {
                if diary.remove(date).is_some() {
                    removed += 1;
                } else {
                    tracing::warn!(%date, "no diary entry on that date");
                }
            }
            storage::save_diary(&diary_path, &diary)?;
            println!("Removed {removed} entries; {} remain.", diary.len());
        }
    }
    Ok(())
}

#[tracing::instrument(skip(config))]
fn shopping_command(config: Config, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let diary = storage::load_diary(Path::new(&config.storage.diary_path), &catalog)?;
    if diary.is_empty() {
        bail!("the diary is empty; plan some meals first");
    }

    let slice = match (from, to) {
        (None, None) => diary,
        (from, to) => {
            let min = from.or_else(|| diary.first_date()).unwrap_or_default();
            let max = to.map(|last| last + Duration::days(1));
            diary.filter_dates(min, max)
        }
    };
    if slice.is_empty() {
        bail!("no diary entries in the requested range");
    }

    let list = ShoppingList::from_diary(&slice);
    print!("{}", list.render());

    let path = storage::write_shopping_list(Path::new(&config.storage.shopping_list_dir), &list)?;
    println!("\nWritten to {}", path.display());
    Ok(())
}

fn catalog_command(meal: Option<String>) -> Result<()> {
    let catalog = Catalog::builtin()?;

    match meal {
        Some(name) => {
            let meal = catalog.get(&name)?;
            let tags: Vec<String> = meal.tags().map(|tag| tag.to_string()).collect();
            if tags.is_empty() {
                println!("{} (meat: {})", meal.name(), meal.meat());
            } else {
                println!("{} (meat: {}; {})", meal.name(), meal.meat(), tags.join(", "));
            }
            for line in meal.ingredients() {
                println!(
                    "  - {}: {}",
                    line.ingredient.name(),
                    format_amount(line.amount, line.unit)
                );
            }
        }
        None => {
            for meal in catalog.meals() {
                println!("{} (meat: {})", meal.name(), meal.meat());
            }
        }
    }
    Ok(())
}

fn rules_command() -> Result<()> {
    let registry = RuleRegistry::builtin();
    for rule in registry.iter() {
        println!("{}: {}", rule.name(), rule.description());
    }
    Ok(())
}
