//! Flag-style CLI wrapper around the grocer binary.
//!
//! One of `--init-db`, `--cli-add`, or `--cli-list` runs the matching
//! maintenance command against the configured database and exits; with
//! no flags the web server starts.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use grocer_db::models::CreateItem;
use grocer_db::repositories::ItemRepo;

/// Grocer - single-store grocery inventory and storefront
#[derive(Debug, Parser)]
#[command(name = "grocer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the database schema and exit
    #[arg(long)]
    pub init_db: bool,

    /// Insert one inventory item and exit (requires --name)
    #[arg(long, requires = "name")]
    pub cli_add: bool,

    /// Item name (unique)
    #[arg(long)]
    pub name: Option<String>,

    /// Item category, free text
    #[arg(long)]
    pub category: Option<String>,

    /// Unit price
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    pub quantity: i64,

    /// Expiry date, YYYY-MM-DD
    #[arg(long)]
    pub expiry: Option<NaiveDate>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Print the inventory table and exit
    #[arg(long)]
    pub cli_list: bool,
}

impl Cli {
    /// Whether any maintenance flag was given (i.e. the server should
    /// not start).
    pub fn is_command(&self) -> bool {
        self.init_db || self.cli_add || self.cli_list
    }
}

/// Run the selected maintenance command against `database_url`.
pub async fn run(cli: &Cli, database_url: &str) -> anyhow::Result<()> {
    let pool = grocer_db::create_pool(database_url)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;

    if cli.init_db {
        grocer_db::run_migrations(&pool)
            .await
            .context("running migrations")?;
        println!("Initialized database at {database_url}");
        return Ok(());
    }

    // The other commands expect the schema to exist already.
    grocer_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    if cli.cli_add {
        // clap's `requires` guarantees --name is present.
        let name = cli.name.clone().unwrap_or_default();
        anyhow::ensure!(cli.price >= 0.0, "--price must be non-negative");
        anyhow::ensure!(cli.quantity >= 0, "--quantity must be non-negative");

        let item = ItemRepo::create(
            &pool,
            &CreateItem {
                name,
                category: cli.category.clone(),
                price: cli.price,
                quantity: cli.quantity,
                expiry_date: cli.expiry,
                notes: cli.notes.clone(),
            },
        )
        .await
        .with_context(|| "inserting item (is the name already taken?)")?;

        println!(
            "Added item #{}: {} (qty {}, price {:.2})",
            item.id, item.name, item.quantity, item.price
        );
        return Ok(());
    }

    if cli.cli_list {
        let items = ItemRepo::list(&pool, None).await.context("listing items")?;

        println!(
            "{:<5} {:<24} {:>5} {:>8}  {}",
            "ID", "Name", "Qty", "Price", "Expiry"
        );
        for item in &items {
            println!(
                "{:<5} {:<24} {:>5} {:>8.2}  {}",
                item.id,
                item.name,
                item.quantity,
                item.price,
                item.expiry_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
            );
        }
        println!("{} item(s)", items.len());
    }

    Ok(())
}
