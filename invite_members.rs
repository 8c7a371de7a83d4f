//! Invite team members
//!
//! Adds password-less accounts for the given usernames. Each invited member
//! sets their own password on first login.
//!
//! ```text
//! frontier-invite Flame Lele SimLeek
//! ```

use echo_frontier::backend::auth::{invite_users, UserStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("Usage: frontier-invite <username>...");
        std::process::exit(2);
    }

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL must be set to invite members")?;

    println!("Connecting to database...");
    let store = UserStore::connect(&database_url).await?;

    let report = invite_users(&store, &names).await;

    for name in &report.invited {
        println!("Invited: {}", name);
    }
    for name in &report.skipped {
        println!("{} already in database", name);
    }
    for (name, error) in &report.failed {
        eprintln!("Failed to invite {}: {}", name, error);
    }
    println!(
        "Done: {} invited, {} skipped, {} failed",
        report.invited.len(),
        report.skipped.len(),
        report.failed.len()
    );

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
