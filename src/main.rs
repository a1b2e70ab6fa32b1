mod cli;

use scoreboard::config::{self, Config};
use scoreboard_common::dates;
use scoreboard_db::migrations;
use scoreboard_db::models::{NewPong, NewScore, PongUpdate};
use scoreboard_db::pool::{get_conn, init_pool, DbPool};
use scoreboard_db::queries::{pongs, scores};
use scoreboard_db::seed;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PongCommands, ScoreCommands};

fn open_pool(config: &Config) -> Result<DbPool> {
    let db_path = config.database.path.to_string_lossy();
    tracing::info!("Opening database at {}", db_path);
    let pool = init_pool(&db_path, config.database.pool_size)
        .with_context(|| format!("Failed to open database {}", db_path))?;
    Ok(pool)
}

fn init_database(config: &Config, no_seed: bool) -> Result<()> {
    let pool = open_pool(config)?;
    println!(
        "Database ready at {} (schema version {})",
        config.database.path.display(),
        migrations::latest_version()
    );

    if no_seed || !config.seed.on_init {
        return Ok(());
    }

    let conn = get_conn(&pool)?;
    let summary = seed::seed_all(&conn)?;
    print_seed_summary(&summary);
    Ok(())
}

fn seed_database(config: &Config) -> Result<()> {
    let pool = open_pool(config)?;
    let conn = get_conn(&pool)?;
    let summary = seed::seed_all(&conn)?;
    print_seed_summary(&summary);
    Ok(())
}

fn print_seed_summary(summary: &seed::SeedSummary) {
    println!(
        "scores: {} inserted, {} skipped",
        summary.scores.inserted, summary.scores.skipped
    );
    println!(
        "pongs: {} inserted, {} skipped",
        summary.pongs.inserted, summary.pongs.skipped
    );
}

fn run_scores(config: &Config, command: ScoreCommands) -> Result<()> {
    let pool = open_pool(config)?;
    let conn = get_conn(&pool)?;

    match command {
        ScoreCommands::List => {
            for score in scores::list_scores(&conn)? {
                println!("{}", score);
            }
        }
        ScoreCommands::Show { username } => match scores::get_score_by_username(&conn, &username)? {
            Some(score) => println!("{}", score),
            None => anyhow::bail!("No score recorded for '{}'", username),
        },
        ScoreCommands::Add {
            name,
            username,
            score,
            date,
        } => {
            let mut entry = NewScore::new(name, username, score);
            if let Some(date) = date {
                entry = entry.with_dos(dates::parse_date(&date)?);
            }
            let created = scores::create_score(&conn, &entry)?;
            tracing::info!(id = %created.id, username = %created.username, "score recorded");
            println!("{}", created);
        }
    }

    Ok(())
}

fn run_pongs(config: &Config, command: PongCommands) -> Result<()> {
    let pool = open_pool(config)?;
    let conn = get_conn(&pool)?;

    match command {
        PongCommands::List { user } => {
            let games = match user {
                Some(user) => pongs::list_pongs_for_user(&conn, &user)?,
                None => pongs::list_pongs(&conn)?,
            };
            for game in games {
                println!("{}", game);
            }
        }
        PongCommands::Show { id } => match pongs::get_pong(&conn, id)? {
            Some(game) => println!("{}", game),
            None => anyhow::bail!("Match {} not found", id),
        },
        PongCommands::Add {
            user1,
            user2,
            score1,
            score2,
            result1,
            result2,
            at,
        } => {
            let game = NewPong {
                user1,
                user2,
                score1,
                score2,
                result1,
                result2,
                ..NewPong::at(dates::parse_datetime(&at)?)
            };
            let created = pongs::create_pong(&conn, &game)?;
            tracing::info!(id = %created.id, "match recorded");
            println!("{}", created);
        }
        PongCommands::Update {
            id,
            user1,
            user2,
            score1,
            score2,
            result1,
            result2,
        } => {
            let update = PongUpdate {
                user1,
                user2,
                score1,
                score2,
                result1,
                result2,
            };
            let updated = pongs::update_pong(&conn, id, &update)?;
            for rejection in &updated.rejected {
                eprintln!("Ignored {} = {:?}", rejection.field, rejection.value);
            }
            println!("{}", updated.pong);
        }
        PongCommands::Delete { id } => {
            if !pongs::delete_pong(&conn, id)? {
                anyhow::bail!("Match {} not found", id);
            }
            println!("Deleted match {}", id);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load_config_or_default(cli.config.as_deref());

    // Initialize logging
    // Respect RUST_LOG env var if set, then the verbose flag, then the config file
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            return "scoreboard=debug,scoreboard_db=debug".to_string();
        }
        loaded
            .as_ref()
            .ok()
            .and_then(|c| c.logging.filter.clone())
            .unwrap_or_else(|| "scoreboard=warn,scoreboard_db=warn".to_string())
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = loaded?;
    if let Some(path) = cli.database {
        config.database.path = path;
    }

    match cli.command {
        Commands::Init { no_seed } => init_database(&config, no_seed),
        Commands::Seed => seed_database(&config),
        Commands::Scores { command } => run_scores(&config, command),
        Commands::Pongs { command } => run_pongs(&config, command),
        Commands::Version => {
            println!("scoreboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
