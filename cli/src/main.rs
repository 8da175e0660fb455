use clap::{Parser, Subcommand};
use std::io::Write;

use trailhead_cli::commands;
use trailhead_cli::logging;
use trailhead_cli::progress_watch;
use trailhead_cli::readline;
use trailhead_cli::CliContext;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new()?;
    print!("{}", commands::status(&ctx));

    loop {
        let line = readline()?;
        if line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Pick up anything another process wrote since the last command
        ctx.store.sync_from_storage();

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Trail progress console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List trail stops and which are visited
    Stops,
    /// Mark a stop as visited
    Visit { stop: String },
    /// Mark the stop behind a page route as visited
    Navigate { route: String },
    /// Show progress and unlock status
    Status,
    /// Clear all progress
    Reset,
    /// Search pages, experience, projects and skills
    Search { query: Vec<String> },
    /// Follow progress changes from other processes
    Watch,
    /// Show settings, or write them to the config file with --save
    Config {
        #[arg(long)]
        save: bool,
    },
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting\n")?;
    args.insert(0, "trailhead".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    let output = match &cli.command {
        Some(Commands::Stops) => commands::list_stops(ctx),
        Some(Commands::Visit { stop }) => commands::visit(ctx, stop),
        Some(Commands::Navigate { route }) => commands::navigate(ctx, route),
        Some(Commands::Status) => commands::status(ctx),
        Some(Commands::Reset) => commands::reset(ctx),
        Some(Commands::Search { query }) => commands::search(ctx, &query.join(" ")),
        Some(Commands::Watch) => {
            progress_watch::watch(ctx).await?;
            String::new()
        }
        Some(Commands::Config { save: false }) => commands::show_config(ctx),
        Some(Commands::Config { save: true }) => commands::save_config(ctx),
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => String::new(),
    };

    write!(std::io::stdout(), "{output}").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    Ok(false)
}
