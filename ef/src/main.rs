use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;

use errorfortune::cli::{Cli, Command};
use errorfortune::config::Config;
use errorfortune::random::ThreadRandom;
use errorfortune::{
    CrackOptions, Fortune, FortuneStore, crack, random_sample, style_names,
};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

/// Turn stored wisdom markup into terminal text: `<br>` becomes a newline
/// and `<strong>` emphasis is stripped.
fn render_wisdom(wisdom: &str) -> String {
    wisdom
        .replace("<br><br>", "\n\n")
        .replace("<br>", "\n")
        .replace("<strong>", "")
        .replace("</strong>", "")
}

fn print_fortune(fortune: &Fortune, favorite: bool) {
    let marker = if favorite { " ★".yellow().to_string() } else { String::new() };
    println!("{}{}", fortune.original.dimmed(), marker);
    println!("  {} {}", "»".cyan(), render_wisdom(&fortune.wisdom));
    println!(
        "  {} {} {} {}",
        fortune.style.magenta(),
        fortune.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
        "id".dimmed(),
        fortune.id.dimmed()
    );
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Crack { message, style, no_save } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let options = CrackOptions {
                style: style.unwrap_or_else(|| config.default_style.clone()),
                save_to_history: !no_save,
            };
            let fortune = crack(&message, &options, Some(&store))?;
            print_fortune(&fortune, false);
        }
        Command::Sample { style } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let mut rng = ThreadRandom;
            let message = random_sample(&mut rng);
            info!("sampled error: {message}");
            let options = CrackOptions {
                style: style.unwrap_or_else(|| config.default_style.clone()),
                save_to_history: true,
            };
            let fortune = crack(message, &options, Some(&store))?;
            print_fortune(&fortune, false);
        }
        Command::Styles => {
            for name in style_names() {
                if name == config.default_style {
                    println!("{} {}", name.cyan(), "(default)".dimmed());
                } else {
                    println!("{name}");
                }
            }
        }
        Command::History { limit } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let history = store.history();
            if history.is_empty() {
                println!("No fortunes yet");
            } else {
                for fortune in history.iter().take(limit.unwrap_or(usize::MAX)) {
                    print_fortune(fortune, store.is_favorite(fortune));
                }
            }
        }
        Command::Favorites => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let favorites = store.favorites();
            if favorites.is_empty() {
                println!("No favorites saved");
            } else {
                for fortune in &favorites {
                    print_fortune(fortune, true);
                }
            }
        }
        Command::Favorite { id } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let fortune = store
                .find_by_id(&id)
                .ok_or_else(|| eyre!("no fortune matches id '{id}'"))?;
            let added = store.toggle_favorite(&fortune)?;
            if added {
                println!("{} Added to favorites", "★".yellow());
            } else {
                println!("{} Removed from favorites", "✓".green());
            }
        }
        Command::Export { output } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let json = store.export()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("{} Exported to {}", "✓".green(), path.display());
                }
                None => println!("{json}"),
            }
        }
        Command::Import { file } => {
            let store = FortuneStore::open(&config.store_path, config.limits())?;
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            store.import(&json)?;
            println!("{} Imported from {}", "✓".green(), file.display());
        }
    }

    Ok(())
}
