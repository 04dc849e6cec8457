//! Stanza - a terminal poetry reader
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use stanza::api::poetrydb::PoetryDbClient;
use stanza::{
    Config, DailyPoemCache, DailySync, Database, FavoritesStore, Origin, Poem, PoemSource,
    SearchKind,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = parse_args()?;
    match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;

    match command {
        Command::Daily => daily_cli(&config).await,
        Command::Random => random_cli(&config).await,
        Command::Search { kind, query } => search_cli(&config, kind, &query).await,
        Command::Find { author, title } => find_cli(&config, &author, &title).await,
        Command::Favorite => favorite_cli(&config).await,
        Command::Favorites => list_favorites(),
        Command::FavoriteShow { position } => show_favorite(&config, position),
        Command::FavoriteRemove { position } => remove_favorite(position),
        Command::Help | Command::Version => Ok(()),
    }
}

/// CLI commands
enum Command {
    Daily,
    Random,
    Search { kind: SearchKind, query: String },
    Find { author: String, title: String },
    Favorite,
    Favorites,
    FavoriteShow { position: usize },
    FavoriteRemove { position: usize },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Daily);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "daily" | "today" => Ok(Command::Daily),
        "random" => Ok(Command::Random),

        "search" | "s" => {
            let kind_str = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing search kind (title, author or lines)"))?;
            let kind = SearchKind::from_str(kind_str).ok_or_else(|| {
                anyhow::anyhow!("Unknown search kind: {kind_str}\nSupported: title, author, lines")
            })?;
            let query = args[3..].join(" ");
            Ok(Command::Search { kind, query })
        }

        "find" => {
            let author = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing author"))?
                .clone();
            let title = args
                .get(3)
                .ok_or_else(|| anyhow::anyhow!("Missing title"))?
                .clone();
            Ok(Command::Find { author, title })
        }

        "favorite" | "fav" => Ok(Command::Favorite),

        "favorites" | "favs" => match args.get(2).map(String::as_str) {
            None | Some("list") => Ok(Command::Favorites),
            Some("show") => Ok(Command::FavoriteShow {
                position: parse_position(args.get(3))?,
            }),
            Some("rm" | "remove") => Ok(Command::FavoriteRemove {
                position: parse_position(args.get(3))?,
            }),
            Some(other) => Err(anyhow::anyhow!(
                "Unknown favorites command: {other}\nRun 'stanza --help' for usage"
            )),
        },

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'stanza --help' for usage"
        )),
    }
}

/// Parse a 1-based list position
fn parse_position(arg: Option<&String>) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow::anyhow!("Missing favorite number"))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(anyhow::anyhow!(
            "Invalid favorite number: {arg} (use the number shown by 'stanza favorites')"
        )),
    }
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"Stanza - a poem a day in your terminal

USAGE:
    stanza                             Show today's poem
    stanza [COMMAND]

COMMANDS:
    daily                              Show today's poem (fetched once per day)
    random                             Show a random poem
    search <kind> <query>              Search poems
      Kinds: title, author, lines
      Examples:
        stanza search title Ozymandias
        stanza search author Emily Dickinson
        stanza search lines 14

    find <author> <title>              Find a poem by author and title
      Example:
        stanza find "Emily Dickinson" "Hope is the thing"

    favorite                           Add or remove today's poem from favorites
    favorites                          List favorites
    favorites show <n>                 Show favorite number n
    favorites rm <n>                   Remove favorite number n

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}

ENVIRONMENT:
    STANZA_DIR                         Data directory (default ~/.config/stanza)
    RUST_LOG                           Log filter, e.g. debug (default warn)
"#,
        config_path
    );
}

fn print_version() {
    println!("stanza {}", stanza::VERSION);
}

fn print_poem(poem: &Poem, wrap_width: usize) {
    println!("\n{}", poem.title);
    println!("by {}", poem.author);
    println!("{}", "─".repeat(60));

    for line in &poem.lines {
        if wrap_width == 0 || line.is_empty() {
            println!("{line}");
        } else {
            for wrapped in textwrap::wrap(line, wrap_width) {
                println!("{wrapped}");
            }
        }
    }
    println!();
}

fn print_poem_list(poems: &[Poem]) {
    for (i, poem) in poems.iter().enumerate() {
        println!(
            "{:>3}. {} — {} ({} lines)\n     {}",
            i + 1,
            poem.title,
            poem.author,
            poem.line_count(),
            poem.preview(60)
        );
    }
}

async fn daily_cli(config: &Config) -> Result<()> {
    let db = Database::open()?;
    let sync = DailySync::new(
        PoetryDbClient::new(&config.api_base_url),
        DailyPoemCache::new(&db),
    );

    let daily = sync.today().await?;
    let favorites = FavoritesStore::new(&db);

    print_poem(&daily.poem, config.wrap_width);
    if daily.origin == Origin::Network {
        println!("✓ New poem for today");
    }
    if favorites.is_favorite(&daily.poem) {
        println!("★ In your favorites");
    }

    Ok(())
}

async fn random_cli(config: &Config) -> Result<()> {
    let client = PoetryDbClient::new(&config.api_base_url);
    let poem = client.random().await?;
    print_poem(&poem, config.wrap_width);
    Ok(())
}

async fn search_cli(config: &Config, kind: SearchKind, query: &str) -> Result<()> {
    let client = PoetryDbClient::new(&config.api_base_url);
    let poems = client.search_input(kind, query).await?;

    if poems.is_empty() {
        println!("No poems found.");
        return Ok(());
    }

    let shown = poems.len().min(config.search_result_limit);
    println!("{} poems found by {} '{}'\n", poems.len(), kind, query.trim());
    print_poem_list(&poems[..shown]);
    if shown < poems.len() {
        println!("\n… and {} more", poems.len() - shown);
    }

    Ok(())
}

async fn find_cli(config: &Config, author: &str, title: &str) -> Result<()> {
    let client = PoetryDbClient::new(&config.api_base_url);
    let poems = client.search_by_author_and_title(author, title).await?;

    match poems.as_slice() {
        [] => println!("No poems found."),
        [poem] => print_poem(poem, config.wrap_width),
        many => {
            println!("{} poems match\n", many.len());
            print_poem_list(many);
        }
    }

    Ok(())
}

async fn favorite_cli(config: &Config) -> Result<()> {
    let db = Database::open()?;
    let sync = DailySync::new(
        PoetryDbClient::new(&config.api_base_url),
        DailyPoemCache::new(&db),
    );
    let daily = sync.today().await?;

    let favorites = FavoritesStore::new(&db);
    if favorites.toggle(&daily.poem) {
        println!("★ Added '{}' to favorites", daily.poem.title);
    } else {
        println!("☆ Removed '{}' from favorites", daily.poem.title);
    }

    Ok(())
}

fn list_favorites() -> Result<()> {
    let db = Database::open()?;
    let poems = FavoritesStore::new(&db).get_all();

    if poems.is_empty() {
        println!("No favorites yet.");
        println!("\nAdd today's poem with:");
        println!("  stanza favorite");
        return Ok(());
    }

    println!("Favorites:\n");
    print_poem_list(&poems);

    Ok(())
}

fn show_favorite(config: &Config, position: usize) -> Result<()> {
    let db = Database::open()?;
    let poem = FavoritesStore::new(&db)
        .get(position - 1)
        .ok_or_else(|| anyhow::anyhow!("No favorite number {}", position))?;

    print_poem(&poem, config.wrap_width);
    Ok(())
}

fn remove_favorite(position: usize) -> Result<()> {
    let db = Database::open()?;
    let poem = FavoritesStore::new(&db)
        .remove_at(position - 1)
        .ok_or_else(|| anyhow::anyhow!("No favorite number {}", position))?;

    println!("☆ Removed '{}' from favorites", poem.title);
    Ok(())
}
