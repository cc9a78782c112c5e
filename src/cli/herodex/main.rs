use clap::{Parser, Subcommand};

use herodex::messages::MessageLog;
use herodex::models::Hero;
use herodex::service::HeroService;

#[derive(Parser)]
#[command(name = "herodex", version, about = "Hero CRUD against a mock REST api")]
struct Cli {
    /// Base URL of the hero api (overrides HEROES_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the in-memory hero api
    Serve {
        #[arg(long, default_value = "127.0.0.1:8787")]
        addr: String,
    },
    /// List all heroes
    List,
    /// Fetch one hero by id
    Get { id: u64 },
    /// Add a hero
    Add { name: String },
    /// Delete a hero by id
    Delete { id: u64 },
    /// Search heroes by name substring
    Search { term: String },
    /// Rename a hero
    Update { id: u64, name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_path = std::env::var("HERODEX_LOG").ok();
    herodex::init_tracing(log_path.as_deref())?;

    let Cli { api_url, command } = Cli::parse();

    let base_url = api_url.unwrap_or_else(herodex::default_api_url);
    let messages = MessageLog::new();
    let service = HeroService::new(base_url, messages.clone());

    match command {
        Command::Serve { addr } => return herodex::mock::serve(&addr).await,
        Command::List => print_heroes(&service.get_heroes().await),
        Command::Get { id } => print_outcome(service.get_hero(id).await),
        Command::Add { name } => print_outcome(service.add_hero(name).await),
        Command::Delete { id } => print_outcome(service.delete_hero(id).await),
        Command::Search { term } => print_heroes(&service.search_heroes(&term).await),
        Command::Update { id, name } => {
            print_outcome(service.update_hero(&Hero { id, name }).await)
        }
    }

    for entry in messages.messages() {
        println!("[{}] {}", entry.at.format("%H:%M:%S"), entry.text);
    }

    Ok(())
}

fn print_heroes(heroes: &[Hero]) {
    if heroes.is_empty() {
        println!("no heroes");
    }
    for hero in heroes {
        println!("{:>4}  {}", hero.id, hero.name);
    }
}

fn print_outcome(hero: Option<Hero>) {
    match hero {
        Some(hero) => println!("{:>4}  {}", hero.id, hero.name),
        None => println!("no result (see log)"),
    }
}
