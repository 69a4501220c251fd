//! Command-line shortest-route search over a street map

use clap::Parser;
use std::path::PathBuf;
use wayfinder::street::StreetNetwork;

#[derive(Parser)]
#[command(name = "wayfinder", version, about = "Shortest-route search over a street map")]
struct Cli {
    /// Path to the street map file
    map: PathBuf,

    /// Starting intersection name
    start: String,

    /// Destination intersection name
    end: String,

    /// Print every road segment of the route
    #[arg(long)]
    verbose: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let network = StreetNetwork::load(&cli.map)?;

    match network.find_route(&cli.start, &cli.end)? {
        Some(route) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else if cli.verbose {
                println!("{route}");
            } else {
                println!("Total distance: {:.2}", route.total_distance);
            }
        }
        None => {
            println!("No route from {} to {}", cli.start, cli.end);
        }
    }
    Ok(())
}
