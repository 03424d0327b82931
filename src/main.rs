use clap::{Parser, Subcommand};
use meetgen::config::{self, SiteConfig};
use meetgen::{generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meetgen")]
#[command(about = "Static site generator for cross country race results")]
#[command(long_about = "\
Static site generator for cross country race results

Your filesystem is the data source. Every CSV in the meets directory
becomes a results page, and the index page links to all of them.

Site structure:

  site/
  ├── config.toml                  # Site config (optional)
  ├── index.html                   # Generated meet index
  ├── css/                         # Stylesheets (supplied, not generated)
  ├── images/profiles/             # Runner photos referenced by result cards
  └── meets/
      ├── Rock_Creek_Invite.csv    # One CSV per meet, header row first;
      │                            # must carry Name, Place, Time, Grade
      └── Rock_Creek_Invite.html   # Generated next to its CSV

Meet CSV filenames use underscores for spaces: Rock_Creek_Invite.csv is
listed as \"Rock Creek Invite\". Runner photos are looked up as
images/profiles/<Runner_Name>.jpg, spaces replaced the same way.

Run 'meetgen gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory (holds the meets folder, receives the index)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (defaults to <root>/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pass: scan meets, render every page, render the index
    Build,
    /// Scan the meets directory and print the discovered manifest
    Scan {
        /// Print the manifest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse every meet CSV without writing any HTML
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Build => {
            let config = site_config(&cli)?;
            println!("==> Scanning {}", cli.root.join(&config.meets_dir).display());
            let manifest = scan::scan(&cli.root, &config)?;
            output::print_scan_output(&manifest);

            println!("==> Rendering HTML");
            generate::generate(&cli.root, &manifest)?;
            output::print_generate_output(&manifest);
        }
        Command::Scan { json } => {
            let config = site_config(&cli)?;
            let manifest = scan::scan(&cli.root, &config)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest);
            }
        }
        Command::Check => {
            let config = site_config(&cli)?;
            let manifest = scan::scan(&cli.root, &config)?;
            output::print_scan_output(&manifest);
            generate::check(&manifest)?;
            println!("==> All meet files parse");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn site_config(cli: &Cli) -> Result<SiteConfig, config::ConfigError> {
    config::load_config(&cli.root, cli.config.as_deref())
}
