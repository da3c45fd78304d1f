use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wanderlust::portfolio::Session;
use wanderlust::{config, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "wanderlust")]
#[command(about = "Static site generator for travel photography portfolios")]
#[command(long_about = "\
Static site generator for travel photography portfolios

Content is a photographer profile plus one JSON document per destination.
Every page of the site is rendered to plain HTML: home, one page per
destination, a filterable gallery, an about page and a full-screen viewer
page for every image.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── data/
  │   ├── photographer.json        # Name, tagline, biography, contact, socials
  │   └── destinations/
  │       ├── kyoto.json           # One document per configured destination
  │       └── iceland.json
  └── public/                      # Copied verbatim to the output root
      └── images/...

Any missing or invalid document fails the load. The build still writes an
error page and exits non-zero.

Run 'wanderlust gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the content and render the site
    Build,
    /// Validate config and content without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;

            println!("==> Loading {}", cli.source.display());
            let session = Session::load(&cli.source, &config);
            match &session {
                Session::Ready(portfolio) => {
                    output::print_load_output(portfolio, &config, &cli.source)
                }
                Session::Failed(err) => output::print_load_error(err),
            }

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            let report = generate::generate(&session, &config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            if let Session::Failed(err) = session {
                return Err(err.into());
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            match Session::load(&cli.source, &config) {
                Session::Ready(portfolio) => {
                    output::print_load_output(&portfolio, &config, &cli.source);
                    println!("==> Content is valid");
                }
                Session::Failed(err) => {
                    output::print_load_error(&err);
                    return Err(err.into());
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
