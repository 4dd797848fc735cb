use clap::{Parser, Subcommand};
use gallery_lightbox::{config, generate, logging, output, viewer::ViewerSettings, walk};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared flag for commands that read a search export.
#[derive(clap::Args, Clone)]
struct ExportArgs {
    /// JSON export of the media host's search results
    #[arg(long, default_value = "export.json")]
    export: PathBuf,
}

#[derive(Parser)]
#[command(name = "gallery-lightbox")]
#[command(about = "Photo gallery with a keyboard, click and swipe driven lightbox")]
#[command(long_about = "\
Photo gallery with a keyboard, click and swipe driven lightbox

Photos live on the media host. The gallery is built from a JSON export of the
host's search results:

  {
    \"resources\": [
      { \"public_id\": \"gallery/001-dawn\", \"format\": \"jpg\",
        \"width\": \"2000\", \"height\": \"1000\" },
      ...
    ]
  }

Each resource becomes a photo whose id is its position in the export.

Navigation:
  Arrow keys, prev/next   previous/next id
  Swipe left/right        next/previous in display order ([order] in config)
  Filmstrip thumbnail     that photo
  Escape, close button    back to the grid

Run 'gallery-lightbox gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the static gallery: grid page plus one lightbox page per photo
    Generate {
        #[command(flatten)]
        export: ExportArgs,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Load and validate an export without writing anything
    Check(ExportArgs),
    /// Replay viewer inputs and print each transition
    Walk {
        #[command(flatten)]
        export: ExportArgs,
        /// Photo id to open on
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// left, right, escape, swipe-left, swipe-right, prev, next, close, loaded, or a filmstrip id
        inputs: Vec<String>,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Generate {
            export,
            output: output_dir,
        } => {
            let config = config::load_config_file(&cli.config)?;
            println!(
                "==> Generating {} → {}",
                export.export.display(),
                output_dir.display()
            );
            let result = generate::generate(&export.export, &output_dir, &config)?;
            output::print_generate_output(&result);
        }
        Command::Check(export) => {
            let config = config::load_config_file(&cli.config)?;
            println!("==> Checking {}", export.export.display());
            let photos = generate::load_gallery(&export.export, &config)?;
            output::print_check_output(&photos, config.order);
            println!("==> Export is valid");
        }
        Command::Walk {
            export,
            start,
            inputs,
        } => {
            let config = config::load_config_file(&cli.config)?;
            let actions = inputs
                .into_iter()
                .map(|name| name.parse::<walk::Action>().map(|action| (name, action)))
                .collect::<Result<Vec<_>, walk::UnknownAction>>()?;
            let photos = Arc::new(generate::load_gallery(&export.export, &config)?);
            let settings: ViewerSettings = config.viewer.settings();
            let steps = walk::walk(photos, start, &actions, settings, config.viewer.viewport())?;
            output::print_walk_output(&steps);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
