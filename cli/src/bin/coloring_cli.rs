use clap::{Parser, Subcommand};
use cli::EditScript;
use color_eyre::eyre::Result;
use coloring::{EditCommand, SaveFormat, Session, io};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a coloring page from a photo
    Generate {
        /// Path to the source photo (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,
        /// Path to write the generated page
        #[arg(short, long)]
        output: PathBuf,
        /// Canvas bound width in pixels
        #[arg(long, default_value = "800")]
        width: u32,
        /// Canvas bound height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
    },
    /// Generate a page and replay an edit script over it
    Process {
        /// Path to the JSON or TOML script file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the JSON schema for edit commands
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            input,
            output,
            width,
            height,
        } => {
            generate_page(input, output, (*width, *height))?;
        }
        Commands::Process { config } => {
            process_script(config)?;
        }
        Commands::Schema => {
            let schema = EditCommand::schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn generate_page(input: &Path, output: &Path, bounds: (u32, u32)) -> Result<()> {
    info!("Generating coloring page from {:?}", input);

    let photo = io::load_photo(input)?;
    let mut session = Session::new();
    let page = session.generate(&photo, bounds)?;
    info!(
        width = page.width(),
        height = page.height(),
        "pipeline finished"
    );

    let format = format_for(output);
    session.save(output, format)?;
    info!("✅ Page written to {:?}", output);

    Ok(())
}

fn process_script(config_path: &Path) -> Result<()> {
    let script = EditScript::from_file(config_path)?;
    info!("Edit script: {:?}", script);

    let photo = io::load_photo(Path::new(&script.input))?;
    let mut session = Session::new();
    session.generate(&photo, (script.bound_width, script.bound_height))?;

    for (i, command) in script.commands.iter().enumerate() {
        info!("Applying command {}: {}", i + 1, command);
        if let Err(e) = command.apply(&mut session) {
            warn!("Command {} failed, skipping: {}", i + 1, e);
        }
    }

    session.save(Path::new(&script.output), script.format)?;
    info!("✅ Edited page written to {}", script.output);

    Ok(())
}

/// Pick the save format from the output extension; PNG when unclear.
fn format_for(path: &Path) -> SaveFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jpg") | Some("jpeg") => SaveFormat::Jpeg,
        _ => SaveFormat::Png,
    }
}
