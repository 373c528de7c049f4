//! entitygen CLI - Table and column constant generator
//!
//! Commands:
//! - `entitygen generate` - Generate constant classes for every entity in a catalog
//! - `entitygen inspect` - Print the resolved artifact models as JSON
//! - `entitygen check` - Validate a class catalog

use clap::{Parser, Subcommand, ValueEnum};
use entitygen_cli::{catalog, generate, logging};
use entitygen_core::OutputVariant;

#[derive(Parser)]
#[command(name = "entitygen")]
#[command(author, version, about = "Table and column constant generator for entity classes", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// UPPER_SNAKE constants holding bare column names
    Flat,
    /// Table name, qualified column references and column lists
    Qualified,
}

impl From<VariantArg> for OutputVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Flat => OutputVariant::Flat,
            VariantArg::Qualified => OutputVariant::Qualified,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constant classes for every entity in a catalog
    Generate {
        /// Path to the class catalog (TOML or JSON)
        #[arg(short, long)]
        catalog: String,

        /// Output directory for generated sources (default: print to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to entitygen.toml (default: ./entitygen.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Artifact variant, overriding the config file
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Generated class name prefix, overriding the config file
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Print the resolved artifact models as JSON
    Inspect {
        /// Path to the class catalog (TOML or JSON)
        #[arg(short, long)]
        catalog: String,

        /// Only inspect this class (qualified or simple name)
        #[arg(long)]
        class: Option<String>,

        /// Path to entitygen.toml (default: ./entitygen.toml if present)
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate a class catalog
    Check {
        /// Path to the class catalog (TOML or JSON)
        #[arg(short, long)]
        catalog: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Generate {
            catalog,
            output,
            config,
            variant,
            prefix,
        } => {
            let overrides = generate::ConfigOverrides {
                config_path: config,
                variant: variant.map(Into::into),
                class_prefix: prefix,
            };
            generate::run(&catalog, output.as_deref(), &overrides)?;
        }
        Commands::Inspect {
            catalog,
            class,
            config,
        } => {
            let overrides = generate::ConfigOverrides {
                config_path: config,
                ..Default::default()
            };
            generate::inspect(&catalog, class.as_deref(), &overrides)?;
        }
        Commands::Check { catalog } => {
            catalog::check(&catalog)?;
        }
    }

    Ok(())
}
