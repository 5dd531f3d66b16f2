use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "thermo",
    about = "ThermoGrid — fuzzy-logic cooling optimization for datacenter workloads",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a cooling request against a rule file.
    ///
    /// Reads an optimization request as JSON ({ "servers": [...],
    /// "cooling": { "humidity": ... } }) from a file or stdin and prints
    /// the resulting cooling plan as JSON. A missing rule file is seeded
    /// with the built-in defaults first.
    Optimize {
        /// Rule configuration file
        #[arg(short, long, default_value = "cooling_rules.toml")]
        rules: String,
        /// Request JSON file (default: read stdin)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Manage rule configuration files
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Write the built-in default rule configuration
    Init {
        #[arg(short, long, default_value = "cooling_rules.toml")]
        path: String,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Load and validate a rule file
    Validate {
        #[arg(short, long, default_value = "cooling_rules.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("thermo=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize { rules, input } => commands::optimize::run(&rules, input.as_deref()),
        Commands::Rules { action } => match action {
            RulesAction::Init { path, force } => commands::rules::init(&path, force),
            RulesAction::Validate { path } => commands::rules::validate(&path),
        },
    }
}
