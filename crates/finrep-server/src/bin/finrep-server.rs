//! Financial report tool server CLI
//!
//! Builds the tool registry at startup and either lists the registered
//! tools or executes one by name, printing the JSON response envelope.
//! The serving transport mounts the same registry; this binary is the
//! direct way to exercise the tools.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin finrep-server -p finrep-server -- list
//!
//! cargo run --bin finrep-server -p finrep-server -- call get_financial_report \
//!     --params '{"stock_code":"00700","report_type":"income","period_type":"year","period":3}'
//! ```

use clap::{Parser, Subcommand};
use finrep_server::{ServerConfig, register_tools};
use finrep_tools::ToolRegistry;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "finrep-server")]
#[command(about = "Financial report tool server", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered tools
    List,
    /// Execute a tool by name and print the JSON envelope
    Call {
        /// Tool name, e.g. get_financial_report
        name: String,
        /// Tool parameters as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    finrep_utils::init_tracing();

    let args = Args::parse();

    let config = Arc::new(ServerConfig::builder().with_env_csv_dump_dir().build()?);
    let registry = ToolRegistry::new();
    register_tools(&registry, &config)?;
    info!("Registered {} tools", registry.len());

    match args.command.unwrap_or(Command::List) {
        Command::List => {
            let mut tools = registry.list_tools();
            tools.sort_by(|a, b| a.name().cmp(b.name()));
            for tool in tools {
                println!("{}\n    {}", tool.name(), tool.description());
            }
        }
        Command::Call { name, params } => {
            let Some(tool) = registry.get(&name) else {
                anyhow::bail!("Unknown tool: {name} (try `list`)");
            };
            let params: serde_json::Value = serde_json::from_str(&params)?;
            let envelope = tool.execute(params).await?;
            println!("{}", finrep_server::envelope::to_string(&envelope));
        }
    }

    Ok(())
}
