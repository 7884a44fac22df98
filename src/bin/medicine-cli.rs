use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "medicine-cli")]
#[command(about = "Query a running medicine lookup service", long_about = None)]
struct Cli {
    /// Base URL of the service.
    #[arg(short, long, default_value = "http://localhost:5004")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find medicines whose name contains NAME (case-insensitive)
    Lookup {
        /// Name or name fragment to search for
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Lookup { name } => {
            let res = client
                .post(format!("{}/get_medicine_info", cli.url.trim_end_matches('/')))
                .json(&json!({ "medicine_name": name }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) if status.is_success() => println!("{}", serde_json::to_string_pretty(&json)?),
        Ok(json) => eprintln!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => eprintln!("Response: {}", text),
    }
    Ok(())
}
