use clap::{Parser, Subcommand};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "service-cli")]
#[command(about = "Client for the simple service endpoints", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the public endpoint
    Public,
    /// Call the private endpoint, optionally as a gateway would
    Private {
        /// Identity to inject; omitted means the header is not sent
        #[arg(short, long)]
        identity: Option<String>,

        /// Credential header name
        #[arg(long, default_value = "X-Credential-Identifier")]
        header: String,
    },
    /// Show recent HTTP exchanges
    Traces,
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Public => {
            let res = client.get(format!("{}/api/public", cli.url)).send().await?;
            print_text(res).await?;
        }
        Commands::Private { identity, header } => {
            let mut req = client.get(format!("{}/api/private", cli.url));
            if let Some(identity) = identity {
                req = req.header(
                    HeaderName::from_bytes(header.as_bytes())?,
                    HeaderValue::from_str(&identity)?,
                );
            }
            print_text(req.send().await?).await?;
        }
        Commands::Traces => {
            let res = client
                .get(format!("{}/actuator/httptrace", cli.url))
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Health => {
            let res = client
                .get(format!("{}/actuator/health", cli.url))
                .send()
                .await?;
            print_json(res).await?;
        }
    }

    Ok(())
}

async fn print_text(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    // Some variants already end the body with a newline.
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
