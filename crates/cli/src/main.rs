use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taskintent_core::ClassificationResult;
use taskintent_ml::{
    GeminiClient, GeminiConfig, IntentClassifier, ModelIntentClassifier, RuleIntentClassifier,
};
use taskintent_observability::{init_tracing, ClassifierMetrics};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "taskintent")]
#[command(about = "Task manager intent classifier")]
struct Cli {
    #[arg(long, global = true, env = "GEMINI_MODEL")]
    model: Option<String>,

    #[arg(long, global = true, env = "GEMINI_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Interactive read loop (default)")]
    Chat,
    #[command(about = "Classify one message with the model")]
    Classify { text: String },
    #[command(about = "Classify one message with the keyword rules only")]
    Rules { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing("taskintent_cli");

    let Cli {
        model,
        api_base,
        command,
    } = Cli::parse();

    match command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let classifier = build_classifier(GeminiConfig::from_env()?, model, api_base)?;
            let stdin = io::stdin();
            run_chat(&classifier, stdin.lock(), io::stdout()).await?;
            info!(
                model = classifier.model_name(),
                metrics = ?classifier.metrics().snapshot(),
                "chat session finished"
            );
        }
        Command::Classify { text } => {
            let classifier = build_classifier(GeminiConfig::from_env()?, model, api_base)?;
            println!("{}", classify_once(&classifier, &text).await?);
        }
        Command::Rules { text } => {
            println!("{}", classify_once(&RuleIntentClassifier, &text).await?);
        }
    }

    Ok(())
}

fn build_classifier(
    mut config: GeminiConfig,
    model: Option<String>,
    api_base: Option<String>,
) -> Result<ModelIntentClassifier<GeminiClient>> {
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(api_base) = api_base {
        config = config.with_api_base(api_base);
    }

    info!(model = config.model(), "classifier configured");
    let client = GeminiClient::new(config)?;
    Ok(ModelIntentClassifier::new(client, ClassifierMetrics::shared()))
}

async fn classify_once<C>(classifier: &C, text: &str) -> Result<String>
where
    C: IntentClassifier,
{
    let prediction = classifier.predict(text).await;
    render(&prediction.result)
}

async fn run_chat<C, R, W>(classifier: &C, mut input: R, mut output: W) -> Result<()>
where
    C: IntentClassifier,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Task Manager Intent Classifier")?;
    writeln!(output, "Type 'exit' to quit\n")?;

    loop {
        write!(output, "User: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed reading input")? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            writeln!(output, "Exiting...")?;
            break;
        }

        if message.is_empty() {
            continue;
        }

        let prediction = classifier.predict(message).await;
        writeln!(output, "{}\n", render(&prediction.result)?)?;
    }

    Ok(())
}

fn render(result: &ClassificationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to render classification")
}
