use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use outgoing_webhook::describe::build_describe_payload;
use outgoing_webhook::http::UreqClient;
use outgoing_webhook::ops::handle_run;
use rich_text_mrkdwn::{RichTextBlock, render_block};
use serde_json::{Value, json};

#[derive(Parser)]
#[command(name = "outgoing-webhook-cli")]
#[command(about = "Render rich text to mrkdwn and dispatch it to a webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the function descriptor.
    Describe,
    /// Render a rich text message to mrkdwn.
    Render {
        /// Message JSON file; stdin when omitted.
        #[arg(long, value_name = "MESSAGE_JSON")]
        message: Option<PathBuf>,
    },
    /// Render the message and POST it to the webhook.
    Send {
        #[arg(long)]
        webhook: String,
        /// Message JSON file; stdin when omitted.
        #[arg(long, value_name = "MESSAGE_JSON")]
        message: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Describe => {
            println!(
                "{}",
                serde_json::to_string_pretty(&build_describe_payload())?
            );
        }
        Command::Render { message } => {
            let blocks = read_message(message.as_deref())?;
            let block = blocks.first().ok_or_else(|| anyhow!("message required"))?;
            println!("{}", render_block(block));
        }
        Command::Send { webhook, message } => {
            let blocks = read_message(message.as_deref())?;
            let input = json!({"webhook": webhook, "message": blocks});
            let out = handle_run(&serde_json::to_vec(&input)?, &UreqClient);
            let out_json: Value = serde_json::from_slice(&out).context("parse run output")?;
            println!("{}", serde_json::to_string_pretty(&out_json)?);
            if out_json.get("ok") != Some(&Value::Bool(true)) {
                process::exit(1);
            }
        }
    }
    Ok(())
}

/// Read the message as either a single rich text block or an array of them.
fn read_message(path: Option<&Path>) -> Result<Vec<RichTextBlock>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read message file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if raw.trim().is_empty() {
        return Err(anyhow!("message JSON required via --message or stdin"));
    }
    let value: Value = serde_json::from_str(&raw).context("parse message JSON")?;
    let blocks = if value.is_array() {
        serde_json::from_value(value).context("parse rich text blocks")?
    } else {
        vec![serde_json::from_value(value).context("parse rich text block")?]
    };
    Ok(blocks)
}
