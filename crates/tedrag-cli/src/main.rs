//! tedrag CLI - Command-line interface
//!
//! Usage:
//!   tedrag ask <question>
//!   tedrag ask --json <question>

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tedrag_core::{Credentials, RagSettings};
use tedrag_rag::{LlmodChat, RagPipeline};
use tedrag_vector::{LlmodEmbeddings, PineconeIndex};

#[derive(Parser)]
#[command(name = "tedrag")]
#[command(about = "Ask questions grounded in the indexed TED material")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question and print the grounded answer
    Ask {
        /// Question to ask
        question: String,

        /// Print the full response envelope as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question, json } => {
            let settings = RagSettings::default();
            let credentials = Credentials::from_env();

            let llmod = credentials.llmod()?;
            let pinecone = credentials.pinecone()?;

            let embeddings = LlmodEmbeddings::new(
                llmod.api_key.clone(),
                llmod.base_url.clone(),
                settings.embedding_model.clone(),
            );
            let chat = LlmodChat::new(llmod.api_key, llmod.base_url, settings.chat_model.clone());
            let index = PineconeIndex::connect(pinecone.api_key, &pinecone.index_name).await?;

            let pipeline = RagPipeline::new(
                Arc::new(embeddings),
                Arc::new(index),
                Arc::new(chat),
                settings,
            );

            let response = pipeline.run(&question).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.response);

                for (i, entry) in response.context.iter().enumerate() {
                    println!();
                    println!(
                        "[{}] {} (talk {})",
                        i + 1,
                        entry.title.as_deref().unwrap_or("untitled"),
                        entry.talk_id.as_deref().unwrap_or("unknown"),
                    );
                }
            }
        }
    }

    Ok(())
}
