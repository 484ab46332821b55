use crate::cli::commands::AskArgs;
use crate::config::Config;
use crate::errors::NicolError;
use crate::llm::{create_finalizer, create_providers};
use crate::summarizer::Summarizer;

pub async fn handle_ask(args: AskArgs) -> Result<(), NicolError> {
    let config = Config::from_env();
    let summarizer = Summarizer::new(create_providers(&config), create_finalizer(&config));

    let summary = summarizer.summarize(&args.prompt).await?;
    println!("{}", summary);
    Ok(())
}
