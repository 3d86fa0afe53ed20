use clap::Parser;

use crate::config::DEFAULT_MODEL;

const EXAMPLES: &str = "\
Examples:
  gemini \"What is the capital of France?\"
  gemini \"Translate 'hello world' to Spanish\"
  gemini show all files
  echo \"Summarize this text\" | gemini
  gemini < prompt.txt";

/// Send a prompt to the Google Gemini API.
#[derive(Debug, Parser)]
#[command(name = "gemini", about = "Send a prompt to the Google Gemini API.")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// The prompt text (if not provided, reads from stdin).
    #[arg(value_name = "PROMPT")]
    pub prompt_parts: Vec<String>,

    /// The Gemini model to use.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MODEL)]
    pub model: String,
}
