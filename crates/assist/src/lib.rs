pub use client::{AssistClient, EMPTY_SUMMARY};
pub use error::AssistError;
pub use settings::AssistSettings;

mod client;
mod error;
mod prompts;
mod settings;

type ResultAssist<T> = Result<T, AssistError>;
