pub mod client;
pub mod dto;
pub mod examples;
pub mod handler;
pub mod page;
pub mod prompt;
pub mod service;
pub mod validator;

pub use self::client::{AiClient, AiClientTrait, OpenAiClient};
pub use self::service::{PoemResult, PoemService};
pub use self::validator::{validate, ValidationOutcome, Word, WordRejection};
