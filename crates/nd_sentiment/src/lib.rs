pub mod models;

pub use models::{create_model, DummyModel, LexiconModel};

pub mod prelude {
    pub use super::create_model;
    pub use nd_core::{Sentiment, SentimentModel};
}
