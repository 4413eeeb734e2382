use std::sync::Arc;

use nd_core::{Error, Result, SentimentModel};

pub mod dummy;
pub mod lexicon;

pub use dummy::DummyModel;
pub use lexicon::LexiconModel;

/// Select a polarity model by name. `None` selects the lexicon scorer.
pub fn create_model(name: Option<&str>) -> Result<Arc<dyn SentimentModel>> {
    match name.unwrap_or("lexicon") {
        "lexicon" => Ok(Arc::new(LexiconModel::new())),
        "dummy" => Ok(Arc::new(DummyModel)),
        other => Err(Error::InvalidInput(format!(
            "Unknown sentiment model: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        assert_eq!(create_model(None).unwrap().name(), "lexicon");
        assert_eq!(create_model(Some("dummy")).unwrap().name(), "dummy");
        assert!(create_model(Some("bert")).is_err());
    }
}
