pub trait SentimentModel: Send + Sync {
    fn name(&self) -> &str;

    /// Signed polarity of `text` in [-1, 1]. Empty or unscored text is 0.
    fn polarity(&self, text: &str) -> f32;
}
