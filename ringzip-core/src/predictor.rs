/// Next-byte predictor driven by the previously reconstructed byte.
///
/// Closed loop: both sides of a stream must call [`Predictor::update`] with the
/// byte the *decoder* will see, in the same order, or they drift apart.
pub trait Predictor {
    /// Predict the next byte. `previous` is `None` at the start of a stream.
    /// Returns `None` when the predictor has nothing to go on yet.
    fn predict(&self, previous: Option<u8>) -> Option<u8>;

    /// Record an observed byte.
    fn update(&mut self, value: u8);

    /// Forget everything (start of a new stream).
    fn reset(&mut self);
}
