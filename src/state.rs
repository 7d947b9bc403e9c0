#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeckState {
    Idle,    // No slides were mounted; every operation is a no-op
    Playing, // At least one slide; autoplay runs unless suspended
}
