use crate::Oscillator;

/// Advance the quad's translation by one frame
pub fn advance_oscillator(oscillator: &mut Oscillator) -> f32 {
    oscillator.advance()
}
