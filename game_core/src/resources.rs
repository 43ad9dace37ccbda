use crate::Side;

/// Time resource for tracking frames
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f32,   // Seconds since start, only used for the quad rotation
    pub frame: u64, // Frames stepped so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mix factor between the quad's two textures, nudged by the arrow keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub alpha: f32,
}

impl Blend {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub exit_requested: bool,
    pub clamped: Vec<Side>, // Paddles that hit a bound this frame
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.exit_requested = false;
        self.clamped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.exit_requested = true;
        events.clamped.push(Side::Left);

        events.clear();

        assert!(!events.exit_requested);
        assert!(events.clamped.is_empty());
    }

    #[test]
    fn test_blend_keeps_its_start() {
        assert_eq!(Blend::new(0.2).alpha, 0.2);
    }

    #[test]
    fn test_time_starts_at_zero() {
        let time = Time::new();
        assert_eq!(time.now, 0.0);
        assert_eq!(time.frame, 0);
    }
}
