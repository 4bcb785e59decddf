use std::time::Duration;

/// Outcome of revealing one more character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingStep {
    /// Text visible after this step; more characters follow.
    Reveal(String),
    /// The final character was revealed; this is the full text.
    Finished(String),
}

/// Character-by-character reveal of a captured text.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Reveal the next character. Returns `None` once finished.
    pub fn step(&mut self) -> Option<TypingStep> {
        if self.is_finished() {
            return None;
        }

        self.revealed += 1;
        let visible = self.visible();
        if self.is_finished() {
            Some(TypingStep::Finished(visible))
        } else {
            Some(TypingStep::Reveal(visible))
        }
    }

    /// Offsets from start at which each remaining step fires.
    ///
    /// Each step is scheduled from the previous one, so the k-th step lands
    /// at `interval * k`.
    pub fn schedule(&self, interval: Duration) -> Vec<Duration> {
        (1..=self.chars.len() - self.revealed)
            .map(|k| interval * k as u32)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_characters_take_two_steps() {
        let mut typewriter = Typewriter::new("Hi");
        assert_eq!(
            typewriter.schedule(Duration::from_millis(100)),
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );

        assert_eq!(typewriter.step(), Some(TypingStep::Reveal("H".to_string())));
        assert_eq!(typewriter.step(), Some(TypingStep::Finished("Hi".to_string())));
        assert_eq!(typewriter.step(), None);
        assert!(typewriter.schedule(Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn empty_text_is_already_finished() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.step(), None);
        assert!(typewriter.schedule(Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let mut typewriter = Typewriter::new("héllo");
        assert_eq!(typewriter.len(), 5);
        typewriter.step();
        typewriter.step();
        assert_eq!(typewriter.visible(), "hé");
    }

    #[test]
    fn total_duration_is_interval_times_length() {
        let typewriter = Typewriter::new("Software Engineer");
        let schedule = typewriter.schedule(Duration::from_millis(100));
        assert_eq!(schedule.len(), 17);
        assert_eq!(schedule.last(), Some(&Duration::from_millis(1700)));
    }
}
