use std::time::Duration;

/// Character-by-character reveal of a bot message.
///
/// Yields every prefix of the text that ends on a character boundary, from
/// the first character to the full text. The front end sleeps `delay`
/// between frames and marks the message complete after the last one.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    delay: Duration,
    pos: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str, delay: Duration) -> Self {
        Self {
            text,
            delay,
            pos: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.text[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(&self.text[..self.pos])
    }
}
