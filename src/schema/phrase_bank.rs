/// Phrase bank — stock sentences appended to transformed text.
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered list of injectable phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseBank {
    phrases: Vec<String>,
}

impl PhraseBank {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Pick one phrase uniformly at random. `None` when the bank is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.phrases.choose(rng).map(String::as_str)
    }

    /// Append phrases not already present, preserving order.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, phrases: I) {
        for phrase in phrases {
            if !self.phrases.contains(&phrase) {
                self.phrases.push(phrase);
            }
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl IntoIterator for PhraseBank {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.into_iter()
    }
}

impl FromIterator<String> for PhraseBank {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut bank = PhraseBank::default();
        bank.extend(iter);
        bank
    }
}
