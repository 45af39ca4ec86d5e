/// Tokenizer — splits a line into words and the gaps between them.
///
/// Nothing is dropped or rewritten: concatenating `lead`, then every word
/// followed by its gap, reproduces the input exactly.

/// A tokenized line. `gaps[i]` is the text following `words[i]`; it is empty
/// only after the last word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub lead: &'a str,
    pub words: Vec<&'a str>,
    pub gaps: Vec<&'a str>,
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_joiner(c)
}

/// True for a non-empty gap made only of whitespace.
pub fn is_whitespace_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(char::is_whitespace)
}

impl<'a> Tokens<'a> {
    /// Words are maximal runs of alphanumerics, apostrophes and hyphens,
    /// with leading and trailing apostrophes/hyphens left in the gaps.
    pub fn parse(line: &'a str) -> Tokens<'a> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut chars = line.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if !is_word_char(c) {
                continue;
            }
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }

            let run = &line[start..end];
            let word_start = end - run.trim_start_matches(is_joiner).len();
            let word_end = start + run.trim_end_matches(is_joiner).len();
            if word_start < word_end {
                spans.push((word_start, word_end));
            }
        }

        let lead_end = spans.first().map_or(line.len(), |&(s, _)| s);
        let mut words = Vec::with_capacity(spans.len());
        let mut gaps = Vec::with_capacity(spans.len());
        for (idx, &(s, e)) in spans.iter().enumerate() {
            words.push(&line[s..e]);
            let gap_end = spans.get(idx + 1).map_or(line.len(), |&(next, _)| next);
            gaps.push(&line[e..gap_end]);
        }

        Tokens {
            lead: &line[..lead_end],
            words,
            gaps,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
