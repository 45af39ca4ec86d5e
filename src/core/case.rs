/// Surface case — classify a token's capitalization and re-apply it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCase {
    /// No uppercase letters at all, or no cased letters.
    Lower,
    /// First letter uppercase, not every letter uppercase. A lone
    /// uppercase letter ("I") lands here.
    Capitalized,
    /// Two or more cased letters, all uppercase.
    Upper,
    /// Anything else ("iPhone"); the replacement keeps its own casing.
    Mixed,
}

impl SurfaceCase {
    pub fn of(token: &str) -> SurfaceCase {
        let mut cased = token.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        let first = match cased.next() {
            Some(c) => c,
            None => return SurfaceCase::Lower,
        };
        let mut rest_upper = 0usize;
        let mut rest_lower = 0usize;
        for c in cased {
            if c.is_uppercase() {
                rest_upper += 1;
            } else {
                rest_lower += 1;
            }
        }
        match (first.is_uppercase(), rest_upper, rest_lower) {
            (true, 0, 0) => SurfaceCase::Capitalized,
            (true, _, 0) => SurfaceCase::Upper,
            (true, _, _) => SurfaceCase::Capitalized,
            (false, 0, _) => SurfaceCase::Lower,
            (false, _, _) => SurfaceCase::Mixed,
        }
    }

    /// True for a token that is a single uppercase letter.
    pub fn is_lone_capital(token: &str) -> bool {
        let mut letters = token.chars().filter(|c| c.is_alphabetic());
        matches!((letters.next(), letters.next()), (Some(c), None) if c.is_uppercase())
    }

    pub fn apply(self, replacement: &str) -> String {
        match self {
            SurfaceCase::Upper => replacement.to_uppercase(),
            SurfaceCase::Capitalized => capitalize_first(replacement),
            SurfaceCase::Lower | SurfaceCase::Mixed => replacement.to_string(),
        }
    }
}

/// Uppercase the first letter, leaving everything else as written.
pub fn capitalize_first(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut done = false;
    for c in s.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}
