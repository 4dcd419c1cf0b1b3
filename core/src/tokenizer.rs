/// Maximal-munch scanner over a piece of text.
///
/// Produces three kinds of terms: runs of letters (lowercased), runs of
/// digits, and single non-alphanumeric characters. Whitespace separates
/// terms and is never emitted. The same lexer normalizes both document
/// content and search queries, so their terms stay comparable.
pub struct Lexer {
    content: Vec<char>,
    index: usize,
}

impl Lexer {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.chars().collect(),
            index: 0,
        }
    }

    pub fn next_token(&mut self) -> Option<String> {
        self.trim_left_space();
        let next = *self.content.get(self.index)?;

        if next.is_alphabetic() {
            return Some(self.chop_while(char::is_alphabetic).to_lowercase());
        }

        if next.is_numeric() {
            return Some(self.chop_while(char::is_numeric));
        }

        Some(self.chop(self.index + 1))
    }

    fn trim_left_space(&mut self) {
        while self.index < self.content.len() && self.content[self.index].is_whitespace() {
            self.index += 1;
        }
    }

    fn chop_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut end = self.index;
        while end < self.content.len() && pred(self.content[end]) {
            end += 1;
        }
        self.chop(end)
    }

    fn chop(&mut self, end: usize) -> String {
        let token: String = self.content[self.index..end].iter().collect();
        self.index = end;
        token
    }
}

impl Iterator for Lexer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_yields_nothing() {
        assert_eq!(Lexer::new("  \t\n ").next_token(), None);
        assert_eq!(Lexer::new("").next_token(), None);
    }

    #[test]
    fn punctuation_is_one_term_per_character() {
        let terms: Vec<String> = Lexer::new("a=b;").collect();
        assert_eq!(terms, vec!["a", "=", "b", ";"]);
    }
}
