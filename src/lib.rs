use std::str::CharIndices;

const SLASH: char = '/';
const SPACE: char = ' ';
const LF: char = '\n';

/// Trait to strip line comments and space characters.
pub trait Compact<'a> {
    fn compact(self) -> Compactor<'a>;
}

/// Implement the trait for string slices.
impl<'a> Compact<'a> for &'a str {
    fn compact(self) -> Compactor<'a> {
        Compactor::new(self)
    }
}

/// At each iteration, returns the next surviving run: a maximal substring
/// that contains no space, no line break, and no comment text.
///
/// A comment runs from the first `//` on a line through the end of that
/// line. The marker is recognized unconditionally — there is no quoting or
/// escaping mechanism, so a `//` inside quoted text still starts a comment.
/// A lone `/` is ordinary content. Only U+0020 counts as a space; tabs and
/// other whitespace pass through.
pub struct Compactor<'a> {
    src: &'a str,
    char_indices: CharIndices<'a>,
    prev_index: usize,
    prev_char: Option<char>,
}

/// Create a Compactor against a string slice.
impl<'a> Compactor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            char_indices: src.char_indices(),
            prev_index: 0,
            prev_char: None,
        }
    }

    // Next char to consider: the leftover stashed by a lookahead, if any,
    // otherwise the next one out of the source.
    fn pull(&mut self) -> Option<(usize, char)> {
        match self.prev_char.take() {
            Some(c) => Some((self.prev_index, c)),
            None => self.char_indices.next(),
        }
    }

    // Hold one char over for the next pull.
    fn stash(&mut self, index: usize, ch: char) {
        self.prev_index = index;
        self.prev_char = Some(ch);
    }

    // Consume the rest of the current line, `\n` included.
    fn skip_comment(&mut self) {
        for (_, c) in self.char_indices.by_ref() {
            if c == LF {
                break;
            }
        }
    }
}

impl<'a> Iterator for Compactor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Walk past spaces, line breaks, and whole comments to the first
        // char that survives.
        let (start_index, first_char) = loop {
            let (curr_index, curr_char) = self.pull()?;
            match curr_char {
                SPACE | LF => {}
                SLASH => match self.pull() {
                    // `//`: the rest of the line is a comment.
                    Some((_, SLASH)) => self.skip_comment(),
                    // A lone slash is content; its follower goes back for
                    // the next spin.
                    Some((next_index, next_char)) => {
                        self.stash(next_index, next_char);
                        break (curr_index, curr_char);
                    }
                    None => break (curr_index, curr_char),
                },
                _ => break (curr_index, curr_char),
            }
        };

        let mut end_index = start_index + first_char.len_utf8();

        // Extend the run until a space, a line break, a comment marker, or
        // the end of input closes it.
        loop {
            let (curr_index, curr_char) = match self.pull() {
                Some(pair) => pair,
                None => return Some(&self.src[start_index..end_index]),
            };

            match curr_char {
                SPACE | LF => return Some(&self.src[start_index..end_index]),
                SLASH => match self.pull() {
                    Some((_, SLASH)) => {
                        // The marker and everything after it on this line
                        // are dropped; the run ends just before it.
                        self.skip_comment();
                        return Some(&self.src[start_index..end_index]);
                    }
                    Some((next_index, next_char)) => {
                        self.stash(next_index, next_char);
                        end_index = curr_index + curr_char.len_utf8();
                    }
                    None => {
                        return Some(&self.src[start_index..curr_index + curr_char.len_utf8()])
                    }
                },
                _ => end_index = curr_index + curr_char.len_utf8(),
            }
        }
    }
}

/// Compact an entire source text: strip every line comment and every space
/// character, and drop the line breaks without reinserting them, so the
/// result is a single run-on line. Total over all inputs; the relative
/// order of surviving characters is preserved exactly.
pub fn clean(input: &str) -> String {
    input.compact().collect()
}
