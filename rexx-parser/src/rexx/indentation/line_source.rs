//! Read access to a buffer, one line at a time
//!
//! The indenter never needs the whole buffer, it walks upwards from the line being
//! indented. Hosts implement [LineSource] over whatever storage they have (a rope, a
//! vector of lines, a string) and the backward scan runs on [ReverseLines].

/// Line-indexed view of a buffer. Lines are 0-based and carry no line terminator.
pub trait LineSource {
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Option<&str>;

    /// Lines above `index`, nearest first
    fn lines_before(&self, index: usize) -> ReverseLines<'_, Self> {
        ReverseLines {
            source: self,
            next: index.min(self.line_count()),
        }
    }
}

/// Iterator over `(index, text)` pairs walking towards the start of the buffer
pub struct ReverseLines<'a, S: ?Sized> {
    source: &'a S,
    next: usize,
}

impl<'a, S: LineSource + ?Sized> Iterator for ReverseLines<'a, S> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next > 0 {
            self.next -= 1;
            if let Some(text) = self.source.line(self.next) {
                return Some((self.next, text));
            }
        }
        None
    }
}

impl<T: AsRef<str>> LineSource for [T] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<T: AsRef<str>> LineSource for Vec<T> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

/// Lines of a borrowed string, split on `\n` with any trailing `\r` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextBuffer<'a> {
    pub fn new(source: &'a str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

impl<'a> From<&'a str> for TextBuffer<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl LineSource for TextBuffer<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).copied()
    }
}
