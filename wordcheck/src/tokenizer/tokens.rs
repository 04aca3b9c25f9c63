/// Iterator over whitespace-delimited tokens and their byte offsets.
#[derive(Debug, Clone)]
pub struct TokenIndices<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> TokenIndices<'a> {
    #[inline]
    pub fn new(source: &'a str) -> TokenIndices<'a> {
        TokenIndices {
            source,
            position: 0,
        }
    }
}

impl<'a> Iterator for TokenIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();

        let start = self.position
            + bytes[self.position..]
                .iter()
                .position(|b| !b.is_ascii_whitespace())?;
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .map(|len| start + len)
            .unwrap_or(bytes.len());

        self.position = end;
        // ASCII whitespace never occurs inside a multi-byte char, so both
        // bounds are char boundaries.
        Some((start, &self.source[start..end]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position;
        (0, Some((remaining + 1) / 2))
    }
}

impl std::iter::FusedIterator for TokenIndices<'_> {}

/// Iterator over whitespace-delimited tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: TokenIndices<'a>,
}

impl<'a> Tokens<'a> {
    #[inline]
    pub fn new(source: &'a str) -> Tokens<'a> {
        Tokens {
            inner: TokenIndices::new(source),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, token)| token)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
