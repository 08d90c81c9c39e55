/// One instance string treated as an indivisible merge unit.
///
/// Fragments are immutable. Merging two fragments produces a new one whose
/// `sources` list records the original instance indices it subsumes, in
/// left-to-right order of appearance in the merged text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    sources: Vec<usize>,
}

impl Fragment {
    /// Wrap an original instance string under its stable index.
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: vec![id],
        }
    }

    /// Convert an ordered instance into fragments indexed `0..n`.
    pub fn from_strings(strings: &[String]) -> Vec<Fragment> {
        strings
            .iter()
            .enumerate()
            .map(|(id, s)| Fragment::new(id, s.clone()))
            .collect()
    }

    pub(crate) fn from_parts(text: String, sources: Vec<usize>) -> Self {
        Self { text, sources }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Stable identity: the leftmost original index this fragment subsumes.
    pub fn id(&self) -> usize {
        self.sources[0]
    }

    /// Original instance indices in left-to-right order.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub(crate) fn into_parts(self) -> (String, Vec<usize>) {
        (self.text, self.sources)
    }

    /// Append `other` minus its first `overlap` bytes.
    ///
    /// The caller guarantees that the last `overlap` bytes of `self` equal
    /// the first `overlap` bytes of `other`; this only splices.
    pub fn merge(&self, other: &Fragment, overlap: usize) -> Fragment {
        let mut text = String::with_capacity(self.text.len() + other.text.len() - overlap);
        text.push_str(&self.text);
        text.push_str(&other.text[overlap..]);
        let mut sources = Vec::with_capacity(self.sources.len() + other.sources.len());
        sources.extend_from_slice(&self.sources);
        sources.extend_from_slice(&other.sources);
        Fragment { text, sources }
    }
}
