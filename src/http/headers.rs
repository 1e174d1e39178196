/// A single header field as it appeared on (or will go onto) the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Ordered list of header fields shared by requests and responses.
///
/// Entries keep insertion order, which is the order a response emits them in.
/// Names are stored as given: no case folding, no de-duplication and no
/// charset validation. There is no removal; a list is filled once and then
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    entries: Vec<Header>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an owned copy of `name` and `value` to the end of the list.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Header {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value stored under exactly `name` (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_duplicates_in_insertion_order() {
        let mut headers = HeaderList::new();
        headers.add("Set-Cookie", "a=1");
        headers.add("X-Other", "x");
        headers.add("Set-Cookie", "b=2");

        let names: Vec<_> = headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Set-Cookie", "X-Other", "Set-Cookie"]);
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("Set-Cookie"), Some("a=1"));
    }
}
