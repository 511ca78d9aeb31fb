use std::ops::Deref;

const SEPARATOR: char = ';';

/// Ordered list of trimmed, non-empty entries.
/// Can be constructed from a `;`-separated string or from a collection of strings,
/// so that destinations and attachments accept both forms.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddressList {
    entries: Vec<String>,
}

impl AddressList {
    fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = entries
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();
        AddressList { entries }
    }
}

impl From<&str> for AddressList {
    /// Split on `;`. Entries left empty after trimming are dropped, so `"a;;b"` gives two entries.
    fn from(value: &str) -> Self {
        AddressList::from_entries(value.split(SEPARATOR))
    }
}

impl From<&String> for AddressList {
    fn from(value: &String) -> Self {
        AddressList::from(value.as_str())
    }
}

impl From<String> for AddressList {
    fn from(value: String) -> Self {
        AddressList::from(value.as_str())
    }
}

impl From<&[&str]> for AddressList {
    fn from(value: &[&str]) -> Self {
        AddressList::from_entries(value.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AddressList {
    fn from(value: [&str; N]) -> Self {
        AddressList::from_entries(value)
    }
}

impl From<Vec<&str>> for AddressList {
    fn from(value: Vec<&str>) -> Self {
        AddressList::from_entries(value)
    }
}

impl From<Vec<String>> for AddressList {
    fn from(value: Vec<String>) -> Self {
        AddressList::from_entries(value.iter().map(String::as_str))
    }
}

impl From<Option<&str>> for AddressList {
    fn from(value: Option<&str>) -> Self {
        value.map(AddressList::from).unwrap_or_default()
    }
}

impl Deref for AddressList {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}
