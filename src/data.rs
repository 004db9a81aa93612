// src/data.rs
//
// Parsed table rows.
//
// A Record is one data line of the input, keyed by the header's column names
// and kept in header order. Records are built by the parser and read by the
// renderer; nothing mutates them after construction.

/// One parsed data row: column name → cell value, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    cells: Vec<(String, String)>,
}

impl Record {
    /// Pair `headers` positionally with `values`.
    /// Missing trailing values become `""`; values past the last header are dropped.
    /// A repeated header name keeps its first position and takes the later value.
    pub fn from_parts(headers: &[String], values: Vec<String>) -> Self {
        let mut cells: Vec<(String, String)> = Vec::with_capacity(headers.len());
        let mut values = values.into_iter();

        for name in headers {
            let value = values.next().unwrap_or_default();
            match cells.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value,
                None => cells.push((name.clone(), value)),
            }
        }

        Self { cells }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Cell value for `key`, or `""` when the column is absent.
    #[inline]
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline] pub fn len(&self) -> usize { self.cells.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}
