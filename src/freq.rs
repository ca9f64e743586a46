use std::collections::HashMap;

/// Token -> occurrence count across the whole corpus.
///
/// Entries remember the order in which tokens were first seen, so ranking
/// ties are always broken the same way for the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token once. Duplicates are counted separately.
    pub fn update<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tok in tokens {
            let tok = tok.as_ref();
            match self.slots.get(tok) {
                Some(&i) => self.entries[i].1 += 1,
                None => {
                    self.slots.insert(tok.to_owned(), self.entries.len());
                    self.entries.push((tok.to_owned(), 1));
                }
            }
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.slots.get(token).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// The `n` highest counts, highest first. Equal counts keep
    /// first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(tok, count)| (tok.as_str(), *count))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
