use crate::errors::DomainError;
use crate::validators::is_valid_hostname;
use std::fmt;
use std::str::FromStr;

/// A syntactically valid domain name, stored in presentation order
/// (`www.example.com` → `["www", "example", "com"]`) without the root label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if !is_valid_hostname(input) {
            return Err(DomainError::InvalidDomainName(input.to_string()));
        }

        let labels = input
            .trim_end_matches('.')
            .split('.')
            .map(|label| label.to_ascii_lowercase())
            .collect();

        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Fully-qualified form with the trailing root dot.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.labels.join("."))
    }

    /// Progressively more specific names from the TLD down to the full name:
    /// `www.example.com` → `["com.", "example.com.", "www.example.com."]`.
    pub fn suffix_chain(&self) -> Vec<String> {
        (1..=self.labels.len())
            .map(|depth| {
                let start = self.labels.len() - depth;
                format!("{}.", self.labels[start..].join("."))
            })
            .collect()
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fqdn())
    }
}
