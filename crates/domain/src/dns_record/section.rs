use std::fmt;

/// Message section a resource record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// Classifies the record at `index` of the combined record walk.
    pub fn classify(index: usize, ancount: usize, nscount: usize) -> Self {
        if index < ancount {
            Section::Answer
        } else if index < ancount + nscount {
            Section::Authority
        } else {
            Section::Additional
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Answer => "Answer",
            Section::Authority => "Authority",
            Section::Additional => "Additional",
        }
    }

    pub fn is_displayed(&self) -> bool {
        !matches!(self, Section::Authority)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
