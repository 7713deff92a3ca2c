use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub score: u32,
}

impl Record {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Mock class roster used by the demo run.
pub const DEMO_SCORES: [(&str, u32); 4] = [
    ("Alice", 85),
    ("Bob", 92),
    ("Charlie", 78),
    ("David", 90),
];

/// Ordered, read-only table of student scores.
///
/// Rows keep their declaration order and are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    records: Vec<Record>,
}

impl ScoreTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn demo() -> Self {
        Self::new(
            DEMO_SCORES
                .iter()
                .map(|(name, score)| Record::new(*name, *score))
                .collect(),
        )
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn scores(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.score).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
