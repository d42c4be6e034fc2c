use std::fmt;

/// The fixed set of verdicts a judge can hand out.
///
/// On the wire a score is always the plain number; this type only exists to
/// give the legal values names and to check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    No,
    Alt3,
    Alt2,
    Alt1,
    Yes,
}

impl Score {
    pub const ALL: [Score; 5] = [Score::No, Score::Alt3, Score::Alt2, Score::Alt1, Score::Yes];

    pub fn value(self) -> f64 {
        match self {
            Score::No => 0.0,
            Score::Alt3 => 4.2,
            Score::Alt2 => 4.3,
            Score::Alt1 => 4.5,
            Score::Yes => 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::No => "No",
            Score::Alt3 => "Alt3",
            Score::Alt2 => "Alt2",
            Score::Alt1 => "Alt1",
            Score::Yes => "Yes",
        }
    }

    /// Exact match only, no tolerance: 4.25 is not a score.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|score| score.value() == value)
    }

    /// "0 (No), 4.2 (Alt3), 4.3 (Alt2), 4.5 (Alt1), 10 (Yes)"
    pub fn describe_all() -> String {
        Self::ALL
            .iter()
            .map(Score::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}
