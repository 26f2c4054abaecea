use derby_core::Points;

/// A player's name and net points across every round of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Balance {
    pub name: String,
    pub net: Points,
}

impl Balance {
    pub fn new(name: impl Into<String>, net: Points) -> Self {
        Self {
            name: name.into(),
            net,
        }
    }
    pub fn is_creditor(&self) -> bool {
        self.net > 0
    }
    pub fn is_debtor(&self) -> bool {
        self.net < 0
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}{:+}", self.name, self.net)
    }
}
