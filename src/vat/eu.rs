//! Injected EU-membership table.
//!
//! Which countries count as EU member states is deployment configuration,
//! not decision logic: jurisdiction updates (accessions, Brexit-style
//! departures, or a platform using its own code list) must not require
//! touching the rule trees.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// EU member states, ISO 3166-1 alpha-3.
pub static EU_MEMBER_COUNTRIES: &[&str] = &[
    "AUT", "BEL", "BGR", "CYP", "CZE", "DEU", "DNK", "ESP", "EST", "FIN", "FRA", "GRC", "HRV",
    "HUN", "IRL", "ITA", "LTU", "LUX", "LVA", "MLT", "NLD", "POL", "PRT", "ROU", "SVK", "SVN",
    "SWE",
];

/// The set of country codes treated as EU member states.
///
/// Defaults to the EU-27 in ISO alpha-3. Deployments whose address data
/// uses a different code list supply their own set, either programmatically
/// or deserialized from configuration (the type serializes as a plain list
/// of codes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EuRegistry {
    members: BTreeSet<String>,
}

impl EuRegistry {
    /// Build a registry from an explicit list of member country codes.
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `code` is a member state.
    pub fn contains(&self, code: &str) -> bool {
        self.members.contains(code)
    }

    /// Membership test over an optional country code. A missing country is
    /// never a member.
    pub fn is_member(&self, code: Option<&str>) -> bool {
        code.is_some_and(|c| self.contains(c))
    }

    /// Number of member states in the table.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for EuRegistry {
    fn default() -> Self {
        Self::from_members(EU_MEMBER_COUNTRIES.iter().copied())
    }
}
