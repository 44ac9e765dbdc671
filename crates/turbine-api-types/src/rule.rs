//! Routing rules: method/match predicates mapped to weighted constraints.

use crate::constraint::AllConstraints;
use crate::keys::RuleKey;
use crate::metadata::Metadatum;
use crate::ser::null_as_empty;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ways a request parameter can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Cookie,
    Header,
    Query,
}

/// Maps a request parameter of the given kind to a constraint metadatum.
///
/// `from` names the request parameter (and optionally a required value);
/// `to` names the constraint key (and optionally a fixed value) added when
/// the parameter is present. An empty `to.value` maps the request's own
/// value through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub kind: MatchKind,
    #[serde(default)]
    pub from: Metadatum,
    #[serde(default)]
    pub to: Metadatum,
}

impl Match {
    pub fn is_valid(&self) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        check_key(&self.from.key, &mut errs, "from.key");

        if !self.to.value.is_empty() && self.to.key.is_empty() {
            errs.push("to.key", "must not be empty if value is set");
        }

        errs.into_result()
    }
}

const VALID_METHODS: [&str; 4] = ["GET", "PUT", "POST", "DELETE"];

/// One predicate of a route or shared-rules policy: applies when one of
/// the methods and all of the matches apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub rule_key: RuleKey,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub methods: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub constraints: AllConstraints,
}

impl Rule {
    pub fn is_valid(&self) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        check_key(self.rule_key.as_str(), &mut errs, "rule_key");

        for m in &self.methods {
            if !VALID_METHODS.contains(&m.as_str()) {
                errs.push("methods", format!("{m} is not a valid method"));
            }
        }

        if self.methods.is_empty() && self.matches.is_empty() {
            errs.push("", "at least one method or match must be present");
        }

        for (i, m) in self.matches.iter().enumerate() {
            errs.merge_prefixed(&format!("matches[{i}]"), m.is_valid());
        }
        errs.merge_prefixed("constraints", self.constraints.is_valid(false));

        errs.into_result()
    }
}

/// Validate a rules vector: each rule valid, rule keys unique.
pub fn rules_valid(rules: &[Rule]) -> Result<(), ValidationError> {
    let mut errs = ValidationError::new();

    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.rule_key.as_str()) {
            errs.push("rules", format!("multiple instances of key {}", rule.rule_key));
        }
        errs.merge_prefixed(&format!("rules[{}]", rule.rule_key), rule.is_valid());
    }

    errs.into_result()
}
