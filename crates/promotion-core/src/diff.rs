use crate::model::CommitRecord;
use std::collections::HashSet;

/// Every subject line present on the production branch
pub fn production_messages(production: &[CommitRecord]) -> HashSet<&str> {
  production.iter().map(|commit| commit.message.as_str()).collect()
}

/// Staging commits whose subject does not appear on production, in staging order.
///
/// Subjects are compared instead of hashes because a cherry-pick gets a new hash but keeps
/// its subject. Two unrelated commits with the same subject count as one change, and a
/// cherry-pick whose subject was amended shows up as pending.
pub fn pending_deployment<'a>(staging: &'a [CommitRecord], production: &[CommitRecord]) -> Vec<&'a CommitRecord> {
  let prod_messages = production_messages(production);
  pending_against(staging, &prod_messages)
}

pub fn pending_against<'a>(staging: &'a [CommitRecord], prod_messages: &HashSet<&str>) -> Vec<&'a CommitRecord> {
  staging.iter().filter(|commit| !prod_messages.contains(commit.message.as_str())).collect()
}
