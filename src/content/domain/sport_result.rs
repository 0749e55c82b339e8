//! Scoreboard snapshots for games between two competitors.

use super::MessageType;
use serde::{Deserialize, Serialize};

/// Point-in-time score of a game, e.g. football or ice hockey.
///
/// A broadcast accumulates one snapshot per score change. The assembled list
/// is a history ordered by creation time; see [`current_result`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportResult {
    /// Name of the first competitor.
    pub team_one_name: String,
    /// Name of the second competitor.
    pub team_two_name: String,
    /// Logo URL of the first competitor.
    pub team_one_logo: String,
    /// Logo URL of the second competitor.
    pub team_two_logo: String,
    /// Score of the first competitor.
    pub team_one_result: i32,
    /// Score of the second competitor.
    pub team_two_result: i32,
    /// Article the snapshot belongs to.
    pub article_id: String,
    /// Client-visible identifier.
    pub guid: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Always [`MessageType::SportResult`].
    pub message_type: MessageType,
}

impl SportResult {
    /// Converts the snapshot into the compact representation used by
    /// embedded clients.
    #[must_use]
    pub fn to_external(&self) -> SportExternal {
        SportExternal {
            article_id: self.article_id.clone(),
            guid: self.guid.clone(),
            created_at: self.created_at.clone(),
            team_one_name: self.team_one_name.clone(),
            team_two_name: self.team_two_name.clone(),
            team_one_logo: self.team_one_logo.clone(),
            team_two_logo: self.team_two_logo.clone(),
            team_one_result: self.team_one_result.to_string(),
            team_two_result: self.team_two_result.to_string(),
        }
    }
}

/// Client copy of a [`SportResult`] with scores rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportExternal {
    /// Article the snapshot belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub article_id: String,
    /// Client-visible identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub guid: String,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Name of the first competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_one_name: String,
    /// Name of the second competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_two_name: String,
    /// Logo URL of the first competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_one_logo: String,
    /// Logo URL of the second competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_two_logo: String,
    /// Score of the first competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_one_result: String,
    /// Score of the second competitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_two_result: String,
}

/// Returns the current score: the last snapshot of an assembled history.
#[must_use]
pub fn current_result(history: &[SportResult]) -> Option<&SportResult> {
    history.last()
}
