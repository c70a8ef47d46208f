//! ops::status
//!
//! Assembly of the account status panel.
//!
//! Pulls the user profile, party, and active quest together into one
//! report. Quest metadata (title, kind, maximum) comes from the static
//! content catalog and is cached on disk; the catalog is only refetched
//! when the active quest's key differs from the cached one. Quest
//! *progress* always comes from the live party data.

use std::path::Path;

use serde_json::Value;

use super::OpsError;
use crate::api::{ApiClient, RequestSpec};
use crate::core::cache::{QuestCache, QuestEntry, QuestKind};
use crate::ui::output::{self, Verbosity};

pub const DEFAULT_PARTY: &str = "Not currently in a party";
pub const DEFAULT_QUEST: &str = "Not currently on a quest";
pub const DEFAULT_PET: &str = "No pet currently";
pub const DEFAULT_MOUNT: &str = "Not currently mounted";

/// Rendered account status, one line per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub title: String,
    pub health: String,
    pub xp: String,
    pub mana: String,
    pub pet: String,
    pub mount: String,
    pub party: String,
    pub quest: String,
}

/// Fetch everything the status panel needs.
pub async fn fetch_status(
    client: &ApiClient,
    cache_path: &Path,
    verbosity: Verbosity,
) -> Result<StatusReport, OpsError> {
    let user = client.send(RequestSpec::new("user")).await?;
    let stats = &user["stats"];
    let items = &user["items"];

    let class = stats.get("class").and_then(Value::as_str).unwrap_or("");
    let title = format!("Level {} {}", int(stats, "lvl"), capitalize(class));
    let health = format!("{}/{}", int(stats, "hp"), int(stats, "maxHealth"));
    let xp = format!("{}/{}", int(stats, "exp"), int(stats, "toNextLevel"));
    let mana = format!("{}/{}", int(stats, "mp"), int(stats, "maxMP"));

    let food_count = items
        .get("food")
        .and_then(Value::as_object)
        .map(|food| food.values().filter_map(Value::as_i64).sum::<i64>())
        .unwrap_or(0);
    let current_pet = nonempty_str(items, "currentPet").unwrap_or(DEFAULT_PET);
    let pet = format!("{} ({} food items)", current_pet, food_count);
    let mount = nonempty_str(items, "currentMount")
        .unwrap_or(DEFAULT_MOUNT)
        .to_string();

    let (party, quest) = fetch_party_and_quest(client, cache_path, verbosity).await?;

    Ok(StatusReport {
        title,
        health,
        xp,
        mana,
        pet,
        mount,
        party,
        quest,
    })
}

/// Resolve the party name and quest progress line, refreshing the quest
/// cache when a new quest key is seen.
async fn fetch_party_and_quest(
    client: &ApiClient,
    cache_path: &Path,
    verbosity: Verbosity,
) -> Result<(String, String), OpsError> {
    let groups = client
        .send(RequestSpec::new("groups").field("type", "party"))
        .await?;

    let group = match groups.as_array().and_then(|groups| groups.first()) {
        Some(group) => group,
        None => return Ok((DEFAULT_PARTY.to_string(), DEFAULT_QUEST.to_string())),
    };
    let party = group
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PARTY)
        .to_string();
    let party_id = match group.get("id").and_then(Value::as_str) {
        Some(id) => id,
        None => return Ok((party, DEFAULT_QUEST.to_string())),
    };

    let party_data = client.send(RequestSpec::new("groups").aspect(party_id)).await?;
    let quest_data = &party_data["quest"];
    let active = quest_data
        .get("active")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let key = match quest_data.get("key").and_then(Value::as_str) {
        Some(key) if active => key,
        _ => return Ok((party, DEFAULT_QUEST.to_string())),
    };

    let mut cache = QuestCache::load(cache_path)?;
    if cache.key() != Some(key) {
        output::debug(format!("fetching content for new quest '{}'", key), verbosity);
        let content = client.send(RequestSpec::new("content")).await?;
        cache.quest = Some(quest_from_content(&content, key));
        cache.store(cache_path)?;
    }

    let entry = match &cache.quest {
        Some(entry) => entry,
        None => return Ok((party, DEFAULT_QUEST.to_string())),
    };
    let progress = match entry.kind {
        QuestKind::Collect => quest_data["progress"]["collect"]
            .as_object()
            .and_then(|collect| collect.values().next())
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        QuestKind::Boss => quest_data["progress"]["hp"].as_f64().unwrap_or(0.0),
    };
    let quest = format!(
        "{}/{} \"{}\"",
        progress as i64,
        format_number(entry.max),
        entry.title
    );
    Ok((party, quest))
}

/// Extract one quest's static metadata from the content catalog.
///
/// A quest with a non-empty `collect` table counts items; otherwise the
/// boss's `hp` is the maximum. A quest with neither (should not happen)
/// gets a boss entry with max -1 so progress still renders.
pub fn quest_from_content(content: &Value, key: &str) -> QuestEntry {
    let quest = &content["quests"][key];
    let title = quest
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or(key)
        .to_string();

    if let Some(collect) = quest
        .get("collect")
        .and_then(Value::as_object)
        .filter(|collect| !collect.is_empty())
    {
        let max = collect
            .values()
            .next()
            .and_then(|item| item.get("count"))
            .and_then(Value::as_f64)
            .unwrap_or(-1.0);
        return QuestEntry {
            key: key.to_string(),
            kind: QuestKind::Collect,
            max,
            title,
        };
    }

    let max = quest
        .get("boss")
        .and_then(|boss| boss.get("hp"))
        .and_then(Value::as_f64)
        .unwrap_or(-1.0);
    QuestEntry {
        key: key.to_string(),
        kind: QuestKind::Boss,
        max,
        title,
    }
}

/// Read a numeric field as a whole number, tolerating floats.
fn int(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0) as i64
}

/// Read a string field, treating empty strings as absent.
fn nonempty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Render a maximum without a trailing `.0` when it is whole.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
