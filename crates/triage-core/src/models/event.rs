use serde::{Deserialize, Deserializer, Serialize};

/// One observed notification occurrence. Immutable training input.
///
/// `opened` and `dismissed` are independent binary signals; the engine does
/// not enforce mutual exclusivity between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Notification-producing source being ranked (exact string match is the
    /// compatibility contract with the settings collaborator).
    pub domain: String,
    /// Seconds since epoch when the notification arrived.
    pub received: i64,
    /// Whether the user opened it.
    #[serde(deserialize_with = "flag")]
    pub opened: bool,
    /// Whether the user dismissed it without opening.
    #[serde(deserialize_with = "flag")]
    pub dismissed: bool,
    /// Whether the user performed an in-notification action.
    #[serde(deserialize_with = "flag")]
    pub action_clicked: bool,
    /// Seconds before the user reacted; 0 when they never did (censored).
    #[serde(default)]
    pub delay_seconds: u32,
}

impl Event {
    /// Whether the user reacted to the notification in any way.
    pub fn reacted(&self) -> bool {
        self.opened || self.dismissed || self.action_clicked
    }

    /// Training label: a notification was "important" iff the user opened it
    /// or clicked an action. Dismissed-only events label as unimportant.
    /// This rule is fixed — it silently defines what the model learns.
    pub fn label(&self) -> f64 {
        if self.opened || self.action_clicked {
            1.0
        } else {
            0.0
        }
    }
}

/// Historical datasets encode boolean event fields as 0/1 integers; accept
/// both encodings on the way in.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}
