//! Enumeration types used throughout the controller and host.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a rocket entity.
///
/// `Dead` and `Finished` are both terminal. `Finished` is reached through a
/// "Finish"-tagged contact and `Dead` through any other non-friendly contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RocketState {
    #[default]
    Alive,
    Dead,
    Finished,
}

impl RocketState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RocketState::Alive)
    }
}

/// Result of a terminal contact, independent of presentation assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Touched a "Finish" object.
    Success,
    /// Touched anything that is neither friendly nor a finish.
    Failure,
}

impl Outcome {
    /// State the controller enters for this outcome.
    pub fn terminal_state(self) -> RocketState {
        match self {
            Outcome::Success => RocketState::Finished,
            Outcome::Failure => RocketState::Dead,
        }
    }
}

/// Classification label carried by the other object in a contact.
///
/// Serialized as the raw label so level files read naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactTag {
    Friendly,
    Finish,
    Other(String),
}

impl ContactTag {
    pub fn label(&self) -> &str {
        match self {
            ContactTag::Friendly => "Friendly",
            ContactTag::Finish => "Finish",
            ContactTag::Other(label) => label,
        }
    }
}

impl From<&str> for ContactTag {
    fn from(label: &str) -> Self {
        match label {
            "Friendly" => ContactTag::Friendly,
            "Finish" => ContactTag::Finish,
            other => ContactTag::Other(other.to_string()),
        }
    }
}

impl From<String> for ContactTag {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Friendly" => ContactTag::Friendly,
            "Finish" => ContactTag::Finish,
            _ => ContactTag::Other(label),
        }
    }
}

impl From<ContactTag> for String {
    fn from(tag: ContactTag) -> Self {
        match tag {
            ContactTag::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for ContactTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Audio clips the rocket can play on its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clip {
    MainEngine,
    Success,
    Death,
}

/// Particle emitters attached to the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emitter {
    Engine,
    Success,
    Death,
}

/// Why a contact produced no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The rocket already reached a terminal state.
    NotAlive,
    /// Collisions were switched off with the debug key.
    CollisionsDisabled,
    /// The other object is tagged "Friendly".
    Friendly,
}
