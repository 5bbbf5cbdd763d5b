//! Historical characters and interface languages.
//!
//! Each mission is framed around one of three historical figures. The
//! character decides which fallback scenarios are used and which profile
//! aggregates a finished mission lands in.

use serde::{Deserialize, Serialize};

/// The three playable historical figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    /// Абылай хан - khan and military strategist.
    AbylaiKhan,
    /// Абай Кунанбаев - poet and educator.
    Abai,
    /// Айтеке би - judge and peacemaker.
    AitekeBi,
}

impl Character {
    /// Stable string id used for database storage and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AbylaiKhan => "abylai_khan",
            Self::Abai => "abai",
            Self::AitekeBi => "aiteke_bi",
        }
    }

    /// Parse from the stored string id.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "abylai_khan" => Some(Self::AbylaiKhan),
            "abai" => Some(Self::Abai),
            "aiteke_bi" => Some(Self::AitekeBi),
            _ => None,
        }
    }

    /// Display name as shown to the player.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AbylaiKhan => "Абылай хан",
            Self::Abai => "Абай Кунанбаев",
            Self::AitekeBi => "Айтеке би",
        }
    }

    /// Short epithet used when building generation prompts.
    pub fn epithet(&self) -> &'static str {
        match self {
            Self::AbylaiKhan => "великий хан, военный стратег, объединитель казахских земель",
            Self::Abai => "великий поэт, философ, просветитель",
            Self::AitekeBi => "мудрый бий, справедливый судья, разрешитель конфликтов",
        }
    }

    /// The mission rule the player is asked to follow for this character.
    pub fn mission_rule(&self) -> &'static str {
        match self {
            Self::AbylaiKhan => "Помочь народу выиграть на войне и масштабировать территорию",
            Self::Abai => "Учить детей писать стихи, создавать произведения, развивать образование",
            Self::AitekeBi => "Справедливо судить, решать конфликты, поддерживать мир",
        }
    }

    /// All characters, in presentation order.
    pub fn all() -> &'static [Character] {
        &[Self::AbylaiKhan, Self::Abai, Self::AitekeBi]
    }
}

/// Interface language for scenario text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "kk")]
    Kazakh,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Two-letter code sent to the generation backend.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Kazakh => "kk",
            Self::Russian => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "kk" => Some(Self::Kazakh),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }
}
