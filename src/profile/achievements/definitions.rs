//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock conditions and XP
//! rewards. Names and descriptions carry both languages; the CLI picks one
//! at render time.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Milestone achievements
    FirstMission,
    FiveMissions,
    TenMissions,
    TwentyFiveMissions,

    // Skill achievements
    PerfectMission,
    SpeedRunner,

    // Knowledge achievements (cumulative correct answers)
    CorrectTen,
    CorrectFifty,
    CorrectHundred,

    // Streak achievements
    Streak5,

    // Mastery achievements
    Historian,
    Level5,
}

impl AchievementId {
    /// Get the string ID for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstMission => "first_mission",
            Self::FiveMissions => "five_missions",
            Self::TenMissions => "ten_missions",
            Self::TwentyFiveMissions => "twenty_five_missions",
            Self::PerfectMission => "perfect_mission",
            Self::SpeedRunner => "speed_runner",
            Self::CorrectTen => "correct_10",
            Self::CorrectFifty => "correct_50",
            Self::CorrectHundred => "correct_100",
            Self::Streak5 => "streak_5",
            Self::Historian => "historian",
            Self::Level5 => "level_5",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_mission" => Some(Self::FirstMission),
            "five_missions" => Some(Self::FiveMissions),
            "ten_missions" => Some(Self::TenMissions),
            "twenty_five_missions" => Some(Self::TwentyFiveMissions),
            "perfect_mission" => Some(Self::PerfectMission),
            "speed_runner" => Some(Self::SpeedRunner),
            "correct_10" => Some(Self::CorrectTen),
            "correct_50" => Some(Self::CorrectFifty),
            "correct_100" => Some(Self::CorrectHundred),
            "streak_5" => Some(Self::Streak5),
            "historian" => Some(Self::Historian),
            "level_5" => Some(Self::Level5),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstMission,
            Self::FiveMissions,
            Self::TenMissions,
            Self::TwentyFiveMissions,
            Self::PerfectMission,
            Self::SpeedRunner,
            Self::CorrectTen,
            Self::CorrectFifty,
            Self::CorrectHundred,
            Self::Streak5,
            Self::Historian,
            Self::Level5,
        ]
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name_kk: &'static str,
    pub name_ru: &'static str,
    pub description_kk: &'static str,
    pub description_ru: &'static str,
    pub icon: &'static str,
    pub xp_reward: u32,
    /// For progressive achievements, the target count
    pub target: Option<u32>,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === MILESTONE ===
    Achievement {
        id: AchievementId::FirstMission,
        name_kk: "Алғашқы қадам",
        name_ru: "Первый шаг",
        description_kk: "Алғашқы миссияны аяқта",
        description_ru: "Завершите первую миссию",
        icon: "🎯",
        xp_reward: 10,
        target: Some(1),
    },
    Achievement {
        id: AchievementId::FiveMissions,
        name_kk: "Жас тарихшы",
        name_ru: "Юный историк",
        description_kk: "5 миссияны аяқта",
        description_ru: "Завершите 5 миссий",
        icon: "📜",
        xp_reward: 25,
        target: Some(5),
    },
    Achievement {
        id: AchievementId::TenMissions,
        name_kk: "Тәжірибелі сарбаз",
        name_ru: "Опытный воин",
        description_kk: "10 миссияны аяқта",
        description_ru: "Завершите 10 миссий",
        icon: "⚔️",
        xp_reward: 50,
        target: Some(10),
    },
    Achievement {
        id: AchievementId::TwentyFiveMissions,
        name_kk: "Дала қорғаушысы",
        name_ru: "Защитник степи",
        description_kk: "25 миссияны аяқта",
        description_ru: "Завершите 25 миссий",
        icon: "🛡️",
        xp_reward: 100,
        target: Some(25),
    },
    // === SKILL ===
    Achievement {
        id: AchievementId::PerfectMission,
        name_kk: "Мінсіз жеңіс",
        name_ru: "Безупречная победа",
        description_kk: "Миссияны бір де қате жібермей аяқта",
        description_ru: "Пройдите миссию без единой ошибки",
        icon: "💎",
        xp_reward: 50,
        target: None,
    },
    Achievement {
        id: AchievementId::SpeedRunner,
        name_kk: "Жүйрік",
        name_ru: "Скороход",
        description_kk: "Миссияны 3 минуттан тез жеңіп шық",
        description_ru: "Выиграйте миссию быстрее 3 минут",
        icon: "⚡",
        xp_reward: 40,
        target: None,
    },
    // === KNOWLEDGE ===
    Achievement {
        id: AchievementId::CorrectTen,
        name_kk: "Ақылды",
        name_ru: "Умник",
        description_kk: "10 дұрыс жауап бер",
        description_ru: "Дайте 10 правильных ответов",
        icon: "💡",
        xp_reward: 15,
        target: Some(10),
    },
    Achievement {
        id: AchievementId::CorrectFifty,
        name_kk: "Эрудит",
        name_ru: "Эрудит",
        description_kk: "50 дұрыс жауап бер",
        description_ru: "Дайте 50 правильных ответов",
        icon: "🧠",
        xp_reward: 75,
        target: Some(50),
    },
    Achievement {
        id: AchievementId::CorrectHundred,
        name_kk: "Дана",
        name_ru: "Гений",
        description_kk: "100 дұрыс жауап бер",
        description_ru: "Дайте 100 правильных ответов",
        icon: "🌟",
        xp_reward: 150,
        target: Some(100),
    },
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak5,
        name_kk: "Жеңіс жолы",
        name_ru: "Полоса побед",
        description_kk: "Қатарынан 5 миссияда жеңіске жет",
        description_ru: "Выиграйте 5 миссий подряд",
        icon: "🔥",
        xp_reward: 75,
        target: Some(5),
    },
    // === MASTERY ===
    Achievement {
        id: AchievementId::Historian,
        name_kk: "Тарихшы",
        name_ru: "Историк",
        description_kk: "Әр батырмен кемінде 3 миссияда жеңіске жет",
        description_ru: "Выиграйте не менее 3 миссий с каждым героем",
        icon: "🏛️",
        xp_reward: 150,
        target: Some(3),
    },
    Achievement {
        id: AchievementId::Level5,
        name_kk: "Қолбасшы",
        name_ru: "Командир",
        description_kk: "5-деңгейге жет",
        description_ru: "Достигните 5 уровня",
        icon: "⭐",
        xp_reward: 100,
        target: Some(5),
    },
];

impl Achievement {
    /// Look up the definition for an id.
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .unwrap_or(&ACHIEVEMENTS[0])
    }

    pub fn name(&self, kazakh: bool) -> &'static str {
        if kazakh {
            self.name_kk
        } else {
            self.name_ru
        }
    }

    pub fn description(&self, kazakh: bool) -> &'static str {
        if kazakh {
            self.description_kk
        } else {
            self.description_ru
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_every_id_has_a_definition() {
        for id in AchievementId::all() {
            assert_eq!(Achievement::get(*id).id, *id);
        }
        assert_eq!(ACHIEVEMENTS.len(), AchievementId::all().len());
    }
}
