//! Difficulty levels
//!
//! Static table mapping the four age-based difficulty levels to mission
//! parameters. Pure configuration, looked up once at mission start.

/// Parameters of one difficulty level.
#[derive(Debug, Clone)]
pub struct DifficultyProfile {
    pub level: u8,
    pub name_kk: &'static str,
    pub name_ru: &'static str,
    pub age_range: &'static str,
    pub icon: &'static str,
    /// Scenarios per mission.
    pub question_count: u32,
    /// Options per scenario the generator is asked for.
    pub option_count: u32,
    pub hints_enabled: bool,
    /// Extra XP granted once on a successful run.
    pub energy_bonus: u32,
}

/// All difficulty levels (must be sorted by level).
pub static DIFFICULTY_LEVELS: &[DifficultyProfile] = &[
    DifficultyProfile {
        level: 1,
        name_kk: "Бастаушы",
        name_ru: "Начинающий",
        age_range: "7-10",
        icon: "🌱",
        question_count: 5,
        option_count: 2,
        hints_enabled: true,
        energy_bonus: 5,
    },
    DifficultyProfile {
        level: 2,
        name_kk: "Орташа",
        name_ru: "Средний",
        age_range: "11-14",
        icon: "🌿",
        question_count: 7,
        option_count: 3,
        hints_enabled: true,
        energy_bonus: 3,
    },
    DifficultyProfile {
        level: 3,
        name_kk: "Жоғары",
        name_ru: "Продвинутый",
        age_range: "15-17",
        icon: "🌳",
        question_count: 10,
        option_count: 4,
        hints_enabled: false,
        energy_bonus: 2,
    },
    DifficultyProfile {
        level: 4,
        name_kk: "Сарапшы",
        name_ru: "Эксперт",
        age_range: "17+",
        icon: "🎯",
        question_count: 15,
        option_count: 4,
        hints_enabled: false,
        energy_bonus: 10,
    },
];

impl DifficultyProfile {
    /// Look up a level, falling back to level 1 for anything out of range.
    pub fn get(level: u8) -> &'static DifficultyProfile {
        DIFFICULTY_LEVELS
            .iter()
            .find(|d| d.level == level)
            .unwrap_or(&DIFFICULTY_LEVELS[0])
    }

    pub fn max_level() -> u8 {
        DIFFICULTY_LEVELS.last().map(|d| d.level).unwrap_or(1)
    }
}
