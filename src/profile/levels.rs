//! XP and level system
//!
//! Levels are bought one at a time: earned XP accumulates inside the current
//! level and is spent when it covers the next level's cost. A single large
//! award can therefore jump several levels at once.

/// Level definition
#[derive(Debug, Clone)]
pub struct Level {
    pub level: u32,
    /// XP that must be spent to enter this level from the previous one.
    pub xp_cost: u32,
    pub title_kk: &'static str,
    pub title_ru: &'static str,
}

/// All level definitions (must be sorted by level).
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_cost: 0,
        title_kk: "Жасөспірім",
        title_ru: "Новичок",
    },
    Level {
        level: 2,
        xp_cost: 100,
        title_kk: "Оқушы",
        title_ru: "Ученик",
    },
    Level {
        level: 3,
        xp_cost: 300,
        title_kk: "Батыр",
        title_ru: "Герой",
    },
    Level {
        level: 4,
        xp_cost: 600,
        title_kk: "Жауынгер",
        title_ru: "Воин",
    },
    Level {
        level: 5,
        xp_cost: 1000,
        title_kk: "Қолбасшы",
        title_ru: "Командир",
    },
    Level {
        level: 6,
        xp_cost: 1500,
        title_kk: "Би",
        title_ru: "Судья",
    },
    Level {
        level: 7,
        xp_cost: 2100,
        title_kk: "Хан",
        title_ru: "Хан",
    },
    Level {
        level: 8,
        xp_cost: 2800,
        title_kk: "Данышпан",
        title_ru: "Мудрец",
    },
    Level {
        level: 9,
        xp_cost: 3600,
        title_kk: "Бекзат",
        title_ru: "Аристократ",
    },
    Level {
        level: 10,
        xp_cost: 4500,
        title_kk: "Ұлы батыр",
        title_ru: "Великий герой",
    },
];

impl Level {
    /// Look up a level definition, clamping to the table bounds.
    pub fn get(level: u32) -> &'static Level {
        LEVELS
            .iter()
            .find(|l| l.level == level)
            .unwrap_or_else(|| {
                if level == 0 {
                    &LEVELS[0]
                } else {
                    &LEVELS[LEVELS.len() - 1]
                }
            })
    }

    /// Cost of the next level (None at max level).
    pub fn next_cost(current_level: u32) -> Option<u32> {
        LEVELS
            .iter()
            .find(|l| l.level == current_level + 1)
            .map(|l| l.xp_cost)
    }

    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }

    pub fn title(&self, kazakh: bool) -> &'static str {
        if kazakh {
            self.title_kk
        } else {
            self.title_ru
        }
    }
}

/// A level-up event produced by an XP award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub title_kk: &'static str,
    pub title_ru: &'static str,
}

/// Apply earned XP to `(level, xp)` and spend it on level-ups.
///
/// Returns the new `(level, xp)` pair plus the level-up event if at least one
/// level was gained. XP stops being spent at max level but keeps
/// accumulating.
pub fn apply_xp(level: u32, xp: u32, earned: u32) -> (u32, u32, Option<LevelUp>) {
    let old_level = level;
    let mut level = level.max(1);
    let mut xp = xp + earned;

    while let Some(cost) = Level::next_cost(level) {
        if xp < cost {
            break;
        }
        xp -= cost;
        level += 1;
    }

    let level_up = (level > old_level).then(|| {
        let info = Level::get(level);
        LevelUp {
            old_level,
            new_level: level,
            title_kk: info.title_kk,
            title_ru: info.title_ru,
        }
    });
    (level, xp, level_up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_starts_free() {
        assert_eq!(LEVELS[0].xp_cost, 0);
        for pair in LEVELS.windows(2) {
            assert_eq!(pair[1].level, pair[0].level + 1);
            assert!(pair[1].xp_cost > pair[0].xp_cost);
        }
    }

    #[test]
    fn test_title_ladder() {
        assert_eq!(Level::get(1).title(false), "Новичок");
        assert_eq!(Level::get(1).title(true), "Жасөспірім");
        assert_eq!(Level::get(5).title(false), "Командир");
        assert_eq!(Level::get(7).title(true), "Хан");
        assert_eq!(Level::get(10).title(false), "Великий герой");
        // Out-of-range levels clamp to the table ends.
        assert_eq!(Level::get(99).title(true), "Ұлы батыр");
    }

    #[test]
    fn test_single_level_up() {
        let (level, xp, up) = apply_xp(1, 0, 130);
        assert_eq!(level, 2);
        assert_eq!(xp, 30);
        let up = up.unwrap();
        assert_eq!(up.old_level, 1);
        assert_eq!(up.new_level, 2);
    }

    #[test]
    fn test_multi_level_jump() {
        // 100 + 300 spent, 50 left over.
        let (level, xp, up) = apply_xp(1, 0, 450);
        assert_eq!(level, 3);
        assert_eq!(xp, 50);
        assert_eq!(up.unwrap().new_level, 3);
    }

    #[test]
    fn test_no_level_up_below_cost() {
        let (level, xp, up) = apply_xp(1, 40, 50);
        assert_eq!(level, 1);
        assert_eq!(xp, 90);
        assert!(up.is_none());
    }

    #[test]
    fn test_xp_accumulates_at_max_level() {
        let (level, xp, up) = apply_xp(10, 0, 9999);
        assert_eq!(level, 10);
        assert_eq!(xp, 9999);
        assert!(up.is_none());
    }

    #[test]
    fn test_call_granularity_equivalence() {
        // Awarding in pieces ends at the same (level, xp) as one big award.
        let (mut level, mut xp) = (1, 0);
        for amount in [60, 60, 120, 110, 100] {
            let (l, x, _) = apply_xp(level, xp, amount);
            level = l;
            xp = x;
        }
        let (level2, xp2, _) = apply_xp(1, 0, 450);
        assert_eq!((level, xp), (level2, xp2));
    }
}
