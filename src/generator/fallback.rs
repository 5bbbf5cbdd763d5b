//! Statically authored fallback scenarios.
//!
//! Used whenever the generation backend is unreachable or returns something
//! unusable. Selection is pure: `(index - 1) mod table_len` over the
//! character's table, so identical requests always yield the same scenario.

use crate::domain::{Character, Language, Scenario, ScenarioOption};

use super::{ScenarioRequest, ScenarioSource};

struct FallbackOption {
    id: &'static str,
    text_kk: &'static str,
    text_ru: &'static str,
    is_correct: bool,
}

struct FallbackScenario {
    prompt_kk: &'static str,
    prompt_ru: &'static str,
    options: &'static [FallbackOption],
    correct: &'static str,
    correct_kk: &'static str,
    correct_ru: &'static str,
    wrong_kk: &'static str,
    wrong_ru: &'static str,
    context_kk: &'static str,
    context_ru: &'static str,
}

static ABYLAI_KHAN: &[FallbackScenario] = &[
    FallbackScenario {
        prompt_kk: "Жоңғар сарбаздары қазақ жерінің шегіне жақындады. Ата-баба жерін қорғау үшін не істеу керек?",
        prompt_ru: "Джунгарские войска приблизились к границам. Как защитить земли предков?",
        options: &[
            FallbackOption { id: "A", text_kk: "Тез шабуыл жасау", text_ru: "Немедленно атаковать", is_correct: false },
            FallbackOption { id: "B", text_kk: "Үш жүздің барлығын біріктіру", text_ru: "Объединить три жуза", is_correct: true },
            FallbackOption { id: "C", text_kk: "Кейін шегіну", text_ru: "Отступить", is_correct: false },
            FallbackOption { id: "D", text_kk: "Орыстардан көмек сұрау", text_ru: "Попросить помощи у русских", is_correct: false },
        ],
        correct: "B",
        correct_kk: "Үш жүзді біріктіре отырып, сіз күшті әскер құрдыңыз. Жоңғарларға қарсы жеңіс!",
        correct_ru: "Объединив три жуза, вы создали мощное войско. Победа над джунгарами!",
        wrong_kk: "Асығыс күрес жеңіліске ұласты. Жоңғарлар қазақ топтарын бөлек-бөлек талқандады.",
        wrong_ru: "Спешная атака привела к поражению. Джунгары разбили разрозненные казахские отряды.",
        context_kk: "Абылай хан бірлік арқылы күшті әскер құру стратегиясын қолданды.",
        context_ru: "Абылай хан использовал стратегию объединения для создания сильного войска.",
    },
    FallbackScenario {
        prompt_kk: "Жүз ішінде жанжал туды. Жау алдында халықтың бірлігін қалай сақтау керек?",
        prompt_ru: "Внутри жузов были конфликты. Как поддержать единство перед лицом врага?",
        options: &[
            FallbackOption { id: "A", text_kk: "Ең күштіге бағыну", text_ru: "Подчиниться сильнейшему", is_correct: false },
            FallbackOption { id: "B", text_kk: "Билер кеңесін шақыру", text_ru: "Созвать совет биев для разрешения конфликтов", is_correct: true },
            FallbackOption { id: "C", text_kk: "Ешкімге араласпау", text_ru: "Не вмешиваться во внутренние дела", is_correct: false },
            FallbackOption { id: "D", text_kk: "Бүлікшілерді қуып жіберу", text_ru: "Изгнать смутьянов", is_correct: false },
        ],
        correct: "B",
        correct_kk: "Билер кеңесі халықты әділдікпен біріктірді. Әскер дайын!",
        correct_ru: "Совет биев объединил людей справедливостью. Народ готов! Армия подготовлена!",
        wrong_kk: "Дау жалғасып, әскер жау алдында әлсіреді.",
        wrong_ru: "Конфликты продолжились, и армия ослабла перед врагом.",
        context_kk: "Абылай хан бірлік үшін билер институтын қолданды.",
        context_ru: "Абылай хан использовал институт биев для единства.",
    },
];

static ABAI: &[FallbackScenario] = &[
    FallbackScenario {
        prompt_kk: "Жас балалар сөз өнерін үйренгісі келеді. Оларға не үйретесіз?",
        prompt_ru: "Молодые люди хотят научиться красивой речи. Как их обучить?",
        options: &[
            FallbackOption { id: "A", text_kk: "Ескі өлеңдерді оқыту", text_ru: "Читать старые стихи", is_correct: false },
            FallbackOption { id: "B", text_kk: "Өз өлеңін жазуды үйрету", text_ru: "Учить писать собственные стихи", is_correct: true },
            FallbackOption { id: "C", text_kk: "Басқа іске жіберу", text_ru: "Позволить заняться другим", is_correct: false },
            FallbackOption { id: "D", text_kk: "Шетел әдебиетін оқыту", text_ru: "Читать иностранную литературу", is_correct: false },
        ],
        correct: "B",
        correct_kk: "Өз сөзімен өлең жазуды үйретіп, балалардың шығармашылығын оятттыңыз!",
        correct_ru: "Обучая писать собственные стихи, вы развиваете их творчество. Молодежь начинает оригинально мыслить!",
        wrong_kk: "Ескі өлеңдерді қайталау балалардың шығармашылығын дамытпады.",
        wrong_ru: "Повторение старых стихов не развивает творчество. Молодежь не может создавать свои произведения.",
        context_kk: "Абай шәкірттерін өз бетінше шығармашылыққа үйретті, бұл қазақ әдебиетінің негізі болды.",
        context_ru: "Абай учил учеников самостоятельному творчеству, что стало основой казахской литературы.",
    },
];

static AITEKE_BI: &[FallbackScenario] = &[
    FallbackScenario {
        prompt_kk: "Екі саудагер тауар туралы дауласып жатыр. Сіз әділ төрелік ете аласыз ба?",
        prompt_ru: "Два купца спорят о товаре. Как разрешить этот спор справедливо?",
        options: &[
            FallbackOption { id: "A", text_kk: "Күшті тарапқа құқық беру", text_ru: "Дать право более сильному", is_correct: false },
            FallbackOption { id: "B", text_kk: "Екеуінің де сөзін тыңдау", text_ru: "Выслушать обе стороны", is_correct: true },
            FallbackOption { id: "C", text_kk: "Дауға араласпау", text_ru: "Не разбираться в спорах", is_correct: false },
            FallbackOption { id: "D", text_kk: "Куәгерлерді шақыру", text_ru: "Призвать свидетелей", is_correct: false },
        ],
        correct: "B",
        correct_kk: "Екі жақты да тыңдап, әділ шешім қабылдадыңыз. Халық даналығыңызды мойындады!",
        correct_ru: "Выслушав обе стороны, вы вынесли справедливое решение. Народ уважает вашу мудрость!",
        wrong_kk: "Біржақты сот халықтың сенімін жоғалтты.",
        wrong_ru: "Несправедливое решение подрывает доверие народа. Люди перестанут обращаться к вам с делами.",
        context_kk: "Айтеке би Жеті Жарғыда бекітілгендей дауларды әділдікпен шешті.",
        context_ru: "Айтеке би, как установлено в Жеті Жарғы, разрешал споры справедливо.",
    },
];

fn table(character: Character) -> &'static [FallbackScenario] {
    match character {
        Character::AbylaiKhan => ABYLAI_KHAN,
        Character::Abai => ABAI,
        Character::AitekeBi => AITEKE_BI,
    }
}

/// Number of fallback scenarios authored for a character.
pub fn fallback_table_len(character: Character) -> usize {
    table(character).len()
}

/// Deterministically pick the fallback scenario for `(character, index)`.
///
/// `index` is 1-based; selection wraps around the table.
pub fn fallback_scenario(character: Character, index: u32, language: Language) -> Scenario {
    let entries = table(character);
    let slot = (index.saturating_sub(1) as usize) % entries.len();
    let entry = &entries[slot];
    let kk = language == Language::Kazakh;

    Scenario {
        index,
        prompt: if kk { entry.prompt_kk } else { entry.prompt_ru }.to_string(),
        options: entry
            .options
            .iter()
            .map(|o| ScenarioOption {
                id: o.id.to_string(),
                text: if kk { o.text_kk } else { o.text_ru }.to_string(),
                is_correct: o.is_correct,
            })
            .collect(),
        correct_option: entry.correct.to_string(),
        correct_consequence: if kk { entry.correct_kk } else { entry.correct_ru }.to_string(),
        wrong_consequence: if kk { entry.wrong_kk } else { entry.wrong_ru }.to_string(),
        historical_context: if kk { entry.context_kk } else { entry.context_ru }.to_string(),
        fallback: true,
    }
}

/// Source serving only the static table. Used when no backend is configured
/// and by tests that need deterministic scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl ScenarioSource for FallbackSource {
    fn scenario(&self, request: &ScenarioRequest) -> Scenario {
        fallback_scenario(request.character, request.index, request.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_deterministic() {
        let a = fallback_scenario(Character::Abai, 3, Language::Russian);
        let b = fallback_scenario(Character::Abai, 3, Language::Russian);
        assert_eq!(a.prompt, b.prompt);
        assert_eq!(a.correct_option, b.correct_option);
        assert!(a.fallback);
    }

    #[test]
    fn test_selection_wraps_around_table() {
        // Abylai's table has two entries, so indexes 1 and 3 map to the same
        // scenario while 2 maps to the other.
        let first = fallback_scenario(Character::AbylaiKhan, 1, Language::Kazakh);
        let second = fallback_scenario(Character::AbylaiKhan, 2, Language::Kazakh);
        let third = fallback_scenario(Character::AbylaiKhan, 3, Language::Kazakh);
        assert_eq!(first.prompt, third.prompt);
        assert_ne!(first.prompt, second.prompt);
    }

    #[test]
    fn test_every_entry_has_one_correct_option() {
        for character in Character::all() {
            for index in 1..=fallback_table_len(*character) as u32 {
                let s = fallback_scenario(*character, index, Language::Kazakh);
                let correct = s.options.iter().filter(|o| o.is_correct).count();
                assert_eq!(correct, 1, "{} #{index}", character.as_str());
                assert!(s.is_correct_choice(&s.correct_option));
            }
        }
    }
}
