//! Prompt construction for the generation backend.

use crate::domain::Language;

use super::ScenarioRequest;

/// Build the compact generation prompt for one scenario.
///
/// The backend is asked for strict JSON; the response shape is normalized in
/// the client regardless, since deployed generators have answered with both
/// camelCase and snake_case field names.
pub fn build_scenario_prompt(request: &ScenarioRequest) -> String {
    match request.language {
        Language::Kazakh => format!(
            "Создай сценарий для образовательной миссии по истории Казахстана.\n\n\
             Персонаж: {name} ({context})\n\
             Уровень сложности: {level} из 10\n\
             Номер сценария: {index}\n\
             Вариантов ответа: {options}\n\n\
             Создай интерактивную ситуацию с выбором, где игрок должен принять \
             правильное решение. Текст ситуации и вариантов - на казахском языке. \
             Ответ - строго JSON c полями text, options (id/text/isCorrect), \
             correctAnswer, wrongConsequence, correctConsequence, historicalContext. \
             Ровно один правильный вариант.",
            name = request.character.display_name(),
            context = request.character.epithet(),
            level = request.level,
            index = request.index,
            options = request.option_count,
        ),
        Language::Russian => format!(
            "Создай сценарий для образовательной миссии по истории Казахстана.\n\n\
             Персонаж: {name} ({context})\n\
             Уровень сложности: {level} из 10\n\
             Номер сценария: {index}\n\
             Вариантов ответа: {options}\n\n\
             Создай интерактивную ситуацию с выбором, где игрок должен принять \
             правильное решение. Текст ситуации и вариантов - на русском языке. \
             Ответ - строго JSON c полями text, options (id/text/isCorrect), \
             correctAnswer, wrongConsequence, correctConsequence, historicalContext. \
             Ровно один правильный вариант.",
            name = request.character.display_name(),
            context = request.character.epithet(),
            level = request.level,
            index = request.index,
            options = request.option_count,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Character;

    #[test]
    fn test_prompt_carries_request_parameters() {
        let request = ScenarioRequest {
            character: Character::AitekeBi,
            level: 4,
            index: 2,
            option_count: 3,
            language: Language::Kazakh,
        };
        let prompt = build_scenario_prompt(&request);
        assert!(prompt.contains("Айтеке би"));
        assert!(prompt.contains("4 из 10"));
        assert!(prompt.contains("Номер сценария: 2"));
    }
}
