use crate::domain::food_analysis::entities::MealType;

pub const SUGGESTION_COUNT: usize = 3;

pub fn food_analysis_prompt() -> String {
    let meal_types = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ]
    .iter()
    .map(MealType::as_str)
    .collect::<Vec<_>>()
    .join(", ");

    format!(
        "Analise esta imagem de comida com o poder de Zeus.\n\
         1. Identifique o tipo de refeição ({meal_types}).\n\
         2. Identifique os itens e as porções detalhadas.\n\
         3. Calcule calorias totais, proteínas, carboidratos e gorduras.\n\
         4. Defina uma faixa de calorias ideal para esse tipo específico de refeição.\n\
         5. Sugira exatamente {SUGGESTION_COUNT} atividades físicas (intensidade leve, moderada ou intensa) \
         e o tempo em minutos necessário para queimar o total de calorias identificado.\n\
         6. Sugira exatamente {SUGGESTION_COUNT} alternativas ou melhorias mais saudáveis para esta refeição, \
         focando em equilíbrio nutricional e substituições inteligentes.\n\
         Responda estritamente em JSON no idioma Português."
    )
}
