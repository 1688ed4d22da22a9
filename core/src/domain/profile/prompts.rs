use crate::domain::profile::value_objects::AssessProfileInput;

pub const MAX_ADVICE_WORDS: usize = 20;

pub fn profile_assessment_prompt(input: &AssessProfileInput) -> String {
    format!(
        "Você é o Oráculo de Zeus, mestre em fisiologia e nutrição.\n\
         Com base nos dados deste herói:\n\
         Nome: {name}\n\
         Sexo: {gender}\n\
         Idade: {age} anos\n\
         Peso atual: {weight} kg\n\n\
         1. Calcule a faixa de peso ideal (min e max) com base em parâmetros de saúde.\n\
         2. Determine um \"Status de Saúde\" criativo (ex: \"Peso de Batalha\", \"Em Ascensão\", \"Físico Divino\").\n\
         3. Dê um conselho de herói curto (no máximo {MAX_ADVICE_WORDS} palavras) focado em longevidade.\n\n\
         Retorne estritamente em JSON no idioma Português.",
        name = input.name,
        gender = input.gender.as_str(),
        age = input.age,
        weight = input.weight,
    )
}
