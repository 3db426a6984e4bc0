use crate::models::{Item, Meal, MealPlan};

/// Generic five-meal example plan used when no producer is available.
pub fn generic_plan() -> MealPlan {
    let mut breakfast = Meal::new("Café da manhã")
        .at("07:00")
        .with_item(Item::new("Café com leite ou chá", "1", "xícara"))
        .with_item(Item::new("Pão integral", "2", "fatia"))
        .with_item(Item::new("Queijo branco ou geleia sem açúcar", "1", "colher de sopa"))
        .with_item(Item::new("Banana ou maçã", "1", "unidade média"));
    breakfast.description = "1 xícara de café com leite ou chá; 2 fatias de pão integral com queijo \
        branco ou geleia sem açúcar; 1 fruta (ex.: banana ou maçã)."
        .to_string();
    breakfast.notes = Some("Priorize proteína e fibras para manter a saciedade.".to_string());

    let mut morning_snack = Meal::new("Lanche da manhã")
        .at("10:00")
        .with_item(Item::new("Iogurte natural", "1", "pote 170g"))
        .with_item(Item::new("Fruta (ex.: maçã)", "1", "unidade média"))
        .with_item(Item::new("Castanhas (alternativa)", "30", "g"));
    morning_snack.description =
        "1 porção de fruta ou iogurte natural; ou um punhado de castanhas.".to_string();

    let mut lunch = Meal::new("Almoço")
        .at("12:30")
        .with_item(Item::new("Salada ou legumes (variados)", "2", "colher de servir"))
        .with_item(Item::new("Frango grelhado ou peixe", "100", "g"))
        .with_item(Item::new("Arroz integral", "3", "colher de servir"))
        .with_item(Item::new("Feijão (opcional)", "1", "concha"));
    lunch.description = "Prato com metade de vegetais, 1/4 de proteína e 1/4 de carboidrato.".to_string();
    lunch.notes = Some("Use medidas caseiras: 1 concha, 1 filé do tamanho da palma da mão.".to_string());

    let mut afternoon_snack = Meal::new("Lanche da tarde")
        .at("16:00")
        .with_item(Item::new("Pão integral", "2", "fatia"))
        .with_item(Item::new("Queijo ou peito de peru", "30", "g"))
        .with_item(Item::new("Suco ou vitamina de frutas", "200", "ml"));
    afternoon_snack.description =
        "Iogurte, fruta, sanduíche leve com pão integral ou vitamina de frutas.".to_string();

    let mut dinner = Meal::new("Jantar")
        .at("19:30")
        .with_item(Item::new("Proteína (frango, peixe ou ovo)", "80", "g"))
        .with_item(Item::new("Vegetais cozidos ou salada", "2", "colher de servir"))
        .with_item(Item::new("Carboidrato (arroz ou batata)", "2", "colher de servir"));
    dinner.description = "Similar ao almoço, em porções um pouco menores.".to_string();
    dinner.notes = Some("Evite refeições pesadas perto do horário de dormir.".to_string());

    MealPlan {
        summary: "Plano alimentar de exemplo, com sugestões gerais para o dia a dia.".to_string(),
        meals: vec![breakfast, morning_snack, lunch, afternoon_snack, dinner],
        warnings: vec![
            "Este plano é apenas informativo e de exemplo.".to_string(),
            "Não substitui acompanhamento por nutricionista ou médico.".to_string(),
        ],
    }
}
