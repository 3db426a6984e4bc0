use serde::{Deserialize, Serialize};

/// A full day's meal plan as supplied by a plan producer.
///
/// Only `meals` feeds the estimator; the summary text and warnings are
/// carried so a loaded document can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(rename = "resumo_geral", alias = "summary", default)]
    pub summary: String,

    #[serde(rename = "refeicoes", alias = "meals")]
    pub meals: Vec<Meal>,

    #[serde(rename = "avisos_importantes", alias = "warnings", default)]
    pub warnings: Vec<String>,
}

impl MealPlan {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            ..Self::default()
        }
    }

    /// Total number of items across all meals.
    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|m| m.items().len()).sum()
    }
}

/// A single meal slot in the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,

    #[serde(
        rename = "horario_sugerido",
        alias = "suggested_time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_time: Option<String>,

    #[serde(rename = "descricao", alias = "description", default)]
    pub description: String,

    #[serde(
        rename = "observacoes",
        alias = "notes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    #[serde(
        rename = "itens",
        alias = "items",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<Item>>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.suggested_time = Some(time.into());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }

    /// Items in declaration order; empty when the meal has none.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Suggested time, treating an empty string as absent.
    pub fn time(&self) -> Option<&str> {
        self.suggested_time.as_deref().filter(|t| !t.is_empty())
    }
}

/// A named food with an optional household measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,

    #[serde(
        rename = "quantidade",
        alias = "quantity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,

    #[serde(
        rename = "unidade",
        alias = "unit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
            unit: Some(unit.into()),
        }
    }

    /// An item with no quantity or unit.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }
}
