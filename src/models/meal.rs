use crate::services::ApiError;

/// Comidas del día, en el orden en que las devuelve la API
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Meal {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub nosh: String,
}

impl TryFrom<Vec<String>> for Meal {
    type Error = ApiError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        let len = entries.len();
        let [breakfast, lunch, dinner, nosh]: [String; 4] = entries
            .try_into()
            .map_err(|_| ApiError::MalformedMeal(len))?;

        Ok(Self {
            breakfast,
            lunch,
            dinner,
            nosh,
        })
    }
}
