use serde::{Deserialize, Deserializer};

/// Body of the discovery-by-postcode endpoint. Everything besides the
/// restaurant list is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Restaurant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: Rating,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisines: Vec<Cuisine>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_line: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
}

impl Address {
    /// "first line, city, postal code"
    pub fn single_line(&self) -> String {
        format!("{}, {}, {}", self.first_line, self.city, self.postal_code)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Expected to be within 0.0..=5.0, never checked.
    #[serde(default, deserialize_with = "null_as_default")]
    pub star_rating: f64,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Cuisine {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// The API sends `null` for some blank fields, treat it the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
