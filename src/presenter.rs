use std::fmt;
use std::io::{self, Write};

use crate::data::{Cuisine, Restaurant};

/// How many entries get rendered, in API order.
pub const TOP_LIMIT: usize = 10;

const SEPARATOR: &str = "---------------------------------------------------------------";

/// One rendered entry, `index` is 1-based.
pub struct RestaurantCard<'a> {
    pub index: usize,
    pub restaurant: &'a Restaurant,
}

impl fmt::Display for RestaurantCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = self.restaurant;
        writeln!(f, "Restaurant: {}", self.index)?;
        writeln!(f, "Name: {}", rest.name)?;
        writeln!(f, "Address: {}", rest.address.single_line())?;
        writeln!(f, "Cuisines: {}", join_cuisines(&rest.cuisines))?;
        writeln!(f, "Rating: {}", format_rating(rest.rating.star_rating))?;
        writeln!(f, "{SEPARATOR}")
    }
}

pub fn join_cuisines(cuisines: &[Cuisine]) -> String {
    cuisines
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One decimal place. Rounds the rating scaled by ten, halves away from zero (4.25 -> "4.3").
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

/// Write the first [`TOP_LIMIT`] restaurants to `writer`.
pub fn render_top<W: Write>(restaurants: &[Restaurant], mut writer: W) -> io::Result<()> {
    for (i, restaurant) in restaurants.iter().take(TOP_LIMIT).enumerate() {
        write!(
            writer,
            "{}",
            RestaurantCard {
                index: i + 1,
                restaurant
            }
        )?;
    }
    writer.flush()
}

pub fn display_top(restaurants: &[Restaurant]) -> io::Result<()> {
    render_top(restaurants, io::stdout().lock())
}
