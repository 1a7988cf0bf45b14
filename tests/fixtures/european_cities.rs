//! European cities with real attraction coordinates.
//!
//! Coordinates sourced from OpenStreetMap.

use itinerary_planner::model::{Attraction, City};

fn spot(
    name: &str,
    description: &str,
    hours: f64,
    categories: &[&str],
    popularity: f64,
    (lat, lng): (f64, f64),
) -> Attraction {
    Attraction::new(name, description, hours, categories.iter().copied())
        .with_popularity(popularity)
        .with_location(lat, lng)
}

pub fn paris() -> City {
    City::new("Paris", "France")
        .with_importance(5.0)
        .with_attractions(vec![
            spot(
                "Louvre Museum",
                "World's largest art museum.",
                3.0,
                &["art", "museum"],
                5.0,
                (48.8606, 2.3376),
            ),
            spot(
                "Eiffel Tower",
                "Iron lattice tower on the Champ de Mars.",
                2.0,
                &["landmark"],
                5.0,
                (48.8584, 2.2945),
            ),
            spot(
                "Musée d'Orsay",
                "Impressionist masterpieces in a former station.",
                2.5,
                &["art", "museum"],
                4.0,
                (48.8600, 2.3266),
            ),
            spot(
                "Notre-Dame",
                "Medieval Catholic cathedral.",
                1.0,
                &["history", "church"],
                4.0,
                (48.8530, 2.3499),
            ),
            spot(
                "Le Marais Food Walk",
                "Falafel, pastries and cheese.",
                2.0,
                &["food"],
                3.0,
                (48.8575, 2.3620),
            ),
            spot(
                "Luxembourg Gardens",
                "Formal gardens and fountains.",
                1.5,
                &["park"],
                3.0,
                (48.8462, 2.3372),
            ),
        ])
}

pub fn rome() -> City {
    City::new("Rome", "Italy")
        .with_importance(5.0)
        .with_attractions(vec![
            spot(
                "Colosseum",
                "Ancient amphitheatre.",
                2.5,
                &["history", "landmark"],
                5.0,
                (41.8902, 12.4922),
            ),
            spot(
                "Vatican Museums",
                "Papal art collections and the Sistine Chapel.",
                4.0,
                &["art", "museum"],
                5.0,
                (41.9065, 12.4536),
            ),
            spot(
                "Trastevere Dinner",
                "Roman trattorias.",
                2.0,
                &["food"],
                4.0,
                (41.8897, 12.4700),
            ),
            spot(
                "Pantheon",
                "Roman temple turned church.",
                1.0,
                &["history", "church"],
                4.0,
                (41.8986, 12.4769),
            ),
        ])
}

pub fn barcelona() -> City {
    City::new("Barcelona", "Spain")
        .with_importance(4.0)
        .with_attractions(vec![
            spot(
                "Sagrada Família",
                "Gaudí's unfinished basilica.",
                2.0,
                &["church", "landmark"],
                5.0,
                (41.4036, 2.1744),
            ),
            spot(
                "Picasso Museum",
                "Early works of Picasso.",
                2.0,
                &["art", "museum"],
                4.0,
                (41.3852, 2.1809),
            ),
            spot(
                "La Boqueria",
                "Covered food market.",
                1.0,
                &["food"],
                4.0,
                (41.3817, 2.1716),
            ),
        ])
}

pub fn amsterdam() -> City {
    City::new("Amsterdam", "Netherlands")
        .with_importance(3.0)
        .with_attractions(vec![
            spot(
                "Rijksmuseum",
                "Dutch Golden Age art.",
                3.0,
                &["art", "museum"],
                5.0,
                (52.3600, 4.8852),
            ),
            spot(
                "Vondelpark",
                "Large public park.",
                1.5,
                &["park"],
                3.0,
                (52.3580, 4.8686),
            ),
        ])
}

/// A city with nothing to do.
pub fn layover() -> City {
    City::new("Layover", "Nowhere").with_importance(1.0)
}
