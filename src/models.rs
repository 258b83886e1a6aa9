use serde::{Deserialize, Serialize};

use crate::entities::{director, genre, movie};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Genre {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for Genre {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Director {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for Director {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// `genre` and `director` carry the referenced record's name, or null when
/// the reference is unset or points at a deleted row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub genre: Option<String>,
    pub director_id: Option<i32>,
    pub director: Option<String>,
}

impl Movie {
    pub fn from_model(m: movie::Model, genre: Option<String>, director: Option<String>) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            genre,
            director_id: m.director_id,
            director,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewGenre {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewDirector {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewMovie {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Raw query values. A present value is an equality constraint even when it
/// is empty or not an integer; such values simply match no row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieFilter {
    /// `(director_id, genre_id)` constraints, or `None` when some present
    /// value cannot equal any stored id.
    pub fn ids(&self) -> Option<(Option<i32>, Option<i32>)> {
        Some((parse_id(self.director_id.as_deref())?, parse_id(self.genre_id.as_deref())?))
    }
}

fn parse_id(raw: Option<&str>) -> Option<Option<i32>> {
    match raw {
        None => Some(None),
        Some(s) => s.parse().ok().map(Some),
    }
}
