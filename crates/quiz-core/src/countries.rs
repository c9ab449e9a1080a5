//! Static country table and the read-only registry built over it.

use fnv::FnvHashMap;

use crate::constants::{
    DISTANCE_LARGE, DISTANCE_MEDIUM, DISTANCE_SMALL, DOT_RADIUS_LARGE_DEG, DOT_RADIUS_MEDIUM_DEG,
    DOT_RADIUS_SMALL_DEG,
};
use crate::error::{QuizError, QuizResult};

mod data;

pub use data::COUNTRIES;

/// Rough visual size of a country on the globe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    Small,
    Medium,
    Large,
}

impl Scale {
    /// Camera distance from the globe centre (globe radius is 1).
    pub fn camera_distance(self) -> f32 {
        match self {
            Scale::Small => DISTANCE_SMALL,
            Scale::Medium => DISTANCE_MEDIUM,
            Scale::Large => DISTANCE_LARGE,
        }
    }

    /// Radius, in degrees of arc, of a highlight dot.
    pub fn dot_radius_deg(self) -> f32 {
        match self {
            Scale::Small => DOT_RADIUS_SMALL_DEG,
            Scale::Medium => DOT_RADIUS_MEDIUM_DEG,
            Scale::Large => DOT_RADIUS_LARGE_DEG,
        }
    }
}

/// How the target country is marked on the globe texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Highlight {
    /// Fill the map region with this id.
    Fill(&'static str),
    /// One dot on the country's centroid.
    Dot,
    /// Dots at each `(latitude, longitude)`; for archipelagos too small to fill.
    SmallDots(&'static [(f32, f32)]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub alternative_names: &'static [&'static str],
    pub latitude: f32,
    pub longitude: f32,
    pub scale: Scale,
    pub highlight: Highlight,
}

impl Country {
    /// Every `(latitude, longitude)` a dot highlight should be drawn at.
    pub fn dot_positions(&self) -> Vec<(f32, f32)> {
        match self.highlight {
            Highlight::Fill(_) => Vec::new(),
            Highlight::Dot => vec![(self.latitude, self.longitude)],
            Highlight::SmallDots(dots) => dots.to_vec(),
        }
    }
}

/// Ordered, immutable set of countries with lookup by code.
#[derive(Clone, Debug)]
pub struct Countries {
    table: &'static [Country],
    by_code: FnvHashMap<String, usize>,
}

impl Countries {
    pub fn new(table: &'static [Country]) -> QuizResult<Self> {
        if table.is_empty() {
            return Err(QuizError::EmptyRegistry);
        }
        let mut by_code = FnvHashMap::default();
        for (i, c) in table.iter().enumerate() {
            validate_country(c)?;
            if by_code.insert(c.code.to_lowercase(), i).is_some() {
                return Err(QuizError::InvalidTable(format!(
                    "duplicate country code {}",
                    c.code
                )));
            }
        }
        log::debug!("[countries] loaded {} countries", table.len());
        Ok(Self { table, by_code })
    }

    /// Registry over the built-in table.
    pub fn builtin() -> QuizResult<Self> {
        Self::new(COUNTRIES)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static Country> {
        self.table.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Country> {
        self.table.iter()
    }

    pub fn table(&self) -> &'static [Country] {
        self.table
    }

    /// Case-insensitive lookup of a table index by country code.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.by_code.get(&code.to_lowercase()).copied()
    }

    pub fn by_code(&self, code: &str) -> Option<&'static Country> {
        self.index_of(code).and_then(|i| self.get(i))
    }
}

fn validate_country(c: &Country) -> QuizResult<()> {
    let invalid = |msg: String| Err(QuizError::InvalidTable(msg));
    if c.code.is_empty() || c.name.is_empty() {
        return invalid(format!("country {:?} needs a code and a name", c.code));
    }
    if !in_range(c.latitude, c.longitude) {
        return invalid(format!("{} centroid out of range", c.code));
    }
    match c.highlight {
        Highlight::Fill(id) if id.is_empty() => {
            return invalid(format!("{} has an empty fill region id", c.code))
        }
        Highlight::SmallDots(dots) => {
            if dots.is_empty() {
                return invalid(format!("{} has no highlight dots", c.code));
            }
            if dots.iter().any(|&(lat, lon)| !in_range(lat, lon)) {
                return invalid(format!("{} has a highlight dot out of range", c.code));
            }
        }
        _ => {}
    }
    Ok(())
}

#[inline]
fn in_range(lat: f32, lon: f32) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
