//! Shareable location tokens
//!
//! An address names a galaxy, optionally a system inside it and a planet
//! inside that, plus an optional listing page. It encodes to URL-safe base64
//! of a query string:
//!
//! `coordinates=x,y,z[&system=i[&planet=name]][&page=p]`

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use naming::slug;
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use crate::error::{CosmosError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub coordinates: Coordinates,
    pub system: Option<u64>,
    /// Lowercase slug of the planet name
    pub planet: Option<String>,
    pub page: Option<u32>,
}

impl Address {
    pub fn galaxy(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            system: None,
            planet: None,
            page: None,
        }
    }

    pub fn system(coordinates: Coordinates, system: u64) -> Self {
        Self {
            system: Some(system),
            ..Self::galaxy(coordinates)
        }
    }

    /// The planet name is stored as its slug
    pub fn planet(coordinates: Coordinates, system: u64, planet: &str) -> Self {
        Self {
            planet: Some(slug(planet)),
            ..Self::system(coordinates, system)
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Plain query string form
    pub fn query(&self) -> String {
        let mut query = format!("coordinates={}", self.coordinates);
        if let Some(system) = self.system {
            query.push_str(&format!("&system={system}"));
            if let Some(planet) = &self.planet {
                query.push_str(&format!("&planet={planet}"));
            }
        }
        if let Some(page) = self.page {
            query.push_str(&format!("&page={page}"));
        }
        query
    }

    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.query())
    }

    pub fn decode(token: &str) -> Result<Self> {
        if token.is_empty() || token.len() % 4 != 0 {
            return Err(invalid("token length must be a non-zero multiple of 4"));
        }
        let bytes = URL_SAFE
            .decode(token)
            .map_err(|e| invalid(&format!("not base64: {e}")))?;
        let query = String::from_utf8(bytes).map_err(|_| invalid("not UTF-8"))?;
        Self::parse_query(&query)
    }

    /// Parse the plain query string form
    pub fn parse_query(query: &str) -> Result<Self> {
        let mut parts = query.split('&').peekable();

        let coordinates = parts
            .next()
            .and_then(|part| part.strip_prefix("coordinates="))
            .ok_or_else(|| invalid("address must start with coordinates"))?;
        let axes = coordinates
            .split(',')
            .map(parse_number)
            .collect::<Result<Vec<u64>>>()?;
        let &[x, y, z] = axes.as_slice() else {
            return Err(invalid("coordinates need exactly three components"));
        };
        let mut address = Self::galaxy(Coordinates::new(x, y, z)?);

        if let Some(value) = take_field(&mut parts, "system") {
            address.system = Some(parse_number(value)?);
            if let Some(value) = take_field(&mut parts, "planet") {
                address.planet = Some(parse_planet(value)?);
            }
        }
        if let Some(value) = take_field(&mut parts, "page") {
            let page = parse_number(value)?;
            address.page =
                Some(u32::try_from(page).map_err(|_| invalid("page number too large"))?);
        }
        if let Some(rest) = parts.next() {
            return Err(invalid(&format!("unexpected field '{rest}'")));
        }
        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Address {
    type Err = CosmosError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

fn take_field<'a, I>(parts: &mut std::iter::Peekable<I>, key: &str) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    let part: &'a str = parts.peek().copied()?;
    let value = part.strip_prefix(key)?.strip_prefix('=')?;
    parts.next();
    Some(value)
}

fn parse_number(value: &str) -> Result<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(&format!("'{value}' is not a number")));
    }
    value
        .parse()
        .map_err(|_| invalid(&format!("'{value}' is too large")))
}

fn parse_planet(value: &str) -> Result<String> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(invalid(&format!("'{value}' is not a planet name")));
    }
    Ok(value.to_ascii_lowercase())
}

fn invalid(reason: &str) -> CosmosError {
    CosmosError::InvalidAddress(reason.to_owned())
}
