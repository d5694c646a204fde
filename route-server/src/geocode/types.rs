//! Place search DTOs.
//!
//! Raw Nominatim items (jsonv2) and the normalized shapes the rest of the
//! application consumes. Nominatim sends coordinates as strings and omits
//! fields freely, so the raw types are all-`Option` and conversion filters
//! out anything unusable.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw Nominatim search result item.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub place_id: Option<u64>,

    pub display_name: Option<String>,

    /// Latitude as a decimal string.
    pub lat: Option<String>,

    /// Longitude as a decimal string.
    pub lon: Option<String>,

    /// OSM feature type, e.g. "cafe", "residential".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub address: Option<NominatimAddress>,

    /// Present only when `namedetails=1` was requested.
    pub namedetails: Option<NominatimNameDetails>,
}

/// Address parts Nominatim breaks out when `addressdetails=1`.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimAddress {
    pub road: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Localized name details.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimNameDetails {
    pub name: Option<String>,
}

/// A normalized place candidate, most-relevant first in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodingResult {
    pub place_id: String,

    pub display_name: String,

    pub lat: f64,

    pub lon: f64,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PlaceAddress>,
}

/// Normalized address parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl GeocodingResult {
    /// Convert a raw item, dropping it when coordinates are unusable.
    pub fn from_place(place: NominatimPlace) -> Option<Self> {
        let lat: f64 = place.lat.as_deref()?.parse().ok()?;
        let lon: f64 = place.lon.as_deref()?.parse().ok()?;

        let address = place.address.map(|a| PlaceAddress {
            road: a.road,
            // Smaller settlements report town or village instead of city.
            city: a.city.or(a.town).or(a.village),
            county: a.county,
            state: a.state,
            country: a.country,
        });

        Some(Self {
            place_id: place.place_id.map(|id| id.to_string()).unwrap_or_default(),
            display_name: place.display_name.unwrap_or_default(),
            lat,
            lon,
            kind: place.kind.unwrap_or_default(),
            address,
        })
    }
}

/// Error returned when parsing an unknown POI category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown POI category: {0}")]
pub struct InvalidCategory(String);

/// Point-of-interest categories the map can overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Cafe,
    Restaurant,
    Shop,
    Pharmacy,
    Bank,
    Hotel,
}

impl PoiCategory {
    /// The free-text query sent to the place search service.
    pub fn search_query(&self) -> &'static str {
        match self {
            PoiCategory::Cafe => "cafe",
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Shop => "supermarket",
            PoiCategory::Pharmacy => "pharmacy",
            PoiCategory::Bank => "bank",
            PoiCategory::Hotel => "hotel",
        }
    }
}

impl FromStr for PoiCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cafe" => Ok(PoiCategory::Cafe),
            "restaurant" => Ok(PoiCategory::Restaurant),
            "shop" => Ok(PoiCategory::Shop),
            "pharmacy" => Ok(PoiCategory::Pharmacy),
            "bank" => Ok(PoiCategory::Bank),
            "hotel" => Ok(PoiCategory::Hotel),
            other => Err(InvalidCategory(other.to_string())),
        }
    }
}

/// A point of interest inside the city viewbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: PoiCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub display_name: String,
}

impl Poi {
    /// Convert a raw item for the given category, dropping unusable ones.
    pub fn from_place(place: NominatimPlace, category: PoiCategory) -> Option<Self> {
        let lat: f64 = place.lat.as_deref()?.parse().ok()?;
        let lon: f64 = place.lon.as_deref()?.parse().ok()?;

        let display_name = place.display_name.unwrap_or_default();

        // Prefer the localized name; fall back to the first display-name
        // segment, then to a placeholder.
        let name = place
            .namedetails
            .and_then(|n| n.name)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                display_name
                    .split(',')
                    .next()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Без назви".to_string());

        let address = place.address.and_then(|a| {
            let parts: Vec<String> = [a.road, a.house_number]
                .into_iter()
                .flatten()
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        });

        Some(Self {
            id: place.place_id.map(|id| id.to_string()).unwrap_or_default(),
            name,
            lat,
            lon,
            kind: place
                .kind
                .unwrap_or_else(|| category.search_query().to_string()),
            category,
            address,
            display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_place(json: &str) -> NominatimPlace {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn geocoding_result_from_full_place() {
        let place = raw_place(
            r#"{
                "place_id": 12345,
                "display_name": "Театр, вулиця Театральна, Ужгород, Україна",
                "lat": "48.6225",
                "lon": "22.2962",
                "type": "theatre",
                "address": {
                    "road": "вулиця Театральна",
                    "town": "Ужгород",
                    "country": "Україна"
                }
            }"#,
        );

        let result = GeocodingResult::from_place(place).unwrap();
        assert_eq!(result.place_id, "12345");
        assert_eq!(result.lat, 48.6225);
        assert_eq!(result.kind, "theatre");
        // Town promoted to city.
        assert_eq!(result.address.unwrap().city.as_deref(), Some("Ужгород"));
    }

    #[test]
    fn geocoding_result_rejects_bad_coordinates() {
        let place = raw_place(r#"{"place_id": 1, "lat": "not-a-number", "lon": "22.29"}"#);
        assert!(GeocodingResult::from_place(place).is_none());

        let place = raw_place(r#"{"place_id": 1, "lon": "22.29"}"#);
        assert!(GeocodingResult::from_place(place).is_none());
    }

    #[test]
    fn geocoding_result_serializes_camel_case() {
        let place = raw_place(r#"{"place_id": 7, "display_name": "X", "lat": "48.6", "lon": "22.3"}"#);
        let result = GeocodingResult::from_place(place).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["placeId"], "7");
        assert_eq!(json["displayName"], "X");
        assert_eq!(json["type"], "");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn category_parsing() {
        assert_eq!("cafe".parse::<PoiCategory>().unwrap(), PoiCategory::Cafe);
        assert_eq!("shop".parse::<PoiCategory>().unwrap(), PoiCategory::Shop);
        assert!("nightclub".parse::<PoiCategory>().is_err());
    }

    #[test]
    fn shop_category_queries_supermarket() {
        assert_eq!(PoiCategory::Shop.search_query(), "supermarket");
    }

    #[test]
    fn poi_name_fallback_chain() {
        // namedetails wins
        let place = raw_place(
            r#"{
                "place_id": 1, "lat": "48.6", "lon": "22.3",
                "display_name": "Кавʼярня №1, вулиця Корзо, Ужгород",
                "namedetails": {"name": "Кавʼярня №1"}
            }"#,
        );
        let poi = Poi::from_place(place, PoiCategory::Cafe).unwrap();
        assert_eq!(poi.name, "Кавʼярня №1");

        // first display-name segment next
        let place = raw_place(
            r#"{"place_id": 2, "lat": "48.6", "lon": "22.3", "display_name": "Аптека, Ужгород"}"#,
        );
        let poi = Poi::from_place(place, PoiCategory::Pharmacy).unwrap();
        assert_eq!(poi.name, "Аптека");

        // placeholder last
        let place = raw_place(r#"{"place_id": 3, "lat": "48.6", "lon": "22.3"}"#);
        let poi = Poi::from_place(place, PoiCategory::Bank).unwrap();
        assert_eq!(poi.name, "Без назви");
    }

    #[test]
    fn poi_address_joins_road_and_number() {
        let place = raw_place(
            r#"{
                "place_id": 4, "lat": "48.6", "lon": "22.3",
                "address": {"road": "вулиця Корзо", "house_number": "12"}
            }"#,
        );
        let poi = Poi::from_place(place, PoiCategory::Cafe).unwrap();
        assert_eq!(poi.address.as_deref(), Some("вулиця Корзо 12"));

        let place = raw_place(r#"{"place_id": 5, "lat": "48.6", "lon": "22.3", "address": {}}"#);
        let poi = Poi::from_place(place, PoiCategory::Cafe).unwrap();
        assert!(poi.address.is_none());
    }

    #[test]
    fn poi_kind_falls_back_to_category_query() {
        let place = raw_place(r#"{"place_id": 6, "lat": "48.6", "lon": "22.3"}"#);
        let poi = Poi::from_place(place, PoiCategory::Shop).unwrap();
        assert_eq!(poi.kind, "supermarket");
    }
}
