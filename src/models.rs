use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_PAGE: &str = "1";
pub const DEFAULT_SORT_BY: &str = "popularity.desc";
pub const DEFAULT_INCLUDE_ADULT: &str = "false";
pub const DEFAULT_INCLUDE_NULL_FIRST_AIR_DATES: &str = "false";

/// Query string accepted by `GET /tv-shows/popular`.
///
/// Every field is optional on the wire. Defaults are applied when the
/// upstream query is built, not here, so `None` always means "the caller
/// did not send it".
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularShowsQuery {
    /// Response language, defaults to `en-US`.
    pub language: Option<String>,
    /// Result page, defaults to `1`. Forwarded as-is.
    pub page: Option<String>,
    /// Sort order, defaults to `popularity.desc`.
    pub sort_by: Option<String>,
    /// Defaults to `false`.
    pub include_adult: Option<String>,
    pub first_air_date_year: Option<String>,
    /// Comma or pipe separated TMDb genre ids.
    pub with_genres: Option<String>,
    /// Defaults to `false`.
    pub include_null_first_air_dates: Option<String>,
    /// Lower first-air-date bound (`YYYY-MM-DD`), sent upstream as `first_air_date.gte`.
    pub first_air_date_gte: Option<String>,
    /// Upper first-air-date bound (`YYYY-MM-DD`), sent upstream as `first_air_date.lte`.
    pub first_air_date_lte: Option<String>,
}

impl PopularShowsQuery {
    /// Parses a raw query string. Unknown keys are ignored and the first
    /// occurrence of a repeated key wins.
    pub fn from_query_str(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match &*key {
                "language" => &mut query.language,
                "page" => &mut query.page,
                "sort_by" => &mut query.sort_by,
                "include_adult" => &mut query.include_adult,
                "first_air_date_year" => &mut query.first_air_date_year,
                "with_genres" => &mut query.with_genres,
                "include_null_first_air_dates" => &mut query.include_null_first_air_dates,
                "first_air_date_gte" => &mut query.first_air_date_gte,
                "first_air_date_lte" => &mut query.first_air_date_lte,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }

    /// Builds the query sent to TMDb's `/discover/tv`.
    ///
    /// Defaulted parameters are always present. Optional ones are dropped
    /// when absent, and the date bounds are also dropped when empty.
    pub fn to_discover_query(&self) -> DiscoverQuery {
        let or_default = |value: &Option<String>, default: &str| {
            Some(value.clone().unwrap_or_else(|| default.to_string()))
        };
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        let entries = [
            ("language", or_default(&self.language, DEFAULT_LANGUAGE)),
            ("page", or_default(&self.page, DEFAULT_PAGE)),
            ("sort_by", or_default(&self.sort_by, DEFAULT_SORT_BY)),
            (
                "include_adult",
                or_default(&self.include_adult, DEFAULT_INCLUDE_ADULT),
            ),
            ("first_air_date_year", self.first_air_date_year.clone()),
            ("with_genres", self.with_genres.clone()),
            (
                "include_null_first_air_dates",
                or_default(
                    &self.include_null_first_air_dates,
                    DEFAULT_INCLUDE_NULL_FIRST_AIR_DATES,
                ),
            ),
            ("first_air_date.gte", non_empty(&self.first_air_date_gte)),
            ("first_air_date.lte", non_empty(&self.first_air_date_lte)),
        ];

        DiscoverQuery {
            params: entries
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        }
    }
}

/// Parameters forwarded to TMDb, in a stable order. Only present values are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    params: Vec<(&'static str, String)>,
}

impl DiscoverQuery {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(k, _)| *k)
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Error body returned by every failure path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Unable to fetch data from TMDb")]
    pub error: String,
}
