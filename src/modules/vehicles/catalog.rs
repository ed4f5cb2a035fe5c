//! Pure catalog browsing: filter, sort, paginate.

use serde::{Deserialize, Serialize};

use super::models::Vehicle;

/// Browse parameters, all optional. `type` and `brand` accept `all` as a
/// no-op filter to match the browse UI's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub brand: Option<String>,
    pub min_rating: Option<f32>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub sort: SortKey,
    pub page: Option<u32>,
}

const DEFAULT_MAX_PRICE: u32 = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

/// One page of browse results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
    pub page: u32,
    pub total_pages: u32,
}

fn matches(vehicle: &Vehicle, query: &CatalogQuery) -> bool {
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        let hit = vehicle.name.to_lowercase().contains(&needle)
            || vehicle.brand.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(kind) = &query.vehicle_type {
        if kind != "all" && &vehicle.vehicle_type != kind {
            return false;
        }
    }
    if let Some(brand) = &query.brand {
        if brand != "all" && &vehicle.brand != brand {
            return false;
        }
    }
    if let Some(min_rating) = query.min_rating {
        if vehicle.rating < min_rating {
            return false;
        }
    }
    let min_price = query.min_price.unwrap_or(0);
    let max_price = query.max_price.unwrap_or(DEFAULT_MAX_PRICE);
    (min_price..=max_price).contains(&vehicle.price_per_day)
}

/// Filter, sort, and paginate `vehicles` into one browse page.
///
/// Pages are 1-based; an out-of-range page simply yields an empty slice so
/// the client can clamp against `total_pages`.
pub fn browse(vehicles: Vec<Vehicle>, query: &CatalogQuery, page_size: u32) -> CatalogPage {
    let mut filtered: Vec<Vehicle> = vehicles
        .into_iter()
        .filter(|vehicle| matches(vehicle, query))
        .collect();

    match query.sort {
        SortKey::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceLow => filtered.sort_by_key(|v| v.price_per_day),
        SortKey::PriceHigh => {
            filtered.sort_by_key(|v| std::cmp::Reverse(v.price_per_day))
        }
        SortKey::Rating => filtered.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    let total = filtered.len();
    let page_size = page_size.max(1) as usize;
    let total_pages = total.div_ceil(page_size) as u32;
    let page = query.page.unwrap_or(1).max(1);
    let start = (page as usize - 1).saturating_mul(page_size);
    let vehicles: Vec<Vehicle> = filtered.into_iter().skip(start).take(page_size).collect();

    CatalogPage {
        vehicles,
        total,
        page,
        total_pages,
    }
}
