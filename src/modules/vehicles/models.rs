use serde::{Deserialize, Serialize};

/// Catalog record for a rentable vehicle. Prices are whole rupees per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub brand: String,
    pub price_per_day: u32,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub features: Vec<String>,
}

/// Seed fleet used until an admin loads real inventory.
pub fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "vehicle-1".to_string(),
            name: "Honda Activa 6G".to_string(),
            vehicle_type: "scooty".to_string(),
            brand: "Honda".to_string(),
            price_per_day: 299,
            rating: 4.8,
            reviews: 124,
            location: "Mumbai, Maharashtra".to_string(),
            features: vec![
                "Fuel Efficient".to_string(),
                "Comfortable".to_string(),
                "Reliable".to_string(),
            ],
        },
        Vehicle {
            id: "vehicle-2".to_string(),
            name: "Maruti Swift".to_string(),
            vehicle_type: "car".to_string(),
            brand: "Maruti".to_string(),
            price_per_day: 1299,
            rating: 4.9,
            reviews: 89,
            location: "Mumbai, Maharashtra".to_string(),
            features: vec![
                "AC".to_string(),
                "Automatic".to_string(),
                "5 Seater".to_string(),
            ],
        },
        Vehicle {
            id: "vehicle-3".to_string(),
            name: "Royal Enfield Classic".to_string(),
            vehicle_type: "bike".to_string(),
            brand: "Royal Enfield".to_string(),
            price_per_day: 899,
            rating: 4.7,
            reviews: 156,
            location: "Pune, Maharashtra".to_string(),
            features: vec![
                "Powerful".to_string(),
                "Stylish".to_string(),
                "Adventure Ready".to_string(),
            ],
        },
        Vehicle {
            id: "vehicle-4".to_string(),
            name: "TVS Jupiter".to_string(),
            vehicle_type: "scooty".to_string(),
            brand: "TVS".to_string(),
            price_per_day: 279,
            rating: 4.6,
            reviews: 98,
            location: "Mumbai, Maharashtra".to_string(),
            features: vec![
                "Lightweight".to_string(),
                "Economical".to_string(),
                "Easy Handling".to_string(),
            ],
        },
        Vehicle {
            id: "vehicle-5".to_string(),
            name: "Hyundai i20".to_string(),
            vehicle_type: "car".to_string(),
            brand: "Hyundai".to_string(),
            price_per_day: 1499,
            rating: 4.8,
            reviews: 67,
            location: "Pune, Maharashtra".to_string(),
            features: vec![
                "Premium Interior".to_string(),
                "Touchscreen".to_string(),
                "Safety Features".to_string(),
            ],
        },
        Vehicle {
            id: "vehicle-6".to_string(),
            name: "KTM Duke 200".to_string(),
            vehicle_type: "bike".to_string(),
            brand: "KTM".to_string(),
            price_per_day: 999,
            rating: 4.9,
            reviews: 203,
            location: "Mumbai, Maharashtra".to_string(),
            features: vec![
                "Sporty".to_string(),
                "High Performance".to_string(),
                "ABS".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fleet_ids_are_unique() {
        let fleet = demo_fleet();
        let mut ids: Vec<&str> = fleet.iter().map(|v| v.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), fleet.len());
    }

    #[test]
    fn vehicle_serializes_with_wire_field_names() {
        let fleet = demo_fleet();
        let value = serde_json::to_value(&fleet[0]).unwrap();
        assert_eq!(value["pricePerDay"], 299);
        assert_eq!(value["type"], "scooty");
    }
}
