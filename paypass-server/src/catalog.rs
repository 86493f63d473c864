//! Mock catalog served by the API.
//!
//! Nothing here is persisted; every call builds the same records again.

use serde::Serialize;

use crate::config::Profile;

/// Identifier of a catalog record.
///
/// Flattened into the owning record, so it serializes as `"id": 1` or as
/// `"_id": "1"` depending on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordId {
    #[serde(rename = "id")]
    Numeric(u32),
    #[serde(rename = "_id")]
    Document(String),
}

impl RecordId {
    fn for_profile(profile: Profile, n: u32) -> Self {
        match profile {
            Profile::Production => Self::Numeric(n),
            Profile::Mock => Self::Document(n.to_string()),
        }
    }
}

/// Vehicle size a package is priced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarSize {
    Small,
    Medium,
    Large,
}

/// A car-wash service tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(flatten)]
    pub id: RecordId,
    pub name: String,
    pub base_price: f64,
    pub original_price: f64,
    pub features: Vec<String>,
    pub popular: bool,
    pub washes: u32,
    pub savings: f64,
    /// Minutes
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<CarSize>,
}

/// A business listing for a washing location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WashingPlace {
    #[serde(flatten)]
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub email: String,
    pub city: String,
    pub rating: f64,
    pub customers: u32,
}

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Packages offered under the given profile.
pub fn packages(profile: Profile) -> Vec<Package> {
    let id = |n| RecordId::for_profile(profile, n);
    match profile {
        Profile::Production => vec![
            Package {
                id: id(1),
                name: "Basic Wash - Small Car".into(),
                base_price: 25.00,
                original_price: 30.00,
                features: features(&["Exterior wash", "Interior vacuum", "Window cleaning"]),
                popular: false,
                washes: 1,
                savings: 5.00,
                duration: 30,
                size: Some(CarSize::Small),
            },
            Package {
                id: id(2),
                name: "Premium Package - Small Car".into(),
                base_price: 45.00,
                original_price: 55.00,
                features: features(&[
                    "Exterior wash",
                    "Interior deep clean",
                    "Waxing",
                    "Tire shine",
                ]),
                popular: true,
                washes: 1,
                savings: 10.00,
                duration: 30,
                size: Some(CarSize::Small),
            },
        ],
        Profile::Mock => vec![
            Package {
                id: id(1),
                name: "Basic Package".into(),
                base_price: 50.0,
                original_price: 75.0,
                features: features(&["Exterior wash", "Interior cleaning"]),
                popular: false,
                washes: 1,
                savings: 25.0,
                duration: 30,
                size: None,
            },
            Package {
                id: id(2),
                name: "Premium Package".into(),
                base_price: 100.0,
                original_price: 150.0,
                features: features(&[
                    "Exterior wash",
                    "Interior cleaning",
                    "Waxing",
                    "Tire shine",
                ]),
                popular: true,
                washes: 2,
                savings: 50.0,
                duration: 30,
                size: None,
            },
        ],
    }
}

/// Washing places listed under the given profile.
pub fn washing_places(profile: Profile) -> Vec<WashingPlace> {
    let id = |n| RecordId::for_profile(profile, n);
    match profile {
        Profile::Production => vec![WashingPlace {
            id: id(1),
            name: "Clean Car Center - Downtown".into(),
            address: "123 Main Street, Downtown".into(),
            phone: "+966501234567".into(),
            hours: "8:00 AM - 10:00 PM".into(),
            email: "info@cleancar.com".into(),
            city: "Riyadh".into(),
            rating: 4.5,
            customers: 150,
        }],
        Profile::Mock => vec![
            WashingPlace {
                id: id(1),
                name: "Car Wash Station 1".into(),
                address: "123 Main St, Riyadh".into(),
                phone: "+966501234567".into(),
                hours: "8:00 AM - 8:00 PM".into(),
                email: "info@carwash1.com".into(),
                city: "Riyadh".into(),
                rating: 4.5,
                customers: 150,
            },
            WashingPlace {
                id: id(2),
                name: "Premium Car Wash".into(),
                address: "456 King Fahd Rd, Riyadh".into(),
                phone: "+966507654321".into(),
                hours: "7:00 AM - 9:00 PM".into(),
                email: "info@premiumwash.com".into(),
                city: "Riyadh".into(),
                rating: 4.8,
                customers: 200,
            },
        ],
    }
}
