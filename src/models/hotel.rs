use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub hotel_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with all of its rooms, as served by `GET /hotels/{hotelId}`.
///
/// The upstream wire shape flattens the hotel fields and nests the rooms under
/// a capitalized `Rooms` key.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hotel() -> Hotel {
        Hotel {
            id: 1,
            name: "Grand Plaza".to_string(),
            image: "https://example.com/plaza.jpg".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn hotel_serializes_camel_case_with_rfc3339_timestamps() {
        let json = serde_json::to_value(hotel()).unwrap();
        assert_eq!(json["name"], "Grand Plaza");
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn hotel_with_rooms_flattens_hotel_and_capitalizes_rooms_key() {
        let doc = HotelWithRooms {
            hotel: hotel(),
            rooms: vec![Room {
                id: 7,
                name: "101".to_string(),
                capacity: 3,
                hotel_id: 1,
                created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
                updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            }],
        };
        let json = serde_json::to_value(doc).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["Rooms"][0]["hotelId"], 1);
        assert_eq!(json["Rooms"][0]["capacity"], 3);
    }
}
