use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Category of a purchasable course seat.
///
/// Types outside the known set are kept verbatim in `Other` so they survive a
/// round trip and can still be ranked through a custom ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeatType {
    Audit,
    Honor,
    Verified,
    Professional,
    Credit,
    Other(String),
}

impl SeatType {
    pub fn as_str(&self) -> &str {
        match self {
            SeatType::Audit => "audit",
            SeatType::Honor => "honor",
            SeatType::Verified => "verified",
            SeatType::Professional => "professional",
            SeatType::Credit => "credit",
            SeatType::Other(name) => name,
        }
    }

    /// Derives the seat type from a certificate type. Seats without a
    /// recognised certificate are audit seats.
    pub fn from_certificate_type(certificate_type: Option<&str>) -> Self {
        match certificate_type {
            Some("verified") => SeatType::Verified,
            Some("credit") => SeatType::Credit,
            Some("professional") | Some("no-id-professional") => SeatType::Professional,
            Some("honor") => SeatType::Honor,
            _ => SeatType::Audit,
        }
    }
}

impl From<String> for SeatType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "audit" => SeatType::Audit,
            "honor" => SeatType::Honor,
            "verified" => SeatType::Verified,
            "professional" => SeatType::Professional,
            "credit" => SeatType::Credit,
            _ => SeatType::Other(value),
        }
    }
}

impl From<&str> for SeatType {
    fn from(value: &str) -> Self {
        SeatType::from(value.to_string())
    }
}

impl From<SeatType> for String {
    fn from(value: SeatType) -> Self {
        match value {
            SeatType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeatRecord")]
pub struct Seat {
    #[serde(rename = "type")]
    pub seat_type: SeatType,
    /// Every field other than `type`, exactly as received. Ids, certificate
    /// type, provider code and pricing all live here.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Seat {
    pub fn new(seat_type: impl Into<SeatType>) -> Self {
        Self {
            seat_type: seat_type.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_id(self, id: impl Into<Value>) -> Self {
        self.with_attribute("id", id.into())
    }

    pub fn with_credit_provider(self, provider: impl Into<String>) -> Self {
        self.with_attribute("credit_provider", Value::String(provider.into()))
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// The seat id as received, number or string.
    pub fn id(&self) -> Option<&Value> {
        self.attributes.get("id").filter(|id| !id.is_null())
    }

    pub fn certificate_type(&self) -> Option<&str> {
        self.attributes.get("certificate_type").and_then(Value::as_str)
    }

    pub fn credit_provider(&self) -> Option<&str> {
        self.attributes.get("credit_provider").and_then(Value::as_str)
    }

    pub fn set_credit_provider(&mut self, provider: impl Into<String>) {
        self.attributes
            .insert("credit_provider".to_string(), Value::String(provider.into()));
    }
}

// Wire shape of a seat: `type` may be absent when only `certificate_type` is
// known.
#[derive(Deserialize)]
struct SeatRecord {
    #[serde(rename = "type", default)]
    seat_type: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<SeatRecord> for Seat {
    fn from(record: SeatRecord) -> Self {
        let seat_type = match record.seat_type {
            Some(name) => SeatType::from(name),
            None => SeatType::from_certificate_type(
                record
                    .attributes
                    .get("certificate_type")
                    .and_then(Value::as_str),
            ),
        };

        Self {
            seat_type,
            attributes: record.attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditProvider {
    pub id: String,
    pub display_name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl CreditProvider {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            attributes: Map::new(),
        }
    }
}

/// Seats split for display: `residual` renders as the regular seat list,
/// `filtered` holds the seats of the requested category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatPartition {
    pub residual: Vec<Seat>,
    pub filtered: Vec<Seat>,
}

impl SeatPartition {
    pub fn len(&self) -> usize {
        self.residual.len() + self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residual.is_empty() && self.filtered.is_empty()
    }

    pub fn has_filtered(&self) -> bool {
        !self.filtered.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(default)]
    pub seats: Vec<Seat>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seat_type_from_certificate_type() {
        assert_eq!(SeatType::from_certificate_type(Some("verified")), SeatType::Verified);
        assert_eq!(SeatType::from_certificate_type(Some("credit")), SeatType::Credit);
        assert_eq!(
            SeatType::from_certificate_type(Some("no-id-professional")),
            SeatType::Professional
        );
        assert_eq!(SeatType::from_certificate_type(Some("professional")), SeatType::Professional);
        assert_eq!(SeatType::from_certificate_type(Some("honor")), SeatType::Honor);
        assert_eq!(SeatType::from_certificate_type(Some("")), SeatType::Audit);
        assert_eq!(SeatType::from_certificate_type(None), SeatType::Audit);
    }

    #[test]
    fn test_unknown_seat_type_is_kept_verbatim() {
        let seat_type = SeatType::from("masters");
        assert_eq!(seat_type, SeatType::Other("masters".to_string()));
        assert_eq!(seat_type.as_str(), "masters");
        assert_eq!(String::from(seat_type), "masters");
    }

    #[test]
    fn test_seat_deserializes_with_derived_type_and_numeric_id() {
        let seat: Seat = serde_json::from_value(json!({
            "id": 42,
            "certificate_type": "no-id-professional",
            "price": "100.00"
        }))
        .unwrap();

        assert_eq!(seat.id(), Some(&json!(42)));
        assert_eq!(seat.seat_type, SeatType::Professional);
        assert_eq!(seat.certificate_type(), Some("no-id-professional"));
        assert_eq!(seat.attributes.get("price"), Some(&json!("100.00")));
    }

    #[test]
    fn test_explicit_type_wins_over_certificate_type() {
        let seat: Seat = serde_json::from_value(json!({
            "type": "credit",
            "certificate_type": "verified",
            "credit_provider": "asu"
        }))
        .unwrap();

        assert_eq!(seat.seat_type, SeatType::Credit);
        assert_eq!(seat.credit_provider(), Some("asu"));
        assert_eq!(seat.certificate_type(), Some("verified"));
    }

    #[test]
    fn test_seat_fields_pass_through_unchanged() {
        let input = json!({
            "id": 11,
            "type": "audit",
            "certificate_type": null,
            "credit_provider": null,
            "price": "0"
        });

        let seat: Seat = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(seat.id(), Some(&json!(11)));
        assert_eq!(seat.certificate_type(), None);
        assert_eq!(seat.credit_provider(), None);
        assert_eq!(serde_json::to_value(&seat).unwrap(), input);
    }

    #[test]
    fn test_null_id_reads_as_missing() {
        let seat: Seat = serde_json::from_value(json!({"type": "audit", "id": null})).unwrap();
        assert_eq!(seat.id(), None);
        assert_eq!(serde_json::to_value(&seat).unwrap()["id"], Value::Null);
    }

    #[test]
    fn test_set_credit_provider_replaces_code() {
        let mut seat = Seat::new("credit").with_credit_provider("asu");
        seat.set_credit_provider("Arizona State University");
        assert_eq!(seat.credit_provider(), Some("Arizona State University"));
    }

    #[test]
    fn test_seat_serializes_opaque_attributes_flat() {
        let seat = Seat::new("verified")
            .with_id("s1")
            .with_attribute("price", json!("49.00"));

        let value = serde_json::to_value(&seat).unwrap();
        assert_eq!(value, json!({"id": "s1", "type": "verified", "price": "49.00"}));
    }

    #[test]
    fn test_partition_counts() {
        let partition = SeatPartition {
            residual: vec![Seat::new("audit")],
            filtered: vec![],
        };
        assert_eq!(partition.len(), 1);
        assert!(!partition.is_empty());
        assert!(!partition.has_filtered());
        assert!(SeatPartition::default().is_empty());
    }
}
