//! Shipment requests.

use serde::Deserialize;

use crate::error::{FreightError, Result};

/// Heaviest shipment a request may carry, in kg.
pub const MAX_SHIPMENT_WEIGHT: f64 = 1.0e9;

/// Weight bracket of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    /// Below 10 000 kg.
    Light,
    /// 10 000 kg up to and including 50 000 kg.
    Medium,
    /// Above 50 000 kg.
    Heavy,
}

/// A request to move `weight` kg from `origin` to `destination`.
///
/// Two requests are equal when their ids are equal.
///
/// # Examples
///
/// ```
/// use u_freight::models::{ShipmentRequest, WeightClass};
///
/// let req = ShipmentRequest::new("CARGA_001", 20_000.0, "Buenos_Aires", "Rosario").unwrap();
/// assert_eq!(req.weight_class(), WeightClass::Medium);
///
/// assert!(ShipmentRequest::new("bad", 0.0, "A", "B").is_err());
/// assert!(ShipmentRequest::new("loop", 10.0, "A", "A").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ShipmentRequest {
    id: String,
    weight: f64,
    origin: String,
    destination: String,
}

impl ShipmentRequest {
    /// Creates a validated request.
    ///
    /// Fails if the weight is not a positive finite number up to
    /// [`MAX_SHIPMENT_WEIGHT`], a name is blank, or origin and destination
    /// coincide.
    pub fn new(
        id: impl Into<String>,
        weight: f64,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let origin = origin.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        if !weight.is_finite() || weight <= 0.0 {
            return Err(FreightError::validation(
                "request",
                format!("{id}: weight must be positive, got {weight}"),
            ));
        }
        if weight > MAX_SHIPMENT_WEIGHT {
            return Err(FreightError::validation(
                "request",
                format!("{id}: weight {weight} kg exceeds {MAX_SHIPMENT_WEIGHT} kg"),
            ));
        }
        if origin.is_empty() || destination.is_empty() {
            return Err(FreightError::validation(
                "request",
                format!("{id}: origin and destination must be named"),
            ));
        }
        if origin == destination {
            return Err(FreightError::validation(
                "request",
                format!("{id}: origin and destination are both '{origin}'"),
            ));
        }

        Ok(Self {
            id,
            weight,
            origin,
            destination,
        })
    }

    /// Request identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shipment weight in kg.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Origin point name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination point name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Weight bracket.
    pub fn weight_class(&self) -> WeightClass {
        if self.weight < 10_000.0 {
            WeightClass::Light
        } else if self.weight <= 50_000.0 {
            WeightClass::Medium
        } else {
            WeightClass::Heavy
        }
    }
}

impl PartialEq for ShipmentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShipmentRequest {}

/// A request as delivered by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestRecord {
    /// Request identifier.
    #[serde(alias = "id_carga")]
    pub id: String,
    /// Weight in kg.
    #[serde(alias = "peso_kg")]
    pub weight_kg: f64,
    /// Origin point name.
    #[serde(alias = "origen")]
    pub origin: String,
    /// Destination point name.
    #[serde(alias = "destino")]
    pub destination: String,
}

impl TryFrom<RequestRecord> for ShipmentRequest {
    type Error = FreightError;

    fn try_from(record: RequestRecord) -> Result<Self> {
        Self::new(
            record.id,
            record.weight_kg,
            record.origin,
            record.destination,
        )
    }
}
