use crate::almagest_errors::AlmagestError;
use crate::constants::Degree;

/// A ground-based observing site.
///
/// Longitude is counted in degrees east of Greenwich, latitude in degrees
/// north of the equator. Longitude is used as given; callers should normalize
/// it consistently to (-180, 180] or [0, 360).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawObserver")]
pub struct Observer {
    pub longitude: Degree,
    pub latitude: Degree,
    pub name: Option<String>,
}

/// Unvalidated field mirror of [`Observer`], the deserialization gateway.
/// Conversion runs the latitude check of [`Observer::new`].
#[derive(serde::Deserialize)]
struct RawObserver {
    longitude: Degree,
    latitude: Degree,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<RawObserver> for Observer {
    type Error = AlmagestError;

    fn try_from(raw: RawObserver) -> Result<Self, Self::Error> {
        Observer::new(raw.longitude, raw.latitude, raw.name)
    }
}

impl Observer {
    /// Build an observer, rejecting latitudes outside [-90, 90].
    pub fn new(
        longitude: Degree,
        latitude: Degree,
        name: Option<String>,
    ) -> Result<Observer, AlmagestError> {
        // NaN fails the range test as well.
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AlmagestError::InvalidLatitude(latitude));
        }
        Ok(Observer {
            longitude,
            latitude,
            name,
        })
    }
}
