use serde::{Deserialize, Serialize};

use super::departure_time::{DepartureTime, TimeFormatError};

/// One entry of the route list as it is stored in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    #[serde(default)]
    pub destination: String,
    /// Serialized as `null` when the route has no number.
    #[serde(default)]
    pub number: Option<i64>,
    /// Kept exactly as entered, e.g. `9:05` is not rewritten to `09:05`.
    #[serde(default)]
    pub time: String,
}

impl Route {
    pub fn departure(&self) -> Result<DepartureTime, TimeFormatError> {
        self.time.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_number_is_written_as_null() {
        let route = Route {
            destination: "Paris".to_string(),
            number: None,
            time: "09:00".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            json!({"destination": "Paris", "number": null, "time": "09:00"})
        );
    }

    #[test]
    fn absent_fields_read_as_empty() {
        let route: Route = serde_json::from_value(json!({"number": 7})).unwrap();

        assert_eq!(route.destination, "");
        assert_eq!(route.number, Some(7));
        assert_eq!(route.time, "");
        assert!(route.departure().is_err());
    }

    #[test]
    fn keeps_field_order() {
        let route = Route {
            destination: "Lyon".to_string(),
            number: Some(3),
            time: "7:05".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&route).unwrap(),
            r#"{"destination":"Lyon","number":3,"time":"7:05"}"#
        );
        assert_eq!(route.departure().unwrap().to_string(), "07:05");
    }
}
