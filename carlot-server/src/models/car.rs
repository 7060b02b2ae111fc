//! Car entity (`carro` table)

use serde::{Deserialize, Serialize};

use super::validation::{check_length, ValidationError};

/// Column widths of `marca`/`modelo` and `cor`.
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_COLOR_LEN: usize = 20;

/// A car offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    /// Store-assigned identifier, `0` until persisted
    #[serde(rename = "idCarro")]
    pub id: i32,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            brand: brand.into(),
            model: model.into(),
            year,
            color: color.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Body of `POST /novo/carros` and `PUT /atualizar/carros/{id}`.
///
/// Any `idCarro` in the body is ignored; the identifier comes from the
/// store on create and from the path on update.
#[derive(Debug, Clone, Deserialize)]
pub struct CarPayload {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
}

impl TryFrom<CarPayload> for Car {
    type Error = ValidationError;

    fn try_from(p: CarPayload) -> Result<Self, Self::Error> {
        check_length("marca", &p.marca, MAX_NAME_LEN)?;
        check_length("modelo", &p.modelo, MAX_NAME_LEN)?;
        check_length("cor", &p.cor, MAX_COLOR_LEN)?;
        Ok(Car::new(p.marca, p.modelo, p.ano, p.cor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_car_is_transient() {
        let car = Car::new("Toyota", "Corolla", 2022, "blue");
        assert_eq!(car.id, 0);
        assert!(!car.is_persisted());
    }

    #[test]
    fn payload_ignores_caller_id() {
        let payload: CarPayload = serde_json::from_value(json!({
            "idCarro": 99,
            "marca": "Toyota",
            "modelo": "Corolla",
            "ano": 2022,
            "cor": "blue"
        }))
        .unwrap();

        let car = Car::try_from(payload).unwrap();
        assert_eq!(car.id, 0);
        assert_eq!(car.brand, "Toyota");
        assert_eq!(car.year, 2022);
    }

    #[test]
    fn serializes_with_api_keys() {
        let mut car = Car::new("Fiat", "Uno", 1998, "red");
        car.id = 3;

        assert_eq!(
            serde_json::to_value(&car).unwrap(),
            json!({
                "idCarro": 3,
                "marca": "Fiat",
                "modelo": "Uno",
                "ano": 1998,
                "cor": "red"
            })
        );
    }

    #[test]
    fn payload_rejects_text_year() {
        let result = serde_json::from_value::<CarPayload>(json!({
            "marca": "Fiat",
            "modelo": "Uno",
            "ano": "noventa e oito",
            "cor": "red"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn payload_rejects_brand_longer_than_column() {
        let payload: CarPayload = serde_json::from_value(json!({
            "marca": "M".repeat(60),
            "modelo": "Uno",
            "ano": 1998,
            "cor": "red"
        }))
        .unwrap();

        assert_eq!(
            Car::try_from(payload).unwrap_err(),
            ValidationError::TooLong { field: "marca", max: 50 }
        );
    }
}
