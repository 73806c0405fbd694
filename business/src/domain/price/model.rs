use serde::{Deserialize, Serialize};

/// Pricing figures for one product as returned by the verification service.
///
/// Nullable fields mean "not applicable" and are never treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    #[serde(rename = "regularprice")]
    pub regular_price: f64,
    /// Origin tax rate, as a percentage.
    #[serde(rename = "origintax")]
    pub origin_tax: f64,
    pub commercial_price: f64,
    pub functional_price: Option<f64>,
    pub final_full_functional_price: f64,
    pub iva_functional_amount: Option<f64>,
    pub final_full_price_commercial: Option<f64>,
    pub final_full_price_promotion_commercial: f64,
    pub final_full_price_promotion_functional: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_record_with_null_fields() {
        let body = json!({
            "regularprice": 10.0,
            "origintax": 16,
            "commercialPrice": 9.5,
            "functionalPrice": null,
            "finalFullFunctionalPrice": 9.5,
            "ivaFunctionalAmount": null,
            "finalFullPriceCommercial": null,
            "finalFullPricePromotionCommercial": 9.0,
            "finalFullPricePromotionFunctional": 8.8
        });

        let record: PriceRecord = serde_json::from_value(body).unwrap();

        assert_eq!(record.regular_price, 10.0);
        assert_eq!(record.origin_tax, 16.0);
        assert_eq!(record.functional_price, None);
        assert_eq!(record.iva_functional_amount, None);
        assert_eq!(record.final_full_price_commercial, None);
        assert_eq!(record.final_full_price_promotion_functional, 8.8);
    }

    #[test]
    fn should_reject_null_in_required_field() {
        let body = json!({
            "regularprice": null,
            "origintax": 16,
            "commercialPrice": 9.5,
            "functionalPrice": 9.0,
            "finalFullFunctionalPrice": 9.5,
            "ivaFunctionalAmount": 1.2,
            "finalFullPriceCommercial": 9.9,
            "finalFullPricePromotionCommercial": 9.0,
            "finalFullPricePromotionFunctional": 8.8
        });

        assert!(serde_json::from_value::<PriceRecord>(body).is_err());
    }

    #[test]
    fn should_reject_missing_required_field() {
        let body = json!({
            "regularprice": 10.0,
            "origintax": 16
        });

        assert!(serde_json::from_value::<PriceRecord>(body).is_err());
    }

    #[test]
    fn should_reject_text_in_numeric_field() {
        let body = json!({
            "regularprice": "10.00",
            "origintax": 16,
            "commercialPrice": 9.5,
            "functionalPrice": null,
            "finalFullFunctionalPrice": 9.5,
            "ivaFunctionalAmount": null,
            "finalFullPriceCommercial": null,
            "finalFullPricePromotionCommercial": 9.0,
            "finalFullPricePromotionFunctional": 8.8
        });

        assert!(serde_json::from_value::<PriceRecord>(body).is_err());
    }
}
