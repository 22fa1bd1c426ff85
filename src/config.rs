use crate::application::payments::PaymentMethodKind;
use crate::application::shipping_policy::ShippingPolicyKind;
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Runtime configuration, read from a JSON file.
///
/// Missing fields fall back to the defaults: economy shipping and every
/// payment method enabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FulfillmentConfig {
    pub shipping_policy: ShippingPolicyKind,
    pub payment_methods: Vec<PaymentMethodKind>,
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            shipping_policy: ShippingPolicyKind::Economy,
            payment_methods: PaymentMethodKind::ALL.to_vec(),
        }
    }
}

impl FulfillmentConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FulfillmentConfig = serde_json::from_str(r#"{"shipping_policy":"express"}"#).unwrap();
        assert_eq!(config.shipping_policy, ShippingPolicyKind::Express);
        assert_eq!(config.payment_methods, PaymentMethodKind::ALL.to_vec());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<FulfillmentConfig>(r#"{"carrier":"ups"}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"payment_methods":["SIMPLE_PAYMENT"]}}"#).unwrap();

        let config = FulfillmentConfig::from_path(file.path()).unwrap();
        assert_eq!(config.payment_methods, vec![PaymentMethodKind::SimplePayment]);
        assert_eq!(config.shipping_policy, ShippingPolicyKind::Economy);
    }
}
