use gateora_types::ids;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A proposed on-chain action or off-chain signature request.
///
/// Every field except `type` is optional. Fields whose JSON shape does not match are read as
/// absent rather than rejected, so a partially malformed intent still evaluates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIntent {
    #[serde(rename = "type", default, deserialize_with = "lenient::tx_type")]
    pub kind: TxType,

    #[serde(default, deserialize_with = "lenient::allowance", skip_serializing_if = "Option::is_none")]
    pub allowance: Option<Allowance>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub spender: Option<String>,
    /// Only an explicit `false` marks the spender as unverified.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub spender_verified: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub contract_reputation: Option<String>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub contract_age_days: Option<f64>,

    #[serde(
        rename = "valueUSD",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_usd: Option<f64>,

    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub domain_lookalike: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub known_drainer_pattern: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub upgradeable: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub admin_can_withdraw: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub admin_can_pause: Option<bool>,

    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub gas_anomaly: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub slippage: Option<Amount>,
}

impl TransactionIntent {
    pub fn new(kind: TxType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn is_unlimited_approval(&self) -> bool {
        matches!(self.allowance, Some(Allowance::Unlimited))
    }

    pub fn has_unknown_reputation(&self) -> bool {
        self.contract_reputation.as_deref() == Some("unknown")
    }
}

/// Descriptive text with empty strings treated as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Transaction kind. Unrecognized kinds are kept verbatim and take the generic branch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TxType {
    Approve,
    Swap,
    Transfer,
    Sign,
    Other(String),
}

impl Default for TxType {
    fn default() -> Self {
        TxType::Other(String::new())
    }
}

impl TxType {
    pub fn parse(s: &str) -> Self {
        match s {
            "approve" => TxType::Approve,
            "swap" => TxType::Swap,
            "transfer" => TxType::Transfer,
            "sign" => TxType::Sign,
            other => TxType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TxType::Approve => "approve",
            TxType::Swap => "swap",
            TxType::Transfer => "transfer",
            TxType::Sign => "sign",
            TxType::Other(s) => s,
        }
    }
}

impl Serialize for TxType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A literal amount as written by the caller: a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Amount {
    fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(Amount::Number(n)),
            serde_json::Value::String(s) => Some(Amount::Text(s)),
            _ => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// Approval allowance: the unlimited marker or a literal amount.
#[derive(Clone, Debug, PartialEq)]
pub enum Allowance {
    Unlimited,
    Amount(Amount),
}

impl Allowance {
    fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s)
                if s == ids::ALLOWANCE_MAX_UINT || s == ids::ALLOWANCE_UNLIMITED =>
            {
                Some(Allowance::Unlimited)
            }
            other => Amount::from_value(other).map(Allowance::Amount),
        }
    }
}

impl Serialize for Allowance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Allowance::Unlimited => serializer.serialize_str(ids::ALLOWANCE_MAX_UINT),
            Allowance::Amount(amount) => amount.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Allowance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Allowance::from_value(value)
            .ok_or_else(|| serde::de::Error::custom("allowance must be a string or a number"))
    }
}

/// Field readers that map a mismatched JSON shape to "absent".
mod lenient {
    use super::{Allowance, Amount, TxType};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn tx_type<'de, D: Deserializer<'de>>(d: D) -> Result<TxType, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => TxType::parse(&s),
            _ => TxType::default(),
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(Value::deserialize(d)?.as_bool())
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(Value::deserialize(d)?.as_f64())
    }

    pub fn amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Amount>, D::Error> {
        Ok(Amount::from_value(Value::deserialize(d)?))
    }

    pub fn allowance<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Allowance>, D::Error> {
        Ok(Allowance::from_value(Value::deserialize(d)?))
    }
}
