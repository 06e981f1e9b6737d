use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal person type, encoded by RFC length (13 = individual, 12 = company).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    #[default]
    Physical,
    Moral,
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonType::Physical => write!(f, "Física"),
            PersonType::Moral => write!(f, "Moral"),
        }
    }
}

/// Printed name split into parts. Mexican policies print surnames first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameParts {
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub given_names: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub colony: String,
    pub municipality: String,
    pub state: String,
    pub postal_code: String,
}

/// The policyholder. `name_parts` is populated for physical persons,
/// `company_name` for moral persons; the other stays empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Insured {
    pub person_type: PersonType,
    pub name_parts: NameParts,
    pub company_name: String,
    pub tax_id: String,
    pub address: Address,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyIdentifiers {
    pub number: String,
    pub endorsement: String,
    /// Line-item ("inciso") number within the policy.
    pub item_number: String,
    pub plan: String,
}

/// Policy validity window, ISO dates (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidityPeriod {
    pub start_date: String,
    pub end_date: String,
}

/// Premium breakdown from the billing notice. All amounts are fixed-point
/// decimal strings with two fraction digits; an empty string means the
/// field could not be extracted (a matching alert is always recorded).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    pub net_premium: String,
    pub other_discounts: String,
    pub installment_surcharge: String,
    pub issuance_fee: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    #[default]
    Annual,
    Installment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub kind: PaymentKind,
    /// Printed frequency label, e.g. "Trimestral".
    pub frequency: String,
    pub first_installment_amount: String,
    pub subsequent_installment_amount: String,
    pub due_date: String,
    pub grace_period_days: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub vin: String,
    pub engine_number: String,
    pub plates: String,
    pub color: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub service: String,
}

/// Sum-insured cell of a coverage row: either an amount or one of the
/// literals insurers print instead of a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SumInsured {
    Amount(String),
    /// "AMPARADA"
    Covered,
    /// "VALOR COMERCIAL"
    CommercialValue,
    /// "VALOR FACTURA"
    InvoiceValue,
}

impl fmt::Display for SumInsured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumInsured::Amount(v) => write!(f, "{v}"),
            SumInsured::Covered => write!(f, "AMPARADA"),
            SumInsured::CommercialValue => write!(f, "VALOR COMERCIAL"),
            SumInsured::InvoiceValue => write!(f, "VALOR FACTURA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageKind {
    Flat,
    PerEvent,
    Included,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coverage {
    pub name: String,
    pub sum_insured: SumInsured,
    pub deductible: String,
    pub premium: String,
    pub kind: CoverageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Overdue,
}

/// One receipt of the payment schedule. `status` is derived against the
/// extraction date, never stored in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub installment_number: u32,
    pub due_date: String,
    pub amount: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertReason {
    NotFound,
    Malformed,
    LowConfidence,
}

/// A non-fatal extraction problem tied to a single field. Extractors never
/// abort on a missing or malformed value; they record one of these instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionAlert {
    pub field: String,
    pub reason: AlertReason,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl ExtractionAlert {
    pub fn not_found(field: &str) -> Self {
        ExtractionAlert {
            field: field.to_string(),
            reason: AlertReason::NotFound,
            detail: String::new(),
        }
    }

    pub fn malformed(field: &str, raw: &str) -> Self {
        ExtractionAlert {
            field: field.to_string(),
            reason: AlertReason::Malformed,
            detail: raw.to_string(),
        }
    }

    pub fn low_confidence(field: &str, detail: &str) -> Self {
        ExtractionAlert {
            field: field.to_string(),
            reason: AlertReason::LowConfidence,
            detail: detail.to_string(),
        }
    }
}

/// The structured record produced by one extraction call. Created fresh per
/// document and never mutated after it is returned to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyExtractionResult {
    /// Name of the extractor that produced this record, e.g. "chubb-autos".
    pub extractor: String,
    pub insured: Insured,
    pub identifiers: PolicyIdentifiers,
    pub validity: ValidityPeriod,
    pub financials: FinancialBreakdown,
    pub payment_plan: PaymentPlan,
    /// Present only for auto products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
    pub coverages: Vec<Coverage>,
    pub schedule: Vec<ScheduledPayment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<ExtractionAlert>,
}
