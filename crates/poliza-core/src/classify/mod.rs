use serde::{Deserialize, Serialize};
use std::fmt;

/// Insurance carriers this engine can recognize from a policy's first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsurerKey {
    Chubb,
    Hdi,
    Qualitas,
    Gnp,
}

impl fmt::Display for InsurerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsurerKey::Chubb => write!(f, "Chubb"),
            InsurerKey::Hdi => write!(f, "HDI"),
            InsurerKey::Qualitas => write!(f, "Quálitas"),
            InsurerKey::Gnp => write!(f, "GNP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKey {
    Autos,
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Autos => write!(f, "Autos"),
        }
    }
}

/// Routing decision derived from page-1 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingKey {
    pub insurer: InsurerKey,
    pub product: ProductKey,
}

/// Ordered letterhead probes; first match wins.
const INSURER_PROBES: &[(&str, InsurerKey)] = &[
    ("CHUBB", InsurerKey::Chubb),
    ("HDI SEGUROS", InsurerKey::Hdi),
    ("HDI", InsurerKey::Hdi),
    ("QUÁLITAS", InsurerKey::Qualitas),
    ("QUALITAS", InsurerKey::Qualitas),
    ("GRUPO NACIONAL PROVINCIAL", InsurerKey::Gnp),
    ("GNP SEGUROS", InsurerKey::Gnp),
];

/// Ordered product-line probes; first match wins.
const PRODUCT_PROBES: &[(&str, ProductKey)] = &[
    ("AUTOMÓVILES", ProductKey::Autos),
    ("AUTOMOVILES", ProductKey::Autos),
    ("AUTOS", ProductKey::Autos),
    ("VEHÍCULO", ProductKey::Autos),
    ("VEHICULO", ProductKey::Autos),
    ("FLOTILLA", ProductKey::Autos),
];

/// Inspect page-1 text and derive the routing key.
///
/// Returns `None` when no insurer or no product probe matches. The caller
/// treats that as the "no extractor" outcome and falls back to manual
/// entry; it is not an error inside the classifier.
pub fn classify(page1_text: &str) -> Option<RoutingKey> {
    let upper = page1_text.to_uppercase();

    let insurer = INSURER_PROBES
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, key)| *key)?;
    let product = PRODUCT_PROBES
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, key)| *key)?;

    tracing::debug!(%insurer, %product, "classified document");
    Some(RoutingKey { insurer, product })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_chubb_autos() {
        let key = classify("CHUBB Seguros México, S.A.\nPóliza de Automóviles Individual").unwrap();
        assert_eq!(key.insurer, InsurerKey::Chubb);
        assert_eq!(key.product, ProductKey::Autos);
    }

    #[test]
    fn test_classify_hdi_case_insensitive() {
        let key = classify("Hdi Seguros, S.A. de C.V.\nSeguro de Vehículo Residente").unwrap();
        assert_eq!(key.insurer, InsurerKey::Hdi);
    }

    #[test]
    fn test_classify_qualitas_without_accent() {
        let key = classify("QUALITAS COMPAÑÍA DE SEGUROS\nPÓLIZA DE AUTOS").unwrap();
        assert_eq!(key.insurer, InsurerKey::Qualitas);
    }

    #[test]
    fn test_unknown_insurer_is_none() {
        assert!(classify("ACME Seguros\nPóliza de Autos").is_none());
    }

    #[test]
    fn test_known_insurer_unknown_product_is_none() {
        assert!(classify("CHUBB Seguros México\nPóliza de Gastos Médicos Mayores").is_none());
    }
}
