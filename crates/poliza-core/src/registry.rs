use crate::classify::{InsurerKey, ProductKey};
use crate::extractors::chubb_autos::ChubbAutos;
use crate::extractors::hdi_autos::HdiAutos;
use crate::extractors::Extractor;

/// Compile-time extractor table. Supporting another insurer/product pair
/// means implementing [`Extractor`] in a new module and adding one row
/// here; nothing else in the pipeline changes.
static EXTRACTORS: &[((InsurerKey, ProductKey), &'static dyn Extractor)] = &[
    ((InsurerKey::Chubb, ProductKey::Autos), &ChubbAutos),
    ((InsurerKey::Hdi, ProductKey::Autos), &HdiAutos),
];

pub fn lookup(insurer: InsurerKey, product: ProductKey) -> Option<&'static dyn Extractor> {
    EXTRACTORS
        .iter()
        .find(|((i, p), _)| *i == insurer && *p == product)
        .map(|(_, extractor)| *extractor)
}

/// Registered (insurer, product) pairs, for diagnostics and CLI listings.
pub fn supported() -> Vec<(InsurerKey, ProductKey)> {
    EXTRACTORS.iter().map(|(key, _)| *key).collect()
}
