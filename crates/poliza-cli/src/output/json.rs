use poliza_core::error::PolizaError;
use poliza_core::model::PolicyExtractionResult;

pub fn print(result: &PolicyExtractionResult) -> Result<(), PolizaError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
