use crate::logging::codes;

/// Check that every code the pipeline can raise carries registry metadata
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    crate::lexical::validate_lexical_codes()?;

    let stage_codes = [
        codes::syntax::SYMBOL_NOT_FOUND,
        codes::syntax::SYMBOL_NOT_MATCHED,
        codes::syntax::SYMBOL_NOT_DEFINED,
        codes::syntax::MALFORMED_VARIABLE_DECLARATION,
        codes::symbols::UNKNOWN_PROCEDURE,
        codes::symbols::PROCEDURE_ALREADY_CLOSED,
        codes::symbols::SLOT_OUT_OF_RANGE,
        codes::handoff::MALFORMED_RECORD,
        codes::handoff::UNKNOWN_CATEGORY,
        codes::handoff::HANDOFF_IO_ERROR,
        codes::output::REPORT_WRITE_FAILED,
        codes::output::CONFIGURATION_INVALID,
    ];

    for code in &stage_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "codes_validated" => stage_codes.len() + 3
    );

    Ok(())
}
