//! Binding merged variables onto a record.

use super::error::LoadError;
use crate::parser::VarMap;
use crate::record::Record;

/// Bind `vars` onto `dest` field by field, in declaration order.
///
/// Fields before a failing one keep their new values.
pub(crate) fn bind<R: Record + ?Sized>(dest: &mut R, vars: &VarMap) -> Result<(), LoadError> {
    let mut bound = 0usize;
    for field in dest.fields() {
        let required = field.is_required()?;
        let Some(raw) = vars.get(field.key) else {
            if required {
                return Err(LoadError::MissingRequiredField {
                    field: field.key.to_string(),
                });
            }
            continue;
        };
        field.slot.assign(field.key, raw)?;
        bound += 1;
    }
    tracing::debug!(bound, "Bound record fields");
    Ok(())
}
