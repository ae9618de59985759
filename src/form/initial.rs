use crate::form::descriptor::{FieldValue, FormSchema, ValueMap};

/// Build the form's starting value map.
///
/// One entry per unique field name. When names repeat, the first
/// descriptor wins and later ones are ignored. Fields without a value
/// start from their type's empty value.
pub fn derive_initial_values(schema: &FormSchema) -> ValueMap {
    let mut values = ValueMap::new();
    for field in schema {
        if values.contains_key(&field.name) {
            continue;
        }
        let value = field
            .value
            .clone()
            .unwrap_or_else(|| FieldValue::empty_for(&field.kind));
        values.insert(field.name.clone(), value);
    }
    values
}
