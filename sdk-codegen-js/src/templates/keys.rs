//! Property keys of a generated model client.

use indexmap::IndexMap;
use sirasdk_codegen::RenderError;
use sirasdk_ir::{ModelDescription, RestMethod};

/// Keys one method is reachable under: its action name, then the aliases
/// that survived.
pub(crate) struct MethodKeys<'m> {
    pub method: &'m RestMethod,
    pub action: String,
    pub aliases: Vec<&'m str>,
}

/// Assign client keys to every method of `model`.
///
/// `reserved` keys are set by the template itself. Action names must be
/// unique and must not be reserved. An alias that names another key is
/// dropped with a warning.
pub(crate) fn client_keys<'m>(
    model: &'m ModelDescription,
    reserved: &[&str],
) -> Result<Vec<MethodKeys<'m>>, RenderError> {
    let mut owners: IndexMap<String, String> = reserved
        .iter()
        .map(|key| (key.to_string(), format!("{}.{}", model.name(), key)))
        .collect();

    let mut keys = Vec::with_capacity(model.methods().len());
    for method in model.methods() {
        let action = method.action_name();
        let owner = format!("{}.{}", model.name(), action);
        if let Some(first) = owners.get(&action) {
            return Err(RenderError::IdentifierConflict {
                identifier: action,
                first: first.clone(),
                second: owner,
            });
        }
        owners.insert(action.clone(), owner);
        keys.push(MethodKeys {
            method,
            action,
            aliases: Vec::new(),
        });
    }

    for entry in &mut keys {
        let method: &'m RestMethod = entry.method;
        for alias in method.aliases() {
            if let Some(owner) = owners.get(alias) {
                tracing::warn!(
                    model = model.name(),
                    alias = %alias,
                    taken_by = %owner,
                    "Skipping alias that names another client key"
                );
                continue;
            }
            owners.insert(
                alias.clone(),
                format!("{}.{}", model.name(), entry.action),
            );
            entry.aliases.push(alias.as_str());
        }
    }

    Ok(keys)
}
