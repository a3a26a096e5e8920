//! Field codec, plus the field-set helpers every container codec shares.

use snapmark_model::{ContainerKind, Field, FieldKind, FieldSet, FieldValue};

use super::DecodeContext;
use super::value::{decode_value, encode_value};
use crate::error::{CodecError, Result};
use crate::options::CodecOptions;
use crate::types::FieldDto;

/// Encode a field. `None` encodes to `None`.
pub fn encode_field(field: Option<&Field>) -> Option<FieldDto> {
    field.map(|field| FieldDto {
        field_kind_name: field.kind.as_str().to_string(),
        scope: field.scope.clone(),
        value: encode_value(&field.value),
    })
}

/// Decode a field.
///
/// Returns `Ok(None)` for a field kind this build does not know when
/// [`CodecOptions::strict_field_kinds`] is off.
pub fn decode_field(dto: FieldDto, options: &CodecOptions) -> Result<Option<Field>> {
    let kind = match dto.field_kind_name.parse::<FieldKind>() {
        Ok(kind) => kind,
        Err(_) if !options.strict_field_kinds => {
            tracing::warn!(
                field = %dto.field_kind_name,
                scope = %dto.scope,
                "Skipping unknown field kind"
            );
            return Ok(None);
        }
        Err(_) => {
            return Err(CodecError::UnknownFieldKind {
                name: dto.field_kind_name,
            });
        }
    };

    let value = decode_value(dto.value).map_err(|err| match err {
        CodecError::InvalidValue { reason, .. } => CodecError::InvalidValue {
            field: kind.as_str().to_string(),
            reason,
        },
        other => other,
    })?;

    Ok(Some(Field {
        kind,
        scope: dto.scope,
        value,
    }))
}

/// Encode a container's complete field set, in field kind order.
pub(crate) fn encode_fields(fields: &FieldSet) -> Vec<FieldDto> {
    fields
        .iter()
        .filter_map(|field| encode_field(Some(field)))
        .collect()
}

/// Decode the persisted fields of one container, without backfilling.
pub(crate) fn decode_fields(dtos: Vec<FieldDto>, ctx: &DecodeContext<'_>) -> Result<FieldSet> {
    let mut fields = FieldSet::new();
    for dto in dtos {
        if let Some(field) = decode_field(dto, ctx.options)? {
            fields.insert(field);
        }
    }
    Ok(fields)
}

/// Add every current default of `kind` that `fields` lacks.
///
/// Missing fields are expected when the document predates them; a field the
/// source version should already have carried is reported as a warning but
/// still backfilled.
pub(crate) fn backfill_defaults(
    kind: ContainerKind,
    fields: &mut FieldSet,
    ctx: &DecodeContext<'_>,
) {
    let source_table = ctx.registry.table(ctx.source_version);

    for default in ctx.registry.current_defaults(kind) {
        if fields.contains(default.kind) {
            continue;
        }

        let expected = source_table.is_some_and(|table| table.declares(kind, default.kind));
        if expected {
            tracing::warn!(
                container = %kind,
                field = %default.kind,
                version = ctx.source_version,
                "Field missing from document, using current default"
            );
        } else {
            tracing::debug!(
                container = %kind,
                field = %default.kind,
                version = ctx.source_version,
                "Backfilled field added after document version"
            );
        }

        fields.insert(default.clone());
    }
}

/// Store a value carried in a container's own payload as a field scoped to
/// `kind`. Callers only do this when the persisted fields lacked it.
pub(crate) fn restore_payload_field(
    fields: &mut FieldSet,
    kind: ContainerKind,
    field: FieldKind,
    value: impl Into<FieldValue>,
) {
    tracing::debug!(container = %kind, field = %field, "Restored field from container payload");
    fields.set(field, kind.scope(), value);
}

/// Decode persisted fields and backfill the kind's current defaults.
pub(crate) fn decode_field_set(
    kind: ContainerKind,
    dtos: Vec<FieldDto>,
    ctx: &DecodeContext<'_>,
) -> Result<FieldSet> {
    let mut fields = decode_fields(dtos, ctx)?;
    backfill_defaults(kind, &mut fields, ctx);
    Ok(fields)
}
