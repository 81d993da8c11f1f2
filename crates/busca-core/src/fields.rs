//! Static field table for the advanced filters dialog.
//!
//! Field ids are backend (Solr) field names. The declaration order of each
//! table is the order clauses are emitted in, so it must stay stable.

use serde::{Deserialize, Serialize};

/// How a field is filled in and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text with a per-field match-mode toggle.
    Text,
    /// A `from`/`to` pair of calendar dates.
    DateRange,
    /// A `from`/`to` pair of numbers.
    NumericRange,
}

/// One filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Backend field id.
    pub id: String,
    /// Field kind.
    pub kind: FieldKind,
    /// Label shown to the user and used in error messages.
    pub label: String,
}

impl FieldSpec {
    /// Creates a new field spec.
    pub fn new<I, L>(id: I, kind: FieldKind, label: L) -> Self
    where
        I: Into<String>,
        L: Into<String>,
    {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }

    /// Creates a text field spec.
    pub fn text<I: Into<String>, L: Into<String>>(id: I, label: L) -> Self {
        Self::new(id, FieldKind::Text, label)
    }

    /// Creates a date-range field spec.
    pub fn date_range<I: Into<String>, L: Into<String>>(id: I, label: L) -> Self {
        Self::new(id, FieldKind::DateRange, label)
    }

    /// Creates a numeric-range field spec.
    pub fn numeric_range<I: Into<String>, L: Into<String>>(id: I, label: L) -> Self {
        Self::new(id, FieldKind::NumericRange, label)
    }
}

/// Field id of the process value range.
pub const VALUE_FIELD_ID: &str = "valor_processo_d";

/// Fields whose whitespace becomes a wildcard when escaped.
pub const DEFAULT_SPECIAL_FIELDS: &[&str] = &["nome_unidade_atual_s", "unidade_origem_s"];

const DATE_FIELDS: &[(&str, &str)] = &[
    ("dt_protocolo_tdt", "Data do Protocolo do Processo"),
    ("dt_juntada_tdt", "Data da Juntada"),
];

const EXTENDED_DATE_FIELDS: &[(&str, &str)] = &[
    ("dt_registro_tdt", "Data do Registro"),
    ("dt_anexacao_tdt", "Data da Anexação"),
];

const TEXT_FIELDS: &[(&str, &str)] = &[
    ("grupo_processo_s", "Grupo do Processo"),
    ("tipo_processo_s", "Tipo do Processo"),
    ("subtipo_processo_s", "Subtipo do Processo"),
    ("processo_s", "Número do Processo"),
    ("situacao_s", "Situação"),
    ("assuntos_objetos_s", "Assuntos/Objetos"),
    ("tipo_documento_s", "Tipo do Documento"),
    ("titulo_s", "Título"),
    ("numero_doc_principal_exp_s", "Número do Documento Principal"),
    ("tributo_act_s", "Tributo"),
    ("unidade_origem_s", "Unidade de Origem"),
    ("equipe_origem_s", "Equipe de Origem"),
    ("nome_unidade_atual_s", "Unidade Atual"),
    ("nome_equipe_atual_s", "Equipe Atual"),
    ("ni_contribuinte_s", "NI do Contribuinte"),
    ("nome_contribuinte_s", "Nome do Contribuinte"),
    ("cpf_responsavel_s", "CPF do Responsável"),
    ("nome_usuario_juntada_doc_s", "Usuário da Juntada"),
    ("nome_relator_drj_s", "Relator DRJ"),
    ("aleg_recurso_contrib_txt", "Alegações do Recurso"),
    ("result_questdrj_nivel1_s", "Resultado DRJ Nível 1"),
    ("result_questdrj_nivel2_s", "Resultado DRJ Nível 2"),
];

/// The date fields of the current dialog layout.
pub fn default_date_fields() -> Vec<FieldSpec> {
    DATE_FIELDS
        .iter()
        .map(|(id, label)| FieldSpec::date_range(*id, *label))
        .collect()
}

/// The four date fields of the extended dialog layout.
pub fn extended_date_fields() -> Vec<FieldSpec> {
    DATE_FIELDS
        .iter()
        .chain(EXTENDED_DATE_FIELDS)
        .map(|(id, label)| FieldSpec::date_range(*id, *label))
        .collect()
}

/// The process value range field.
pub fn default_numeric_field() -> FieldSpec {
    FieldSpec::numeric_range(VALUE_FIELD_ID, "Valor do Processo")
}

/// The text fields, in declaration order.
pub fn default_text_fields() -> Vec<FieldSpec> {
    TEXT_FIELDS
        .iter()
        .map(|(id, label)| FieldSpec::text(*id, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_date_fields_order() {
        let ids: Vec<String> = default_date_fields().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, ["dt_protocolo_tdt", "dt_juntada_tdt"]);
    }

    #[test]
    fn test_extended_date_fields_keep_current_first() {
        let fields = extended_date_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].id, "dt_protocolo_tdt");
        assert_eq!(fields[3].id, "dt_anexacao_tdt");
        assert!(fields.iter().all(|f| f.kind == FieldKind::DateRange));
    }

    #[test]
    fn test_default_text_fields() {
        let fields = default_text_fields();
        assert_eq!(fields.len(), 22);
        assert_eq!(fields[0].id, "grupo_processo_s");
        assert_eq!(fields[21].id, "result_questdrj_nivel2_s");
        assert!(fields.iter().all(|f| f.kind == FieldKind::Text));
    }

    #[test]
    fn test_special_fields_are_text_fields() {
        let fields = default_text_fields();
        for special in DEFAULT_SPECIAL_FIELDS {
            assert!(fields.iter().any(|f| f.id == *special));
        }
    }

    #[test]
    fn test_numeric_field() {
        let field = default_numeric_field();
        assert_eq!(field.id, VALUE_FIELD_ID);
        assert_eq!(field.kind, FieldKind::NumericRange);
    }
}
