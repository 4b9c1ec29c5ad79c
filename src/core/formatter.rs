use crate::core::extract::{first_nested_name, parse_object, required_i64, required_str};
use crate::domain::model::{PokemonRecord, ReportVariant};
use crate::utils::error::{PokedexError, Result};

/// Builds a record from a raw upstream document.
///
/// Fields are checked in report order: `name`, `height`, `weight`, `types[0].type.name`,
/// then `abilities[0].ability.name` for the extended variant. The first failure wins.
pub fn parse_record(id: i64, json: &str, variant: ReportVariant) -> Result<PokemonRecord> {
    let doc = parse_object(json)?;

    let name = required_str(&doc, "name", "name")?;
    let height = required_i64(&doc, "height", "height")?;
    let weight = required_i64(&doc, "weight", "weight")?;
    let primary_type = first_nested_name(&doc, "types", "type")?;

    let primary_ability = match variant {
        ReportVariant::Basic => None,
        ReportVariant::Extended => Some(first_nested_name(&doc, "abilities", "ability")?),
    };

    Ok(PokemonRecord {
        id,
        name,
        height,
        weight,
        primary_type,
        primary_ability,
    })
}

/// Six-line report.
pub fn format_pokemon_data(id: i64, json: &str) -> Result<String> {
    format_report(id, json, ReportVariant::Basic)
}

pub fn format_report(id: i64, json: &str, variant: ReportVariant) -> Result<String> {
    Ok(parse_record(id, json, variant)?.render())
}

/// Entry point for callers whose payload may be absent altogether.
pub fn format_payload(id: i64, json: Option<&str>, variant: ReportVariant) -> Result<String> {
    let json = json.ok_or(PokedexError::MissingInput)?;
    format_report(id, json, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    const SINGLE_TYPE: &str =
        r#"{"name":"bulbasaur","height":7,"weight":69,"types":[{"type":{"name":"grass"}}]}"#;
    const DUAL_TYPE: &str = r#"{"name":"charizard","height":17,"weight":905,"types":[{"type":{"name":"fire"}},{"type":{"name":"flying"}}]}"#;
    const NO_TYPES: &str = r#"{"name":"ditto","height":3,"weight":40,"types":[]}"#;
    const NO_NAME: &str =
        r#"{"height":4,"weight":60,"types":[{"type":{"name":"electric"}}]}"#;
    const MALFORMED: &str = r#"{"name":"pikachu", "height":4"#;
    const WITH_ABILITIES: &str = r#"{"name":"pikachu","height":4,"weight":60,"types":[{"type":{"name":"electric"}}],"abilities":[{"ability":{"name":"static"},"is_hidden":false},{"ability":{"name":"lightning-rod"},"is_hidden":true}]}"#;

    #[test]
    fn test_format_single_type() {
        let actual = format_pokemon_data(1, SINGLE_TYPE).unwrap();
        assert_eq!(
            actual,
            "=== POKÉMON DO DIA ===\nID: 1\nNome: bulbasaur\nTipo: grass\nAltura: 7\nPeso: 69"
        );
    }

    #[test]
    fn test_format_dual_type_uses_first() {
        let actual = format_pokemon_data(6, DUAL_TYPE).unwrap();
        assert_eq!(
            actual,
            "=== POKÉMON DO DIA ===\nID: 6\nNome: charizard\nTipo: fire\nAltura: 17\nPeso: 905"
        );
        assert!(!actual.contains("flying"));
    }

    #[test]
    fn test_format_various_entities() {
        let cases = [
            (
                25,
                r#"{"name":"pikachu","height":4,"weight":60,"types":[{"type":{"name":"electric","url":"https://pokeapi.co/api/v2/type/13/"}}]}"#,
                "=== POKÉMON DO DIA ===\nID: 25\nNome: pikachu\nTipo: electric\nAltura: 4\nPeso: 60",
            ),
            (
                321,
                r#"{"name":"wailord","height":145,"weight":3980,"types":[{"type":{"name":"water"}}]}"#,
                "=== POKÉMON DO DIA ===\nID: 321\nNome: wailord\nTipo: water\nAltura: 145\nPeso: 3980",
            ),
            (
                869,
                r#"{"name":"alcremie-rainbow-swirl","height":3,"weight":5,"types":[{"type":{"name":"fairy"}}]}"#,
                "=== POKÉMON DO DIA ===\nID: 869\nNome: alcremie-rainbow-swirl\nTipo: fairy\nAltura: 3\nPeso: 5",
            ),
            (
                979,
                r#"{"name":"tatsugiri","height":3,"weight":80,"types":[{"type":{"name":"dragon"}},{"type":{"name":"water"}}]}"#,
                "=== POKÉMON DO DIA ===\nID: 979\nNome: tatsugiri\nTipo: dragon\nAltura: 3\nPeso: 80",
            ),
        ];

        for (id, json, expected) in cases {
            assert_eq!(format_pokemon_data(id, json).unwrap(), expected, "id {}", id);
        }
    }

    #[test]
    fn test_format_is_pure() {
        let first = format_pokemon_data(6, DUAL_TYPE).unwrap();
        let second = format_pokemon_data(6, DUAL_TYPE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extended_report() {
        let actual = format_report(25, WITH_ABILITIES, ReportVariant::Extended).unwrap();
        assert_eq!(
            actual,
            "=== POKÉMON DO DIA ===\nID: 25\nNome: pikachu\nTipo: electric\nAltura: 4\nPeso: 60\nHabilidade: static\nForça: 24"
        );
    }

    #[test]
    fn test_basic_report_ignores_abilities() {
        let record = parse_record(25, WITH_ABILITIES, ReportVariant::Basic).unwrap();
        assert_eq!(record.primary_ability, None);
        assert_eq!(format_pokemon_data(25, WITH_ABILITIES).unwrap().lines().count(), 6);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = format_pokemon_data(10, MALFORMED).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.field_path(), None);
    }

    #[test]
    fn test_absent_payload_is_distinct() {
        let err = format_payload(1, None, ReportVariant::Basic).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);

        let ok = format_payload(1, Some(SINGLE_TYPE), ReportVariant::Basic).unwrap();
        assert_eq!(ok, format_pokemon_data(1, SINGLE_TYPE).unwrap());
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            (NO_NAME, "name"),
            (
                r#"{"name":"pikachu","weight":60,"types":[{"type":{"name":"electric"}}]}"#,
                "height",
            ),
            (
                r#"{"name":"pikachu","height":4,"types":[{"type":{"name":"electric"}}]}"#,
                "weight",
            ),
            (r#"{"name":"ditto","height":3,"weight":40,"types":null}"#, "types"),
            (r#"{"name":"ditto","height":3,"weight":40}"#, "types"),
            (
                r#"{"name":"bulbasaur","height":7,"weight":69,"types":[{"type":null}]}"#,
                "types[0].type",
            ),
            (
                r#"{"name":"bulbasaur","height":7,"weight":69,"types":[{"type":{"url":"..."}}]}"#,
                "types[0].type.name",
            ),
            ("{}", "name"),
        ];

        for (json, path) in cases {
            let err = format_pokemon_data(1, json).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingField, "input {}", json);
            assert_eq!(err.field_path(), Some(path), "input {}", json);
        }
    }

    #[test]
    fn test_empty_types_is_empty_collection() {
        let err = format_pokemon_data(132, NO_TYPES).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCollection);
        assert_eq!(err.field_path(), Some("types"));
    }

    #[test]
    fn test_extended_requires_abilities() {
        let err = format_report(1, SINGLE_TYPE, ReportVariant::Extended).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field_path(), Some("abilities"));

        let empty = r#"{"name":"ditto","height":3,"weight":40,"types":[{"type":{"name":"normal"}}],"abilities":[]}"#;
        let err = format_report(132, empty, ReportVariant::Extended).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCollection);
        assert_eq!(err.field_path(), Some("abilities"));

        let nameless = r#"{"name":"ditto","height":3,"weight":40,"types":[{"type":{"name":"normal"}}],"abilities":[{"ability":{}}]}"#;
        let err = format_report(132, nameless, ReportVariant::Extended).unwrap_err();
        assert_eq!(err.field_path(), Some("abilities[0].ability.name"));
    }
}
