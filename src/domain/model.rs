use serde::{Deserialize, Serialize};
use std::fmt;

pub const REPORT_HEADER: &str = "=== POKÉMON DO DIA ===";

/// Which lines a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportVariant {
    #[default]
    Basic,
    /// Adds the primary ability and the strength metric.
    Extended,
}

/// One upstream entity, parsed for a single formatting call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub primary_type: String,
    pub primary_ability: Option<String>,
}

impl PokemonRecord {
    pub fn strength(&self) -> i64 {
        strength(self.height, self.weight)
    }

    /// Short label used by the comparison sentence.
    pub fn label(&self) -> String {
        format!("{} #{}", self.name, self.id)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            REPORT_HEADER.to_string(),
            format!("ID: {}", self.id),
            format!("Nome: {}", self.name),
            format!("Tipo: {}", self.primary_type),
            format!("Altura: {}", self.height),
            format!("Peso: {}", self.weight),
        ];

        if let Some(ability) = &self.primary_ability {
            lines.push(format!("Habilidade: {}", ability));
            lines.push(format!("Força: {}", self.strength()));
        }

        lines.join("\n")
    }
}

impl fmt::Display for PokemonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// `height * weight / 10`, truncating. Saturates instead of overflowing on absurd inputs.
pub fn strength(height: i64, weight: i64) -> i64 {
    height.saturating_mul(weight) / 10
}
