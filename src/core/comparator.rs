use crate::domain::model::PokemonRecord;
use std::cmp::Ordering;

/// One-sentence strength ranking of two records.
pub fn compare(a: &PokemonRecord, b: &PokemonRecord) -> String {
    let (strength_a, strength_b) = (a.strength(), b.strength());

    match strength_a.cmp(&strength_b) {
        Ordering::Greater => stronger(a, b, strength_a, strength_b),
        Ordering::Less => stronger(b, a, strength_b, strength_a),
        Ordering::Equal => format!(
            "{} and {} are equally strong ({})",
            a.label(),
            b.label(),
            strength_a
        ),
    }
}

fn stronger(
    winner: &PokemonRecord,
    loser: &PokemonRecord,
    strength_winner: i64,
    strength_loser: i64,
) -> String {
    format!(
        "{} is stronger than {} ({} vs {})",
        winner.label(),
        loser.label(),
        strength_winner,
        strength_loser
    )
}
