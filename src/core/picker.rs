use crate::domain::ports::IdSource;
use rand::Rng;
use std::collections::VecDeque;

pub const TOTAL_POKEMONS: i64 = 1025;

/// Uniform ids from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self, max: i64) -> i64 {
        rand::thread_rng().gen_range(1..=max.max(1))
    }
}

/// Replays a fixed list, then keeps returning the last id.
#[derive(Debug, Clone)]
pub struct FixedIds {
    ids: VecDeque<i64>,
    last: i64,
}

impl FixedIds {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            last: 1,
        }
    }
}

impl IdSource for FixedIds {
    fn next_id(&mut self, _max: i64) -> i64 {
        if let Some(id) = self.ids.pop_front() {
            self.last = id;
        }
        self.last
    }
}

/// `count` ids: the explicit ones first, the rest drawn from `source`.
///
/// A drawn id never repeats an earlier one while `max` leaves room for it.
pub fn choose_ids<I: IdSource>(explicit: &[i64], count: usize, source: &mut I, max: i64) -> Vec<i64> {
    let mut ids: Vec<i64> = explicit.iter().copied().take(count).collect();

    while ids.len() < count {
        let mut id = source.next_id(max);
        let mut attempts = 0;
        while ids.contains(&id) && attempts < 32 {
            id = source.next_id(max);
            attempts += 1;
        }
        if ids.contains(&id) {
            id = (1..=max).find(|candidate| !ids.contains(candidate)).unwrap_or(id);
        }
        ids.push(id);
    }

    ids
}
