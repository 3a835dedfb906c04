use crate::domain::model::SeatType;
use std::collections::HashMap;

/// Display priority per seat type. Lower priorities render first; types
/// without an entry render after every ranked type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRanking {
    priorities: HashMap<String, u32>,
}

impl SeatRanking {
    pub fn from_priorities<K, I>(priorities: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u32)>,
    {
        Self {
            priorities: priorities
                .into_iter()
                .map(|(seat_type, priority)| (seat_type.into(), priority))
                .collect(),
        }
    }

    /// This ranking with the given entries replaced or added.
    pub fn with_overrides<K, I>(mut self, overrides: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u32)>,
    {
        for (seat_type, priority) in overrides {
            self.priorities.insert(seat_type.into(), priority);
        }
        self
    }

    pub fn priority(&self, seat_type: &SeatType) -> Option<u32> {
        self.priorities.get(seat_type.as_str()).copied()
    }

    pub(crate) fn sort_key(&self, seat_type: &SeatType) -> (bool, u32) {
        match self.priority(seat_type) {
            Some(priority) => (false, priority),
            None => (true, 0),
        }
    }

    /// Orders bare seat types with the same rules used for seats.
    pub fn order_seat_types(&self, seat_types: &[SeatType]) -> Vec<SeatType> {
        let mut ordered = seat_types.to_vec();
        ordered.sort_by_key(|seat_type| self.sort_key(seat_type));
        ordered
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for SeatRanking {
    fn default() -> Self {
        Self::from_priorities([
            ("audit", 0),
            ("honor", 1),
            ("verified", 2),
            ("professional", 3),
            ("credit", 4),
        ])
    }
}
