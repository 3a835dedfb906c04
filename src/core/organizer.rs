use crate::core::ranking::SeatRanking;
use crate::domain::model::{Seat, SeatPartition};
use crate::domain::ports::{CourseModel, CreditProviderLookup};

pub const CREDIT_CATEGORY: &str = "credit";

/// Returns the seats in display order. The sort is stable, so seats sharing a
/// type keep their input order.
pub fn order_seats_for_display(seats: &[Seat], ranking: &SeatRanking) -> Vec<Seat> {
    let mut ordered = seats.to_vec();
    ordered.sort_by_key(|seat| ranking.sort_key(&seat.seat_type));
    ordered
}

/// Splits seats into those of `category` (`filtered`) and everything else
/// (`residual`), keeping input order in both buckets.
pub fn filter_seats(seats: &[Seat], category: &str) -> SeatPartition {
    let (filtered, residual): (Vec<Seat>, Vec<Seat>) = seats
        .iter()
        .cloned()
        .partition(|seat| seat.seat_type.as_str() == category);

    SeatPartition { residual, filtered }
}

/// Returns copies of `seats` whose `credit_provider` code is replaced by the
/// provider's display name. Codes the registry doesn't know are left as-is.
pub fn resolve_credit_provider_names<L>(seats: &[Seat], registry: &L) -> Vec<Seat>
where
    L: CreditProviderLookup + ?Sized,
{
    seats
        .iter()
        .map(|seat| {
            let mut resolved = seat.clone();
            if let Some(code) = seat.credit_provider() {
                match registry.get(code) {
                    Some(provider) => {
                        resolved.set_credit_provider(provider.display_name.clone());
                    }
                    None => {
                        tracing::debug!("Credit provider '{}' not found, keeping raw code", code);
                    }
                }
            }
            resolved
        })
        .collect()
}

/// Turns a course's seats into a display-ready partition.
#[derive(Debug, Clone)]
pub struct SeatOrganizer {
    ranking: SeatRanking,
    category: String,
}

impl SeatOrganizer {
    pub fn new(ranking: SeatRanking) -> Self {
        Self {
            ranking,
            category: CREDIT_CATEGORY.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn ranking(&self) -> &SeatRanking {
        &self.ranking
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn order_seats_for_display(&self, seats: &[Seat]) -> Vec<Seat> {
        order_seats_for_display(seats, &self.ranking)
    }

    pub fn filter_seats(&self, seats: &[Seat]) -> SeatPartition {
        filter_seats(seats, &self.category)
    }

    /// Orders, partitions and resolves provider names in one pass. Always
    /// starts from the course's canonical seats, so calling it again after a
    /// change never resolves a name twice.
    pub fn organize<C, L>(&self, course: &C, registry: &L) -> SeatPartition
    where
        C: CourseModel + ?Sized,
        L: CreditProviderLookup + ?Sized,
    {
        let ordered = self.order_seats_for_display(course.seats());
        let SeatPartition { residual, filtered } = self.filter_seats(&ordered);
        let filtered = resolve_credit_provider_names(&filtered, registry);

        tracing::debug!(
            "Organized {} seats: {} residual, {} '{}'",
            ordered.len(),
            residual.len(),
            filtered.len(),
            self.category
        );

        SeatPartition { residual, filtered }
    }
}

impl Default for SeatOrganizer {
    fn default() -> Self {
        Self::new(SeatRanking::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::ProviderRegistry;
    use crate::domain::model::{CreditProvider, SeatType};
    use serde_json::Value;

    fn ids(seats: &[Seat]) -> Vec<&str> {
        seats.iter().filter_map(|seat| seat.id().and_then(Value::as_str)).collect()
    }

    #[test]
    fn test_order_uses_type_priority() {
        let seats = vec![
            Seat::new("credit").with_id("c"),
            Seat::new("verified").with_id("v"),
            Seat::new("professional").with_id("p"),
            Seat::new("audit").with_id("a"),
            Seat::new("honor").with_id("h"),
        ];

        let ordered = order_seats_for_display(&seats, &SeatRanking::default());
        assert_eq!(ids(&ordered), vec!["a", "h", "v", "p", "c"]);
    }

    #[test]
    fn test_order_does_not_touch_input() {
        let seats = vec![Seat::new("verified").with_id("v"), Seat::new("audit").with_id("a")];
        let before = seats.clone();
        let _ = order_seats_for_display(&seats, &SeatRanking::default());
        assert_eq!(seats, before);
    }

    #[test]
    fn test_unknown_types_sort_last_in_input_order() {
        let seats = vec![
            Seat::new("masters").with_id("m1"),
            Seat::new("credit").with_id("c"),
            Seat::new("bootcamp").with_id("b"),
            Seat::new("audit").with_id("a"),
        ];

        let ordered = order_seats_for_display(&seats, &SeatRanking::default());
        assert_eq!(ids(&ordered), vec!["a", "c", "m1", "b"]);
    }

    #[test]
    fn test_custom_ranking_changes_order() {
        let ranking = SeatRanking::from_priorities([("credit", 0), ("verified", 1)]);
        let seats = vec![
            Seat::new("audit").with_id("a"),
            Seat::new("verified").with_id("v"),
            Seat::new("credit").with_id("c"),
        ];

        let ordered = order_seats_for_display(&seats, &ranking);
        assert_eq!(ids(&ordered), vec!["c", "v", "a"]);
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let seats = vec![
            Seat::new("audit").with_id("a"),
            Seat::new("credit").with_id("c1"),
            Seat::new("verified").with_id("v"),
            Seat::new("credit").with_id("c2"),
        ];

        let partition = filter_seats(&seats, CREDIT_CATEGORY);
        assert_eq!(ids(&partition.residual), vec!["a", "v"]);
        assert_eq!(ids(&partition.filtered), vec!["c1", "c2"]);
    }

    #[test]
    fn test_filter_matches_unknown_category_by_name() {
        let seats = vec![Seat::new("masters").with_id("m"), Seat::new("audit").with_id("a")];

        let partition = filter_seats(&seats, "masters");
        assert_eq!(ids(&partition.filtered), vec!["m"]);
        assert_eq!(ids(&partition.residual), vec!["a"]);
    }

    #[test]
    fn test_resolve_replaces_known_codes_only() {
        let registry = ProviderRegistry::from_providers(vec![CreditProvider::new(
            "asu",
            "Arizona State University",
        )]);
        let seats = vec![
            Seat::new("credit").with_id("known").with_credit_provider("asu"),
            Seat::new("credit").with_id("unknown").with_credit_provider("mit"),
            Seat::new("credit").with_id("none"),
        ];

        let resolved = resolve_credit_provider_names(&seats, &registry);
        assert_eq!(resolved[0].credit_provider(), Some("Arizona State University"));
        assert_eq!(resolved[1].credit_provider(), Some("mit"));
        assert_eq!(resolved[2].credit_provider(), None);
        assert_eq!(seats[0].credit_provider(), Some("asu"));
    }

    #[test]
    fn test_organize_is_idempotent() {
        let registry =
            ProviderRegistry::from_providers(vec![CreditProvider::new("p1", "State University")]);
        let seats = vec![
            Seat::new("credit").with_credit_provider("p1"),
            Seat::new("verified"),
            Seat::new("audit"),
        ];
        let organizer = SeatOrganizer::default();

        let first = organizer.organize(&seats, &registry);
        let second = organizer.organize(&seats, &registry);

        assert_eq!(first, second);
        assert_eq!(seats[0].credit_provider(), Some("p1"));
        assert_eq!(first.filtered[0].seat_type, SeatType::Credit);
        assert_eq!(first.filtered[0].credit_provider(), Some("State University"));
    }

    #[test]
    fn test_organizer_with_custom_category() {
        let organizer = SeatOrganizer::default().with_category("professional");
        let seats = vec![Seat::new("professional"), Seat::new("audit")];

        let partition = organizer.organize(&seats, &ProviderRegistry::default());
        assert_eq!(organizer.category(), "professional");
        assert_eq!(partition.filtered.len(), 1);
        assert_eq!(partition.residual[0].seat_type, SeatType::Audit);
    }
}
