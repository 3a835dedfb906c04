use crate::domain::model::{Course, CreditProvider, Seat};

/// Source of the seats shown for a course. Read-only from the organizer's side.
pub trait CourseModel {
    fn seats(&self) -> &[Seat];
}

/// Resolves a credit provider code to the provider record, if known.
pub trait CreditProviderLookup {
    fn get(&self, provider_id: &str) -> Option<&CreditProvider>;
}

impl CourseModel for Course {
    fn seats(&self) -> &[Seat] {
        &self.seats
    }
}

impl CourseModel for [Seat] {
    fn seats(&self) -> &[Seat] {
        self
    }
}

impl CourseModel for Vec<Seat> {
    fn seats(&self) -> &[Seat] {
        self
    }
}

impl<T: CreditProviderLookup + ?Sized> CreditProviderLookup for &T {
    fn get(&self, provider_id: &str) -> Option<&CreditProvider> {
        (**self).get(provider_id)
    }
}
