use crate::domain::model::CreditProvider;
use crate::domain::ports::CreditProviderLookup;
use std::collections::HashMap;

/// In-memory credit provider collection keyed by provider id.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, CreditProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries replace earlier ones with the same id.
    pub fn from_providers(providers: impl IntoIterator<Item = CreditProvider>) -> Self {
        providers.into_iter().collect()
    }

    pub fn insert(&mut self, provider: CreditProvider) -> Option<CreditProvider> {
        self.providers.insert(provider.id.clone(), provider)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FromIterator<CreditProvider> for ProviderRegistry {
    fn from_iter<T: IntoIterator<Item = CreditProvider>>(iter: T) -> Self {
        let mut registry = Self::new();
        for provider in iter {
            registry.insert(provider);
        }
        registry
    }
}

impl CreditProviderLookup for ProviderRegistry {
    fn get(&self, provider_id: &str) -> Option<&CreditProvider> {
        self.providers.get(provider_id)
    }
}

impl CreditProviderLookup for HashMap<String, CreditProvider> {
    fn get(&self, provider_id: &str) -> Option<&CreditProvider> {
        HashMap::get(self, provider_id)
    }
}
