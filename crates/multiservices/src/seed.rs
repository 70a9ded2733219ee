//! Sample providers for a fresh directory.

use crate::error::Result;
use crate::model::{ProviderDraft, ServiceCategory};
use crate::store::{Collection, DirectoryStore};
use tracing::info;

pub fn sample_providers() -> Vec<ProviderDraft> {
    vec![
        ProviderDraft {
            name: "Carlos Silva".to_string(),
            email: "carlos@pintor.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            service: ServiceCategory::Painter,
            experience: "8 anos de experiência".to_string(),
            description:
                "Pintura residencial e comercial, trabalhos com textura e efeitos especiais."
                    .to_string(),
            location: "São Paulo - SP".to_string(),
            hourly_rate: Some(80.0),
        },
        ProviderDraft {
            name: "Maria Santos".to_string(),
            email: "maria@encanadora.com".to_string(),
            phone: "(11) 98888-8888".to_string(),
            service: ServiceCategory::Plumber,
            experience: "6 anos de experiência".to_string(),
            description:
                "Instalação e reparo hidráulico, desentupimento e manutenção preventiva."
                    .to_string(),
            location: "São Paulo - SP".to_string(),
            hourly_rate: Some(70.0),
        },
        ProviderDraft {
            name: "João Pereira".to_string(),
            email: "joao@arcondicionado.com".to_string(),
            phone: "(11) 97777-7777".to_string(),
            service: ServiceCategory::AirConditioningInstaller,
            experience: "10 anos de experiência".to_string(),
            description: "Instalação e manutenção de ar condicionado split, central e janela."
                .to_string(),
            location: "São Paulo - SP".to_string(),
            hourly_rate: Some(120.0),
        },
    ]
}

/// Stores the sample providers when no provider collection was ever written.
/// Returns how many were stored.
///
/// An existing but unreadable collection is left alone, even when the
/// corruption policy reads it as empty.
pub fn seed_sample_providers<S: DirectoryStore>(store: &mut S) -> Result<usize> {
    if store.collection_exists(Collection::Providers)? {
        return Ok(0);
    }

    let samples = sample_providers();
    let count = samples.len();
    for draft in samples {
        store.save_provider(draft)?;
    }
    info!(count, "seeded sample providers");
    Ok(count)
}
