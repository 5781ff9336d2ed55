//! Showcase listings loaded once at startup

use rust_decimal::Decimal;
use tracing::info;

use crate::models::{BadgeColor, NewProperty};
use crate::storage::MemStorage;

/// The three launch listings of the site.
pub fn sample_listings() -> Vec<NewProperty> {
    vec![
        NewProperty {
            title: "Cobertura Luxuosa em Ipanema".to_string(),
            description: "Esta magnífica cobertura oferece vistas deslumbrantes da praia de \
                          Ipanema e combina luxo contemporâneo com elegância atemporal."
                .to_string(),
            price: Decimal::new(4_500_000_00, 2),
            location: "Ipanema".to_string(),
            full_address: "Rua Vieira Souto, 500 - Ipanema, Rio de Janeiro - RJ".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            area: "320m²".to_string(),
            parking: Some(2),
            property_type: "cobertura".to_string(),
            year_built: Some(2020),
            features: Some(vec![
                "Vista panorâmica da praia".to_string(),
                "Piscina privativa".to_string(),
                "Terraço gourmet".to_string(),
                "Ar condicionado central".to_string(),
                "Automação residencial".to_string(),
            ]),
            images: Some(vec![
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800".to_string(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800".to_string(),
            ]),
            badge: Some("Destaque".to_string()),
            badge_color: Some(BadgeColor::Luxury),
            rating: Some(Decimal::new(49, 1)),
            is_active: Some(true),
            agent_id: None,
        },
        NewProperty {
            title: "Mansão Moderna na Barra".to_string(),
            description: "Mansão contemporânea com arquitetura arrojada e acabamentos de \
                          primeira linha na Barra da Tijuca."
                .to_string(),
            price: Decimal::new(8_200_000_00, 2),
            location: "Barra da Tijuca".to_string(),
            full_address: "Av. das Américas, 3000 - Barra da Tijuca, Rio de Janeiro - RJ"
                .to_string(),
            bedrooms: 6,
            bathrooms: 5,
            area: "850m²".to_string(),
            parking: Some(4),
            property_type: "casa".to_string(),
            year_built: Some(2021),
            features: Some(vec![
                "Piscina com raia".to_string(),
                "Quadra de tênis".to_string(),
                "Cinema privativo".to_string(),
                "Spa".to_string(),
                "Garagem para 4 carros".to_string(),
            ]),
            images: Some(vec![
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800".to_string(),
            ]),
            badge: Some("Novo".to_string()),
            badge_color: Some(BadgeColor::Gold),
            rating: Some(Decimal::new(50, 1)),
            is_active: Some(true),
            agent_id: None,
        },
        NewProperty {
            title: "Apartamento de Luxo em Copacabana".to_string(),
            description: "Elegante apartamento com vista para o mar em uma das localização \
                          mais privilegiadas de Copacabana."
                .to_string(),
            price: Decimal::new(3_100_000_00, 2),
            location: "Copacabana".to_string(),
            full_address: "Av. Atlântica, 2000 - Copacabana, Rio de Janeiro - RJ".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: "180m²".to_string(),
            parking: Some(1),
            property_type: "apartamento".to_string(),
            year_built: Some(2019),
            features: Some(vec![
                "Vista frontal para o mar".to_string(),
                "Varanda ampla".to_string(),
                "Acabamentos de luxo".to_string(),
                "Localização premium".to_string(),
            ]),
            images: Some(vec![
                "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=800".to_string(),
            ]),
            badge: Some("Exclusivo".to_string()),
            badge_color: Some(BadgeColor::Gray),
            rating: Some(Decimal::new(48, 1)),
            is_active: Some(true),
            agent_id: None,
        },
    ]
}

/// Load the showcase listings into `storage`. The hosting application calls
/// this exactly once, against an empty store, before serving traffic.
pub async fn load_sample_listings(storage: &MemStorage) {
    let listings = sample_listings();
    let count = listings.len();
    for listing in listings {
        storage.create_property(listing).await;
    }
    info!("Seeded {count} sample listings");
}
