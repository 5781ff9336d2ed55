//! In-memory entity store and the access façade over it
//!
//! Six entity kinds live in per-kind [`Table`]s behind one coarse
//! `tokio::sync::Mutex`, so every read/modify/write sequence is atomic with
//! respect to concurrent handlers. Identifiers are assigned at insert,
//! strictly increasing per kind, and never reused.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::models::{
    AiInteraction, Contact, ContactStatus, DashboardStats, Favorite, InteractionFilters,
    NewAiInteraction, NewContact, NewFavorite, NewProperty, NewUser, NewVisit, Property,
    PropertyFilters, UpdateProperty, User, Visit, VisitStatus,
};

pub mod query;
pub mod stats;

/// Insertion-ordered collection for one entity kind.
///
/// Ids start at 1 and grow monotonically, so ascending-id order is exactly
/// insertion order even after removals.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Insert the record produced by `build`, handing it the assigned id.
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T
    where
        T: Clone,
    {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    /// All records in insertion order (ascending id).
    fn values_by_id(&self) -> Vec<&T> {
        let mut ids: Vec<i32> = self.rows.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(|id| self.rows.get(&id)).collect()
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    users: Table<User>,
    properties: Table<Property>,
    contacts: Table<Contact>,
    visits: Table<Visit>,
    favorites: Table<Favorite>,
    interactions: Table<AiInteraction>,
}

/// Access façade over the in-memory store.
///
/// Cloning is cheap and every clone shares the same data. Lookups by id
/// return `None` for missing records; creations are total and cannot fail.
#[derive(Clone, Debug, Default)]
pub struct MemStorage {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemStorage {
    /// Create an empty store. The hosting application seeds it exactly once
    /// at startup; see [`crate::seed`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
        }
    }

    // User operations

    pub async fn create_user(&self, new_user: NewUser) -> User {
        let mut inner = self.inner.lock().await;
        inner.users.insert_with(|id| User {
            id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
            full_name: new_user.full_name,
            role: new_user.role,
            created_at: Utc::now(),
        })
    }

    pub async fn get_user(&self, id: i32) -> Option<User> {
        self.inner.lock().await.users.get(id).cloned()
    }

    /// Uniqueness is advisory: callers look a username up before creating.
    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.lock().await;
        inner
            .users
            .values_by_id()
            .into_iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock().await;
        inner
            .users
            .values_by_id()
            .into_iter()
            .find(|u| u.email == email)
            .cloned()
    }

    // Property operations

    /// Create a property, applying the schema defaults for absent fields.
    pub async fn create_property(&self, new_property: NewProperty) -> Property {
        let now = Utc::now();
        let mut inner = self.inner.lock().await;
        inner.properties.insert_with(|id| Property {
            id,
            title: new_property.title,
            description: new_property.description,
            price: new_property.price,
            location: new_property.location,
            full_address: new_property.full_address,
            bedrooms: new_property.bedrooms,
            bathrooms: new_property.bathrooms,
            area: new_property.area,
            parking: new_property.parking.unwrap_or(0),
            property_type: new_property.property_type,
            year_built: new_property.year_built,
            features: new_property.features.unwrap_or_default(),
            images: new_property.images.unwrap_or_default(),
            badge: new_property.badge,
            badge_color: new_property.badge_color,
            rating: new_property.rating.unwrap_or_else(|| Decimal::new(0, 1)),
            is_active: new_property.is_active.unwrap_or(true),
            agent_id: new_property.agent_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Filtered, sorted, paginated view of the active listings.
    pub async fn list_properties(&self, filters: &PropertyFilters) -> Vec<Property> {
        let listings: Vec<Property> = {
            let inner = self.inner.lock().await;
            inner.properties.values_by_id().into_iter().cloned().collect()
        };
        query::run(listings, filters)
    }

    /// Direct lookup; soft-deleted listings are still reachable here.
    pub async fn get_property(&self, id: i32) -> Option<Property> {
        self.inner.lock().await.properties.get(id).cloned()
    }

    /// Merge the supplied fields into the stored record and refresh
    /// `updated_at`. The id and `created_at` never change.
    pub async fn update_property(&self, id: i32, updates: UpdateProperty) -> Option<Property> {
        let mut inner = self.inner.lock().await;
        let property = inner.properties.get_mut(id)?;

        if let Some(title) = updates.title {
            property.title = title;
        }
        if let Some(description) = updates.description {
            property.description = description;
        }
        if let Some(price) = updates.price {
            property.price = price;
        }
        if let Some(location) = updates.location {
            property.location = location;
        }
        if let Some(full_address) = updates.full_address {
            property.full_address = full_address;
        }
        if let Some(bedrooms) = updates.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = updates.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(area) = updates.area {
            property.area = area;
        }
        if let Some(parking) = updates.parking {
            property.parking = parking;
        }
        if let Some(property_type) = updates.property_type {
            property.property_type = property_type;
        }
        if let Some(year_built) = updates.year_built {
            property.year_built = Some(year_built);
        }
        if let Some(features) = updates.features {
            property.features = features;
        }
        if let Some(images) = updates.images {
            property.images = images;
        }
        if let Some(badge) = updates.badge {
            property.badge = Some(badge);
        }
        if let Some(badge_color) = updates.badge_color {
            property.badge_color = Some(badge_color);
        }
        if let Some(rating) = updates.rating {
            property.rating = rating;
        }
        if let Some(is_active) = updates.is_active {
            property.is_active = is_active;
        }
        if let Some(agent_id) = updates.agent_id {
            property.agent_id = Some(agent_id);
        }
        property.updated_at = Utc::now();

        Some(property.clone())
    }

    /// Active listings carrying a non-empty badge, in store order.
    pub async fn featured_properties(&self, limit: usize) -> Vec<Property> {
        let inner = self.inner.lock().await;
        inner
            .properties
            .values_by_id()
            .into_iter()
            .filter(|p| p.is_active && p.badge.as_deref().is_some_and(|b| !b.is_empty()))
            .take(limit)
            .cloned()
            .collect()
    }

    // Contact operations

    /// Create a contact. The status always starts as `new`.
    pub async fn create_contact(&self, new_contact: NewContact) -> Contact {
        let mut inner = self.inner.lock().await;
        inner.contacts.insert_with(|id| Contact {
            id,
            name: new_contact.name,
            phone: new_contact.phone,
            email: new_contact.email,
            whatsapp: new_contact.whatsapp,
            interest: new_contact.interest,
            message: new_contact.message,
            property_id: new_contact.property_id,
            status: ContactStatus::New,
            created_at: Utc::now(),
        })
    }

    pub async fn list_contacts(&self) -> Vec<Contact> {
        let inner = self.inner.lock().await;
        inner.contacts.values_by_id().into_iter().cloned().collect()
    }

    pub async fn get_contact(&self, id: i32) -> Option<Contact> {
        self.inner.lock().await.contacts.get(id).cloned()
    }

    pub async fn update_contact_status(&self, id: i32, status: ContactStatus) -> Option<Contact> {
        let mut inner = self.inner.lock().await;
        let contact = inner.contacts.get_mut(id)?;
        contact.status = status;
        Some(contact.clone())
    }

    // Visit operations

    /// Schedule a visit. The status always starts as `scheduled`.
    pub async fn create_visit(&self, new_visit: NewVisit) -> Visit {
        let mut inner = self.inner.lock().await;
        inner.visits.insert_with(|id| Visit {
            id,
            contact_id: new_visit.contact_id,
            property_id: new_visit.property_id,
            scheduled_date: new_visit.scheduled_date,
            status: VisitStatus::Scheduled,
            notes: new_visit.notes,
            created_at: Utc::now(),
        })
    }

    pub async fn visits_for_property(&self, property_id: i32) -> Vec<Visit> {
        let inner = self.inner.lock().await;
        inner
            .visits
            .values_by_id()
            .into_iter()
            .filter(|v| v.property_id == property_id)
            .cloned()
            .collect()
    }

    pub async fn visits_for_contact(&self, contact_id: i32) -> Vec<Visit> {
        let inner = self.inner.lock().await;
        inner
            .visits
            .values_by_id()
            .into_iter()
            .filter(|v| v.contact_id == contact_id)
            .cloned()
            .collect()
    }

    pub async fn update_visit_status(&self, id: i32, status: VisitStatus) -> Option<Visit> {
        let mut inner = self.inner.lock().await;
        let visit = inner.visits.get_mut(id)?;
        visit.status = status;
        Some(visit.clone())
    }

    // Favorite operations

    pub async fn create_favorite(&self, new_favorite: NewFavorite) -> Favorite {
        let mut inner = self.inner.lock().await;
        inner.favorites.insert_with(|id| Favorite {
            id,
            user_id: new_favorite.user_id,
            property_id: new_favorite.property_id,
            created_at: Utc::now(),
        })
    }

    pub async fn favorites_for_user(&self, user_id: i32) -> Vec<Favorite> {
        let inner = self.inner.lock().await;
        inner
            .favorites
            .values_by_id()
            .into_iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Remove the first favorite matching the (user, property) pair.
    ///
    /// Returns whether a record was removed; absent pairs leave the store
    /// untouched.
    pub async fn remove_favorite(&self, user_id: i32, property_id: i32) -> bool {
        let mut inner = self.inner.lock().await;
        let found = inner
            .favorites
            .values_by_id()
            .into_iter()
            .find(|f| f.user_id == user_id && f.property_id == property_id)
            .map(|f| f.id);

        match found {
            Some(id) => inner.favorites.remove(id).is_some(),
            None => false,
        }
    }

    // AI interaction operations

    pub async fn create_interaction(&self, new_interaction: NewAiInteraction) -> AiInteraction {
        let mut inner = self.inner.lock().await;
        inner.interactions.insert_with(|id| AiInteraction {
            id,
            session_id: new_interaction.session_id,
            interaction_type: new_interaction.interaction_type,
            property_id: new_interaction.property_id,
            data: new_interaction.data,
            created_at: Utc::now(),
        })
    }

    /// Analytics listing; every supplied filter dimension must match.
    pub async fn list_interactions(&self, filters: &InteractionFilters) -> Vec<AiInteraction> {
        let inner = self.inner.lock().await;
        inner
            .interactions
            .values_by_id()
            .into_iter()
            .filter(|i| {
                let by_property = filters
                    .property_id
                    .map_or(true, |id| i.property_id == Some(id));
                let by_type = filters
                    .interaction_type
                    .map_or(true, |t| i.interaction_type == t);
                let by_session = filters
                    .session_id
                    .as_deref()
                    .map_or(true, |s| i.session_id == s);
                by_property && by_type && by_session
            })
            .cloned()
            .collect()
    }

    // Dashboard

    pub async fn dashboard_stats(&self) -> DashboardStats {
        let inner = self.inner.lock().await;
        let properties: Vec<Property> =
            inner.properties.values_by_id().into_iter().cloned().collect();
        let contacts: Vec<Contact> = inner.contacts.values_by_id().into_iter().cloned().collect();
        let total_visits = inner.visits.len();
        let total_interactions = inner.interactions.len();
        drop(inner);

        stats::compute(
            &properties,
            &contacts,
            total_visits,
            total_interactions,
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InteractionType, SortKey, UserRole};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    async fn seeded() -> MemStorage {
        let storage = MemStorage::new();
        seed::load_sample_listings(&storage).await;
        storage
    }

    fn contact_payload(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            phone: "21999887766".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            whatsapp: None,
            interest: "compra".to_string(),
            message: Some("Tenho interesse na cobertura.".to_string()),
            property_id: Some(1),
        }
    }

    fn visit_payload(contact_id: i32, property_id: i32) -> NewVisit {
        NewVisit {
            contact_id,
            property_id,
            scheduled_date: Utc.with_ymd_and_hms(2026, 9, 12, 14, 30, 0).unwrap(),
            notes: None,
        }
    }

    fn interaction_payload(session: &str, kind: InteractionType, property: Option<i32>) -> NewAiInteraction {
        NewAiInteraction {
            session_id: session.to_string(),
            interaction_type: kind,
            property_id: property,
            data: Some(serde_json::json!({"durationSeconds": 42})),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_from_one() {
        let storage = seeded().await;
        let listings = storage
            .list_properties(&PropertyFilters::default())
            .await;

        let ids: Vec<i32> = listings.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let next = storage
            .create_property(seed::sample_listings().remove(0))
            .await;
        assert_eq!(next.id, 4);
        assert_eq!(next.created_at, next.updated_at);
    }

    #[tokio::test]
    async fn get_property_returns_none_for_unknown_id() {
        let storage = seeded().await;
        assert!(storage.get_property(999_999).await.is_none());
    }

    #[tokio::test]
    async fn create_property_applies_schema_defaults() {
        let storage = MemStorage::new();
        let created = storage
            .create_property(NewProperty {
                title: "Loft no Centro".to_string(),
                description: "Loft compacto e moderno.".to_string(),
                price: Decimal::new(900_000_00, 2),
                location: "Centro".to_string(),
                full_address: "Rua da Assembleia, 10 - Centro, Rio de Janeiro - RJ".to_string(),
                bedrooms: 1,
                bathrooms: 1,
                area: "60m²".to_string(),
                parking: None,
                property_type: "apartamento".to_string(),
                year_built: None,
                features: None,
                images: None,
                badge: None,
                badge_color: None,
                rating: None,
                is_active: None,
                agent_id: None,
            })
            .await;

        assert_eq!(created.parking, 0);
        assert!(created.features.is_empty());
        assert!(created.images.is_empty());
        assert_eq!(created.rating, Decimal::new(0, 1));
        assert!(created.is_active);
        assert!(created.badge.is_none());
    }

    #[tokio::test]
    async fn update_property_merges_only_supplied_fields() {
        let storage = seeded().await;
        let before = storage.get_property(1).await.unwrap();

        let after = storage
            .update_property(
                1,
                UpdateProperty {
                    bedrooms: Some(5),
                    ..UpdateProperty::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.bedrooms, 5);
        assert_eq!(after.title, before.title);
        assert_eq!(after.price, before.price);
        assert_eq!(after.features, before.features);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn update_property_returns_none_for_unknown_id() {
        let storage = seeded().await;
        let result = storage
            .update_property(
                42,
                UpdateProperty {
                    title: Some("Nada".to_string()),
                    ..UpdateProperty::default()
                },
            )
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn soft_deleted_listing_is_hidden_but_still_reachable_by_id() {
        let storage = seeded().await;
        storage
            .update_property(
                2,
                UpdateProperty {
                    is_active: Some(false),
                    ..UpdateProperty::default()
                },
            )
            .await
            .unwrap();

        let listed = storage.list_properties(&PropertyFilters::default()).await;
        assert!(listed.iter().all(|p| p.id != 2));
        assert!(listed.iter().all(|p| p.is_active));

        let featured = storage.featured_properties(3).await;
        assert!(featured.iter().all(|p| p.id != 2));

        let direct = storage.get_property(2).await.unwrap();
        assert!(!direct.is_active);
    }

    #[tokio::test]
    async fn cheapest_two_listings_come_back_in_ascending_price_order() {
        let storage = seeded().await;
        let filters = PropertyFilters {
            sort_by: Some(SortKey::PriceAsc),
            limit: Some(2),
            ..PropertyFilters::default()
        };

        let page = storage.list_properties(&filters).await;
        let locations: Vec<&str> = page.iter().map(|p| p.location.as_str()).collect();
        assert_eq!(locations, vec!["Copacabana", "Ipanema"]);
        assert_eq!(page[0].price, Decimal::new(3_100_000_00, 2));
        assert_eq!(page[1].price, Decimal::new(4_500_000_00, 2));
    }

    #[tokio::test]
    async fn featured_properties_need_a_non_empty_badge() {
        let storage = seeded().await;
        let mut unbadged = seed::sample_listings().remove(0);
        unbadged.badge = None;
        storage.create_property(unbadged).await;

        let mut blank_badge = seed::sample_listings().remove(0);
        blank_badge.badge = Some(String::new());
        storage.create_property(blank_badge).await;

        let featured = storage.featured_properties(10).await;
        let ids: Vec<i32> = featured.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let truncated = storage.featured_properties(2).await;
        assert_eq!(truncated.len(), 2);
        assert_eq!(truncated[0].id, 1);
    }

    #[tokio::test]
    async fn contacts_always_start_as_new() {
        let storage = MemStorage::new();
        let contact = storage.create_contact(contact_payload("Ana")).await;
        assert_eq!(contact.id, 1);
        assert_eq!(contact.status, ContactStatus::New);

        let updated = storage
            .update_contact_status(contact.id, ContactStatus::Contacted)
            .await
            .unwrap();
        assert_eq!(updated.status, ContactStatus::Contacted);

        assert!(storage
            .update_contact_status(99, ContactStatus::Closed)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn contacts_are_listed_in_creation_order_and_found_by_id() {
        let storage = MemStorage::new();
        assert!(storage.list_contacts().await.is_empty());
        assert!(storage.get_contact(1).await.is_none());

        let ana = storage.create_contact(contact_payload("Ana")).await;
        let bruno = storage.create_contact(contact_payload("Bruno")).await;

        let all = storage.list_contacts().await;
        let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ana.id, bruno.id]);
        assert_eq!(all[0].name, "Ana");

        let found = storage.get_contact(bruno.id).await.unwrap();
        assert_eq!(found.name, "Bruno");
        assert!(storage.get_contact(99).await.is_none());
    }

    #[tokio::test]
    async fn visits_always_start_as_scheduled() {
        let storage = MemStorage::new();
        let contact = storage.create_contact(contact_payload("Bruno")).await;
        let visit = storage.create_visit(visit_payload(contact.id, 1)).await;
        assert_eq!(visit.status, VisitStatus::Scheduled);

        let confirmed = storage
            .update_visit_status(visit.id, VisitStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, VisitStatus::Confirmed);
    }

    #[tokio::test]
    async fn visits_are_listed_per_property_and_per_contact() {
        let storage = MemStorage::new();
        let ana = storage.create_contact(contact_payload("Ana")).await;
        let bruno = storage.create_contact(contact_payload("Bruno")).await;

        storage.create_visit(visit_payload(ana.id, 1)).await;
        storage.create_visit(visit_payload(ana.id, 2)).await;
        storage.create_visit(visit_payload(bruno.id, 1)).await;

        let for_first = storage.visits_for_property(1).await;
        assert_eq!(for_first.len(), 2);
        assert!(for_first.iter().all(|v| v.property_id == 1));

        let for_ana = storage.visits_for_contact(ana.id).await;
        assert_eq!(for_ana.len(), 2);
        assert!(storage.visits_for_property(3).await.is_empty());
    }

    #[tokio::test]
    async fn remove_favorite_is_a_no_op_when_absent() {
        let storage = MemStorage::new();
        assert!(!storage.remove_favorite(1, 1).await);

        storage
            .create_favorite(NewFavorite {
                user_id: 1,
                property_id: 2,
            })
            .await;

        assert!(!storage.remove_favorite(1, 1).await);
        assert_eq!(storage.favorites_for_user(1).await.len(), 1);
    }

    #[tokio::test]
    async fn remove_favorite_takes_out_exactly_one_record() {
        let storage = MemStorage::new();
        storage
            .create_favorite(NewFavorite {
                user_id: 1,
                property_id: 2,
            })
            .await;
        storage
            .create_favorite(NewFavorite {
                user_id: 1,
                property_id: 2,
            })
            .await;

        assert!(storage.remove_favorite(1, 2).await);
        let remaining = storage.favorites_for_user(1).await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[tokio::test]
    async fn favorites_are_listed_per_user() {
        let storage = MemStorage::new();
        storage
            .create_favorite(NewFavorite {
                user_id: 1,
                property_id: 1,
            })
            .await;
        storage
            .create_favorite(NewFavorite {
                user_id: 2,
                property_id: 1,
            })
            .await;

        let mine = storage.favorites_for_user(1).await;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, 1);
    }

    #[tokio::test]
    async fn users_are_found_by_username_and_email() {
        let storage = MemStorage::new();
        let user = storage
            .create_user(NewUser {
                username: "corretora".to_string(),
                password: "s3gr3do".to_string(),
                email: "corretora@imoveisluxorio.com.br".to_string(),
                full_name: "Maria Correia".to_string(),
                role: UserRole::Agent,
            })
            .await;

        assert_eq!(storage.get_user(user.id).await.unwrap().id, user.id);
        assert_eq!(
            storage
                .get_user_by_username("corretora")
                .await
                .unwrap()
                .role,
            UserRole::Agent
        );
        assert!(storage.get_user_by_username("ninguem").await.is_none());
        assert_eq!(
            storage
                .get_user_by_email("corretora@imoveisluxorio.com.br")
                .await
                .unwrap()
                .full_name,
            "Maria Correia"
        );
    }

    #[tokio::test]
    async fn interaction_filters_are_combined_with_and() {
        let storage = MemStorage::new();
        storage
            .create_interaction(interaction_payload("s1", InteractionType::AudioTour, Some(1)))
            .await;
        storage
            .create_interaction(interaction_payload(
                "s1",
                InteractionType::Recommendation,
                None,
            ))
            .await;
        storage
            .create_interaction(interaction_payload("s2", InteractionType::AudioTour, Some(2)))
            .await;

        let all = storage
            .list_interactions(&InteractionFilters::default())
            .await;
        assert_eq!(all.len(), 3);

        let audio = storage
            .list_interactions(&InteractionFilters {
                interaction_type: Some(InteractionType::AudioTour),
                ..InteractionFilters::default()
            })
            .await;
        assert_eq!(audio.len(), 2);

        let narrowed = storage
            .list_interactions(&InteractionFilters {
                interaction_type: Some(InteractionType::AudioTour),
                session_id: Some("s1".to_string()),
                property_id: Some(1),
            })
            .await;
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].session_id, "s1");

        let none = storage
            .list_interactions(&InteractionFilters {
                property_id: Some(7),
                ..InteractionFilters::default()
            })
            .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn dashboard_stats_cover_the_seeded_store() {
        let storage = seeded().await;
        let stats = storage.dashboard_stats().await;

        assert_eq!(stats.total_properties, 3);
        assert_eq!(stats.active_properties, 3);
        assert_eq!(stats.total_contacts, 0);
        assert_eq!(stats.total_visits, 0);
        assert_eq!(stats.new_contacts_this_month, 0);
        assert_eq!(stats.total_ai_interactions, 0);
        assert_eq!(stats.average_property_price, 15_800_000.0 / 3.0);
        assert_eq!(stats.top_locations.len(), 3);

        storage.create_contact(contact_payload("Carla")).await;
        let refreshed = storage.dashboard_stats().await;
        assert_eq!(refreshed.total_contacts, 1);
        assert_eq!(refreshed.new_contacts_this_month, 1);
    }
}
