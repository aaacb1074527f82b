//! Route table
//!
//! Holds explicit routes per verb and entity registrations per name.
//! Routes keep registration order within a verb; re-registering the same
//! (verb, pattern) pair replaces the target in place.

use crate::{
    EntityRegistration, RouterResult, Verb,
    pattern::normalize_pattern,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// An explicit front-end route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Verb the route answers
    pub verb: Verb,
    /// Pattern with `{name}` placeholders, without leading or trailing `/`
    pub pattern: String,
    /// Controller name
    pub controller: String,
    /// Action name on the controller
    pub action: String,
}

impl Route {
    /// Create a route; leading and trailing `/` on the pattern are dropped.
    pub fn new(
        verb: Verb,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let pattern = pattern.into();
        Self {
            verb,
            pattern: normalize_pattern(&pattern).to_string(),
            controller: controller.into(),
            action: action.into(),
        }
    }
}

/// Routes and entity registrations, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    routes: BTreeMap<Verb, Vec<Route>>,
    entities: Vec<EntityRegistration>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, overwriting an existing (verb, pattern) entry.
    ///
    /// Returns the replaced route, if any.
    pub fn insert_route(&mut self, route: Route) -> Option<Route> {
        let routes = self.routes.entry(route.verb).or_default();
        match routes.iter_mut().find(|r| r.pattern == route.pattern) {
            Some(existing) => Some(std::mem::replace(existing, route)),
            None => {
                routes.push(route);
                None
            }
        }
    }

    /// Insert an entity, overwriting an existing entry with the same name.
    pub fn insert_entity(&mut self, entity: EntityRegistration) -> Option<EntityRegistration> {
        match self.entities.iter_mut().find(|e| e.name == entity.name) {
            Some(existing) => Some(std::mem::replace(existing, entity)),
            None => {
                self.entities.push(entity);
                None
            }
        }
    }

    /// Fold another table into this one; its entries win.
    pub fn extend(&mut self, other: RouteTable) {
        for route in other.routes.into_values().flatten() {
            self.insert_route(route);
        }
        for entity in other.entities {
            self.insert_entity(entity);
        }
    }

    /// Routes of one verb, in registration order
    pub fn routes_for(&self, verb: Verb) -> &[Route] {
        self.routes.get(&verb).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All routes, grouped by verb
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values().flatten()
    }

    /// Look up a route by verb and pattern
    pub fn route(&self, verb: Verb, pattern: &str) -> Option<&Route> {
        let pattern = normalize_pattern(pattern);
        self.routes_for(verb).iter().find(|r| r.pattern == pattern)
    }

    /// All entities, in registration order
    pub fn entities(&self) -> &[EntityRegistration] {
        &self.entities
    }

    /// Look up an entity by name
    pub fn entity(&self, name: &str) -> Option<&EntityRegistration> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Number of explicit routes
    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Whether neither routes nor entities are registered
    pub fn is_empty(&self) -> bool {
        self.route_count() == 0 && self.entities.is_empty()
    }

    /// Content hash of the table: hex SHA-256 of its JSON serialization.
    ///
    /// Serialization is canonical (verbs are kept in a sorted map, entries in
    /// registration order), so an unchanged table always hashes the same.
    pub fn fingerprint(&self) -> RouterResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityKind;

    #[test]
    fn test_same_verb_and_pattern_overwrites() {
        let mut table = RouteTable::new();
        table.insert_route(Route::new(Verb::Get, "product/{id}", "Old", "show"));
        table.insert_route(Route::new(Verb::Get, "about", "Pages", "about"));
        let replaced = table.insert_route(Route::new(Verb::Get, "/product/{id}", "New", "view"));

        assert_eq!(replaced.map(|r| r.controller), Some("Old".to_string()));
        assert_eq!(table.route_count(), 2);

        let route = table.route(Verb::Get, "product/{id}").unwrap();
        assert_eq!(route.controller, "New");
        assert_eq!(route.action, "view");
        // Keeps its original position
        assert_eq!(table.routes_for(Verb::Get)[0].controller, "New");
    }

    #[test]
    fn test_trailing_slash_variants_are_one_route() {
        let mut table = RouteTable::new();
        table.insert_route(Route::new(Verb::Get, "about", "Pages", "old"));
        table.insert_route(Route::new(Verb::Get, "about/", "Pages", "new"));

        assert_eq!(table.route_count(), 1);
        assert_eq!(table.route(Verb::Get, "/about/").unwrap().action, "new");
        assert_eq!(table.routes_for(Verb::Get)[0].pattern, "about");
    }

    #[test]
    fn test_same_pattern_different_verbs_coexist() {
        let mut table = RouteTable::new();
        table.insert_route(Route::new(Verb::Get, "cart", "Cart", "show"));
        table.insert_route(Route::new(Verb::Post, "cart", "Cart", "add"));
        assert_eq!(table.route_count(), 2);
    }

    #[test]
    fn test_entity_overwrite() {
        let mut table = RouteTable::new();
        table.insert_entity(EntityRegistration::new("book", "A", EntityKind::PostType));
        table.insert_entity(EntityRegistration::new("book", "B", EntityKind::Resource));
        assert_eq!(table.entities().len(), 1);
        assert_eq!(table.entity("book").unwrap().controller, "B");
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let mut table = RouteTable::new();
        table.insert_route(Route::new(Verb::Get, "product/{id}", "Shop", "show"));
        let first = table.fingerprint().unwrap();
        let second = table.fingerprint().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        table.insert_route(Route::new(Verb::Post, "product", "Shop", "store"));
        assert_ne!(table.fingerprint().unwrap(), first);
    }
}
