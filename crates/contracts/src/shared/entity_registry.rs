//! Entity registry: the single mapping from an entity name tag to its data
//! source (kind + REST routes). Resolved once, at configuration time.

use super::pagination::PageRequest;
use once_cell::sync::Lazy;
use std::collections::HashMap;

macro_rules! crud_routes {
    ($segment:literal) => {
        EntityRoutes {
            list: concat!("/", $segment, "/get"),
            by_id: concat!("/", $segment, "/get/{id}"),
            create: concat!("/", $segment, "/create"),
            update: concat!("/", $segment, "/update/{id}"),
            delete: concat!("/", $segment, "/delete/{id}"),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Brand,
    Category,
    Product,
    Banner,
    Order,
    Review,
    ComboOffer,
    DiscountOffer,
    FreeGiftOffer,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Brand,
        EntityKind::Category,
        EntityKind::Product,
        EntityKind::Banner,
        EntityKind::Order,
        EntityKind::Review,
        EntityKind::ComboOffer,
        EntityKind::DiscountOffer,
        EntityKind::FreeGiftOffer,
    ];

    /// Name tag used by table configs and tab keys.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Brand => "brand",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
            EntityKind::Banner => "banner",
            EntityKind::Order => "order",
            EntityKind::Review => "review",
            EntityKind::ComboOffer => "combo-offer",
            EntityKind::DiscountOffer => "discount-offer",
            EntityKind::FreeGiftOffer => "free-gift-offer",
        }
    }

    /// Singular UI name, e.g. for "Create brand" buttons and confirm dialogs.
    pub fn element_name(&self) -> &'static str {
        match self {
            EntityKind::Brand => "brand",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
            EntityKind::Banner => "banner",
            EntityKind::Order => "order",
            EntityKind::Review => "review",
            EntityKind::ComboOffer => "combo offer",
            EntityKind::DiscountOffer => "discount offer",
            EntityKind::FreeGiftOffer => "free gift offer",
        }
    }

    pub fn default_routes(&self) -> EntityRoutes {
        match self {
            EntityKind::Brand => crud_routes!("brand"),
            EntityKind::Category => crud_routes!("category"),
            EntityKind::Product => crud_routes!("product"),
            EntityKind::Banner => crud_routes!("banner"),
            EntityKind::Order => crud_routes!("order"),
            EntityKind::Review => crud_routes!("review"),
            EntityKind::ComboOffer => crud_routes!("combo-offer"),
            EntityKind::DiscountOffer => crud_routes!("percentage-offer"),
            // Only one free gift offer exists at a time, so no id segment.
            EntityKind::FreeGiftOffer => EntityRoutes {
                list: "/free-gift/get",
                by_id: "/free-gift/get",
                create: "/free-gift/create",
                update: "/free-gift/update",
                delete: "/free-gift/delete",
            },
        }
    }
}

/// REST route templates of one entity, relative to the API base.
/// `{id}` is substituted with the (already encoded) record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRoutes {
    pub list: &'static str,
    pub by_id: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

impl EntityRoutes {
    pub fn list_path(&self, page: PageRequest) -> String {
        format!("{}?offset={}&limit={}", self.list, page.offset, page.limit)
    }

    pub fn by_id_path(&self, id: &str) -> String {
        self.by_id.replace("{id}", id)
    }

    pub fn create_path(&self) -> String {
        self.create.to_string()
    }

    pub fn update_path(&self, id: &str) -> String {
        self.update.replace("{id}", id)
    }

    pub fn delete_path(&self, id: &str) -> String {
        self.delete.replace("{id}", id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityBinding {
    pub kind: EntityKind,
    pub routes: EntityRoutes,
}

/// Result of resolving an entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Registered(EntityBinding),
    Unregistered { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entries: HashMap<&'static str, EntityBinding>,
}

static GLOBAL_REGISTRY: Lazy<EntityRegistry> = Lazy::new(EntityRegistry::with_defaults);

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every known entity under its canonical name.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in EntityKind::ALL {
            registry.register(
                kind.name(),
                EntityBinding {
                    kind,
                    routes: kind.default_routes(),
                },
            );
        }
        registry
    }

    pub fn global() -> &'static EntityRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn register(&mut self, name: &'static str, binding: EntityBinding) {
        self.entries.insert(name, binding);
    }

    pub fn resolve(&self, name: &str) -> DataSource {
        match self.entries.get(name) {
            Some(binding) => DataSource::Registered(*binding),
            None => DataSource::Unregistered {
                name: name.to_string(),
            },
        }
    }

    /// Binding under the canonical name of `kind`. Aliases registered for
    /// the same kind are only reachable through [`resolve`](Self::resolve).
    pub fn binding_for(&self, kind: EntityKind) -> Option<EntityBinding> {
        self.entries
            .get(kind.name())
            .copied()
            .filter(|binding| binding.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_resolves_by_name() {
        let registry = EntityRegistry::with_defaults();
        for kind in EntityKind::ALL {
            match registry.resolve(kind.name()) {
                DataSource::Registered(binding) => assert_eq!(binding.kind, kind),
                other => panic!("{} did not resolve: {:?}", kind.name(), other),
            }
        }
    }

    #[test]
    fn test_alias_does_not_shadow_canonical_binding() {
        let mut registry = EntityRegistry::with_defaults();
        let alias = EntityBinding {
            kind: EntityKind::Product,
            routes: EntityRoutes {
                list: "/product/archived",
                ..EntityKind::Product.default_routes()
            },
        };
        for name in ["archived-product", "legacy-product", "product-export"] {
            registry.register(name, alias);
        }

        let canonical = registry.binding_for(EntityKind::Product).unwrap();
        assert_eq!(canonical.routes.list, "/product/get");
        assert_eq!(
            registry.resolve("archived-product"),
            DataSource::Registered(alias)
        );
    }

    #[test]
    fn test_unknown_name_is_explicitly_unregistered() {
        let registry = EntityRegistry::global();
        assert_eq!(
            registry.resolve("vendor"),
            DataSource::Unregistered {
                name: "vendor".to_string()
            }
        );
        assert!(matches!(
            registry.resolve("Brand"),
            DataSource::Unregistered { .. }
        ));
    }

    #[test]
    fn test_route_templates() {
        let routes = EntityKind::Brand.default_routes();
        assert_eq!(
            routes.list_path(PageRequest::new(20, 10)),
            "/brand/get?offset=20&limit=10"
        );
        assert_eq!(routes.by_id_path("abc"), "/brand/get/abc");
        assert_eq!(routes.update_path("abc"), "/brand/update/abc");
        assert_eq!(routes.delete_path("abc"), "/brand/delete/abc");

        let discount = EntityKind::DiscountOffer.default_routes();
        assert_eq!(discount.create_path(), "/percentage-offer/create");

        let gift = EntityKind::FreeGiftOffer.default_routes();
        assert_eq!(gift.delete_path("ignored"), "/free-gift/delete");
    }

    #[test]
    fn test_registry_is_extensible() {
        let mut registry = EntityRegistry::new();
        assert!(registry.binding_for(EntityKind::Review).is_none());
        registry.register(
            "facebook-review",
            EntityBinding {
                kind: EntityKind::Review,
                routes: EntityKind::Review.default_routes(),
            },
        );
        assert!(matches!(
            registry.resolve("facebook-review"),
            DataSource::Registered(EntityBinding {
                kind: EntityKind::Review,
                ..
            })
        ));
        // Kind lookups only see the canonical name.
        assert!(registry.binding_for(EntityKind::Review).is_none());
        registry.register(
            EntityKind::Review.name(),
            EntityBinding {
                kind: EntityKind::Review,
                routes: EntityKind::Review.default_routes(),
            },
        );
        assert!(registry.binding_for(EntityKind::Review).is_some());
    }
}
