//! Content-type and admin-resource registrations
//!
//! Registering an entity named `book` implies four admin pages and three
//! form-submission hooks, all bound to the same controller:
//!
//! | operation      | admin slug / hook        | action   |
//! |----------------|--------------------------|----------|
//! | list page      | `book_list`              | `index`  |
//! | create page    | `book_create`            | `create` |
//! | edit page      | `book_edit`              | `edit`   |
//! | delete page    | `book_delete`            | `delete` |
//! | save form      | `admin_post_save_book`   | `store`  |
//! | update form    | `admin_post_update_book` | `update` |
//! | delete form    | `admin_post_delete_book` | `delete` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the host uses for authenticated form-submission hooks
pub const FORM_HOOK_PREFIX: &str = "admin_post_";

/// What kind of entity was registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A content type: the host also stores it, so a schema is registered
    PostType,
    /// Admin CRUD screens over data the host does not store itself
    Resource,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostType => write!(f, "post_type"),
            Self::Resource => write!(f, "resource"),
        }
    }
}

/// An admin page implied by an entity registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminOperation {
    /// List page
    Index,
    /// Create form page
    Create,
    /// Edit form page
    Edit,
    /// Delete confirmation page
    Delete,
}

impl AdminOperation {
    /// All admin operations, in menu order
    pub const ALL: [AdminOperation; 4] = [Self::Index, Self::Create, Self::Edit, Self::Delete];

    /// Controller action the page dispatches to
    pub fn action(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    fn slug_suffix(&self) -> &'static str {
        match self {
            Self::Index => "list",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Admin page slug for an entity, e.g. `book_list`
    pub fn slug(&self, entity: &str) -> String {
        format!("{}_{}", entity, self.slug_suffix())
    }

    /// Page title shown by the host
    pub fn title(&self, entity: &str) -> String {
        match self {
            Self::Index => format!("Manage {}", entity),
            Self::Create => format!("Add {}", entity),
            Self::Edit => format!("Edit {}", entity),
            Self::Delete => format!("Delete {}", entity),
        }
    }
}

/// A form-submission hook implied by an entity registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormIntent {
    /// Create a new record
    Save,
    /// Update an existing record
    Update,
    /// Delete a record
    Delete,
}

impl FormIntent {
    /// All form intents
    pub const ALL: [FormIntent; 3] = [Self::Save, Self::Update, Self::Delete];

    /// Controller action the submission dispatches to
    pub fn action(&self) -> &'static str {
        match self {
            Self::Save => "store",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Intent name as it appears in form `action` fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Value of the form's `action` field, e.g. `save_book`
    pub fn action_param(&self, entity: &str) -> String {
        format!("{}_{}", self.as_str(), entity)
    }

    /// Host hook fired for the submission, e.g. `admin_post_save_book`
    pub fn hook(&self, entity: &str) -> String {
        format!("{}{}", FORM_HOOK_PREFIX, self.action_param(entity))
    }
}

/// A content-type or admin-resource declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRegistration {
    /// Entity name, e.g. `book`
    pub name: String,
    /// Controller handling every implied operation
    pub controller: String,
    /// Whether a content-type schema is registered as well
    pub kind: EntityKind,
}

impl EntityRegistration {
    /// Create a registration
    pub fn new(name: impl Into<String>, controller: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            controller: controller.into(),
            kind,
        }
    }

    /// Find the admin operation behind a page slug, if it belongs to this entity
    pub fn admin_operation(&self, slug: &str) -> Option<AdminOperation> {
        AdminOperation::ALL
            .into_iter()
            .find(|op| op.slug(&self.name) == slug)
    }

    /// Find the form intent behind a hook name or form `action` value
    pub fn form_intent(&self, hook: &str) -> Option<FormIntent> {
        let action_param = hook.strip_prefix(FORM_HOOK_PREFIX).unwrap_or(hook);
        FormIntent::ALL
            .into_iter()
            .find(|intent| intent.action_param(&self.name) == action_param)
    }

    /// Every controller action the entity relies on, deduplicated
    pub fn required_actions(&self) -> Vec<&'static str> {
        let mut actions: Vec<&'static str> = AdminOperation::ALL
            .iter()
            .map(AdminOperation::action)
            .chain(FormIntent::ALL.iter().map(FormIntent::action))
            .collect();
        actions.sort_unstable();
        actions.dedup();
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_slugs() {
        let book = EntityRegistration::new("book", "BookController", EntityKind::PostType);
        assert_eq!(book.admin_operation("book_list"), Some(AdminOperation::Index));
        assert_eq!(book.admin_operation("book_delete"), Some(AdminOperation::Delete));
        assert_eq!(book.admin_operation("author_list"), None);
    }

    #[test]
    fn test_form_hooks_accept_hook_or_action_param() {
        let book = EntityRegistration::new("book", "BookController", EntityKind::PostType);
        assert_eq!(book.form_intent("admin_post_save_book"), Some(FormIntent::Save));
        assert_eq!(book.form_intent("update_book"), Some(FormIntent::Update));
        assert_eq!(book.form_intent("admin_post_delete_author"), None);
    }

    #[test]
    fn test_required_actions() {
        let book = EntityRegistration::new("book", "BookController", EntityKind::Resource);
        assert_eq!(
            book.required_actions(),
            vec!["create", "delete", "edit", "index", "store", "update"]
        );
    }
}
