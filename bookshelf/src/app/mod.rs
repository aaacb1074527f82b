//! Bookshelf plugin - Router, Controllers, Types and Context

mod context;
mod controllers;
mod host;
mod types;

pub use context::*;
pub use controllers::*;
pub use host::*;
pub use types::*;

// Re-export router utilities
pub use hook_router::{
    ControllerDef, Params, Router, RouterConfig, RouterError, RouterResult, SuccessResponse,
};

/// Create the plugin router
pub fn create_router(ctx: AppContext, config: RouterConfig) -> Router {
    Router::new()
        .with_config(config)
        .controller(book_controller(ctx.clone()))
        .controller(author_controller(ctx))
        .controller(page_controller())
        // Admin screens
        .post_type("book", "BookController")
        .resource_admin("author", "AuthorController")
        // Public pages
        .get("health", "PageController", "health")
        .get("search/{term}", "PageController", "search")
        .merge(book_routes())
}

/// Public book and author pages
fn book_routes() -> Router {
    Router::new()
        .get("book/{id}", "BookController", "show")
        .get("author/{id}/books", "AuthorController", "books")
}
