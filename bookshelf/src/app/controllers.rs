//! Controllers
//!
//! Each controller is built fresh for every dispatch from the shared
//! [`AppContext`]; the actions registered here are the only ones routes and
//! admin screens can reach.

use super::*;

// =============================================================================
// Form Helpers
// =============================================================================

fn required_field(ctx: &AppContext, name: &str) -> RouterResult<String> {
    ctx.form
        .get(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| RouterError::bad_request(format!("Field '{}' is required", name)))
}

fn id_field(ctx: &AppContext) -> RouterResult<u32> {
    required_field(ctx, "id")?
        .parse()
        .map_err(|_| RouterError::bad_request("Field 'id' must be a number"))
}

fn optional_id(ctx: &AppContext, name: &str) -> RouterResult<Option<u32>> {
    ctx.form
        .get(name)
        .map(|v| {
            v.parse()
                .map_err(|_| RouterError::bad_request(format!("Field '{}' must be a number", name)))
        })
        .transpose()
}

// =============================================================================
// Book Controller
// =============================================================================

/// Admin screens and public pages for books
pub struct BookController {
    ctx: AppContext,
}

impl BookController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    fn index(&mut self, _: Params) -> RouterResult<Vec<Book>> {
        Ok(self.ctx.library.list_books())
    }

    fn create(&mut self, _: Params) -> RouterResult<AdminScreen> {
        Ok(AdminScreen::new("book-create", &["title", "author_id"]))
    }

    fn edit(&mut self, _: Params) -> RouterResult<AdminScreen> {
        Ok(AdminScreen::new("book-edit", &["id", "title"]))
    }

    fn delete(&mut self, _: Params) -> RouterResult<SuccessResponse> {
        let id = id_field(&self.ctx)?;
        if self.ctx.library.delete_book(id) {
            Ok(SuccessResponse::ok(format!("Book {} deleted", id)))
        } else {
            Err(RouterError::not_found(format!("Book {} not found", id)))
        }
    }

    fn store(&mut self, _: Params) -> RouterResult<Book> {
        let title = required_field(&self.ctx, "title")?;
        let author_id = optional_id(&self.ctx, "author_id")?;
        self.ctx
            .library
            .create_book(&title, author_id)
            .ok_or_else(|| RouterError::internal("Library is unavailable"))
    }

    fn update(&mut self, _: Params) -> RouterResult<Book> {
        let id = id_field(&self.ctx)?;
        let title = self.ctx.form.get("title");
        self.ctx
            .library
            .update_book(id, title.as_deref())
            .ok_or_else(|| RouterError::not_found(format!("Book {} not found", id)))
    }

    fn show(&mut self, params: Params) -> RouterResult<BookPage> {
        let id: u32 = params.parse(0)?;
        let book = self
            .ctx
            .library
            .get_book(id)
            .ok_or_else(|| RouterError::not_found(format!("Book {} not found", id)))?;
        let author = book.author_id.and_then(|a| self.ctx.library.get_author(a));
        Ok(BookPage { book, author })
    }
}

pub fn book_controller(ctx: AppContext) -> ControllerDef<BookController> {
    ControllerDef::new("BookController", move || BookController::new(ctx.clone()))
        .action("index", BookController::index)
        .action("create", BookController::create)
        .action("edit", BookController::edit)
        .action("delete", BookController::delete)
        .action("store", BookController::store)
        .action("update", BookController::update)
        .action("show", BookController::show)
}

// =============================================================================
// Author Controller
// =============================================================================

/// Admin screens for authors, plus the public author page
pub struct AuthorController {
    ctx: AppContext,
}

impl AuthorController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    fn index(&mut self, _: Params) -> RouterResult<Vec<Author>> {
        Ok(self.ctx.library.list_authors())
    }

    fn create(&mut self, _: Params) -> RouterResult<AdminScreen> {
        Ok(AdminScreen::new("author-create", &["name"]))
    }

    fn edit(&mut self, _: Params) -> RouterResult<AdminScreen> {
        Ok(AdminScreen::new("author-edit", &["id", "name"]))
    }

    fn delete(&mut self, _: Params) -> RouterResult<SuccessResponse> {
        let id = id_field(&self.ctx)?;
        if self.ctx.library.delete_author(id) {
            Ok(SuccessResponse::ok(format!("Author {} deleted", id)))
        } else {
            Err(RouterError::not_found(format!("Author {} not found", id)))
        }
    }

    fn store(&mut self, _: Params) -> RouterResult<Author> {
        let name = required_field(&self.ctx, "name")?;
        self.ctx
            .library
            .create_author(&name)
            .ok_or_else(|| RouterError::internal("Library is unavailable"))
    }

    fn update(&mut self, _: Params) -> RouterResult<Author> {
        let id = id_field(&self.ctx)?;
        let name = self.ctx.form.get("name");
        self.ctx
            .library
            .update_author(id, name.as_deref())
            .ok_or_else(|| RouterError::not_found(format!("Author {} not found", id)))
    }

    fn books(&mut self, params: Params) -> RouterResult<Vec<Book>> {
        let id: u32 = params.parse(0)?;
        if self.ctx.library.get_author(id).is_none() {
            return Err(RouterError::not_found(format!("Author {} not found", id)));
        }
        Ok(self.ctx.library.books_by(id))
    }
}

pub fn author_controller(ctx: AppContext) -> ControllerDef<AuthorController> {
    ControllerDef::new("AuthorController", move || AuthorController::new(ctx.clone()))
        .action("index", AuthorController::index)
        .action("create", AuthorController::create)
        .action("edit", AuthorController::edit)
        .action("delete", AuthorController::delete)
        .action("store", AuthorController::store)
        .action("update", AuthorController::update)
        .action("books", AuthorController::books)
}

// =============================================================================
// Page Controller
// =============================================================================

/// Stateless public pages
pub fn page_controller() -> ControllerDef<()> {
    ControllerDef::new("PageController", || ())
        .action("health", |_: &mut (), _: Params| -> RouterResult<HealthResponse> {
            Ok(HealthResponse {
                status: "ok".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            })
        })
        .action("search", |_: &mut (), params: Params| -> RouterResult<String> {
            let term = params.get(0).unwrap_or_default();
            if term.is_empty() {
                return Err(RouterError::bad_request("Search term cannot be empty"));
            }
            Ok(format!("Searching the shelf for '{}'", term))
        })
}
