mod builder_tests;

use crate::{ControllerDef, Params, RouterResult, SuccessResponse};
use serde::Serialize;

/// Book record returned by the test controller
#[derive(Debug, Clone, Serialize)]
pub(super) struct Book {
    pub id: u32,
    pub title: String,
}

#[derive(Default)]
pub(super) struct BookController;

impl BookController {
    fn index(&mut self, _: Params) -> RouterResult<Vec<Book>> {
        Ok(vec![Book {
            id: 1,
            title: "Dune".into(),
        }])
    }

    fn show(&mut self, params: Params) -> RouterResult<Book> {
        Ok(Book {
            id: params.parse(0)?,
            title: "Dune".into(),
        })
    }

    fn page(&mut self, _: Params) -> RouterResult<&'static str> {
        Ok("page")
    }

    fn store(&mut self, _: Params) -> RouterResult<SuccessResponse> {
        Ok(SuccessResponse::ok("stored"))
    }

    fn update(&mut self, _: Params) -> RouterResult<SuccessResponse> {
        Ok(SuccessResponse::ok("updated"))
    }

    fn delete(&mut self, _: Params) -> RouterResult<SuccessResponse> {
        Ok(SuccessResponse::ok("deleted"))
    }
}

/// Controller exposing every action an entity needs, plus `show`
pub(super) fn book_controller() -> ControllerDef<BookController> {
    ControllerDef::new("BookController", BookController::default)
        .action("index", BookController::index)
        .action("create", BookController::page)
        .action("edit", BookController::page)
        .action("delete", BookController::delete)
        .action("store", BookController::store)
        .action("update", BookController::update)
        .action("show", BookController::show)
}

/// Controller echoing its captures, one action per name given
pub(super) fn echo_controller(name: &str, actions: &[&str]) -> ControllerDef<()> {
    actions.iter().fold(ControllerDef::new(name, || ()), |def, action| {
        let tag = action.to_string();
        def.action(*action, move |_: &mut (), params: Params| -> RouterResult<serde_json::Value> {
            Ok(serde_json::json!({ "action": tag, "captures": params.values() }))
        })
    })
}
