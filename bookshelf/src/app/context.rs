//! Application context and services

use super::{Author, Book};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Application context handed to every controller instance
#[derive(Clone, Default)]
pub struct AppContext {
    /// Book and author storage
    pub library: Library,
    /// Submitted form fields for the current request
    pub form: FormData,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fields of the form being submitted, as the host would expose them
#[derive(Clone, Default)]
pub struct FormData {
    fields: Arc<Mutex<BTreeMap<String, String>>>,
}

impl FormData {
    /// Replace the submitted fields
    pub fn set(&self, fields: impl IntoIterator<Item = (String, String)>) {
        if let Ok(mut current) = self.fields.lock() {
            *current = fields.into_iter().collect();
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.fields.lock().ok()?.get(name).cloned()
    }
}

/// Library service (simulated in-memory store)
#[derive(Clone)]
pub struct Library {
    books: Arc<Mutex<Vec<Book>>>,
    authors: Arc<Mutex<Vec<Author>>>,
    next_id: Arc<Mutex<u32>>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Arc::new(Mutex::new(vec![
                Book::new(1, "Dune", Some(1)),
                Book::new(2, "The Left Hand of Darkness", Some(2)),
            ])),
            authors: Arc::new(Mutex::new(vec![
                Author::new(1, "Frank Herbert"),
                Author::new(2, "Ursula K. Le Guin"),
            ])),
            next_id: Arc::new(Mutex::new(3)),
        }
    }

    fn next_id(&self) -> Option<u32> {
        let mut next_id = self.next_id.lock().ok()?;
        let id = *next_id;
        *next_id += 1;
        Some(id)
    }

    pub fn get_book(&self, id: u32) -> Option<Book> {
        self.books.lock().ok()?.iter().find(|b| b.id == id).cloned()
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.books
            .lock()
            .ok()
            .map(|b| b.clone())
            .unwrap_or_default()
    }

    pub fn books_by(&self, author_id: u32) -> Vec<Book> {
        self.list_books()
            .into_iter()
            .filter(|b| b.author_id == Some(author_id))
            .collect()
    }

    pub fn create_book(&self, title: &str, author_id: Option<u32>) -> Option<Book> {
        let book = Book::new(self.next_id()?, title, author_id);
        self.books.lock().ok()?.push(book.clone());
        Some(book)
    }

    pub fn update_book(&self, id: u32, title: Option<&str>) -> Option<Book> {
        let mut books = self.books.lock().ok()?;
        let book = books.iter_mut().find(|b| b.id == id)?;
        if let Some(t) = title {
            book.title = t.to_string();
        }
        Some(book.clone())
    }

    pub fn delete_book(&self, id: u32) -> bool {
        self.books
            .lock()
            .ok()
            .map(|mut books| {
                let len = books.len();
                books.retain(|b| b.id != id);
                books.len() < len
            })
            .unwrap_or(false)
    }

    pub fn get_author(&self, id: u32) -> Option<Author> {
        self.authors.lock().ok()?.iter().find(|a| a.id == id).cloned()
    }

    pub fn list_authors(&self) -> Vec<Author> {
        self.authors
            .lock()
            .ok()
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    pub fn create_author(&self, name: &str) -> Option<Author> {
        let author = Author::new(self.next_id()?, name);
        self.authors.lock().ok()?.push(author.clone());
        Some(author)
    }

    pub fn update_author(&self, id: u32, name: Option<&str>) -> Option<Author> {
        let mut authors = self.authors.lock().ok()?;
        let author = authors.iter_mut().find(|a| a.id == id)?;
        if let Some(n) = name {
            author.name = n.to_string();
        }
        Some(author.clone())
    }

    pub fn delete_author(&self, id: u32) -> bool {
        self.authors
            .lock()
            .ok()
            .map(|mut authors| {
                let len = authors.len();
                authors.retain(|a| a.id != id);
                authors.len() < len
            })
            .unwrap_or(false)
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
