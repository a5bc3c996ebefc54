//! Load state for paged list views (courses, the student's comments).

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use reviews::Paged;

use crate::net::api::ApiError;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub page: Option<Paged<T>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { page: None, loading: false, error: None }
    }
}

impl<T> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetched page, or keep the previous one and record the error.
    pub fn finish_load(&mut self, result: Result<Paged<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(page) => self.page = Some(page),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        self.page.as_ref().map_or(&[], |p| p.items.as_slice())
    }
}
