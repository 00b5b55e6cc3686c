//! Lazy pagination over collection endpoints.
//!
//! A [`Cursor`] wraps a template [`Request`] for a collection endpoint and
//! fetches pages on demand. Each page is one execution of a copy of the
//! template with the previous page's `next_cursor` token sent as the
//! `cursor` parameter. Items are decoded into resources as their page
//! arrives and then yielded one by one without further network calls.
//!
//! A cursor moves through three states:
//!
//! - [`CursorState::Fresh`]: nothing fetched yet
//! - [`CursorState::MidPage`]: a page is buffered, or a next page is known
//! - [`CursorState::Exhausted`]: terminal, no items and no network calls
//!
//! Cursors are forward-only: a page is never fetched twice, and items come
//! out in the order the server sent them.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use serde_json::Value;

use crate::rest::context::Context;
use crate::rest::errors::ResourceError;
use crate::rest::request::Request;
use crate::rest::resource::Resource;

/// Query parameter carrying the pagination token.
pub const CURSOR_PARAM: &str = "cursor";

/// Where a [`Cursor`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// No page has been fetched.
    Fresh,
    /// A page is buffered or another page is available.
    MidPage,
    /// Every item has been yielded; nothing more will be fetched.
    Exhausted,
}

/// A lazy, forward-only sequence of resources from a paginated endpoint.
///
/// `Cursor` implements [`Iterator`] with `Item = Result<R, ResourceError>`.
/// A failed page fetch is yielded once as an error, after which the cursor
/// is exhausted.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::rest::{Params, Resource};
/// use twitter_ads::rest::resources::Account;
///
/// let accounts = Account::all(&client.context(), Params::new().set("count", 2))?;
/// for account in accounts {
///     let account = account?;
///     println!("{}", account.id().unwrap_or_default());
/// }
/// ```
#[derive(Debug)]
pub struct Cursor<R> {
    context: Context,
    request: Request,
    buffer: VecDeque<R>,
    next_token: Option<String>,
    state: CursorState,
    fetch_count: usize,
    total_count: Option<u64>,
}

impl<R: Resource> Cursor<R> {
    /// Creates a fresh cursor. No request is made until the first item is
    /// requested.
    #[must_use]
    pub const fn new(context: Context, request: Request) -> Self {
        Self {
            context,
            request,
            buffer: VecDeque::new(),
            next_token: None,
            state: CursorState::Fresh,
            fetch_count: 0,
            total_count: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Returns `true` once the cursor is exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Returns the token of the next unfetched page.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Returns how many page requests have been made.
    #[must_use]
    pub const fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    /// Returns the collection size reported by the server, once a page has
    /// been fetched.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Returns the number of decoded items waiting to be yielded.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Fetches the next page if the buffer is empty.
    ///
    /// Does nothing when items are still buffered or the cursor is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure. The cursor is exhausted
    /// afterwards.
    pub fn advance(&mut self) -> Result<(), ResourceError> {
        if !self.buffer.is_empty() || self.state == CursorState::Exhausted {
            return Ok(());
        }
        if self.state == CursorState::MidPage && self.next_token.is_none() {
            self.transition(CursorState::Exhausted);
            return Ok(());
        }

        self.fetch_page().map_err(|error| {
            self.next_token = None;
            self.transition(CursorState::Exhausted);
            error
        })
    }

    fn fetch_page(&mut self) -> Result<(), ResourceError> {
        let mut request = self.request.clone();
        if let Some(token) = &self.next_token {
            request = request.with_param(CURSOR_PARAM, token);
        }

        let result = request.perform();
        self.fetch_count += 1;
        let response = result?;

        let items = match response.data() {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| R::from_value(&self.context, item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(object @ Value::Object(_)) => vec![R::from_value(&self.context, object)?],
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(ResourceError::Decode {
                    resource: R::NAME,
                    message: format!("expected a list of objects, found {other}"),
                });
            }
        };

        self.next_token = response.pagination_token().map(ToString::to_string);
        if let Some(total) = response.total_count() {
            self.total_count = Some(total);
        }
        tracing::trace!(
            resource = R::NAME,
            page = self.fetch_count,
            items = items.len(),
            has_next = self.next_token.is_some(),
            "fetched page"
        );
        self.buffer.extend(items);

        if self.buffer.is_empty() && self.next_token.is_none() {
            self.transition(CursorState::Exhausted);
        } else {
            self.transition(CursorState::MidPage);
        }
        Ok(())
    }

    fn transition(&mut self, state: CursorState) {
        if self.state != state {
            tracing::trace!(resource = R::NAME, from = ?self.state, to = ?state, "cursor state");
            self.state = state;
        }
    }
}

impl<R: Resource> Iterator for Cursor<R> {
    type Item = Result<R, ResourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.is_empty() {
            if self.state == CursorState::Exhausted {
                return None;
            }
            if let Err(error) = self.advance() {
                return Some(Err(error));
            }
        }

        let item = self.buffer.pop_front();
        if self.buffer.is_empty() && self.next_token.is_none() {
            self.transition(CursorState::Exhausted);
        }
        item.map(Ok)
    }
}

impl<R: Resource> FusedIterator for Cursor<R> {}
