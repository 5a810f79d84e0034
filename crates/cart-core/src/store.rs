//! Cart Store
//!
//! Owns the ordered line list, the id counter, and the active edit session.
//! The store has exactly two modes: Idle, where a form submit adds or merges,
//! and Editing, where the same submit saves the pending edit. Every operation
//! runs to completion synchronously; a failed operation leaves the store
//! untouched.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::line::CartLine;
use crate::receipt::Receipt;

/// Validation message shown in the form banner
const INVALID_ITEM_MSG: &str = "Por favor, insira um nome de item válido!";
/// Shown when an edit renames a line onto another line's name
const DUPLICATE_NAME_MSG: &str = "Já existe um item com esse nome no carrinho!";

/// In-memory cart state, one instance per widget lifetime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    /// Cart lines in insertion order; names are unique across the list
    lines: Vec<CartLine>,
    /// Last id handed out; ids are never reused
    next_id: u32,
    /// Id of the line under edit, when a session is active
    editing: Option<u32>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Validate form input, returning the trimmed name
    fn validate(name: &str, quantity: u32) -> CartResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() || quantity < 1 {
            return Err(CartError::Validation(INVALID_ITEM_MSG.to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Add a new line, or merge into an existing line with the same name
    ///
    /// While an edit session is active the submit path lands here too, so
    /// the call is redirected to [`save_edit`](Self::save_edit) instead of
    /// performing a merge. Merging increments the existing line's quantity
    /// and keeps its position; a fresh name appends a new line at the end.
    pub fn add_or_merge(&mut self, name: &str, quantity: u32) -> CartResult<()> {
        if self.editing.is_some() {
            return self.save_edit(name, quantity);
        }
        let name = Self::validate(name, quantity)?;
        match self.lines.iter_mut().find(|line| line.name == name) {
            Some(line) => line.quantity += quantity,
            None => {
                let id = self.fresh_id();
                self.lines.push(CartLine::new(id, name, quantity));
            }
        }
        Ok(())
    }

    /// Open an edit session on the line with the given id
    ///
    /// Returns the line's current name and quantity so the caller can seed
    /// the staging inputs. Unknown ids (a stale row in a filtered view) are
    /// a silent no-op returning `None`.
    pub fn begin_edit(&mut self, id: u32) -> Option<(String, u32)> {
        let line = self.lines.iter().find(|line| line.id == id)?;
        let seed = (line.name.clone(), line.quantity);
        self.editing = Some(id);
        Some(seed)
    }

    /// Overwrite the line under edit and close the session
    ///
    /// Renaming onto another existing line's name is rejected rather than
    /// silently producing a duplicate; the name-uniqueness invariant holds
    /// after every save.
    pub fn save_edit(&mut self, name: &str, quantity: u32) -> CartResult<()> {
        let target = self
            .editing
            .ok_or_else(|| CartError::Validation(INVALID_ITEM_MSG.to_string()))?;
        let name = Self::validate(name, quantity)?;
        if self
            .lines
            .iter()
            .any(|line| line.id != target && line.name == name)
        {
            return Err(CartError::Validation(DUPLICATE_NAME_MSG.to_string()));
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == target) {
            line.name = name;
            line.quantity = quantity;
        }
        self.editing = None;
        Ok(())
    }

    /// Close the edit session without applying anything. Idempotent.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Set a line's quantity directly
    ///
    /// Unchecked on purpose: the per-line number inputs constrain the value
    /// to >= 1 before calling in. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: u32, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line by id; no-op when absent
    ///
    /// Removing the line under edit closes the session, so a stale session
    /// never survives its target.
    pub fn remove_line(&mut self, id: u32) {
        self.lines.retain(|line| line.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
    }

    /// Produce the purchase receipt
    pub fn finalize(&self) -> CartResult<Receipt> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(Receipt::from_lines(&self.lines))
    }

    /// Lines whose name contains `term`, case-insensitive, in cart order
    ///
    /// Pure query: an empty term returns every line.
    pub fn filter(&self, term: &str) -> Vec<CartLine> {
        if term.is_empty() {
            return self.lines.clone();
        }
        self.lines
            .iter()
            .filter(|line| line.matches(term))
            .cloned()
            .collect()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
