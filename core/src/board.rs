use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// All categories and clues of one game, columns are categories and rows are clue indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of rows, taken from the tallest category.
    pub fn clue_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_cell(&self, cell: CellId) -> Result<CellId> {
        match self.categories.get(cell.column) {
            Some(category) if cell.row < category.clues.len() => Ok(cell),
            _ => Err(GameError::InvalidCell),
        }
    }

    pub fn clue_at(&self, cell: CellId) -> Option<&Clue> {
        self.categories.get(cell.column)?.clues.get(cell.row)
    }

    pub fn content_at(&self, cell: CellId) -> Option<CellContent<'_>> {
        self.clue_at(cell).map(Clue::content)
    }

    /// Applies one click to the clue at `cell`.
    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome> {
        let cell = self.validate_cell(cell)?;
        let clue = &mut self.categories[cell.column].clues[cell.row];
        let outcome = clue.reveal();
        log::trace!("{} now {:?}", cell, clue.state());
        Ok(outcome)
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .all(|clue| clue.state().is_terminal())
    }

    /// Cells of one row in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (CellId, Option<&Clue>)> {
        (0..self.categories.len()).map(move |column| {
            let cell = CellId::new(row, column);
            (cell, self.clue_at(cell))
        })
    }
}
