// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text tables and notice lines.

use colored::Colorize;
use shelfsense_api::{Category, Product, ProductShelf, RestockTask, Shelf};
use shelfsense_core::{Notice, NoticeLevel};

/// A record that renders as one table row.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_else(|| "-".to_string())
}

impl Tabular for Product {
    fn headers() -> &'static [&'static str] {
        &["ID", "SKU", "NAME", "CATEGORY", "PACKAGE", "UNIT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.product_id.to_string(),
            self.stock_keeping_unit.clone(),
            self.product_name.clone(),
            opt(&self.category_id),
            opt(&self.package_size),
            opt(&self.unit),
        ]
    }
}

impl Tabular for Category {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.category_name.clone(),
            opt(&self.description),
        ]
    }
}

impl Tabular for Shelf {
    fn headers() -> &'static [&'static str] {
        &["ID", "CODE", "STORE", "CATEGORY", "LOCATION", "CAPACITY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.shelf_id.to_string(),
            self.shelf_code.clone(),
            opt(&self.store_id),
            opt(&self.category_id),
            opt(&self.location_description),
            opt(&self.capacity),
        ]
    }
}

impl Tabular for ProductShelf {
    fn headers() -> &'static [&'static str] {
        &["ID", "PRODUCT", "SHELF", "QUANTITY", "LAST RESTOCKED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.product_shelf_id.to_string(),
            self.product_id.to_string(),
            self.shelf_id.to_string(),
            self.quantity.to_string(),
            opt(&self.last_restocked_at),
        ]
    }
}

impl Tabular for RestockTask {
    fn headers() -> &'static [&'static str] {
        &["ID", "PRODUCT", "SHELF", "QUANTITY", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.task_id.to_string(),
            opt(&self.product_id),
            opt(&self.shelf_id),
            opt(&self.quantity),
            self.status.clone(),
        ]
    }
}

/// Formats `items` as left-aligned columns, header first.
pub fn table<'a, T: Tabular + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    let headers = T::headers();
    let rows: Vec<Vec<String>> = items.into_iter().map(Tabular::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(headers.iter().map(|h| h.to_string()).collect()));
    lines.extend(rows.into_iter().map(format_line));
    lines
}

pub fn print_table<'a, T: Tabular + 'a>(items: impl IntoIterator<Item = &'a T>, use_color: bool) {
    let lines = table(items);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 && use_color {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
    if lines.len() == 1 {
        println!("(no records)");
    }
}

/// Prints notices to stderr so stdout stays pipeable.
pub fn print_notices(notices: &[Notice], use_color: bool) {
    for notice in notices {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "fail",
        };
        if use_color {
            let tag = match notice.level {
                NoticeLevel::Success => tag.green(),
                NoticeLevel::Info => tag.cyan(),
                NoticeLevel::Warning => tag.yellow(),
                NoticeLevel::Error => tag.red(),
            };
            eprintln!("[{tag}] {}: {}", notice.title.bold(), notice.message);
        } else {
            eprintln!("[{tag}] {}: {}", notice.title, notice.message);
        }
    }
}
