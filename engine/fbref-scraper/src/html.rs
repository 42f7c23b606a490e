//! HTML table extraction
//!
//! FBref ships most secondary tables inside HTML comments and unhides them with
//! JavaScript, so commented-out markup that contains a `<table` is parsed as if
//! it were live.

use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;

use crate::error::{Result, ScrapeError};
use crate::types::StatTable;

/// Extract every table in the document, in document order
pub fn parse_tables(html: &str) -> Result<Vec<StatTable>> {
    let table_selector = selector("table")?;
    let head_row_selector = selector("thead > tr")?;
    let body_row_selector = selector("tbody > tr")?;
    let cell_selector = selector("th, td")?;

    let markup = uncomment_tables(html);
    let document = Html::parse_document(&markup);
    let mut tables = Vec::new();

    for table in document.select(&table_selector) {
        let head_rows: Vec<ElementRef> = table.select(&head_row_selector).collect();
        let mut body_rows = table.select(&body_row_selector);

        // Last thead row holds the real labels; the ones above are group captions
        let headers = match head_rows.last() {
            Some(row) => cell_texts(*row, &cell_selector),
            None => match body_rows.next() {
                Some(row) => cell_texts(row, &cell_selector),
                None => continue,
            },
        };

        if headers.is_empty() {
            continue;
        }

        let rows = body_rows.map(|row| cell_texts(row, &cell_selector)).collect();
        tables.push(StatTable::new(headers, rows));
    }

    Ok(tables)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::selector(format!("Failed to create selector '{css}': {e}")))
}

fn cell_texts(row: ElementRef, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

/// Remove comment delimiters around markup that contains a table
fn uncomment_tables(html: &str) -> Cow<'_, str> {
    if !html.contains("<!--") {
        return Cow::Borrowed(html);
    }

    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        let inner = &rest[start + 4..];

        match inner.find("-->") {
            Some(end) => {
                let body = &inner[..end];
                if body.contains("<table") {
                    out.push_str(body);
                } else {
                    out.push_str(&rest[start..start + 4 + end + 3]);
                }
                rest = &inner[end + 3..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}
