//! Search results table.

use tera::{Context, Tera};

use crate::domain::customer::CustomerSummary;

/// Column labels, in the order of [`CustomerSummary::cells`].
pub const COLUMNS: [&str; 11] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Subscribed",
    "Address 1",
    "Address 2",
    "City",
    "Province",
    "Country",
    "Zip",
];

const TABLE_TEMPLATE: &str = r#"<table class="table-striped">
<tr>{% for label in columns %}<th style="width:10%">{{ label }}</th>{% endfor %}</tr>
{% for row in rows %}<tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{% endfor %}</table>
"#;

/// Results container. Each search overwrites the previous listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsTable {
    rows: Vec<Vec<String>>,
    rendered: bool,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the container, then fills it with one row per summary.
    pub fn set(&mut self, summaries: &[CustomerSummary]) {
        self.rows = summaries.iter().map(CustomerSummary::cells).collect();
        self.rendered = true;
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.rendered = false;
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Whether a search result currently occupies the container.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Renders the container contents; empty until the first search lands.
    pub fn to_html(&self) -> Result<String, tera::Error> {
        if !self.rendered {
            return Ok(String::new());
        }
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| ammonia::clean(cell)).collect())
            .collect();
        let mut context = Context::new();
        context.insert("columns", &COLUMNS);
        context.insert("rows", &rows);
        Tera::one_off(TABLE_TEMPLATE, &context, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, firstname: &str) -> CustomerSummary {
        CustomerSummary {
            id: Some(id),
            firstname: firstname.to_string(),
            ..CustomerSummary::default()
        }
    }

    #[test]
    fn renders_one_header_and_one_row_per_result() {
        let mut table = ResultsTable::new();
        table.set(&[summary(1, "Ann"), summary(2, "Bob")]);

        let html = table.to_html().unwrap();

        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<th").count(), 11);
        assert_eq!(html.matches("<td>").count(), 22);
        let ann = html.find("Ann").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(ann < bob);
    }

    #[test]
    fn new_search_replaces_previous_rows() {
        let mut table = ResultsTable::new();
        table.set(&[summary(1, "Ann"), summary(2, "Bob")]);
        table.set(&[summary(3, "Cid")]);

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0][1], "Cid");
    }

    #[test]
    fn empty_listing_still_renders_header() {
        let mut table = ResultsTable::new();
        table.set(&[]);

        let html = table.to_html().unwrap();

        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("First Name"));
    }

    #[test]
    fn cell_values_are_sanitized() {
        let mut table = ResultsTable::new();
        table.set(&[
            summary(1, "<script>alert(1)</script>Ann"),
            CustomerSummary {
                email: "ann/lee@example.com".to_string(),
                address1: "1 Main St & Co".to_string(),
                ..CustomerSummary::default()
            },
        ]);

        let html = table.to_html().unwrap();

        assert!(!html.contains("script"));
        assert!(html.contains("<td>Ann</td>"));
        assert!(html.contains("<td>ann/lee@example.com</td>"));
        assert!(html.contains("<td>1 Main St &amp; Co</td>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn untouched_container_renders_nothing() {
        assert_eq!(ResultsTable::new().to_html().unwrap(), "");
    }
}
