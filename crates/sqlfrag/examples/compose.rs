//! Compose a query from optional filters without tracking placeholder
//! indices.

use sqlfrag::{FragResult, Item, frag, join};

fn main() -> FragResult<()> {
    let status = Some("active");
    let min_age = Some(21_i64);

    let mut filters: Vec<Item> = Vec::new();
    if let Some(status) = status {
        filters.push(frag!("status = " {status} "").into());
    }
    if let Some(min_age) = min_age {
        filters.push(frag!("age >= " {min_age} "").into());
    }

    let query = if filters.is_empty() {
        frag!("SELECT id, username FROM users")
    } else {
        let where_clause = join(filters, " AND ")?;
        frag!("SELECT id, username FROM users WHERE " (where_clause) "")
    };

    let report = query.inspect();
    println!("sql:       {}", report.sql);
    println!("statement: {}", report.statement);
    println!("text:      {}", report.text);
    println!("values:    {:?}", report.values);
    Ok(())
}
