//! Multi-row INSERT built with `bulk`.

use sqlfrag::{FragResult, bind, bulk, frag};

fn main() -> FragResult<()> {
    let rows = vec![
        vec![bind("alice"), bind("alice@example.com")],
        vec![bind("bob"), bind("bob@example.com")],
    ];
    let values = bulk(rows, ", ")?;
    let insert = frag!("INSERT INTO users (username, email) VALUES " (values) " RETURNING id");

    println!("{}", insert.text());
    println!("params: {}", insert.params_ref().len());
    Ok(())
}
