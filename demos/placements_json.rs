//! Prints a solved masonry layout as JSON.
//!
//! ```bash
//! cargo run --example placements_json
//! ```

use masonry_mvp::{GridItem, HeaderedSource, MasonryConfig, solve};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let items = vec![
        GridItem::featured(0.5, 0.0),
        GridItem::normal(1.0, 20.0),
        GridItem::normal(0.5, 20.0),
        GridItem::normal(0.75, 40.0),
        GridItem::normal(1.33, 20.0),
    ];

    let config = MasonryConfig::new(375.0).with_top_offset(4.0);
    let source = HeaderedSource::new(items, 44.0);
    let solution = solve(&source, &config)?;

    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}
