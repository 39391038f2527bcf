//! Masonry catalog demo.
//!
//! Renders the placements of a fixture ad list as outlined boxes scaled to
//! the terminal, re-solving the layout whenever the window resizes.
//!
//! ```bash
//! cargo run --example ad_catalog
//! ```
//!
//! Press `q` to quit. A JSON-lines log of layout activity is written to
//! `target/ad_catalog.log`.

use std::io::{Write, stdout};
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use masonry_mvp::logging::json_kv;
use masonry_mvp::{
    FileSink, GridItem, HeaderedSource, ImageInfo, ImageStore, LabelMetrics, LayoutMetrics,
    LayoutSignature, LayoutSolution, LogLevel, Logger, MasonryConfig, MemoryImageStore,
    PlacementRegistry, Rect, logging, solve,
};

const LOG_TARGET: &str = "demo::ad_catalog";
// Terminal cells are roughly twice as tall as wide; squash the y axis so the
// boxes keep believable proportions.
const VERTICAL_SCALE: f32 = 0.5;
const HEADER_HEIGHT: f32 = 6.0;

struct AdFixture {
    title: &'static str,
    image_path: &'static str,
    is_featured: bool,
}

const FIXTURES: &[AdFixture] = &[
    AdFixture {
        title: "Waterfront cabin, sleeps six",
        image_path: "ads/cabin.jpg",
        is_featured: true,
    },
    AdFixture {
        title: "Vintage dining table, solid oak",
        image_path: "ads/table.jpg",
        is_featured: false,
    },
    AdFixture {
        title: "City bike",
        image_path: "ads/bike.jpg",
        is_featured: false,
    },
    AdFixture {
        title: "Mid-century armchair with original upholstery",
        image_path: "ads/armchair.jpg",
        is_featured: false,
    },
    AdFixture {
        title: "Sailing dinghy, trailer included",
        image_path: "ads/dinghy.jpg",
        is_featured: false,
    },
    AdFixture {
        title: "Season tickets, east stand",
        image_path: "ads/tickets.jpg",
        is_featured: true,
    },
    AdFixture {
        title: "Record player",
        image_path: "ads/player.jpg",
        is_featured: false,
    },
    AdFixture {
        title: "Houseplants, assorted sizes",
        image_path: "ads/plants.jpg",
        is_featured: false,
    },
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(FileSink::new("target/ad_catalog.log", 64 * 1024)?)
        .with_min_level(LogLevel::Debug);
    let mut metrics = LayoutMetrics::new();
    let started = Instant::now();

    let mut images = seeded_image_store();
    let items = build_items(&mut images);

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut out, &logger, &mut metrics, &items);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    let snapshot = metrics.snapshot(started.elapsed());
    logger.log_event(snapshot.to_log_event(LOG_TARGET))?;
    println!(
        "{} layout passes over {} placements, log at target/ad_catalog.log",
        snapshot.passes, snapshot.items_placed
    );

    result
}

fn run(
    out: &mut impl Write,
    logger: &Logger,
    metrics: &mut LayoutMetrics,
    items: &[GridItem],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut registry = PlacementRegistry::new();
    let (mut cols, mut rows) = terminal::size()?;

    loop {
        let config = config_for(cols);
        let source = HeaderedSource::new(items, HEADER_HEIGHT);
        let signature = LayoutSignature::of(&source, &config);

        if registry.needs_layout(&signature) {
            let solution = solve(&source, &config)?;
            let featured = items.iter().filter(|item| item.is_featured).count();
            metrics.record_pass(solution.placements.len(), featured);
            metrics.record_invalidation();
            logger.log_with_fields(
                LogLevel::Debug,
                LOG_TARGET,
                "layout_pass",
                logging::fields_from([
                    json_kv("container_width", config.container_width),
                    json_kv("content_height", solution.content_size.height),
                ]),
            )?;
            registry.sync(&solution, signature);
            draw(out, &solution, rows)?;
            registry.take_dirty();
        }

        match event::read()? {
            Event::Resize(new_cols, new_rows) => {
                cols = new_cols;
                rows = new_rows;
            }
            Event::Key(key) => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.code == KeyCode::Char('q') || ctrl_c {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}

fn seeded_image_store() -> MemoryImageStore {
    let mut store = MemoryImageStore::new(32);
    store.insert("ads/cabin.jpg", ImageInfo::new(1200.0, 400.0));
    store.insert("ads/table.jpg", ImageInfo::new(800.0, 600.0));
    store.insert("ads/bike.jpg", ImageInfo::new(800.0, 500.0));
    store.insert("ads/armchair.jpg", ImageInfo::new(600.0, 700.0));
    store.insert("ads/dinghy.jpg", ImageInfo::new(900.0, 500.0));
    store.insert("ads/tickets.jpg", ImageInfo::new(1400.0, 500.0));
    store.insert("ads/player.jpg", ImageInfo::new(700.0, 600.0));
    store.insert("ads/plants.jpg", ImageInfo::new(600.0, 800.0));
    store
}

fn build_items(images: &mut impl ImageStore) -> Vec<GridItem> {
    // Cell-based metrics: one point per cell, titles wrap onto two rows.
    let labels = LabelMetrics {
        char_width: 1.0,
        line_height: 1.0,
        max_lines: 2,
    };
    let column_width = config_for(terminal::size().map(|(c, _)| c).unwrap_or(80)).column_width();

    FIXTURES
        .iter()
        .map(|fixture| {
            let ratio = images
                .get(fixture.image_path)
                .map(|info| info.aspect_ratio() * VERTICAL_SCALE)
                .unwrap_or(0.3);
            let label_height = labels.non_image_height(fixture.title, column_width);
            GridItem {
                is_featured: fixture.is_featured,
                aspect_ratio: ratio,
                non_image_height: label_height + 1.0,
            }
        })
        .collect()
}

fn config_for(cols: u16) -> MasonryConfig {
    MasonryConfig::new(f32::from(cols.max(20)))
        .with_columns(if cols >= 100 { 3 } else { 2 })
        .with_side_padding(2.0)
        .with_column_spacing(2.0)
}

fn draw(
    out: &mut impl Write,
    solution: &LayoutSolution,
    rows: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    execute!(out, terminal::Clear(terminal::ClearType::All))?;

    if let Some(header) = &solution.header {
        draw_box(out, header, "masonry catalog - press q to quit", rows)?;
    }
    for (index, rect) in solution.placements.iter().enumerate() {
        let title = FIXTURES[index].title;
        draw_box(out, rect, title, rows)?;
    }
    out.flush()?;
    Ok(())
}

fn draw_box(
    out: &mut impl Write,
    rect: &Rect,
    title: &str,
    rows: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let x = rect.x.round() as u16;
    let y = rect.y.round() as u16;
    let width = (rect.width.round() as u16).max(2);
    let height = (rect.height.round() as u16).max(2);

    for row in 0..height {
        let screen_row = y.saturating_add(row);
        if screen_row >= rows {
            break;
        }

        let line = if row == 0 || row == height - 1 {
            format!("+{}+", "-".repeat(usize::from(width) - 2))
        } else if row == 1 {
            let budget = usize::from(width).saturating_sub(2);
            let mut label: String = title.chars().take(budget).collect();
            while masonry_mvp::display_width(&label) > budget {
                label.pop();
            }
            format!("|{label:<budget$}|")
        } else {
            format!("|{}|", " ".repeat(usize::from(width) - 2))
        };

        execute!(out, cursor::MoveTo(x, screen_row))?;
        write!(out, "{line}")?;
    }
    Ok(())
}
