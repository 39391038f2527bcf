use serde::{Deserialize, Serialize};

use crate::error::{MasonryError, Result};
use crate::geometry::{Rect, Size};
use crate::layout::source::ItemSource;

/// Metadata describing one grid entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
    /// Featured entries span the full row width instead of one column.
    pub is_featured: bool,
    /// Image height divided by image width.
    pub aspect_ratio: f32,
    /// Space below the image consumed by labels, in points.
    pub non_image_height: f32,
}

impl GridItem {
    pub const fn normal(aspect_ratio: f32, non_image_height: f32) -> Self {
        Self {
            is_featured: false,
            aspect_ratio,
            non_image_height,
        }
    }

    pub const fn featured(aspect_ratio: f32, non_image_height: f32) -> Self {
        Self {
            is_featured: true,
            aspect_ratio,
            non_image_height,
        }
    }
}

/// Geometry knobs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasonryConfig {
    pub container_width: f32,
    pub number_of_columns: u16,
    pub side_padding: f32,
    pub column_spacing: f32,
    /// Vertical space reserved above the first row, below any header.
    pub top_offset: f32,
}

impl MasonryConfig {
    pub fn new(container_width: f32) -> Self {
        Self {
            container_width,
            number_of_columns: 2,
            side_padding: 8.0,
            column_spacing: 8.0,
            top_offset: 0.0,
        }
    }

    pub fn with_columns(mut self, number_of_columns: u16) -> Self {
        self.number_of_columns = number_of_columns;
        self
    }

    pub fn with_side_padding(mut self, side_padding: f32) -> Self {
        self.side_padding = side_padding;
        self
    }

    pub fn with_column_spacing(mut self, column_spacing: f32) -> Self {
        self.column_spacing = column_spacing;
        self
    }

    pub fn with_top_offset(mut self, top_offset: f32) -> Self {
        self.top_offset = top_offset;
        self
    }

    /// Width of a single column after side padding and inter-column gaps.
    pub fn column_width(&self) -> f32 {
        let gaps = self.column_spacing * self.number_of_columns.saturating_sub(1) as f32;
        let columns_width = self.container_width - self.side_padding * 2.0 - gaps;
        columns_width / f32::from(self.number_of_columns.max(1))
    }

    /// Width of a featured entry spanning every column.
    pub fn span_width(&self) -> f32 {
        self.container_width - self.side_padding * 2.0
    }

    fn x_offset_for_column(&self, column: usize) -> f32 {
        self.side_padding + (self.column_width() + self.column_spacing) * column as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.number_of_columns == 0 {
            return Err(MasonryError::ZeroColumns);
        }
        if !self.container_width.is_finite() || self.column_width() <= 0.0 {
            return Err(MasonryError::InvalidContainerWidth(self.container_width));
        }
        Ok(())
    }
}

/// Complete output of one layout pass, placements in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSolution {
    pub header: Option<Rect>,
    pub placements: Vec<Rect>,
    pub content_size: Size,
}

/// Pack every item of `source` into absolute placements.
///
/// Shortest-column-first for normal items (ties resolve to the lowest column
/// index), full-width placement for featured items, which also reset every
/// column to a common baseline. Column state lives only for the duration of
/// the pass.
///
/// With no items and no header the content height is zero; callers that need
/// a minimum extent substitute their own bounds.
pub fn solve<S>(source: &S, config: &MasonryConfig) -> Result<LayoutSolution>
where
    S: ItemSource + ?Sized,
{
    config.validate()?;

    let count = source.len();
    for index in 0..count {
        let item = source.item(index);
        check_metric(index, "aspect_ratio", item.aspect_ratio)?;
        check_metric(index, "non_image_height", item.non_image_height)?;
    }

    let column_count = usize::from(config.number_of_columns);
    let column_width = config.column_width();
    let mut columns = vec![0.0f32; column_count];
    // Header offset consumption is tracked per column so a featured first
    // item pushes the offset to every column at once.
    let mut offset_pending = vec![true; column_count];

    let header = source
        .header_height()
        .map(|height| Rect::new(0.0, 0.0, config.container_width, height));
    let mut y_offset = config.top_offset;
    if let Some(header) = &header {
        y_offset += header.height;
    }

    let mut placements = Vec::with_capacity(count);
    for index in 0..count {
        let item = source.item(index);

        let rect = if item.is_featured {
            let width = config.span_width();
            let height = item.aspect_ratio * width + item.non_image_height;
            let top_padding = if offset_pending.iter().all(|pending| *pending) {
                y_offset
            } else {
                0.0
            };
            let y = tallest(&columns) + top_padding;

            let baseline = y + height + config.column_spacing;
            for column in columns.iter_mut() {
                *column = baseline;
            }
            for pending in offset_pending.iter_mut() {
                *pending = false;
            }

            Rect::new(config.side_padding, y, width, height)
        } else {
            let column = shortest_column(&columns);
            let height = item.aspect_ratio * column_width + item.non_image_height;
            let top_padding = if offset_pending[column] { y_offset } else { 0.0 };
            let y = columns[column] + top_padding;

            offset_pending[column] = false;
            columns[column] = y + height + config.column_spacing;

            Rect::new(config.x_offset_for_column(column), y, column_width, height)
        };

        placements.push(rect);
    }

    let content_size = Size::new(config.container_width, content_height(&header, &placements));
    Ok(LayoutSolution {
        header,
        placements,
        content_size,
    })
}

fn check_metric(index: usize, field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MasonryError::InvalidItem {
            index,
            field,
            value,
        });
    }
    Ok(())
}

fn shortest_column(columns: &[f32]) -> usize {
    let mut shortest = 0;
    for (index, height) in columns.iter().enumerate().skip(1) {
        if *height < columns[shortest] {
            shortest = index;
        }
    }
    shortest
}

fn tallest(columns: &[f32]) -> f32 {
    columns.iter().fold(0.0f32, |acc, height| acc.max(*height))
}

fn content_height(header: &Option<Rect>, placements: &[Rect]) -> f32 {
    let mut max_y = header.map(|rect| rect.bottom()).unwrap_or(0.0);
    for rect in placements {
        max_y = max_y.max(rect.bottom());
    }
    max_y
}
