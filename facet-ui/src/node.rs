//! Node types for the view tree.

use crate::style::Style;
use crate::text::display_width;

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    /// Fixed size in cells
    Fixed(u16),
    /// Flex grow factor
    Flex(u16),
    /// Auto size based on content
    #[default]
    Auto,
}

/// Horizontal alignment for content within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Layout properties for a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Content alignment
    pub align: Alignment,
    /// Gap between children, in cells (rows) or lines (columns)
    pub gap: u16,
}

impl Layout {
    /// Layout with a fixed width.
    pub fn fixed(width: u16) -> Self {
        Self {
            width: Size::Fixed(width),
            ..Self::default()
        }
    }

    /// Set the alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the gap between children.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }
}

/// A node in the view tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a column node with style and layout
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Wrap a node in a fixed-width box.
    pub fn boxed(self, width: u16, align: Alignment) -> Self {
        Self::Row {
            children: vec![self],
            style: Style::new(),
            layout: Layout::fixed(width).align(align),
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Calculate intrinsic width of this node
    pub fn intrinsic_width(&self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Text { content, .. } => content
                .lines()
                .map(display_width)
                .max()
                .unwrap_or(0) as u16,
            Self::Row {
                children, layout, ..
            } => {
                if let Size::Fixed(w) = layout.width {
                    return w;
                }
                let child_sum: u16 = children.iter().map(|c| c.intrinsic_width()).sum();
                let gaps = layout.gap * children.len().saturating_sub(1) as u16;
                child_sum + gaps
            }
            Self::Column {
                children, layout, ..
            } => {
                if let Size::Fixed(w) = layout.width {
                    return w;
                }
                children
                    .iter()
                    .map(|c| c.intrinsic_width())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Calculate intrinsic height of this node, in lines
    pub fn intrinsic_height(&self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Text { content, .. } => content.lines().count().max(1) as u16,
            Self::Row { children, .. } => children
                .iter()
                .map(|c| c.intrinsic_height())
                .max()
                .unwrap_or(0),
            Self::Column {
                children, layout, ..
            } => {
                let child_sum: u16 = children.iter().map(|c| c.intrinsic_height()).sum();
                let gaps = layout.gap * children.len().saturating_sub(1) as u16;
                child_sum + gaps
            }
        }
    }
}
