//! Text rendering for node trees.
//!
//! Lays a [`Node`] tree out into terminal lines: rows place their children
//! side by side (fixed widths honored, flex children sharing the leftover),
//! columns stack children. Every returned line is padded to the layout width
//! so sibling cells stay aligned regardless of content.

use crossterm::style::{Attribute, Stylize};

use crate::node::{Alignment, Layout, Node, Size};
use crate::style::Style;
use crate::text::pad_to_width;

/// Render a node tree to plain text lines at its intrinsic width.
pub fn render_plain(node: &Node) -> Vec<String> {
    render_node(node, node.intrinsic_width(), Alignment::Left, false)
}

/// Render a node tree to plain text lines at the given width.
pub fn render_plain_to_width(node: &Node, width: u16) -> Vec<String> {
    render_node(node, width, Alignment::Left, false)
}

/// Render a node tree to ANSI-styled lines at its intrinsic width.
///
/// Styling wraps already-padded text, so styled lines concatenate without
/// disturbing column alignment.
pub fn render_ansi(node: &Node) -> Vec<String> {
    render_node(node, node.intrinsic_width(), Alignment::Left, true)
}

fn render_node(node: &Node, width: u16, align: Alignment, styled: bool) -> Vec<String> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text { content, style } => render_text(content, style, width, align, styled),
        Node::Row {
            children,
            style,
            layout,
        } => render_row(children, style, layout, width, styled),
        Node::Column {
            children,
            style,
            layout,
        } => render_column(children, style, layout, width, styled),
    }
}

fn render_text(
    content: &str,
    style: &Style,
    width: u16,
    align: Alignment,
    styled: bool,
) -> Vec<String> {
    let lines: Vec<&str> = if content.is_empty() {
        vec![""]
    } else {
        content.lines().collect()
    };

    lines
        .into_iter()
        .map(|line| {
            let padded = pad_to_width(line, width as usize, align);
            if styled {
                apply_style(padded, style)
            } else {
                padded
            }
        })
        .collect()
}

fn render_row(
    children: &[Node],
    _style: &Style,
    layout: &Layout,
    width: u16,
    styled: bool,
) -> Vec<String> {
    if children.is_empty() {
        return Vec::new();
    }

    // A lone text child stretches to the row's width, so fixed-width boxes
    // pad (or clip) their content instead of collapsing to it.
    let widths = if let [Node::Text { .. } | Node::Empty] = children {
        vec![width]
    } else {
        child_widths(children, layout, width)
    };
    let rendered: Vec<Vec<String>> = children
        .iter()
        .zip(&widths)
        .map(|(child, w)| render_node(child, *w, layout.align, styled))
        .collect();

    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    let gap = " ".repeat(layout.gap as usize);

    (0..height)
        .map(|line| {
            rendered
                .iter()
                .zip(&widths)
                .map(|(lines, w)| {
                    lines
                        .get(line)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(*w as usize))
                })
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect()
}

fn render_column(
    children: &[Node],
    _style: &Style,
    layout: &Layout,
    width: u16,
    styled: bool,
) -> Vec<String> {
    let width = match layout.width {
        Size::Fixed(w) => w,
        _ => width,
    };

    let mut out = Vec::new();
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            for _ in 0..layout.gap {
                out.push(" ".repeat(width as usize));
            }
        }
        out.extend(render_node(child, width, layout.align, styled));
    }
    out
}

/// Resolve each child's width: fixed widths as-is, auto children at their
/// intrinsic width, flex children sharing whatever is left.
fn child_widths(children: &[Node], layout: &Layout, total: u16) -> Vec<u16> {
    let declared: Vec<Size> = children
        .iter()
        .map(|child| match child {
            Node::Row { layout, .. } | Node::Column { layout, .. } => layout.width,
            _ => Size::Auto,
        })
        .collect();

    let gaps = layout.gap * children.len().saturating_sub(1) as u16;
    let fixed_sum: u16 = declared
        .iter()
        .zip(children)
        .map(|(size, child)| match size {
            Size::Fixed(w) => *w,
            Size::Auto => child.intrinsic_width(),
            Size::Flex(_) => 0,
        })
        .sum();
    let flex_total: u16 = declared
        .iter()
        .map(|size| match size {
            Size::Flex(weight) => *weight,
            _ => 0,
        })
        .sum();
    let leftover = total.saturating_sub(fixed_sum + gaps);

    declared
        .iter()
        .zip(children)
        .map(|(size, child)| match size {
            Size::Fixed(w) => *w,
            Size::Auto => child.intrinsic_width(),
            Size::Flex(weight) => {
                if flex_total == 0 {
                    0
                } else {
                    leftover * weight / flex_total
                }
            }
        })
        .collect()
}

fn apply_style(text: String, style: &Style) -> String {
    if style.is_plain() {
        return text;
    }
    let mut styled = text.stylize();
    if let Some(fg) = style.fg {
        styled = styled.with(fg);
    }
    if let Some(bg) = style.bg {
        styled = styled.on(bg);
    }
    if style.bold {
        styled = styled.attribute(Attribute::Bold);
    }
    if style.dim {
        styled = styled.attribute(Attribute::Dim);
    }
    if style.underline {
        styled = styled.attribute(Attribute::Underlined);
    }
    styled.to_string()
}
