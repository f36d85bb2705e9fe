use web_time::Instant;

use tessera_core::{FlexDirection, ViewProperties, ViewType};
use tessera_layout::{
    IntrinsicSizer, LayoutConfig, LayoutError, RootSize, ViewLayout, dimension_pass,
    positioning_pass, sizing_pass,
};

#[derive(Clone, Debug, Default)]
pub struct LayoutMetrics {
    pub nodes: usize,
    pub depth: usize,
    pub dimension_ms: f32,
    pub sizing_ms: f32,
    pub positioning_ms: f32,
}

impl LayoutMetrics {
    pub fn total_ms(&self) -> f32 {
        self.dimension_ms + self.sizing_ms + self.positioning_ms
    }

    /// One-line summary, e.g. for a status bar.
    pub fn summary(&self) -> String {
        [
            format!("nodes: {}", self.nodes),
            format!("depth: {}", self.depth),
            format!(
                "dimension/size/position: {:.2}/{:.2}/{:.2} ms",
                self.dimension_ms, self.sizing_ms, self.positioning_ms
            ),
            format!("total: {:.2} ms", self.total_ms()),
        ]
        .join("  |  ")
    }
}

pub struct Profile<'a> {
    pub layout: ViewLayout<'a>,
    pub metrics: LayoutMetrics,
}

/// Like [`tessera_layout::compute_layout`], timing each pass separately.
pub fn profile<'a>(
    root: &'a ViewProperties,
    root_size: RootSize,
    sizer: &dyn IntrinsicSizer,
    config: &LayoutConfig,
) -> Result<Profile<'a>, LayoutError> {
    root_size.validate()?;

    let start = Instant::now();
    let dimensioned = dimension_pass(root, root_size, sizer);
    let dimensioned_at = Instant::now();
    let sized = sizing_pass(&dimensioned, root_size);
    let sized_at = Instant::now();
    let layout = positioning_pass(sized, root_size, config);
    let positioned_at = Instant::now();

    let ms = |from: Instant, to: Instant| (to - from).as_secs_f32() * 1000.0;
    let metrics = LayoutMetrics {
        nodes: layout.node_count(),
        depth: depth(&layout),
        dimension_ms: ms(start, dimensioned_at),
        sizing_ms: ms(dimensioned_at, sized_at),
        positioning_ms: ms(sized_at, positioned_at),
    };
    log::debug!("{}", metrics.summary());

    Ok(Profile { layout, metrics })
}

fn depth(layout: &ViewLayout<'_>) -> usize {
    1 + layout.children.iter().map(depth).max().unwrap_or(0)
}

fn kind(view: &ViewProperties) -> String {
    match &view.view_type {
        ViewType::View => "view".into(),
        ViewType::AbsoluteLayout => "absolute".into(),
        ViewType::FlexLayout(flex) => match flex.direction {
            FlexDirection::Row => "flex(row)".into(),
            FlexDirection::Column => "flex(column)".into(),
        },
        ViewType::Text { text, .. } => format!("text {text:?}"),
        ViewType::Image { .. } => "image".into(),
        ViewType::Video { .. } => "video".into(),
        ViewType::VideoEmbed { .. } => "video_embed".into(),
    }
}

/// Indented outline of a layout tree, one view per line: kind, id, position
/// within the parent and size.
pub fn dump(layout: &ViewLayout<'_>) -> String {
    fn walk(l: &ViewLayout<'_>, indent: usize, lines: &mut Vec<String>) {
        let mut line = format!("{:indent$}{}", "", kind(l.view), indent = indent * 2);
        if let Some(id) = &l.view.id {
            line.push_str(&format!(" #{id}"));
        }
        line.push_str(&format!(
            " ({:.1}, {:.1}) {:.1}x{:.1}",
            l.position.x, l.position.y, l.size.width, l.size.height
        ));
        let t = &l.transform;
        if !t.is_identity() {
            line.push_str(&format!(
                " [translate ({:.1}, {:.1}) scale ({:.2}, {:.2}) rotate {:.3}]",
                t.translate_x, t.translate_y, t.scale_x, t.scale_y, t.rotate
            ));
        }
        lines.push(line);
        for c in &l.children {
            walk(c, indent + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(layout, 0, &mut lines);
    lines.join("\n")
}
