use crate::{LayoutProperties, StyleProperties};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

/// Cross-axis alignment of flex items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemAlignment {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

/// Main-axis distribution of flex items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContentJustification {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlexProperties {
    pub direction: FlexDirection,
    pub align_items: ItemAlignment,
    pub justify_content: ContentJustification,
}

impl FlexProperties {
    pub fn row() -> Self {
        Self::default()
    }
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Self::default()
        }
    }
    pub fn align_items(mut self, a: ItemAlignment) -> Self {
        self.align_items = a;
        self
    }
    pub fn justify_content(mut self, j: ContentJustification) -> Self {
        self.justify_content = j;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ViewType {
    #[default]
    View,
    AbsoluteLayout,
    FlexLayout(FlexProperties),
    Text { text: String, font_size: f64 },
    Image { url: String },
    Video { url: String },
    VideoEmbed { url: String },
}

/// How a view lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutType {
    Absolute,
    Block,
    Flex {
        direction: FlexDirection,
        align_items: ItemAlignment,
        justify_content: ContentJustification,
    },
}

impl LayoutType {
    pub fn is_flex_row(&self) -> bool {
        matches!(
            self,
            LayoutType::Flex {
                direction: FlexDirection::Row,
                ..
            }
        )
    }
}

impl ViewType {
    pub fn layout_type(&self) -> LayoutType {
        match self {
            ViewType::AbsoluteLayout => LayoutType::Absolute,
            ViewType::FlexLayout(flex) => LayoutType::Flex {
                direction: flex.direction,
                align_items: flex.align_items,
                justify_content: flex.justify_content,
            },
            ViewType::View
            | ViewType::Text { .. }
            | ViewType::Image { .. }
            | ViewType::Video { .. }
            | ViewType::VideoEmbed { .. } => LayoutType::Block,
        }
    }
}

/// A node of a decoded document. Immutable once built; parents own their
/// children.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewProperties {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "view", default))]
    pub view_type: ViewType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleProperties,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: LayoutProperties,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<ViewProperties>,
}

impl ViewProperties {
    pub fn new(view_type: ViewType) -> Self {
        ViewProperties {
            id: None,
            view_type,
            style: StyleProperties::default(),
            layout: LayoutProperties::default(),
            children: vec![],
        }
    }
    pub fn view() -> Self {
        Self::new(ViewType::View)
    }
    pub fn absolute() -> Self {
        Self::new(ViewType::AbsoluteLayout)
    }
    pub fn flex(props: FlexProperties) -> Self {
        Self::new(ViewType::FlexLayout(props))
    }
    pub fn text(text: impl Into<String>, font_size: f64) -> Self {
        Self::new(ViewType::Text {
            text: text.into(),
            font_size,
        })
    }
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(ViewType::Image { url: url.into() })
    }
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
    pub fn layout(mut self, l: LayoutProperties) -> Self {
        self.layout = l;
        self
    }
    pub fn style(mut self, s: StyleProperties) -> Self {
        self.style = s;
        self
    }
    pub fn with_children(mut self, kids: Vec<ViewProperties>) -> Self {
        self.children = kids;
        self
    }
    pub fn child(mut self, kid: ViewProperties) -> Self {
        self.children.push(kid);
        self
    }

    pub fn layout_type(&self) -> LayoutType {
        self.view_type.layout_type()
    }
}
