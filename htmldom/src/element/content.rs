#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Text content, escaped on render.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }
}
