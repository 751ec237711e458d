#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Results,
    Chart,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Results, TabId::Chart];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Results => "Results",
            TabId::Chart => "Chart",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Results => 0,
            TabId::Chart => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
