/// Kinds of block the inserter offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
    Quote,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::List,
        BlockKind::Quote,
        BlockKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Heading => "Heading",
            BlockKind::List => "List",
            BlockKind::Quote => "Quote",
            BlockKind::Image => "Image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            content: String::new(),
        }
    }
}

/// A flat list of content blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Inserts at `index`, which may equal `len()` to append.
    pub fn insert_block(&mut self, index: usize, block: Block) -> bool {
        if index > self.blocks.len() {
            return false;
        }
        self.blocks.insert(index, block);
        true
    }

    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }
}
