use std::fmt;

use crate::data_structures::block::Block;

/// Cosmetic label picked once per generation pass.
///
/// The label is shown to the user but does not feed into any generation rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Crystalline,
    Brutalist,
    Organic,
    Glitch,
    Monolith,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Crystalline,
        Style::Brutalist,
        Style::Organic,
        Style::Glitch,
        Style::Monolith,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Style::Crystalline => "Crystalline",
            Style::Brutalist => "Brutalist",
            Style::Organic => "Organic",
            Style::Glitch => "Glitch",
            Style::Monolith => "Monolith",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The output of one generation pass: body blocks followed by the topper cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    blocks: Vec<Block>,
    style: Style,
    seed: u64,
}

impl Scene {
    pub fn new(blocks: Vec<Block>, style: Style, seed: u64) -> Self {
        Self {
            blocks,
            style,
            seed,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The seed the pass was run with. Feeding it to
    /// [`generate_from_seed`](crate::generator::generate_from_seed) reproduces this scene.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn body(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.is_topper())
    }

    pub fn toppers(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_topper())
    }
}
