//! Static region tree with named slots. Topology is fixed at construction; each tick
//! only replaces slot contents.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use thiserror::Error;

use crate::panel::Panel;
use crate::ui::PanelKind;

pub const HEADER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Fixed(u16),
    Weight(u16),
}

impl Size {
    fn constraint(self) -> Constraint {
        match self {
            Size::Fixed(n) => Constraint::Length(n),
            Size::Weight(w) => Constraint::Fill(w),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Split {
        name: String,
        direction: Direction,
        children: Vec<Region>,
        weights: Vec<Size>,
    },
    Slot {
        name: String,
        kind: PanelKind,
    },
}

impl Region {
    pub fn slot(kind: PanelKind) -> Self {
        Region::Slot {
            name: kind.slot_name().to_string(),
            kind,
        }
    }

    pub fn rows(name: &str, parts: Vec<(Size, Region)>) -> Self {
        Self::split(name, Direction::Vertical, parts)
    }

    pub fn columns(name: &str, parts: Vec<(Size, Region)>) -> Self {
        Self::split(name, Direction::Horizontal, parts)
    }

    fn split(name: &str, direction: Direction, parts: Vec<(Size, Region)>) -> Self {
        let (weights, children) = parts.into_iter().unzip();
        Region::Split {
            name: name.to_string(),
            direction,
            children,
            weights,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Region::Split { name, .. } | Region::Slot { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("region name '{0}' used more than once")]
    DuplicateName(String),
    #[error("no slot named '{0}'")]
    UnknownSlot(String),
    #[error("split '{name}' has {children} children but {weights} weights")]
    WeightMismatch {
        name: String,
        children: usize,
        weights: usize,
    },
    #[error("split '{0}' has no children")]
    EmptySplit(String),
    #[error("unknown layout '{0}' (expected classic, explorer or showcase)")]
    UnknownShape(String),
}

/// The historical dashboard arrangements. Only the tree differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutShape {
    /// 2-column top, 2-column bottom.
    Classic,
    /// 3-column top, full-width storage explorer row, 2-column processes row.
    Explorer,
    /// 3-column top, 3-column bottom with the live animation slot.
    #[default]
    Showcase,
}

impl FromStr for LayoutShape {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(LayoutShape::Classic),
            "explorer" => Ok(LayoutShape::Explorer),
            "showcase" => Ok(LayoutShape::Showcase),
            other => Err(LayoutError::UnknownShape(other.to_string())),
        }
    }
}

fn w(n: u16, r: Region) -> (Size, Region) {
    (Size::Weight(n), r)
}

impl LayoutShape {
    pub fn tree(self) -> Region {
        use PanelKind::*;
        let body = match self {
            LayoutShape::Classic => Region::rows(
                "body",
                vec![
                    w(
                        1,
                        Region::columns(
                            "top_row",
                            vec![w(1, Region::slot(SystemInfo)), w(1, Region::slot(Resources))],
                        ),
                    ),
                    w(
                        1,
                        Region::columns(
                            "bottom_row",
                            vec![w(1, Region::slot(CpuCores)), w(1, Region::slot(TopMemory))],
                        ),
                    ),
                ],
            ),
            LayoutShape::Explorer => Region::rows(
                "body",
                vec![
                    w(2, three_column_top()),
                    w(
                        2,
                        Region::columns("explorer_row", vec![w(1, Region::slot(Storage))]),
                    ),
                    w(
                        2,
                        Region::columns(
                            "bottom_row",
                            vec![w(1, Region::slot(TopMemory)), w(1, Region::slot(TopCpu))],
                        ),
                    ),
                ],
            ),
            LayoutShape::Showcase => Region::rows(
                "body",
                vec![
                    w(1, three_column_top()),
                    w(
                        1,
                        Region::columns(
                            "bottom_row",
                            vec![
                                w(2, Region::slot(Storage)),
                                w(2, Region::slot(TopMemory)),
                                w(1, Region::slot(Live)),
                            ],
                        ),
                    ),
                ],
            ),
        };
        Region::rows(
            "root",
            vec![
                (Size::Fixed(HEADER_HEIGHT), Region::slot(Header)),
                (Size::Weight(1), body),
            ],
        )
    }
}

fn three_column_top() -> Region {
    Region::columns(
        "top_row",
        vec![
            w(1, Region::slot(PanelKind::SystemInfo)),
            w(1, Region::slot(PanelKind::Resources)),
            w(1, Region::slot(PanelKind::CpuEqualizer)),
        ],
    )
}

/// Owns the region tree and the current content of each slot.
#[derive(Debug, Clone)]
pub struct Composer {
    root: Region,
    slots: Vec<(String, PanelKind)>,
    contents: HashMap<String, Panel>,
}

impl Composer {
    pub fn new(shape: LayoutShape) -> Result<Self, LayoutError> {
        Self::from_tree(shape.tree())
    }

    pub fn from_tree(root: Region) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        let mut slots = Vec::new();
        collect(&root, &mut seen, &mut slots)?;
        Ok(Self {
            root,
            slots,
            contents: HashMap::new(),
        })
    }

    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Slots in depth-first order.
    pub fn slots(&self) -> &[(String, PanelKind)] {
        &self.slots
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|(n, _)| n == name)
    }

    pub fn content(&self, name: &str) -> Option<&Panel> {
        self.contents.get(name)
    }

    pub fn update(&mut self, name: &str, panel: Panel) -> Result<(), LayoutError> {
        if !self.has_slot(name) {
            return Err(LayoutError::UnknownSlot(name.to_string()));
        }
        self.contents.insert(name.to_string(), panel);
        Ok(())
    }

    /// Replaces several slots at once; nothing changes unless every name resolves.
    pub fn apply(&mut self, batch: Vec<(String, Panel)>) -> Result<(), LayoutError> {
        if let Some((bad, _)) = batch.iter().find(|(n, _)| !self.has_slot(n)) {
            return Err(LayoutError::UnknownSlot(bad.clone()));
        }
        self.contents.extend(batch);
        Ok(())
    }

    /// Screen rectangle of every slot for a given terminal area.
    pub fn areas(&self, area: Rect) -> Vec<(&str, Rect)> {
        let mut out = Vec::with_capacity(self.slots.len());
        place(&self.root, area, &mut out);
        out
    }
}

fn collect(
    r: &Region,
    seen: &mut HashSet<String>,
    slots: &mut Vec<(String, PanelKind)>,
) -> Result<(), LayoutError> {
    if !seen.insert(r.name().to_string()) {
        return Err(LayoutError::DuplicateName(r.name().to_string()));
    }
    match r {
        Region::Slot { name, kind } => slots.push((name.clone(), *kind)),
        Region::Split {
            name,
            children,
            weights,
            ..
        } => {
            if children.is_empty() {
                return Err(LayoutError::EmptySplit(name.clone()));
            }
            if children.len() != weights.len() {
                return Err(LayoutError::WeightMismatch {
                    name: name.clone(),
                    children: children.len(),
                    weights: weights.len(),
                });
            }
            for c in children {
                collect(c, seen, slots)?;
            }
        }
    }
    Ok(())
}

fn place<'a>(r: &'a Region, area: Rect, out: &mut Vec<(&'a str, Rect)>) {
    match r {
        Region::Slot { name, .. } => out.push((name.as_str(), area)),
        Region::Split {
            direction,
            children,
            weights,
            ..
        } => {
            let chunks = Layout::default()
                .direction(*direction)
                .constraints(weights.iter().map(|s| s.constraint()))
                .split(area);
            for (c, rect) in children.iter().zip(chunks.iter()) {
                place(c, *rect, out);
            }
        }
    }
}
