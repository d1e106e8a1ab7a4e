//! Relationship, numbering, and footnote maps, built once per package.

use std::collections::HashMap;

use super::xml::Element;

/// Relationship id → target path, scoped to one package.
#[derive(Debug, Default)]
pub struct RelationshipMap {
    targets: HashMap<String, String>,
}

impl RelationshipMap {
    /// Build from the parsed relationships part, empty when absent.
    pub fn from_part(part: Option<&Element>) -> Self {
        let mut targets = HashMap::new();
        if let Some(root) = part {
            for rel in root.children_named("Relationship") {
                if let (Some(id), Some(target)) = (rel.attr("Id"), rel.attr("Target")) {
                    if !id.is_empty() {
                        targets.insert(id.to_string(), target.to_string());
                    }
                }
            }
        }
        Self { targets }
    }

    /// Resolve a relationship id to its target.
    pub fn resolve(&self, rid: &str) -> Option<&str> {
        self.targets.get(rid).map(String::as_str)
    }

    /// Number of known relationships.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Rendering format for one numbering level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelFormat {
    /// `numFmt` value (e.g. `decimal`, `bullet`, `lowerRoman`).
    pub format: Option<String>,

    /// `lvlText` template (e.g. `%1.`).
    pub text: Option<String>,
}

/// One concrete numbering definition.
#[derive(Debug, Clone, Default)]
pub struct NumberingDef {
    /// The abstract definition this `numId` points at.
    pub abstract_num_id: String,

    /// Per-`ilvl` formats. Empty when the abstract id did not resolve.
    pub levels: HashMap<u32, LevelFormat>,
}

/// `numId` → numbering definition, resolved through `abstractNumId`.
#[derive(Debug, Default)]
pub struct NumberingMap {
    defs: HashMap<String, NumberingDef>,
}

impl NumberingMap {
    /// Build from the parsed numbering part, empty when absent.
    ///
    /// A `num` whose `abstractNumId` does not match any `abstractNum`
    /// degrades to an empty level map rather than being dropped.
    pub fn from_part(part: Option<&Element>) -> Self {
        let mut defs = HashMap::new();
        let Some(root) = part else {
            return Self { defs };
        };

        let mut abstract_levels: HashMap<String, HashMap<u32, LevelFormat>> = HashMap::new();
        for abstract_num in root.children_named("abstractNum") {
            let Some(aid) = abstract_num.attr("abstractNumId") else {
                continue;
            };
            let mut levels = HashMap::new();
            for lvl in abstract_num.children_named("lvl") {
                let ilvl = lvl.attr("ilvl").and_then(|v| v.parse().ok()).unwrap_or(0);
                levels.insert(
                    ilvl,
                    LevelFormat {
                        format: lvl.child("numFmt").and_then(|n| n.val()).map(String::from),
                        text: lvl.child("lvlText").and_then(|n| n.val()).map(String::from),
                    },
                );
            }
            abstract_levels.insert(aid.to_string(), levels);
        }

        for num in root.children_named("num") {
            let Some(num_id) = num.attr("numId").filter(|id| !id.is_empty()) else {
                continue;
            };
            let abstract_num_id = num
                .child("abstractNumId")
                .and_then(|n| n.val())
                .unwrap_or_default()
                .to_string();
            let levels = abstract_levels
                .get(&abstract_num_id)
                .cloned()
                .unwrap_or_default();
            defs.insert(
                num_id.to_string(),
                NumberingDef {
                    abstract_num_id,
                    levels,
                },
            );
        }
        Self { defs }
    }

    /// Look up the format of one level of one definition.
    pub fn level(&self, num_id: &str, ilvl: u32) -> Option<&LevelFormat> {
        self.defs.get(num_id)?.levels.get(&ilvl)
    }

    /// Look up a whole definition.
    pub fn get(&self, num_id: &str) -> Option<&NumberingDef> {
        self.defs.get(num_id)
    }
}

/// Footnote id → newline-joined body text, built once per package.
pub fn footnote_texts(part: Option<&Element>) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let Some(root) = part else {
        return map;
    };
    for footnote in root.children_named("footnote") {
        let Some(id) = footnote.attr("id").filter(|id| !id.is_empty()) else {
            continue;
        };
        let text: Vec<String> = footnote
            .children_named("p")
            .map(super::extract::text_from_runs)
            .filter(|t| !t.is_empty())
            .collect();
        map.insert(id.to_string(), text.join("\n"));
    }
    map
}
