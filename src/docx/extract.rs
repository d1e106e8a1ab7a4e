//! Body walk: paragraphs, runs, tables, hyperlinks, footnote references,
//! and images, projected into the document model.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    DocumentStructure, Footnote, Hyperlink, ImageRef, ListItem, OutlineEntry, Paragraph, Run,
    Table, TableCell, Toggle,
};
use crate::segment::build_sentence_placeholders;

use super::html::paragraph_fragment;
use super::package::OoxmlPackage;
use super::parts::{footnote_texts, NumberingMap, RelationshipMap};
use super::xml::{walk_elements, Element};
use super::DocxExtraction;

/// `Heading N` style names, case-insensitive.
static HEADING_STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Heading\s+(\d+)").unwrap());

/// Number formats that render an ordered marker. Deliberately loose: custom
/// symbolic formats fall through to unordered, and the alternation anchors
/// only its first branch, exactly as the heuristic has always behaved.
static ORDERED_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^decimal|lower|upper|roman").unwrap());

/// Extract the whole package into structure + previews.
pub fn extract_package(package: &OoxmlPackage) -> DocxExtraction {
    let rels = RelationshipMap::from_part(package.relationships.as_ref());
    let numbering = NumberingMap::from_part(package.numbering.as_ref());
    let footnote_map = footnote_texts(package.footnotes.as_ref());

    let mut structure = DocumentStructure::default();
    let mut text_lines: Vec<String> = Vec::new();
    let mut html_parts: Vec<String> = Vec::new();

    if let Some(body) = package.document.child("body") {
        structure.images = collect_images(body, &rels);
        structure.tables = body.children_named("tbl").map(extract_table).collect();

        for (index, p) in body.children_named("p").enumerate() {
            let runs = runs_from_paragraph(p);
            let text: String = runs.iter().map(|r| r.text.as_str()).collect();
            let text = text.trim().to_string();
            if text.is_empty() {
                // Dropped, but still counted: outline indices are raw body
                // paragraph positions.
                continue;
            }

            let p_pr = p.child("pPr");
            let style_name = p_pr
                .and_then(|pr| pr.child("pStyle"))
                .and_then(|s| s.val())
                .map(String::from);
            let level = heading_level(p_pr, style_name.as_deref());
            if let Some(level) = level {
                structure.outline.push(OutlineEntry {
                    level,
                    text: text.clone(),
                    index,
                });
            }

            if let Some(item) = list_item(p_pr, &numbering, &text) {
                structure.lists.push(item);
            }

            for link in hyperlinks(p, &rels, &text) {
                structure.links.push(link);
            }
            for link in footnote_links(p, &footnote_map) {
                structure.links.push(link);
            }

            let placeholder_spans = build_sentence_placeholders(&text);
            text_lines.push(text.clone());
            html_parts.push(paragraph_fragment(level, &runs));
            structure.paragraphs.push(Paragraph {
                level,
                style_name,
                text,
                runs,
                placeholder_spans,
            });
        }
    }

    structure.footnotes = assemble_footnotes(footnote_map);

    DocxExtraction {
        structure,
        preview_text: text_lines.join("\n"),
        preview_html: html_parts.concat(),
    }
}

/// Plain text of a paragraph-like element's direct runs; `br` becomes `\n`.
pub(crate) fn text_from_runs(parent: &Element) -> String {
    let mut out = String::new();
    for run in parent.children_named("r") {
        if let Some(t) = run.child("t") {
            out.push_str(&t.text());
        }
        if run.child("br").is_some() {
            out.push('\n');
        }
    }
    out
}

/// Build styled runs from a paragraph's direct `r` children.
fn runs_from_paragraph(p: &Element) -> Vec<Run> {
    p.children_named("r").map(run_from_element).collect()
}

fn run_from_element(r: &Element) -> Run {
    if r.child("br").is_some() {
        return Run::line_break();
    }

    let text = r.child("t").map(|t| t.text()).unwrap_or_default();
    let Some(r_pr) = r.child("rPr") else {
        return Run::text(text);
    };

    let color = r_pr
        .child("color")
        .and_then(|c| c.val())
        .filter(|v| !v.eq_ignore_ascii_case("auto"))
        .map(|v| format!("#{}", v.trim_start_matches('#')));

    // Fallback happens at the value level: a sz element without a val still
    // defers to szCs.
    let half_points = r_pr
        .child("sz")
        .and_then(|s| s.val())
        .or_else(|| r_pr.child("szCs").and_then(|s| s.val()))
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|&v| v > 0.0);

    let font = r_pr.child("rFonts").and_then(|f| {
        f.attr("eastAsia")
            .or_else(|| f.attr("ascii"))
            .or_else(|| f.attr("hAnsi"))
            .map(String::from)
    });

    Run {
        text,
        is_line_break: false,
        bold: flag_toggle(r_pr.child("b")),
        italic: flag_toggle(r_pr.child("i")),
        underline: underline_toggle(r_pr.child("u")),
        color,
        size_pt: half_points.map(|v| v / 2.0),
        font,
    }
}

/// Boolean toggle property: absent is unset, `val="0"` is off, else on.
fn flag_toggle(property: Option<&Element>) -> Toggle {
    match property {
        None => Toggle::Unset,
        Some(e) => Toggle::from(e.val() != Some("0")),
    }
}

/// Underline carries its style in `val`; only an explicit style that is
/// neither `none` nor `0` counts as on.
fn underline_toggle(property: Option<&Element>) -> Toggle {
    match property {
        None => Toggle::Unset,
        Some(e) => match e.val() {
            Some(v) if v != "none" && v != "0" => Toggle::On,
            _ => Toggle::Off,
        },
    }
}

/// Heading level: explicit `Heading N` style wins over `outlineLvl + 1`.
/// Levels outside 1-6 do not count as headings.
fn heading_level(p_pr: Option<&Element>, style_name: Option<&str>) -> Option<u8> {
    let raw = if let Some(captures) = style_name.and_then(|s| HEADING_STYLE.captures(s)) {
        captures[1].parse::<u32>().ok()
    } else {
        p_pr.and_then(|pr| pr.child("outlineLvl"))
            .and_then(|o| o.val())
            .and_then(|v| v.parse::<u32>().ok())
            .map(|v| v + 1)
    };
    raw.filter(|&l| (1..=6).contains(&l)).map(|l| l as u8)
}

/// List item from `numPr`, resolved through the numbering definitions.
fn list_item(p_pr: Option<&Element>, numbering: &NumberingMap, text: &str) -> Option<ListItem> {
    let num_pr = p_pr?.child("numPr")?;
    let num_id = num_pr.child("numId")?.val().unwrap_or_default().to_string();
    let ilvl = num_pr
        .child("ilvl")
        .and_then(|i| i.val())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let format = numbering
        .level(&num_id, ilvl)
        .and_then(|l| l.format.as_deref())
        .unwrap_or("");
    Some(ListItem {
        level: ilvl,
        ordered: ORDERED_FORMAT.is_match(format),
        text: text.to_string(),
        num_id,
    })
}

/// Hyperlinks with resolvable targets; unresolved ids are dropped.
fn hyperlinks(p: &Element, rels: &RelationshipMap, paragraph_text: &str) -> Vec<Hyperlink> {
    p.children_named("hyperlink")
        .filter_map(|h| {
            let rid = h.attr("id")?;
            let href = rels.resolve(rid)?.to_string();
            let own_text = text_from_runs(h);
            let text = if own_text.is_empty() {
                paragraph_text.to_string()
            } else {
                own_text
            };
            Some(Hyperlink { text, href })
        })
        .collect()
}

/// Pseudo-links for footnote references that resolve to actual text.
/// Separator footnotes carry no text and produce no link.
fn footnote_links(
    p: &Element,
    footnote_map: &std::collections::HashMap<String, String>,
) -> Vec<Hyperlink> {
    p.children_named("r")
        .filter_map(|r| r.child("footnoteReference"))
        .filter_map(|fref| fref.attr("id"))
        .filter(|id| footnote_map.get(*id).is_some_and(|t| !t.is_empty()))
        .map(|id| Hyperlink {
            text: format!("footnote:{id}"),
            href: format!("#footnote-{id}"),
        })
        .collect()
}

fn assemble_footnotes(map: std::collections::HashMap<String, String>) -> Vec<Footnote> {
    let mut footnotes: Vec<Footnote> = map
        .into_iter()
        .filter_map(|(id, text)| Some(Footnote { id: id.parse().ok()?, text }))
        .collect();
    footnotes.sort_by_key(|f| f.id);
    footnotes
}

/// Reconstruct one table, replaying vertical-merge reservations to keep the
/// effective column index honest.
fn extract_table(tbl: &Element) -> Table {
    let mut rows: Vec<Vec<TableCell>> = Vec::new();
    // Rows still reserved below a vMerge start, per effective column.
    let mut pending: Vec<u32> = Vec::new();

    for tr in tbl.children_named("tr") {
        let mut cells: Vec<TableCell> = Vec::new();
        let mut col = 0usize;
        for tc in tr.children_named("tc") {
            while pending.get(col).copied().unwrap_or(0) > 0 {
                pending[col] -= 1;
                col += 1;
            }

            let tc_pr = tc.child("tcPr");
            let grid_span = tc_pr
                .and_then(|pr| pr.child("gridSpan"))
                .and_then(|g| g.val())
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&v| v > 1);
            let v_merge = tc_pr.and_then(|pr| pr.child("vMerge"));
            let advance = grid_span.unwrap_or(1) as usize;

            // A continuation cell fills the slot reserved above it and
            // contributes no new cell.
            if v_merge.and_then(|m| m.val()) == Some("continue") {
                col += advance;
                continue;
            }

            let text: String = {
                let parts: Vec<String> = tc
                    .children_named("p")
                    .map(text_from_runs)
                    .filter(|t| !t.is_empty())
                    .collect();
                parts.join("\n")
            };

            let mut cell = TableCell {
                text,
                colspan: grid_span,
                rowspan: None,
            };
            if v_merge.is_some() {
                cell.rowspan = Some(1);
                if pending.len() <= col {
                    pending.resize(col + 1, 0);
                }
                pending[col] = pending[col].max(1);
            }
            cells.push(cell);
            col += advance;
        }
        rows.push(cells);
    }
    Table { rows }
}

/// Collect every `blip@embed` anywhere under the body, resolving each
/// occurrence through the relationship map. Drawings nest at arbitrary
/// depth, so this walks the full tree rather than paragraph children.
fn collect_images(body: &Element, rels: &RelationshipMap) -> Vec<ImageRef> {
    let mut rids: Vec<&str> = Vec::new();
    walk_elements(body, &mut |e| {
        if e.name == "blip" {
            if let Some(embed) = e.attr("embed") {
                rids.push(embed);
            }
        }
    });
    rids.into_iter()
        .filter_map(|rid| {
            let target = rels.resolve(rid)?;
            Some(ImageRef {
                rid: rid.to_string(),
                target: target.to_string(),
            })
        })
        .collect()
}
