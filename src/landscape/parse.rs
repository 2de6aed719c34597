//! Pure parsing steps for the landscape text format.
//!
//! The format has three `#`-headed sections. `landscape` holds one
//! whitespace-delimited token per cell (`1`-`4` for a bush marker, `.` or
//! `0` for an empty cell); `tiles` holds `NAME=COUNT` declarations for the
//! pool; `targets` holds one line per region — the region index followed by
//! the target visible count for each category.

use crate::{
    error::FormatError,
    landscape::{CategoryCounts, CATEGORY_COUNT},
    tiles::TilePool,
};

/// A non-empty input line paired with its 1-based line number.
pub(crate) type Line<'a> = (usize, &'a str);

#[derive(Debug)]
pub(crate) struct Sections<'a> {
    pub landscape: Vec<Line<'a>>,
    pub tiles: Vec<Line<'a>>,
    pub targets: Vec<Line<'a>>,
}

#[derive(Clone, Copy)]
enum Current {
    Landscape,
    Tiles,
    Targets,
}

/// Splits a line into whitespace- or tab-delimited tokens.
pub(crate) fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Groups the input lines under their section headers.
pub(crate) fn parse_sections(text: &str) -> Result<Sections<'_>, FormatError> {
    let mut sections = Sections {
        landscape: Vec::new(),
        tiles: Vec::new(),
        targets: Vec::new(),
    };
    let mut seen = [false; 3];
    let mut current = None;

    for (offset, raw) in text.lines().enumerate() {
        let line_no = offset + 1;
        let line = raw.trim_end_matches('\r').trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('#') {
            let name = header.trim().split_whitespace().next().unwrap_or("");
            let (section, slot) = match name {
                "landscape" => (Current::Landscape, 0),
                "tiles" => (Current::Tiles, 1),
                "targets" => (Current::Targets, 2),
                _ => {
                    return Err(FormatError::UnknownSection {
                        line: line_no,
                        token: name.to_string(),
                    })
                }
            };
            current = Some(section);
            seen[slot] = true;
            continue;
        }

        match current {
            Some(Current::Landscape) => sections.landscape.push((line_no, line)),
            Some(Current::Tiles) => sections.tiles.push((line_no, line)),
            Some(Current::Targets) => sections.targets.push((line_no, line)),
            None => {
                return Err(FormatError::BadToken {
                    line: line_no,
                    token: line.split_whitespace().next().unwrap_or("").to_string(),
                })
            }
        }
    }

    for (slot, name) in ["landscape", "tiles", "targets"].into_iter().enumerate() {
        if !seen[slot] {
            return Err(FormatError::MissingSection(name));
        }
    }

    Ok(sections)
}

/// Converts the landscape rows into marker grids; `None` is an empty cell.
pub(crate) fn parse_landscape(lines: &[Line<'_>]) -> Result<Vec<Vec<Option<u8>>>, FormatError> {
    let mut rows = Vec::with_capacity(lines.len());
    for &(line_no, line) in lines {
        let mut row = Vec::new();
        for token in tokenize(line) {
            row.push(parse_marker(line_no, token)?);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn parse_marker(line: usize, token: &str) -> Result<Option<u8>, FormatError> {
    if token == "." || token == "0" {
        return Ok(None);
    }
    match token.parse::<u8>() {
        Ok(category) if (1..=CATEGORY_COUNT as u8).contains(&category) => Ok(Some(category)),
        Ok(_) => Err(FormatError::UnknownCategory {
            line,
            token: token.to_string(),
        }),
        Err(_) => Err(FormatError::BadToken {
            line,
            token: token.to_string(),
        }),
    }
}

/// Reads the `NAME=COUNT` pool declarations. Undeclared kinds default to
/// zero; the declared total is checked against the region count later.
pub(crate) fn parse_tiles(lines: &[Line<'_>]) -> Result<TilePool, FormatError> {
    let mut counts: [Option<u16>; 3] = [None; 3];
    for &(line_no, line) in lines {
        for token in tokenize(line) {
            let Some((name, value)) = token.split_once('=') else {
                return Err(FormatError::BadToken {
                    line: line_no,
                    token: token.to_string(),
                });
            };
            let slot = match name {
                "FULL_BLOCK" => 0,
                "OUTER_BOUNDARY" => 1,
                "EL_SHAPE" => 2,
                _ => {
                    return Err(FormatError::BadToken {
                        line: line_no,
                        token: name.to_string(),
                    })
                }
            };
            let count: u16 = value.parse().map_err(|_| FormatError::BadToken {
                line: line_no,
                token: token.to_string(),
            })?;
            if counts[slot].replace(count).is_some() {
                return Err(FormatError::DuplicateTile {
                    line: line_no,
                    token: name.to_string(),
                });
            }
        }
    }
    Ok(TilePool::new(
        counts[0].unwrap_or(0),
        counts[1].unwrap_or(0),
        counts[2].unwrap_or(0),
    ))
}

/// Reads one target line per region, in any order, each giving the region
/// index followed by `CATEGORY_COUNT` visible counts.
pub(crate) fn parse_targets(
    lines: &[Line<'_>],
    region_count: usize,
) -> Result<Vec<CategoryCounts>, FormatError> {
    let mut targets: Vec<Option<CategoryCounts>> = vec![None; region_count];
    for &(line_no, line) in lines {
        let mut tokens = tokenize(line);
        let Some(index_token) = tokens.next() else {
            continue;
        };
        let region: usize = index_token.parse().map_err(|_| FormatError::BadToken {
            line: line_no,
            token: index_token.to_string(),
        })?;
        if region >= region_count {
            return Err(FormatError::UnknownRegion {
                line: line_no,
                region,
            });
        }

        let mut counts: CategoryCounts = [0; CATEGORY_COUNT];
        for slot in counts.iter_mut() {
            let Some(token) = tokens.next() else {
                return Err(FormatError::ShortTargets {
                    line: line_no,
                    region,
                });
            };
            *slot = token.parse().map_err(|_| FormatError::BadToken {
                line: line_no,
                token: token.to_string(),
            })?;
        }
        if let Some(extra) = tokens.next() {
            return Err(FormatError::BadToken {
                line: line_no,
                token: extra.to_string(),
            });
        }

        if targets[region].replace(counts).is_some() {
            return Err(FormatError::DuplicateTarget {
                line: line_no,
                region,
            });
        }
    }

    targets
        .into_iter()
        .enumerate()
        .map(|(region, target)| target.ok_or(FormatError::MissingTarget(region)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tiles::TileKind;

    #[test]
    fn sections_are_split_by_header() {
        let text = "# landscape\n1 .\n# tiles\nFULL_BLOCK=1\n# targets\n0 1 0 0 0\n";
        let sections = parse_sections(text).unwrap();
        assert_eq!(sections.landscape, vec![(2, "1 .")]);
        assert_eq!(sections.tiles, vec![(4, "FULL_BLOCK=1")]);
        assert_eq!(sections.targets, vec![(6, "0 1 0 0 0")]);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = parse_sections("# shrubs\n").unwrap_err();
        assert!(matches!(err, FormatError::UnknownSection { line: 1, .. }));
    }

    #[test]
    fn content_before_a_header_is_rejected() {
        let err = parse_sections("1 2 3\n# landscape\n").unwrap_err();
        assert!(matches!(err, FormatError::BadToken { line: 1, .. }));
    }

    #[test]
    fn missing_section_is_reported_by_name() {
        let err = parse_sections("# landscape\n# tiles\n").unwrap_err();
        assert!(matches!(err, FormatError::MissingSection("targets")));
    }

    #[test]
    fn markers_accept_dot_and_zero_as_empty() {
        let rows = parse_landscape(&[(1, "1 . 0 4")]).unwrap();
        assert_eq!(rows, vec![vec![Some(1), None, None, Some(4)]]);
    }

    #[test]
    fn out_of_range_marker_is_a_category_error() {
        let err = parse_landscape(&[(3, "1 7")]).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnknownCategory { line: 3, ref token } if token == "7"
        ));
    }

    #[test]
    fn non_numeric_marker_is_a_bad_token() {
        let err = parse_landscape(&[(2, "x")]).unwrap_err();
        assert!(matches!(err, FormatError::BadToken { line: 2, .. }));
    }

    #[test]
    fn tile_counts_parse_in_any_order() {
        let pool = parse_tiles(&[(1, "EL_SHAPE=2 FULL_BLOCK=1"), (2, "OUTER_BOUNDARY=3")]).unwrap();
        assert_eq!(pool.remaining(TileKind::Full), 1);
        assert_eq!(pool.remaining(TileKind::Outer), 3);
        assert_eq!(pool.remaining(TileKind::El), 2);
    }

    #[test]
    fn duplicate_tile_kind_is_rejected() {
        let err = parse_tiles(&[(1, "EL_SHAPE=2 EL_SHAPE=1")]).unwrap_err();
        assert!(matches!(err, FormatError::DuplicateTile { line: 1, .. }));
    }

    #[test]
    fn targets_may_arrive_out_of_order() {
        let targets = parse_targets(&[(1, "1 0 0 0 1"), (2, "0 2 0 0 0")], 2).unwrap();
        assert_eq!(targets, vec![[2, 0, 0, 0], [0, 0, 0, 1]]);
    }

    #[test]
    fn short_target_line_is_rejected() {
        let err = parse_targets(&[(1, "0 1 2")], 1).unwrap_err();
        assert!(matches!(
            err,
            FormatError::ShortTargets { line: 1, region: 0 }
        ));
    }

    #[test]
    fn duplicate_and_missing_targets_are_rejected() {
        let err = parse_targets(&[(1, "0 0 0 0 0"), (2, "0 1 0 0 0")], 2).unwrap_err();
        assert!(matches!(
            err,
            FormatError::DuplicateTarget { line: 2, region: 0 }
        ));

        let err = parse_targets(&[(1, "0 0 0 0 0")], 2).unwrap_err();
        assert!(matches!(err, FormatError::MissingTarget(1)));
    }

    #[test]
    fn target_index_out_of_range_is_rejected() {
        let err = parse_targets(&[(1, "5 0 0 0 0")], 2).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnknownRegion { line: 1, region: 5 }
        ));
    }
}
