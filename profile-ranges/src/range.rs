use std::path::Path;

use smallvec::SmallVec;

use crate::RangeError;

/// A named interval between two markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    name: String,
    start_marker: String,
    end_marker: String,
}

impl Range {
    pub fn new(
        name: impl Into<String>,
        start_marker: impl Into<String>,
        end_marker: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }
}

/// The ranges of a definition file, in file order.
///
/// The table only holds definitions. Values matched for a scenario are kept by the scanner, so a
/// table can be shared by every scenario of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Vec<Range>,
}

impl RangeTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RangeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RangeError::Io {
            path: path.to_owned(),
            source,
        })?;
        let table = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            ranges = table.len(),
            "loaded range definitions"
        );
        Ok(table)
    }

    /// Parses `name:startMarker:endMarker` lines.
    ///
    /// Blank lines and lines starting with `#` are ignored. Any other line must have exactly three
    /// fields, otherwise parsing stops with [RangeError::Malformed]. Name and markers must not be
    /// empty.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let mut ranges = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim_start().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let fields: SmallVec<[&str; 3]> = line.split(':').collect();
            let [name, start_marker, end_marker] = fields[..] else {
                return Err(RangeError::Malformed {
                    line: index + 1,
                    fields: fields.len(),
                    text: line.to_owned(),
                });
            };
            if name.is_empty() {
                return Err(RangeError::EmptyName { line: index + 1 });
            }
            // An empty marker is a substring of every line.
            if start_marker.is_empty() || end_marker.is_empty() {
                return Err(RangeError::EmptyMarker { line: index + 1 });
            }

            ranges.push(Range::new(name, start_marker, end_marker));
        }

        Ok(Self { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Range> {
        self.ranges.get(index)
    }
}

impl From<Vec<Range>> for RangeTable {
    fn from(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[test]
fn test_parse_keeps_file_order() {
    let table = RangeTable::parse("startup:BEGIN:END\nload:LOAD_START:LOAD_DONE\n").unwrap();
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        [
            &Range::new("startup", "BEGIN", "END"),
            &Range::new("load", "LOAD_START", "LOAD_DONE"),
        ]
    );
}

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let table = RangeTable::parse("# launch ranges\n\nstartup:BEGIN:END\r\n   \n").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0).unwrap().end_marker(), "END");
}

#[test]
fn test_parse_strips_trailing_whitespace_only() {
    let table = RangeTable::parse("startup: BEGIN:END  \n").unwrap();
    let range = table.get(0).unwrap();
    assert_eq!(range.start_marker(), " BEGIN");
    assert_eq!(range.end_marker(), "END");
}

#[test]
fn test_parse_rejects_wrong_field_count() {
    match RangeTable::parse("startup:BEGIN:END\nbroken:BEGIN\n") {
        Err(RangeError::Malformed { line, fields, text }) => {
            assert_eq!(line, 2);
            assert_eq!(fields, 2);
            assert_eq!(text, "broken:BEGIN");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        RangeTable::parse("a:b:c:d"),
        Err(RangeError::Malformed { line: 1, fields: 4, .. })
    ));
}

#[test]
fn test_parse_rejects_empty_name() {
    assert!(matches!(
        RangeTable::parse("\n:BEGIN:END"),
        Err(RangeError::EmptyName { line: 2 })
    ));
}

#[test]
fn test_parse_rejects_empty_marker() {
    assert!(matches!(
        RangeTable::parse("startup:BEGIN:END\nr::END"),
        Err(RangeError::EmptyMarker { line: 2 })
    ));
    assert!(matches!(
        RangeTable::parse("r:BEGIN:"),
        Err(RangeError::EmptyMarker { line: 1 })
    ));
}

#[test]
fn test_from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges");
    match RangeTable::from_path(&path) {
        Err(RangeError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
